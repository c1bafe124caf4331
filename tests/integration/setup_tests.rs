//! End-to-end tests: fetch, edit, serialize, submit and verify

use league_setup::client::SubmissionError;
use league_setup::config::{ClientConfig, Config, LeagueConfig, RemoteConfig, SessionConfig};
use league_setup::form::{CONFIG_CHANGED_FIELD, DIVISIONS_FIELD, EDITED_PERIOD_FIELD, MATCHUPS_FIELD};
use league_setup::{
    serialize, FormPayload, MatchupPair, MutationError, SetupClient, SetupError, StaticSession,
};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LEAGUE_ID: &str = "abc123";
const COOKIE: &str = "FX_RM=session-token";
const SETUP_PATH: &str = "/newui/fantasy/createLeague.go";
const FIXTURE: &str = include_str!("../fixtures/league_setup.html");

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str) -> Config {
    Config {
        league: LeagueConfig {
            league_id: LEAGUE_ID.to_string(),
        },
        remote: RemoteConfig {
            base_url: base_url.to_string(),
        },
        client: ClientConfig {
            user_agent: "league-setup-tests/1.0".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 5,
        },
        session: SessionConfig::default(),
    }
}

fn create_client(mock_server: &MockServer) -> SetupClient<StaticSession> {
    let config = create_test_config(&mock_server.uri());
    SetupClient::new(&config, StaticSession::new(COOKIE)).expect("Failed to build client")
}

async fn mount_setup_page(mock_server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path(SETUP_PATH))
        .and(query_param("goto", "1"))
        .and(query_param("leagueId", LEAGUE_ID))
        .and(header("cookie", COOKIE))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(mock_server)
        .await;
}

async fn mount_submit(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(SETUP_PATH))
        .and(query_param("leagueId", LEAGUE_ID))
        .and(header("cookie", COOKIE))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(response)
        .expect(1)
        .mount(mock_server)
        .await;
}

/// Body of the single POST the mock server received
async fn submitted_payload(mock_server: &MockServer) -> FormPayload {
    let requests = mock_server
        .received_requests()
        .await
        .expect("Request recording is enabled");
    let post = requests
        .iter()
        .find(|request| request.method.to_string() == "POST")
        .expect("A submission was sent");
    FormPayload::decode(&String::from_utf8_lossy(&post.body))
}

#[tokio::test]
async fn test_fetch_snapshot_from_fixture() {
    let mock_server = MockServer::start().await;
    mount_setup_page(&mock_server, FIXTURE.to_string()).await;

    let snapshot = create_client(&mock_server)
        .fetch_snapshot()
        .await
        .expect("Snapshot should load");

    let team_ids: Vec<_> = snapshot.teams().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(team_ids, vec!["tA1", "tB2", "tC3", "tD4"]);

    let lions = snapshot.team("tA1").unwrap();
    assert_eq!(lions.owners.len(), 2);
    assert_eq!(lions.owners[1].user_id, "NULL_2");
    assert_eq!(snapshot.team("tC3").unwrap().owners[0].user_id, "NULL_0");
    assert_eq!(snapshot.team("tD4").unwrap().owners[0].user_id, "NULL_1");

    let divisions: Vec<_> = snapshot
        .divisions()
        .iter()
        .map(|d| (d.id.as_str(), d.team_ids.len()))
        .collect();
    assert_eq!(divisions, vec![("d1east", 2), ("d2west", 2), ("d3empty", 0)]);

    assert_eq!(snapshot.sorted_periods(), vec![1, 2, 3, 4, 10]);
    assert_eq!(
        snapshot.period(10).unwrap(),
        &[MatchupPair::new("tB2", "tA1"), MatchupPair::bye("tD4")]
    );

    let state = snapshot.form_state();
    assert_eq!(
        state.hidden_fields.keys().map(String::as_str).collect::<Vec<_>>(),
        vec![
            "leagueId",
            "sportId",
            "h2hConfigChangesMade",
            "numHeadToHeadGames",
            "scoringPeriodType",
            "useDivisions",
            "startDate",
            "endDate",
        ]
    );
    assert!(!state.hidden_fields.contains_key("teamIdList"));
    assert!(!state.hidden_fields.contains_key("publicLeague"));
    assert_eq!(
        state.checkbox_fields.get("_allowPlayoffMatchupEdits").map(String::as_str),
        Some("on")
    );
    assert_eq!(
        state.select_fields.get("lineupChangePeriod").map(String::as_str),
        Some("DAILY")
    );
    assert_eq!(
        state.select_fields.get("playoffTeams").map(String::as_str),
        Some("6")
    );
    assert!(!state.select_fields.contains_key("draftType"));
    assert_eq!(state.owner_email_fields.len(), 3);
    assert!(state
        .owner_email_fields
        .contains_key("teamOwnerEmail,cats@example.com,tC3,NULL_0"));
}

#[tokio::test]
async fn test_fetch_login_redirect_is_unexpected_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SETUP_PATH))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/login"))
        .mount(&mock_server)
        .await;

    let result = create_client(&mock_server).fetch_snapshot().await;
    assert!(matches!(
        result,
        Err(SetupError::UnexpectedStatus { status: 302, .. })
    ));
}

#[tokio::test]
async fn test_fetch_non_setup_page_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount_setup_page(
        &mock_server,
        "<html><body><h1>Please log in</h1></body></html>".to_string(),
    )
    .await;

    let result = create_client(&mock_server).fetch_snapshot().await;
    assert!(matches!(result, Err(SetupError::Parse(_))));
}

#[tokio::test]
async fn test_set_period_matchups_submits_full_configuration() {
    let mock_server = MockServer::start().await;
    mount_setup_page(&mock_server, FIXTURE.to_string()).await;
    mount_submit(
        &mock_server,
        ResponseTemplate::new(302).insert_header("location", "/newui/fantasy/leagueHome.go"),
    )
    .await;

    let client = create_client(&mock_server);
    let snapshot = client.fetch_snapshot().await.unwrap();
    let pairs = vec![MatchupPair::new("tC3", "tB2"), MatchupPair::bye("tA1")];

    let edited = client
        .set_period_matchups(&snapshot, 3, pairs.clone())
        .await
        .expect("Submission should succeed");

    assert_eq!(edited.period(3), Some(pairs.as_slice()));
    assert_eq!(
        snapshot.period(3).unwrap(),
        &[MatchupPair::new("tA1", "tD4"), MatchupPair::new("tB2", "tC3")]
    );

    let payload = submitted_payload(&mock_server).await;
    assert_eq!(payload.get(CONFIG_CHANGED_FIELD), Some("y"));
    assert_eq!(payload.get(EDITED_PERIOD_FIELD), Some("3"));
    assert_eq!(payload.get("leagueId"), Some(LEAGUE_ID));
    assert_eq!(payload.get("startDate"), Some("2026-03-26"));
    assert_eq!(payload.get("teamName_tD4"), Some("Dogs"));
    assert_eq!(payload.get("divisionName_d3empty"), Some("Expansion"));
    assert_eq!(
        payload.get_all(DIVISIONS_FIELD),
        &["d1east=tA1|tB2".to_string(), "d2west=tC3|tD4".to_string()]
    );
    assert_eq!(
        payload.get_all(MATCHUPS_FIELD),
        &[
            "1|tA1_tB2|tC3_tD4".to_string(),
            "2|tA1_tC3|tB2_tD4".to_string(),
            "3|tC3_tB2|tA1_-1".to_string(),
            "4|tD4_tA1|tC3_-1".to_string(),
            "10|tB2_tA1|tD4_-1".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_submitted_body_matches_serialized_payload() {
    let mock_server = MockServer::start().await;
    mount_setup_page(&mock_server, FIXTURE.to_string()).await;

    Mock::given(method("POST"))
        .and(path(SETUP_PATH))
        .and(body_string_contains("matchupsEditedManually=true"))
        .and(body_string_contains("h2hConfigChangesMade=y"))
        .respond_with(ResponseTemplate::new(303))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let snapshot = client.fetch_snapshot().await.unwrap();
    let expected = serialize(&snapshot, 1);

    client.submit(&expected).await.expect("303 counts as success");

    let received = submitted_payload(&mock_server).await;
    assert_eq!(received, expected);
    assert_eq!(received.fingerprint(), expected.fingerprint());
}

#[tokio::test]
async fn test_rejected_submission_carries_snippet() {
    let mock_server = MockServer::start().await;
    mount_setup_page(&mock_server, FIXTURE.to_string()).await;
    mount_submit(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(format!(
            "<html><body>Invalid matchups{}</body></html>",
            " ".repeat(1000)
        )),
    )
    .await;

    let client = create_client(&mock_server);
    let snapshot = client.fetch_snapshot().await.unwrap();
    let result = client
        .set_period_matchups(&snapshot, 1, vec![MatchupPair::new("tB2", "tA1")])
        .await;

    match result {
        Err(SetupError::Submission(SubmissionError::Rejected { status, snippet })) => {
            assert_eq!(status, 200);
            assert!(snippet.contains("Invalid matchups"));
            assert!(snippet.ends_with("..."));
            assert!(snippet.len() <= 503);
        }
        other => panic!("Expected a rejected submission, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_rejected() {
    let mock_server = MockServer::start().await;
    mount_submit(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("boom"),
    )
    .await;

    let result = create_client(&mock_server).submit(&FormPayload::new()).await;
    assert!(matches!(
        result,
        Err(SetupError::Submission(SubmissionError::Rejected { status: 500, ref snippet }))
            if snippet == "boom"
    ));
}

#[tokio::test]
async fn test_unknown_period_sends_nothing() {
    let mock_server = MockServer::start().await;
    mount_setup_page(&mock_server, FIXTURE.to_string()).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(302))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let snapshot = client.fetch_snapshot().await.unwrap();

    let unknown = client
        .set_period_matchups(&snapshot, 99, vec![MatchupPair::new("tA1", "tB2")])
        .await;
    assert!(matches!(
        unknown,
        Err(SetupError::Mutation(MutationError::UnknownPeriod(99)))
    ));

    let empty = client.set_period_matchups(&snapshot, 2, Vec::new()).await;
    assert!(matches!(
        empty,
        Err(SetupError::Mutation(MutationError::EmptyReplacement(2)))
    ));
}

#[tokio::test]
async fn test_verify_period_against_fresh_page() {
    let mock_server = MockServer::start().await;
    let updated = FIXTURE.replace("'3':['tA1_tD4','tB2_tC3']", "'3':['tC3_tB2','tA1_-1']");
    mount_setup_page(&mock_server, updated).await;

    let client = create_client(&mock_server);

    let fresh = client
        .verify_period(3, &[MatchupPair::new("tC3", "tB2"), MatchupPair::bye("tA1")])
        .await
        .expect("Period 3 holds the new matchups");
    assert_eq!(fresh.sorted_periods().len(), 5);

    let mismatch = client
        .verify_period(2, &[MatchupPair::new("tC3", "tB2")])
        .await;
    assert!(matches!(
        mismatch,
        Err(SetupError::VerificationFailed { period: 2 })
    ));
}

#[tokio::test]
async fn test_fixture_payload_keeps_every_extracted_value() {
    let mock_server = MockServer::start().await;
    mount_setup_page(&mock_server, FIXTURE.to_string()).await;

    let snapshot = create_client(&mock_server).fetch_snapshot().await.unwrap();
    let state = snapshot.form_state();
    let decoded = FormPayload::decode(&serialize(&snapshot, 4).encode());

    let echoed = state
        .hidden_fields
        .iter()
        .filter(|(name, _)| name.as_str() != CONFIG_CHANGED_FIELD)
        .chain(&state.select_fields)
        .chain(&state.checkbox_fields)
        .chain(&state.owner_email_fields);
    for (name, value) in echoed {
        assert_eq!(decoded.get(name), Some(value.as_str()), "{}", name);
    }

    for team in snapshot.teams() {
        assert_eq!(
            decoded.get(&format!("teamName_{}", team.id)),
            Some(team.name.as_str())
        );
        assert_eq!(
            decoded.get(&format!("teamShortName_{}", team.id)),
            Some(team.short_name.as_str())
        );
    }
    for division in snapshot.divisions() {
        assert_eq!(
            decoded.get(&format!("divisionName_{}", division.id)),
            Some(division.name.as_str())
        );
    }
    assert_eq!(decoded.get("divisionName_d2west"), Some("West & Wild"));
    assert_eq!(decoded.get_all(DIVISIONS_FIELD), state.divisions.as_slice());

    let periods: Vec<_> = decoded
        .get_all(MATCHUPS_FIELD)
        .iter()
        .filter_map(|entry| entry.split('|').next())
        .collect();
    assert_eq!(periods, vec!["1", "2", "3", "4", "10"]);
}

#[tokio::test]
async fn test_unreadable_rejection_body_gives_empty_snippet() {
    let mock_server = MockServer::start().await;
    mount_submit(
        &mock_server,
        ResponseTemplate::new(200)
            .insert_header("content-encoding", "gzip")
            .set_body_string("this is not gzip"),
    )
    .await;

    let result = create_client(&mock_server).submit(&FormPayload::new()).await;
    assert!(matches!(
        result,
        Err(SetupError::Submission(SubmissionError::Rejected { status: 200, ref snippet }))
            if snippet.is_empty()
    ));
}
