//! Network side of the setup round-trip
//!
//! This module contains:
//! - Session credential lookup (`SessionProvider`)
//! - Fetching the setup page and turning it into a snapshot
//! - Submitting a serialized payload and classifying the answer
//!
//! Every operation issues exactly one request and never retries.

mod fetcher;
mod session;
mod submit;

pub use fetcher::{build_http_client, fetch_setup_page};
pub use session::{EnvSession, SessionError, SessionProvider, StaticSession};
pub use submit::{diagnostic_snippet, submit_payload, SubmissionError, DIAGNOSTIC_LIMIT};

use crate::config::Config;
use crate::form::{serialize, FormPayload};
use crate::model::MatchupPair;
use crate::snapshot::SetupSnapshot;
use crate::{Result, SetupError};
use reqwest::Client;
use url::Url;

const SETUP_PATH: &str = "/newui/fantasy/createLeague.go";

/// Page and submission URLs for one league
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub setup_page: Url,
    pub submit: Url,
}

impl Endpoints {
    /// Builds both URLs from a base like `https://www.fantrax.com`
    pub fn new(base_url: &str, league_id: &str) -> Result<Self> {
        let path = Url::parse(base_url)?.join(SETUP_PATH)?;

        let mut setup_page = path.clone();
        setup_page
            .query_pairs_mut()
            .append_pair("goto", "1")
            .append_pair("leagueId", league_id);

        let mut submit = path;
        submit.query_pairs_mut().append_pair("leagueId", league_id);

        Ok(Self { setup_page, submit })
    }
}

/// Fetches, edits and submits one league's setup
pub struct SetupClient<S = EnvSession> {
    http: Client,
    endpoints: Endpoints,
    session: S,
}

impl SetupClient<EnvSession> {
    /// Client whose session cookie comes from the configured environment variable
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config, EnvSession::new(config.session.cookie_env.as_str()))
    }
}

impl<S: SessionProvider> SetupClient<S> {
    pub fn new(config: &Config, session: S) -> Result<Self> {
        Ok(Self {
            http: build_http_client(&config.client)?,
            endpoints: Endpoints::new(&config.remote.base_url, &config.league.league_id)?,
            session,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Raw setup page markup
    pub async fn fetch_page(&self) -> Result<String> {
        let cookie = self.session.cookie_header()?;
        fetch_setup_page(&self.http, &self.endpoints.setup_page, &cookie).await
    }

    /// Fetches the setup page and assembles a fresh snapshot from it
    pub async fn fetch_snapshot(&self) -> Result<SetupSnapshot> {
        let html = self.fetch_page().await?;
        let snapshot = SetupSnapshot::from_html(&html)?;
        tracing::info!(
            "Loaded setup: {} teams, {} divisions, {} periods",
            snapshot.teams().len(),
            snapshot.divisions().len(),
            snapshot.schedule().len()
        );
        Ok(snapshot)
    }

    /// Submits a serialized payload; success means the server redirected
    pub async fn submit(&self, payload: &FormPayload) -> Result<()> {
        let cookie = self.session.cookie_header()?;
        submit_payload(&self.http, &self.endpoints.submit, &cookie, payload).await
    }

    /// Replaces one period's matchups and submits the whole configuration
    ///
    /// Returns the edited snapshot; `snapshot` itself is left as it was.
    /// Validation errors are raised before any request is made.
    pub async fn set_period_matchups(
        &self,
        snapshot: &SetupSnapshot,
        period: u32,
        pairs: Vec<MatchupPair>,
    ) -> Result<SetupSnapshot> {
        let edited = snapshot.with_period_matchups(period, pairs)?;
        self.submit(&serialize(&edited, period)).await?;
        Ok(edited)
    }

    /// Re-fetches the page and checks one period holds `expected`
    ///
    /// Returns the fresh snapshot when it matches.
    pub async fn verify_period(&self, period: u32, expected: &[MatchupPair]) -> Result<SetupSnapshot> {
        let fresh = self.fetch_snapshot().await?;
        if fresh.period(period) != Some(expected) {
            return Err(SetupError::VerificationFailed { period });
        }
        Ok(fresh)
    }
}
