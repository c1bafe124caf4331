//! Team and owner extraction from inline `addTeam(...)` calls
//!
//! Source format:
//!
//! ```text
//! addTeam('Name', 'SHORT', 'email', 'teamId', 'userId', isCommissioner, joinedLeague, ...);
//! ```
//!
//! A team with several owners is declared once per owner.

use crate::model::{Owner, Team};
use crate::{ParseError, ParseErrorKind, ParseResult, ParseStage};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// User id the page emits for owners who have not joined yet
pub const PLACEHOLDER_USER_ID: &str = "NULL";

static ADD_TEAM: LazyLock<Regex> = LazyLock::new(|| {
    // A single-quoted JS string literal; `\'` and `\\` may appear inside
    let arg = r"'((?:[^'\\]|\\.)*)'";
    Regex::new(&format!(
        r"addTeam\({arg},\s*{arg},\s*{arg},\s*{arg},\s*{arg},\s*(true|false),\s*(true|false)"
    ))
    .expect("addTeam regex is valid")
});

const CALL_PREFIX: &str = "addTeam('";

/// Hands out `NULL_0`, `NULL_1`, ... in first-seen order
///
/// Lives for exactly one extraction so the numbering matches the page's own
/// script, which restarts at zero on every load.
#[derive(Debug, Default)]
struct SyntheticIds {
    next: u32,
}

impl SyntheticIds {
    fn resolve(&mut self, user_id: &str) -> String {
        if user_id != PLACEHOLDER_USER_ID {
            return user_id.to_string();
        }
        let id = format!("{}_{}", PLACEHOLDER_USER_ID, self.next);
        self.next += 1;
        id
    }
}

/// Parses every team declaration, grouping owners by team id
///
/// Teams come back in first-seen order; the name and short name of a team's
/// first declaration win.
///
/// # Errors
///
/// Fails when the page declares no teams at all.
pub fn extract_teams(html: &str) -> ParseResult<Vec<Team>> {
    let mut synthetic_ids = SyntheticIds::default();
    let mut teams: IndexMap<String, Team> = IndexMap::new();

    let mut matched = 0;
    for caps in ADD_TEAM.captures_iter(html) {
        matched += 1;
        let team_id = unescape_js(&caps[4]);
        let owner = Owner {
            email: unescape_js(&caps[3]),
            user_id: synthetic_ids.resolve(&unescape_js(&caps[5])),
            is_commissioner: &caps[6] == "true",
            has_joined: &caps[7] == "true",
        };

        teams
            .entry(team_id.clone())
            .or_insert_with(|| Team {
                id: team_id,
                name: unescape_js(&caps[1]),
                short_name: unescape_js(&caps[2]),
                owners: Vec::new(),
            })
            .owners
            .push(owner);
    }

    let declared = html.matches(CALL_PREFIX).count();
    if declared != matched {
        tracing::warn!(
            "Parsed {} of {} addTeam() declarations; the rest are malformed",
            matched,
            declared
        );
    }

    if teams.is_empty() {
        return Err(ParseError::new(
            ParseStage::Team,
            ParseErrorKind::NoMatches("addTeam() declarations"),
        ));
    }

    tracing::debug!(
        "Extracted {} teams ({} synthetic owner ids)",
        teams.len(),
        synthetic_ids.next
    );
    Ok(teams.into_values().collect())
}

/// Resolves backslash escapes inside a single-quoted JS string literal
fn unescape_js(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }
    out
}
