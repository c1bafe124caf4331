//! League setup: schedule round-trips for a fantasy league setup page
//!
//! This crate fetches a league's setup page, rebuilds its schedule, team,
//! division and form state from markup and inline script, replaces one
//! period's matchups, and submits the whole configuration back as a form.

pub mod client;
pub mod config;
pub mod extract;
pub mod form;
pub mod model;
pub mod output;
pub mod snapshot;

use model::InvalidPair;
use std::fmt;
use thiserror::Error;

/// Main error type for league setup operations
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] client::SessionError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Mutation rejected: {0}")]
    Mutation(#[from] snapshot::MutationError),

    #[error("Submission failed: {0}")]
    Submission(#[from] client::SubmissionError),

    #[error("Period {period} does not hold the submitted matchups after re-fetch")]
    VerificationFailed { period: u32 },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Extraction stage a parse error originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    Schedule,
    Team,
    Division,
    FormState,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseStage::Schedule => "schedule",
            ParseStage::Team => "team",
            ParseStage::Division => "division",
            ParseStage::FormState => "form-state",
        };
        f.write_str(name)
    }
}

/// Structural failures while reading the setup page
///
/// These are always fatal: a partial configuration would overwrite the
/// remote league on the next submission.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("{0} not found")]
    MissingBlock(&'static str),

    #[error("no {0} found")]
    NoMatches(&'static str),

    #[error("invalid period number '{0}'")]
    InvalidPeriod(String),

    #[error(transparent)]
    MalformedPair(#[from] InvalidPair),

    #[error("team {team_id} is scheduled in period {period} but never declared")]
    UndeclaredTeam { team_id: String, period: u32 },
}

/// A parse failure tagged with the stage that produced it
#[derive(Debug, Error)]
#[error("{stage} extraction failed: {kind}")]
pub struct ParseError {
    pub stage: ParseStage,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(stage: ParseStage, kind: impl Into<ParseErrorKind>) -> Self {
        Self {
            stage,
            kind: kind.into(),
        }
    }
}

/// Result type alias for league setup operations
pub type Result<T> = std::result::Result<T, SetupError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for extraction
pub type ParseResult<T> = std::result::Result<T, ParseError>;

// Re-export commonly used types
pub use client::{EnvSession, SessionProvider, SetupClient, StaticSession};
pub use config::Config;
pub use form::{serialize, FormPayload};
pub use model::{Division, FormState, MatchupPair, Owner, Schedule, Team, BYE_TEAM_ID};
pub use snapshot::{MutationError, SetupSnapshot};
