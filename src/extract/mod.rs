//! Extraction of league setup state from raw page markup
//!
//! Each extractor scans the page independently and fails with a
//! stage-tagged `ParseError` when the structure it needs is missing:
//!
//! - `extract_schedule`: the inline `matchupMap` literal
//! - `extract_teams`: `addTeam(...)` declarations, owners grouped per team
//! - `extract_divisions`: division names and membership directives
//! - `extract_form_fields`: hidden/select/checkbox/date inputs

mod divisions;
mod form_state;
mod markup;
mod schedule;
mod teams;

pub use divisions::extract_divisions;
pub use form_state::{extract_form_fields, FormFields};
pub use schedule::extract_schedule;
pub use teams::{extract_teams, PLACEHOLDER_USER_ID};

use crate::model::{Division, Schedule, Team};
use crate::ParseResult;

/// Everything the extractors read from one page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    pub schedule: Schedule,
    pub teams: Vec<Team>,
    pub divisions: Vec<Division>,
    pub form_fields: FormFields,
}

/// Runs every extractor over one page
///
/// # Errors
///
/// Returns the first stage failure, in schedule, team, division, form-state
/// order.
pub fn extract_page(html: &str) -> ParseResult<ExtractedPage> {
    Ok(ExtractedPage {
        schedule: extract_schedule(html)?,
        teams: extract_teams(html)?,
        divisions: extract_divisions(html)?,
        form_fields: extract_form_fields(html)?,
    })
}
