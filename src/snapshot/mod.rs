//! Assembled league setup snapshots
//!
//! A `SetupSnapshot` is an immutable view of one fetched setup page. Edits
//! never touch an existing snapshot: `with_period_matchups` validates the
//! request and returns a fresh copy, so two pending edits cannot share state.

mod assemble;

pub use assemble::{assemble_form_state, owner_email_key, OWNER_EMAIL_TAG};

use crate::extract::{extract_page, ExtractedPage};
use crate::model::{Division, FormState, MatchupPair, Schedule, Team};
use crate::{ParseError, ParseErrorKind, ParseResult, ParseStage};
use thiserror::Error;

/// Caller mistakes rejected before any change is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("period {0} does not exist in the schedule")]
    UnknownPeriod(u32),

    #[error("replacement matchups for period {0} must not be empty")]
    EmptyReplacement(u32),
}

/// One consistent configuration read from a setup page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupSnapshot {
    teams: Vec<Team>,
    divisions: Vec<Division>,
    schedule: Schedule,
    form_state: FormState,
}

impl SetupSnapshot {
    /// Extracts and assembles a snapshot from raw page markup
    pub fn from_html(html: &str) -> ParseResult<Self> {
        extract_page(html).and_then(Self::assemble)
    }

    /// Composes extractor output into a snapshot
    ///
    /// # Errors
    ///
    /// Fails at the team stage when the schedule names a team no declaration
    /// produced, since submitting would drop that team's fields.
    pub fn assemble(page: ExtractedPage) -> ParseResult<Self> {
        check_scheduled_teams(&page.schedule, &page.teams)?;

        let form_state = assemble_form_state(page.form_fields, &page.teams, &page.divisions);
        Ok(Self {
            teams: page.teams,
            divisions: page.divisions,
            schedule: page.schedule,
            form_state,
        })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn form_state(&self) -> &FormState {
        &self.form_state
    }

    /// Looks up a team by id; the bye sentinel never resolves
    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    /// Matchups of one period, if the period exists
    pub fn period(&self, period: u32) -> Option<&[MatchupPair]> {
        self.schedule.get(period)
    }

    /// All known periods in ascending order
    pub fn sorted_periods(&self) -> Vec<u32> {
        self.schedule.periods()
    }

    /// Returns a copy of this snapshot with one period's matchups replaced
    ///
    /// The whole pair list is replaced; nothing is merged. Periods are never
    /// created, only overwritten.
    ///
    /// # Errors
    ///
    /// `UnknownPeriod` when `period` is not in the schedule, `EmptyReplacement`
    /// when `pairs` is empty. `self` is unchanged either way.
    pub fn with_period_matchups(
        &self,
        period: u32,
        pairs: Vec<MatchupPair>,
    ) -> Result<Self, MutationError> {
        if !self.schedule.contains(period) {
            return Err(MutationError::UnknownPeriod(period));
        }
        if pairs.is_empty() {
            return Err(MutationError::EmptyReplacement(period));
        }

        let mut next = self.clone();
        next.schedule.replace(period, pairs);
        tracing::debug!("Replaced matchups for period {}", period);
        Ok(next)
    }
}

fn check_scheduled_teams(schedule: &Schedule, teams: &[Team]) -> ParseResult<()> {
    for (period, pairs) in schedule.iter() {
        for team_id in pairs.iter().flat_map(MatchupPair::team_ids) {
            if !teams.iter().any(|team| team.id == team_id) {
                return Err(ParseError::new(
                    ParseStage::Team,
                    ParseErrorKind::UndeclaredTeam {
                        team_id: team_id.to_string(),
                        period,
                    },
                ));
            }
        }
    }
    Ok(())
}
