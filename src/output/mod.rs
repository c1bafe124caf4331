//! Output module for human-readable setup reports
//!
//! This module handles:
//! - Summaries of a fetched setup (teams, divisions, periods)
//! - Listing one period's matchups by team short name
//! - Before/after views of an edited period

mod summary;

pub use summary::{format_period, format_period_change, format_setup_summary, team_label};
