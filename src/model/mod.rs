//! Data model for a league setup page
//!
//! Everything here is rebuilt from scratch on every fetch and never persisted.
//!
//! # Components
//!
//! - `Team`, `Owner`, `Division`: league structure declared by the page
//! - `MatchupPair`, `Schedule`: the period -> matchups map
//! - `FormState`: the flat form fields that must be echoed back on submit

mod form_state;
mod schedule;
mod team;

pub use form_state::FormState;
pub use schedule::{InvalidPair, MatchupPair, Schedule, BYE_TEAM_ID};
pub use team::{Division, Owner, Team};
