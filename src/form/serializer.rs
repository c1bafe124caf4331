//! Snapshot -> submission payload
//!
//! The destination rewrites its whole configuration from each submission, so
//! every field the page holds is re-emitted, in this order:
//!
//! 1. hidden fields (config-changed flag forced on)
//! 2. select fields, then checkbox shadow fields
//! 3. team names and short names
//! 4. owner email fields
//! 5. division names
//! 6. `~~divisions`, once per non-empty division
//! 7. constant fields the form always carries
//! 8. edited period metadata
//! 9. `matchups`, once per period in ascending order

use super::payload::FormPayload;
use crate::model::Schedule;
use crate::snapshot::SetupSnapshot;

/// Hidden flag telling the destination the schedule configuration changed
pub const CONFIG_CHANGED_FIELD: &str = "h2hConfigChangesMade";
pub const CONFIG_CHANGED_VALUE: &str = "y";

pub const TEAM_NAME_PREFIX: &str = "teamName_";
pub const TEAM_SHORT_NAME_PREFIX: &str = "teamShortName_";
pub const DIVISION_NAME_PREFIX: &str = "divisionName_";
pub const DIVISIONS_FIELD: &str = "~~divisions";
pub const EDITED_PERIOD_FIELD: &str = "matchupScoringPeriodToEdit";
pub const EDITED_MANUALLY_FIELD: &str = "matchupsEditedManually";
pub const MATCHUPS_FIELD: &str = "matchups";

/// Fields the form posts regardless of which period changed
pub const CONSTANT_FIELDS: [(&str, &str); 6] = [
    ("tabId", "Matchups"),
    ("gotoNextPage", "false"),
    ("divisionName", ""),
    ("inviteMessage", ""),
    ("calculatedHeadToHeadOpponentType", "1"),
    ("playoffMatchupSetConfigId", ""),
];

/// Serializes the whole snapshot into the submission payload
///
/// `edited_period` is only recorded as metadata; the schedule block always
/// carries every period. The same snapshot always yields the same payload.
pub fn serialize(snapshot: &SetupSnapshot, edited_period: u32) -> FormPayload {
    let state = snapshot.form_state();
    let mut payload = FormPayload::new();

    for (name, value) in &state.hidden_fields {
        if name == CONFIG_CHANGED_FIELD {
            payload.set(name, CONFIG_CHANGED_VALUE);
        } else {
            payload.set(name, value);
        }
    }

    for (name, value) in state.select_fields.iter().chain(&state.checkbox_fields) {
        payload.set(name, value);
    }

    for (team_id, name) in &state.team_names {
        payload.set(format!("{TEAM_NAME_PREFIX}{team_id}"), name);
    }
    for (team_id, short_name) in &state.team_short_names {
        payload.set(format!("{TEAM_SHORT_NAME_PREFIX}{team_id}"), short_name);
    }

    for (key, email) in &state.owner_email_fields {
        payload.set(key, email);
    }

    for (division_id, name) in &state.division_names {
        payload.set(format!("{DIVISION_NAME_PREFIX}{division_id}"), name);
    }
    for entry in &state.divisions {
        payload.add(DIVISIONS_FIELD, entry);
    }

    for (name, value) in CONSTANT_FIELDS {
        payload.set(name, value);
    }

    payload.set(EDITED_PERIOD_FIELD, edited_period.to_string());
    payload.set(EDITED_MANUALLY_FIELD, "true");

    for (period, pairs) in snapshot.schedule().iter() {
        payload.add(MATCHUPS_FIELD, Schedule::wire_entry(period, pairs));
    }

    tracing::debug!(
        "Serialized {} fields, {} periods (edited period {})",
        payload.len(),
        snapshot.schedule().len(),
        edited_period
    );
    payload
}
