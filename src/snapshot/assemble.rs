use crate::extract::FormFields;
use crate::model::{Division, FormState, Team};

/// Key prefix of the per-owner email inputs
pub const OWNER_EMAIL_TAG: &str = "teamOwnerEmail";

/// Composite field name `teamOwnerEmail,{email},{teamId},{userId}`
pub fn owner_email_key(email: &str, team_id: &str, user_id: &str) -> String {
    format!("{},{},{},{}", OWNER_EMAIL_TAG, email, team_id, user_id)
}

/// Combines scraped fields with team and division data into one `FormState`
///
/// Team names come from the team declarations rather than the page's name
/// inputs so both can never disagree.
pub fn assemble_form_state(fields: FormFields, teams: &[Team], divisions: &[Division]) -> FormState {
    let mut state = FormState {
        hidden_fields: fields.hidden,
        select_fields: fields.select,
        checkbox_fields: fields.checkbox,
        ..FormState::default()
    };

    for team in teams {
        state.team_names.insert(team.id.clone(), team.name.clone());
        state
            .team_short_names
            .insert(team.id.clone(), team.short_name.clone());

        for owner in team.owners.iter().filter(|o| o.needs_email_field()) {
            state.owner_email_fields.insert(
                owner_email_key(&owner.email, &team.id, &owner.user_id),
                owner.email.clone(),
            );
        }
    }

    for division in divisions {
        state
            .division_names
            .insert(division.id.clone(), division.name.clone());
    }
    state.divisions = divisions
        .iter()
        .filter_map(Division::membership_entry)
        .collect();

    state
}
