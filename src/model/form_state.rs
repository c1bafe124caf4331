use indexmap::IndexMap;

/// Flat form fields echoed back on submission
///
/// Every map keeps first-seen page order so that two serializations of the
/// same snapshot are identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Hidden inputs, checked checkboxes and the allow-listed date inputs
    pub hidden_fields: IndexMap<String, String>,

    /// Selected option value per `<select>` name
    pub select_fields: IndexMap<String, String>,

    /// Hidden checkbox shadow inputs (names starting with `_`)
    pub checkbox_fields: IndexMap<String, String>,

    /// Team id -> team name
    pub team_names: IndexMap<String, String>,

    /// Team id -> short name
    pub team_short_names: IndexMap<String, String>,

    /// `teamOwnerEmail,{email},{teamId},{userId}` -> email
    pub owner_email_fields: IndexMap<String, String>,

    /// Division id -> division name
    pub division_names: IndexMap<String, String>,

    /// One `"{divId}={team1}|{team2}|..."` entry per non-empty division
    pub divisions: Vec<String>,
}
