/// A team declared on the setup page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Remote team identifier, unique within a snapshot
    pub id: String,

    /// Full display name
    pub name: String,

    /// Abbreviated name
    pub short_name: String,

    /// Owners in the order the page declares them
    pub owners: Vec<Owner>,
}

/// One owner of a team
///
/// Owners who have not joined the league yet carry a synthetic user id
/// (`NULL_0`, `NULL_1`, ...) instead of a real one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub email: String,
    pub user_id: String,
    pub is_commissioner: bool,
    pub has_joined: bool,
}

impl Owner {
    /// Whether the page renders an editable email field for this owner
    ///
    /// Only pending, non-commissioner owners get one.
    pub fn needs_email_field(&self) -> bool {
        !self.is_commissioner && !self.has_joined
    }
}

/// A division and the teams assigned to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    pub id: String,
    pub name: String,

    /// Member team ids, first-seen order, no duplicates
    pub team_ids: Vec<String>,
}

impl Division {
    /// Membership string in the `"{divId}={team1}|{team2}|..."` wire form
    ///
    /// Returns `None` for a division without members.
    pub fn membership_entry(&self) -> Option<String> {
        if self.team_ids.is_empty() {
            return None;
        }
        Some(format!("{}={}", self.id, self.team_ids.join("|")))
    }
}
