//! Plain-text setup summaries
//!
//! Used by the command-line interface; nothing here is sent to the remote site.

use crate::model::MatchupPair;
use crate::snapshot::SetupSnapshot;

const BYE_LABEL: &str = "BYE";

/// Short name of a team, `BYE` for the bye sentinel, or the raw id when unknown
pub fn team_label<'a>(snapshot: &'a SetupSnapshot, team_id: &'a str) -> &'a str {
    if team_id == crate::model::BYE_TEAM_ID {
        return BYE_LABEL;
    }
    snapshot
        .team(team_id)
        .map(|team| team.short_name.as_str())
        .unwrap_or(team_id)
}

/// Formats an overview of teams, divisions and the schedule range
pub fn format_setup_summary(snapshot: &SetupSnapshot) -> String {
    let mut out = String::new();

    out.push_str("=== League Setup ===\n\n");

    out.push_str(&format!("Teams ({}):\n", snapshot.teams().len()));
    for team in snapshot.teams() {
        let pending = team
            .owners
            .iter()
            .filter(|owner| owner.needs_email_field())
            .count();
        out.push_str(&format!(
            "  {:<6} {} [{}] {} owner(s)",
            team.short_name,
            team.name,
            team.id,
            team.owners.len()
        ));
        if pending > 0 {
            out.push_str(&format!(", {} pending", pending));
        }
        out.push('\n');
    }

    out.push_str(&format!("\nDivisions ({}):\n", snapshot.divisions().len()));
    for division in snapshot.divisions() {
        let members: Vec<_> = division
            .team_ids
            .iter()
            .map(|id| team_label(snapshot, id))
            .collect();
        out.push_str(&format!("  {}: {}\n", division.name, members.join(", ")));
    }

    let periods = snapshot.sorted_periods();
    match (periods.first(), periods.last()) {
        (Some(first), Some(last)) => out.push_str(&format!(
            "\nSchedule: {} periods ({}-{})\n",
            periods.len(),
            first,
            last
        )),
        _ => out.push_str("\nSchedule: empty\n"),
    }

    out
}

/// Formats one period's matchups, one pair per line
pub fn format_period(snapshot: &SetupSnapshot, period: u32, pairs: &[MatchupPair]) -> String {
    let mut out = format!("Period {} ({} matchups):\n", period, pairs.len());
    for (index, pair) in pairs.iter().enumerate() {
        let away = team_label(snapshot, &pair.away_team_id);
        if pair.is_bye() {
            out.push_str(&format!("  {:2}: {:<20}  {}\n", index, away, BYE_LABEL));
        } else {
            let home = team_label(snapshot, &pair.home_team_id);
            out.push_str(&format!("  {:2}: {:<20} vs  {}\n", index, away, home));
        }
    }
    out
}

/// Formats the current and proposed matchups of an edited period
pub fn format_period_change(
    snapshot: &SetupSnapshot,
    period: u32,
    before: &[MatchupPair],
    after: &[MatchupPair],
) -> String {
    if before == after {
        return format!("Period {}: unchanged\n", period);
    }
    format!(
        "Current:\n{}New:\n{}",
        format_period(snapshot, period, before),
        format_period(snapshot, period, after)
    )
}
