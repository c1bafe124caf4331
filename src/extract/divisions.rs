//! Division extraction
//!
//! Names come from `divisionName_{id}` inputs; membership comes from the
//! `__removeTeamFromDivision('tbl_{divId}', '{teamId}', ...)` handlers the page
//! attaches to every assigned team.

use super::markup::{input_tags, is_script_fragment};
use crate::model::Division;
use crate::{ParseError, ParseErrorKind, ParseResult, ParseStage};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

const DIVISION_NAME_PREFIX: &str = "divisionName_";

static REMOVE_FROM_DIVISION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__removeTeamFromDivision\('tbl_(\w+)',\s*'(\w+)'")
        .expect("division membership regex is valid")
});

/// Parses divisions and their member teams in first-seen order
///
/// # Errors
///
/// Fails when no division name field is present.
pub fn extract_divisions(html: &str) -> ParseResult<Vec<Division>> {
    let mut divisions: IndexMap<String, Division> = IndexMap::new();

    for tag in input_tags(html) {
        let Some(id) = tag
            .name
            .as_deref()
            .and_then(|name| name.strip_prefix(DIVISION_NAME_PREFIX))
        else {
            continue;
        };
        if id.is_empty() || tag.scripted || is_script_fragment(id) {
            tracing::debug!("Skipping scripted division field '{}{}'", DIVISION_NAME_PREFIX, id);
            continue;
        }

        divisions.entry(id.to_string()).or_insert_with(|| Division {
            id: id.to_string(),
            name: tag.value.clone().unwrap_or_default(),
            team_ids: Vec::new(),
        });
    }

    if divisions.is_empty() {
        return Err(ParseError::new(
            ParseStage::Division,
            ParseErrorKind::NoMatches("division name fields"),
        ));
    }

    for caps in REMOVE_FROM_DIVISION.captures_iter(html) {
        let (division_id, team_id) = (&caps[1], &caps[2]);
        match divisions.get_mut(division_id) {
            Some(division) => {
                if !division.team_ids.iter().any(|id| id == team_id) {
                    division.team_ids.push(team_id.to_string());
                }
            }
            None => tracing::debug!(
                "Ignoring team {} assigned to unknown division {}",
                team_id,
                division_id
            ),
        }
    }

    tracing::debug!("Extracted {} divisions", divisions.len());
    Ok(divisions.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_names_and_members() {
        let html = r#"
            <input type="text" name="divisionName_d1" value="East">
            <input type="text" name="divisionName_d2" value="West">
            <a onclick="__removeTeamFromDivision('tbl_d1', 't1', false)">x</a>
            <a onclick="__removeTeamFromDivision('tbl_d2', 't2', false)">x</a>
            <a onclick="__removeTeamFromDivision('tbl_d1', 't3', false)">x</a>
        "#;
        let divisions = extract_divisions(html).unwrap();

        assert_eq!(divisions.len(), 2);
        assert_eq!(divisions[0].id, "d1");
        assert_eq!(divisions[0].name, "East");
        assert_eq!(divisions[0].team_ids, vec!["t1", "t3"]);
        assert_eq!(divisions[1].team_ids, vec!["t2"]);
    }

    #[test]
    fn test_division_name_is_decoded() {
        let html = r#"<input type="text" name="divisionName_d1" value="North &amp; South">"#;
        let divisions = extract_divisions(html).unwrap();
        assert_eq!(divisions[0].name, "North & South");
    }

    #[test]
    fn test_value_before_name() {
        let html = r#"<input value="North" type="text" name="divisionName_n1">"#;
        let divisions = extract_divisions(html).unwrap();
        assert_eq!(divisions[0].name, "North");
    }

    #[test]
    fn test_script_template_ids_are_discarded() {
        let html = r#"
            <input type="text" name="divisionName_d1" value="East">
            <script>
            var row = '<input type="text" name="divisionName_' + tempId + '" value="">';
            </script>
        "#;
        let divisions = extract_divisions(html).unwrap();
        assert_eq!(divisions.len(), 1);
        assert_eq!(divisions[0].id, "d1");
    }

    #[test]
    fn test_duplicate_memberships_are_collapsed() {
        let html = r#"
            <input type="text" name="divisionName_d1" value="East">
            __removeTeamFromDivision('tbl_d1', 't1', false)
            __removeTeamFromDivision('tbl_d1', 't1', true)
        "#;
        let divisions = extract_divisions(html).unwrap();
        assert_eq!(divisions[0].team_ids, vec!["t1"]);
    }

    #[test]
    fn test_unknown_division_membership_ignored() {
        let html = r#"
            <input type="text" name="divisionName_d1" value="East">
            __removeTeamFromDivision('tbl_zz', 't1', false)
        "#;
        let divisions = extract_divisions(html).unwrap();
        assert!(divisions[0].team_ids.is_empty());
    }

    #[test]
    fn test_no_divisions() {
        let err = extract_divisions("<input type=\"hidden\" name=\"x\" value=\"y\">").unwrap_err();
        assert_eq!(err.stage, ParseStage::Division);
    }
}
