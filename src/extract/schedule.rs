//! Schedule extraction from the inline `matchupMap` script literal
//!
//! Source format:
//!
//! ```text
//! var matchupMap = {
//!   '1':['away_home','away_home',...],
//!   '2':['away_-1',...],
//! };
//! ```

use crate::model::{MatchupPair, Schedule};
use crate::{ParseError, ParseErrorKind, ParseResult, ParseStage};
use regex::Regex;
use std::sync::LazyLock;

static MATCHUP_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"var\s+matchupMap\s*=\s*\{([\s\S]*?)\};").expect("matchup block regex is valid")
});
static PERIOD_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'(\d+)'\s*:\s*\[([^\]]*)\]").expect("period entry regex is valid")
});
static PAIR_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)'").expect("pair literal regex is valid"));

/// Parses the period -> matchup pairs map embedded in the page
///
/// # Errors
///
/// Fails when the `matchupMap` block is missing, holds no periods, or any
/// period number or pair string is malformed.
pub fn extract_schedule(html: &str) -> ParseResult<Schedule> {
    let block = MATCHUP_BLOCK
        .captures(html)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| error(ParseErrorKind::MissingBlock("matchupMap block")))?
        .as_str();

    let mut schedule = Schedule::new();

    for caps in PERIOD_ENTRY.captures_iter(block) {
        let raw_period = &caps[1];
        let period = raw_period
            .parse::<u32>()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| error(ParseErrorKind::InvalidPeriod(raw_period.to_string())))?;

        let pairs = PAIR_LITERAL
            .captures_iter(&caps[2])
            .map(|pair| MatchupPair::parse(&pair[1]))
            .collect::<Result<Vec<_>, _>>()
            .map_err(error)?;

        if schedule.insert(period, pairs).is_some() {
            tracing::warn!("Period {} declared twice in matchupMap, keeping the last", period);
        }
    }

    if schedule.is_empty() {
        return Err(error(ParseErrorKind::NoMatches("periods in matchupMap")));
    }

    tracing::debug!("Extracted {} periods", schedule.len());
    Ok(schedule)
}

fn error(kind: impl Into<ParseErrorKind>) -> ParseError {
    ParseError::new(ParseStage::Schedule, kind)
}
