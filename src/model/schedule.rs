//! Period schedule types
//!
//! A schedule maps every known period to its ordered list of matchup pairs.
//! Pairs travel on the wire as `"{away}_{home}"`; a home id of `"-1"` marks a bye.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Home team id that marks a bye week; never a real team id
pub const BYE_TEAM_ID: &str = "-1";

const PAIR_SEPARATOR: char = '_';

/// A pair string that does not split into two non-empty ids
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid matchup pair '{0}': expected AWAY_HOME")]
pub struct InvalidPair(pub String);

/// One scheduled meeting between two teams, or a bye
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchupPair {
    pub away_team_id: String,
    pub home_team_id: String,
}

impl MatchupPair {
    pub fn new(away: impl Into<String>, home: impl Into<String>) -> Self {
        Self {
            away_team_id: away.into(),
            home_team_id: home.into(),
        }
    }

    /// A bye week for `away`
    pub fn bye(away: impl Into<String>) -> Self {
        Self::new(away, BYE_TEAM_ID)
    }

    pub fn is_bye(&self) -> bool {
        self.home_team_id == BYE_TEAM_ID
    }

    /// Team ids that take part in this pair, excluding the bye sentinel
    pub fn team_ids(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.away_team_id.as_str())
            .chain((!self.is_bye()).then_some(self.home_team_id.as_str()))
    }

    /// Parses the `"{away}_{home}"` wire form
    ///
    /// Splits on the first separator only, so `"a_b_c"` becomes away `a`,
    /// home `b_c`. This assumes team ids never contain the separator.
    pub fn parse(raw: &str) -> Result<Self, InvalidPair> {
        match raw.split_once(PAIR_SEPARATOR) {
            Some((away, home)) if !away.is_empty() && !home.is_empty() => {
                Ok(Self::new(away, home))
            }
            _ => Err(InvalidPair(raw.to_string())),
        }
    }
}

impl fmt::Display for MatchupPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.away_team_id, PAIR_SEPARATOR, self.home_team_id
        )
    }
}

impl FromStr for MatchupPair {
    type Err = InvalidPair;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Period number -> matchup pairs, iterated in ascending period order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    periods: BTreeMap<u32, Vec<MatchupPair>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a period, returning the pairs it previously held
    pub fn insert(&mut self, period: u32, pairs: Vec<MatchupPair>) -> Option<Vec<MatchupPair>> {
        self.periods.insert(period, pairs)
    }

    pub fn get(&self, period: u32) -> Option<&[MatchupPair]> {
        self.periods.get(&period).map(Vec::as_slice)
    }

    pub fn contains(&self, period: u32) -> bool {
        self.periods.contains_key(&period)
    }

    /// Replaces the pair list of an existing period
    ///
    /// Returns `false` without touching anything when the period is unknown.
    pub(crate) fn replace(&mut self, period: u32, pairs: Vec<MatchupPair>) -> bool {
        match self.periods.get_mut(&period) {
            Some(slot) => {
                *slot = pairs;
                true
            }
            None => false,
        }
    }

    /// All known periods in ascending order
    pub fn periods(&self) -> Vec<u32> {
        self.periods.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[MatchupPair])> {
        self.periods
            .iter()
            .map(|(period, pairs)| (*period, pairs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Periods whose pair lists differ between `self` and `other`
    ///
    /// A period present on only one side counts as changed.
    pub fn changed_periods(&self, other: &Schedule) -> Vec<u32> {
        let mut changed: Vec<u32> = self
            .iter()
            .filter(|(period, pairs)| other.get(*period) != Some(*pairs))
            .map(|(period, _)| period)
            .collect();

        changed.extend(other.periods().into_iter().filter(|p| !self.contains(*p)));
        changed.sort_unstable();
        changed
    }

    /// The `"{period}|{away}_{home}|..."` wire form of one period
    pub fn wire_entry(period: u32, pairs: &[MatchupPair]) -> String {
        let mut entry = period.to_string();
        for pair in pairs {
            entry.push('|');
            entry.push_str(&pair.to_string());
        }
        entry
    }
}
