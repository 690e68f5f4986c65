//! Challenge list and its filter controls.

#[cfg(test)]
#[path = "challenges_test.rs"]
mod challenges_test;

use std::str::FromStr;

use super::loadable::Loadable;
use crate::net::types::{Challenge, ChallengeFilter};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChallengesState {
    pub list: Loadable<Vec<Challenge>>,
    pub filter: ChallengeFilter,
}

impl ChallengesState {
    /// Replace the filter. Returns `true` when it changed and a refetch is due.
    pub fn apply_filter(&mut self, filter: ChallengeFilter) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        true
    }
}

/// Parse a `<select>` value where the empty option means "any".
#[must_use]
pub fn parse_choice<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() { None } else { raw.parse().ok() }
}
