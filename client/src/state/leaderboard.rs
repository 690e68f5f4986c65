//! Public leaderboard list.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use super::loadable::Loadable;
use crate::net::types::LeaderboardEntry;

/// Rows rendered on the leaderboard tab.
pub const TOP_N: usize = 10;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeaderboardState {
    pub entries: Loadable<Vec<LeaderboardEntry>>,
}

/// First `n` entries in backend rank order.
#[must_use]
pub fn top(entries: &[LeaderboardEntry], n: usize) -> Vec<LeaderboardEntry> {
    entries.iter().take(n).cloned().collect()
}
