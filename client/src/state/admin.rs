//! Admin tab data: aggregate stats and the user directory.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use super::loadable::Loadable;
use crate::net::types::{AdminStats, User};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub stats: Loadable<AdminStats>,
    pub users: Loadable<Vec<User>>,
    /// User id whose active flag is being toggled.
    pub toggle_pending: Option<String>,
    /// Backend message from the last failed toggle.
    pub toggle_error: Option<String>,
}

impl AdminState {
    /// Start a toggle. Returns `false` while another toggle is in flight.
    pub fn begin_toggle(&mut self, user_id: &str) -> bool {
        if self.toggle_pending.is_some() {
            return false;
        }
        self.toggle_pending = Some(user_id.to_owned());
        self.toggle_error = None;
        true
    }

    pub fn toggle_succeeded(&mut self) {
        self.toggle_pending = None;
    }

    pub fn toggle_failed(&mut self, message: String) {
        self.toggle_pending = None;
        self.toggle_error = Some(message);
    }
}

/// Stat cards rendered on the overview, as (label, value) pairs.
#[must_use]
pub fn stat_cards(stats: &AdminStats) -> Vec<(&'static str, u64)> {
    vec![
        ("Active users", stats.total_users),
        ("Total challenges", stats.total_challenges),
        ("Active challenges", stats.active_challenges),
        ("Solutions submitted", stats.total_solutions),
        ("Solutions evaluated", stats.evaluated_solutions),
        ("Pending evaluation", stats.pending_evaluations),
    ]
}
