//! Notification dropdown state.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use super::loadable::Loadable;
use crate::net::types::Notification;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationsState {
    pub list: Loadable<Vec<Notification>>,
    pub open: bool,
    /// Backend message from the last failed mark-read.
    pub error: Option<String>,
}

impl NotificationsState {
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.list.data.iter().filter(|n| !n.read).count()
    }

    /// Flip the dropdown. Returns `true` when it opened and a fetch is due.
    ///
    /// Opening is the only trigger for the notification read.
    pub fn toggle_open(&mut self) -> bool {
        self.open = !self.open;
        if self.open {
            self.error = None;
        }
        self.open
    }
}
