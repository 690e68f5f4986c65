//! Session holder for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided to every view as a context signal. The top-level gate reads
//! `phase()` to choose between the spinner, the login form and the dashboard.
//! Network side effects live in `net::session`; this module only models the
//! transitions so they can be tested without a browser.
//!
//! INVARIANT
//! =========
//! A user is never held without a token. Every transition that clears the
//! token also clears the user.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{AuthResponse, User};

/// Top-level view selector derived from [`SessionState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Anonymous,
    /// A stored token was found and `/me` is in flight.
    LoadingProfile,
    Authenticated,
}

/// Current identity and bearer token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl SessionState {
    /// Initial state on both server and browser, before storage has been read.
    ///
    /// Rendering the spinner until then keeps SSR and hydration output identical.
    #[must_use]
    pub fn starting() -> Self {
        Self { user: None, token: None, loading: true }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::LoadingProfile
        } else if self.user.is_some() && self.token.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    /// Apply the token read from storage. Returns `true` when a profile fetch
    /// must follow; `false` leaves the session anonymous.
    pub fn begin_restore(&mut self, stored: Option<String>) -> bool {
        match stored.filter(|t| !t.trim().is_empty()) {
            Some(token) => {
                self.user = None;
                self.token = Some(token);
                self.loading = true;
                true
            }
            None => {
                self.clear();
                false
            }
        }
    }

    /// `/me` succeeded for the stored token.
    pub fn profile_loaded(&mut self, user: User) {
        if self.token.is_some() {
            self.user = Some(user);
        }
        self.loading = false;
    }

    /// `/me` failed for any reason; demote silently to anonymous.
    pub fn profile_failed(&mut self) {
        self.clear();
    }

    /// Login or registration succeeded.
    pub fn signed_in(&mut self, auth: AuthResponse) {
        self.token = Some(auth.access_token);
        self.user = Some(auth.user);
        self.loading = false;
    }

    /// Logout, or teardown after a failed restore.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Admin surface is reachable only for an authenticated admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.phase() == SessionPhase::Authenticated && self.user.as_ref().is_some_and(User::is_admin)
    }
}
