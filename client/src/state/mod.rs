//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by resource (`challenges`, `solutions`, `admin`, etc.) so
//! individual components depend on small focused models. Each model is a
//! plain struct with pure transitions; `Stores` wraps them in signals and is
//! provided once as context by the root component.

pub mod admin;
pub mod challenges;
pub mod dashboard;
pub mod dialogs;
pub mod leaderboard;
pub mod loadable;
pub mod notifications;
pub mod session;
pub mod solutions;

use leptos::prelude::*;

use admin::AdminState;
use challenges::ChallengesState;
use dashboard::DashboardState;
use leaderboard::LeaderboardState;
use notifications::NotificationsState;
use session::SessionState;
use solutions::SolutionsState;

/// Every reactive store, bundled so handlers can capture one `Copy` value.
#[derive(Clone, Copy)]
pub struct Stores {
    pub session: RwSignal<SessionState>,
    pub dashboard: RwSignal<DashboardState>,
    pub challenges: RwSignal<ChallengesState>,
    pub solutions: RwSignal<SolutionsState>,
    pub leaderboard: RwSignal<LeaderboardState>,
    pub admin: RwSignal<AdminState>,
    pub notifications: RwSignal<NotificationsState>,
}

impl Stores {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::starting()),
            dashboard: RwSignal::new(DashboardState::default()),
            challenges: RwSignal::new(ChallengesState::default()),
            solutions: RwSignal::new(SolutionsState::default()),
            leaderboard: RwSignal::new(LeaderboardState::default()),
            admin: RwSignal::new(AdminState::default()),
            notifications: RwSignal::new(NotificationsState::default()),
        }
    }

    /// Drop every cached list. Used on logout so the next user starts clean.
    pub fn reset_views(&self) {
        self.dashboard.set(DashboardState::default());
        self.challenges.set(ChallengesState::default());
        self.solutions.set(SolutionsState::default());
        self.leaderboard.set(LeaderboardState::default());
        self.admin.set(AdminState::default());
        self.notifications.set(NotificationsState::default());
    }

    /// Current bearer token, read without tracking.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_owned))
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}
