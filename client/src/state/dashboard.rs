//! Tab selection for the authenticated dashboard.
//!
//! DESIGN
//! ======
//! Selecting a tab is the only trigger for the read cycle. `select_tab`
//! returns the single resource the caller must fetch, so the mapping from
//! view to request is explicit and testable.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{Role, endpoints};

/// A backend read performed by the fetch cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Challenges,
    MySolutions,
    Leaderboard,
    AdminStats,
    AllSolutions,
    AdminUsers,
    Notifications,
}

impl ResourceKind {
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Challenges => endpoints::CHALLENGES,
            Self::MySolutions => endpoints::MY_SOLUTIONS,
            Self::Leaderboard => endpoints::LEADERBOARD,
            Self::AdminStats => endpoints::ADMIN_STATS,
            Self::AllSolutions => endpoints::SOLUTIONS,
            Self::AdminUsers => endpoints::ADMIN_USERS,
            Self::Notifications => endpoints::NOTIFICATIONS,
        }
    }

    /// The leaderboard is the only read sent without a bearer token.
    #[must_use]
    pub fn is_public(self) -> bool {
        matches!(self, Self::Leaderboard)
    }
}

/// Primary dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Challenges,
    MySolutions,
    Leaderboard,
    Admin,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Challenges, Self::MySolutions, Self::Leaderboard, Self::Admin];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Challenges => "Challenges",
            Self::MySolutions => "My Solutions",
            Self::Leaderboard => "Leaderboard",
            Self::Admin => "Administration",
        }
    }

    #[must_use]
    pub fn requires_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    #[must_use]
    pub fn resource(self) -> ResourceKind {
        match self {
            Self::Challenges => ResourceKind::Challenges,
            Self::MySolutions => ResourceKind::MySolutions,
            Self::Leaderboard => ResourceKind::Leaderboard,
            Self::Admin => ResourceKind::AdminStats,
        }
    }

    /// Tabs rendered for `role`. Admin-only tabs are absent, not disabled.
    #[must_use]
    pub fn visible_for(role: Role) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|tab| !tab.requires_admin() || role.is_admin())
            .collect()
    }
}

/// Sub-sections inside the admin tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminSection {
    #[default]
    Overview,
    Solutions,
    Users,
}

impl AdminSection {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Solutions, Self::Users];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Solutions => "Solutions",
            Self::Users => "Users",
        }
    }

    #[must_use]
    pub fn resource(self) -> ResourceKind {
        match self {
            Self::Overview => ResourceKind::AdminStats,
            Self::Solutions => ResourceKind::AllSolutions,
            Self::Users => ResourceKind::AdminUsers,
        }
    }
}

/// Active tab and admin sub-section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub active_tab: Tab,
    pub admin_section: AdminSection,
}

impl DashboardState {
    /// Resource to fetch when the dashboard first mounts.
    #[must_use]
    pub fn initial_fetch(&self) -> ResourceKind {
        self.active_tab.resource()
    }

    /// Switch tabs. Returns the one resource to fetch, or `None` when the tab
    /// is already active or not permitted for `role`.
    pub fn select_tab(&mut self, tab: Tab, role: Role) -> Option<ResourceKind> {
        if tab == self.active_tab || (tab.requires_admin() && !role.is_admin()) {
            return None;
        }
        self.active_tab = tab;
        if tab == Tab::Admin {
            self.admin_section = AdminSection::Overview;
        }
        Some(tab.resource())
    }

    /// Switch admin sub-section, with the same contract as [`Self::select_tab`].
    pub fn select_admin_section(&mut self, section: AdminSection, role: Role) -> Option<ResourceKind> {
        if !role.is_admin() || self.active_tab != Tab::Admin || section == self.admin_section {
            return None;
        }
        self.admin_section = section;
        Some(section.resource())
    }
}
