//! Authenticated dashboard: navbar, tab bar and the active tab's panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the session gate once a profile is loaded. The initial tab's
//! resource is fetched on mount; after that only tab selection, filters and
//! dialog success trigger reads.

use leptos::prelude::*;

use crate::components::admin_panel::AdminPanel;
use crate::components::challenges_panel::ChallengesPanel;
use crate::components::leaderboard_panel::LeaderboardPanel;
use crate::components::navbar::Navbar;
use crate::components::solutions_panel::SolutionsPanel;
use crate::components::tab_bar::TabBar;
use crate::net::fetch::refresh;
use crate::state::Stores;
use crate::state::dashboard::Tab;
use crate::state::session::SessionState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stores = expect_context::<Stores>();

    refresh(stores, stores.dashboard.with_untracked(|d| d.initial_fetch()));

    let welcome = move || {
        stores
            .session
            .with(|s| s.user.as_ref().map(|u| format!("Welcome, {}!", u.name)).unwrap_or_default())
    };
    let active_tab = move || stores.dashboard.with(|d| d.active_tab);

    view! {
        <div class="dashboard-page">
            <Navbar/>
            <div class="dashboard-page__hero">
                <h1>{welcome}</h1>
                <p>"Take on challenges, submit solutions and climb the leaderboard."</p>
            </div>
            <TabBar/>
            <main class="dashboard-page__body">
                {move || match active_tab() {
                    Tab::Challenges => view! { <ChallengesPanel/> }.into_any(),
                    Tab::MySolutions => view! { <SolutionsPanel/> }.into_any(),
                    Tab::Leaderboard => view! { <LeaderboardPanel/> }.into_any(),
                    Tab::Admin if stores.session.with(SessionState::is_admin) => view! { <AdminPanel/> }.into_any(),
                    Tab::Admin => ().into_any(),
                }}
            </main>
        </div>
    }
}
