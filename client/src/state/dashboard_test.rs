use super::*;

// =============================================================
// Tab visibility
// =============================================================

#[test]
fn admin_tab_absent_for_non_admins() {
    for role in [Role::Student, Role::Professor, Role::Other] {
        let tabs = Tab::visible_for(role);
        assert!(!tabs.contains(&Tab::Admin), "{role} must not see admin");
        assert_eq!(tabs.len(), 3);
    }
}

#[test]
fn admin_sees_all_tabs_in_order() {
    assert_eq!(Tab::visible_for(Role::Admin), Tab::ALL.to_vec());
}

// =============================================================
// Tab switching
// =============================================================

#[test]
fn default_state_fetches_challenges_first() {
    let state = DashboardState::default();
    assert_eq!(state.active_tab, Tab::Challenges);
    assert_eq!(state.initial_fetch(), ResourceKind::Challenges);
}

#[test]
fn switching_tab_yields_exactly_that_tabs_resource() {
    let mut state = DashboardState::default();
    assert_eq!(state.select_tab(Tab::MySolutions, Role::Student), Some(ResourceKind::MySolutions));
    assert_eq!(state.select_tab(Tab::Leaderboard, Role::Student), Some(ResourceKind::Leaderboard));
    assert_eq!(state.select_tab(Tab::Challenges, Role::Student), Some(ResourceKind::Challenges));
    assert_eq!(state.select_tab(Tab::Admin, Role::Admin), Some(ResourceKind::AdminStats));
}

#[test]
fn reselecting_active_tab_fetches_nothing() {
    let mut state = DashboardState::default();
    assert_eq!(state.select_tab(Tab::Challenges, Role::Student), None);
}

#[test]
fn non_admin_cannot_switch_to_admin() {
    let mut state = DashboardState::default();
    assert_eq!(state.select_tab(Tab::Admin, Role::Student), None);
    assert_eq!(state.active_tab, Tab::Challenges);
}

#[test]
fn entering_admin_resets_section_to_overview() {
    let mut state = DashboardState { active_tab: Tab::Leaderboard, admin_section: AdminSection::Users };
    state.select_tab(Tab::Admin, Role::Admin);
    assert_eq!(state.admin_section, AdminSection::Overview);
}

// =============================================================
// Admin sections
// =============================================================

#[test]
fn admin_sections_map_to_their_reads() {
    let mut state = DashboardState::default();
    state.select_tab(Tab::Admin, Role::Admin);
    assert_eq!(
        state.select_admin_section(AdminSection::Solutions, Role::Admin),
        Some(ResourceKind::AllSolutions)
    );
    assert_eq!(
        state.select_admin_section(AdminSection::Users, Role::Admin),
        Some(ResourceKind::AdminUsers)
    );
    assert_eq!(
        state.select_admin_section(AdminSection::Overview, Role::Admin),
        Some(ResourceKind::AdminStats)
    );
}

#[test]
fn admin_section_ignored_outside_admin_tab() {
    let mut state = DashboardState::default();
    assert_eq!(state.select_admin_section(AdminSection::Users, Role::Admin), None);
}

// =============================================================
// Resources
// =============================================================

#[test]
fn only_leaderboard_is_public() {
    let all = [
        ResourceKind::Challenges,
        ResourceKind::MySolutions,
        ResourceKind::Leaderboard,
        ResourceKind::AdminStats,
        ResourceKind::AllSolutions,
        ResourceKind::AdminUsers,
        ResourceKind::Notifications,
    ];
    let public: Vec<_> = all.into_iter().filter(|r| r.is_public()).collect();
    assert_eq!(public, vec![ResourceKind::Leaderboard]);
}

#[test]
fn resource_endpoints_match_backend_paths() {
    assert_eq!(ResourceKind::MySolutions.endpoint(), "/solutions/my");
    assert_eq!(ResourceKind::AdminUsers.endpoint(), "/admin/users");
}
