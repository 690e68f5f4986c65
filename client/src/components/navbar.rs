//! Top bar with identity, points, notifications and logout.

use leptos::prelude::*;

use crate::components::notification_bell::NotificationBell;
use crate::state::Stores;
use crate::util::presentation::{badge_icon, capitalize};

#[component]
pub fn Navbar() -> impl IntoView {
    let stores = expect_context::<Stores>();

    let name = move || stores.session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let role = move || {
        stores
            .session
            .with(|s| s.user.as_ref().map(|u| capitalize(u.role.as_str())).unwrap_or_default())
    };
    let points = move || stores.session.with(|s| s.user.as_ref().map_or(0, |u| u.points));
    let badges = move || {
        stores.session.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.badges.iter().map(|b| badge_icon(b)).collect::<String>())
                .unwrap_or_default()
        })
    };

    let on_logout = move |_| crate::net::session::sign_out(stores);

    view! {
        <header class="navbar">
            <span class="navbar__brand">"Campus Quest"</span>
            <span class="navbar__spacer"></span>
            <span class="navbar__points" title="Points">{move || format!("{} pts", points())}</span>
            <span class="navbar__badges">{badges}</span>
            <NotificationBell/>
            <span class="navbar__self">
                {name}
                " ("
                <span class="navbar__role">{role}</span>
                ")"
            </span>
            <button class="btn navbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
