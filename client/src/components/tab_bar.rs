//! Primary tab selector. Admin-only tabs are not rendered for other roles.

use leptos::prelude::*;

use crate::net::fetch::refresh;
use crate::net::types::Role;
use crate::state::Stores;
use crate::state::dashboard::Tab;

#[component]
pub fn TabBar() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let role = move || stores.session.with(|s| s.user.as_ref().map_or(Role::Student, |u| u.role));

    let select = move |tab: Tab| {
        let role = stores.session.with_untracked(|s| s.user.as_ref().map_or(Role::Student, |u| u.role));
        if let Some(kind) = stores.dashboard.try_update(|d| d.select_tab(tab, role)).flatten() {
            refresh(stores, kind);
        }
    };

    view! {
        <nav class="tab-bar">
            {move || {
                Tab::visible_for(role())
                    .into_iter()
                    .map(|tab| {
                        let active = move || stores.dashboard.with(|d| d.active_tab == tab);
                        view! {
                            <button
                                class="tab-bar__tab"
                                class:tab-bar__tab--active=active
                                on:click=move |_| select(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
