//! Administration tab: overview counters, solution review, user management.
//!
//! Rendered only for admin sessions; the tab bar never offers it otherwise.

use leptos::prelude::*;

use crate::components::evaluate_solution_dialog::EvaluateSolutionDialog;
use crate::components::solutions_panel::SolutionItem;
use crate::net::fetch::refresh;
use crate::net::types::{Role, Solution};
use crate::state::Stores;
use crate::state::admin::{AdminState, stat_cards};
use crate::state::dashboard::{AdminSection, ResourceKind};
use crate::state::dialogs::{DialogState, EvaluateForm};
use crate::state::solutions::{pending, scored};
use crate::util::presentation::{capitalize, format_date};

#[component]
pub fn AdminPanel() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let section = move || stores.dashboard.with(|d| d.admin_section);

    let select = move |next: AdminSection| {
        let role = stores.session.with_untracked(|s| s.user.as_ref().map_or(Role::Student, |u| u.role));
        if let Some(kind) = stores.dashboard.try_update(|d| d.select_admin_section(next, role)).flatten() {
            refresh(stores, kind);
        }
    };

    view! {
        <section class="panel panel--admin">
            <nav class="admin-sections">
                {AdminSection::ALL
                    .into_iter()
                    .map(|s| {
                        view! {
                            <button
                                class="admin-sections__tab"
                                class:admin-sections__tab--active=move || section() == s
                                on:click=move |_| select(s)
                            >
                                {s.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || match section() {
                AdminSection::Overview => view! { <AdminOverview/> }.into_any(),
                AdminSection::Solutions => view! { <AdminSolutions/> }.into_any(),
                AdminSection::Users => view! { <AdminUsers/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn AdminOverview() -> impl IntoView {
    let stores = expect_context::<Stores>();

    view! {
        <div class="stat-grid">
            {move || {
                stores
                    .admin
                    .with(|a| stat_cards(&a.stats.data))
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__value">{value}</span>
                                <span class="stat-card__label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn AdminSolutions() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let dialog = RwSignal::new(DialogState::<EvaluateForm>::default());
    let reload = Callback::new(move |()| refresh(stores, ResourceKind::AllSolutions));

    let on_evaluate = move |solution: &Solution| {
        let form = EvaluateForm::for_solution(solution);
        dialog.update(|d| d.open_with(form));
    };

    view! {
        <div class="admin-solutions">
            <h3>{move || stores.solutions.with(|s| format!("Pending evaluation ({})", pending(&s.all.data).len()))}</h3>
            {move || {
                stores
                    .solutions
                    .with(|s| pending(&s.all.data))
                    .into_iter()
                    .map(|solution| {
                        let target = solution.clone();
                        view! {
                            <div class="admin-solutions__item">
                                <SolutionItem solution show_author=true/>
                                <button class="btn btn--primary" on:click=move |_| on_evaluate(&target)>
                                    "Evaluate"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <h3>{move || stores.solutions.with(|s| format!("Scored ({})", scored(&s.all.data).len()))}</h3>
            {move || {
                stores
                    .solutions
                    .with(|s| scored(&s.all.data))
                    .into_iter()
                    .map(|solution| view! { <SolutionItem solution show_author=true/> })
                    .collect_view()
            }}
            <Show when=move || dialog.with(|d| d.open)>
                <EvaluateSolutionDialog dialog on_success=reload/>
            </Show>
        </div>
    }
}

#[component]
fn AdminUsers() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let admin = stores.admin;

    let on_toggle = move |user_id: String| {
        let Some(token) = stores.token() else {
            return;
        };
        if !admin.try_update(|a| a.begin_toggle(&user_id)).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_user_active(&token, &user_id).await {
                Ok(_) => {
                    admin.update(AdminState::toggle_succeeded);
                    refresh(stores, ResourceKind::AdminUsers);
                }
                Err(e) => admin.update(|a| a.toggle_failed(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user_id);
        }
    };

    view! {
        <div class="admin-users">
            <Show when=move || admin.with(|a| a.toggle_error.is_some())>
                <p class="admin-users__error">{move || admin.with(|a| a.toggle_error.clone().unwrap_or_default())}</p>
            </Show>
            <table class="admin-users__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Points"</th>
                        <th>"Joined"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        admin
                            .with(|a| a.users.data.clone())
                            .into_iter()
                            .map(|user| {
                                let id = user.id.clone();
                                let busy_id = user.id.clone();
                                let active = user.is_active;
                                view! {
                                    <tr class:admin-users__row--inactive=!active>
                                        <td>{user.name}</td>
                                        <td>{user.email}</td>
                                        <td>{capitalize(user.role.as_str())}</td>
                                        <td>{user.points}</td>
                                        <td>{user.created_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                        <td>
                                            <button
                                                class="btn admin-users__toggle"
                                                disabled=move || admin.with(|a| a.toggle_pending.as_deref() == Some(busy_id.as_str()))
                                                on:click=move |_| on_toggle(id.clone())
                                            >
                                                {if active { "Active" } else { "Inactive" }}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
