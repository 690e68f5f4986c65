//! Challenges tab: filters, card grid and the two dialogs launched from it.

use leptos::prelude::*;

use crate::components::challenge_card::ChallengeCard;
use crate::components::challenge_filters::ChallengeFilters;
use crate::components::create_challenge_dialog::CreateChallengeDialog;
use crate::components::submit_solution_dialog::SubmitSolutionDialog;
use crate::net::fetch::refresh;
use crate::net::types::Challenge;
use crate::state::Stores;
use crate::state::dashboard::ResourceKind;
use crate::state::dialogs::{CreateChallengeForm, DialogState, SubmitSolutionForm};
use crate::state::session::SessionState;

#[component]
pub fn ChallengesPanel() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let create_dialog = RwSignal::new(DialogState::<CreateChallengeForm>::default());
    let submit_dialog = RwSignal::new(DialogState::<SubmitSolutionForm>::default());

    let is_admin = move || stores.session.with(SessionState::is_admin);
    let on_participate = Callback::new(move |challenge: Challenge| {
        submit_dialog.update(|d| d.open_with(SubmitSolutionForm::for_challenge(&challenge)));
    });
    let reload = Callback::new(move |()| refresh(stores, ResourceKind::Challenges));

    view! {
        <section class="panel panel--challenges">
            <div class="panel__header">
                <h2>"Active challenges"</h2>
                <Show when=is_admin>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| create_dialog.update(|d| d.open_with(CreateChallengeForm::default()))
                    >
                        "+ New Challenge"
                    </button>
                </Show>
            </div>
            <ChallengeFilters/>
            <Show
                when=move || !stores.challenges.with(|s| s.list.loading && !s.list.loaded)
                fallback=|| view! { <p class="panel__loading">"Loading challenges..."</p> }
            >
                <Show
                    when=move || stores.challenges.with(|s| !s.list.data.is_empty())
                    fallback=|| view! { <p class="panel__empty">"No challenges match."</p> }
                >
                    <div class="panel__grid">
                        {move || {
                            stores
                                .challenges
                                .with(|s| s.list.data.clone())
                                .into_iter()
                                .map(|challenge| view! { <ChallengeCard challenge on_participate/> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
            <Show when=move || create_dialog.with(|d| d.open)>
                <CreateChallengeDialog dialog=create_dialog on_success=reload/>
            </Show>
            <Show when=move || submit_dialog.with(|d| d.open)>
                <SubmitSolutionDialog dialog=submit_dialog on_success=reload/>
            </Show>
        </section>
    }
}
