//! Admin dialog for publishing a new challenge.

use leptos::prelude::*;

use crate::components::challenge_filters::choice_options;
use crate::net::types::{Category, Difficulty};
use crate::state::Stores;
use crate::state::dialogs::{CreateChallengeForm, DialogState};

#[component]
pub fn CreateChallengeDialog(
    dialog: RwSignal<DialogState<CreateChallengeForm>>,
    on_success: Callback<()>,
) -> impl IntoView {
    let stores = expect_context::<Stores>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match dialog.with_untracked(|d| d.form.to_request()) {
            Ok(request) => request,
            Err(message) => {
                dialog.update(|d| d.failed(message));
                return;
            }
        };
        let Some(token) = stores.token() else {
            return;
        };
        if !dialog.try_update(DialogState::begin_submit).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_challenge(&token, &request).await {
                Ok(_) => {
                    dialog.update(DialogState::succeeded);
                    on_success.run(());
                }
                Err(e) => dialog.update(|d| d.failed(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, request, on_success);
        }
    };

    let on_cancel = move |_| dialog.update(DialogState::close);

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <form class="dialog dialog--challenge" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>"New challenge"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        required
                        prop:value=move || dialog.with(|d| d.form.title.clone())
                        on:input=move |ev| dialog.update(|d| d.form.title = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__textarea"
                        required
                        prop:value=move || dialog.with(|d| d.form.description.clone())
                        on:input=move |ev| dialog.update(|d| d.form.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Category"
                        <select
                            prop:value=move || dialog.with(|d| d.form.category.to_string())
                            on:change=move |ev| {
                                if let Ok(category) = event_target_value(&ev).parse::<Category>() {
                                    dialog.update(|d| d.form.category = category);
                                }
                            }
                        >
                            {choice_options(Category::ALL)}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Difficulty"
                        <select
                            prop:value=move || dialog.with(|d| d.form.difficulty.to_string())
                            on:change=move |ev| {
                                if let Ok(difficulty) = event_target_value(&ev).parse::<Difficulty>() {
                                    dialog.update(|d| d.form.difficulty = difficulty);
                                }
                            }
                        >
                            {choice_options(Difficulty::ALL)}
                        </select>
                    </label>
                </div>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Deadline"
                        <input
                            class="dialog__input"
                            type="datetime-local"
                            required
                            prop:value=move || dialog.with(|d| d.form.deadline.clone())
                            on:input=move |ev| dialog.update(|d| d.form.deadline = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Points"
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            required
                            prop:value=move || dialog.with(|d| d.form.points_reward.clone())
                            on:input=move |ev| dialog.update(|d| d.form.points_reward = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="dialog__label">
                    "Evaluation criteria"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || dialog.with(|d| d.form.criteria.clone())
                        on:input=move |ev| dialog.update(|d| d.form.criteria = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Tags (comma separated)"
                    <input
                        class="dialog__input"
                        prop:value=move || dialog.with(|d| d.form.tags.clone())
                        on:input=move |ev| dialog.update(|d| d.form.tags = event_target_value(&ev))
                    />
                </label>
                <Show when=move || dialog.with(|d| d.error.is_some())>
                    <p class="dialog__error">{move || dialog.with(|d| d.error.clone().unwrap_or_default())}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || dialog.with(|d| d.pending)>
                        {move || if dialog.with(|d| d.pending) { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
