//! Admin dialog for scoring a pending solution.

use leptos::prelude::*;

use crate::net::types::MAX_SCORE;
use crate::state::Stores;
use crate::state::dialogs::{DialogState, EvaluateForm};

#[component]
pub fn EvaluateSolutionDialog(dialog: RwSignal<DialogState<EvaluateForm>>, on_success: Callback<()>) -> impl IntoView {
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
            match crate::net::api::evaluate_solution(&token, &request).await {
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
            <form class="dialog dialog--evaluate" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>{move || dialog.with(|d| format!("Evaluate: {}", d.form.summary))}</h2>
                <label class="dialog__label">
                    {EvaluateForm::score_label()}
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        max=MAX_SCORE.to_string()
                        required
                        prop:value=move || dialog.with(|d| d.form.score.clone())
                        on:input=move |ev| dialog.update(|d| d.form.score = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Feedback"
                    <textarea
                        class="dialog__textarea"
                        required
                        prop:value=move || dialog.with(|d| d.form.feedback.clone())
                        on:input=move |ev| dialog.update(|d| d.form.feedback = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || dialog.with(|d| d.error.is_some())>
                    <p class="dialog__error">{move || dialog.with(|d| d.error.clone().unwrap_or_default())}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || dialog.with(|d| d.pending)>
                        {move || if dialog.with(|d| d.pending) { "Saving..." } else { "Save evaluation" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
