//! Dialog for submitting a solution with file attachments.
//!
//! Files are read and base64-encoded as soon as they are picked. Picks
//! accumulate; each row can be removed before submitting. Oversized files are
//! refused with an inline message and never appended.

use leptos::prelude::*;

use crate::state::Stores;
use crate::state::dialogs::{DialogState, SubmitSolutionForm};
use crate::util::files::{ACCEPT, human_size};

#[component]
pub fn SubmitSolutionDialog(
    dialog: RwSignal<DialogState<SubmitSolutionForm>>,
    on_success: Callback<()>,
) -> impl IntoView {
    let stores = expect_context::<Stores>();

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let picked = crate::util::files::selected_files(&input);
            input.set_value("");
            leptos::task::spawn_local(async move {
                for file in picked {
                    match crate::util::files::read_attachment(file).await {
                        Ok(attachment) => dialog.update(|d| d.form.add_file(attachment)),
                        Err(message) => dialog.update(|d| d.error = Some(message)),
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

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
            match crate::net::api::submit_solution(&token, &request).await {
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
            <form class="dialog dialog--solution" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>{move || dialog.with(|d| format!("Submit solution: {}", d.form.challenge_title))}</h2>
                <label class="dialog__label">
                    "Describe your solution"
                    <textarea
                        class="dialog__textarea"
                        required
                        prop:value=move || dialog.with(|d| d.form.content.clone())
                        on:input=move |ev| dialog.update(|d| d.form.content = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Attachments"
                    <input class="dialog__input" type="file" multiple accept=ACCEPT on:change=on_files/>
                </label>
                <ul class="dialog__files">
                    {move || {
                        dialog
                            .with(|d| d.form.files.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(index, file)| {
                                view! {
                                    <li class="dialog__file">
                                        <span>{file.name.clone()}</span>
                                        <span class="dialog__file-size">{human_size(file.decoded_len())}</span>
                                        <button
                                            class="btn dialog__file-remove"
                                            type="button"
                                            title="Remove file"
                                            on:click=move |_| dialog.update(|d| d.form.remove_file(index))
                                        >
                                            "✕"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <Show when=move || dialog.with(|d| d.error.is_some())>
                    <p class="dialog__error">{move || dialog.with(|d| d.error.clone().unwrap_or_default())}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || dialog.with(|d| d.pending)>
                        {move || if dialog.with(|d| d.pending) { "Submitting..." } else { "Submit" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
