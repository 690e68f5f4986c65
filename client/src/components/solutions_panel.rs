//! My-solutions tab: the caller's submissions with score and feedback.

use leptos::prelude::*;

use crate::net::types::Solution;
use crate::state::Stores;
use crate::util::presentation::format_date;

/// One submission row, shared with the admin solutions section.
#[component]
pub fn SolutionItem(solution: Solution, #[prop(optional)] show_author: bool) -> impl IntoView {
    let heading = solution
        .challenge_title
        .clone()
        .unwrap_or_else(|| format!("Solution {}", solution.short_id()));
    let author = solution.user_name.clone().unwrap_or_default();
    let files = solution.file_names().join(", ");
    let has_files = !solution.files.is_empty();
    let status = solution
        .score
        .map_or_else(|| "Pending evaluation".to_owned(), |score| format!("{score} pts"));
    let feedback = solution.feedback.clone();
    let has_feedback = feedback.is_some();

    view! {
        <article class="solution" class:solution--scored=solution.is_evaluated()>
            <div class="solution__header">
                <h3>{heading}</h3>
                <span class="solution__status">{status}</span>
            </div>
            <Show when=move || show_author>
                <p class="solution__author">{author.clone()}</p>
            </Show>
            <p class="solution__content">{solution.content.clone()}</p>
            <Show when=move || has_files>
                <p class="solution__files">{format!("📎 {files}")}</p>
            </Show>
            <p class="solution__date">{format!("Submitted {}", format_date(&solution.submitted_at))}</p>
            <Show when=move || has_feedback>
                <div class="solution__feedback">
                    <h4>"Reviewer feedback"</h4>
                    <p>{feedback.clone().unwrap_or_default()}</p>
                </div>
            </Show>
        </article>
    }
}

#[component]
pub fn SolutionsPanel() -> impl IntoView {
    let stores = expect_context::<Stores>();

    view! {
        <section class="panel panel--solutions">
            <h2>"My solutions"</h2>
            <Show
                when=move || stores.solutions.with(|s| !s.mine.data.is_empty())
                fallback=move || {
                    view! {
                        <p class="panel__empty">
                            {move || {
                                if stores.solutions.with(|s| s.mine.loading) {
                                    "Loading solutions..."
                                } else {
                                    "You have not submitted any solutions yet."
                                }
                            }}
                        </p>
                    }
                }
            >
                {move || {
                    stores
                        .solutions
                        .with(|s| s.mine.data.clone())
                        .into_iter()
                        .map(|solution| view! { <SolutionItem solution/> })
                        .collect_view()
                }}
            </Show>
        </section>
    }
}
