//! Category, difficulty, status and search controls for the challenge list.

use std::fmt::Display;

use leptos::prelude::*;

use crate::net::fetch::refresh;
use crate::net::types::{Category, ChallengeFilter, ChallengeStatus, Difficulty};
use crate::state::Stores;
use crate::state::challenges::parse_choice;
use crate::state::dashboard::ResourceKind;
use crate::util::presentation::capitalize;

/// `<option>` list for an enum, labelled with the capitalized wire value.
pub fn choice_options<T: Display + Copy + 'static>(all: &'static [T]) -> impl IntoView {
    all.iter()
        .map(|v| {
            let value = v.to_string();
            let label = capitalize(&value);
            view! { <option value=value>{label}</option> }
        })
        .collect_view()
}

#[component]
pub fn ChallengeFilters() -> impl IntoView {
    let stores = expect_context::<Stores>();

    let apply = move |edit: &dyn Fn(&mut ChallengeFilter)| {
        let mut filter = stores.challenges.with_untracked(|s| s.filter.clone());
        edit(&mut filter);
        if stores.challenges.try_update(|s| s.apply_filter(filter)).unwrap_or(false) {
            refresh(stores, ResourceKind::Challenges);
        }
    };

    view! {
        <div class="challenge-filters">
            <input
                class="challenge-filters__search"
                type="search"
                placeholder="Search challenges"
                prop:value=move || stores.challenges.with(|s| s.filter.search.clone().unwrap_or_default())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    apply(&|f| f.search = Some(text.clone()).filter(|t| !t.trim().is_empty()));
                }
            />
            <select on:change=move |ev| {
                let raw = event_target_value(&ev);
                apply(&|f| f.category = parse_choice::<Category>(&raw));
            }>
                <option value="">"All categories"</option>
                {choice_options(Category::ALL)}
            </select>
            <select on:change=move |ev| {
                let raw = event_target_value(&ev);
                apply(&|f| f.difficulty = parse_choice::<Difficulty>(&raw));
            }>
                <option value="">"All levels"</option>
                {choice_options(Difficulty::ALL)}
            </select>
            <select on:change=move |ev| {
                let raw = event_target_value(&ev);
                apply(&|f| f.status = parse_choice::<ChallengeStatus>(&raw));
            }>
                <option value="">"Any status"</option>
                {choice_options(ChallengeStatus::ALL)}
            </select>
        </div>
    }
}
