//! One challenge in the list, with its participation action.

use leptos::prelude::*;

use crate::net::types::{Challenge, Participation};
use crate::util::presentation::{capitalize, category_class, difficulty_class, format_date, participation_label};

#[component]
pub fn ChallengeCard(challenge: Challenge, on_participate: Callback<Challenge>) -> impl IntoView {
    let participation = challenge.participation();
    let (action_label, action_class) = participation_label(participation);
    let deadline = format_date(&challenge.deadline);
    let tags = challenge.tags.clone();
    let target = challenge.clone();

    view! {
        <article class="challenge-card">
            <div class="challenge-card__meta">
                <span class=category_class(challenge.category)>{capitalize(challenge.category.as_str())}</span>
                <span class=difficulty_class(challenge.difficulty) title=capitalize(challenge.difficulty.as_str())></span>
            </div>
            <h3 class="challenge-card__title">{challenge.title}</h3>
            <p class="challenge-card__description">{challenge.description}</p>
            <div class="challenge-card__tags">
                {tags.into_iter().map(|tag| view! { <span class="tag">{format!("#{tag}")}</span> }).collect_view()}
            </div>
            <div class="challenge-card__footer">
                <span>{format!("⏰ {deadline}")}</span>
                <span class="challenge-card__reward">{format!("🏆 {} pts", challenge.points_reward)}</span>
            </div>
            {match participation {
                Participation::Open => {
                    view! {
                        <button class=action_class on:click=move |_| on_participate.run(target.clone())>
                            {action_label}
                        </button>
                    }
                        .into_any()
                }
                _ => view! { <span class=action_class>{action_label}</span> }.into_any(),
            }}
        </article>
    }
}
