//! Leaderboard tab: the top ranked users.

use leptos::prelude::*;

use crate::state::Stores;
use crate::state::leaderboard::{TOP_N, top};
use crate::util::presentation::{badge_icon, rank_class};

#[component]
pub fn LeaderboardPanel() -> impl IntoView {
    let stores = expect_context::<Stores>();

    view! {
        <section class="panel panel--leaderboard">
            <h2>"Leaderboard"</h2>
            <ol class="leaderboard">
                {move || {
                    let entries = stores.leaderboard.with(|s| top(&s.entries.data, TOP_N));
                    entries
                        .into_iter()
                        .map(|entry| {
                            let icons: String = entry.badges.iter().map(|b| badge_icon(b)).collect();
                            view! {
                                <li class="leaderboard__row">
                                    <span class=rank_class(entry.rank)>{entry.rank}</span>
                                    <span class="leaderboard__name">{entry.name}</span>
                                    <span class="leaderboard__badges" title=format!("{} badges", entry.badges.len())>
                                        {icons}
                                    </span>
                                    <span class="leaderboard__points">{format!("{} pts", entry.points)}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </section>
    }
}
