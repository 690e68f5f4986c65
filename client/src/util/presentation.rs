//! Render-phase mappings from raw records to display values.
//!
//! All pure. Unknown enum values map to the neutral gray style and unknown
//! badges to the generic trophy.

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

use time::Date;
use time::macros::format_description;

use crate::net::types::{Category, Difficulty, Participation};

const NEUTRAL: &str = "pill pill--gray";

#[must_use]
pub fn category_class(category: Category) -> &'static str {
    match category {
        Category::Technology => "pill pill--blue",
        Category::Sustainability => "pill pill--green",
        Category::Education => "pill pill--purple",
        Category::Health => "pill pill--red",
        Category::Innovation => "pill pill--yellow",
        Category::Other => NEUTRAL,
    }
}

#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "dot dot--green",
        Difficulty::Intermediate => "dot dot--yellow",
        Difficulty::Advanced => "dot dot--red",
        Difficulty::Other => "dot dot--gray",
    }
}

/// Gold, silver and bronze for the podium; default style below it.
#[must_use]
pub fn rank_class(rank: u32) -> &'static str {
    match rank {
        1 => "rank rank--gold",
        2 => "rank rank--silver",
        3 => "rank rank--bronze",
        _ => "rank",
    }
}

#[must_use]
pub fn badge_icon(badge: &str) -> &'static str {
    match badge {
        "first_solution" => "🎯",
        "innovator" => "💡",
        "top_performer" => "🥇",
        "eco_warrior" => "🌱",
        "mentor" => "🎓",
        "streak" => "🔥",
        _ => "🏆",
    }
}

/// Button label and style for a challenge card action.
#[must_use]
pub fn participation_label(participation: Participation) -> (&'static str, &'static str) {
    match participation {
        Participation::Submitted => ("Submitted", "card-action card-action--done"),
        Participation::Open => ("Participate", "card-action card-action--open"),
        Participation::Closed => ("Deadline passed", "card-action card-action--closed"),
    }
}

/// `dd/mm/yyyy` from an ISO 8601 timestamp, or the raw text if it does not parse.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let input = format_description!("[year]-[month]-[day]");
    let output = format_description!("[day]/[month]/[year]");
    raw.get(..10)
        .and_then(|prefix| Date::parse(prefix, input).ok())
        .and_then(|date| date.format(output).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Upper-case the first character, e.g. `beginner` -> `Beginner`.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
