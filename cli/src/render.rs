//! Plain-text rendering for command output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use wire::{AdminStats, Challenge, LeaderboardEntry, Notification, Participation, Solution, User};

/// Date and minute of an ISO 8601 timestamp, e.g. `2030-01-01 00:00`.
#[must_use]
pub fn short_timestamp(raw: &str) -> String {
    raw.get(..16).unwrap_or(raw).replacen('T', " ", 1)
}

fn participation_label(participation: Participation) -> &'static str {
    match participation {
        Participation::Submitted => "submitted",
        Participation::Open => "open",
        Participation::Closed => "deadline passed",
    }
}

#[must_use]
pub fn user(user: &User) -> String {
    let mut out = format!("{} <{}> ({}) {} pts", user.name, user.email, user.role, user.points);
    if !user.badges.is_empty() {
        let _ = write!(out, " badges: {}", user.badges.join(", "));
    }
    out
}

#[must_use]
pub fn challenges(list: &[Challenge]) -> String {
    if list.is_empty() {
        return "no challenges".to_owned();
    }
    list.iter()
        .map(|c| {
            format!(
                "{}  {}  [{}/{}]  {} pts  due {}  {}",
                c.id,
                c.title,
                c.category,
                c.difficulty,
                c.points_reward,
                short_timestamp(&c.deadline),
                participation_label(c.participation()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn challenge_detail(c: &Challenge) -> String {
    let mut out = format!(
        "{}\n  id: {}\n  category: {}  difficulty: {}  status: {}\n  reward: {} pts\n  deadline: {}\n  {}\n",
        c.title,
        c.id,
        c.category,
        c.difficulty,
        c.status,
        c.points_reward,
        short_timestamp(&c.deadline),
        participation_label(c.participation()),
    );
    let _ = writeln!(out, "\n{}", c.description);
    if !c.criteria.is_empty() {
        let _ = writeln!(out, "\nCriteria: {}", c.criteria);
    }
    if !c.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", c.tags.join(", "));
    }
    out.trim_end().to_owned()
}

fn solution_line(s: &Solution) -> String {
    let title = s.challenge_title.clone().unwrap_or_else(|| s.challenge_id.clone());
    let score = s.score.map_or_else(|| "pending".to_owned(), |score| format!("{score} pts"));
    let mut line = format!("{}  {}  {}  submitted {}", s.short_id(), title, score, short_timestamp(&s.submitted_at));
    if let Some(author) = &s.user_name {
        let _ = write!(line, "  by {author}");
    }
    if !s.files.is_empty() {
        let _ = write!(line, "  files: {}", s.file_names().join(", "));
    }
    if let Some(feedback) = &s.feedback {
        let _ = write!(line, "\n    feedback: {feedback}");
    }
    line
}

#[must_use]
pub fn solutions(list: &[Solution]) -> String {
    if list.is_empty() {
        return "no solutions".to_owned();
    }
    list.iter().map(solution_line).collect::<Vec<_>>().join("\n")
}

/// Admin review listing split into pending and scored subsets.
#[must_use]
pub fn review(list: &[Solution]) -> String {
    let (scored, pending): (Vec<&Solution>, Vec<&Solution>) = list.iter().partition(|s| s.is_evaluated());
    let mut out = format!("Pending evaluation ({})\n", pending.len());
    for s in &pending {
        let _ = writeln!(out, "  {} ({})", solution_line(s), s.id);
    }
    let _ = writeln!(out, "Scored ({})", scored.len());
    for s in &scored {
        let _ = writeln!(out, "  {}", solution_line(s));
    }
    out.trim_end().to_owned()
}

fn medal(rank: u32) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "  ",
    }
}

#[must_use]
pub fn leaderboard(entries: &[LeaderboardEntry], limit: usize) -> String {
    if entries.is_empty() {
        return "leaderboard is empty".to_owned();
    }
    entries
        .iter()
        .take(limit)
        .map(|e| format!("{} {:>3}. {}  {} pts  {} badges", medal(e.rank), e.rank, e.name, e.points, e.badges.len()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn stats(s: &AdminStats) -> String {
    format!(
        "users: {}\nchallenges: {} ({} active)\nsolutions: {} ({} evaluated, {} pending)",
        s.total_users,
        s.total_challenges,
        s.active_challenges,
        s.total_solutions,
        s.evaluated_solutions,
        s.pending_evaluations,
    )
}

#[must_use]
pub fn users(list: &[User]) -> String {
    if list.is_empty() {
        return "no users".to_owned();
    }
    list.iter()
        .map(|u| {
            let state = if u.is_active { "active" } else { "inactive" };
            format!("{}  {}  {}  {}  {} pts  {}", u.id, u.name, u.email, u.role, u.points, state)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn notifications(list: &[Notification]) -> String {
    if list.is_empty() {
        return "no notifications".to_owned();
    }
    let unread = list.iter().filter(|n| !n.read).count();
    let mut out = format!("{unread} unread\n");
    for n in list {
        let marker = if n.read { ' ' } else { '*' };
        let _ = writeln!(out, "{marker} {}  {}: {}  ({})", n.id, n.title, n.message, short_timestamp(&n.created_at));
    }
    out.trim_end().to_owned()
}
