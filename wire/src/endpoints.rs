//! Backend paths, relative to the configured API base (e.g. `https://host/api`).

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const ME: &str = "/me";
pub const CHALLENGES: &str = "/challenges";
pub const SOLUTIONS: &str = "/solutions";
pub const MY_SOLUTIONS: &str = "/solutions/my";
pub const EVALUATE_SOLUTION: &str = "/solutions/evaluate";
pub const LEADERBOARD: &str = "/leaderboard";
pub const ADMIN_STATS: &str = "/admin/stats";
pub const ADMIN_USERS: &str = "/admin/users";
pub const NOTIFICATIONS: &str = "/notifications";

#[must_use]
pub fn challenge(id: &str) -> String {
    format!("{CHALLENGES}/{id}")
}

#[must_use]
pub fn toggle_user_active(user_id: &str) -> String {
    format!("{ADMIN_USERS}/{user_id}/toggle-active")
}

#[must_use]
pub fn notification_read(id: &str) -> String {
    format!("{NOTIFICATIONS}/{id}/read")
}

/// Join an API base and a path, tolerating a trailing slash on the base.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
