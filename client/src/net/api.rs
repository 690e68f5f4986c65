//! REST API helpers for the campus backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the backend is only
//! reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<T, String>` where the error string is already
//! the user-facing message: the backend `detail` when present, otherwise a
//! fallback naming the action and status. Callers never panic on network
//! failures.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AdminStats, AuthResponse, Challenge, ChallengeFilter, Evaluation, LeaderboardEntry,
    MessageResponse, NewChallenge, NewSolution, Notification, RegisterRequest, Solution, User,
};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{endpoints, error_message};
#[cfg(feature = "hydrate")]
use super::types::{LOGIN_FAILED, LoginRequest, REGISTRATION_FAILED};
#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// API base baked in at build time, e.g. `https://campus.example/api`.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("CAMPUS_API_BASE").unwrap_or("/api")
}

#[cfg(any(test, feature = "hydrate"))]
fn url(path: &str) -> String {
    endpoints::join(api_base(), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Pick the display message for a non-OK response body.
#[cfg(any(test, feature = "hydrate"))]
fn failure_text(body: &str, fallback: &str) -> String {
    error_message(body, fallback)
}

#[cfg(feature = "hydrate")]
fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &endpoints::bearer(token))
}

#[cfg(feature = "hydrate")]
async fn settle<T: DeserializeOwned>(resp: Response, fallback: &str) -> Result<T, String> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(failure_text(&body, fallback));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>, action: &str) -> Result<T, String> {
    let mut builder = Request::get(&url(path));
    if let Some(token) = token {
        builder = authorized(builder, token);
    }
    let resp = builder.send().await.map_err(|e| e.to_string())?;
    let status = resp.status();
    settle(resp, &request_failed_message(action, status)).await
}

#[cfg(feature = "hydrate")]
async fn send_json<B: serde::Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &B,
    action: &str,
) -> Result<T, String> {
    let resp = builder
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = resp.status();
    settle(resp, &request_failed_message(action, status)).await
}

/// Exchange credentials for a token via `POST /login`.
///
/// # Errors
///
/// Returns the backend `detail`, or "Login failed".
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = Request::post(&url(endpoints::LOGIN))
            .json(&body)
            .map_err(|_| LOGIN_FAILED.to_owned())?
            .send()
            .await
            .map_err(|_| LOGIN_FAILED.to_owned())?;
        settle(resp, LOGIN_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /register`. The backend signs the new user in.
///
/// # Errors
///
/// Returns the backend `detail`, or "Registration failed".
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = Request::post(&url(endpoints::REGISTER))
            .json(request)
            .map_err(|_| REGISTRATION_FAILED.to_owned())?
            .send()
            .await
            .map_err(|_| REGISTRATION_FAILED.to_owned())?;
        settle(resp, REGISTRATION_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch the profile behind `token` from `GET /me`.
///
/// # Errors
///
/// Returns an error string if the token is rejected or the request fails.
pub async fn fetch_me(token: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::ME, Some(token), "profile request").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// List challenges from `GET /challenges`, narrowed by `filter`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_challenges(token: &str, filter: &ChallengeFilter) -> Result<Vec<Challenge>, String> {
    #[cfg(feature = "hydrate")]
    {
        let pairs = filter.query_pairs();
        let resp = authorized(Request::get(&url(endpoints::CHALLENGES)), token)
            .query(pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        settle(resp, &request_failed_message("challenge list", status)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, filter);
        Err("not available on server".to_owned())
    }
}

/// Fetch one challenge from `GET /challenges/{id}`.
///
/// # Errors
///
/// Returns an error string if the challenge is missing or the request fails.
pub async fn fetch_challenge(token: &str, id: &str) -> Result<Challenge, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&endpoints::challenge(id), Some(token), "challenge request").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Publish a challenge via `POST /challenges` (admin only).
///
/// # Errors
///
/// Returns the backend `detail` or a status fallback.
pub async fn create_challenge(token: &str, challenge: &NewChallenge) -> Result<Challenge, String> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(Request::post(&url(endpoints::CHALLENGES)), token);
        send_json(builder, challenge, "create challenge").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, challenge);
        Err("not available on server".to_owned())
    }
}

/// List the caller's own solutions from `GET /solutions/my`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_my_solutions(token: &str) -> Result<Vec<Solution>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::MY_SOLUTIONS, Some(token), "solution list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// List every solution from `GET /solutions` (admin only).
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_all_solutions(token: &str) -> Result<Vec<Solution>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::SOLUTIONS, Some(token), "solution list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Submit a solution with inline attachments via `POST /solutions`.
///
/// # Errors
///
/// Returns the backend `detail` or a status fallback.
pub async fn submit_solution(token: &str, solution: &NewSolution) -> Result<Solution, String> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(Request::post(&url(endpoints::SOLUTIONS)), token);
        send_json(builder, solution, "submit solution").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, solution);
        Err("not available on server".to_owned())
    }
}

/// Score a solution via `PUT /solutions/evaluate` (admin only).
///
/// # Errors
///
/// Returns the backend `detail` or a status fallback.
pub async fn evaluate_solution(token: &str, evaluation: &Evaluation) -> Result<MessageResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(Request::put(&url(endpoints::EVALUATE_SOLUTION)), token);
        send_json(builder, evaluation, "evaluate solution").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, evaluation);
        Err("not available on server".to_owned())
    }
}

/// Fetch the public ranking from `GET /leaderboard`. No token is sent.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::LEADERBOARD, None, "leaderboard request").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch aggregate counters from `GET /admin/stats`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_admin_stats(token: &str) -> Result<AdminStats, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::ADMIN_STATS, Some(token), "stats request").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// List every account from `GET /admin/users`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_admin_users(token: &str) -> Result<Vec<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::ADMIN_USERS, Some(token), "user list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Flip a user's active flag via `PUT /admin/users/{id}/toggle-active`.
///
/// # Errors
///
/// Returns the backend `detail` or a status fallback.
pub async fn toggle_user_active(token: &str, user_id: &str) -> Result<MessageResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(Request::put(&url(&endpoints::toggle_user_active(user_id))), token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        settle(resp, &request_failed_message("toggle user", status)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err("not available on server".to_owned())
    }
}

/// List the caller's notifications from `GET /notifications`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_notifications(token: &str) -> Result<Vec<Notification>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::NOTIFICATIONS, Some(token), "notification list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Mark one notification read via `PUT /notifications/{id}/read`.
///
/// # Errors
///
/// Returns the backend `detail` or a status fallback.
pub async fn mark_notification_read(token: &str, id: &str) -> Result<MessageResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(Request::put(&url(&endpoints::notification_read(id))), token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        settle(resp, &request_failed_message("mark read", status)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}
