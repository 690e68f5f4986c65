//! Async REST client for the campus backend.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses become `CliError::Api` carrying the backend
//! `detail`. Login and registration fall back to fixed messages; every other
//! call falls back to `<action> failed`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wire::endpoints;
use wire::{
    AdminStats, AuthResponse, Challenge, ChallengeFilter, Evaluation, LOGIN_FAILED, LeaderboardEntry,
    LoginRequest, MessageResponse, NewChallenge, NewSolution, Notification, REGISTRATION_FAILED,
    RegisterRequest, Solution, User, error_message,
};

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

fn failure_fallback(action: &str) -> String {
    format!("{action} failed")
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        query: &[(&'static str, String)],
        body: Option<&B>,
        fallback: &str,
    ) -> Result<T, CliError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, endpoints::bearer(token));
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, "request");
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), path, "request rejected");
            return Err(CliError::Api { status: status.as_u16(), message: error_message(&text, fallback) });
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>, action: &str) -> Result<T, CliError> {
        self.call::<(), T>(Method::GET, path, token, &[], None, &failure_fallback(action)).await
    }

    /// # Errors
    ///
    /// Returns `CliError::Api` with the backend detail or "Login failed".
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, CliError> {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        self.call(Method::POST, endpoints::LOGIN, None, &[], Some(&body), LOGIN_FAILED).await
    }

    /// # Errors
    ///
    /// Returns `CliError::Api` with the backend detail or "Registration failed".
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, CliError> {
        self.call(Method::POST, endpoints::REGISTER, None, &[], Some(request), REGISTRATION_FAILED).await
    }

    /// # Errors
    ///
    /// Returns an error if the token is rejected or the request fails.
    pub async fn me(&self, token: &str) -> Result<User, CliError> {
        self.get(endpoints::ME, Some(token), "profile request").await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn challenges(&self, token: &str, filter: &ChallengeFilter) -> Result<Vec<Challenge>, CliError> {
        let query = filter.query_pairs();
        self.call::<(), _>(Method::GET, endpoints::CHALLENGES, Some(token), &query, None, "challenge list failed")
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the challenge does not exist or the request fails.
    pub async fn challenge(&self, token: &str, id: &str) -> Result<Challenge, CliError> {
        self.get(&endpoints::challenge(id), Some(token), "challenge request").await
    }

    /// # Errors
    ///
    /// Returns an error if the caller is not an admin or the request fails.
    pub async fn create_challenge(&self, token: &str, challenge: &NewChallenge) -> Result<Challenge, CliError> {
        self.call(Method::POST, endpoints::CHALLENGES, Some(token), &[], Some(challenge), "create challenge failed")
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn my_solutions(&self, token: &str) -> Result<Vec<Solution>, CliError> {
        self.get(endpoints::MY_SOLUTIONS, Some(token), "solution list").await
    }

    /// # Errors
    ///
    /// Returns an error if the caller is not an admin or the request fails.
    pub async fn all_solutions(&self, token: &str) -> Result<Vec<Solution>, CliError> {
        self.get(endpoints::SOLUTIONS, Some(token), "solution list").await
    }

    /// # Errors
    ///
    /// Returns an error if the backend rejects the submission.
    pub async fn submit_solution(&self, token: &str, solution: &NewSolution) -> Result<Solution, CliError> {
        self.call(Method::POST, endpoints::SOLUTIONS, Some(token), &[], Some(solution), "submit solution failed")
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the caller is not an admin or the backend rejects the score.
    pub async fn evaluate_solution(&self, token: &str, evaluation: &Evaluation) -> Result<MessageResponse, CliError> {
        self.call(
            Method::PUT,
            endpoints::EVALUATE_SOLUTION,
            Some(token),
            &[],
            Some(evaluation),
            "evaluate solution failed",
        )
        .await
    }

    /// Public ranking; no token is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, CliError> {
        self.get(endpoints::LEADERBOARD, None, "leaderboard request").await
    }

    /// # Errors
    ///
    /// Returns an error if the caller is not an admin or the request fails.
    pub async fn admin_stats(&self, token: &str) -> Result<AdminStats, CliError> {
        self.get(endpoints::ADMIN_STATS, Some(token), "stats request").await
    }

    /// # Errors
    ///
    /// Returns an error if the caller is not an admin or the request fails.
    pub async fn admin_users(&self, token: &str) -> Result<Vec<User>, CliError> {
        self.get(endpoints::ADMIN_USERS, Some(token), "user list").await
    }

    /// # Errors
    ///
    /// Returns an error if the caller is not an admin or the user does not exist.
    pub async fn toggle_user_active(&self, token: &str, user_id: &str) -> Result<MessageResponse, CliError> {
        self.call::<(), _>(
            Method::PUT,
            &endpoints::toggle_user_active(user_id),
            Some(token),
            &[],
            None,
            "toggle user failed",
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn notifications(&self, token: &str) -> Result<Vec<Notification>, CliError> {
        self.get(endpoints::NOTIFICATIONS, Some(token), "notification list").await
    }

    /// # Errors
    ///
    /// Returns an error if the notification does not exist or the request fails.
    pub async fn mark_notification_read(&self, token: &str, id: &str) -> Result<MessageResponse, CliError> {
        self.call::<(), _>(Method::PUT, &endpoints::notification_read(id), Some(token), &[], None, "mark read failed")
            .await
    }
}
