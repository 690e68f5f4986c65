//! In-process stand-in for the campus backend.
//!
//! Implements just enough of the REST surface for the CLI flows: bearer
//! auth, role checks, `{ "detail": ... }` error bodies and the records the
//! real backend returns.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use wire::{
    AdminStats, AuthResponse, Challenge, ChallengeStatus, Evaluation, LeaderboardEntry, LoginRequest,
    MessageResponse, NewChallenge, NewSolution, Notification, RegisterRequest, Role, Solution, User,
};

pub const ADMIN_EMAIL: &str = "admin@x.com";
pub const ADMIN_PASSWORD: &str = "admin-pass";
pub const STUDENT_EMAIL: &str = "ana@x.com";
pub const STUDENT_PASSWORD: &str = "ana-pass";
/// Login with this email makes the stub fail without an error body.
pub const BROKEN_EMAIL: &str = "boom@x.com";

const NOW: &str = "2025-03-01T12:00:00";

#[derive(Default)]
pub struct Backend {
    users: Vec<(User, String)>,
    tokens: HashMap<String, String>,
    challenges: Vec<Challenge>,
    solutions: Vec<Solution>,
    notifications: Vec<(String, Notification)>,
    /// Read endpoints that answer 500, by handler name.
    failing: HashSet<&'static str>,
}

type Shared = Arc<Mutex<Backend>>;
type Rejection = (StatusCode, Json<Value>);
type Reply<T> = Result<Json<T>, Rejection>;

fn reject(status: StatusCode, detail: &str) -> Rejection {
    (status, Json(json!({ "detail": detail })))
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn user(name: &str, email: &str, role: Role) -> User {
    User {
        id: new_id(),
        name: name.to_owned(),
        email: email.to_owned(),
        role,
        points: 0,
        badges: Vec::new(),
        created_at: Some(NOW.to_owned()),
        is_active: true,
    }
}

impl Backend {
    fn seeded() -> Self {
        let mut backend = Self::default();
        backend.users.push((user("Admin", ADMIN_EMAIL, Role::Admin), ADMIN_PASSWORD.to_owned()));
        backend.users.push((user("Ana", STUDENT_EMAIL, Role::Student), STUDENT_PASSWORD.to_owned()));
        backend.challenges.push(Challenge {
            id: new_id(),
            title: "Campus energy".to_owned(),
            description: "Cut energy waste in the library".to_owned(),
            category: wire::Category::Sustainability,
            difficulty: wire::Difficulty::Beginner,
            deadline: "2030-06-30T23:59:00".to_owned(),
            criteria: String::new(),
            points_reward: 50,
            tags: vec!["energy".to_owned()],
            status: ChallengeStatus::Active,
            created_at: Some(NOW.to_owned()),
            can_submit: true,
            user_submitted: false,
        });
        backend
    }

    fn issue_token(&mut self, user_id: &str) -> String {
        let token = new_id();
        self.tokens.insert(token.clone(), user_id.to_owned());
        token
    }

    fn caller(&self, headers: &HeaderMap) -> Result<User, Rejection> {
        let token = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| reject(StatusCode::UNAUTHORIZED, "Not authenticated"))?;
        let user_id = self
            .tokens
            .get(token)
            .ok_or_else(|| reject(StatusCode::UNAUTHORIZED, "Could not validate credentials"))?;
        self.users
            .iter()
            .map(|(u, _)| u)
            .find(|u| &u.id == user_id)
            .cloned()
            .ok_or_else(|| reject(StatusCode::UNAUTHORIZED, "Could not validate credentials"))
    }

    fn admin(&self, headers: &HeaderMap) -> Result<User, Rejection> {
        let caller = self.caller(headers)?;
        if caller.role.is_admin() { Ok(caller) } else { Err(reject(StatusCode::FORBIDDEN, "Admin access required")) }
    }

    fn available(&self, read: &'static str) -> Result<(), Rejection> {
        if self.failing.contains(read) {
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(Value::Null)))
        } else {
            Ok(())
        }
    }

    fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().map(|(u, _)| u).find(|u| u.id == id)
    }

    /// Challenge as seen by `caller`, with participation flags resolved.
    fn challenge_for(&self, challenge: &Challenge, caller: &User) -> Challenge {
        let submitted = self
            .solutions
            .iter()
            .any(|s| s.challenge_id == challenge.id && s.user_id.as_deref() == Some(caller.id.as_str()));
        Challenge { user_submitted: submitted, can_submit: !submitted, ..challenge.clone() }
    }
}

/// Start the stub on an ephemeral port. Returns the API base URL.
pub async fn spawn() -> (String, Shared) {
    let state: Shared = Arc::new(Mutex::new(Backend::seeded()));
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/register", post(register))
        .route("/api/me", get(me))
        .route("/api/challenges", get(list_challenges).post(create_challenge))
        .route("/api/challenges/{id}", get(get_challenge))
        .route("/api/solutions", get(all_solutions).post(submit_solution))
        .route("/api/solutions/my", get(my_solutions))
        .route("/api/solutions/evaluate", put(evaluate))
        .route("/api/leaderboard", get(leaderboard))
        .route("/api/admin/stats", get(stats))
        .route("/api/admin/users", get(users))
        .route("/api/admin/users/{id}/toggle-active", put(toggle_active))
        .route("/api/notifications", get(notifications))
        .route("/api/notifications/{id}/read", put(mark_read))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve stub") });
    (format!("http://{addr}/api"), state)
}

async fn login(State(state): State<Shared>, Json(body): Json<LoginRequest>) -> Result<Json<AuthResponse>, Response> {
    if body.email == BROKEN_EMAIL {
        return Err(StatusCode::INTERNAL_SERVER_ERROR.into_response());
    }
    let mut backend = state.lock().expect("backend lock");
    let found = backend
        .users
        .iter()
        .find(|(u, pw)| u.email == body.email && *pw == body.password && u.is_active)
        .map(|(u, _)| u.clone());
    let Some(user) = found else {
        return Err(reject(StatusCode::UNAUTHORIZED, "Incorrect email or password").into_response());
    };
    let access_token = backend.issue_token(&user.id);
    Ok(Json(AuthResponse { access_token, token_type: "bearer".to_owned(), user }))
}

async fn register(State(state): State<Shared>, Json(body): Json<RegisterRequest>) -> Reply<AuthResponse> {
    let mut backend = state.lock().expect("backend lock");
    if backend.users.iter().any(|(u, _)| u.email == body.email) {
        return Err(reject(StatusCode::BAD_REQUEST, "Email already registered"));
    }
    let created = user(&body.name, &body.email, body.role);
    backend.users.push((created.clone(), body.password));
    let access_token = backend.issue_token(&created.id);
    Ok(Json(AuthResponse { access_token, token_type: "bearer".to_owned(), user: created }))
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Reply<User> {
    let backend = state.lock().expect("backend lock");
    backend.caller(&headers).map(Json)
}

async fn list_challenges(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Reply<Vec<Challenge>> {
    let backend = state.lock().expect("backend lock");
    let caller = backend.caller(&headers)?;
    backend.available("challenges")?;
    let list = backend
        .challenges
        .iter()
        .filter(|c| query.get("category").is_none_or(|v| c.category.as_str() == v))
        .filter(|c| query.get("difficulty").is_none_or(|v| c.difficulty.as_str() == v))
        .filter(|c| query.get("status").is_none_or(|v| c.status.as_str() == v))
        .filter(|c| {
            query
                .get("search")
                .is_none_or(|q| c.title.to_lowercase().contains(&q.to_lowercase()))
        })
        .map(|c| backend.challenge_for(c, &caller))
        .collect();
    Ok(Json(list))
}

async fn get_challenge(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply<Challenge> {
    let backend = state.lock().expect("backend lock");
    let caller = backend.caller(&headers)?;
    backend
        .challenges
        .iter()
        .find(|c| c.id == id)
        .map(|c| Json(backend.challenge_for(c, &caller)))
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Challenge not found"))
}

async fn create_challenge(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<NewChallenge>,
) -> Reply<Challenge> {
    let mut backend = state.lock().expect("backend lock");
    backend.admin(&headers)?;
    if body.points_reward < 1 {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": [{ "loc": ["body", "points_reward"], "msg": "must be positive" }] })),
        ));
    }
    let challenge = Challenge {
        id: new_id(),
        title: body.title,
        description: body.description,
        category: body.category,
        difficulty: body.difficulty,
        deadline: body.deadline,
        criteria: body.criteria,
        points_reward: body.points_reward,
        tags: body.tags,
        status: ChallengeStatus::Active,
        created_at: Some(NOW.to_owned()),
        can_submit: true,
        user_submitted: false,
    };
    backend.challenges.push(challenge.clone());
    Ok(Json(challenge))
}

async fn submit_solution(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<NewSolution>,
) -> Reply<Solution> {
    let mut backend = state.lock().expect("backend lock");
    let caller = backend.caller(&headers)?;
    let Some(challenge) = backend.challenges.iter().find(|c| c.id == body.challenge_id).cloned() else {
        return Err(reject(StatusCode::NOT_FOUND, "Challenge not found"));
    };
    if backend.challenge_for(&challenge, &caller).user_submitted {
        return Err(reject(StatusCode::BAD_REQUEST, "You have already submitted a solution for this challenge"));
    }
    let solution = Solution {
        id: new_id(),
        challenge_id: challenge.id,
        challenge_title: Some(challenge.title),
        user_id: Some(caller.id),
        user_name: Some(caller.name),
        content: body.content,
        files: body.files,
        score: None,
        feedback: None,
        submitted_at: NOW.to_owned(),
        evaluated_at: None,
    };
    backend.solutions.push(solution.clone());
    Ok(Json(solution))
}

async fn my_solutions(State(state): State<Shared>, headers: HeaderMap) -> Reply<Vec<Solution>> {
    let backend = state.lock().expect("backend lock");
    let caller = backend.caller(&headers)?;
    backend.available("my_solutions")?;
    let mine = backend
        .solutions
        .iter()
        .filter(|s| s.user_id.as_deref() == Some(caller.id.as_str()))
        .cloned()
        .collect();
    Ok(Json(mine))
}

async fn all_solutions(State(state): State<Shared>, headers: HeaderMap) -> Reply<Vec<Solution>> {
    let backend = state.lock().expect("backend lock");
    backend.admin(&headers)?;
    backend.available("all_solutions")?;
    Ok(Json(backend.solutions.clone()))
}

async fn evaluate(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Evaluation>,
) -> Reply<MessageResponse> {
    let mut backend = state.lock().expect("backend lock");
    backend.admin(&headers)?;
    let Some(solution) = backend.solutions.iter_mut().find(|s| s.id == body.solution_id) else {
        return Err(reject(StatusCode::NOT_FOUND, "Solution not found"));
    };
    solution.score = Some(body.score);
    solution.feedback = Some(body.feedback);
    solution.evaluated_at = Some(NOW.to_owned());
    let author = solution.user_id.clone().unwrap_or_default();
    let title = solution.challenge_title.clone().unwrap_or_default();
    if let Some(user) = backend.user_mut(&author) {
        user.points += body.score;
    }
    backend.notifications.push((
        author,
        Notification {
            id: new_id(),
            title: "Solution evaluated".to_owned(),
            message: format!("Your solution for {title} scored {} points", body.score),
            created_at: NOW.to_owned(),
            read: false,
        },
    ));
    Ok(Json(MessageResponse { message: "Solution evaluated successfully".to_owned() }))
}

async fn leaderboard(State(state): State<Shared>) -> Json<Vec<LeaderboardEntry>> {
    let backend = state.lock().expect("backend lock");
    let mut ranked: Vec<&User> = backend.users.iter().map(|(u, _)| u).filter(|u| u.is_active).collect();
    ranked.sort_by(|a, b| b.points.cmp(&a.points));
    let entries = ranked
        .into_iter()
        .zip(1..)
        .map(|(u, rank)| LeaderboardEntry {
            user_id: u.id.clone(),
            name: u.name.clone(),
            points: u.points,
            badges: u.badges.clone(),
            rank,
        })
        .collect();
    Json(entries)
}

async fn stats(State(state): State<Shared>, headers: HeaderMap) -> Reply<AdminStats> {
    let backend = state.lock().expect("backend lock");
    backend.admin(&headers)?;
    let count = |n: usize| u64::try_from(n).unwrap_or(u64::MAX);
    let evaluated = backend.solutions.iter().filter(|s| s.score.is_some()).count();
    Ok(Json(AdminStats {
        total_users: count(backend.users.iter().filter(|(u, _)| u.is_active).count()),
        total_challenges: count(backend.challenges.len()),
        active_challenges: count(backend.challenges.iter().filter(|c| c.status == ChallengeStatus::Active).count()),
        total_solutions: count(backend.solutions.len()),
        evaluated_solutions: count(evaluated),
        pending_evaluations: count(backend.solutions.len() - evaluated),
    }))
}

async fn users(State(state): State<Shared>, headers: HeaderMap) -> Reply<Vec<User>> {
    let backend = state.lock().expect("backend lock");
    backend.admin(&headers)?;
    backend.available("users")?;
    Ok(Json(backend.users.iter().map(|(u, _)| u.clone()).collect()))
}

async fn toggle_active(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply<MessageResponse> {
    let mut backend = state.lock().expect("backend lock");
    backend.admin(&headers)?;
    let Some(user) = backend.user_mut(&id) else {
        return Err(reject(StatusCode::NOT_FOUND, "User not found"));
    };
    user.is_active = !user.is_active;
    let label = if user.is_active { "activated" } else { "deactivated" };
    Ok(Json(MessageResponse { message: format!("User {label} successfully") }))
}

async fn notifications(State(state): State<Shared>, headers: HeaderMap) -> Reply<Vec<Notification>> {
    let backend = state.lock().expect("backend lock");
    let caller = backend.caller(&headers)?;
    backend.available("notifications")?;
    let list = backend
        .notifications
        .iter()
        .filter(|(owner, _)| *owner == caller.id)
        .map(|(_, n)| n.clone())
        .collect();
    Ok(Json(list))
}

async fn mark_read(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply<MessageResponse> {
    let mut backend = state.lock().expect("backend lock");
    let caller = backend.caller(&headers)?;
    let Some((_, note)) = backend
        .notifications
        .iter_mut()
        .find(|(owner, n)| *owner == caller.id && n.id == id)
    else {
        return Err(reject(StatusCode::NOT_FOUND, "Notification not found"));
    };
    note.read = true;
    Ok(Json(MessageResponse { message: "Notification marked as read".to_owned() }))
}

/// Id of the seeded user with `email`.
pub fn user_id(state: &Shared, email: &str) -> String {
    let backend = state.lock().expect("backend lock");
    backend
        .users
        .iter()
        .find(|(u, _)| u.email == email)
        .map(|(u, _)| u.id.clone())
        .expect("seeded user")
}

/// Make the named read handler answer 500 from now on.
pub fn fail_read(state: &Shared, read: &'static str) {
    state.lock().expect("backend lock").failing.insert(read);
}

/// Current active flag of the seeded user with `email`.
pub fn is_active(state: &Shared, email: &str) -> bool {
    let backend = state.lock().expect("backend lock");
    backend
        .users
        .iter()
        .any(|(u, _)| u.email == email && u.is_active)
}
