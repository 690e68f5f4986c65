//! End-to-end flows against an in-process backend stub.

mod support;

use campus_cli::CliError;
use campus_cli::api::ApiClient;
use campus_cli::commands::{Cli, execute};
use campus_cli::session::{Session, TokenStore};
use clap::Parser;
use support::{ADMIN_EMAIL, ADMIN_PASSWORD, BROKEN_EMAIL, STUDENT_EMAIL, STUDENT_PASSWORD};
use wire::{Attachment, Category, ChallengeFilter, Difficulty, Evaluation, NewChallenge, NewSolution};

struct Harness {
    api: ApiClient,
    base: String,
    state: std::sync::Arc<std::sync::Mutex<support::Backend>>,
    dir: tempfile::TempDir,
}

impl Harness {
    async fn start() -> Self {
        let (base, state) = support::spawn().await;
        Self { api: ApiClient::new(base.clone()), base, state, dir: tempfile::tempdir().expect("tempdir") }
    }

    fn store(&self, name: &str) -> TokenStore {
        TokenStore::new(self.dir.path().join(name))
    }

    async fn signed_in(&self, name: &str, email: &str, password: &str) -> Session {
        let mut session = Session::new(self.store(name));
        session.authenticate(&self.api, email, password).await.expect("login");
        session
    }

    async fn run(&self, token_file: &str, args: &[&str]) -> Result<String, CliError> {
        let token_path = self.dir.path().join(token_file);
        let token_path = token_path.to_str().expect("utf-8 temp path");
        let argv = ["campus", "--base-url", self.base.as_str(), "--token-file", token_path]
            .into_iter()
            .chain(args.iter().copied());
        execute(Cli::try_parse_from(argv).expect("valid arguments")).await
    }
}

fn new_challenge(title: &str) -> NewChallenge {
    NewChallenge {
        title: title.to_owned(),
        description: "Grow food on the roof".to_owned(),
        category: Category::Innovation,
        difficulty: Difficulty::Intermediate,
        deadline: "2030-01-01T00:00".to_owned(),
        criteria: String::new(),
        points_reward: 100,
        tags: vec!["garden".to_owned(), "roof".to_owned()],
    }
}

#[tokio::test]
async fn bad_credentials_leave_the_session_anonymous() {
    let h = Harness::start().await;
    let store = h.store("bad");
    let mut session = Session::new(store.clone());

    let err = session.authenticate(&h.api, STUDENT_EMAIL, "wrong").await.unwrap_err();

    assert!(matches!(err, CliError::Api { status: 401, .. }));
    assert_eq!(err.api_message(), Some("Incorrect email or password"));
    assert!(!session.is_authenticated());
    assert_eq!(store.load().expect("read store"), None);
}

#[tokio::test]
async fn login_without_backend_detail_falls_back_to_generic_message() {
    let h = Harness::start().await;
    let mut session = Session::new(h.store("broken"));

    let err = session.authenticate(&h.api, BROKEN_EMAIL, "x").await.unwrap_err();

    assert_eq!(err.api_message(), Some(wire::LOGIN_FAILED));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn persisted_token_is_restored_on_next_start() {
    let h = Harness::start().await;
    let first = h.signed_in("ana", STUDENT_EMAIL, STUDENT_PASSWORD).await;
    assert!(first.is_authenticated());

    let mut next = Session::new(h.store("ana"));
    next.restore(&h.api).await.expect("restore");

    assert!(next.is_authenticated());
    assert_eq!(next.user().map(|u| u.email.as_str()), Some(STUDENT_EMAIL));
}

#[tokio::test]
async fn rejected_stored_token_is_cleared() {
    let h = Harness::start().await;
    let store = h.store("stale");
    store.save("expired-token").expect("seed token");

    let mut session = Session::new(store.clone());
    session.restore(&h.api).await.expect("restore");

    assert!(!session.is_authenticated());
    assert_eq!(store.load().expect("read store"), None);
    assert!(!store.path().exists());
}

#[tokio::test]
async fn created_challenge_appears_in_next_listing() {
    let h = Harness::start().await;
    let admin = h.signed_in("admin", ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let token = admin.token().expect("token");

    let created = h.api.create_challenge(token, &new_challenge("Rooftop garden")).await.expect("create");
    assert_eq!(created.points_reward, 100);

    let list = h.api.challenges(token, &ChallengeFilter::default()).await.expect("list");
    let listed = list.iter().find(|c| c.id == created.id).expect("new challenge listed");
    assert_eq!(listed.title, "Rooftop garden");
    assert_eq!(listed.tags, vec!["garden", "roof"]);
}

#[tokio::test]
async fn filter_narrows_challenge_list() {
    let h = Harness::start().await;
    let admin = h.signed_in("admin", ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let token = admin.token().expect("token");
    h.api.create_challenge(token, &new_challenge("Rooftop garden")).await.expect("create");

    let filter = ChallengeFilter { category: Some(Category::Sustainability), ..ChallengeFilter::default() };
    let list = h.api.challenges(token, &filter).await.expect("list");

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Campus energy");
}

#[tokio::test]
async fn students_cannot_create_challenges() {
    let h = Harness::start().await;
    let student = h.signed_in("ana", STUDENT_EMAIL, STUDENT_PASSWORD).await;

    let err = h
        .api
        .create_challenge(student.token().expect("token"), &new_challenge("Nope"))
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::Api { status: 403, .. }));
    assert_eq!(err.api_message(), Some("Admin access required"));
}

#[tokio::test]
async fn submission_keeps_attachment_order_and_flags_challenge() {
    let h = Harness::start().await;
    let student = h.signed_in("ana", STUDENT_EMAIL, STUDENT_PASSWORD).await;
    let token = student.token().expect("token");
    let challenge = h.api.challenges(token, &ChallengeFilter::default()).await.expect("list").remove(0);

    let request = NewSolution {
        challenge_id: challenge.id.clone(),
        content: "Motion sensors on every floor".to_owned(),
        files: vec![
            Attachment::encode("plan.pdf", b"%PDF-1.4").expect("encode"),
            Attachment::encode("photo.png", &[0x89, 0x50, 0x4e, 0x47]).expect("encode"),
        ],
    };
    let created = h.api.submit_solution(token, &request).await.expect("submit");

    assert_eq!(created.file_names(), vec!["plan.pdf", "photo.png"]);
    let mine = h.api.my_solutions(token).await.expect("mine");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].files[1].decode().expect("decode"), vec![0x89, 0x50, 0x4e, 0x47]);

    let refreshed = h.api.challenge(token, &challenge.id).await.expect("challenge");
    assert_eq!(refreshed.participation(), wire::Participation::Submitted);
}

#[tokio::test]
async fn evaluation_moves_solution_to_scored_and_notifies_author() {
    let h = Harness::start().await;
    let student = h.signed_in("ana", STUDENT_EMAIL, STUDENT_PASSWORD).await;
    let student_token = student.token().expect("token");
    let challenge = h.api.challenges(student_token, &ChallengeFilter::default()).await.expect("list").remove(0);
    let solution = h
        .api
        .submit_solution(
            student_token,
            &NewSolution { challenge_id: challenge.id, content: "LED retrofit".to_owned(), files: Vec::new() },
        )
        .await
        .expect("submit");

    let admin = h.signed_in("admin", ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let admin_token = admin.token().expect("token");
    let before = h.api.all_solutions(admin_token).await.expect("all");
    assert!(before.iter().all(|s| !s.is_evaluated()));

    let evaluation = Evaluation { solution_id: solution.id.clone(), score: 150, feedback: "Solid plan".to_owned() };
    h.api.evaluate_solution(admin_token, &evaluation).await.expect("evaluate");

    let after = h.api.all_solutions(admin_token).await.expect("all");
    let scored = after.iter().find(|s| s.id == solution.id).expect("solution");
    assert_eq!(scored.score, Some(150));
    assert_eq!(scored.feedback.as_deref(), Some("Solid plan"));

    let notes = h.api.notifications(student_token).await.expect("notifications");
    assert_eq!(notes.iter().filter(|n| !n.read).count(), 1);
    h.api.mark_notification_read(student_token, &notes[0].id).await.expect("mark read");
    let notes = h.api.notifications(student_token).await.expect("notifications");
    assert!(notes.iter().all(|n| n.read));

    let board = h.api.leaderboard().await.expect("leaderboard");
    assert_eq!(board[0].name, "Ana");
    assert_eq!(board[0].points, 150);
    assert_eq!(board[0].rank, 1);
}

#[tokio::test]
async fn toggling_a_user_twice_restores_active_flag() {
    let h = Harness::start().await;
    let admin = h.signed_in("admin", ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let token = admin.token().expect("token");
    let target = support::user_id(&h.state, STUDENT_EMAIL);
    let active = |users: &[wire::User]| users.iter().find(|u| u.id == target).map(|u| u.is_active);

    h.api.toggle_user_active(token, &target).await.expect("deactivate");
    assert_eq!(active(&h.api.admin_users(token).await.expect("users")[..]), Some(false));

    let mut blocked = Session::new(h.store("blocked"));
    assert!(blocked.authenticate(&h.api, STUDENT_EMAIL, STUDENT_PASSWORD).await.is_err());

    h.api.toggle_user_active(token, &target).await.expect("reactivate");
    assert_eq!(active(&h.api.admin_users(token).await.expect("users")[..]), Some(true));
}

#[tokio::test]
async fn admin_stats_count_pending_evaluations() {
    let h = Harness::start().await;
    let student = h.signed_in("ana", STUDENT_EMAIL, STUDENT_PASSWORD).await;
    let token = student.token().expect("token");
    let challenge = h.api.challenges(token, &ChallengeFilter::default()).await.expect("list").remove(0);
    h.api
        .submit_solution(token, &NewSolution { challenge_id: challenge.id, content: "Idea".to_owned(), files: Vec::new() })
        .await
        .expect("submit");

    let admin = h.signed_in("admin", ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let stats = h.api.admin_stats(admin.token().expect("token")).await.expect("stats");

    assert_eq!(stats.total_solutions, 1);
    assert_eq!(stats.pending_evaluations, 1);
    assert_eq!(stats.evaluated_solutions, 0);
}

#[tokio::test]
async fn cli_login_then_list_uses_persisted_token() {
    let h = Harness::start().await;

    let out = h.run("cli", &["login", STUDENT_EMAIL, STUDENT_PASSWORD]).await.expect("login");
    assert!(out.starts_with("signed in as Ana"));

    let out = h.run("cli", &["challenges", "list"]).await.expect("list");
    assert!(out.contains("Campus energy"));

    let out = h.run("cli", &["logout"]).await.expect("logout");
    assert_eq!(out, "signed out");
    let err = h.run("cli", &["whoami"]).await.unwrap_err();
    assert!(matches!(err, CliError::NotSignedIn));
}

#[tokio::test]
async fn cli_leaderboard_is_public() {
    let h = Harness::start().await;

    let out = h.run("anonymous", &["leaderboard", "--limit", "1"]).await.expect("leaderboard");

    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("🥇"));
}

#[tokio::test]
async fn cli_register_signs_in_new_account() {
    let h = Harness::start().await;

    let out = h
        .run("new", &["register", "Bo", "bo@x.com", "pw", "--role", "professor"])
        .await
        .expect("register");
    assert!(out.contains("Bo <bo@x.com> (professor)"));

    let err = h.run("other", &["register", "Bo", "bo@x.com", "pw"]).await.unwrap_err();
    assert_eq!(err.api_message(), Some("Email already registered"));
}

#[tokio::test]
async fn failed_login_drops_previous_session() {
    let h = Harness::start().await;
    let store = h.store("shared");
    let mut session = Session::new(store.clone());
    session.authenticate(&h.api, STUDENT_EMAIL, STUDENT_PASSWORD).await.expect("login");
    assert!(store.load().expect("read store").is_some());

    assert!(session.authenticate(&h.api, ADMIN_EMAIL, "wrong").await.is_err());

    assert!(!session.is_authenticated());
    assert_eq!(store.load().expect("read store"), None);
    let err = h.run("shared", &["whoami"]).await.unwrap_err();
    assert!(matches!(err, CliError::NotSignedIn));
}

#[tokio::test]
async fn toggle_succeeds_even_when_user_list_refresh_fails() {
    let h = Harness::start().await;
    h.run("admin", &["login", ADMIN_EMAIL, ADMIN_PASSWORD]).await.expect("login");
    let target = support::user_id(&h.state, STUDENT_EMAIL);
    support::fail_read(&h.state, "users");

    let out = h.run("admin", &["admin", "toggle-user", &target]).await.expect("toggle");

    assert!(out.starts_with("User deactivated successfully"));
    assert!(out.ends_with("user list unavailable"));
    assert!(!support::is_active(&h.state, STUDENT_EMAIL));
}

#[tokio::test]
async fn created_challenge_is_reported_when_list_refresh_fails() {
    let h = Harness::start().await;
    h.run("admin", &["login", ADMIN_EMAIL, ADMIN_PASSWORD]).await.expect("login");
    support::fail_read(&h.state, "challenges");

    let out = h
        .run(
            "admin",
            &[
                "challenges", "create", "--title", "Bike racks", "--description", "More parking",
                "--category", "health", "--difficulty", "beginner", "--deadline", "2030-01-01T00:00",
                "--points", "100",
            ],
        )
        .await
        .expect("create");

    assert!(out.starts_with("created challenge "));
    assert!(out.ends_with("challenge list unavailable"));
}
