//! Command-line surface and dispatch.
//!
//! Every command produces its output as a string so `main` decides where it
//! goes. A mutation is followed by the read it affects, the same refresh the
//! browser dialogs perform.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use wire::attachment::check_size;
use wire::{
    Attachment, Category, ChallengeFilter, ChallengeStatus, Difficulty, Evaluation, MAX_SCORE, NewChallenge,
    NewSolution, Role, score_in_range,
};

use crate::api::ApiClient;
use crate::error::CliError;
use crate::render;
use crate::session::{Session, TokenStore};

#[derive(Parser, Debug)]
#[command(name = "campus", about = "Campus gamification platform CLI")]
pub struct Cli {
    #[arg(long, env = "CAMPUS_API_BASE", default_value = "http://127.0.0.1:8001/api")]
    pub base_url: String,

    /// Where the session token is kept between runs (default: `$HOME/.campus-token`).
    #[arg(long, env = "CAMPUS_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Login {
        email: String,
        password: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
        #[arg(long, default_value_t = Role::Student)]
        role: Role,
    },
    Logout,
    Whoami,
    Challenges(ChallengesCommand),
    Solutions(SolutionsCommand),
    /// Public ranking; works without signing in.
    Leaderboard {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    Admin(AdminCommand),
    Notifications(NotificationsCommand),
}

#[derive(Args, Debug)]
pub struct ChallengesCommand {
    #[command(subcommand)]
    pub command: ChallengesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ChallengesSubcommand {
    List {
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        status: Option<ChallengeStatus>,
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
    Create(CreateChallengeArgs),
}

#[derive(Args, Debug)]
pub struct CreateChallengeArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub category: Category,
    #[arg(long)]
    pub difficulty: Difficulty,
    /// ISO 8601 timestamp, e.g. `2030-01-01T00:00`.
    #[arg(long)]
    pub deadline: String,
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    pub points: i64,
    #[arg(long, default_value = "")]
    pub criteria: String,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SolutionsCommand {
    #[command(subcommand)]
    pub command: SolutionsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SolutionsSubcommand {
    Mine,
    /// Every submission, split into pending and scored (admin).
    All,
    Submit {
        challenge_id: String,
        #[arg(long)]
        content: String,
        /// Attach a file; repeat for several. Order is preserved.
        #[arg(long = "file")]
        files: Vec<PathBuf>,
    },
    Evaluate {
        solution_id: String,
        #[arg(long, allow_negative_numbers = true)]
        score: i64,
        #[arg(long)]
        feedback: String,
    },
}

#[derive(Args, Debug)]
pub struct AdminCommand {
    #[command(subcommand)]
    pub command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AdminSubcommand {
    Stats,
    Users,
    ToggleUser { user_id: String },
}

#[derive(Args, Debug)]
pub struct NotificationsCommand {
    #[command(subcommand)]
    pub command: NotificationsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NotificationsSubcommand {
    List,
    Read { id: String },
}

/// Read a file and encode it, refusing oversized files before reading.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or over the size cap.
pub async fn load_attachment(path: &Path) -> Result<Attachment, CliError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidInput(format!("{} is not a file", path.display())))?;
    let size = tokio::fs::metadata(path).await?.len();
    check_size(&name, usize::try_from(size).unwrap_or(usize::MAX))?;
    let bytes = tokio::fs::read(path).await?;
    Ok(Attachment::encode(name, &bytes)?)
}

fn validate_score(score: i64) -> Result<i64, CliError> {
    if score_in_range(score) {
        Ok(score)
    } else {
        Err(CliError::InvalidInput(format!("score must be between 0 and {MAX_SCORE}")))
    }
}

fn required(value: &str, field: &str) -> Result<String, CliError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CliError::InvalidInput(format!("{field} is required")));
    }
    Ok(value.to_owned())
}

/// Output for a write that already succeeded, followed by its refresh read.
///
/// A failed refresh is logged and reported in the text; it never turns the
/// write into an error.
fn after_write<T>(ack: String, refreshed: Result<T, CliError>, what: &str, render: impl FnOnce(&T) -> String) -> String {
    match refreshed {
        Ok(data) => format!("{ack}\n{}", render(&data)),
        Err(e) => {
            tracing::warn!(error = %e, "{what} refresh failed");
            format!("{ack}\n{what} unavailable")
        }
    }
}

/// Run one command and return its output text.
///
/// # Errors
///
/// Returns the first failure; backend rejections carry the backend message.
pub async fn execute(cli: Cli) -> Result<String, CliError> {
    let api = ApiClient::new(cli.base_url);
    let store = TokenStore::new(cli.token_file.unwrap_or_else(TokenStore::default_path));
    let mut session = Session::new(store);

    match cli.command {
        Command::Login { email, password } => {
            let user = session.authenticate(&api, email.trim(), &password).await?;
            tracing::info!(user = %user.id, "signed in");
            Ok(format!("signed in as {}", render::user(user)))
        }
        Command::Register { name, email, password, role } => {
            let user = session.register(&api, name.trim(), email.trim(), &password, role).await?;
            tracing::info!(user = %user.id, "registered");
            Ok(format!("registered {}", render::user(user)))
        }
        Command::Logout => {
            session.clear()?;
            Ok("signed out".to_owned())
        }
        Command::Leaderboard { limit } => Ok(render::leaderboard(&api.leaderboard().await?, limit)),
        command => {
            session.restore(&api).await?;
            execute_authenticated(&api, &session, command).await
        }
    }
}

async fn execute_authenticated(api: &ApiClient, session: &Session, command: Command) -> Result<String, CliError> {
    let token = session.token()?;
    match command {
        Command::Whoami => Ok(session.user().map(render::user).unwrap_or_default()),
        Command::Challenges(c) => match c.command {
            ChallengesSubcommand::List { category, difficulty, status, search } => {
                let filter = ChallengeFilter { category, difficulty, status, search };
                Ok(render::challenges(&api.challenges(token, &filter).await?))
            }
            ChallengesSubcommand::Show { id } => Ok(render::challenge_detail(&api.challenge(token, &id).await?)),
            ChallengesSubcommand::Create(args) => {
                let request = NewChallenge {
                    title: required(&args.title, "title")?,
                    description: required(&args.description, "description")?,
                    category: args.category,
                    difficulty: args.difficulty,
                    deadline: required(&args.deadline, "deadline")?,
                    criteria: args.criteria.trim().to_owned(),
                    points_reward: args.points,
                    tags: args.tags,
                };
                let created = api.create_challenge(token, &request).await?;
                tracing::info!(challenge = %created.id, "challenge created");
                let list = api.challenges(token, &ChallengeFilter::default()).await;
                Ok(after_write(format!("created challenge {}", created.id), list, "challenge list", |l| {
                    render::challenges(l)
                }))
            }
        },
        Command::Solutions(s) => match s.command {
            SolutionsSubcommand::Mine => Ok(render::solutions(&api.my_solutions(token).await?)),
            SolutionsSubcommand::All => Ok(render::review(&api.all_solutions(token).await?)),
            SolutionsSubcommand::Submit { challenge_id, content, files } => {
                let mut attachments = Vec::with_capacity(files.len());
                for path in &files {
                    attachments.push(load_attachment(path).await?);
                }
                let request = NewSolution { challenge_id, content: required(&content, "content")?, files: attachments };
                let created = api.submit_solution(token, &request).await?;
                tracing::info!(solution = %created.id, files = created.files.len(), "solution submitted");
                let mine = api.my_solutions(token).await;
                Ok(after_write(format!("submitted solution {}", created.id), mine, "solution list", |l| {
                    render::solutions(l)
                }))
            }
            SolutionsSubcommand::Evaluate { solution_id, score, feedback } => {
                let evaluation = Evaluation {
                    solution_id,
                    score: validate_score(score)?,
                    feedback: required(&feedback, "feedback")?,
                };
                let ack = api.evaluate_solution(token, &evaluation).await?;
                let all = api.all_solutions(token).await;
                Ok(after_write(ack.message, all, "solution list", |l| render::review(l)))
            }
        },
        Command::Admin(a) => match a.command {
            AdminSubcommand::Stats => Ok(render::stats(&api.admin_stats(token).await?)),
            AdminSubcommand::Users => Ok(render::users(&api.admin_users(token).await?)),
            AdminSubcommand::ToggleUser { user_id } => {
                let ack = api.toggle_user_active(token, &user_id).await?;
                let users = api.admin_users(token).await;
                Ok(after_write(ack.message, users, "user list", |l| render::users(l)))
            }
        },
        Command::Notifications(n) => match n.command {
            NotificationsSubcommand::List => Ok(render::notifications(&api.notifications(token).await?)),
            NotificationsSubcommand::Read { id } => {
                let ack = api.mark_notification_read(token, &id).await?;
                let list = api.notifications(token).await;
                Ok(after_write(ack.message, list, "notification list", |l| render::notifications(l)))
            }
        },
        Command::Login { .. } | Command::Register { .. } | Command::Logout | Command::Leaderboard { .. } => {
            Err(CliError::InvalidInput("command does not need a session".to_owned()))
        }
    }
}
