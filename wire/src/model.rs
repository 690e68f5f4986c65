//! Entity records and request bodies.
//!
//! DESIGN
//! ======
//! Fields the backend may omit carry serde defaults so that older or newer
//! backends still deserialize. Enums carry a catch-all variant for the same
//! reason: one unexpected category must not fail a whole challenge list.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;

/// Error returned when parsing an enum from user input fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident,
        { $( $variant:ident => $text:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $variant, )+
            /// Value not recognised by this client.
            #[serde(other)]
            Other,
        }

        impl $name {
            /// Every known variant, in display order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Wire spelling of this variant.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                    Self::Other => "other",
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == needle)
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: s.to_owned(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

wire_enum!(
    /// Account role. Only `Admin` unlocks the administration surface.
    Role, "role", default = Student,
    { Student => "student", Professor => "professor", Admin => "admin" }
);

wire_enum!(
    /// Thematic area of a challenge.
    Category, "category", default = Other,
    {
        Technology => "technology",
        Sustainability => "sustainability",
        Education => "education",
        Health => "health",
        Innovation => "innovation",
    }
);

wire_enum!(
    /// Expected effort level of a challenge.
    Difficulty, "difficulty", default = Other,
    { Beginner => "beginner", Intermediate => "intermediate", Advanced => "advanced" }
);

wire_enum!(
    /// Lifecycle status of a challenge.
    ChallengeStatus, "status", default = Active,
    { Active => "active", Closed => "closed", Evaluation => "evaluation" }
);

impl Role {
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

fn default_true() -> bool {
    true
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Authenticated user profile as returned by `/me`, `/login` and `/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// Accumulated points from evaluated solutions.
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Deactivated accounts cannot log in.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Successful `/login` or `/register` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// A challenge as listed by `GET /challenges`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// ISO 8601 timestamp as sent by the backend (may lack a UTC offset).
    pub deadline: String,
    #[serde(default)]
    pub criteria: String,
    #[serde(default)]
    pub points_reward: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: ChallengeStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Whether the current user may still submit (deadline open, no prior submission).
    #[serde(default = "default_true")]
    pub can_submit: bool,
    /// Whether the current user already submitted a solution.
    #[serde(default)]
    pub user_submitted: bool,
}

/// Participation state shown on a challenge card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Participation {
    Submitted,
    Open,
    Closed,
}

impl Challenge {
    /// Resolve the card action. A prior submission wins over an open deadline.
    #[must_use]
    pub fn participation(&self) -> Participation {
        if self.user_submitted {
            Participation::Submitted
        } else if self.can_submit {
            Participation::Open
        } else {
            Participation::Closed
        }
    }
}

/// Body of `POST /challenges` (admin only).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewChallenge {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub deadline: String,
    #[serde(default)]
    pub criteria: String,
    pub points_reward: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A submitted solution. `score` stays `None` until an admin evaluates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub id: String,
    pub challenge_id: String,
    #[serde(default)]
    pub challenge_title: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub content: String,
    #[serde(default)]
    pub files: Vec<Attachment>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub feedback: Option<String>,
    pub submitted_at: String,
    #[serde(default)]
    pub evaluated_at: Option<String>,
}

impl Solution {
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.score.is_some()
    }

    /// First eight characters of the id, used as a compact label.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id
            .char_indices()
            .nth(8)
            .map_or(self.id.as_str(), |(idx, _)| &self.id[..idx])
    }

    /// File names in submission order.
    #[must_use]
    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Body of `POST /solutions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewSolution {
    pub challenge_id: String,
    pub content: String,
    #[serde(default)]
    pub files: Vec<Attachment>,
}

/// Body of `PUT /solutions/evaluate` (admin only).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub solution_id: String,
    pub score: i64,
    pub feedback: String,
}

/// One row of `GET /leaderboard`. `rank` is 1-based and computed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub badges: Vec<String>,
    pub rank: u32,
}

/// Aggregate counters from `GET /admin/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminStats {
    pub total_users: u64,
    pub total_challenges: u64,
    pub active_challenges: u64,
    pub total_solutions: u64,
    pub evaluated_solutions: u64,
    pub pending_evaluations: u64,
}

/// A user notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
