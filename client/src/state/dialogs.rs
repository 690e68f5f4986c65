//! Mutation dialog forms.
//!
//! DESIGN
//! ======
//! A dialog keeps no state between opens: `open_with` seeds a fresh form and
//! `succeeded`/`close` reset to defaults. A failed write keeps the entered
//! values and the backend message so the user can correct and resubmit.
//! Validation is limited to required fields and numeric bounds.

#[cfg(test)]
#[path = "dialogs_test.rs"]
mod dialogs_test;

use crate::net::types::{
    Attachment, Category, Challenge, Difficulty, Evaluation, MAX_SCORE, NewChallenge, NewSolution,
    Solution, attachment, score_in_range,
};

/// Lifecycle shared by every mutation dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DialogState<F> {
    pub form: F,
    pub open: bool,
    pub pending: bool,
    pub error: Option<String>,
}

impl<F: Default> DialogState<F> {
    pub fn open_with(&mut self, form: F) {
        *self = Self { form, open: true, pending: false, error: None };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Mark the write in flight. Returns `false` if one is already pending.
    pub fn begin_submit(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    /// Write accepted: close and reset. The caller runs its refresh.
    pub fn succeeded(&mut self) {
        self.close();
    }

    /// Validation or backend failure: stay open with fields intact.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.pending = false;
        self.error = Some(message.into());
    }
}

fn required(value: &str, field: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(value.to_owned())
    }
}

/// Split a comma-separated tag input, dropping blanks.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Create-challenge form. Numeric inputs are kept as typed text.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateChallengeForm {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    /// `datetime-local` value, e.g. `2030-01-01T00:00`.
    pub deadline: String,
    pub criteria: String,
    pub points_reward: String,
    pub tags: String,
}

impl Default for CreateChallengeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: Category::Technology,
            difficulty: Difficulty::Beginner,
            deadline: String::new(),
            criteria: String::new(),
            points_reward: "100".to_owned(),
            tags: String::new(),
        }
    }
}

impl CreateChallengeForm {
    /// Build the request body. Past deadlines are accepted.
    ///
    /// # Errors
    ///
    /// Returns a display message naming the first missing or out-of-range field.
    pub fn to_request(&self) -> Result<NewChallenge, String> {
        let title = required(&self.title, "Title")?;
        let description = required(&self.description, "Description")?;
        let deadline = required(&self.deadline, "Deadline")?;
        let points_reward = self
            .points_reward
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|p| *p >= 1)
            .ok_or_else(|| "Points must be a whole number of at least 1".to_owned())?;
        Ok(NewChallenge {
            title,
            description,
            category: self.category,
            difficulty: self.difficulty,
            deadline,
            criteria: self.criteria.trim().to_owned(),
            points_reward,
            tags: parse_tags(&self.tags),
        })
    }
}

/// Submit-solution form, seeded from the target challenge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmitSolutionForm {
    pub challenge_id: String,
    pub challenge_title: String,
    pub content: String,
    /// Encoded attachments in selection order.
    pub files: Vec<Attachment>,
}

impl SubmitSolutionForm {
    #[must_use]
    pub fn for_challenge(challenge: &Challenge) -> Self {
        Self {
            challenge_id: challenge.id.clone(),
            challenge_title: challenge.title.clone(),
            ..Self::default()
        }
    }

    /// Append an encoded file. Selections accumulate across picks.
    pub fn add_file(&mut self, file: Attachment) {
        self.files.push(file);
    }

    pub fn remove_file(&mut self, index: usize) {
        attachment::remove_at(&mut self.files, index);
    }

    /// # Errors
    ///
    /// Returns a display message when the description is empty.
    pub fn to_request(&self) -> Result<NewSolution, String> {
        let content = required(&self.content, "Solution description")?;
        Ok(NewSolution {
            challenge_id: self.challenge_id.clone(),
            content,
            files: self.files.clone(),
        })
    }
}

/// Evaluate-solution form, seeded from the solution under review.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvaluateForm {
    pub solution_id: String,
    pub summary: String,
    pub score: String,
    pub feedback: String,
}

impl EvaluateForm {
    #[must_use]
    pub fn for_solution(solution: &Solution) -> Self {
        Self {
            solution_id: solution.id.clone(),
            summary: solution
                .challenge_title
                .clone()
                .unwrap_or_else(|| solution.short_id().to_owned()),
            ..Self::default()
        }
    }

    /// Label for the score input, derived from the same bound as validation.
    #[must_use]
    pub fn score_label() -> String {
        format!("Score (0-{MAX_SCORE})")
    }

    /// # Errors
    ///
    /// Returns a display message when the score is out of range or feedback is empty.
    pub fn to_request(&self) -> Result<Evaluation, String> {
        let score = self
            .score
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|s| score_in_range(*s))
            .ok_or_else(|| format!("Score must be between 0 and {MAX_SCORE}"))?;
        let feedback = required(&self.feedback, "Feedback")?;
        Ok(Evaluation { solution_id: self.solution_id.clone(), score, feedback })
    }
}
