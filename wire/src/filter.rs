//! Query parameters for `GET /challenges`.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::model::{Category, ChallengeStatus, Difficulty};

/// Optional narrowing of the challenge list. Unset fields are omitted from the query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChallengeFilter {
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub status: Option<ChallengeStatus>,
    pub search: Option<String>,
}

impl ChallengeFilter {
    /// Key/value pairs in a stable order. Blank search text is dropped.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_owned()));
        }
        if let Some(difficulty) = self.difficulty {
            pairs.push(("difficulty", difficulty.as_str().to_owned()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                pairs.push(("search", search.to_owned()));
            }
        }
        pairs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}
