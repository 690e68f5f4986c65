//! Solution lists: the student's own and the admin's full list.

#[cfg(test)]
#[path = "solutions_test.rs"]
mod solutions_test;

use super::loadable::Loadable;
use crate::net::types::Solution;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolutionsState {
    pub mine: Loadable<Vec<Solution>>,
    pub all: Loadable<Vec<Solution>>,
}

/// Solutions still waiting for a score, in list order.
#[must_use]
pub fn pending(list: &[Solution]) -> Vec<Solution> {
    list.iter().filter(|s| !s.is_evaluated()).cloned().collect()
}

/// Solutions that already carry a score, in list order.
#[must_use]
pub fn scored(list: &[Solution]) -> Vec<Solution> {
    list.iter().filter(|s| s.is_evaluated()).cloned().collect()
}
