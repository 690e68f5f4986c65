//! Read cycle driver: trigger, request, settle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call `refresh` when a tab or section is selected, a filter changes,
//! or a dialog reports success. Each call issues exactly one read for the
//! named resource. Failures are logged and leave the previous list in place.
//! Requests are neither deduplicated nor cancelled.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::state::Stores;
use crate::state::dashboard::ResourceKind;
use crate::state::loadable::Loadable;

/// Apply a read result. Returns the error message for the caller to log.
pub fn settle<T>(target: &mut Loadable<T>, result: Result<T, String>) -> Option<String> {
    match result {
        Ok(data) => {
            target.settle_ok(data);
            None
        }
        Err(e) => {
            target.settle_err();
            Some(e)
        }
    }
}

/// Bearer token for `kind`, or `None` when a private read has no session.
///
/// Public reads get an empty token that the API layer never sends.
pub fn token_for(kind: ResourceKind, token: Option<String>) -> Option<String> {
    match token {
        Some(token) => Some(token),
        None if kind.is_public() => Some(String::new()),
        None => None,
    }
}

/// Start one read for `kind` in the background.
pub fn refresh(stores: Stores, kind: ResourceKind) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(run(stores, kind));
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (stores, kind);
    }
}

#[cfg(feature = "hydrate")]
fn report(kind: ResourceKind, error: Option<String>) {
    if let Some(e) = error {
        log::warn!("{} read failed: {e}", kind.endpoint());
    }
}

#[cfg(feature = "hydrate")]
async fn run(stores: Stores, kind: ResourceKind) {
    use leptos::prelude::*;

    use super::api;

    let Some(token) = token_for(kind, stores.token()) else {
        log::warn!("{} read skipped: no session", kind.endpoint());
        return;
    };

    match kind {
        ResourceKind::Challenges => {
            let filter = stores.challenges.with_untracked(|s| s.filter.clone());
            stores.challenges.update(|s| s.list.begin());
            let result = api::fetch_challenges(&token, &filter).await;
            stores.challenges.update(|s| report(kind, settle(&mut s.list, result)));
        }
        ResourceKind::MySolutions => {
            stores.solutions.update(|s| s.mine.begin());
            let result = api::fetch_my_solutions(&token).await;
            stores.solutions.update(|s| report(kind, settle(&mut s.mine, result)));
        }
        ResourceKind::AllSolutions => {
            stores.solutions.update(|s| s.all.begin());
            let result = api::fetch_all_solutions(&token).await;
            stores.solutions.update(|s| report(kind, settle(&mut s.all, result)));
        }
        ResourceKind::Leaderboard => {
            stores.leaderboard.update(|s| s.entries.begin());
            let result = api::fetch_leaderboard().await;
            stores.leaderboard.update(|s| report(kind, settle(&mut s.entries, result)));
        }
        ResourceKind::AdminStats => {
            stores.admin.update(|s| s.stats.begin());
            let result = api::fetch_admin_stats(&token).await;
            stores.admin.update(|s| report(kind, settle(&mut s.stats, result)));
        }
        ResourceKind::AdminUsers => {
            stores.admin.update(|s| s.users.begin());
            let result = api::fetch_admin_users(&token).await;
            stores.admin.update(|s| report(kind, settle(&mut s.users, result)));
        }
        ResourceKind::Notifications => {
            stores.notifications.update(|s| s.list.begin());
            let result = api::fetch_notifications(&token).await;
            stores.notifications.update(|s| report(kind, settle(&mut s.list, result)));
        }
    }
}
