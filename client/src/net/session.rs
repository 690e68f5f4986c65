//! Session lifecycle side effects: restore, sign in, register, sign out.
//!
//! The pure transitions live in `state::session`; this module pairs them with
//! the REST calls and token storage.

use leptos::prelude::*;

use crate::net::types::{RegisterRequest, Role};
use crate::state::Stores;
use crate::util::storage;

/// Read the stored token and, if present, validate it with one `/me` call.
/// Any failure drops the token and leaves the session anonymous.
pub fn restore(stores: Stores) {
    let needs_profile = stores.session.try_update(|s| s.begin_restore(storage::load_token())).unwrap_or(false);
    if !needs_profile {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(token) = stores.token() else {
            return;
        };
        match super::api::fetch_me(&token).await {
            Ok(user) => stores.session.update(|s| s.profile_loaded(user)),
            Err(e) => {
                log::warn!("stored session rejected: {e}");
                storage::clear_token();
                stores.session.update(crate::state::session::SessionState::profile_failed);
            }
        }
    });
}

/// Sign in with email and password, persisting the token on success.
///
/// # Errors
///
/// Returns the message to show under the form; the session stays anonymous.
pub async fn authenticate(stores: Stores, email: &str, password: &str) -> Result<(), String> {
    let auth = super::api::login(email, password).await?;
    storage::save_token(&auth.access_token);
    stores.session.update(|s| s.signed_in(auth));
    Ok(())
}

/// Create an account and sign straight in.
///
/// # Errors
///
/// Returns the message to show under the form; the session stays anonymous.
pub async fn register(stores: Stores, name: &str, email: &str, password: &str, role: Role) -> Result<(), String> {
    let request = RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role,
    };
    let auth = super::api::register(&request).await?;
    storage::save_token(&auth.access_token);
    stores.session.update(|s| s.signed_in(auth));
    Ok(())
}

/// Drop the token and every cached view.
pub fn sign_out(stores: Stores) {
    storage::clear_token();
    stores.session.update(crate::state::session::SessionState::clear);
    stores.reset_views();
}
