//! Session holder for the terminal client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the browser session: a token persisted between runs, validated
//! with one `/me` call on restore, and dropped on any failure. The token file
//! is the only state the CLI keeps on disk.
//!
//! INVARIANT
//! =========
//! A user is never held without a token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::io;
use std::path::{Path, PathBuf};

use wire::{RegisterRequest, Role, User};

use crate::api::ApiClient;
use crate::error::CliError;

/// File-backed token persistence.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.campus-token`, or `.campus-token` in the working directory
    /// when `HOME` is unset.
    #[must_use]
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map_or_else(PathBuf::new, PathBuf::from)
            .join(".campus-token")
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored token, or `None` when the file is missing or blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load(&self) -> Result<Option<String>, CliError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, token: &str) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    /// Remove the token file. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), CliError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Current identity plus the store it persists to.
#[derive(Debug)]
pub struct Session {
    store: TokenStore,
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// An anonymous session backed by `store`. Call [`Session::restore`] to
    /// pick up a persisted token.
    #[must_use]
    pub fn new(store: TokenStore) -> Self {
        Self { store, token: None, user: None }
    }

    /// Load the stored token and validate it with `/me`.
    ///
    /// Any failure, including a rejected token, clears the token file and
    /// leaves the session anonymous. Only local I/O errors are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the token file cannot be read or removed.
    pub async fn restore(&mut self, api: &ApiClient) -> Result<(), CliError> {
        let Some(token) = self.store.load()? else {
            return Ok(());
        };
        match api.me(&token).await {
            Ok(user) => {
                self.token = Some(token);
                self.user = Some(user);
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored session rejected; signing out");
                self.clear()?;
            }
        }
        Ok(())
    }

    /// Any previous session is dropped first, so a failed attempt never leaves
    /// the prior user signed in.
    ///
    /// # Errors
    ///
    /// Returns the backend message (or "Login failed"); the session stays anonymous.
    pub async fn authenticate(&mut self, api: &ApiClient, email: &str, password: &str) -> Result<&User, CliError> {
        self.clear()?;
        let auth = api.login(email, password).await?;
        self.store.save(&auth.access_token)?;
        self.token = Some(auth.access_token);
        Ok(&*self.user.insert(auth.user))
    }

    /// Like [`Session::authenticate`], any previous session is dropped first.
    ///
    /// # Errors
    ///
    /// Returns the backend message (or "Registration failed"); the session stays anonymous.
    pub async fn register(
        &mut self,
        api: &ApiClient,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<&User, CliError> {
        let request = RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            role,
        };
        self.clear()?;
        let auth = api.register(&request).await?;
        self.store.save(&auth.access_token)?;
        self.token = Some(auth.access_token);
        Ok(&*self.user.insert(auth.user))
    }

    /// Drop the token and user, removing the token file.
    ///
    /// # Errors
    ///
    /// Returns an error if the token file cannot be removed.
    pub fn clear(&mut self) -> Result<(), CliError> {
        self.token = None;
        self.user = None;
        self.store.clear()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Token for an authenticated call.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NotSignedIn`] for an anonymous session.
    pub fn token(&self) -> Result<&str, CliError> {
        self.token.as_deref().ok_or(CliError::NotSignedIn)
    }
}
