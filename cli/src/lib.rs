//! Terminal client for the campus gamification backend.
//!
//! LAYOUT
//! ======
//! - `api`: typed REST calls.
//! - `session`: token file and the session holder.
//! - `commands`: clap surface and dispatch.
//! - `render`: plain-text output.
//! - `error`: `CliError`.

pub mod api;
pub mod commands;
pub mod error;
pub mod render;
pub mod session;

pub use error::CliError;
