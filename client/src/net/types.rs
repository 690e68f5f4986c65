//! Backend records, re-exported from the shared `wire` crate.
//!
//! Views import from here so the client has one place to adjust if a record
//! ever needs a client-only wrapper.

pub use wire::*;
pub use wire::{attachment, endpoints};
