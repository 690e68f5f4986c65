//! Network layer: REST calls and the fetch/session drivers built on them.

pub mod api;
pub mod fetch;
pub mod session;
pub mod types;
