//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome, resource panels and mutation dialogs
//! while reading/writing the shared `Stores` context.

pub mod admin_panel;
pub mod challenge_card;
pub mod challenge_filters;
pub mod challenges_panel;
pub mod create_challenge_dialog;
pub mod evaluate_solution_dialog;
pub mod leaderboard_panel;
pub mod navbar;
pub mod notification_bell;
pub mod solutions_panel;
pub mod submit_solution_dialog;
pub mod tab_bar;
