//! # User Action Handlers
//!
//! Handlers validate input, flag the busy state, and spawn the async work;
//! results come back to the state owner as [`crate::app::events::AppEvent`]s.

pub mod auth;
pub mod dashboard;
pub mod navigation;
pub mod payment;
pub mod withdrawal;
