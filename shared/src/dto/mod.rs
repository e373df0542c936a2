//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the client applications and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Authentication, registration, OTP and password-reset DTOs
//! - [`dashboard`] - Dashboard snapshot, referral stats and team DTOs
//! - [`earnings`] - Commission and earnings DTOs
//! - [`payment`] - Payment order creation, checkout receipt and verification DTOs
//! - [`catalog`] - Product catalog DTOs
//! - [`withdrawal`] - Withdrawal request and history DTOs
//! - [`rewards`] - Reward tier DTOs
//!
//! ## Serialization Format
//!
//! The backend emits camelCase field names; DTOs rename where the Rust
//! field differs. Optional fields are omitted when `None` using
//! `#[serde(skip_serializing_if = "Option::is_none")]`.

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod earnings;
pub mod payment;
pub mod rewards;
pub mod withdrawal;

pub use auth::*;
pub use catalog::*;
pub use dashboard::*;
pub use earnings::*;
pub use payment::*;
pub use rewards::*;
pub use withdrawal::*;

/// The uniform response wrapper every backend endpoint uses.
///
/// Successful responses carry the payload in `data`; failures carry a
/// human-readable `message` and sometimes a machine-oriented `error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }
}

/// Payload for endpoints that only acknowledge an action (OTP resend,
/// password reset, health). Unknown fields are ignored, so this also
/// deserializes from a bare `{success, message}` body.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Ack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body shape of a non-2xx response before normalization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
