//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the CQ Wealth client applications
//! and the backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication, registration and OTP DTOs
//!   - **[`dto::dashboard`]**: Dashboard, referral and team DTOs
//!   - **[`dto::earnings`]**: Commission and earnings DTOs
//!   - **[`dto::payment`]**: Payment order and verification DTOs
//!   - **[`dto::catalog`]**: Product catalog DTOs
//!   - **[`dto::withdrawal`]**: Withdrawal request and history DTOs
//!   - **[`dto::rewards`]**: Reward tier DTOs
//! - **[`utils`]**: Shared display utilities
//!   - **[`utils::display_commission_total`]**: Derive the earnings figure shown to members
//!   - **[`utils::format_referral_link`]**: Build a shareable referral URL
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so field names carry explicit
//! `#[serde(rename = "...")]` attributes where the Rust name differs.
//! Optional fields are omitted from JSON when `None`, and numeric fields
//! the backend sometimes drops carry `#[serde(default)]`.
//!
//! Every response body is wrapped in the [`dto::Envelope`] convention:
//!
//! ```text
//! { "success": true, "message": "...", "data": { ... } }
//! { "success": false, "message": "...", "error": "..." }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
