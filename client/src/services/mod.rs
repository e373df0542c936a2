//! # Services Module
//!
//! External integrations for the CQ Wealth client.
//!
//! ```text
//! services/
//! ├── api/         - Backend HTTP client
//! │                  (auth, dashboard, catalog, payments, withdrawals)
//! └── checkout.rs  - Payment orchestration over the vendor checkout UI
//! ```
//!
//! [`api::ApiClient`] is thread-safe and is shared behind an `Arc`; the
//! [`checkout::PaymentFlow`] composes the API client with a
//! [`crate::core::service::CheckoutProvider`] implementation supplied by
//! the host platform.

pub mod api;
pub mod checkout;
