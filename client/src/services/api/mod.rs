//! # Backend API Client Module
//!
//! HTTP client for communicating with the CQ Wealth backend.
//! Handles authentication, profile and dashboard data, the product
//! catalog, payment orders and withdrawals.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient struct, envelope decoding, error classification
//! ├── auth.rs       - Authentication endpoints (login, register, OTP, password reset)
//! ├── account.rs    - Profile, terms and health endpoints
//! ├── dashboard.rs  - Dashboard, earnings and team endpoints
//! ├── catalog.rs    - Product catalog and rewards endpoints
//! ├── payment.rs    - Payment order creation and verification endpoints
//! └── withdrawal.rs - Withdrawal request and history endpoints
//! ```

pub mod account;
pub mod auth;
pub mod catalog;
pub mod client;
pub mod dashboard;
pub mod payment;
pub mod withdrawal;

pub use client::ApiClient;
