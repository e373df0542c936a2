//! # Core Module
//!
//! Cross-cutting types for the client: the transport error taxonomy and
//! the service traits used for dependency injection.

pub mod error;
pub mod service;

pub use error::{ApiError, ApiResult};
pub use service::{ApiService, CheckoutProvider};
