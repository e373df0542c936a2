//! # CQ Wealth Client - Library Root
//!
//! Client SDK and headless application layer for the CQ Wealth membership
//! platform. Everything a frontend needs short of rendering lives here:
//! the HTTP façade over the backend, session management, the payment
//! checkout orchestration and the screen/state model.
//!
//! ## Module Structure
//!
//! - **app**: Application state and screen management
//!   - Event-driven: handlers spawn async work, results fold back into
//!     state via [`app::AppEvent`]
//!   - Screen navigation with auth/activation capability checks
//!
//! - **services**: External integrations
//!   - `api`: Backend HTTP client (auth, dashboard, catalog, payments,
//!     withdrawals)
//!   - `checkout`: Payment orchestration over the vendor checkout UI
//!
//! - **core**: Error taxonomy and service traits for dependency injection
//!
//! - **session**: Injected session handle and the token storage contract
//!
//! - **config**: Environment-driven configuration with compiled defaults
//!
//! - **utils**: Input validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use client::app::App;
//! use client::config::Config;
//! use std::sync::Arc;
//! # struct NativeCheckout;
//! # #[async_trait::async_trait]
//! # impl client::core::service::CheckoutProvider for NativeCheckout {
//! #     async fn open(
//! #         &self,
//! #         _options: client::services::checkout::CheckoutOptions,
//! #     ) -> Result<shared::dto::payment::CheckoutReceipt, client::services::checkout::CheckoutError> {
//! #         unimplemented!()
//! #     }
//! # }
//!
//! let config = Config::from_env().expect("config");
//! let app = App::new(&config, Arc::new(NativeCheckout));
//!
//! app.handle_login_click("asha@example.com".into(), "secret1".into());
//! // ... in the host's frame loop:
//! app.on_tick();
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod services;
pub mod session;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use config::Config;
pub use crate::core::{ApiError, ApiResult};
pub use services::api::ApiClient;
pub use services::checkout::{PaymentFlow, PaymentOutcome, PaymentPhase};
pub use session::Session;
