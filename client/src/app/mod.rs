//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the headless application layer: it owns
//! the shared state, the session handle, the API client and the payment
//! flow, and pumps async results back into state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host platform (render loop, input)                 │
//! │                                                     │
//! │   App                                               │
//! │   ├─ on_tick()           - drain pending events     │
//! │   ├─ handle_*()          - user action entry points │
//! │   └─ state: Arc<RwLock<AppState>>                   │
//! └───────────────┬─────────────────────────────────────┘
//!                 │ async_channel (unbounded)
//! ┌───────────────▼─────────────────────────────────────┐
//! │  Tokio tasks                                        │
//! │  ├─ handlers::auth       - login/register/OTP       │
//! │  ├─ handlers::dashboard  - data fetches (fan-out)   │
//! │  ├─ handlers::payment    - checkout flows           │
//! │  └─ handlers::withdrawal - withdrawal submission    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Locks on the state are held briefly; all I/O happens in spawned tasks
//! that report back via [`AppEvent`].

pub mod events;
pub mod handlers;
pub mod state;

pub use events::AppEvent;
pub use state::{AppState, AuthState, NoticeLevel, Screen};

use crate::config::Config;
use crate::core::service::{ApiService, CheckoutProvider};
use crate::services::api::ApiClient;
use crate::services::checkout::PaymentFlow;
use crate::session::Session;
use parking_lot::RwLock;
use shared::dto::auth::RegisterRequest;
use std::sync::Arc;

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state
    pub state: Arc<RwLock<AppState>>,
    /// Session handle shared with the API client
    pub session: Session,
    api: Arc<dyn ApiService>,
    payment: Arc<PaymentFlow>,
    event_tx: async_channel::Sender<AppEvent>,
    event_rx: async_channel::Receiver<AppEvent>,
}

impl App {
    /// Build the app with a real [`ApiClient`] over an in-memory session.
    pub fn new(config: &Config, provider: Arc<dyn CheckoutProvider>) -> Self {
        let session = Session::in_memory();
        let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(config, session.clone()));
        Self::with_services(config, session, api, provider)
    }

    /// Build the app over injected services. Tests use this with doubles;
    /// hosts use it to supply a session rehydrated from durable storage.
    pub fn with_services(
        config: &Config,
        session: Session,
        api: Arc<dyn ApiService>,
        provider: Arc<dyn CheckoutProvider>,
    ) -> Self {
        let (event_tx, event_rx) = async_channel::unbounded();
        let payment = Arc::new(PaymentFlow::new(
            api.clone(),
            provider,
            session.clone(),
            config,
        ));

        let mut initial = AppState::new();
        if session.is_authenticated() {
            // Restored session: skip the auth screen.
            initial.current_screen = if session.payment_verified() {
                Screen::Dashboard
            } else {
                Screen::Activation
            };
            initial.profile = session.user();
        }

        Self {
            state: Arc::new(RwLock::new(initial)),
            session,
            api,
            payment,
            event_tx,
            event_rx,
        }
    }

    /// Drain pending async results into state. Call once per frame.
    pub fn on_tick(&self) {
        while let Ok(event) = self.event_rx.try_recv() {
            let mut state = self.state.write();
            events::apply_event(&mut state, &self.session, event);
        }
    }

    // ---- user actions -------------------------------------------------

    pub fn handle_login_click(&self, email: String, password: String) {
        handlers::auth::handle_login_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            email,
            password,
        );
    }

    pub fn handle_register_click(&self, request: RegisterRequest, confirm_password: String) {
        handlers::auth::handle_register_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            request,
            confirm_password,
        );
    }

    pub fn handle_verify_otp_click(&self, email: String, otp: String) {
        handlers::auth::handle_verify_otp_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            email,
            otp,
        );
    }

    pub fn handle_resend_otp_click(&self, email: String) {
        handlers::auth::handle_resend_otp_click(self.event_tx.clone(), self.api.clone(), email);
    }

    pub fn handle_logout(&self) {
        handlers::auth::handle_logout(self.state.clone(), &self.session);
    }

    pub fn handle_switch_to_login(&self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    pub fn handle_switch_to_register(&self) {
        handlers::auth::handle_switch_to_register(self.state.clone());
    }

    /// Change screens; capability checks may redirect to auth/activation.
    pub fn handle_screen_change(&self, target: Screen) -> bool {
        handlers::navigation::handle_screen_change(&self.state, &self.session, target)
    }

    pub fn refresh_dashboard(&self) {
        handlers::dashboard::refresh_dashboard(self.event_tx.clone(), self.api.clone());
    }

    pub fn load_earnings(&self) {
        handlers::dashboard::load_earnings(self.event_tx.clone(), self.api.clone());
    }

    pub fn load_team(&self) {
        handlers::dashboard::load_team(self.event_tx.clone(), self.api.clone());
    }

    pub fn load_products(&self) {
        handlers::dashboard::load_products(self.event_tx.clone(), self.api.clone());
    }

    pub fn load_withdrawals(&self) {
        handlers::dashboard::load_withdrawals(self.event_tx.clone(), self.api.clone());
    }

    pub fn load_rewards(&self) {
        handlers::dashboard::load_rewards(self.event_tx.clone(), self.api.clone());
    }

    pub fn start_activation(&self) {
        handlers::payment::start_activation(
            self.state.clone(),
            self.event_tx.clone(),
            self.payment.clone(),
        );
    }

    pub fn start_payment(&self, amount: u64, description: String) {
        handlers::payment::start_payment(
            self.state.clone(),
            self.event_tx.clone(),
            self.payment.clone(),
            amount,
            description,
        );
    }

    pub fn handle_withdrawal_submit(&self, amount: f64, method: String, description: Option<String>) {
        handlers::withdrawal::handle_withdrawal_submit(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            amount,
            method,
            description,
        );
    }
}
