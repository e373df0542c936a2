//! # Authentication Handlers
//!
//! Handlers for login, registration, OTP and logout actions.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthState, Screen};
use crate::core::service::ApiService;
use crate::session::Session;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::auth::{RegisterRequest, ResendOtpRequest, VerifyOtpRequest};
use std::sync::Arc;

/// Handle login submit
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn ApiService>,
    email: String,
    password: String,
) {
    if email.is_empty() || password.is_empty() {
        state
            .write()
            .auth
            .set_error("Email and password required");
        return;
    }

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(AppEvent::Loading("Logging in...".to_string())).await;
        let result = api.login(email, password).await;
        let _ = tx.send(AppEvent::LoginResult(result)).await;
    });

    state.write().busy = Some("Logging in...".to_string());
}

/// Handle registration submit. Field checks run here so the member sees
/// the first problem without a network round trip.
pub(crate) fn handle_register_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn ApiService>,
    request: RegisterRequest,
    confirm_password: String,
) {
    let checks = [
        validation::validate_email(&request.email),
        validation::validate_phone(&request.phone),
        validation::validate_password(&request.password),
        validation::validate_password_match(&request.password, &confirm_password),
        validation::validate_referral_code(request.referral_code.as_deref().unwrap_or("")),
    ];

    if request.full_name.trim().is_empty() {
        state.write().auth.set_error("Full name is required");
        return;
    }

    if let Some(problem) = checks.iter().find(|c| !c.is_valid) {
        let message = problem.error.clone().unwrap_or_default();
        state.write().auth.set_error(message);
        return;
    }

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let _ = tx
            .send(AppEvent::Loading("Creating account...".to_string()))
            .await;
        let result = api.register(request).await;
        let _ = tx.send(AppEvent::RegisterResult(result)).await;
    });

    state.write().busy = Some("Creating account...".to_string());
}

/// Handle OTP submit
pub(crate) fn handle_verify_otp_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn ApiService>,
    email: String,
    otp: String,
) {
    if otp.trim().is_empty() {
        state.write().auth.set_error("Enter the OTP");
        return;
    }

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let _ = tx
            .send(AppEvent::Loading("Verifying OTP...".to_string()))
            .await;
        let result = api.verify_otp(VerifyOtpRequest { email, otp }).await;
        let _ = tx.send(AppEvent::OtpResult(result)).await;
    });

    state.write().busy = Some("Verifying OTP...".to_string());
}

/// Handle "resend OTP"
pub(crate) fn handle_resend_otp_click(
    event_tx: Sender<AppEvent>,
    api: Arc<dyn ApiService>,
    email: String,
) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.resend_otp(ResendOtpRequest { email }).await;
        let _ = tx.send(AppEvent::RegisterResult(result)).await;
    });
}

/// Handle logout. Synchronous: clears the session and resets state.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>, session: &Session) {
    session.clear();

    let mut state = state.write();
    *state = AppState::new();
    state.current_screen = Screen::Auth;
}

/// Switch to the login form
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::login();
}

/// Switch to the registration form
pub(crate) fn handle_switch_to_register(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::register();
}
