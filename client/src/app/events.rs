//! # Application Events
//!
//! Event types carrying async task results back to the state owner, and
//! the reducer that folds them into [`AppState`].
//!
//! Errors arrive as structured [`ApiError`] values so the reducer can
//! branch on the variant; a 401 anywhere routes through the force-logout
//! remediation instead of a plain alert.

use crate::app::state::{AppState, AuthState, NoticeLevel, Screen};
use crate::core::error::ApiError;
use crate::services::checkout::PaymentOutcome;
use crate::session::Session;
use shared::dto::auth::{AuthData, UserInfo};
use shared::dto::catalog::Product;
use shared::dto::dashboard::{DashboardData, TeamData};
use shared::dto::earnings::EarningsData;
use shared::dto::rewards::RewardTier;
use shared::dto::withdrawal::WithdrawalRecord;
use shared::dto::Ack;

/// Async task results sent back to the state owner
#[derive(Debug)]
pub enum AppEvent {
    /// An operation started; the string is shown as a busy indicator
    Loading(String),
    /// Login completed
    LoginResult(Result<AuthData, ApiError>),
    /// Registration completed (OTP sent)
    RegisterResult(Result<Ack, ApiError>),
    /// OTP verification completed
    OtpResult(Result<AuthData, ApiError>),
    /// Profile refresh completed
    ProfileLoaded(Result<UserInfo, ApiError>),
    /// Dashboard fan-out completed (snapshot + fresh profile)
    DashboardLoaded(Result<(DashboardData, UserInfo), ApiError>),
    /// Earnings fetch completed
    EarningsLoaded(Result<EarningsData, ApiError>),
    /// Team fetch completed
    TeamLoaded(Result<TeamData, ApiError>),
    /// Catalog fetch completed
    ProductsLoaded(Result<Vec<Product>, ApiError>),
    /// Withdrawal history fetch completed
    WithdrawalsLoaded(Result<Vec<WithdrawalRecord>, ApiError>),
    /// Reward tiers fetch completed
    RewardsLoaded(Result<Vec<RewardTier>, ApiError>),
    /// Withdrawal submission completed
    WithdrawalSubmitted(Result<WithdrawalRecord, ApiError>),
    /// A payment attempt reached a terminal phase
    PaymentFinished(PaymentOutcome),
}

/// Fold one event into the application state.
///
/// The caller owns the state lock; this function never blocks and never
/// performs I/O beyond the synchronous session/storage writes.
pub fn apply_event(state: &mut AppState, session: &Session, event: AppEvent) {
    match event {
        AppEvent::Loading(message) => {
            state.busy = Some(message);
        }

        AppEvent::LoginResult(Ok(auth)) | AppEvent::OtpResult(Ok(auth)) => {
            state.busy = None;
            session.establish(auth.user.clone(), auth.token);
            state.current_screen = if auth.user.payment_verified {
                Screen::Dashboard
            } else {
                Screen::Activation
            };
            state.profile = Some(auth.user);
            state.auth = AuthState::login();
        }

        AppEvent::LoginResult(Err(e)) | AppEvent::OtpResult(Err(e)) => {
            state.busy = None;
            state.auth.set_error(e.to_string());
        }

        AppEvent::RegisterResult(Ok(ack)) => {
            state.busy = None;
            let email = match &state.auth {
                AuthState::Register { email, .. } => email.clone(),
                _ => String::new(),
            };
            state.auth = AuthState::verify_otp(email);
            state.notify(
                NoticeLevel::Info,
                ack.message
                    .unwrap_or_else(|| "OTP sent to your email".to_string()),
            );
        }

        AppEvent::RegisterResult(Err(e)) => {
            state.busy = None;
            state.auth.set_error(e.to_string());
        }

        AppEvent::ProfileLoaded(Ok(user)) => {
            session.update_user(user.clone());
            state.profile = Some(user);
        }

        AppEvent::ProfileLoaded(Err(e)) => on_fetch_error(state, session, e),

        AppEvent::DashboardLoaded(Ok((dashboard, profile))) => {
            state.busy = None;
            session.update_user(profile.clone());
            state.dashboard = Some(dashboard);
            state.profile = Some(profile);
        }

        AppEvent::DashboardLoaded(Err(e)) => {
            state.busy = None;
            on_fetch_error(state, session, e);
        }

        AppEvent::EarningsLoaded(Ok(earnings)) => {
            state.earnings = Some(earnings);
        }

        AppEvent::TeamLoaded(Ok(team)) => {
            state.team = Some(team);
        }

        AppEvent::ProductsLoaded(Ok(products)) => {
            state.products = products;
        }

        AppEvent::WithdrawalsLoaded(Ok(withdrawals)) => {
            state.withdrawals = withdrawals;
        }

        AppEvent::RewardsLoaded(Ok(rewards)) => {
            state.rewards = rewards;
        }

        AppEvent::EarningsLoaded(Err(e))
        | AppEvent::TeamLoaded(Err(e))
        | AppEvent::ProductsLoaded(Err(e))
        | AppEvent::WithdrawalsLoaded(Err(e))
        | AppEvent::RewardsLoaded(Err(e)) => on_fetch_error(state, session, e),

        AppEvent::WithdrawalSubmitted(Ok(record)) => {
            state.busy = None;
            state.withdrawals.insert(0, record);
            state.notify(NoticeLevel::Success, "Withdrawal request submitted");
        }

        AppEvent::WithdrawalSubmitted(Err(e)) => {
            state.busy = None;
            on_fetch_error(state, session, e);
        }

        AppEvent::PaymentFinished(outcome) => {
            state.busy = None;
            if outcome.success {
                // The session flag was already flipped by the flow; mirror
                // it on the cached profile.
                if let Some(profile) = state.profile.as_mut() {
                    profile.payment_verified = true;
                }
                state.current_screen = Screen::Dashboard;
                state.notify(NoticeLevel::Success, outcome.message);
            } else {
                state.notify(NoticeLevel::Error, outcome.message);
            }
        }
    }
}

/// Shared failure path for data fetches. A 401 clears the session and
/// sends the member back to login; everything else is an alert.
fn on_fetch_error(state: &mut AppState, session: &Session, error: ApiError) {
    if error.is_unauthorized() {
        session.clear();
        state.profile = None;
        state.dashboard = None;
        state.current_screen = Screen::Auth;
        state.auth = AuthState::login();
        state.notify(
            NoticeLevel::Error,
            "Your session has expired. Please log in again.",
        );
    } else {
        state.notify(NoticeLevel::Error, error.to_string());
    }
}
