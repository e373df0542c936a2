//! # Navigation Handlers
//!
//! Screen changes with capability checks: unauthenticated members land on
//! the auth screen, members without the activation payment land on the
//! activation screen.

use crate::app::state::{AppState, NoticeLevel, Screen};
use crate::session::Session;
use parking_lot::RwLock;
use std::sync::Arc;

/// Change screens. Returns true when the target screen was entered.
pub(crate) fn handle_screen_change(
    state: &Arc<RwLock<AppState>>,
    session: &Session,
    target: Screen,
) -> bool {
    if Screen::requires_auth(target) && !session.is_authenticated() {
        let mut state = state.write();
        state.current_screen = Screen::Auth;
        state.notify(NoticeLevel::Info, "Please log in first");
        return false;
    }

    if Screen::requires_activation(target) && !session.payment_verified() {
        let mut state = state.write();
        state.current_screen = Screen::Activation;
        state.notify(
            NoticeLevel::Info,
            "Complete your activation payment to unlock this screen",
        );
        return false;
    }

    state.write().current_screen = target;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::auth::UserInfo;

    fn member(verified: bool) -> UserInfo {
        UserInfo {
            id: "u-1".to_string(),
            full_name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            referral_code: "CQ7X2M".to_string(),
            payment_verified: verified,
            wallet_balance: 0.0,
        }
    }

    #[test]
    fn test_anonymous_member_is_sent_to_auth() {
        let state = Arc::new(RwLock::new(AppState::new()));
        let session = Session::in_memory();

        assert!(!handle_screen_change(&state, &session, Screen::Dashboard));
        assert_eq!(state.read().current_screen, Screen::Auth);
    }

    #[test]
    fn test_unactivated_member_is_sent_to_activation() {
        let state = Arc::new(RwLock::new(AppState::new()));
        let session = Session::in_memory();
        session.establish(member(false), "tok-1".to_string());

        assert!(!handle_screen_change(&state, &session, Screen::Dashboard));
        assert_eq!(state.read().current_screen, Screen::Activation);

        // Catalog browsing is not payment-gated.
        assert!(handle_screen_change(&state, &session, Screen::Products));
        assert_eq!(state.read().current_screen, Screen::Products);
    }

    #[test]
    fn test_activated_member_navigates_freely() {
        let state = Arc::new(RwLock::new(AppState::new()));
        let session = Session::in_memory();
        session.establish(member(true), "tok-1".to_string());

        assert!(handle_screen_change(&state, &session, Screen::Dashboard));
        assert!(handle_screen_change(&state, &session, Screen::Withdrawals));
        assert_eq!(state.read().current_screen, Screen::Withdrawals);
    }
}
