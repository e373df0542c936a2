//! # Session Management
//!
//! The session handle holds the logged-in member and bearer token. It is an
//! injected, clonable value — every [`crate::services::api::ApiClient`]
//! receives its own handle, so two clients in one process can carry two
//! different tokens.
//!
//! Durability is delegated to a [`TokenStorage`] implementation. The
//! in-tree [`MemoryTokenStorage`] lives only as long as the process; a
//! platform keychain adapter would implement the same trait to survive
//! restarts.

use parking_lot::RwLock;
use shared::dto::auth::UserInfo;
use std::sync::Arc;

/// The unit of persisted session state: the bearer token plus the cached
/// profile (which carries the payment-access flag).
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: UserInfo,
}

/// Persistence contract for the session.
///
/// The storage backend on a real device (keychain, encrypted prefs) is
/// outside this crate; callers only rely on load/store/clear.
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Option<StoredSession>;
    fn store(&self, session: &StoredSession);
    fn clear(&self);
}

/// Process-local storage. Survives re-renders and new `Session` handles
/// within a process, not a restart.
#[derive(Default)]
pub struct MemoryTokenStorage {
    slot: RwLock<Option<StoredSession>>,
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<StoredSession> {
        self.slot.read().clone()
    }

    fn store(&self, session: &StoredSession) {
        *self.slot.write() = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.write() = None;
    }
}

#[derive(Default)]
struct SessionState {
    user: Option<UserInfo>,
    token: Option<String>,
}

/// Clonable handle over the current session.
///
/// All mutations write through to the injected [`TokenStorage`], so a
/// fresh handle built over the same storage rehydrates the session.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    state: RwLock<SessionState>,
    storage: Arc<dyn TokenStorage>,
}

impl Session {
    /// Create a session over the given storage, rehydrating any persisted
    /// token and profile.
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        let state = match storage.load() {
            Some(stored) => SessionState {
                user: Some(stored.user),
                token: Some(stored.token),
            },
            None => SessionState::default(),
        };

        Self {
            inner: Arc::new(SessionInner {
                state: RwLock::new(state),
                storage,
            }),
        }
    }

    /// Session over fresh in-memory storage. Mostly for tests and tools.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStorage::default()))
    }

    /// Install a logged-in member. Called on login and OTP verification.
    pub fn establish(&self, user: UserInfo, token: String) {
        self.inner.storage.store(&StoredSession {
            token: token.clone(),
            user: user.clone(),
        });

        let mut state = self.inner.state.write();
        state.user = Some(user);
        state.token = Some(token);
    }

    /// Replace the cached profile (e.g. after a profile refresh), keeping
    /// the token.
    pub fn update_user(&self, user: UserInfo) {
        let token = {
            let mut state = self.inner.state.write();
            state.user = Some(user.clone());
            state.token.clone()
        };

        if let Some(token) = token {
            self.inner.storage.store(&StoredSession { token, user });
        }
    }

    /// Flip the payment-access flag after a verified activation payment.
    pub fn mark_payment_verified(&self) {
        let stored = {
            let mut state = self.inner.state.write();
            if let Some(user) = state.user.as_mut() {
                user.payment_verified = true;
            }
            match (&state.token, &state.user) {
                (Some(token), Some(user)) => Some(StoredSession {
                    token: token.clone(),
                    user: user.clone(),
                }),
                _ => None,
            }
        };

        if let Some(stored) = stored {
            self.inner.storage.store(&stored);
        }
    }

    /// Clear everything. Used by logout and the 401 force-logout path.
    pub fn clear(&self) {
        self.inner.storage.clear();
        *self.inner.state.write() = SessionState::default();
    }

    pub fn token(&self) -> Option<String> {
        self.inner.state.read().token.clone()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.inner.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().token.is_some()
    }

    pub fn payment_verified(&self) -> bool {
        self.inner
            .state
            .read()
            .user
            .as_ref()
            .map(|u| u.payment_verified)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_establish_and_clear() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());

        session.establish(member(false), "tok-1".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert!(!session.payment_verified());

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_access_flag_survives_rehydration_within_process() {
        let storage: Arc<dyn TokenStorage> = Arc::new(MemoryTokenStorage::default());

        let session = Session::new(storage.clone());
        session.establish(member(false), "tok-1".to_string());
        session.mark_payment_verified();
        assert!(session.payment_verified());

        // A new handle over the same storage sees the flag (simulated
        // re-render within one process).
        let rehydrated = Session::new(storage);
        assert!(rehydrated.is_authenticated());
        assert!(rehydrated.payment_verified());

        // A new handle over fresh storage does not (simulated restart
        // without a durable storage backend).
        let fresh = Session::in_memory();
        assert!(!fresh.is_authenticated());
        assert!(!fresh.payment_verified());
    }

    #[test]
    fn test_independent_sessions_carry_independent_tokens() {
        let a = Session::in_memory();
        let b = Session::in_memory();

        a.establish(member(false), "tok-a".to_string());
        b.establish(member(true), "tok-b".to_string());

        assert_eq!(a.token().as_deref(), Some("tok-a"));
        assert_eq!(b.token().as_deref(), Some("tok-b"));
        assert!(!a.payment_verified());
        assert!(b.payment_verified());
    }
}
