//! # Application State Types
//!
//! All state-related types for the client application: screens,
//! authentication forms, fetched data and notifications. Rendering is the
//! host platform's job; this layer only models what the screens show and
//! which transitions are legal.

use shared::dto::auth::UserInfo;
use shared::dto::catalog::{CartItem, Product};
use shared::dto::dashboard::{DashboardData, TeamData};
use shared::dto::earnings::EarningsData;
use shared::dto::rewards::RewardTier;
use shared::dto::withdrawal::WithdrawalRecord;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing screen (splash/welcome)
    Landing,
    /// Authentication screen (login/registration/OTP)
    Auth,
    /// Activation payment screen for members without full access
    Activation,
    /// Member dashboard with wallet balance and referral stats
    Dashboard,
    /// Commission and earnings breakdown
    Earnings,
    /// Downline team listing
    Team,
    /// Product catalog and cart
    Products,
    /// Withdrawal request form and history
    Withdrawals,
    /// Reward tiers
    Rewards,
}

impl Screen {
    /// Get all screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Landing,
            Screen::Auth,
            Screen::Activation,
            Screen::Dashboard,
            Screen::Earnings,
            Screen::Team,
            Screen::Products,
            Screen::Withdrawals,
            Screen::Rewards,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "Welcome",
            Screen::Auth => "Sign In",
            Screen::Activation => "Activate Your Account",
            Screen::Dashboard => "Dashboard",
            Screen::Earnings => "My Earnings",
            Screen::Team => "My Team",
            Screen::Products => "Products",
            Screen::Withdrawals => "Withdrawals",
            Screen::Rewards => "Rewards",
        }
    }

    /// Whether a screen needs a logged-in session
    pub fn requires_auth(screen: Screen) -> bool {
        !matches!(screen, Screen::Landing | Screen::Auth)
    }

    /// Whether a screen is gated behind the activation payment
    pub fn requires_activation(screen: Screen) -> bool {
        matches!(
            screen,
            Screen::Dashboard
                | Screen::Earnings
                | Screen::Team
                | Screen::Withdrawals
                | Screen::Rewards
        )
    }
}

/// Authentication sub-state
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Login form
    Login {
        email: String,
        password: String,
        error: Option<String>,
    },
    /// Registration form
    Register {
        full_name: String,
        email: String,
        phone: String,
        password: String,
        confirm_password: String,
        referral_code: String,
        error: Option<String>,
    },
    /// OTP entry after registration
    VerifyOtp {
        email: String,
        otp: String,
        error: Option<String>,
    },
}

impl AuthState {
    pub fn login() -> Self {
        AuthState::Login {
            email: String::new(),
            password: String::new(),
            error: None,
        }
    }

    pub fn register() -> Self {
        AuthState::Register {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            referral_code: String::new(),
            error: None,
        }
    }

    pub fn verify_otp(email: String) -> Self {
        AuthState::VerifyOtp {
            email,
            otp: String::new(),
            error: None,
        }
    }

    /// Set the error slot of whichever form is active.
    pub fn set_error(&mut self, message: impl Into<String>) {
        let slot = match self {
            AuthState::Login { error, .. } => error,
            AuthState::Register { error, .. } => error,
            AuthState::VerifyOtp { error, .. } => error,
        };
        *slot = Some(message.into());
    }
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Global application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Authentication form state
    pub auth: AuthState,
    /// Cached profile of the logged-in member
    pub profile: Option<UserInfo>,
    /// Dashboard snapshot
    pub dashboard: Option<DashboardData>,
    /// Earnings data
    pub earnings: Option<EarningsData>,
    /// Team listing
    pub team: Option<TeamData>,
    /// Product catalog
    pub products: Vec<Product>,
    /// Client-side cart
    pub cart: Vec<CartItem>,
    /// Withdrawal history
    pub withdrawals: Vec<WithdrawalRecord>,
    /// Reward tiers
    pub rewards: Vec<RewardTier>,
    /// Description of an in-flight operation, e.g. "Logging in..."
    pub busy: Option<String>,
    /// Pending notifications to display (level, message)
    pub notifications: Vec<(NoticeLevel, String)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_screen: Screen::Landing,
            auth: AuthState::login(),
            profile: None,
            dashboard: None,
            earnings: None,
            team: None,
            products: Vec::new(),
            cart: Vec::new(),
            withdrawals: Vec::new(),
            rewards: Vec::new(),
            busy: None,
            notifications: Vec::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notifications.push((level, message.into()));
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    /// Add a product to the cart, merging quantities for repeat adds.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        if let Some(line) = self.cart.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += quantity;
            return;
        }

        self.cart.push(CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            quantity,
            unit_price: product.price,
        });
    }

    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.retain(|l| l.product_id != product_id);
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.iter().map(CartItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            description: String::new(),
            price,
            image_url: None,
            in_stock: true,
        }
    }

    #[test]
    fn test_screen_gating() {
        assert!(!Screen::requires_auth(Screen::Landing));
        assert!(!Screen::requires_auth(Screen::Auth));
        assert!(Screen::requires_auth(Screen::Dashboard));
        assert!(Screen::requires_auth(Screen::Activation));

        assert!(Screen::requires_activation(Screen::Dashboard));
        assert!(Screen::requires_activation(Screen::Withdrawals));
        assert!(!Screen::requires_activation(Screen::Activation));
        assert!(!Screen::requires_activation(Screen::Products));
    }

    #[test]
    fn test_cart_merges_repeat_adds() {
        let mut state = AppState::new();
        let p = product("p-1", 1499.0);

        state.add_to_cart(&p, 1);
        state.add_to_cart(&p, 2);
        state.add_to_cart(&product("p-2", 500.0), 1);

        assert_eq!(state.cart.len(), 2);
        assert_eq!(state.cart[0].quantity, 3);
        assert_eq!(state.cart_total(), 1499.0 * 3.0 + 500.0);

        state.remove_from_cart("p-1");
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart_total(), 500.0);
    }
}
