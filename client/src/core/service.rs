//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! [`ApiService`] abstracts the backend façade so the app layer and the
//! payment orchestrator can run against a test double. [`CheckoutProvider`]
//! is the seam to the vendor checkout SDK: the real implementation is a
//! platform adapter outside this crate, tests use a scripted double.

use crate::core::error::ApiResult;
use crate::services::checkout::{CheckoutError, CheckoutOptions};
use async_trait::async_trait;
use shared::dto::auth::{
    AuthData, ForgotPasswordRequest, LoginRequest, RegisterRequest, ResendOtpRequest,
    ResetPasswordRequest, TermsDocument, UserInfo, VerifyOtpRequest,
};
use shared::dto::catalog::Product;
use shared::dto::dashboard::{DashboardData, TeamData};
use shared::dto::earnings::EarningsData;
use shared::dto::payment::{
    CheckoutReceipt, CreateActivationOrderRequest, CreateOrderRequest, PaymentOrder,
    PaymentVerification,
};
use shared::dto::rewards::RewardTier;
use shared::dto::withdrawal::{NewWithdrawal, WithdrawalRecord};
use shared::dto::Ack;

/// Trait for backend API operations.
///
/// Implemented by [`crate::services::api::ApiClient`]; mocked in tests.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Login with email and password
    async fn login(&self, email: String, password: String) -> ApiResult<AuthData>;

    /// Register a new member account
    async fn register(&self, request: RegisterRequest) -> ApiResult<Ack>;

    /// Verify the registration OTP; completes signup and returns the session
    async fn verify_otp(&self, request: VerifyOtpRequest) -> ApiResult<AuthData>;

    /// Request a fresh OTP for a pending registration
    async fn resend_otp(&self, request: ResendOtpRequest) -> ApiResult<Ack>;

    /// Start a password reset
    async fn forgot_password(&self, request: ForgotPasswordRequest) -> ApiResult<Ack>;

    /// Complete a password reset with the emailed OTP
    async fn reset_password(&self, request: ResetPasswordRequest) -> ApiResult<Ack>;

    /// Fetch the logged-in member's profile
    async fn get_profile(&self) -> ApiResult<UserInfo>;

    /// Fetch the dashboard snapshot (wallet balance, referrals, team counts)
    async fn get_dashboard(&self) -> ApiResult<DashboardData>;

    /// Fetch commission totals and entries
    async fn get_earnings(&self) -> ApiResult<EarningsData>;

    /// Fetch the downline team listing
    async fn get_team(&self) -> ApiResult<TeamData>;

    /// Fetch the product catalog
    async fn get_products(&self) -> ApiResult<Vec<Product>>;

    /// Fetch reward tiers
    async fn get_rewards(&self) -> ApiResult<Vec<RewardTier>>;

    /// Fetch the terms and conditions document
    async fn get_terms(&self) -> ApiResult<TermsDocument>;

    /// Backend liveness probe
    async fn health(&self) -> ApiResult<String>;

    /// Create a payment order for a caller-supplied amount
    async fn create_order(&self, request: CreateOrderRequest) -> ApiResult<PaymentOrder>;

    /// Create the fixed-amount activation order (the backend decides the amount)
    async fn create_activation_order(
        &self,
        request: CreateActivationOrderRequest,
    ) -> ApiResult<PaymentOrder>;

    /// Submit a checkout receipt for server-side signature verification
    async fn verify_payment(&self, receipt: CheckoutReceipt) -> ApiResult<PaymentVerification>;

    /// Submit a withdrawal request
    async fn request_withdrawal(&self, request: NewWithdrawal) -> ApiResult<WithdrawalRecord>;

    /// Fetch withdrawal history
    async fn get_withdrawals(&self) -> ApiResult<Vec<WithdrawalRecord>>;
}

/// Trait for the vendor checkout UI.
///
/// `open` suspends until the member completes or dismisses the vendor
/// screen; there is no cancellation path from this side.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    async fn open(
        &self,
        options: CheckoutOptions,
    ) -> Result<shared::dto::payment::CheckoutReceipt, CheckoutError>;
}
