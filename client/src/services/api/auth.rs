//! # Authentication Endpoints
//!
//! Handles member authentication: login, registration with OTP
//! verification, and password reset.

use super::client::ApiClient;
use crate::core::error::ApiResult;
use shared::dto::auth::{
    AuthData, ForgotPasswordRequest, LoginRequest, RegisterRequest, ResendOtpRequest,
    ResetPasswordRequest, VerifyOtpRequest,
};
use shared::dto::Ack;

/// Login with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> ApiResult<AuthData> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };
    let result = client.post("/api/users/login", &request).await;

    match &result {
        Ok(_) => tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            "Login successful"
        ),
        Err(e) => tracing::warn!(error = %e, "Login failed"),
    }
    result
}

/// Register a new member account. Success means an OTP was sent; the
/// session is only established after [`verify_otp`].
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: RegisterRequest) -> ApiResult<Ack> {
    tracing::info!("Registering new member");
    client.post("/api/users/register", &request).await
}

/// Verify the registration OTP and receive the authenticated session.
pub async fn verify_otp(client: &ApiClient, request: VerifyOtpRequest) -> ApiResult<AuthData> {
    client.post("/api/users/verify-otp", &request).await
}

/// Request a fresh OTP for a pending registration.
pub async fn resend_otp(client: &ApiClient, request: ResendOtpRequest) -> ApiResult<Ack> {
    client.post("/api/users/resend-otp", &request).await
}

/// Start a password reset.
pub async fn forgot_password(
    client: &ApiClient,
    request: ForgotPasswordRequest,
) -> ApiResult<Ack> {
    client.post("/api/users/forgot-password", &request).await
}

/// Complete a password reset with the emailed OTP.
pub async fn reset_password(client: &ApiClient, request: ResetPasswordRequest) -> ApiResult<Ack> {
    client.post("/api/users/reset-password", &request).await
}
