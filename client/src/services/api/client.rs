//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every request carries the session's bearer token when one is set, runs
//! under a fixed 30-second deadline, and resolves to either a typed payload
//! or a structured [`ApiError`] — callers never see a raw `reqwest` error
//! and never match on message text.

use crate::config::Config;
use crate::core::error::{ApiError, ApiResult};
use crate::session::Session;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::dto::{Envelope, ErrorBody};
use std::time::Duration;

/// Deadline applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for communicating with the CQ Wealth backend.
///
/// The client holds an injected [`Session`] handle rather than a token
/// field of its own; two clients constructed over different sessions carry
/// different tokens.
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client from the application config.
    pub fn new(config: &Config, session: Session) -> Self {
        Self::with_base_url(config.api_base_url.clone(), session)
    }

    /// Create a client against an explicit base URL. Used by tests to
    /// point at a stub backend.
    pub fn with_base_url(base_url: impl Into<String>, session: Session) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.http.get(format!("{}{}", self.base_url, path));
        self.dispatch(request).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        self.dispatch(request).await
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(classify_transport_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(classify_transport_error)?;

        // The backend answers JSON everywhere except `/health`, which is a
        // bare string body; a non-JSON body becomes a string value so the
        // envelope rules still apply.
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::String(text));
        envelope_into(status, decode_envelope(status, body))
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl crate::core::service::ApiService for ApiClient {
    async fn login(
        &self,
        email: String,
        password: String,
    ) -> ApiResult<shared::dto::auth::AuthData> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn register(
        &self,
        request: shared::dto::auth::RegisterRequest,
    ) -> ApiResult<shared::dto::Ack> {
        crate::services::api::auth::register(self, request).await
    }

    async fn verify_otp(
        &self,
        request: shared::dto::auth::VerifyOtpRequest,
    ) -> ApiResult<shared::dto::auth::AuthData> {
        crate::services::api::auth::verify_otp(self, request).await
    }

    async fn resend_otp(
        &self,
        request: shared::dto::auth::ResendOtpRequest,
    ) -> ApiResult<shared::dto::Ack> {
        crate::services::api::auth::resend_otp(self, request).await
    }

    async fn forgot_password(
        &self,
        request: shared::dto::auth::ForgotPasswordRequest,
    ) -> ApiResult<shared::dto::Ack> {
        crate::services::api::auth::forgot_password(self, request).await
    }

    async fn reset_password(
        &self,
        request: shared::dto::auth::ResetPasswordRequest,
    ) -> ApiResult<shared::dto::Ack> {
        crate::services::api::auth::reset_password(self, request).await
    }

    async fn get_profile(&self) -> ApiResult<shared::dto::auth::UserInfo> {
        crate::services::api::account::get_profile(self).await
    }

    async fn get_dashboard(&self) -> ApiResult<shared::dto::dashboard::DashboardData> {
        crate::services::api::dashboard::get_dashboard(self).await
    }

    async fn get_earnings(&self) -> ApiResult<shared::dto::earnings::EarningsData> {
        crate::services::api::dashboard::get_earnings(self).await
    }

    async fn get_team(&self) -> ApiResult<shared::dto::dashboard::TeamData> {
        crate::services::api::dashboard::get_team(self).await
    }

    async fn get_products(&self) -> ApiResult<Vec<shared::dto::catalog::Product>> {
        crate::services::api::catalog::get_products(self).await
    }

    async fn get_rewards(&self) -> ApiResult<Vec<shared::dto::rewards::RewardTier>> {
        crate::services::api::catalog::get_rewards(self).await
    }

    async fn get_terms(&self) -> ApiResult<shared::dto::auth::TermsDocument> {
        crate::services::api::account::get_terms(self).await
    }

    async fn health(&self) -> ApiResult<String> {
        crate::services::api::account::health(self).await
    }

    async fn create_order(
        &self,
        request: shared::dto::payment::CreateOrderRequest,
    ) -> ApiResult<shared::dto::payment::PaymentOrder> {
        crate::services::api::payment::create_order(self, request).await
    }

    async fn create_activation_order(
        &self,
        request: shared::dto::payment::CreateActivationOrderRequest,
    ) -> ApiResult<shared::dto::payment::PaymentOrder> {
        crate::services::api::payment::create_activation_order(self, request).await
    }

    async fn verify_payment(
        &self,
        receipt: shared::dto::payment::CheckoutReceipt,
    ) -> ApiResult<shared::dto::payment::PaymentVerification> {
        crate::services::api::payment::verify_payment(self, receipt).await
    }

    async fn request_withdrawal(
        &self,
        request: shared::dto::withdrawal::NewWithdrawal,
    ) -> ApiResult<shared::dto::withdrawal::WithdrawalRecord> {
        crate::services::api::withdrawal::request_withdrawal(self, request).await
    }

    async fn get_withdrawals(&self) -> ApiResult<Vec<shared::dto::withdrawal::WithdrawalRecord>> {
        crate::services::api::withdrawal::get_withdrawals(self).await
    }
}

/// Map a transport-level failure onto the error taxonomy.
fn classify_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else if err.is_connect() || err.is_request() {
        ApiError::Network(err.to_string())
    } else if err.is_decode() {
        ApiError::Parse(err.to_string())
    } else {
        ApiError::Unexpected(err.to_string())
    }
}

/// Normalize a raw response into the envelope convention.
///
/// - 2xx: success; `data` is the body's `data` field, or the whole body
///   when the field is absent. A 2xx body that declares `success: false`
///   is treated as a failure.
/// - non-2xx: failure; the message is the body's `message`, else its
///   `error`, else the literal `"An error occurred"`.
pub(crate) fn decode_envelope(status: u16, body: Value) -> Envelope<Value> {
    let in_success_range = (200..300).contains(&status);
    let declared_failure = body.get("success").and_then(Value::as_bool) == Some(false);

    if in_success_range && !declared_failure {
        let message = body.get("message").and_then(Value::as_str).map(str::to_owned);
        let data = match body.get("data") {
            Some(data) => data.clone(),
            None => body,
        };
        Envelope {
            success: true,
            message,
            data: Some(data),
            error: None,
        }
    } else {
        let ErrorBody { message, error } = serde_json::from_value(body).unwrap_or_default();
        let message = message
            .or_else(|| error.clone())
            .unwrap_or_else(|| "An error occurred".to_string());
        Envelope {
            success: false,
            message: Some(message),
            data: None,
            error,
        }
    }
}

fn envelope_into<T: DeserializeOwned>(status: u16, envelope: Envelope<Value>) -> ApiResult<T> {
    if envelope.success {
        let data = envelope.data.unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| ApiError::Parse(e.to_string()))
    } else {
        Err(ApiError::Api {
            status,
            message: envelope
                .message
                .unwrap_or_else(|| "An error occurred".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_uses_data_field() {
        let envelope = decode_envelope(200, json!({"success": true, "data": {"id": "u-1"}}));
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(json!({"id": "u-1"})));
    }

    #[test]
    fn test_success_envelope_falls_back_to_whole_body() {
        let body = json!({"id": "u-1", "fullName": "Asha"});
        let envelope = decode_envelope(201, body.clone());
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(body));
    }

    #[test]
    fn test_failure_envelope_prefers_message() {
        let envelope = decode_envelope(400, json!({"message": "Invalid OTP", "error": "otp_invalid"}));
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Invalid OTP"));
        assert_eq!(envelope.error.as_deref(), Some("otp_invalid"));
    }

    #[test]
    fn test_failure_envelope_falls_back_to_error_field() {
        let envelope = decode_envelope(422, json!({"error": "amount below minimum"}));
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("amount below minimum"));
    }

    #[test]
    fn test_failure_envelope_generic_message() {
        let envelope = decode_envelope(500, Value::String("Internal Server Error".to_string()));
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("An error occurred"));
    }

    #[test]
    fn test_declared_failure_in_success_range() {
        let envelope = decode_envelope(200, json!({"success": false, "message": "OTP expired"}));
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("OTP expired"));
    }

    #[test]
    fn test_envelope_into_typed() {
        #[derive(serde::Deserialize, Debug)]
        struct Row {
            id: String,
        }

        let ok: ApiResult<Row> =
            envelope_into(200, decode_envelope(200, json!({"data": {"id": "u-1"}})));
        assert_eq!(ok.unwrap().id, "u-1");

        let err: ApiResult<Row> =
            envelope_into(404, decode_envelope(404, json!({"message": "Not found"})));
        match err {
            Err(ApiError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
