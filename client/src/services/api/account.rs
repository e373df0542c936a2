//! # Account Endpoints
//!
//! Profile, terms and backend health.

use super::client::ApiClient;
use crate::core::error::ApiResult;
use shared::dto::auth::{TermsDocument, UserInfo};

/// Fetch the logged-in member's profile. Requires a session token.
pub async fn get_profile(client: &ApiClient) -> ApiResult<UserInfo> {
    client.get("/api/user/profile").await
}

/// Fetch the current terms and conditions document.
pub async fn get_terms(client: &ApiClient) -> ApiResult<TermsDocument> {
    client.get("/api/terms").await
}

/// Backend liveness probe. The body is a bare string, not an envelope.
pub async fn health(client: &ApiClient) -> ApiResult<String> {
    client.get("/health").await
}
