//! Transport integration tests against the stub backend.

mod support;

use client::core::error::ApiError;
use client::services::api::{account, auth, ApiClient};
use client::session::Session;

#[tokio::test]
async fn test_login_then_profile_carries_bearer_token() {
    let base = support::spawn_stub().await;
    let session = Session::in_memory();
    let client = ApiClient::with_base_url(base.as_str(), session.clone());

    let auth_data = auth::login(
        &client,
        "asha@example.com".to_string(),
        "secret1".to_string(),
    )
    .await
    .expect("login should succeed");
    assert_eq!(auth_data.token, support::TEST_TOKEN);
    assert_eq!(auth_data.user.referral_code, "CQ7X2M");

    // Install the session; the profile route rejects anything without
    // this exact bearer token.
    session.establish(auth_data.user, auth_data.token);

    let profile = account::get_profile(&client)
        .await
        .expect("profile should succeed with token");
    assert_eq!(profile.email, "asha@example.com");
}

#[tokio::test]
async fn test_profile_without_token_is_unauthorized() {
    let base = support::spawn_stub().await;
    let client = ApiClient::with_base_url(base.as_str(), Session::in_memory());

    let err = account::get_profile(&client)
        .await
        .expect_err("profile without token must fail");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_backend_rejection_surfaces_its_message() {
    let base = support::spawn_stub().await;
    let client = ApiClient::with_base_url(base.as_str(), Session::in_memory());

    let err = auth::login(
        &client,
        "asha@example.com".to_string(),
        "wrong".to_string(),
    )
    .await
    .expect_err("bad credentials must fail");

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_health_returns_bare_string() {
    let base = support::spawn_stub().await;
    let client = ApiClient::with_base_url(base.as_str(), Session::in_memory());

    let body = account::health(&client).await.expect("health");
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    // Port 1 is never listening.
    let client = ApiClient::with_base_url("http://127.0.0.1:1", Session::in_memory());

    let err = account::health(&client).await.expect_err("must fail");
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}
