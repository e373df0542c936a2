//! Stub CQ Wealth backend for integration tests.
//!
//! Serves the envelope convention over a real TCP port so the client's
//! transport, token handling and payment flow are exercised end to end.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use client::config::{Config, Environment};
use client::core::service::CheckoutProvider;
use client::services::checkout::{CheckoutError, CheckoutOptions};
use serde_json::{json, Value};
use shared::dto::payment::CheckoutReceipt;

/// Token the stub issues on login and expects on gated routes.
pub const TEST_TOKEN: &str = "tok-itest";

/// Checkout double that always completes with a well-formed receipt.
pub struct CompletingCheckout;

#[async_trait]
impl CheckoutProvider for CompletingCheckout {
    async fn open(&self, options: CheckoutOptions) -> Result<CheckoutReceipt, CheckoutError> {
        Ok(CheckoutReceipt {
            razorpay_payment_id: "pay_G1".to_string(),
            razorpay_order_id: options.order_id,
            razorpay_signature: "sig_abc".to_string(),
        })
    }
}

/// Config pointed at the stub backend.
pub fn test_config(base_url: &str) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        checkout_key_id: "rzp_test_1DP5mmOlF5G5ag".to_string(),
        company_name: "CQ Wealth".to_string(),
        company_logo_url: "https://cqwealth.app/assets/logo.png".to_string(),
        theme_color: "#1B4DD1".to_string(),
        environment: Environment::Test,
    }
}

pub fn member_json(payment_verified: bool) -> Value {
    json!({
        "id": "u-1",
        "fullName": "Asha Verma",
        "email": "asha@example.com",
        "phone": "9876543210",
        "referralCode": "CQ7X2M",
        "paymentVerified": payment_verified,
        "walletBalance": 120.0
    })
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"success": false, "message": "Unauthorized"})),
    )
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "asha@example.com" && body["password"] == "secret1" {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Login successful",
                "data": {"user": member_json(false), "token": TEST_TOKEN}
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Invalid credentials"})),
        )
    }
}

async fn profile(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match bearer(&headers) {
        Some(token) if token == TEST_TOKEN => (
            StatusCode::OK,
            Json(json!({"success": true, "data": member_json(false)})),
        ),
        _ => unauthorized(),
    }
}

async fn dashboard(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match bearer(&headers) {
        Some(token) if token == TEST_TOKEN => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "walletBalance": 120.0,
                    "referrals": {
                        "referralCode": "CQ7X2M",
                        "totalReferrals": 4,
                        "activeReferrals": 2
                    },
                    "team": {"direct": 4, "total": 9}
                }
            })),
        ),
        _ => unauthorized(),
    }
}

async fn create_activation_order(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match bearer(&headers) {
        Some(token) if token == TEST_TOKEN => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "orderId": "ord_act_1",
                    "gatewayOrderId": "order_G1",
                    "amount": 49900,
                    "currency": "INR",
                    "keyId": "rzp_test_1DP5mmOlF5G5ag",
                    "status": "created"
                }
            })),
        ),
        _ => unauthorized(),
    }
}

async fn verify_payment(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if bearer(&headers) != Some(TEST_TOKEN) {
        return unauthorized();
    }

    let complete = body["razorpay_payment_id"].is_string()
        && body["razorpay_order_id"].is_string()
        && body["razorpay_signature"].is_string();

    if complete {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "success": true,
                    "message": "Payment verified",
                    "paymentId": body["razorpay_payment_id"],
                    "status": "captured"
                }
            })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "Missing payment signature"})),
        )
    }
}

async fn health() -> &'static str {
    "OK"
}

/// Install a test subscriber once so `RUST_LOG` surfaces client spans.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Bind the stub on an ephemeral port and return its base URL.
pub async fn spawn_stub() -> String {
    init_tracing();

    let app = Router::new()
        .route("/api/users/login", post(login))
        .route("/api/user/profile", get(profile))
        .route("/api/dashboard", get(dashboard))
        .route(
            "/api/payments/create-activation-order",
            post(create_activation_order),
        )
        .route("/api/payments/verify", post(verify_payment))
        .route("/health", get(health));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });

    format!("http://{addr}")
}
