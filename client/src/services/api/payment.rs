//! # Payment Endpoints
//!
//! Order creation and server-side verification. These are the backend
//! halves of the checkout sequence driven by
//! [`crate::services::checkout::PaymentFlow`].

use super::client::ApiClient;
use crate::core::error::ApiResult;
use shared::dto::payment::{
    CheckoutReceipt, CreateActivationOrderRequest, CreateOrderRequest, PaymentOrder,
    PaymentVerification,
};

/// Create a payment order for a caller-supplied amount.
#[tracing::instrument(skip(client, request), fields(
    amount = request.amount,
    receipt = %request.receipt
))]
pub async fn create_order(
    client: &ApiClient,
    request: CreateOrderRequest,
) -> ApiResult<PaymentOrder> {
    tracing::info!("Creating payment order");
    let start = std::time::Instant::now();

    let result: ApiResult<PaymentOrder> = client.post("/api/payments/create-order", &request).await;

    match &result {
        Ok(order) => tracing::info!(
            order_id = %order.order_id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Payment order created"
        ),
        Err(e) => tracing::warn!(error = %e, "Payment order creation failed"),
    }
    result
}

/// Create the fixed-amount activation order. The backend decides the
/// amount; the client only supplies the receipt and member attribution.
#[tracing::instrument(skip(client, request), fields(receipt = %request.receipt))]
pub async fn create_activation_order(
    client: &ApiClient,
    request: CreateActivationOrderRequest,
) -> ApiResult<PaymentOrder> {
    tracing::info!("Creating activation order");
    client
        .post("/api/payments/create-activation-order", &request)
        .await
}

/// Submit a checkout receipt for signature verification.
#[tracing::instrument(skip(client, receipt), fields(order_id = %receipt.razorpay_order_id))]
pub async fn verify_payment(
    client: &ApiClient,
    receipt: CheckoutReceipt,
) -> ApiResult<PaymentVerification> {
    tracing::info!("Verifying payment signature");
    let start = std::time::Instant::now();

    let result: ApiResult<PaymentVerification> = client.post("/api/payments/verify", &receipt).await;

    match &result {
        Ok(verification) => tracing::info!(
            verified = verification.success,
            duration_ms = start.elapsed().as_millis() as u64,
            "Payment verification answered"
        ),
        Err(e) => tracing::warn!(error = %e, "Payment verification failed"),
    }
    result
}
