//! # Payment Data Transfer Objects
//!
//! Order creation, checkout receipt and verification shapes for the
//! Razorpay-backed payment flow. The checkout receipt field names follow
//! the vendor callback exactly (`razorpay_payment_id` etc.), so the
//! struct serializes straight into the verification request body.

use serde::{Deserialize, Serialize};

/// Request to create a payment order for a caller-supplied amount
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderRequest {
    /// Amount in paise, as the gateway expects.
    pub amount: u64,
    pub currency: String,
    /// Client-generated receipt identifier for this attempt.
    pub receipt: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to create the fixed-amount activation order. The backend
/// decides the amount; the client only supplies attribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateActivationOrderRequest {
    pub receipt: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// A payment order as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentOrder {
    /// Backend's own order identifier.
    #[serde(rename = "orderId")]
    pub order_id: String,
    /// Gateway order identifier handed to the checkout UI.
    #[serde(rename = "gatewayOrderId")]
    pub gateway_order_id: String,
    pub amount: u64,
    pub currency: String,
    /// Publishable key the checkout UI must be opened with.
    #[serde(rename = "keyId")]
    pub key_id: String,
    /// Order status string; anything other than `"created"` means the
    /// order is not payable.
    pub status: String,
}

/// Checkout result handed back by the vendor SDK on success.
///
/// Field names are the vendor's own and must not be renamed: this struct
/// is posted verbatim to the verification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

/// Server-side signature verification result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentVerification {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "paymentId", skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
