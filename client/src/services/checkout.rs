//! # Checkout Orchestration
//!
//! Sequences the three-step payment protocol against the backend and the
//! vendor checkout UI:
//!
//! ```text
//! idle ──create order──▶ order_created ──open checkout──▶ checkout_opened
//!   │                        │                                │
//!   │   status != "created"  │        vendor rejects          ├──▶ checkout_cancelled
//!   └──▶ order_creation_failed                                │
//!                                                   verify signature
//!                                                             │
//!                                          ┌──────────────────┴───────┐
//!                                          ▼                          ▼
//!                                   verified_success           verified_failed
//! ```
//!
//! Every terminal state is reported as a [`PaymentOutcome`]; nothing
//! throws past this module. A failed attempt restarts from idle with a
//! fresh order — there is no retry, no idempotency-key reuse, and no
//! persistence. A receipt that fails or times out during verification is
//! not recorded anywhere client-side; recovery relies on backend-side
//! reconciliation.

use crate::config::Config;
use crate::core::error::ApiResult;
use crate::core::service::{ApiService, CheckoutProvider};
use crate::session::Session;
use chrono::{DateTime, Utc};
use shared::dto::auth::UserInfo;
use shared::dto::payment::{
    CreateActivationOrderRequest, CreateOrderRequest, PaymentOrder,
};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Currency every order is denominated in.
pub const PAYMENT_CURRENCY: &str = "INR";

/// Order status the backend must report for the flow to proceed.
const ORDER_STATUS_CREATED: &str = "created";

/// Where a payment attempt ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentPhase {
    Idle,
    OrderCreated,
    CheckoutOpened,
    VerifiedSuccess,
    VerifiedFailed,
    CheckoutCancelled,
    OrderCreationFailed,
}

/// Member contact details prefilled into the vendor sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Options handed to the vendor checkout UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOptions {
    pub key: String,
    /// Amount in paise.
    pub amount: u64,
    pub currency: String,
    /// Gateway order id, not the backend's own id.
    pub order_id: String,
    pub name: String,
    pub description: String,
    pub prefill: CheckoutPrefill,
    pub theme_color: String,
}

/// Vendor checkout failures. Dismissal and vendor-side errors are not
/// distinguished by the flow; both stop it before verification.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("checkout dismissed by user")]
    Cancelled,
    #[error("checkout failed: {0}")]
    Vendor(String),
}

/// Terminal report of one payment attempt.
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    pub success: bool,
    pub message: String,
    pub phase: PaymentPhase,
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    /// When the attempt reached its terminal phase.
    pub completed_at: DateTime<Utc>,
}

impl PaymentOutcome {
    fn failed(phase: PaymentPhase, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            phase,
            order_id: None,
            payment_id: None,
            completed_at: Utc::now(),
        }
    }
}

/// Drives the order → checkout → verify sequence.
///
/// Two entry points share the machine: [`PaymentFlow::pay`] for
/// caller-supplied amounts and [`PaymentFlow::activate`] for the
/// fixed-amount activation payment whose amount the backend decides.
pub struct PaymentFlow {
    api: Arc<dyn ApiService>,
    provider: Arc<dyn CheckoutProvider>,
    session: Session,
    company_name: String,
    theme_color: String,
}

impl PaymentFlow {
    pub fn new(
        api: Arc<dyn ApiService>,
        provider: Arc<dyn CheckoutProvider>,
        session: Session,
        config: &Config,
    ) -> Self {
        Self {
            api,
            provider,
            session,
            company_name: config.company_name.clone(),
            theme_color: config.theme_color.clone(),
        }
    }

    /// Pay a caller-supplied amount (in paise).
    #[tracing::instrument(skip(self, description), fields(amount = amount))]
    pub async fn pay(&self, amount: u64, description: impl Into<String>) -> PaymentOutcome {
        let Some(user) = self.session.user() else {
            return PaymentOutcome::failed(
                PaymentPhase::OrderCreationFailed,
                "You must be logged in to make a payment",
            );
        };

        let description = description.into();
        let request = CreateOrderRequest {
            amount,
            currency: PAYMENT_CURRENCY.to_string(),
            receipt: new_receipt(),
            user_id: user.id.clone(),
            description: Some(description.clone()),
        };

        let order = self.api.create_order(request).await;
        self.drive(user, order, description).await
    }

    /// Run the activation payment. On verified success the session's
    /// payment-access flag flips to true.
    #[tracing::instrument(skip(self))]
    pub async fn activate(&self) -> PaymentOutcome {
        let Some(user) = self.session.user() else {
            return PaymentOutcome::failed(
                PaymentPhase::OrderCreationFailed,
                "You must be logged in to activate your account",
            );
        };

        let request = CreateActivationOrderRequest {
            receipt: new_receipt(),
            user_id: user.id.clone(),
        };

        let order = self.api.create_activation_order(request).await;
        let outcome = self
            .drive(user, order, "Account activation".to_string())
            .await;

        if outcome.success {
            self.session.mark_payment_verified();
        }
        outcome
    }

    async fn drive(
        &self,
        user: UserInfo,
        order: ApiResult<PaymentOrder>,
        description: String,
    ) -> PaymentOutcome {
        let order = match order {
            Ok(order) => order,
            Err(e) => {
                return PaymentOutcome::failed(PaymentPhase::OrderCreationFailed, e.to_string())
            }
        };

        if order.status != ORDER_STATUS_CREATED {
            tracing::warn!(status = %order.status, "order not payable");
            return PaymentOutcome::failed(
                PaymentPhase::OrderCreationFailed,
                "Failed to create payment order",
            );
        }

        let options = CheckoutOptions {
            key: order.key_id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            order_id: order.gateway_order_id.clone(),
            name: self.company_name.clone(),
            description,
            prefill: CheckoutPrefill {
                name: user.full_name,
                email: user.email,
                contact: user.phone,
            },
            theme_color: self.theme_color.clone(),
        };

        // Suspends until the member completes or dismisses the vendor UI.
        let receipt = match self.provider.open(options).await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::warn!(error = %e, "checkout did not complete");
                return PaymentOutcome {
                    success: false,
                    message: "Payment cancelled or failed".to_string(),
                    phase: PaymentPhase::CheckoutCancelled,
                    order_id: Some(order.order_id),
                    payment_id: None,
                    completed_at: Utc::now(),
                };
            }
        };

        let vendor_payment_id = receipt.razorpay_payment_id.clone();
        match self.api.verify_payment(receipt).await {
            Ok(verification) if verification.success => PaymentOutcome {
                success: true,
                message: verification
                    .message
                    .unwrap_or_else(|| "Payment successful".to_string()),
                phase: PaymentPhase::VerifiedSuccess,
                order_id: Some(order.order_id),
                payment_id: verification.payment_id.or(Some(vendor_payment_id)),
                completed_at: Utc::now(),
            },
            Ok(verification) => PaymentOutcome {
                success: false,
                message: verification
                    .message
                    .unwrap_or_else(|| "Payment verification failed".to_string()),
                phase: PaymentPhase::VerifiedFailed,
                order_id: Some(order.order_id),
                payment_id: verification.payment_id,
                completed_at: Utc::now(),
            },
            Err(e) => PaymentOutcome {
                success: false,
                message: e.to_string(),
                phase: PaymentPhase::VerifiedFailed,
                order_id: Some(order.order_id),
                payment_id: None,
                completed_at: Utc::now(),
            },
        }
    }
}

fn new_receipt() -> String {
    format!("rcpt_{}", Uuid::new_v4().simple())
}
