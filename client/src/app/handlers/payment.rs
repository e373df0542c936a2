//! # Payment Handlers
//!
//! Kick off checkout flows. The flow itself suspends on the vendor UI, so
//! everything runs in a spawned task and reports back as one
//! [`AppEvent::PaymentFinished`].

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::services::checkout::PaymentFlow;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Start the fixed-amount activation payment.
pub(crate) fn start_activation(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    flow: Arc<PaymentFlow>,
) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let _ = tx
            .send(AppEvent::Loading("Processing payment...".to_string()))
            .await;
        let outcome = flow.activate().await;
        let _ = tx.send(AppEvent::PaymentFinished(outcome)).await;
    });

    state.write().busy = Some("Processing payment...".to_string());
}

/// Start a generic payment for a caller-supplied amount in paise
/// (e.g. a cart checkout).
pub(crate) fn start_payment(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    flow: Arc<PaymentFlow>,
    amount: u64,
    description: String,
) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let _ = tx
            .send(AppEvent::Loading("Processing payment...".to_string()))
            .await;
        let outcome = flow.pay(amount, description).await;
        let _ = tx.send(AppEvent::PaymentFinished(outcome)).await;
    });

    state.write().busy = Some("Processing payment...".to_string());
}
