//! # Withdrawal Handlers

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NoticeLevel};
use crate::core::service::ApiService;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::withdrawal::NewWithdrawal;
use std::sync::Arc;

/// Submit a withdrawal request after checking the per-method minimum.
pub(crate) fn handle_withdrawal_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn ApiService>,
    amount: f64,
    method: String,
    description: Option<String>,
) {
    let check = validation::validate_withdrawal_amount(amount, &method);
    if !check.is_valid {
        state
            .write()
            .notify(NoticeLevel::Error, check.error.unwrap_or_default());
        return;
    }

    let request = NewWithdrawal {
        amount,
        method,
        description,
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let _ = tx
            .send(AppEvent::Loading("Submitting withdrawal...".to_string()))
            .await;
        let result = api.request_withdrawal(request).await;
        let _ = tx.send(AppEvent::WithdrawalSubmitted(result)).await;
    });

    state.write().busy = Some("Submitting withdrawal...".to_string());
}
