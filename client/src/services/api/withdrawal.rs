//! # Withdrawal Endpoints
//!
//! Withdrawal submission and history. Status strings in history are
//! server-owned; the client mirrors them without modeling transitions.

use super::client::ApiClient;
use crate::core::error::ApiResult;
use shared::dto::withdrawal::{NewWithdrawal, WithdrawalHistory, WithdrawalRecord};

/// Submit a withdrawal request.
#[tracing::instrument(skip(client, request), fields(amount = request.amount, method = %request.method))]
pub async fn request_withdrawal(
    client: &ApiClient,
    request: NewWithdrawal,
) -> ApiResult<WithdrawalRecord> {
    tracing::info!("Submitting withdrawal request");
    client.post("/api/withdrawals", &request).await
}

/// Fetch withdrawal history for the logged-in member.
pub async fn get_withdrawals(client: &ApiClient) -> ApiResult<Vec<WithdrawalRecord>> {
    client
        .get::<WithdrawalHistory>("/api/withdrawals/history")
        .await
        .map(|history| history.withdrawals)
}
