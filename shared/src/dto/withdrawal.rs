use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Withdrawal request submitted by a member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewWithdrawal {
    /// Amount in rupees.
    pub amount: f64,
    /// Payout method identifier, e.g. `"bank_transfer"` or `"upi"`.
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A withdrawal as it appears in history.
///
/// The status string is server-owned; the client mirrors it without
/// modeling transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalRecord {
    pub id: String,
    pub amount: f64,
    pub method: String,
    pub status: String,
    #[serde(rename = "requestedAt", skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<DateTime<Utc>>,
    #[serde(rename = "processedAt", skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}

/// Withdrawal history response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalHistory {
    pub withdrawals: Vec<WithdrawalRecord>,
}
