//! # Earnings Data Transfer Objects
//!
//! Commission aggregates reported by the backend. Two generations of
//! fields coexist on the wire: the split `pendingCommissions` /
//! `totalCommissions` pair, and the legacy `walletCommissionTotal`
//! aggregate older accounts still carry. The display rule that arbitrates
//! between them lives in [`crate::utils::display_commission_total`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated commission totals for the logged-in member
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EarningsSnapshot {
    /// Commissions awaiting confirmation.
    #[serde(rename = "pendingCommissions", default)]
    pub pending_commissions: f64,
    /// Confirmed commissions credited to the wallet.
    #[serde(rename = "totalCommissions", default)]
    pub total_commissions: f64,
    /// Legacy single aggregate, kept for accounts created before the
    /// pending/confirmed split.
    #[serde(rename = "walletCommissionTotal", default)]
    pub wallet_commission_total: f64,
    #[serde(rename = "lifetimeEarnings", default)]
    pub lifetime_earnings: f64,
}

/// Per-referral commission line shown under the earnings summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommissionEntry {
    pub id: String,
    #[serde(rename = "fromMember")]
    pub from_member: String,
    pub amount: f64,
    /// Server-reported status string, mirrored as-is.
    pub status: String,
    #[serde(rename = "earnedAt", skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Utc>>,
}

/// Earnings screen payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EarningsData {
    #[serde(flatten)]
    pub snapshot: EarningsSnapshot,
    #[serde(default)]
    pub entries: Vec<CommissionEntry>,
}
