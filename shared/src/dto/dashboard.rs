//! # Dashboard Data Transfer Objects
//!
//! Snapshot data shown on the member dashboard: wallet balance, referral
//! statistics and team composition. All figures are computed server-side;
//! the client only displays them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard snapshot for the logged-in member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    #[serde(rename = "walletBalance", default)]
    pub wallet_balance: f64,
    pub referrals: ReferralStats,
    pub team: TeamCounts,
}

/// Referral attribution statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferralStats {
    #[serde(rename = "referralCode")]
    pub referral_code: String,
    #[serde(rename = "totalReferrals", default)]
    pub total_referrals: u32,
    #[serde(rename = "activeReferrals", default)]
    pub active_referrals: u32,
}

/// Team size counters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamCounts {
    #[serde(default)]
    pub direct: u32,
    #[serde(default)]
    pub total: u32,
}

/// A member of the user's downline team
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Depth in the referral tree relative to the viewing member.
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "joinedAt", skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

/// Team listing response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamData {
    pub members: Vec<TeamMember>,
    pub counts: TeamCounts,
}
