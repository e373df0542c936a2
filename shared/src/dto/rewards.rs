use serde::{Deserialize, Serialize};

/// A reward tier a member can unlock through referrals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardTier {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "requiredReferrals", default)]
    pub required_referrals: u32,
    #[serde(default)]
    pub achieved: bool,
}

/// Rewards screen payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardsData {
    pub tiers: Vec<RewardTier>,
}
