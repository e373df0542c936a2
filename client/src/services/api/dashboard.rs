//! # Dashboard Endpoints
//!
//! Dashboard snapshot, earnings and team data. All figures are
//! server-computed; the client renders them as-is.

use super::client::ApiClient;
use crate::core::error::ApiResult;
use shared::dto::dashboard::{DashboardData, TeamData};
use shared::dto::earnings::EarningsData;

/// Fetch the member dashboard snapshot.
#[tracing::instrument(skip(client))]
pub async fn get_dashboard(client: &ApiClient) -> ApiResult<DashboardData> {
    client.get("/api/dashboard").await
}

/// Fetch commission totals and per-referral entries.
pub async fn get_earnings(client: &ApiClient) -> ApiResult<EarningsData> {
    client.get("/api/earnings").await
}

/// Fetch the downline team listing.
pub async fn get_team(client: &ApiClient) -> ApiResult<TeamData> {
    client.get("/api/team").await
}
