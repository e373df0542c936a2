//! # Catalog Endpoints
//!
//! Product catalog and reward tiers.

use super::client::ApiClient;
use crate::core::error::ApiResult;
use shared::dto::catalog::{Product, ProductList};
use shared::dto::rewards::{RewardTier, RewardsData};

/// Fetch the product catalog.
pub async fn get_products(client: &ApiClient) -> ApiResult<Vec<Product>> {
    client
        .get::<ProductList>("/api/products")
        .await
        .map(|list| list.products)
}

/// Fetch reward tiers for the logged-in member.
pub async fn get_rewards(client: &ApiClient) -> ApiResult<Vec<RewardTier>> {
    client
        .get::<RewardsData>("/api/rewards")
        .await
        .map(|data| data.tiers)
}
