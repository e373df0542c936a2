//! # Data Refresh Handlers
//!
//! Background fetches for the dashboard and the list screens. The
//! dashboard refresh fans out two independent requests concurrently; if
//! either fails the whole refresh is reported as one failure.

use crate::app::events::AppEvent;
use crate::core::service::ApiService;
use async_channel::Sender;
use std::sync::Arc;

/// Refresh the dashboard: snapshot and profile are fetched in parallel.
pub(crate) fn refresh_dashboard(event_tx: Sender<AppEvent>, api: Arc<dyn ApiService>) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let _ = tx
            .send(AppEvent::Loading("Loading dashboard...".to_string()))
            .await;

        let (dashboard, profile) = tokio::join!(api.get_dashboard(), api.get_profile());
        let result = match (dashboard, profile) {
            (Ok(dashboard), Ok(profile)) => Ok((dashboard, profile)),
            (Err(e), _) => Err(e),
            (_, Err(e)) => Err(e),
        };

        let _ = tx.send(AppEvent::DashboardLoaded(result)).await;
    });
}

pub(crate) fn load_earnings(event_tx: Sender<AppEvent>, api: Arc<dyn ApiService>) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.get_earnings().await;
        let _ = tx.send(AppEvent::EarningsLoaded(result)).await;
    });
}

pub(crate) fn load_team(event_tx: Sender<AppEvent>, api: Arc<dyn ApiService>) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.get_team().await;
        let _ = tx.send(AppEvent::TeamLoaded(result)).await;
    });
}

pub(crate) fn load_products(event_tx: Sender<AppEvent>, api: Arc<dyn ApiService>) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.get_products().await;
        let _ = tx.send(AppEvent::ProductsLoaded(result)).await;
    });
}

pub(crate) fn load_withdrawals(event_tx: Sender<AppEvent>, api: Arc<dyn ApiService>) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.get_withdrawals().await;
        let _ = tx.send(AppEvent::WithdrawalsLoaded(result)).await;
    });
}

pub(crate) fn load_rewards(event_tx: Sender<AppEvent>, api: Arc<dyn ApiService>) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.get_rewards().await;
        let _ = tx.send(AppEvent::RewardsLoaded(result)).await;
    });
}
