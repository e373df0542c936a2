//! End-to-end drive of the headless app layer: login, activation payment,
//! dashboard refresh.

mod support;

use client::app::{App, AppState, Screen};
use client::core::service::ApiService;
use client::services::api::ApiClient;
use client::session::Session;
use std::sync::Arc;
use std::time::Duration;

/// Pump events until the predicate holds or a timeout elapses.
async fn wait_until(app: &App, what: &str, pred: impl Fn(&AppState) -> bool) {
    for _ in 0..100 {
        app.on_tick();
        if pred(&app.state.read()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("timed out waiting for: {what}");
}

#[tokio::test]
async fn test_login_activation_and_dashboard_via_app() {
    let base = support::spawn_stub().await;
    let session = Session::in_memory();
    let api: Arc<dyn ApiService> =
        Arc::new(ApiClient::with_base_url(base.as_str(), session.clone()));
    let app = App::with_services(
        &support::test_config(&base),
        session,
        api,
        Arc::new(support::CompletingCheckout),
    );

    // Fresh session starts on the landing screen.
    assert_eq!(app.state.read().current_screen, Screen::Landing);

    // The stub reports the member as not yet activated, so login lands on
    // the activation screen.
    app.handle_login_click("asha@example.com".to_string(), "secret1".to_string());
    wait_until(&app, "login to land on activation", |s| {
        s.current_screen == Screen::Activation
    })
    .await;
    assert!(app.session.is_authenticated());
    assert!(!app.session.payment_verified());

    // Activation payment runs order -> checkout -> verify and unlocks the
    // dashboard.
    app.start_activation();
    wait_until(&app, "activation to unlock dashboard", |s| {
        s.current_screen == Screen::Dashboard
    })
    .await;
    assert!(app.session.payment_verified());

    // Dashboard refresh fans out snapshot + profile.
    app.refresh_dashboard();
    wait_until(&app, "dashboard snapshot", |s| s.dashboard.is_some()).await;

    let state = app.state.read();
    let dashboard = state.dashboard.as_ref().unwrap();
    assert_eq!(dashboard.team.total, 9);
    assert_eq!(dashboard.referrals.total_referrals, 4);
    assert_eq!(state.profile.as_ref().unwrap().email, "asha@example.com");
}

#[tokio::test]
async fn test_login_failure_sets_form_error() {
    let base = support::spawn_stub().await;
    let session = Session::in_memory();
    let api: Arc<dyn ApiService> =
        Arc::new(ApiClient::with_base_url(base.as_str(), session.clone()));
    let app = App::with_services(
        &support::test_config(&base),
        session,
        api,
        Arc::new(support::CompletingCheckout),
    );

    app.handle_login_click("asha@example.com".to_string(), "wrong".to_string());
    wait_until(&app, "login error to surface", |s| {
        matches!(
            &s.auth,
            client::app::AuthState::Login { error: Some(_), .. }
        )
    })
    .await;

    assert!(!app.session.is_authenticated());
    let state = app.state.read();
    match &state.auth {
        client::app::AuthState::Login { error, .. } => {
            assert_eq!(error.as_deref(), Some("Invalid credentials"));
        }
        other => panic!("expected login form, got {other:?}"),
    }
}
