//! Login, logout, navigation guard and 401 handling.

use super::*;
use crate::app::{Screen, CANNOT_CONNECT_MESSAGE, RESTORED_OPERATOR, WELCOME_MESSAGE};
use crate::app::state::NotificationLevel;

#[tokio::test]
async fn test_initial_screen_depends_on_persisted_token() {
    let fresh = harness(None);
    assert_eq!(fresh.app.current_screen(), Screen::Login);
    assert!(fresh.app.state.read().operator.is_none());

    let restored = harness(Some("abc"));
    assert_eq!(restored.app.current_screen(), Screen::Dashboard);
    assert_eq!(restored.app.state.read().operator.as_deref(), Some(RESTORED_OPERATOR));
    assert!(restored.app.frame().operator.is_some());
}

#[tokio::test]
async fn test_start_with_token_probes_and_loads_dashboard() {
    let Harness { mut app, api, .. } = logged_in();

    app.start();
    app.settle().await;

    assert_eq!(api.count("probe"), 1);
    assert_eq!(api.count("dashboard_stats"), 1);
    assert_eq!(api.count("sources_status"), 1);
    assert_eq!(app.state.read().dashboard.stats.as_ref().map(|s| s.total_deals), Some(10));
    assert_eq!(app.connection(), ConnectionState::Connected);
}

#[tokio::test]
async fn test_login_success_persists_token_and_opens_dashboard() {
    let Harness { mut app, api, store } = harness(None);

    app.login("admin".to_string(), "admin123".to_string());
    assert_eq!(app.state.read().login.message.as_deref(), Some("Logging in..."));
    app.settle().await;

    assert_eq!(store.load().unwrap().as_deref(), Some("abc"));
    assert_eq!(app.session().token().as_deref(), Some("abc"));
    assert_eq!(app.current_screen(), Screen::Dashboard);
    assert_eq!(app.connection(), ConnectionState::Connected);
    assert_eq!(app.state.read().operator.as_deref(), Some("admin"));
    assert_eq!(api.count("dashboard_stats"), 1);

    let notifications = app.take_notifications();
    assert!(notifications
        .iter()
        .any(|n| n.level == NotificationLevel::Success && n.message == WELCOME_MESSAGE));
}

#[tokio::test]
async fn test_login_with_empty_fields_makes_no_request() {
    let Harness { mut app, api, .. } = harness(None);

    app.login("admin".to_string(), String::new());
    app.settle().await;

    assert_eq!(api.count("login"), 0);
    assert_eq!(
        app.state.read().login.message.as_deref(),
        Some("Username and password required")
    );
}

#[tokio::test]
async fn test_rejected_login_shows_backend_detail() {
    let Harness { mut app, api, store } = harness(None);
    *api.login_outcome.lock() = LoginOutcome::Rejected {
        message: "Incorrect username or password".to_string(),
    };

    app.login("admin".to_string(), "wrong".to_string());
    app.settle().await;

    assert_eq!(app.current_screen(), Screen::Login);
    assert_eq!(
        app.state.read().login.message.as_deref(),
        Some("Incorrect username or password")
    );
    assert!(!app.session().is_authenticated());
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn test_unreachable_login_marks_disconnected() {
    let Harness { mut app, api, .. } = harness(None);
    *api.login_outcome.lock() = LoginOutcome::Unreachable;

    app.login("admin".to_string(), "admin123".to_string());
    app.settle().await;

    assert_eq!(app.current_screen(), Screen::Login);
    assert_eq!(app.state.read().login.message.as_deref(), Some(CANNOT_CONNECT_MESSAGE));
    assert_eq!(app.connection(), ConnectionState::Disconnected);
    assert!(!app.state.read().login.in_flight);
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_dropped() {
    let Harness { mut app, api, .. } = harness(None);

    app.login("admin".to_string(), "admin123".to_string());
    app.login("admin".to_string(), "admin123".to_string());
    app.settle().await;

    assert_eq!(api.count("login"), 1);
}

#[tokio::test]
async fn test_token_save_failure_still_logs_in_with_warning() {
    let (event_tx, event_rx) = unbounded();
    let api = Arc::new(MockApi::new(event_tx.clone()));
    let mut app = App::from_parts(
        api,
        Arc::new(BrokenStore),
        Session::default(),
        event_tx,
        event_rx,
        &ConsoleConfig::default(),
    );

    app.login("admin".to_string(), "admin123".to_string());
    app.settle().await;

    assert_eq!(app.current_screen(), Screen::Dashboard);
    assert!(app.session().is_authenticated());
    assert!(app
        .take_notifications()
        .iter()
        .any(|n| n.level == NotificationLevel::Warning));
}

#[tokio::test]
async fn test_navigation_without_token_is_forced_to_login() {
    let Harness { mut app, api, .. } = harness(None);

    for screen in Screen::all() {
        assert_eq!(app.navigate(*screen), Screen::Login);
    }
    app.settle().await;

    assert_eq!(app.current_screen(), Screen::Login);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_unauthorized_from_any_screen_forces_login_and_keeps_token() {
    let cases = [
        (Screen::Dashboard, "dashboard_stats"),
        (Screen::Scrapers, "list_sources"),
        (Screen::Deals, "list_deals"),
        (Screen::Rate, "pending_deals"),
    ];

    for (screen, endpoint) in cases {
        let Harness { mut app, api, store } = logged_in();
        api.fail(endpoint, Failure::Unauthorized);

        app.navigate(screen);
        app.settle().await;

        assert_eq!(app.current_screen(), Screen::Login, "401 on {}", endpoint);
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));
        assert!(app.session().is_authenticated());
        // No toast for an expired session
        assert!(app
            .take_notifications()
            .iter()
            .all(|n| n.level != NotificationLevel::Error));
    }
}

#[tokio::test]
async fn test_logout_clears_session_and_store() {
    let Harness { mut app, api, store } = logged_in();
    api.push_batch(Some(deals(&[1, 2])));
    app.navigate(Screen::Rate);
    app.settle().await;
    assert_eq!(app.state.read().review.queue.len(), 2);

    app.logout();
    app.settle().await;

    assert_eq!(app.current_screen(), Screen::Login);
    assert!(!app.session().is_authenticated());
    assert_eq!(store.load().unwrap(), None);
    assert!(app.state.read().operator.is_none());
    assert!(app.state.read().review.queue.is_empty());
    assert_eq!(app.navigate(Screen::Dashboard), Screen::Login);
}
