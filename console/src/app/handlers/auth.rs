//! # Authentication Handlers
//!
//! Login submission and logout.

use crate::app::state::{Notification, Screen, LOGIN_KEY};
use crate::app::tasks::{self, TaskContext};
use crate::core::service::CredentialStore;

use super::navigation::handle_navigate;

/// Handle login form submission.
///
/// Empty fields are rejected locally; a second submit while one is in flight
/// is ignored.
pub(crate) fn handle_login(ctx: &TaskContext, username: String, password: String) {
    {
        let mut state = ctx.state.write();
        state.needs_repaint = true;

        if username.is_empty() || password.is_empty() {
            state.login.message = Some("Username and password required".to_string());
            return;
        }

        if !state.begin(LOGIN_KEY) {
            tracing::debug!("Login already in flight - ignoring submit");
            return;
        }

        state.login.username = username.clone();
        state.login.in_flight = true;
        state.login.message = Some("Logging in...".to_string());
    }

    tasks::auth::login(ctx, username, password);
}

/// Drop the session, forget the persisted token and return to `Login`.
pub(crate) fn handle_logout(ctx: &TaskContext, credentials: &dyn CredentialStore) {
    if let Err(e) = credentials.clear() {
        tracing::warn!(error = %e, "Failed to clear persisted token");
        ctx.state
            .write()
            .notify(Notification::warning(format!("Could not clear saved session: {}", e)));
    }
    ctx.session.clear();

    {
        let mut state = ctx.state.write();
        state.operator = None;
        state.login.message = None;
        state.clear_screen_data();
    }

    tracing::info!("Logged out");
    handle_navigate(ctx, Screen::Login);
}
