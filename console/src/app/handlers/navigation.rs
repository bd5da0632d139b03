//! # Navigation Handlers
//!
//! Screen transitions with the authentication guard and the per-screen
//! loads that run on entry.

use crate::app::state::Screen;
use crate::app::tasks::{self, TaskContext};

/// Activate `target`, or `Login` when it needs a token and none is held.
///
/// Returns the screen actually activated.
pub(crate) fn handle_navigate(ctx: &TaskContext, target: Screen) -> Screen {
    let screen = if target.requires_auth() && !ctx.session.is_authenticated() {
        tracing::info!(requested = target.name(), "No session token - redirecting to login");
        Screen::Login
    } else {
        target
    };

    {
        let mut state = ctx.state.write();
        state.current_screen = screen;
        state.needs_repaint = true;
    }
    tracing::info!(screen = screen.name(), "Screen activated");

    match screen {
        Screen::Login => {}
        Screen::Dashboard => tasks::dashboard::load_dashboard(ctx),
        Screen::Scrapers => tasks::sources::load_sources(ctx),
        Screen::Deals => tasks::deals::load_deals(ctx),
        Screen::Rate => {
            // Both review loads belong to entering this screen and nowhere else
            tasks::review::load_rating_stats(ctx);
            tasks::review::refill(ctx);
        }
    }

    screen
}
