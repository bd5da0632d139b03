//! # Deal Browser Handlers

use shared::{is_known_category, DEAL_CATEGORIES};

use crate::app::state::Screen;
use crate::app::tasks::{self, TaskContext};
use crate::core::error::{AppError, Result};

/// Set or clear the free-text search; reloads while on the Deals screen.
pub(crate) fn handle_set_search(ctx: &TaskContext, text: Option<String>) {
    let text = text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
    apply(ctx, |query| query.search = text);
}

/// Set or clear the category filter; unknown categories are rejected.
pub(crate) fn handle_set_category(ctx: &TaskContext, category: Option<String>) -> Result<()> {
    let category = category
        .map(|c| c.trim().to_ascii_lowercase())
        .filter(|c| !c.is_empty());

    if let Some(name) = category.as_deref() {
        if !is_known_category(name) {
            return Err(AppError::Validation(format!(
                "Unknown category '{}': expected one of {}",
                name,
                DEAL_CATEGORIES.join(", ")
            )));
        }
    }

    apply(ctx, |query| query.category = category);
    Ok(())
}

fn apply<F>(ctx: &TaskContext, update: F)
where
    F: FnOnce(&mut crate::services::api::DealQuery),
{
    let reload = {
        let mut state = ctx.state.write();
        update(&mut state.deals.query);
        state.needs_repaint = true;
        state.current_screen == Screen::Deals
    };

    if reload {
        tasks::deals::load_deals(ctx);
    }
}
