//! # Source and Scrape Tasks

use super::TaskContext;
use crate::app::events::AppEvent;
use crate::app::state::{scrape_key, ScrapePanel};

pub(crate) fn load_sources(ctx: &TaskContext) {
    ctx.spawn("list_sources", |api| async move {
        AppEvent::SourcesLoaded(api.list_sources().await)
    });
}

/// Start a scrape run for one source.
///
/// Returns false when a run for the same source is already outstanding.
pub(crate) fn run_scrape(ctx: &TaskContext, source_id: i64) -> bool {
    {
        let mut state = ctx.state.write();
        if !state.begin(&scrape_key(source_id)) {
            tracing::debug!(source_id, "Scrape already in flight - ignoring trigger");
            return false;
        }
        let name = state.scrapers.source_name(source_id);
        state.scrapers.panel = ScrapePanel::Loading(format!("Scraping {}...", name));
        state.needs_repaint = true;
    }

    tracing::info!(source_id, "Starting scrape run");
    ctx.spawn("run_scrape", move |api| async move {
        let result = api.run_scrape(source_id).await;
        AppEvent::ScrapeFinished { source_id, result }
    });
    true
}
