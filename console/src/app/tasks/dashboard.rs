//! # Dashboard Tasks

use super::TaskContext;
use crate::app::events::AppEvent;

/// Fetch the stats cards and the source status table as two independent calls.
pub(crate) fn load_dashboard(ctx: &TaskContext) {
    ctx.spawn("dashboard_stats", |api| async move {
        AppEvent::DashboardStatsLoaded(api.dashboard_stats().await)
    });
    ctx.spawn("sources_status", |api| async move {
        AppEvent::SourcesStatusLoaded(api.sources_status().await)
    });
}
