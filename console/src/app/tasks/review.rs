//! # Review Queue Tasks
//!
//! Rating stats, queue refill and rating submission.

use shared::QualityScore;

use super::TaskContext;
use crate::app::events::AppEvent;
use crate::app::state::{rate_key, ReviewPhase, REFILL_KEY};

pub(crate) fn load_rating_stats(ctx: &TaskContext) {
    ctx.spawn("rating_stats", |api| async move {
        AppEvent::RatingStatsLoaded(api.rating_stats().await)
    });
}

/// Fetch the next pending batch. A refill already in flight absorbs the call.
pub(crate) fn refill(ctx: &TaskContext) {
    {
        let mut state = ctx.state.write();
        if !state.begin(REFILL_KEY) {
            tracing::debug!("Refill already in flight - ignoring");
            return;
        }
        state.review.phase = ReviewPhase::Loading;
        state.needs_repaint = true;
    }

    let limit = ctx.pending_batch;
    ctx.spawn("refill", move |api| async move {
        AppEvent::PendingLoaded(api.pending_deals(limit).await)
    });
}

/// Submit a rating. Returns false when the same deal is already being rated.
pub(crate) fn submit_rating(ctx: &TaskContext, deal_id: i64, quality: QualityScore, reason: String) -> bool {
    if !ctx.state.write().begin(&rate_key(deal_id)) {
        tracing::debug!(deal_id, "Rating already in flight - ignoring");
        return false;
    }

    tracing::info!(deal_id, quality = %quality, "Submitting rating");
    ctx.spawn("rate_deal", move |api| async move {
        let acknowledgement = api.rate_deal(deal_id, quality, reason).await;
        AppEvent::RateFinished {
            deal_id,
            acknowledgement,
        }
    });
    true
}
