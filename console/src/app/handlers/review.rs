//! # Review Handlers
//!
//! Rate and skip transitions over the review queue.

use shared::QualityScore;

use crate::app::tasks::{self, TaskContext};
use crate::core::error::{AppError, Result};

/// Rate `deal_id`, which must be the deal under the cursor.
pub(crate) fn handle_rate(
    ctx: &TaskContext,
    deal_id: i64,
    quality: QualityScore,
    reason: String,
) -> Result<()> {
    {
        let state = ctx.state.read();
        match state.review.queue.current() {
            None => return Err(AppError::State("No deal to rate".to_string())),
            Some(current) if current.id != deal_id => {
                return Err(AppError::Validation(format!(
                    "Deal {} is not the deal under review (current: {})",
                    deal_id, current.id
                )));
            }
            Some(_) => {}
        }
    }

    tasks::review::submit_rating(ctx, deal_id, quality, reason);
    Ok(())
}

/// Rate whatever deal is under the cursor.
pub(crate) fn handle_rate_current(ctx: &TaskContext, quality: QualityScore, reason: String) -> Result<()> {
    let deal_id = ctx
        .state
        .read()
        .review
        .queue
        .current()
        .map(|deal| deal.id)
        .ok_or_else(|| AppError::State("No deal to rate".to_string()))?;

    handle_rate(ctx, deal_id, quality, reason)
}

/// Move past the current deal without a backend call; refill when that
/// exhausts the queue.
pub(crate) fn handle_skip(ctx: &TaskContext) -> Result<()> {
    let exhausted = {
        let mut state = ctx.state.write();
        let skipped = state
            .review
            .queue
            .current()
            .map(|deal| deal.id)
            .ok_or_else(|| AppError::State("No deal to skip".to_string()))?;

        state.review.queue.advance();
        state.needs_repaint = true;
        tracing::debug!(deal_id = skipped, cursor = state.review.queue.cursor(), "Deal skipped");
        state.review.queue.is_exhausted()
    };

    if exhausted {
        tasks::review::refill(ctx);
    }
    Ok(())
}
