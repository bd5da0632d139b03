//! # Deal Listing Task

use super::TaskContext;
use crate::app::events::AppEvent;

/// Load deals using the query currently held in state.
pub(crate) fn load_deals(ctx: &TaskContext) {
    let query = ctx.state.read().deals.query.clone();
    ctx.spawn("list_deals", move |api| async move {
        AppEvent::DealsLoaded(api.list_deals(query).await)
    });
}
