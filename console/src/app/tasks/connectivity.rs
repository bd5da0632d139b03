//! # Connectivity Tasks
//!
//! The one-shot probe counts as a task; the periodic monitor is a detached
//! loop that only emits connection signals.

use async_channel::Sender;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::TaskContext;
use crate::app::events::AppEvent;
use crate::app::state::ConnectionState;
use crate::core::service::ApiService;

pub(crate) fn probe(ctx: &TaskContext) {
    ctx.spawn("probe", |api| async move { AppEvent::ProbeFinished(api.probe().await) });
}

/// Probe every `period` until the channel closes. The first probe fires after
/// one full period.
pub(crate) fn spawn_monitor(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let state = if api.probe().await {
                ConnectionState::Connected
            } else {
                ConnectionState::Disconnected
            };
            if event_tx.send(AppEvent::ConnectionChanged(state)).await.is_err() {
                tracing::debug!("Event channel closed - stopping connectivity monitor");
                break;
            }
        }
    })
}
