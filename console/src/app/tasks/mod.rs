//! # Async Tasks
//!
//! Each backend interaction runs as a spawned task that sends exactly one
//! result [`AppEvent`] back to the controller.

pub mod auth;
pub mod connectivity;
pub mod dashboard;
pub mod deals;
pub mod review;
pub mod sources;

use async_channel::Sender;
use parking_lot::RwLock;
use std::future::Future;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::services::session::Session;

/// Handles a task needs: shared state, the backend, the event channel and
/// the session.
#[derive(Clone)]
pub(crate) struct TaskContext {
    pub state: Arc<RwLock<AppState>>,
    pub api: Arc<dyn ApiService>,
    pub event_tx: Sender<AppEvent>,
    pub session: Session,
    pub pending_batch: usize,
}

impl TaskContext {
    /// Spawn `task` and count it as outstanding until its result event is
    /// applied.
    pub(crate) fn spawn<F, Fut>(&self, name: &'static str, task: F)
    where
        F: FnOnce(Arc<dyn ApiService>) -> Fut,
        Fut: Future<Output = AppEvent> + Send + 'static,
    {
        self.state.write().pending_tasks += 1;

        let future = task(Arc::clone(&self.api));
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = future.await;
            if tx.send(event).await.is_err() {
                tracing::debug!(task = name, "Event channel closed - dropping task result");
            }
        });
        tracing::debug!(task = name, "Task spawned");
    }
}
