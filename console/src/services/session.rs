//! # Session
//!
//! The bearer token shared by the controller (writer) and the gateway (reader).

use parking_lot::RwLock;
use std::sync::Arc;

/// Cheaply cloneable handle to the current bearer token.
///
/// Written at login and logout only. A 401 from the backend does not clear it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token.filter(|t| !t.is_empty()))),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    pub fn set_token(&self, token: String) {
        *self.token.write() = Some(token);
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }
}
