//! # Action Handlers
//!
//! Operator actions, organized by domain. Each validates against current
//! state, updates it, and hands any backend work to [`crate::app::tasks`].

pub mod auth;
pub mod deals;
pub mod navigation;
pub mod review;
