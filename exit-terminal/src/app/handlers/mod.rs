//! # User Action Handlers
//!
//! Handlers for user actions, grouped by concern. Each handler takes the
//! shared state (and, where it spawns work, the event sender) so it can be
//! driven from the main `App` or from tests.

pub(crate) mod attach;
pub(crate) mod claim;
pub(crate) mod navigation;
pub(crate) mod selection;
