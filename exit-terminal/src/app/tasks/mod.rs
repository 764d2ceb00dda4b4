//! # Async Background Tasks
//!
//! Tasks spawned onto the global Tokio runtime. Results come back to the
//! main thread through the `AppEvent` channel; tasks never touch the UI.

pub(crate) mod assets;
pub(crate) mod module;
