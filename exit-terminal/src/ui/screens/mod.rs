//! # Screen Rendering
//!
//! One module per screen; each exposes a `render` function taking the
//! current state snapshot and the app for dispatching actions.

pub mod attach;
pub mod dashboard;
