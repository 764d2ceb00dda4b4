//! # Exit Terminal - Library Root
//!
//! A native desktop front-end for the Exit module of a Safe-style
//! multisignature account: attach an account, inspect its token holdings,
//! select assets, and build a claim proportional to a designated-token
//! redemption.
//!
//! ## Module Structure
//!
//! - **[`app`]**: application orchestrator, state, events, handlers, tasks
//! - **[`claim`]**: pure claim computations (row projection, sorting,
//!   selection, totals, claim rate)
//! - **[`core`]**: error type, service trait, selection state port
//! - **[`services`]**: HTTP/RPC clients, module discovery, exit calldata
//! - **[`ui`]**: egui rendering (screens, widgets, theme)
//! - **[`utils`]**: formatting, address parsing, validation, runtime
//!
//! ## Architecture
//!
//! The main thread runs the egui render loop; network work runs on a
//! global Tokio runtime and reports back through an event channel. State
//! is shared behind `Arc<RwLock<AppState>>` and locks are held briefly.
//!
//! The claim computations in [`claim`] are pure functions over the state
//! snapshot: the same {assets, claim rate, selection, sort} always yields
//! the same rows and totals, which is what makes the per-frame memoization
//! in [`app::App::on_tick`] sound.

pub mod app;
pub mod claim;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{App, AppEvent, AppState, Screen};
pub use crate::core::{AppError, Result};
