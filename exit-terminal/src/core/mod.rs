//! # Core Types
//!
//! Cross-cutting types used throughout the application:
//!
//! - [`error`]: consolidated [`AppError`](error::AppError) type
//! - [`service`]: the [`SafeService`](service::SafeService) trait behind
//!   which all network access sits
//! - [`store`]: the [`SelectionPort`](store::SelectionPort) state port for
//!   the token-selection list

pub mod error;
pub mod service;
pub mod store;

pub use error::{AppError, Result};
pub use service::SafeService;
pub use store::SelectionPort;
