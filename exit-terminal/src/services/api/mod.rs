//! # API Clients
//!
//! HTTP access to the two external services the app relies on: the Safe
//! balance service (REST) and an Ethereum JSON-RPC node. All functions
//! return `Result<_, String>` so tasks can forward failures straight into
//! the event channel.

mod client;
pub mod rpc;
pub mod safe;

pub use client::ApiClient;
