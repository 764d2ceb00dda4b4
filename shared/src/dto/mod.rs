//! # Data Transfer Objects (DTOs)
//!
//! Wire types shared between the desktop application and the external
//! services it talks to.
//!
//! ## Module Organization
//!
//! - [`safe`] - Safe balance service payloads (token holdings and fiat values)
//!
//! ## Serialization Format
//!
//! The Safe balance service speaks camelCase JSON, so these DTOs use
//! `#[serde(rename_all = "camelCase")]` rather than the default snake_case.
//! Raw token amounts cross the wire as decimal strings and are only parsed
//! into 256-bit integers at the point of use.

pub mod safe;

pub use safe::*;
