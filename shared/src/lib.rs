//! # Shared Types Library
//!
//! Wire DTOs and small utilities shared across the Exit Terminal workspace.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for external service payloads
//!   - **[`dto::safe`]**: Safe balance service types (token holdings, fiat values)
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Shorten addresses for display
//!   - **[`utils::truncate_address`]**: Shorten with default prefix/suffix
//!
//! ## Wire Format
//!
//! The Safe balance service speaks camelCase JSON; DTOs carry the serde
//! renames so callers can `.json::<SafeAssets>()` a response directly:
//!
//! ```rust,ignore
//! use shared::dto::safe::SafeAssets;
//! use shared::utils::truncate_address;
//!
//! # async fn fetch() -> Result<(), reqwest::Error> {
//! let assets: SafeAssets = reqwest::Client::new()
//!     .get("https://safe-client.safe.global/v1/chains/1/safes/0x.../balances/usd")
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! for item in &assets.items {
//!     println!("{} {}", item.token_info.symbol, truncate_address(&item.token_info.address));
//! }
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
