//! # Claim Computation Core
//!
//! Pure computations behind the assets table: projecting token holdings
//! into display rows, ordering them, tracking the selection, and summing
//! the totals footer. Everything here is a total function over its inputs;
//! network access and state management stay outside.
//!
//! ## Module Organization
//!
//! - [`rows`]: balance list -> display rows, with the proportional-claim
//!   arithmetic in 256-bit fixed point
//! - [`sort`]: stable ordering by claimable fiat value
//! - [`selection`]: toggle and select-all over the address list
//! - [`totals`]: fiat aggregation over the selected rows
//! - [`rate`]: claim-rate derivation and fixed-point conversion
//!
//! ## Data Flow
//!
//! ```text
//! SafeAssets ──project_rows──▶ Vec<RowItem> ──stable_sort──▶ render
//!      │                                                       │ click
//!      └──────────aggregate◀──selection (via SelectionPort)◀───┘
//! ```

pub mod rate;
pub mod rows;
pub mod selection;
pub mod sort;
pub mod totals;

pub use rate::{claim_rate, claim_rate_fixed, parse_claim_amount};
pub use rows::{claimable_amount, project_rows, RowAmount, RowItem};
pub use selection::{select_all, toggle};
pub use sort::{stable_sort, SortOrder};
pub use totals::{aggregate, Totals};
