//! # Selection State Port
//!
//! The token-selection list lives in the global app state so the table
//! body, the select-all header, and the totals footer stay consistent.
//! Selection logic goes through this port rather than touching
//! [`AppState`](crate::app::AppState) directly, keeping it testable
//! without the UI stack.

/// Read and replace the ordered list of selected token addresses.
pub trait SelectionPort {
    /// Currently selected token addresses, in selection order.
    fn selected_tokens(&self) -> &[String];

    /// Replace the whole selection. Every mutation is a full replacement;
    /// the port holds no partial-update operations.
    fn replace_selection(&mut self, selection: Vec<String>);
}
