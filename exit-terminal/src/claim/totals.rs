//! # Totals Aggregation
//!
//! The footer sums over the currently selected rows. Gas accumulates in
//! wei (integer); the fiat columns accumulate in `f64`, which is display
//! math, not settlement math. Addresses that no longer resolve to an asset
//! are silently skipped.

use ethers_core::types::U256;
use shared::dto::safe::{SafeAssets, TokenAsset};

use super::rows::{
    fiat_amount, format_row_amount, format_row_fiat_amount, parse_amount, RowAmount,
    GAS_DISPLAY_DECIMALS,
};

/// Aggregate footer values for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    /// Number of selected tokens that still resolve to an asset.
    pub count: usize,
    pub gas: RowAmount,
    pub holding: RowAmount,
    pub claimable: RowAmount,
}

impl Totals {
    pub fn empty() -> Self {
        Self {
            count: 0,
            gas: RowAmount::zero(),
            holding: RowAmount::zero(),
            claimable: RowAmount::zero(),
        }
    }
}

/// Recompute the totals from scratch.
///
/// Pure in {assets, selection, claim rate}; no hidden accumulation
/// survives between calls.
pub fn aggregate(assets: &SafeAssets, selected: &[String], claim_rate: f64) -> Totals {
    let native = assets.native_token();

    let tokens: Vec<&TokenAsset> = selected
        .iter()
        .filter_map(|address| assets.find_by_address(address))
        .collect();

    let gas_total = tokens.iter().fold(U256::zero(), |acc, token| {
        acc.saturating_add(parse_amount(&token.gas).unwrap_or_default())
    });
    let holding_total: f64 = tokens.iter().map(|token| fiat_amount(token, None)).sum();
    let claimable_total: f64 = tokens
        .iter()
        .map(|token| claim_rate * fiat_amount(token, None))
        .sum();

    Totals {
        count: tokens.len(),
        gas: format_row_amount(native, Some(gas_total), Some(GAS_DISPLAY_DECIMALS), false),
        holding: format_row_fiat_amount(native, holding_total),
        claimable: format_row_fiat_amount(native, claimable_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::rows::tests::sample_assets;

    const ETH: &str = "0x0000000000000000000000000000000000000000";
    const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
    const USDT: &str = "0xdac17f958d2ee523a2206206994597c13d831ec7";

    fn selection(addresses: &[&str]) -> Vec<String> {
        addresses.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn empty_selection_sums_to_zero() {
        let totals = aggregate(&sample_assets(), &[], 0.1);
        assert_eq!(totals.count, 0);
        assert_eq!(totals.holding, RowAmount::zero());
        assert_eq!(totals.claimable, RowAmount::zero());
    }

    #[test]
    fn sums_selected_fiat_balances() {
        let assets = sample_assets();
        let totals = aggregate(&assets, &selection(&[DAI, USDT]), 0.1);
        assert_eq!(totals.count, 2);
        // 500 + 250 USD of holdings, at 1800 USD per ETH
        assert_eq!(totals.holding.fiat, "750.00");
        assert_eq!(totals.holding.value, "0.4167");
        // claimable = 10% of the holdings
        assert_eq!(totals.claimable.fiat, "75.00");
        assert!((totals.claimable.fiat_raw - 75.0).abs() < 1e-9);
    }

    #[test]
    fn gas_accumulates_in_wei() {
        let assets = sample_assets();
        // each fixture asset carries 0.002 ETH of gas = 2,000,000 gwei
        let totals = aggregate(&assets, &selection(&[DAI, USDT]), 0.1);
        assert_eq!(totals.gas.value, "4,000,000");
        assert_eq!(totals.gas.fiat, "7.20");
    }

    #[test]
    fn stale_addresses_are_silently_dropped() {
        let assets = sample_assets();
        let selected = selection(&[DAI, "0x000000000000000000000000000000000000dead"]);
        let totals = aggregate(&assets, &selected, 1.0);
        assert_eq!(totals.count, 1);
        assert_eq!(totals.holding.fiat, "500.00");
        assert_eq!(totals.claimable.fiat, "500.00");
    }

    #[test]
    fn totals_are_pure_in_their_inputs() {
        let assets = sample_assets();
        let selected = selection(&[ETH, DAI]);
        let first = aggregate(&assets, &selected, 0.25);
        let second = aggregate(&assets, &selected, 0.25);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_rate_zeroes_claimable_but_not_holdings() {
        let assets = sample_assets();
        let totals = aggregate(&assets, &selection(&[DAI]), 0.0);
        assert_eq!(totals.holding.fiat, "500.00");
        assert_eq!(totals.claimable, RowAmount::zero());
    }
}
