//! # Row Projection
//!
//! Maps the account's token holdings into display rows for the assets
//! table. Each row shows the token's gas cost, current holding, and the
//! amount claimable at the current claim rate; the designated token being
//! claimed from is excluded.
//!
//! Claimable amounts are computed in integer fixed point: token balances
//! routinely exceed the range where `f64` is exact, so the balance is
//! multiplied by the 18-decimal claim rate through a 512-bit intermediate
//! and floored back down. Fiat values only exist for display and use `f64`.

use ethers_core::types::{U256, U512};
use ethers_core::utils::format_units;
use shared::dto::safe::{SafeAssets, TokenAsset};

use crate::utils::format::{format_balance, format_fiat, format_integer};

/// Decimal places of the fixed-point claim rate.
pub const CLAIM_RATE_DECIMALS: u32 = 18;

/// Gas estimates are carried in wei but displayed in gwei.
pub const GAS_DISPLAY_DECIMALS: u32 = 9;

/// A formatted amount plus its fiat value.
///
/// `fiat_raw` carries the unformatted fiat value so ordering never has to
/// re-parse the display string.
#[derive(Debug, Clone, PartialEq)]
pub struct RowAmount {
    pub value: String,
    pub fiat: String,
    pub fiat_raw: f64,
}

impl RowAmount {
    /// Fallback row used when a token or amount is missing: "0" / "0".
    pub fn zero() -> Self {
        Self {
            value: "0".to_string(),
            fiat: "0".to_string(),
            fiat_raw: 0.0,
        }
    }
}

/// One row of the assets table.
#[derive(Debug, Clone, PartialEq)]
pub struct RowItem {
    pub address: String,
    pub symbol: String,
    pub logo_uri: Option<String>,
    pub gas: RowAmount,
    pub holding: RowAmount,
    pub claimable: RowAmount,
}

/// Parse a raw decimal amount string from the balance service.
pub(crate) fn parse_amount(raw: &str) -> Option<U256> {
    U256::from_dec_str(raw.trim()).ok()
}

/// Fiat value of `amount` units of `token`, or of its whole balance when
/// `amount` is `None`.
pub(crate) fn fiat_amount(token: &TokenAsset, amount: Option<U256>) -> f64 {
    match amount {
        None => token.fiat_balance.parse().unwrap_or(0.0),
        Some(amount) => {
            let decimals = token.token_info.decimals.unwrap_or(CLAIM_RATE_DECIMALS);
            let units = units_f64(amount, decimals);
            let rate: f64 = token.fiat_conversion.parse().unwrap_or(0.0);
            rate * units
        }
    }
}

fn units_f64(amount: U256, decimals: u32) -> f64 {
    format_units(amount, decimals)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0)
}

/// Format an amount of a token as a (value, fiat) pair.
///
/// A missing token or amount yields the zero row rather than an error.
/// `decimals` overrides the display scaling (gas rows pass 9 to render wei
/// as gwei); when absent the token's own decimal count is used. With
/// `show_decimals = false` the value column is rendered as a whole number.
pub fn format_row_amount(
    token: Option<&TokenAsset>,
    amount: Option<U256>,
    decimals: Option<u32>,
    show_decimals: bool,
) -> RowAmount {
    let (token, amount) = match (token, amount) {
        (Some(token), Some(amount)) => (token, amount),
        _ => return RowAmount::zero(),
    };

    let display_decimals = decimals
        .or(token.token_info.decimals)
        .unwrap_or(CLAIM_RATE_DECIMALS);
    let value = units_f64(amount, display_decimals);
    // fiat always uses the token's own decimals, independent of the display scaling
    let fiat = fiat_amount(token, Some(amount));

    RowAmount {
        value: if show_decimals {
            format_balance(value)
        } else {
            format_integer(value)
        },
        fiat: format_fiat(fiat),
        fiat_raw: fiat,
    }
}

/// Re-express an already-fiat total as a (value, fiat) pair denominated in
/// `token` (the reference token for the footer).
pub fn format_row_fiat_amount(token: Option<&TokenAsset>, fiat: f64) -> RowAmount {
    let token = match token {
        Some(token) if fiat != 0.0 => token,
        _ => return RowAmount::zero(),
    };

    let rate: f64 = token.fiat_conversion.parse().unwrap_or(0.0);
    let value = if rate > 0.0 { fiat / rate } else { 0.0 };

    RowAmount {
        value: format_balance(value),
        fiat: format_fiat(fiat),
        fiat_raw: fiat,
    }
}

/// claimable = floor(balance x rate / 10^18), computed without overflow
/// through a 512-bit intermediate.
pub fn claimable_amount(balance: U256, claim_rate: U256) -> U256 {
    let scale = U512::from(10u8).pow(U512::from(CLAIM_RATE_DECIMALS));
    let wide = balance.full_mul(claim_rate) / scale;
    U256::try_from(wide).unwrap_or(U256::MAX)
}

/// Project the holdings snapshot into table rows.
///
/// One row per asset, except the asset matching `excluded_address` (the
/// designated token being claimed from). Gas rows are denominated against
/// the native token.
pub fn project_rows(
    assets: &SafeAssets,
    claim_rate: U256,
    excluded_address: Option<&str>,
) -> Vec<RowItem> {
    let native = assets.native_token();

    assets
        .items
        .iter()
        .filter(|asset| match excluded_address {
            Some(excluded) => !asset.token_info.address.eq_ignore_ascii_case(excluded),
            None => true,
        })
        .map(|asset| {
            let balance = parse_amount(&asset.balance);
            let claimable = balance.map(|balance| claimable_amount(balance, claim_rate));
            RowItem {
                address: asset.token_info.address.clone(),
                symbol: asset.token_info.symbol.clone(),
                logo_uri: asset.token_info.logo_uri.clone(),
                gas: format_row_amount(
                    native,
                    parse_amount(&asset.gas),
                    Some(GAS_DISPLAY_DECIMALS),
                    false,
                ),
                holding: format_row_amount(Some(asset), balance, None, true),
                claimable: format_row_amount(Some(asset), claimable, None, true),
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use shared::dto::safe::{TokenInfo, TokenType};

    pub(crate) fn asset(
        token_type: TokenType,
        address: &str,
        symbol: &str,
        decimals: u32,
        balance: &str,
        fiat_conversion: &str,
        fiat_balance: &str,
    ) -> TokenAsset {
        TokenAsset {
            token_info: TokenInfo {
                token_type,
                address: address.to_string(),
                decimals: Some(decimals),
                symbol: symbol.to_string(),
                name: symbol.to_string(),
                logo_uri: None,
            },
            balance: balance.to_string(),
            fiat_conversion: fiat_conversion.to_string(),
            fiat_balance: fiat_balance.to_string(),
            gas: "2000000000000000".to_string(), // 0.002 ETH
        }
    }

    pub(crate) fn sample_assets() -> SafeAssets {
        SafeAssets {
            fiat_total: "4100.0".to_string(),
            items: vec![
                asset(
                    TokenType::NativeToken,
                    "0x0000000000000000000000000000000000000000",
                    "ETH",
                    18,
                    "2000000000000000000", // 2 ETH
                    "1800.0",
                    "3600.0",
                ),
                asset(
                    TokenType::Erc20,
                    "0x6b175474e89094c44da98b954eedeac495271d0f",
                    "DAI",
                    18,
                    "500000000000000000000", // 500 DAI
                    "1.0",
                    "500.0",
                ),
                asset(
                    TokenType::Erc20,
                    "0xdac17f958d2ee523a2206206994597c13d831ec7",
                    "USDT",
                    6,
                    "250000000", // 250 USDT
                    "1.0",
                    "250.0",
                ),
            ],
        }
    }

    fn rate(percent_tenths: u64) -> U256 {
        // e.g. 1 -> 0.1 as fixed point
        U256::from(percent_tenths) * U256::from(10u64).pow(U256::from(17u64))
    }

    #[test]
    fn excluded_token_never_projected() {
        let assets = sample_assets();
        let excluded = "0x6B175474E89094C44Da98b954EedeAC495271d0F"; // DAI, checksummed
        let rows = project_rows(&assets, rate(1), Some(excluded));
        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .all(|row| !row.address.eq_ignore_ascii_case(excluded)));
    }

    #[test]
    fn no_exclusion_projects_every_asset() {
        let assets = sample_assets();
        let rows = project_rows(&assets, rate(1), None);
        assert_eq!(rows.len(), assets.items.len());
    }

    #[test]
    fn claimable_follows_spec_example() {
        // balance = 1000 whole tokens at 18 decimals, rate = 0.1
        let balance = U256::from(1000u64) * U256::from(10u64).pow(U256::from(18u64));
        let claimable = claimable_amount(balance, rate(1));
        let expected = U256::from(100u64) * U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(claimable, expected);
    }

    #[test]
    fn claimable_is_monotonic_in_rate() {
        let balance = U256::from_dec_str("123456789012345678901234567").unwrap();
        let mut previous = U256::zero();
        for tenths in 0..=10 {
            let claimable = claimable_amount(balance, rate(tenths));
            assert!(claimable >= previous);
            previous = claimable;
        }
        // full rate claims the entire balance
        assert_eq!(previous, balance);
    }

    #[test]
    fn claimable_survives_large_balances() {
        // larger than any f64 can hold exactly
        let balance = U256::from_dec_str("115792089237316195423570985008687907853269")
            .unwrap();
        let claimable = claimable_amount(balance, rate(10));
        assert_eq!(claimable, balance);
    }

    #[test]
    fn row_formatting_matches_balance_formatter() {
        let assets = sample_assets();
        let rows = project_rows(&assets, rate(1), None);
        let dai = rows
            .iter()
            .find(|row| row.symbol == "DAI")
            .expect("DAI row");
        assert_eq!(dai.holding.value, "500");
        assert_eq!(dai.holding.fiat, "500.00");
        assert_eq!(dai.claimable.value, "50");
        assert_eq!(dai.claimable.fiat, "50.00");
        assert!((dai.claimable.fiat_raw - 50.0).abs() < 1e-9);
    }

    #[test]
    fn gas_rows_render_in_gwei_without_decimals() {
        let assets = sample_assets();
        let rows = project_rows(&assets, rate(1), None);
        // 0.002 ETH = 2,000,000 gwei; fiat = 0.002 * 1800 = 3.60
        assert_eq!(rows[0].gas.value, "2,000,000");
        assert_eq!(rows[0].gas.fiat, "3.60");
    }

    #[test]
    fn missing_amounts_yield_zero_rows() {
        let zero = format_row_amount(None, Some(U256::from(1u64)), None, true);
        assert_eq!(zero, RowAmount::zero());

        let assets = sample_assets();
        let zero = format_row_amount(Some(&assets.items[0]), None, None, true);
        assert_eq!(zero, RowAmount::zero());
    }

    #[test]
    fn unparseable_balance_yields_zero_row() {
        let mut assets = sample_assets();
        assets.items[1].balance = "not-a-number".to_string();
        let rows = project_rows(&assets, rate(1), None);
        let dai = rows.iter().find(|row| row.symbol == "DAI").unwrap();
        assert_eq!(dai.holding, RowAmount::zero());
        assert_eq!(dai.claimable, RowAmount::zero());
    }

    #[test]
    fn fiat_total_re_expression() {
        let assets = sample_assets();
        let native = assets.native_token();
        let total = format_row_fiat_amount(native, 3600.0);
        assert_eq!(total.value, "2"); // 3600 USD / 1800 USD per ETH
        assert_eq!(total.fiat, "3,600.00");

        assert_eq!(format_row_fiat_amount(native, 0.0), RowAmount::zero());
        assert_eq!(format_row_fiat_amount(None, 100.0), RowAmount::zero());
    }
}
