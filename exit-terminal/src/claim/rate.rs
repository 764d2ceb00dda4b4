//! # Claim Rate
//!
//! The claim rate is the fraction of the designated token's circulating
//! supply being redeemed; it scales every claimable amount in the table.
//! It exists in two domains: an `f64` fraction for fiat math and an
//! 18-decimal fixed-point integer for the balance arithmetic.

use ethers_core::types::U256;
use ethers_core::utils::parse_units;

use super::rows::CLAIM_RATE_DECIMALS;

/// Fraction of the circulating supply the entered amount represents,
/// clamped to [0, 1]. A zero or missing supply yields zero.
pub fn claim_rate(claim_amount: U256, circulating_supply: U256) -> f64 {
    if circulating_supply.is_zero() {
        return 0.0;
    }
    let amount = u256_f64(claim_amount);
    let supply = u256_f64(circulating_supply);
    if supply == 0.0 {
        return 0.0;
    }
    (amount / supply).clamp(0.0, 1.0)
}

/// The rate as an 18-decimal fixed-point integer for the claimable-amount
/// arithmetic.
///
/// The fraction is rendered with exactly 18 decimal places before parsing;
/// `parse_units` rejects exponent notation, which `f64` formatting would
/// otherwise produce for very small rates.
pub fn claim_rate_fixed(rate: f64) -> U256 {
    let clamped = if rate.is_finite() {
        rate.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let rendered = format!("{:.prec$}", clamped, prec = CLAIM_RATE_DECIMALS as usize);
    parse_units(&rendered, CLAIM_RATE_DECIMALS)
        .map(U256::from)
        .unwrap_or_else(|_| U256::zero())
}

/// Parse a user-entered claim amount into the token's raw integer domain.
pub fn parse_claim_amount(input: &str, decimals: u32) -> Option<U256> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.starts_with('-') {
        return None;
    }
    parse_units(trimmed, decimals).ok().map(U256::from)
}

fn u256_f64(value: U256) -> f64 {
    value.to_string().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::rows::claimable_amount;

    fn whole(amount: u64) -> U256 {
        U256::from(amount) * U256::from(10u64).pow(U256::from(18u64))
    }

    #[test]
    fn rate_is_amount_over_supply() {
        assert!((claim_rate(whole(100), whole(1000)) - 0.1).abs() < 1e-12);
        assert!((claim_rate(whole(1), whole(1)) - 1.0).abs() < 1e-12);
        assert_eq!(claim_rate(whole(0), whole(1000)), 0.0);
    }

    #[test]
    fn rate_with_zero_supply_is_zero() {
        assert_eq!(claim_rate(whole(100), U256::zero()), 0.0);
    }

    #[test]
    fn rate_is_clamped_to_one() {
        assert_eq!(claim_rate(whole(2000), whole(1000)), 1.0);
    }

    #[test]
    fn fixed_point_conversion_roundtrips_exact_fractions() {
        assert_eq!(claim_rate_fixed(0.5), whole(1) / U256::from(2u64));
        assert_eq!(claim_rate_fixed(1.0), whole(1));
        assert_eq!(claim_rate_fixed(0.0), U256::zero());
    }

    #[test]
    fn fixed_point_conversion_handles_bad_rates() {
        assert_eq!(claim_rate_fixed(-0.5), U256::zero());
        assert_eq!(claim_rate_fixed(2.0), whole(1));
        assert_eq!(claim_rate_fixed(f64::NAN), U256::zero());
        // tiny rates survive without exponent-notation parse failures
        assert!(claim_rate_fixed(1e-18) > U256::zero());
    }

    #[test]
    fn claimable_is_monotonic_in_entered_amount() {
        let balance = whole(12345);
        let supply = whole(100000);
        let mut previous = U256::zero();
        for amount in [0u64, 10, 100, 1000, 50000, 100000] {
            let fixed = claim_rate_fixed(claim_rate(whole(amount), supply));
            let claimable = claimable_amount(balance, fixed);
            assert!(claimable >= previous);
            previous = claimable;
        }
    }

    #[test]
    fn parse_claim_amount_respects_decimals() {
        assert_eq!(parse_claim_amount("1", 18), Some(whole(1)));
        assert_eq!(
            parse_claim_amount("1.5", 6),
            Some(U256::from(1_500_000u64))
        );
        assert_eq!(parse_claim_amount("", 18), None);
        assert_eq!(parse_claim_amount("-2", 18), None);
        assert_eq!(parse_claim_amount("abc", 18), None);
    }
}
