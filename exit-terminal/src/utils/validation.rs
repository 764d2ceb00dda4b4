/// Validation utilities for user input

use ethers_core::types::U256;
use ethers_core::utils::parse_units;

use crate::utils::address::parse_prefixed_address;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate an account address input (plain or EIP-3770 prefixed)
pub fn validate_account_input(input: &str) -> ValidationResult {
    if input.trim().is_empty() {
        return ValidationResult::err("Account address is required");
    }

    if parse_prefixed_address(input).is_none() {
        return ValidationResult::err("Invalid account address");
    }

    ValidationResult::ok()
}

/// Validate a claim amount for a token with the given decimals
///
/// The amount must be a positive decimal number expressible in the token's
/// decimals and, when a cap is given, at most the cap.
pub fn validate_claim_amount(input: &str, decimals: u32, max: Option<U256>) -> ValidationResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ValidationResult::err("Amount is required");
    }

    if trimmed.starts_with('-') {
        return ValidationResult::err("Amount must be positive");
    }

    let amount: U256 = match parse_units(trimmed, decimals) {
        Ok(parsed) => parsed.into(),
        Err(_) => return ValidationResult::err("Invalid amount"),
    };

    if amount.is_zero() {
        return ValidationResult::err("Amount must be greater than 0");
    }

    if let Some(max) = max {
        if amount > max {
            return ValidationResult::err("Amount exceeds the circulating supply");
        }
    }

    ValidationResult::ok()
}

/// Validate an ERC-721 token id (a non-negative integer)
pub fn validate_token_id(input: &str) -> ValidationResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ValidationResult::err("Token id is required");
    }

    if U256::from_dec_str(trimmed).is_err() {
        return ValidationResult::err("Invalid token id");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_validation() {
        assert!(validate_account_input("0x59C945953C10AbC7f3716a8cECd09b5eb4d865Ca").is_valid);
        assert!(validate_account_input("eth:0x59C945953C10AbC7f3716a8cECd09b5eb4d865Ca").is_valid);
        assert!(!validate_account_input("").is_valid);
        assert!(!validate_account_input("0x1234").is_valid);
        assert!(!validate_account_input("zzz:0x59C945953C10AbC7f3716a8cECd09b5eb4d865Ca").is_valid);
    }

    #[test]
    fn test_claim_amount_validation() {
        assert!(validate_claim_amount("1.5", 18, None).is_valid);
        assert!(validate_claim_amount("1000", 18, None).is_valid);
        assert!(!validate_claim_amount("", 18, None).is_valid);
        assert!(!validate_claim_amount("0", 18, None).is_valid);
        assert!(!validate_claim_amount("abc", 18, None).is_valid);
        assert!(!validate_claim_amount("-1", 18, None).is_valid);
        // more fractional digits than the token supports
        assert!(!validate_claim_amount("0.001", 2, None).is_valid);
    }

    #[test]
    fn test_claim_amount_cap() {
        let max = U256::from(10u64).pow(U256::from(18u64)); // 1.0 with 18 decimals
        assert!(validate_claim_amount("1", 18, Some(max)).is_valid);
        assert!(!validate_claim_amount("1.000000000000000001", 18, Some(max)).is_valid);
    }

    #[test]
    fn test_token_id_validation() {
        assert!(validate_token_id("0").is_valid);
        assert!(validate_token_id("123456789").is_valid);
        assert!(!validate_token_id("").is_valid);
        assert!(!validate_token_id("12.5").is_valid);
        assert!(!validate_token_id("-1").is_valid);
    }
}
