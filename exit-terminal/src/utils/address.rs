//! # Address Utilities
//!
//! Parsing and display helpers for account addresses, including EIP-3770
//! chain-prefixed forms (`eth:0x...`) as used by the Safe ecosystem.

use ethers_core::types::Address;
use ethers_core::utils::to_checksum;

/// Chain id <-> EIP-3770 short name for the supported networks.
const CHAIN_PREFIXES: &[(u64, &str)] = &[
    (1, "eth"),
    (10, "oeth"),
    (100, "gno"),
    (137, "matic"),
    (11155111, "sep"),
];

/// EIP-3770 short name for a chain id, if the chain is supported.
pub fn eip3770_prefix(chain_id: u64) -> Option<&'static str> {
    CHAIN_PREFIXES
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, prefix)| *prefix)
}

/// Chain id for an EIP-3770 short name, if the prefix is known.
pub fn chain_id_for_prefix(prefix: &str) -> Option<u64> {
    CHAIN_PREFIXES
        .iter()
        .find(|(_, p)| p.eq_ignore_ascii_case(prefix))
        .map(|(id, _)| *id)
}

/// Parse a plain or chain-prefixed account address.
///
/// Accepts `0x...` and `prefix:0x...` forms. A prefixed input also names the
/// chain the account lives on; an unknown prefix or malformed address yields
/// `None`.
pub fn parse_prefixed_address(input: &str) -> Option<(Address, Option<u64>)> {
    let input = input.trim();
    let (prefix, raw) = match input.split_once(':') {
        Some((prefix, rest)) => (Some(prefix), rest),
        None => (None, input),
    };

    let address: Address = raw.trim().parse().ok()?;

    match prefix {
        None => Some((address, None)),
        Some(prefix) => Some((address, Some(chain_id_for_prefix(prefix)?))),
    }
}

/// EIP-55 checksummed rendering of an address.
pub fn checksum(address: &Address) -> String {
    to_checksum(address, None)
}
