//! # Shared Utility Functions
//!
//! Address display helpers used by the desktop application.
//!
//! Ethereum addresses are 42-character hex strings (`0x` + 40 hex digits);
//! for display they are shortened to a prefix and suffix around an ellipsis,
//! keeping the `0x` marker intact.

/// Shorten an address by keeping the first `prefix_len` and last
/// `suffix_len` hex characters after the `0x` marker.
///
/// Strings too short to shorten meaningfully are returned as-is, so the
/// function is safe to call on arbitrary user input.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x59C945953C10AbC7f3716a8cECd09b5eb4d865Ca";
/// assert_eq!(format_address(addr, 4, 4), "0x59C9...65Ca");
/// assert_eq!(format_address("0xabc", 4, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let (marker, hex) = match address.strip_prefix("0x") {
        Some(rest) => ("0x", rest),
        None => ("", address),
    };

    let hex_len = hex.len();
    if hex_len <= prefix_len + suffix_len || prefix_len >= hex_len || suffix_len >= hex_len {
        return address.to_string();
    }

    // ASCII-only hex, byte slicing is safe here
    let prefix = &hex[..prefix_len];
    let suffix = &hex[hex_len - suffix_len..];

    format!("{}{}...{}", marker, prefix, suffix)
}

/// Shorten an address with the default 4-character prefix and suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x59C945953C10AbC7f3716a8cECd09b5eb4d865Ca";
/// assert_eq!(truncate_address(addr), "0x59C9...65Ca");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
