//! # Exit Calldata
//!
//! Encodes the `exit(uint256,address[])` call: the amount of the
//! designated token being redeemed (or the token id for ERC-721 modules)
//! and the list of selected token addresses to claim from. Submission is
//! the connected wallet's job; this app only builds the payload.

use ethers_core::abi::{self, ParamType, Token};
use ethers_core::types::{Address, Bytes, U256};
use ethers_core::utils::id;

/// Build the exit call payload for the selected tokens.
pub fn encode_exit(amount: U256, tokens: &[Address]) -> Bytes {
    let mut data = id("exit(uint256,address[])").to_vec();
    data.extend(abi::encode(&[
        Token::Uint(amount),
        Token::Array(tokens.iter().map(|token| Token::Address(*token)).collect()),
    ]));
    Bytes::from(data)
}
