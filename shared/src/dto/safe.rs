//! # Safe Balance Service DTOs
//!
//! Wire types for the Safe balance endpoint
//! (`GET /v1/chains/{chainId}/safes/{address}/balances/usd`).
//!
//! The service reports balances as decimal strings of the raw integer token
//! amount; fiat fields are decimal strings of USD values. Field names on the
//! wire are camelCase.

use serde::{Deserialize, Serialize};

/// Kind of token behind a balance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// The chain's native asset (reported with the zero address).
    NativeToken,
    Erc20,
    Erc721,
}

/// Token metadata as reported by the balance service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub address: String,
    /// Missing for ERC-721 collections.
    #[serde(default)]
    pub decimals: Option<u32>,
    pub symbol: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

/// A single token holding of the attached account.
///
/// `gas` is not part of the wire payload: the application attaches a
/// per-token transfer cost estimate (in wei, as a decimal string) after
/// fetching, so the field defaults to `"0"` when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAsset {
    pub token_info: TokenInfo,
    /// Raw integer amount, scaled by the token's decimals.
    pub balance: String,
    /// USD value of one whole token.
    pub fiat_conversion: String,
    /// USD value of the whole balance.
    pub fiat_balance: String,
    #[serde(default = "zero_amount")]
    pub gas: String,
}

/// Full balance snapshot for an attached account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeAssets {
    pub fiat_total: String,
    pub items: Vec<TokenAsset>,
}

impl SafeAssets {
    /// Empty snapshot, used before the first fetch completes.
    pub fn empty() -> Self {
        Self {
            fiat_total: "0".to_string(),
            items: Vec::new(),
        }
    }

    /// The native-asset entry, which anchors gas rows and aggregate totals.
    pub fn native_token(&self) -> Option<&TokenAsset> {
        self.items
            .iter()
            .find(|asset| asset.token_info.token_type == TokenType::NativeToken)
    }

    /// Look up an entry by its token address.
    pub fn find_by_address(&self, address: &str) -> Option<&TokenAsset> {
        self.items
            .iter()
            .find(|asset| asset.token_info.address.eq_ignore_ascii_case(address))
    }
}

fn zero_amount() -> String {
    "0".to_string()
}
