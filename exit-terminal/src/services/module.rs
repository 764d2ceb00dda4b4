//! # Exit Module Discovery
//!
//! Probes an attached account for an exit module. The account must be a
//! Safe-style contract exposing `getModulesPaginated`; each enabled module
//! is then probed for the exit interface (`designatedToken()` plus a
//! circulating-supply contract). The first module answering both probes
//! wins.

use ethers_core::abi::{self, ParamType, Token};
use ethers_core::types::{Address, Bytes, U256};
use ethers_core::utils::id;

use crate::core::error::AppError;
use crate::core::service::SafeService;

/// Modules are read in one page; accounts with more than this many enabled
/// modules are out of scope.
const MODULE_PAGE_SIZE: u64 = 50;

/// Kind of designated token the module redeems against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Erc20,
    Erc721,
}

/// A detected exit module and the designated-token facts the UI needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ExitModule {
    pub address: Address,
    pub kind: ModuleKind,
    pub designated_token: Address,
    /// `None` for ERC-721 designated collections.
    pub designated_token_decimals: Option<u32>,
    pub circulating_supply: U256,
}

/// Sentinel head of the Safe module linked list.
fn sentinel() -> Address {
    Address::from_low_u64_be(1)
}

/// Calldata for `getModulesPaginated(address,uint256)`.
pub fn modules_call_data() -> Bytes {
    let mut data = id("getModulesPaginated(address,uint256)").to_vec();
    data.extend(abi::encode(&[
        Token::Address(sentinel()),
        Token::Uint(U256::from(MODULE_PAGE_SIZE)),
    ]));
    Bytes::from(data)
}

/// Calldata for a no-argument getter.
fn getter_call_data(signature: &str) -> Bytes {
    Bytes::from(id(signature).to_vec())
}

/// Decode the `(address[] array, address next)` result of
/// `getModulesPaginated`.
pub fn decode_modules(data: &Bytes) -> Result<Vec<Address>, AppError> {
    let tokens = abi::decode(
        &[
            ParamType::Array(Box::new(ParamType::Address)),
            ParamType::Address,
        ],
        data,
    )
    .map_err(|e| AppError::Rpc(format!("Failed to decode module list: {}", e)))?;

    let modules = tokens
        .into_iter()
        .next()
        .and_then(Token::into_array)
        .ok_or_else(|| AppError::Rpc("Malformed module list".to_string()))?;

    Ok(modules
        .into_iter()
        .filter_map(Token::into_address)
        .collect())
}

/// Decode a single-address call result.
pub fn decode_address(data: &Bytes) -> Result<Address, AppError> {
    abi::decode(&[ParamType::Address], data)
        .map_err(|e| AppError::Rpc(format!("Failed to decode address: {}", e)))?
        .into_iter()
        .next()
        .and_then(Token::into_address)
        .ok_or_else(|| AppError::Rpc("Malformed address result".to_string()))
}

/// Decode a single-uint call result.
pub fn decode_uint(data: &Bytes) -> Result<U256, AppError> {
    abi::decode(&[ParamType::Uint(256)], data)
        .map_err(|e| AppError::Rpc(format!("Failed to decode uint: {}", e)))?
        .into_iter()
        .next()
        .and_then(Token::into_uint)
        .ok_or_else(|| AppError::Rpc("Malformed uint result".to_string()))
}

/// Probe `safe` for an exit module.
///
/// - `Err(_)`: the address is not a module-bearing contract at all (the
///   module enumeration itself failed) - surfaced as "not a Safe".
/// - `Ok(None)`: a valid account with no exit module enabled.
/// - `Ok(Some(_))`: the first enabled module answering the exit probes.
pub async fn detect_exit_module<S: SafeService + ?Sized>(
    service: &S,
    safe: Address,
) -> Result<Option<ExitModule>, AppError> {
    let raw = service
        .eth_call(safe, modules_call_data())
        .await
        .map_err(AppError::Rpc)?;
    let modules = decode_modules(&raw)?;

    for module in modules {
        let Ok(token_raw) = service
            .eth_call(module, getter_call_data("designatedToken()"))
            .await
        else {
            continue;
        };
        let Ok(designated_token) = decode_address(&token_raw) else {
            continue;
        };

        // the circulating supply lives behind its own contract
        let supply_contract = match service
            .eth_call(module, getter_call_data("circulatingSupply()"))
            .await
        {
            Ok(raw) => match decode_address(&raw) {
                Ok(address) => address,
                Err(_) => continue,
            },
            Err(_) => continue,
        };
        let circulating_supply = match service
            .eth_call(supply_contract, getter_call_data("get()"))
            .await
        {
            Ok(raw) => match decode_uint(&raw) {
                Ok(supply) => supply,
                Err(_) => continue,
            },
            Err(_) => continue,
        };

        // ERC-721 designated collections expose no decimals()
        let designated_token_decimals = service
            .eth_call(designated_token, getter_call_data("decimals()"))
            .await
            .ok()
            .and_then(|raw| decode_uint(&raw).ok())
            .map(|decimals| decimals.low_u64() as u32);

        let kind = if designated_token_decimals.is_some() {
            ModuleKind::Erc20
        } else {
            ModuleKind::Erc721
        };

        return Ok(Some(ExitModule {
            address: module,
            kind,
            designated_token,
            designated_token_decimals,
            circulating_supply,
        }));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modules_call_uses_known_selector() {
        let data = modules_call_data();
        // selector + sentinel + page size
        assert_eq!(data.len(), 4 + 32 + 32);
        assert_eq!(data[..4], [0xcc, 0x2f, 0x84, 0x52]);
    }

    #[test]
    fn getter_calls_are_bare_selectors() {
        let data = getter_call_data("designatedToken()");
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn module_list_roundtrip() {
        let a: Address = "0x000000000000000000000000000000000000000a"
            .parse()
            .unwrap();
        let b: Address = "0x000000000000000000000000000000000000000b"
            .parse()
            .unwrap();
        let encoded = abi::encode(&[
            Token::Array(vec![Token::Address(a), Token::Address(b)]),
            Token::Address(sentinel()),
        ]);
        let decoded = decode_modules(&Bytes::from(encoded)).unwrap();
        assert_eq!(decoded, vec![a, b]);
    }

    #[test]
    fn empty_module_list_decodes() {
        let encoded = abi::encode(&[Token::Array(vec![]), Token::Address(sentinel())]);
        let decoded = decode_modules(&Bytes::from(encoded)).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn single_value_decoders_roundtrip() {
        let address: Address = "0x6b175474e89094c44da98b954eedeac495271d0f"
            .parse()
            .unwrap();
        let encoded = Bytes::from(abi::encode(&[Token::Address(address)]));
        assert_eq!(decode_address(&encoded).unwrap(), address);

        let value = U256::from(123_456u64);
        let encoded = Bytes::from(abi::encode(&[Token::Uint(value)]));
        assert_eq!(decode_uint(&encoded).unwrap(), value);
    }

    #[test]
    fn garbage_results_are_errors_not_panics() {
        let garbage = Bytes::from(vec![0x01, 0x02]);
        assert!(decode_modules(&garbage).is_err());
        assert!(decode_address(&garbage).is_err());
        assert!(decode_uint(&garbage).is_err());
        assert!(decode_address(&Bytes::default()).is_err());
    }

    /// Scripted node answering exactly the probe calls the detector makes.
    struct ScriptedNode {
        safe: Address,
        module: Address,
        designated: Address,
        supply_contract: Address,
        erc20: bool,
    }

    impl ScriptedNode {
        fn new(erc20: bool) -> Self {
            Self {
                safe: Address::from_low_u64_be(0xaa),
                module: Address::from_low_u64_be(0xe1),
                designated: Address::from_low_u64_be(0xd1),
                supply_contract: Address::from_low_u64_be(0xc1),
                erc20,
            }
        }
    }

    #[async_trait::async_trait]
    impl SafeService for ScriptedNode {
        async fn safe_balances(
            &self,
            _chain_id: u64,
            _address: &str,
        ) -> Result<shared::dto::safe::SafeAssets, String> {
            Err("not used".to_string())
        }

        async fn eth_call(&self, to: Address, data: Bytes) -> Result<Bytes, String> {
            let selector = &data[..4];
            if to == self.safe && selector == id("getModulesPaginated(address,uint256)").as_slice() {
                return Ok(Bytes::from(abi::encode(&[
                    Token::Array(vec![Token::Address(self.module)]),
                    Token::Address(sentinel()),
                ])));
            }
            if to == self.module && selector == id("designatedToken()").as_slice() {
                return Ok(Bytes::from(abi::encode(&[Token::Address(self.designated)])));
            }
            if to == self.module && selector == id("circulatingSupply()").as_slice() {
                return Ok(Bytes::from(abi::encode(&[Token::Address(
                    self.supply_contract,
                )])));
            }
            if to == self.supply_contract && selector == id("get()").as_slice() {
                return Ok(Bytes::from(abi::encode(&[Token::Uint(U256::from(
                    1_000u64,
                ))])));
            }
            if to == self.designated && selector == id("decimals()").as_slice() {
                if self.erc20 {
                    return Ok(Bytes::from(abi::encode(&[Token::Uint(U256::from(18u64))])));
                }
                return Err("execution reverted".to_string());
            }
            Err("execution reverted".to_string())
        }

        async fn gas_price(&self) -> Result<U256, String> {
            Ok(U256::from(1_000_000_000u64))
        }
    }

    #[tokio::test]
    async fn detects_erc20_exit_module() {
        let node = ScriptedNode::new(true);
        let module = detect_exit_module(&node, node.safe)
            .await
            .unwrap()
            .expect("module expected");
        assert_eq!(module.address, node.module);
        assert_eq!(module.kind, ModuleKind::Erc20);
        assert_eq!(module.designated_token, node.designated);
        assert_eq!(module.designated_token_decimals, Some(18));
        assert_eq!(module.circulating_supply, U256::from(1_000u64));
    }

    #[tokio::test]
    async fn missing_decimals_means_erc721() {
        let node = ScriptedNode::new(false);
        let module = detect_exit_module(&node, node.safe)
            .await
            .unwrap()
            .expect("module expected");
        assert_eq!(module.kind, ModuleKind::Erc721);
        assert_eq!(module.designated_token_decimals, None);
    }

    #[tokio::test]
    async fn account_without_modules_is_not_an_error() {
        struct Empty;

        #[async_trait::async_trait]
        impl SafeService for Empty {
            async fn safe_balances(
                &self,
                _chain_id: u64,
                _address: &str,
            ) -> Result<shared::dto::safe::SafeAssets, String> {
                Err("not used".to_string())
            }

            async fn eth_call(&self, _to: Address, data: Bytes) -> Result<Bytes, String> {
                if data[..4] == id("getModulesPaginated(address,uint256)") {
                    return Ok(Bytes::from(abi::encode(&[
                        Token::Array(vec![]),
                        Token::Address(sentinel()),
                    ])));
                }
                Err("execution reverted".to_string())
            }

            async fn gas_price(&self) -> Result<U256, String> {
                Err("not used".to_string())
            }
        }

        let result = detect_exit_module(&Empty, Address::from_low_u64_be(0xaa)).await;
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn non_safe_account_is_an_error() {
        struct Reverts;

        #[async_trait::async_trait]
        impl SafeService for Reverts {
            async fn safe_balances(
                &self,
                _chain_id: u64,
                _address: &str,
            ) -> Result<shared::dto::safe::SafeAssets, String> {
                Err("not used".to_string())
            }

            async fn eth_call(&self, _to: Address, _data: Bytes) -> Result<Bytes, String> {
                Err("execution reverted".to_string())
            }

            async fn gas_price(&self) -> Result<U256, String> {
                Err("not used".to_string())
            }
        }

        let result = detect_exit_module(&Reverts, Address::from_low_u64_be(0xaa)).await;
        assert!(result.is_err());
    }
}
