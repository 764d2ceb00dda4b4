//! # Application State Types
//!
//! All state-related types for the application: screens, the attach flow,
//! the dashboard (assets, selection, claim input), and the memoized row
//! projection.

use std::sync::Arc;

use ethers_core::types::{Address, U256};
use shared::dto::safe::SafeAssets;

use crate::claim::{self, RowItem, SortOrder, Totals};
use crate::core::store::SelectionPort;
use crate::services::api::ApiClient;
use crate::services::module::{ExitModule, ModuleKind};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Account attachment form
    Attach,
    /// Assets table and claim card for the attached account
    Dashboard,
}

impl Screen {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Attach => "Attach Account",
            Screen::Dashboard => "Exit Dashboard",
        }
    }
}

/// Attach-screen sub-state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttachState {
    /// Raw address input, possibly EIP-3770 prefixed
    pub account_input: String,
    /// Probe in flight
    pub loading: bool,
    /// Last probe failed: the address is not a module-bearing account
    pub invalid_safe: bool,
}

/// Memoized row projection plus the inputs it was computed from.
///
/// Projection and totals are pure in {assets, claim rate, sort, selection};
/// the key fields let `refresh_view` skip recomputation on unrelated
/// repaints.
#[derive(Debug, Clone)]
pub struct ProjectionCache {
    pub assets_version: u64,
    pub claim_rate_bits: u64,
    pub sort: SortOrder,
    pub selected: Vec<String>,
    pub rows: Vec<RowItem>,
    pub totals: Totals,
}

impl ProjectionCache {
    fn matches(
        &self,
        assets_version: u64,
        claim_rate_bits: u64,
        sort: SortOrder,
        selected: &[String],
    ) -> bool {
        self.assets_version == assets_version
            && self.claim_rate_bits == claim_rate_bits
            && self.sort == sort
            && self.selected == selected
    }
}

/// Dashboard screen state
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Latest holdings snapshot for the attached account
    pub assets: SafeAssets,
    /// Bumped on every assets update; keys the projection cache
    pub assets_version: u64,
    /// Flag to prevent concurrent balance fetches
    pub fetching_assets: bool,
    /// Wall-clock time of the last successful fetch
    pub last_assets_update: Option<chrono::DateTime<chrono::Local>>,
    /// Ordered list of selected token addresses
    pub selected_tokens: Vec<String>,
    /// Claimable-column sort direction
    pub sort: SortOrder,
    /// Claim amount input (ERC-20) or token id input (ERC-721)
    pub claim_input: String,
    /// Validation error for the claim input, if any
    pub claim_error: Option<String>,
    /// Memoized rows and totals
    pub view: Option<ProjectionCache>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            assets: SafeAssets::empty(),
            assets_version: 0,
            fetching_assets: false,
            last_assets_update: None,
            selected_tokens: Vec::new(),
            sort: SortOrder::default(),
            claim_input: String::new(),
            claim_error: None,
            view: None,
        }
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Chain the attached account lives on
    pub chain_id: u64,
    /// Attached account, once a probe succeeded
    pub account: Option<Address>,
    /// Detected exit module, `None` when the account has none enabled
    pub exit_module: Option<ExitModule>,
    /// Attach flow state
    pub attach: AttachState,
    /// Dashboard state
    pub dashboard: DashboardState,
    /// API client for the current chain
    pub api_client: Option<Arc<ApiClient>>,
    /// Pending notifications to display (level, message)
    pub pending_notifications: Vec<(String, String)>,
    /// Text waiting to be placed on the system clipboard
    pub pending_clipboard: Option<String>,
}

impl AppState {
    /// Current claim rate as a fraction of the circulating supply.
    ///
    /// Zero until a module is detected and a valid amount (or token id for
    /// ERC-721 modules, each id being one equal share) is entered.
    pub fn claim_rate(&self) -> f64 {
        let Some(module) = &self.exit_module else {
            return 0.0;
        };

        match module.kind {
            ModuleKind::Erc20 => {
                let decimals = module
                    .designated_token_decimals
                    .unwrap_or(claim::rows::CLAIM_RATE_DECIMALS);
                match claim::parse_claim_amount(&self.dashboard.claim_input, decimals) {
                    Some(amount) => claim::claim_rate(amount, module.circulating_supply),
                    None => 0.0,
                }
            }
            ModuleKind::Erc721 => {
                // one token id = one equal share of the collection
                match U256::from_dec_str(self.dashboard.claim_input.trim()) {
                    Ok(_) => claim::claim_rate(U256::one(), module.circulating_supply),
                    Err(_) => 0.0,
                }
            }
        }
    }

    /// Address excluded from the assets table: the designated token being
    /// claimed from, rendered as a full lowercase hex string.
    pub fn excluded_address(&self) -> Option<String> {
        self.exit_module
            .as_ref()
            .map(|module| format!("{:?}", module.designated_token))
    }

    /// Drop the attached account and all derived dashboard state.
    pub fn detach(&mut self) {
        self.account = None;
        self.exit_module = None;
        self.dashboard = DashboardState::default();
        self.attach = AttachState::default();
        self.current_screen = Screen::Attach;
    }

    /// Check whether the cached projection is still valid for the given key.
    pub(crate) fn view_matches(&self, claim_rate_bits: u64) -> bool {
        match &self.dashboard.view {
            Some(view) => view.matches(
                self.dashboard.assets_version,
                claim_rate_bits,
                self.dashboard.sort,
                &self.dashboard.selected_tokens,
            ),
            None => false,
        }
    }
}

impl SelectionPort for AppState {
    fn selected_tokens(&self) -> &[String] {
        &self.dashboard.selected_tokens
    }

    fn replace_selection(&mut self, selection: Vec<String>) {
        self.dashboard.selected_tokens = selection;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(kind: ModuleKind, supply: u64) -> ExitModule {
        ExitModule {
            address: Address::from_low_u64_be(0xe1),
            kind,
            designated_token: Address::from_low_u64_be(0xd1),
            designated_token_decimals: match kind {
                ModuleKind::Erc20 => Some(18),
                ModuleKind::Erc721 => None,
            },
            circulating_supply: match kind {
                ModuleKind::Erc20 => {
                    U256::from(supply) * U256::from(10u64).pow(U256::from(18u64))
                }
                ModuleKind::Erc721 => U256::from(supply),
            },
        }
    }

    fn state_with_module(module: ExitModule) -> AppState {
        AppState {
            current_screen: Screen::Dashboard,
            chain_id: 1,
            account: Some(Address::from_low_u64_be(0xaa)),
            exit_module: Some(module),
            attach: AttachState::default(),
            dashboard: DashboardState::default(),
            api_client: None,
            pending_notifications: Vec::new(),
            pending_clipboard: None,
        }
    }

    #[test]
    fn erc20_claim_rate_follows_input() {
        let mut state = state_with_module(module(ModuleKind::Erc20, 1000));
        assert_eq!(state.claim_rate(), 0.0);

        state.dashboard.claim_input = "100".to_string();
        assert!((state.claim_rate() - 0.1).abs() < 1e-12);

        state.dashboard.claim_input = "garbage".to_string();
        assert_eq!(state.claim_rate(), 0.0);
    }

    #[test]
    fn erc721_claim_rate_is_one_share() {
        let mut state = state_with_module(module(ModuleKind::Erc721, 4));
        state.dashboard.claim_input = "7".to_string();
        assert!((state.claim_rate() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn excluded_address_is_the_designated_token() {
        let state = state_with_module(module(ModuleKind::Erc20, 1000));
        let excluded = state.excluded_address().unwrap();
        assert!(excluded.starts_with("0x"));
        assert!(excluded.ends_with("d1"));
    }

    #[test]
    fn detach_resets_everything() {
        let mut state = state_with_module(module(ModuleKind::Erc20, 1000));
        state.dashboard.selected_tokens = vec!["0xabc".to_string()];
        state.detach();
        assert_eq!(state.current_screen, Screen::Attach);
        assert!(state.account.is_none());
        assert!(state.exit_module.is_none());
        assert!(state.dashboard.selected_tokens.is_empty());
        // sort order resets to ascending with the dashboard
        assert_eq!(state.dashboard.sort, SortOrder::Ascending);
    }

    #[test]
    fn selection_port_replaces_wholesale() {
        let mut state = state_with_module(module(ModuleKind::Erc20, 1000));
        state.replace_selection(vec!["0xa".to_string(), "0xb".to_string()]);
        assert_eq!(state.selected_tokens(), ["0xa", "0xb"]);
        state.replace_selection(Vec::new());
        assert!(state.selected_tokens().is_empty());
    }
}
