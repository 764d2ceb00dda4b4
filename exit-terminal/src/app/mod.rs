//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async task
//! handlers, and application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Main Thread (egui)                      │
//! │   App                                                    │
//! │   - on_tick()        processes async results each frame  │
//! │   - handle_*_click() user action handlers                │
//! │   - refresh_view()   memoized row projection + totals    │
//! │                                                          │
//! │   State: Arc<RwLock<AppState>> (locks held briefly)      │
//! └──────────────────────────┬───────────────────────────────┘
//!                            │ async_channel (unbounded)
//! ┌──────────────────────────▼───────────────────────────────┐
//! │               Async Tasks (Tokio runtime)                │
//! │   tasks::module  - exit-module probe (eth_call)          │
//! │   tasks::assets  - balance fetch + gas estimates         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Async tasks never touch the UI: results come back as [`AppEvent`]
//! values, drained non-blocking in [`App::on_tick`].

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::claim;

/// Re-fetch the holdings snapshot when it is older than this.
const ASSETS_REFRESH_SECS: i64 = 60;

/// Main application orchestrator.
///
/// Owns the shared state and the event channel. The egui layer calls
/// [`App::on_tick`] every frame and the `handle_*` methods on user
/// actions; everything else happens in handlers and tasks.
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,
    /// Channel receiver for async task results.
    pub event_rx: Receiver<AppEvent>,
    /// Channel sender handed to spawned tasks.
    pub(crate) event_tx: Sender<AppEvent>,
}

impl App {
    /// Create a new application instance on the attach screen.
    pub fn new() -> Self {
        let state = AppState {
            current_screen: Screen::Attach,
            chain_id: 1,
            account: None,
            exit_module: None,
            attach: AttachState::default(),
            dashboard: DashboardState::default(),
            api_client: None,
            pending_notifications: Vec::new(),
            pending_clipboard: None,
        };

        let (event_tx, event_rx) = unbounded();

        tracing::info!("app state initialized");

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Called every frame: drain async events, refresh stale data, and
    /// recompute the memoized projection when its inputs changed.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        self.maybe_refetch_assets();
        self.refresh_view();
    }

    /// Re-fetch the holdings snapshot once it goes stale.
    fn maybe_refetch_assets(&mut self) {
        let due = {
            let state = self.state.read();
            state.current_screen == Screen::Dashboard
                && state.account.is_some()
                && !state.dashboard.fetching_assets
                && match state.dashboard.last_assets_update {
                    None => true,
                    Some(at) => {
                        (chrono::Local::now() - at).num_seconds() >= ASSETS_REFRESH_SECS
                    }
                }
        };

        if due {
            tasks::assets::fetch_assets(self.state.clone(), self.event_tx.clone());
        }
    }

    /// Recompute rows and totals if any declared dependency changed.
    ///
    /// The projection is pure in {assets, claim rate, sort, selection};
    /// the cache key is exactly that tuple, so unrelated repaints cost one
    /// comparison.
    fn refresh_view(&mut self) {
        let mut state = self.state.write();
        if state.current_screen != Screen::Dashboard {
            return;
        }

        let claim_rate = state.claim_rate();
        let claim_rate_bits = claim_rate.to_bits();
        if state.view_matches(claim_rate_bits) {
            return;
        }

        let excluded = state.excluded_address();
        let rate_fixed = claim::claim_rate_fixed(claim_rate);
        let rows = claim::stable_sort(
            claim::project_rows(&state.dashboard.assets, rate_fixed, excluded.as_deref()),
            state.dashboard.sort,
        );
        let totals = claim::aggregate(
            &state.dashboard.assets,
            &state.dashboard.selected_tokens,
            claim_rate,
        );

        let view = ProjectionCache {
            assets_version: state.dashboard.assets_version,
            claim_rate_bits,
            sort: state.dashboard.sort,
            selected: state.dashboard.selected_tokens.clone(),
            rows,
            totals,
        };
        state.dashboard.view = Some(view);
    }

    /// Take any text waiting for the system clipboard.
    pub fn take_pending_clipboard(&mut self) -> Option<String> {
        self.state.write().pending_clipboard.take()
    }

    /// Take the queued (level, message) notifications.
    pub fn take_notifications(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    // ---- user action handlers ------------------------------------------

    pub fn handle_account_input_change(&mut self, value: String) {
        handlers::attach::handle_account_input_change(self.state.clone(), value);
    }

    pub fn handle_attach_click(&mut self) {
        handlers::attach::handle_attach_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_detach_click(&mut self) {
        handlers::navigation::handle_detach_click(self.state.clone());
    }

    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
    }

    pub fn handle_open_safe_app(&mut self) {
        handlers::navigation::handle_open_safe_app(self.state.clone());
    }

    pub fn handle_row_click(&mut self, address: &str) {
        handlers::selection::handle_row_click(self.state.clone(), address);
    }

    pub fn handle_select_all(&mut self, checked: bool) {
        handlers::selection::handle_select_all(self.state.clone(), checked);
    }

    pub fn handle_sort_toggle(&mut self) {
        handlers::selection::handle_sort_toggle(self.state.clone());
    }

    pub fn handle_claim_input_change(&mut self, value: String) {
        handlers::claim::handle_claim_input_change(self.state.clone(), value);
    }

    pub fn handle_max_click(&mut self) {
        handlers::claim::handle_max_click(self.state.clone());
    }

    pub fn handle_exit_click(&mut self) {
        handlers::claim::handle_exit_click(self.state.clone());
    }

    pub fn handle_refresh_click(&mut self) {
        tasks::assets::fetch_assets(self.state.clone(), self.event_tx.clone());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
