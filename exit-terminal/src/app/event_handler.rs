//! # Event Handler
//!
//! Processes `AppEvent` messages received from async tasks and updates the
//! application state. Write locks are taken per event and released before
//! any further work so the render loop never stalls.

use crate::app::events::AppEvent;
use crate::app::state::{DashboardState, Screen};
use crate::app::{tasks, App};
use crate::utils::address::checksum;

impl App {
    /// Handle one async event result.
    pub(crate) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ModuleResult { account, result } => {
                self.handle_module_result(account, result);
            }
            AppEvent::AssetsResult(result) => {
                self.handle_assets_result(result);
            }
            AppEvent::Loading(message) => {
                let mut state = self.state.write();
                state
                    .pending_notifications
                    .push(("info".to_string(), message));
            }
        }
    }

    fn handle_module_result(
        &mut self,
        account: ethers_core::types::Address,
        result: Result<Option<crate::services::module::ExitModule>, String>,
    ) {
        {
            let mut state = self.state.write();
            state.attach.loading = false;

            match result {
                Ok(module) => {
                    state.attach.invalid_safe = false;
                    state.account = Some(account);
                    state.exit_module = module.clone();
                    // fresh dashboard per attachment: selection, claim input
                    // and sort order all start over
                    state.dashboard = DashboardState::default();
                    state.current_screen = Screen::Dashboard;

                    match module {
                        Some(module) => {
                            tracing::info!(module = ?module.address, "exit module attached");
                            state.pending_notifications.push((
                                "success".to_string(),
                                format!("Attached {}", checksum(&account)),
                            ));
                        }
                        None => {
                            tracing::info!(account = ?account, "account has no exit module");
                        }
                    }
                }
                Err(error) => {
                    tracing::warn!(error = %error, "attach failed");
                    state.attach.invalid_safe = true;
                }
            }
        } // lock released before spawning the follow-up fetch

        let attached = { self.state.read().account.is_some() };
        if attached {
            tasks::assets::fetch_assets(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_assets_result(
        &mut self,
        result: Result<shared::dto::safe::SafeAssets, String>,
    ) {
        let mut state = self.state.write();
        state.dashboard.fetching_assets = false;

        match result {
            Ok(assets) => {
                state.dashboard.assets = assets;
                state.dashboard.assets_version += 1;
                state.dashboard.last_assets_update = Some(chrono::Local::now());
            }
            Err(error) => {
                tracing::error!(error = %error, "balance fetch failed");
                state
                    .pending_notifications
                    .push(("error".to_string(), format!("Failed to load assets: {}", error)));
            }
        }
    }
}
