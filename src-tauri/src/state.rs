//! Application state management
use lune_core::{AppLauncher, CommandBridge, Config, CurrentOs, WindowManager};
use std::sync::Arc;
use tauri::AppHandle;

use crate::backend::TauriWindowBackend;

/// Everything the IPC commands share. Window state lives in the bridge's
/// window manager; nothing here is mutable.
pub struct AppState {
    bridge: CommandBridge,
    config: Config,
    http: reqwest::Client,
}

impl AppState {
    pub fn new(app: &AppHandle, config: Config) -> Self {
        let backend = Arc::new(TauriWindowBackend::new(app.clone(), config.dev_tools));

        let windows = WindowManager::new(backend, Arc::new(CurrentOs))
            .with_specs(config.primary.clone(), config.companion.clone());
        let launcher = AppLauncher::system();

        Self {
            bridge: CommandBridge::new(windows, launcher),
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn bridge(&self) -> &CommandBridge {
        &self.bridge
    }

    pub fn windows(&self) -> &WindowManager {
        self.bridge.windows()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
