//! Lune - Tauri Application
//!
//! The privileged host for the desktop companion:
//! - two windows, a primary control surface and an always-on-top companion
//! - hosted content is untrusted and reaches the OS only through the bridge
//! - Rust owns all window state

mod backend;
mod commands;
mod state;

use lune_core::{Config, CoreError, LastWindowPolicy, WindowRole};
use state::AppState;
use tauri::webview::PageLoadEvent;
use tauri::{Manager, RunEvent, WindowEvent};

/// Log and terminate. Host-level failures never reach a window.
fn fatal(err: CoreError) -> ! {
    tracing::error!(error = %err, "Fatal host error");
    std::process::exit(1);
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = Config::from_env();

    // Initialize logging
    let filter = config
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| "info".to_string());
    lune_core::init_logging(&filter);

    let config = config.unwrap_or_else(|e| fatal(e));

    let app = tauri::Builder::default()
        .setup(move |app| {
            let state = AppState::new(app.handle(), config);
            app.manage(state);

            let state = app.state::<AppState>();
            state.windows().ensure_primary()?;
            state.windows().ensure_companion()?;

            tracing::info!("Lune started");

            Ok(())
        })
        .on_page_load(|webview, payload| {
            if !matches!(payload.event(), PageLoadEvent::Finished) {
                return;
            }
            if let Some(state) = webview.try_state::<AppState>() {
                if state.windows().page_loaded(webview.label()).is_none() {
                    tracing::debug!(label = %webview.label(), "Page loaded in unmanaged webview");
                }
            }
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                let Some(role) = WindowRole::from_label(window.label()) else {
                    return;
                };
                if let Some(state) = window.try_state::<AppState>() {
                    state.windows().window_destroyed(role);
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Bridge commands
            commands::apps::open_app,
            commands::windows::minimize_window,
            commands::windows::close_app,
            commands::windows::show_main_window,
            // Lifecycle, optional: page load already marks content ready
            commands::diagnostics::content_ready,
            // Network
            commands::fetch::fetch,
        ])
        .build(tauri::generate_context!())
        .unwrap_or_else(|e| fatal(CoreError::Fatal(e.to_string())));

    app.run(|app, event| match event {
        // Every window was closed by the user; `close_app` exits with an
        // explicit code and is not affected.
        RunEvent::ExitRequested {
            code: None, api, ..
        } => {
            let Some(state) = app.try_state::<AppState>() else {
                return;
            };
            if state.windows().last_window_closed_policy() == LastWindowPolicy::KeepRunning {
                tracing::info!("All windows closed, staying resident");
                api.prevent_exit();
            }
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => {
            let Some(state) = app.try_state::<AppState>() else {
                return;
            };
            if let Err(e) = state.windows().reactivate() {
                fatal(e.into());
            }
        }
        _ => {}
    });
}
