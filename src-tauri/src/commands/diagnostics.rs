use lune_core::WindowRole;
use tauri::{State, Window};

use super::CommandResult;
use crate::state::AppState;

/// Early ready signal from hosted content. The host marks a window ready on
/// its own once the page finishes loading, so content never has to call this.
#[tauri::command]
pub fn content_ready(window: Window, state: State<AppState>) -> CommandResult<()> {
    match WindowRole::from_label(window.label()) {
        Some(role) => {
            tracing::info!(role = %role, "Content ready");
            state.windows().mark_ready(role);
        }
        None => tracing::debug!(label = %window.label(), "Ready signal from unmanaged window"),
    }
    Ok(())
}
