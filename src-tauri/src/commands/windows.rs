use lune_core::{CommandName, CommandRequest};
use tauri::State;

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn minimize_window(state: State<AppState>) -> CommandResult<()> {
    super::dispatch(&state, CommandRequest::bare(CommandName::MinimizeWindow))
}

#[tauri::command]
pub fn close_app(state: State<AppState>) -> CommandResult<()> {
    super::dispatch(&state, CommandRequest::bare(CommandName::CloseApp))
}

/// Reveal the primary window; the companion's content hears about it through
/// the `show-main-window` event.
#[tauri::command]
pub fn show_main_window(state: State<AppState>) -> CommandResult<()> {
    super::dispatch(&state, CommandRequest::bare(CommandName::ShowMainWindow))
}
