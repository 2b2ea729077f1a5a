//! Application launch command
use lune_core::{CommandName, CommandRequest};
use serde_json::Value;
use tauri::State;

use super::CommandResult;
use crate::state::AppState;

/// Async so the spawn happens off the event loop thread. The argument is
/// taken untyped and validated by the bridge.
#[tauri::command]
pub async fn open_app(state: State<'_, AppState>, app_name: Option<Value>) -> CommandResult<()> {
    super::dispatch(
        &state,
        CommandRequest::new(CommandName::OpenApp.as_str(), app_name.unwrap_or(Value::Null)),
    )
}
