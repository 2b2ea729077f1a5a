//! Tauri IPC Commands
//!
//! These commands are the whole surface hosted content can call. The four
//! privileged ones go through [`lune_core::CommandBridge`]; rejections reach
//! the page as `{ kind, message }`.

pub mod apps;
pub mod diagnostics;
pub mod fetch;
pub mod windows;

use lune_core::{CommandError, CommandRequest};

use crate::state::AppState;

pub type CommandResult<T> = Result<T, CommandError>;

fn dispatch(state: &AppState, request: CommandRequest) -> CommandResult<()> {
    state.bridge().dispatch(request).map_err(CommandError::from)
}
