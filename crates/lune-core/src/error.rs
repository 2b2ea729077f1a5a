//! Core error types

use serde::Serialize;
use thiserror::Error;

use lune_launcher::LaunchError;
use lune_windows::WindowError;

use crate::command::CommandName;
use crate::fetch::FetchError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Unrecoverable host failure; the process exits instead of reporting it
    /// to a window.
    #[error("Fatal: {0}")]
    Fatal(String),
}

/// Errors raised while crossing the bridge. Host failures never travel this
/// way; they are [`CoreError::Fatal`] and end the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument for {command}: {reason}")]
    InvalidArgument { command: CommandName, reason: String },

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Window(#[from] WindowError),
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::UnknownCommand(_) | BridgeError::InvalidArgument { .. } => {
                ErrorKind::ValidationError
            }
            BridgeError::Launch(LaunchError::UnknownApplication(_)) => {
                ErrorKind::UnknownApplication
            }
            BridgeError::Launch(LaunchError::LaunchFailed { .. }) => ErrorKind::LaunchFailed,
            // The manager logs and swallows backend failures; what reaches
            // the bridge is a request it cannot honor.
            BridgeError::Window(_) => ErrorKind::ValidationError,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    ValidationError,
    UnknownApplication,
    LaunchFailed,
    FetchBlocked,
    FetchFailed,
}

/// What a rejected request looks like to hosted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandError {
    pub kind: ErrorKind,
    pub message: String,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<BridgeError> for CommandError {
    fn from(err: BridgeError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<FetchError> for CommandError {
    fn from(err: FetchError) -> Self {
        let kind = match err {
            FetchError::InvalidUrl(_)
            | FetchError::UnsupportedScheme(_)
            | FetchError::InvalidMethod(_) => ErrorKind::ValidationError,
            FetchError::Blocked(_) => ErrorKind::FetchBlocked,
            FetchError::Failed(_) => ErrorKind::FetchFailed,
        };

        Self {
            kind,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            BridgeError::UnknownCommand("rm-rf".into()).kind(),
            ErrorKind::ValidationError
        );
        assert_eq!(
            BridgeError::from(LaunchError::UnknownApplication("x".into())).kind(),
            ErrorKind::UnknownApplication
        );
        assert_eq!(
            BridgeError::from(LaunchError::LaunchFailed {
                app: "x".into(),
                reason: "y".into(),
            })
            .kind(),
            ErrorKind::LaunchFailed
        );
    }

    #[test]
    fn test_window_errors_stay_in_wire_kinds() {
        for err in [
            WindowError::NotMinimizable(lune_windows::WindowRole::Companion),
            WindowError::Backend("webview gone".into()),
        ] {
            let wire = CommandError::from(BridgeError::from(err));
            assert_eq!(wire.kind, ErrorKind::ValidationError);
        }
    }

    #[test]
    fn test_wire_shape() {
        let err: CommandError =
            BridgeError::from(LaunchError::UnknownApplication("not-a-real-app".into())).into();
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["kind"], "UnknownApplication");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("not-a-real-app"));
    }

    #[test]
    fn test_fetch_kinds() {
        let blocked: CommandError = FetchError::Blocked("https://evil.test".into()).into();
        assert_eq!(blocked.kind, ErrorKind::FetchBlocked);

        let invalid: CommandError = FetchError::InvalidUrl("::".into()).into();
        assert_eq!(invalid.kind, ErrorKind::ValidationError);
    }
}
