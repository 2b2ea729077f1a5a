//! Launcher error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// Carries the name exactly as the caller supplied it.
    #[error("Unknown application: {0}")]
    UnknownApplication(String),

    #[error("Failed to launch {app}: {reason}")]
    LaunchFailed { app: String, reason: String },
}
