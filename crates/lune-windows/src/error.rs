//! Window error types

use thiserror::Error;

use crate::role::WindowRole;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Window backend error: {0}")]
    Backend(String),

    #[error("Window cannot be minimized: {0}")]
    NotMinimizable(WindowRole),
}
