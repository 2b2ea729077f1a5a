//! Window roles

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowRole {
    /// The control surface
    Primary,
    /// The animated always-on-top companion
    Companion,
}

impl WindowRole {
    pub const ALL: [WindowRole; 2] = [WindowRole::Primary, WindowRole::Companion];

    /// Label the toolkit knows the window by.
    pub fn label(&self) -> &'static str {
        match self {
            WindowRole::Primary => "main",
            WindowRole::Companion => "companion",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.label() == label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WindowRole::Primary => "primary",
            WindowRole::Companion => "companion",
        }
    }
}

impl std::fmt::Display for WindowRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
