//! OS families and the provider seam

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Windows,
    #[serde(rename = "macos")]
    MacOs,
    /// Every target that is neither Windows nor macOS
    Linux,
}

impl OsFamily {
    pub const ALL: [OsFamily; 3] = [OsFamily::Windows, OsFamily::MacOs, OsFamily::Linux];

    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Windows => "windows",
            OsFamily::MacOs => "macos",
            OsFamily::Linux => "linux",
        }
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OsFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win32" => Ok(OsFamily::Windows),
            "macos" | "darwin" => Ok(OsFamily::MacOs),
            "linux" => Ok(OsFamily::Linux),
            _ => Err(format!("Unknown OS family: {}", s)),
        }
    }
}

/// The OS family this binary was compiled for.
pub fn current_os_family() -> OsFamily {
    if cfg!(target_os = "windows") {
        OsFamily::Windows
    } else if cfg!(target_os = "macos") {
        OsFamily::MacOs
    } else {
        OsFamily::Linux
    }
}

/// Source of the OS family for components that branch per platform.
pub trait OsFamilyProvider: Send + Sync {
    fn os_family(&self) -> OsFamily;
}

/// Reports the compile-time target family.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentOs;

impl OsFamilyProvider for CurrentOs {
    fn os_family(&self) -> OsFamily {
        current_os_family()
    }
}

/// Always reports the same family.
#[derive(Debug, Clone, Copy)]
pub struct FixedOs(pub OsFamily);

impl OsFamilyProvider for FixedOs {
    fn os_family(&self) -> OsFamily {
        self.0
    }
}
