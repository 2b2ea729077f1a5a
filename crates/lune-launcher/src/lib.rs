//! Lune App Launcher
//!
//! Resolves a logical, platform-independent application name ("vscode",
//! "navegador", ...) to the command for the current OS family and starts it
//! fire-and-forget. Lookup is a closed table: anything not in it is an
//! [`LaunchError::UnknownApplication`].

mod alias;
mod command;
mod error;
mod launcher;
mod spawner;

pub use alias::ApplicationAlias;
pub use command::LaunchCommand;
pub use error::LaunchError;
pub use launcher::{AppLauncher, Launched};
pub use spawner::{DryRunSpawner, ProcessSpawner, SpawnRecord, SystemSpawner};

pub type Result<T> = std::result::Result<T, LaunchError>;
