//! Lune Core
//!
//! The trust boundary between hosted web content and the privileged host.
//! Content may only ask for the commands in [`CommandName`]; everything is
//! validated here before it reaches the window manager or the launcher.

mod bridge;
mod command;
mod config;
mod error;
mod fetch;

pub use bridge::CommandBridge;
pub use command::{Command, CommandName, CommandRequest};
pub use config::Config;
pub use error::{BridgeError, CommandError, CoreError, ErrorKind};
pub use fetch::{FetchError, FetchPolicy, FetchRequest, FetchResponse};

// Re-export core components
pub use lune_launcher::{
    AppLauncher, ApplicationAlias, DryRunSpawner, LaunchCommand, LaunchError, Launched,
    ProcessSpawner, SystemSpawner,
};
pub use lune_platform::{current_os_family, CurrentOs, FixedOs, OsFamily, OsFamilyProvider};
pub use lune_windows::{
    HeadlessBackend, LastWindowPolicy, Visibility, WindowBackend, WindowError, WindowHandle,
    WindowManager, WindowPosition, WindowRole, WindowSpec, SHOW_MAIN_WINDOW_EVENT,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt().with_env_filter(filter).with_target(true).init();
}
