//! Lune Window Lifecycle
//!
//! Owns the two window roles: the primary control surface and the
//! always-on-top companion. At most one live window exists per role, and
//! [`WindowManager`] is the only code allowed to change their visibility or
//! focus. The windowing toolkit sits behind [`WindowBackend`].

mod backend;
mod error;
mod handle;
mod manager;
mod role;
mod spec;

pub use backend::{BackendCall, HeadlessBackend, WindowBackend};
pub use error::WindowError;
pub use handle::{Visibility, WindowHandle};
pub use manager::{LastWindowPolicy, WindowManager, SHOW_MAIN_WINDOW_EVENT};
pub use role::WindowRole;
pub use spec::{WindowPosition, WindowSpec};

pub type Result<T> = std::result::Result<T, WindowError>;
