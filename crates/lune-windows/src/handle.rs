//! Window handles
//!
//! A handle is the manager's record of one live window. Callers only ever
//! see clones; mutation stays inside [`crate::WindowManager`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::WindowRole;
use crate::spec::WindowSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Shown,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowHandle {
    pub id: String,
    pub role: WindowRole,
    pub visibility: Visibility,
    pub focused: bool,
    pub input_passthrough: bool,
    pub content_ready: bool,
    pub created_at: DateTime<Utc>,
}

impl WindowHandle {
    pub(crate) fn new(role: WindowRole, spec: &WindowSpec) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            visibility: if spec.show_on_create {
                Visibility::Shown
            } else {
                Visibility::Hidden
            },
            focused: false,
            input_passthrough: spec.input_passthrough,
            content_ready: false,
            created_at: Utc::now(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    pub(crate) fn show(&mut self) {
        self.visibility = Visibility::Shown;
    }

    /// A hidden window cannot keep focus.
    pub(crate) fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
        self.focused = false;
    }
}
