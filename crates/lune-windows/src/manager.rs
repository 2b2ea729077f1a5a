//! Window Manager
//!
//! Keeps the role invariant (at most one live window per role) and is the
//! sole mutator of window visibility and focus. Every operation holds the
//! handle lock for its full duration, backend calls included, so
//! interleaved requests from either window apply one at a time.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use lune_platform::{OsFamily, OsFamilyProvider};

use crate::backend::WindowBackend;
use crate::error::WindowError;
use crate::handle::WindowHandle;
use crate::role::WindowRole;
use crate::spec::WindowSpec;
use crate::Result;

/// Event delivered to the companion's content when the primary is revealed.
pub const SHOW_MAIN_WINDOW_EVENT: &str = "show-main-window";

/// What the host does once the user has closed every window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastWindowPolicy {
    Quit,
    /// Stay resident until reactivated (macOS convention)
    KeepRunning,
}

type Handles = HashMap<WindowRole, WindowHandle>;

pub struct WindowManager {
    handles: Arc<Mutex<Handles>>,
    backend: Arc<dyn WindowBackend>,
    os: Arc<dyn OsFamilyProvider>,
    primary_spec: WindowSpec,
    companion_spec: WindowSpec,
}

impl WindowManager {
    pub fn new(backend: Arc<dyn WindowBackend>, os: Arc<dyn OsFamilyProvider>) -> Self {
        Self {
            handles: Arc::new(Mutex::new(HashMap::new())),
            backend,
            os,
            primary_spec: WindowSpec::primary(),
            companion_spec: WindowSpec::companion(),
        }
    }

    pub fn with_specs(mut self, primary: WindowSpec, companion: WindowSpec) -> Self {
        self.primary_spec = primary;
        self.companion_spec = companion;
        self
    }

    pub fn spec(&self, role: WindowRole) -> &WindowSpec {
        match role {
            WindowRole::Primary => &self.primary_spec,
            WindowRole::Companion => &self.companion_spec,
        }
    }

    /// Create the primary window unless one is live. It starts hidden and is
    /// shown by [`WindowManager::mark_ready`].
    pub fn ensure_primary(&self) -> Result<WindowHandle> {
        let mut handles = self.handles.lock();
        self.ensure_locked(&mut handles, WindowRole::Primary)
    }

    /// Create the companion window unless one is live.
    pub fn ensure_companion(&self) -> Result<WindowHandle> {
        let mut handles = self.handles.lock();
        self.ensure_locked(&mut handles, WindowRole::Companion)
    }

    /// Record that `role`'s content finished loading. A window that was held
    /// back until ready is shown the first time this happens.
    pub fn mark_ready(&self, role: WindowRole) {
        let mut handles = self.handles.lock();
        let show_on_create = self.spec(role).show_on_create;

        let Some(handle) = self.live_mut(&mut handles, role) else {
            tracing::debug!(role = %role, "Ready signal for missing window ignored");
            return;
        };
        if handle.content_ready {
            return;
        }
        handle.content_ready = true;

        if !show_on_create && !handle.is_visible() {
            match self.backend.show(role) {
                Ok(()) => {
                    handle.show();
                    tracing::info!(role = %role, "Content ready, window shown");
                }
                Err(e) => tracing::warn!(role = %role, error = %e, "Failed to show window"),
            }
        }
    }

    /// The host finished loading content into the window labelled `label`.
    /// Returns the role it belonged to, if any.
    pub fn page_loaded(&self, label: &str) -> Option<WindowRole> {
        let role = WindowRole::from_label(label)?;
        self.mark_ready(role);
        Some(role)
    }

    /// Hide a window without destroying it. Only the primary may be minimized.
    pub fn minimize(&self, role: WindowRole) -> Result<()> {
        if role != WindowRole::Primary {
            return Err(WindowError::NotMinimizable(role));
        }

        let mut handles = self.handles.lock();
        let Some(handle) = self.live_mut(&mut handles, role) else {
            tracing::debug!(role = %role, "Minimize on missing window ignored");
            return Ok(());
        };

        match self.backend.hide(role) {
            Ok(()) => {
                handle.hide();
                tracing::info!(role = %role, "Window minimized");
            }
            Err(e) => tracing::warn!(role = %role, error = %e, "Failed to hide window"),
        }
        Ok(())
    }

    pub fn show(&self, role: WindowRole) {
        let mut handles = self.handles.lock();
        self.show_locked(&mut handles, role);
    }

    pub fn focus(&self, role: WindowRole) {
        let mut handles = self.handles.lock();
        self.focus_locked(&mut handles, role);
    }

    /// Show and focus the primary window, then tell the companion's content.
    /// Returns whether a primary window was there to reveal.
    pub fn reveal_primary(&self) -> bool {
        let mut handles = self.handles.lock();

        if self.live_mut(&mut handles, WindowRole::Primary).is_none() {
            tracing::debug!("Reveal requested with no primary window");
            return false;
        }

        self.show_locked(&mut handles, WindowRole::Primary);
        self.focus_locked(&mut handles, WindowRole::Primary);

        if self.live_mut(&mut handles, WindowRole::Companion).is_some() {
            if let Err(e) = self
                .backend
                .emit(WindowRole::Companion, SHOW_MAIN_WINDOW_EVENT)
            {
                tracing::warn!(error = %e, "Failed to signal companion");
            }
        }

        true
    }

    /// Quit the process. Unconditional on every platform.
    pub fn close(&self) {
        let mut handles = self.handles.lock();
        let released = handles.len();
        handles.clear();
        drop(handles);

        tracing::info!(released, "Closing application");
        self.backend.exit(0);
    }

    /// The OS destroyed `role`'s window; release its handle.
    pub fn window_destroyed(&self, role: WindowRole) {
        if self.handles.lock().remove(&role).is_some() {
            tracing::info!(role = %role, "Window destroyed");
        }
    }

    /// Recreate both windows if none is live. Returns whether it did.
    pub fn reactivate(&self) -> Result<bool> {
        let mut handles = self.handles.lock();

        let any_live = WindowRole::ALL
            .into_iter()
            .any(|role| self.live_mut(&mut handles, role).is_some());
        if any_live {
            return Ok(false);
        }

        tracing::info!("Reactivated with no windows, recreating");
        self.ensure_locked(&mut handles, WindowRole::Primary)?;
        self.ensure_locked(&mut handles, WindowRole::Companion)?;
        Ok(true)
    }

    pub fn last_window_closed_policy(&self) -> LastWindowPolicy {
        match self.os.os_family() {
            OsFamily::MacOs => LastWindowPolicy::KeepRunning,
            OsFamily::Windows | OsFamily::Linux => LastWindowPolicy::Quit,
        }
    }

    /// Snapshot of the live handle for `role`.
    pub fn handle(&self, role: WindowRole) -> Option<WindowHandle> {
        let mut handles = self.handles.lock();
        self.live_mut(&mut handles, role).cloned()
    }

    pub fn live_roles(&self) -> Vec<WindowRole> {
        let mut handles = self.handles.lock();
        WindowRole::ALL
            .into_iter()
            .filter(|role| self.live_mut(&mut handles, *role).is_some())
            .collect()
    }

    /// The handle for `role` if its OS window still exists. Stale handles are
    /// dropped on the way.
    fn live_mut<'a>(
        &self,
        handles: &'a mut Handles,
        role: WindowRole,
    ) -> Option<&'a mut WindowHandle> {
        if handles.contains_key(&role) && !self.backend.is_alive(role) {
            tracing::debug!(role = %role, "Dropping stale window handle");
            handles.remove(&role);
        }
        handles.get_mut(&role)
    }

    fn ensure_locked(&self, handles: &mut Handles, role: WindowRole) -> Result<WindowHandle> {
        if let Some(handle) = self.live_mut(handles, role) {
            tracing::debug!(role = %role, window_id = %handle.id, "Window already live");
            return Ok(handle.clone());
        }

        let spec = self.spec(role);
        self.backend.create(role, spec)?;

        let handle = WindowHandle::new(role, spec);
        tracing::info!(
            role = %role,
            window_id = %handle.id,
            visible = handle.is_visible(),
            "Created window"
        );
        handles.insert(role, handle.clone());

        Ok(handle)
    }

    fn show_locked(&self, handles: &mut Handles, role: WindowRole) {
        let Some(handle) = self.live_mut(handles, role) else {
            tracing::debug!(role = %role, "Show on missing window ignored");
            return;
        };

        match self.backend.show(role) {
            Ok(()) => handle.show(),
            Err(e) => tracing::warn!(role = %role, error = %e, "Failed to show window"),
        }
    }

    fn focus_locked(&self, handles: &mut Handles, role: WindowRole) {
        let Some(handle) = self.live_mut(handles, role) else {
            tracing::debug!(role = %role, "Focus on missing window ignored");
            return;
        };

        if let Err(e) = self.backend.focus(role) {
            tracing::warn!(role = %role, error = %e, "Failed to focus window");
            return;
        }
        handle.focused = true;

        for (other_role, other) in handles.iter_mut() {
            if *other_role != role {
                other.focused = false;
            }
        }
    }
}

impl Clone for WindowManager {
    fn clone(&self) -> Self {
        Self {
            handles: Arc::clone(&self.handles),
            backend: Arc::clone(&self.backend),
            os: Arc::clone(&self.os),
            primary_spec: self.primary_spec.clone(),
            companion_spec: self.companion_spec.clone(),
        }
    }
}
