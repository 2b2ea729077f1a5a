//! Window backends
//!
//! [`WindowBackend`] is everything the manager needs from a windowing
//! toolkit. The host implements it over real webview windows;
//! [`HeadlessBackend`] keeps the same bookkeeping in memory.

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::error::WindowError;
use crate::role::WindowRole;
use crate::spec::WindowSpec;
use crate::Result;

pub trait WindowBackend: Send + Sync {
    /// Build and open the OS window for `role`.
    fn create(&self, role: WindowRole, spec: &WindowSpec) -> Result<()>;

    /// Whether the OS window for `role` still exists.
    fn is_alive(&self, role: WindowRole) -> bool;

    fn show(&self, role: WindowRole) -> Result<()>;

    /// Hide without destroying; position and size are kept.
    fn hide(&self, role: WindowRole) -> Result<()>;

    fn focus(&self, role: WindowRole) -> Result<()>;

    /// Deliver a named event to the content hosted in `role`'s window.
    fn emit(&self, role: WindowRole, event: &str) -> Result<()>;

    /// Terminate the process.
    fn exit(&self, code: i32);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Create(WindowRole),
    Show(WindowRole),
    Hide(WindowRole),
    Focus(WindowRole),
    Emit(WindowRole, String),
    Exit(i32),
}

#[derive(Debug, Default)]
struct HeadlessState {
    alive: HashSet<WindowRole>,
    calls: Vec<BackendCall>,
    exit_code: Option<i32>,
}

/// In-memory backend with no windowing system behind it.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    state: Mutex<HeadlessState>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the OS tearing down a window (e.g. closed by the user).
    pub fn destroy(&self, role: WindowRole) {
        self.state.lock().alive.remove(&role);
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.state.lock().calls.clone()
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.state.lock().exit_code
    }

    pub fn created_count(&self, role: WindowRole) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| **c == BackendCall::Create(role))
            .count()
    }

    pub fn emitted(&self, role: WindowRole) -> Vec<String> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                BackendCall::Emit(r, event) if *r == role => Some(event.clone()),
                _ => None,
            })
            .collect()
    }

    fn record_live(&self, role: WindowRole, call: BackendCall) -> Result<()> {
        let mut state = self.state.lock();
        if !state.alive.contains(&role) {
            return Err(WindowError::Backend(format!("{} window is gone", role)));
        }
        state.calls.push(call);
        Ok(())
    }
}

impl WindowBackend for HeadlessBackend {
    fn create(&self, role: WindowRole, _spec: &WindowSpec) -> Result<()> {
        let mut state = self.state.lock();
        if !state.alive.insert(role) {
            return Err(WindowError::Backend(format!(
                "{} window already exists",
                role
            )));
        }
        state.calls.push(BackendCall::Create(role));
        Ok(())
    }

    fn is_alive(&self, role: WindowRole) -> bool {
        self.state.lock().alive.contains(&role)
    }

    fn show(&self, role: WindowRole) -> Result<()> {
        self.record_live(role, BackendCall::Show(role))
    }

    fn hide(&self, role: WindowRole) -> Result<()> {
        self.record_live(role, BackendCall::Hide(role))
    }

    fn focus(&self, role: WindowRole) -> Result<()> {
        self.record_live(role, BackendCall::Focus(role))
    }

    fn emit(&self, role: WindowRole, event: &str) -> Result<()> {
        self.record_live(role, BackendCall::Emit(role, event.to_string()))
    }

    fn exit(&self, code: i32) {
        let mut state = self.state.lock();
        state.alive.clear();
        state.calls.push(BackendCall::Exit(code));
        state.exit_code = Some(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_create_is_rejected() {
        let backend = HeadlessBackend::new();
        backend
            .create(WindowRole::Primary, &WindowSpec::primary())
            .unwrap();
        assert!(backend
            .create(WindowRole::Primary, &WindowSpec::primary())
            .is_err());
        assert_eq!(backend.created_count(WindowRole::Primary), 1);
    }

    #[test]
    fn test_calls_on_destroyed_window_fail() {
        let backend = HeadlessBackend::new();
        backend
            .create(WindowRole::Companion, &WindowSpec::companion())
            .unwrap();
        backend.destroy(WindowRole::Companion);

        assert!(!backend.is_alive(WindowRole::Companion));
        assert!(backend.show(WindowRole::Companion).is_err());
    }

    #[test]
    fn test_exit_tears_everything_down() {
        let backend = HeadlessBackend::new();
        backend
            .create(WindowRole::Primary, &WindowSpec::primary())
            .unwrap();
        backend.exit(0);

        assert_eq!(backend.exit_code(), Some(0));
        assert!(!backend.is_alive(WindowRole::Primary));
    }
}
