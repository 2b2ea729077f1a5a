//! Command bridge
//!
//! The only way hosted content reaches the window manager or the launcher.
//! A request is parsed into a [`Command`] first; anything outside the
//! vocabulary or with a malformed argument is rejected before a handler runs.

use lune_launcher::AppLauncher;
use lune_windows::{WindowManager, WindowRole};

use crate::command::{Command, CommandRequest};
use crate::error::BridgeError;

pub struct CommandBridge {
    windows: WindowManager,
    launcher: AppLauncher,
}

impl CommandBridge {
    pub fn new(windows: WindowManager, launcher: AppLauncher) -> Self {
        Self { windows, launcher }
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    /// Validate and run one request. Exactly one outcome per call; nothing
    /// is retried.
    pub fn dispatch(&self, request: CommandRequest) -> Result<(), BridgeError> {
        let name = request.name.clone();
        let command = Command::parse(request).inspect_err(|e| {
            tracing::warn!(command = %name, error = %e, "Rejected bridge request");
        })?;

        tracing::debug!(command = %command.name(), "Dispatching bridge command");
        self.execute(command)
    }

    fn execute(&self, command: Command) -> Result<(), BridgeError> {
        match command {
            Command::OpenApp { app_name } => {
                self.launcher.launch(&app_name)?;
            }
            Command::MinimizeWindow => {
                self.windows.minimize(WindowRole::Primary)?;
            }
            Command::CloseApp => {
                self.windows.close();
            }
            Command::ShowMainWindow => {
                self.windows.reveal_primary();
            }
        }
        Ok(())
    }
}

impl Clone for CommandBridge {
    fn clone(&self) -> Self {
        Self {
            windows: self.windows.clone(),
            launcher: self.launcher.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandName;
    use crate::error::{CommandError, ErrorKind};
    use lune_launcher::DryRunSpawner;
    use lune_platform::{FixedOs, OsFamily};
    use lune_windows::{BackendCall, HeadlessBackend, SHOW_MAIN_WINDOW_EVENT};
    use serde_json::json;
    use std::sync::Arc;

    struct Harness {
        bridge: CommandBridge,
        backend: Arc<HeadlessBackend>,
        spawner: Arc<DryRunSpawner>,
    }

    fn harness(os: OsFamily) -> Harness {
        let backend = Arc::new(HeadlessBackend::new());
        let spawner = Arc::new(DryRunSpawner::new());
        let os = Arc::new(FixedOs(os));

        let windows = WindowManager::new(backend.clone(), os.clone());
        windows.ensure_primary().unwrap();
        windows.ensure_companion().unwrap();
        windows.mark_ready(WindowRole::Primary);

        let launcher = AppLauncher::new(os, spawner.clone());

        Harness {
            bridge: CommandBridge::new(windows, launcher),
            backend,
            spawner,
        }
    }

    fn open_app(name: &str) -> CommandRequest {
        CommandRequest::new("open-app", json!(name))
    }

    #[test]
    fn test_open_app_launches_for_os() {
        let h = harness(OsFamily::MacOs);
        h.bridge.dispatch(open_app("Navegador")).unwrap();

        let records = h.spawner.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].command, r#"open -a "Google Chrome""#);
    }

    #[test]
    fn test_open_unknown_app() {
        let h = harness(OsFamily::Linux);
        let err = h.bridge.dispatch(open_app("not-a-real-app")).unwrap_err();

        let wire = CommandError::from(err);
        assert_eq!(wire.kind, ErrorKind::UnknownApplication);
        assert!(wire.message.contains("not-a-real-app"));
        assert!(h.spawner.records().is_empty());
    }

    #[test]
    fn test_case_insensitive_open() {
        let h = harness(OsFamily::Windows);
        h.bridge.dispatch(open_app("VSCode")).unwrap();
        h.bridge.dispatch(open_app("vscode")).unwrap();

        let records = h.spawner.records();
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn test_launch_failure_reaches_caller() {
        let backend = Arc::new(HeadlessBackend::new());
        let os = Arc::new(FixedOs(OsFamily::Linux));
        let bridge = CommandBridge::new(
            WindowManager::new(backend, os.clone()),
            AppLauncher::new(os, Arc::new(DryRunSpawner::failing("gnome-calculator missing"))),
        );

        let err = bridge.dispatch(open_app("calculadora")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LaunchFailed);
    }

    #[test]
    fn test_unknown_command_never_reaches_a_handler() {
        let h = harness(OsFamily::Linux);
        let before = h.backend.calls();

        for name in ["exec", "Close-App", "open-app\0", "eval"] {
            let err = h
                .bridge
                .dispatch(CommandRequest::new(name, json!("vscode")))
                .unwrap_err();
            assert_eq!(err, BridgeError::UnknownCommand(name.to_string()));
            assert_eq!(err.kind(), ErrorKind::ValidationError);
        }

        assert_eq!(h.backend.calls(), before);
        assert!(h.spawner.records().is_empty());
        assert_eq!(h.backend.exit_code(), None);
    }

    #[test]
    fn test_malformed_argument_is_validation_not_domain() {
        let h = harness(OsFamily::Linux);

        let err = h
            .bridge
            .dispatch(CommandRequest::new("open-app", json!({ "appName": 7 })))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError);

        let err = h
            .bridge
            .dispatch(CommandRequest::new("close-app", json!(true)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError);
        assert_eq!(h.backend.exit_code(), None);
    }

    #[test]
    fn test_minimize_then_show_main_window() {
        let h = harness(OsFamily::Linux);
        let id = h.bridge.windows().handle(WindowRole::Primary).unwrap().id;

        h.bridge
            .dispatch(CommandRequest::bare(CommandName::MinimizeWindow))
            .unwrap();
        let primary = h.bridge.windows().handle(WindowRole::Primary).unwrap();
        assert!(!primary.is_visible());
        assert_eq!(primary.id, id);

        h.bridge
            .dispatch(CommandRequest::bare(CommandName::ShowMainWindow))
            .unwrap();
        let primary = h.bridge.windows().handle(WindowRole::Primary).unwrap();
        assert!(primary.is_visible());
        assert!(primary.focused);
        assert_eq!(
            h.backend.emitted(WindowRole::Companion),
            vec![SHOW_MAIN_WINDOW_EVENT.to_string()]
        );
    }

    #[test]
    fn test_close_app_on_every_platform() {
        for os in OsFamily::ALL {
            let h = harness(os);
            h.bridge
                .dispatch(CommandRequest::bare(CommandName::CloseApp))
                .unwrap();
            assert_eq!(h.backend.exit_code(), Some(0), "on {os}");
            assert!(h.bridge.windows().live_roles().is_empty());
        }
    }

    #[test]
    fn test_show_main_window_without_primary_is_success() {
        let backend = Arc::new(HeadlessBackend::new());
        let os = Arc::new(FixedOs(OsFamily::Linux));
        let bridge = CommandBridge::new(
            WindowManager::new(backend.clone(), os.clone()),
            AppLauncher::new(os, Arc::new(DryRunSpawner::new())),
        );

        assert!(bridge
            .dispatch(CommandRequest::bare(CommandName::ShowMainWindow))
            .is_ok());
        assert!(bridge
            .dispatch(CommandRequest::bare(CommandName::MinimizeWindow))
            .is_ok());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_back_to_back_dispatch_keeps_invocation_order() {
        for (first, second, visible_after) in [
            (CommandName::MinimizeWindow, CommandName::ShowMainWindow, true),
            (CommandName::ShowMainWindow, CommandName::MinimizeWindow, false),
        ] {
            let h = harness(OsFamily::Linux);
            let bridge = Arc::new(h.bridge.clone());

            let a = tokio::spawn({
                let bridge = Arc::clone(&bridge);
                async move { bridge.dispatch(CommandRequest::bare(first)) }
            });
            let b = tokio::spawn({
                let bridge = Arc::clone(&bridge);
                async move { bridge.dispatch(CommandRequest::bare(second)) }
            });

            a.await.unwrap().unwrap();
            b.await.unwrap().unwrap();

            let primary = bridge.windows().handle(WindowRole::Primary).unwrap();
            assert_eq!(primary.is_visible(), visible_after, "{first} then {second}");
        }
    }

    #[test]
    fn test_interleaved_dispatch_loses_no_update() {
        let h = harness(OsFamily::Linux);

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let bridge = &h.bridge;
                scope.spawn(move || {
                    for i in 0..50 {
                        let name = if (worker + i) % 2 == 0 {
                            CommandName::MinimizeWindow
                        } else {
                            CommandName::ShowMainWindow
                        };
                        bridge.dispatch(CommandRequest::bare(name)).unwrap();
                    }
                });
            }
        });

        // The handle must agree with whichever backend call landed last.
        let last = h
            .backend
            .calls()
            .into_iter()
            .rev()
            .find(|c| {
                matches!(
                    c,
                    BackendCall::Show(WindowRole::Primary) | BackendCall::Hide(WindowRole::Primary)
                )
            })
            .unwrap();
        let primary = h.bridge.windows().handle(WindowRole::Primary).unwrap();
        assert_eq!(
            primary.is_visible(),
            last == BackendCall::Show(WindowRole::Primary)
        );
        assert_eq!(h.backend.created_count(WindowRole::Primary), 1);
        assert_eq!(h.bridge.windows().live_roles().len(), 2);
    }
}
