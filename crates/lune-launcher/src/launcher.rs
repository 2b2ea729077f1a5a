//! App Launcher

use std::sync::Arc;

use lune_platform::{CurrentOs, OsFamily, OsFamilyProvider};
use serde::Serialize;

use crate::alias::ApplicationAlias;
use crate::command::LaunchCommand;
use crate::error::LaunchError;
use crate::spawner::{ProcessSpawner, SystemSpawner};
use crate::Result;

/// What a successful launch started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Launched {
    pub alias: ApplicationAlias,
    pub os: OsFamily,
    pub command: LaunchCommand,
}

pub struct AppLauncher {
    os: Arc<dyn OsFamilyProvider>,
    spawner: Arc<dyn ProcessSpawner>,
}

impl AppLauncher {
    pub fn new(os: Arc<dyn OsFamilyProvider>, spawner: Arc<dyn ProcessSpawner>) -> Self {
        Self { os, spawner }
    }

    /// Launcher for the running OS that starts real processes.
    pub fn system() -> Self {
        Self::new(Arc::new(CurrentOs), Arc::new(SystemSpawner))
    }

    /// Resolve a name to its command without starting anything.
    pub fn resolve(&self, app_name: &str) -> Result<Launched> {
        let alias = ApplicationAlias::parse(app_name)
            .ok_or_else(|| LaunchError::UnknownApplication(app_name.to_string()))?;
        let os = self.os.os_family();

        Ok(Launched {
            alias,
            os,
            command: alias.command(os),
        })
    }

    /// Resolve and start an application, fire-and-forget.
    pub fn launch(&self, app_name: &str) -> Result<Launched> {
        let launched = match self.resolve(app_name) {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(app = %app_name, "Unknown application requested");
                return Err(e);
            }
        };

        if let Err(e) = self.spawner.spawn(&launched.command, launched.os) {
            tracing::error!(
                app = %app_name,
                os = %launched.os,
                command = %launched.command,
                error = %e,
                "Failed to launch application"
            );
            return Err(LaunchError::LaunchFailed {
                app: app_name.to_string(),
                reason: e.to_string(),
            });
        }

        tracing::info!(
            app = %app_name,
            os = %launched.os,
            command = %launched.command,
            "Launched application"
        );

        Ok(launched)
    }
}

impl Clone for AppLauncher {
    fn clone(&self) -> Self {
        Self {
            os: Arc::clone(&self.os),
            spawner: Arc::clone(&self.spawner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawner::DryRunSpawner;
    use lune_platform::FixedOs;

    fn launcher_for(os: OsFamily) -> (AppLauncher, Arc<DryRunSpawner>) {
        let spawner = Arc::new(DryRunSpawner::new());
        let launcher = AppLauncher::new(Arc::new(FixedOs(os)), spawner.clone());
        (launcher, spawner)
    }

    #[test]
    fn test_system_launcher_resolves_for_running_os() {
        let launched = AppLauncher::system().resolve("Calculator").unwrap();
        assert_eq!(launched.os, lune_platform::current_os_family());
        assert_eq!(launched.alias, ApplicationAlias::Calculator);
    }

    #[test]
    fn test_every_baseline_name_on_every_os() {
        let table: [(&str, [&str; 3]); 6] = [
            ("vscode", ["code", r#"open -a "Visual Studio Code""#, "code"]),
            ("visual studio code", ["code", r#"open -a "Visual Studio Code""#, "code"]),
            ("browser", ["start chrome", r#"open -a "Google Chrome""#, "google-chrome"]),
            ("navegador", ["start chrome", r#"open -a "Google Chrome""#, "google-chrome"]),
            ("calculator", ["calc", "open -a Calculator", "gnome-calculator"]),
            ("calculadora", ["calc", "open -a Calculator", "gnome-calculator"]),
        ];

        for (name, commands) in table {
            for (os, expected) in OsFamily::ALL.into_iter().zip(commands) {
                let (launcher, spawner) = launcher_for(os);
                let launched = launcher.launch(name).unwrap();
                assert_eq!(launched.os, os);
                assert_eq!(launched.command.to_string(), expected, "{name} on {os}");
                assert_eq!(spawner.records().len(), 1);
                assert_eq!(spawner.records()[0].command, expected);
            }
        }
    }

    #[test]
    fn test_unknown_application_keeps_original_name() {
        let (launcher, spawner) = launcher_for(OsFamily::Linux);

        let err = launcher.launch("Not-A-Real-App").unwrap_err();
        assert_eq!(
            err,
            LaunchError::UnknownApplication("Not-A-Real-App".to_string())
        );
        assert!(err.to_string().contains("Not-A-Real-App"));
        assert!(spawner.records().is_empty());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let (launcher, _) = launcher_for(OsFamily::MacOs);
        assert_eq!(
            launcher.resolve("VSCode").unwrap(),
            launcher.resolve("vscode").unwrap()
        );
    }

    #[test]
    fn test_spawn_failure_is_reported() {
        let launcher = AppLauncher::new(
            Arc::new(FixedOs(OsFamily::Linux)),
            Arc::new(DryRunSpawner::failing("google-chrome not found on PATH")),
        );

        match launcher.launch("Browser") {
            Err(LaunchError::LaunchFailed { app, reason }) => {
                assert_eq!(app, "Browser");
                assert!(reason.contains("google-chrome"));
            }
            other => panic!("expected LaunchFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_does_not_spawn() {
        let (launcher, spawner) = launcher_for(OsFamily::Windows);
        let resolved = launcher.resolve("excel").unwrap();
        assert_eq!(resolved.alias, ApplicationAlias::Excel);
        assert_eq!(resolved.command.to_string(), "start excel");
        assert!(spawner.records().is_empty());
    }
}
