//! Window backend over Tauri webview windows

use lune_core::{WindowBackend, WindowError, WindowRole, WindowSpec};
use tauri::{AppHandle, Emitter, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

/// Used when the primary monitor can't be queried.
const FALLBACK_SCREEN: (f64, f64) = (1920.0, 1080.0);

pub struct TauriWindowBackend {
    app: AppHandle,
    dev_tools: bool,
}

impl TauriWindowBackend {
    pub fn new(app: AppHandle, dev_tools: bool) -> Self {
        Self { app, dev_tools }
    }

    fn window(&self, role: WindowRole) -> Result<WebviewWindow, WindowError> {
        self.app
            .get_webview_window(role.label())
            .ok_or_else(|| WindowError::Backend(format!("{} window not found", role)))
    }

    /// Logical size of the primary monitor.
    fn screen_size(&self) -> (f64, f64) {
        match self.app.primary_monitor() {
            Ok(Some(monitor)) => {
                let size = monitor.size().to_logical::<f64>(monitor.scale_factor());
                (size.width, size.height)
            }
            _ => FALLBACK_SCREEN,
        }
    }
}

fn backend_err(e: tauri::Error) -> WindowError {
    WindowError::Backend(e.to_string())
}

impl WindowBackend for TauriWindowBackend {
    fn create(&self, role: WindowRole, spec: &WindowSpec) -> Result<(), WindowError> {
        let (screen_width, screen_height) = self.screen_size();
        let (x, y) = spec.position.resolve(screen_width, screen_height);

        let window = WebviewWindowBuilder::new(
            &self.app,
            role.label(),
            WebviewUrl::App(spec.content.clone().into()),
        )
        .title(&spec.title)
        .inner_size(spec.width, spec.height)
        .position(x, y)
        .decorations(!spec.frameless)
        .resizable(spec.resizable)
        .always_on_top(spec.always_on_top)
        .skip_taskbar(spec.skip_taskbar)
        .transparent(spec.transparent)
        .shadow(spec.shadow)
        .visible(spec.show_on_create)
        .build()
        .map_err(backend_err)?;

        if spec.input_passthrough {
            window.set_ignore_cursor_events(true).map_err(backend_err)?;
        }

        if self.dev_tools && role == WindowRole::Primary {
            window.open_devtools();
        }

        Ok(())
    }

    fn is_alive(&self, role: WindowRole) -> bool {
        self.app.get_webview_window(role.label()).is_some()
    }

    fn show(&self, role: WindowRole) -> Result<(), WindowError> {
        self.window(role)?.show().map_err(backend_err)
    }

    fn hide(&self, role: WindowRole) -> Result<(), WindowError> {
        self.window(role)?.hide().map_err(backend_err)
    }

    fn focus(&self, role: WindowRole) -> Result<(), WindowError> {
        self.window(role)?.set_focus().map_err(backend_err)
    }

    fn emit(&self, role: WindowRole, event: &str) -> Result<(), WindowError> {
        self.app
            .emit_to(role.label(), event, ())
            .map_err(backend_err)
    }

    fn exit(&self, code: i32) {
        self.app.exit(code);
    }
}
