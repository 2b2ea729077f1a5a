//! Window geometry and styling

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "anchor", rename_all = "snake_case")]
pub enum WindowPosition {
    /// Logical offset from the top-left of the primary monitor
    TopLeft { x: f64, y: f64 },
    /// Window origin sits `inset` logical pixels in from the bottom-right corner
    BottomRight { inset: f64 },
}

impl WindowPosition {
    /// Resolve against a monitor of `width` x `height` logical pixels.
    pub fn resolve(&self, width: f64, height: f64) -> (f64, f64) {
        match *self {
            WindowPosition::TopLeft { x, y } => (x, y),
            WindowPosition::BottomRight { inset } => {
                ((width - inset).max(0.0), (height - inset).max(0.0))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub title: String,
    /// Content path, relative to the configured frontend origin
    pub content: String,
    pub width: f64,
    pub height: f64,
    pub position: WindowPosition,
    pub frameless: bool,
    pub resizable: bool,
    pub always_on_top: bool,
    pub skip_taskbar: bool,
    pub transparent: bool,
    pub shadow: bool,
    /// Pointer input falls through to whatever is below the window
    pub input_passthrough: bool,
    /// When false the window stays hidden until its content reports ready
    pub show_on_create: bool,
}

impl WindowSpec {
    pub fn primary() -> Self {
        Self {
            title: "Lune".to_string(),
            content: "index.html".to_string(),
            width: 450.0,
            height: 650.0,
            position: WindowPosition::TopLeft { x: 50.0, y: 50.0 },
            frameless: true,
            resizable: false,
            always_on_top: true,
            skip_taskbar: true,
            transparent: true,
            shadow: true,
            input_passthrough: false,
            show_on_create: false,
        }
    }

    pub fn companion() -> Self {
        Self {
            title: "Lune Companion".to_string(),
            content: "pet.html".to_string(),
            width: 170.0,
            height: 170.0,
            position: WindowPosition::BottomRight { inset: 220.0 },
            frameless: true,
            resizable: false,
            always_on_top: true,
            skip_taskbar: true,
            transparent: true,
            shadow: false,
            input_passthrough: true,
            show_on_create: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_companion_defaults() {
        let spec = WindowSpec::companion();
        assert!(spec.input_passthrough);
        assert!(!spec.shadow);
        assert!(spec.show_on_create);
    }

    #[test]
    fn test_primary_waits_for_content() {
        let spec = WindowSpec::primary();
        assert!(!spec.show_on_create);
        assert!(!spec.input_passthrough);
    }

    #[test]
    fn test_bottom_right_resolution() {
        let pos = WindowPosition::BottomRight { inset: 220.0 };
        assert_eq!(pos.resolve(1920.0, 1080.0), (1700.0, 860.0));
        assert_eq!(pos.resolve(100.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn test_position_json_shape() {
        let pos: WindowPosition =
            serde_json::from_str(r#"{"anchor":"top_left","x":10,"y":20}"#).unwrap();
        assert_eq!(pos, WindowPosition::TopLeft { x: 10.0, y: 20.0 });
    }
}
