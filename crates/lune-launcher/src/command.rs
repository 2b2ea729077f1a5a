//! Concrete launch commands

use serde::Serialize;

/// A program plus its arguments, as stored in the alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaunchCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl LaunchCommand {
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }

    pub const fn bare(program: &'static str) -> Self {
        Self { program, args: &[] }
    }
}

/// Renders the command the way it would be typed in a shell, quoting
/// arguments that contain whitespace.
impl std::fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args {
            if arg.chars().any(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
