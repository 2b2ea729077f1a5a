//! Bridge command vocabulary
//!
//! A [`CommandRequest`] is what arrives from hosted content: a name and an
//! untyped argument. [`Command::parse`] turns it into one of the four
//! commands the host will ever run, or rejects it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BridgeError;

/// Longest application name accepted by `open-app`.
const MAX_APP_NAME_LEN: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandName {
    OpenApp,
    MinimizeWindow,
    CloseApp,
    ShowMainWindow,
}

impl CommandName {
    pub const ALL: [CommandName; 4] = [
        CommandName::OpenApp,
        CommandName::MinimizeWindow,
        CommandName::CloseApp,
        CommandName::ShowMainWindow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::OpenApp => "open-app",
            CommandName::MinimizeWindow => "minimize-window",
            CommandName::CloseApp => "close-app",
            CommandName::ShowMainWindow => "show-main-window",
        }
    }
}

impl std::fmt::Display for CommandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exact match only: no case folding, no prefixes.
impl std::str::FromStr for CommandName {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| BridgeError::UnknownCommand(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub name: String,
    #[serde(default)]
    pub argument: Value,
}

impl CommandRequest {
    pub fn new(name: impl Into<String>, argument: Value) -> Self {
        Self {
            name: name.into(),
            argument,
        }
    }

    /// A request for a command that takes no argument.
    pub fn bare(name: CommandName) -> Self {
        Self::new(name.as_str(), Value::Null)
    }
}

/// A validated command, ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenApp { app_name: String },
    MinimizeWindow,
    CloseApp,
    ShowMainWindow,
}

impl Command {
    pub fn name(&self) -> CommandName {
        match self {
            Command::OpenApp { .. } => CommandName::OpenApp,
            Command::MinimizeWindow => CommandName::MinimizeWindow,
            Command::CloseApp => CommandName::CloseApp,
            Command::ShowMainWindow => CommandName::ShowMainWindow,
        }
    }

    /// Check the name against the vocabulary, then the argument's shape.
    pub fn parse(request: CommandRequest) -> Result<Self, BridgeError> {
        let name: CommandName = request.name.parse()?;

        match name {
            CommandName::OpenApp => Ok(Command::OpenApp {
                app_name: app_name_argument(request.argument)?,
            }),
            CommandName::MinimizeWindow => {
                no_argument(name, &request.argument)?;
                Ok(Command::MinimizeWindow)
            }
            CommandName::CloseApp => {
                no_argument(name, &request.argument)?;
                Ok(Command::CloseApp)
            }
            CommandName::ShowMainWindow => {
                no_argument(name, &request.argument)?;
                Ok(Command::ShowMainWindow)
            }
        }
    }
}

/// `open-app` takes either a bare string or `{ "appName": string }`.
fn app_name_argument(argument: Value) -> Result<String, BridgeError> {
    let invalid = |reason: &str| BridgeError::InvalidArgument {
        command: CommandName::OpenApp,
        reason: reason.to_string(),
    };

    let app_name = match argument {
        Value::String(s) => s,
        Value::Object(mut map) => match map.remove("appName") {
            Some(Value::String(s)) if map.is_empty() => s,
            Some(Value::String(_)) => return Err(invalid("unexpected fields besides appName")),
            _ => return Err(invalid("appName must be a string")),
        },
        Value::Null => return Err(invalid("missing application name")),
        _ => return Err(invalid("application name must be a string")),
    };

    if app_name.trim().is_empty() {
        return Err(invalid("application name is empty"));
    }
    if app_name.len() > MAX_APP_NAME_LEN {
        return Err(invalid("application name is too long"));
    }

    Ok(app_name)
}

fn no_argument(command: CommandName, argument: &Value) -> Result<(), BridgeError> {
    match argument {
        Value::Null => Ok(()),
        Value::Object(map) if map.is_empty() => Ok(()),
        _ => Err(BridgeError::InvalidArgument {
            command,
            reason: "takes no argument".to_string(),
        }),
    }
}
