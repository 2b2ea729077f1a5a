//! Application alias table
//!
//! Each [`ApplicationAlias`] is one table entry; several spoken names may map
//! to the same entry (English and Spanish variants). Names are exact
//! synonyms after trimming and lowercasing, never fuzzy matches.

use lune_platform::OsFamily;
use serde::Serialize;

use crate::command::LaunchCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationAlias {
    VsCode,
    Browser,
    Calculator,
    TextEditor,
    Word,
    Excel,
}

impl ApplicationAlias {
    pub const ALL: [ApplicationAlias; 6] = [
        ApplicationAlias::VsCode,
        ApplicationAlias::Browser,
        ApplicationAlias::Calculator,
        ApplicationAlias::TextEditor,
        ApplicationAlias::Word,
        ApplicationAlias::Excel,
    ];

    /// Look up a user-supplied application name.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();

        let alias = match normalized.as_str() {
            "vscode" | "visual studio code" => ApplicationAlias::VsCode,
            "browser" | "navegador" => ApplicationAlias::Browser,
            "calculator" | "calculadora" => ApplicationAlias::Calculator,
            "notepad" | "bloc de notas" => ApplicationAlias::TextEditor,
            "word" => ApplicationAlias::Word,
            "excel" => ApplicationAlias::Excel,
            _ => return None,
        };

        Some(alias)
    }

    /// Every name that resolves to this entry.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            ApplicationAlias::VsCode => &["vscode", "visual studio code"],
            ApplicationAlias::Browser => &["browser", "navegador"],
            ApplicationAlias::Calculator => &["calculator", "calculadora"],
            ApplicationAlias::TextEditor => &["notepad", "bloc de notas"],
            ApplicationAlias::Word => &["word"],
            ApplicationAlias::Excel => &["excel"],
        }
    }

    /// The launch command for `os`.
    pub fn command(&self, os: OsFamily) -> LaunchCommand {
        use OsFamily::*;

        match (self, os) {
            (ApplicationAlias::VsCode, Windows) => LaunchCommand::bare("code"),
            (ApplicationAlias::VsCode, MacOs) => {
                LaunchCommand::new("open", &["-a", "Visual Studio Code"])
            }
            (ApplicationAlias::VsCode, Linux) => LaunchCommand::bare("code"),

            (ApplicationAlias::Browser, Windows) => LaunchCommand::new("start", &["chrome"]),
            (ApplicationAlias::Browser, MacOs) => {
                LaunchCommand::new("open", &["-a", "Google Chrome"])
            }
            (ApplicationAlias::Browser, Linux) => LaunchCommand::bare("google-chrome"),

            (ApplicationAlias::Calculator, Windows) => LaunchCommand::bare("calc"),
            (ApplicationAlias::Calculator, MacOs) => LaunchCommand::new("open", &["-a", "Calculator"]),
            (ApplicationAlias::Calculator, Linux) => LaunchCommand::bare("gnome-calculator"),

            (ApplicationAlias::TextEditor, Windows) => LaunchCommand::bare("notepad"),
            (ApplicationAlias::TextEditor, MacOs) => LaunchCommand::new("open", &["-a", "TextEdit"]),
            (ApplicationAlias::TextEditor, Linux) => LaunchCommand::bare("gedit"),

            (ApplicationAlias::Word, Windows) => LaunchCommand::new("start", &["winword"]),
            (ApplicationAlias::Word, MacOs) => {
                LaunchCommand::new("open", &["-a", "Microsoft Word"])
            }
            (ApplicationAlias::Word, Linux) => LaunchCommand::new("libreoffice", &["--writer"]),

            (ApplicationAlias::Excel, Windows) => LaunchCommand::new("start", &["excel"]),
            (ApplicationAlias::Excel, MacOs) => {
                LaunchCommand::new("open", &["-a", "Microsoft Excel"])
            }
            (ApplicationAlias::Excel, Linux) => LaunchCommand::new("libreoffice", &["--calc"]),
        }
    }
}
