//! `:` command vocabulary.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `mode <edit\|view>` | Switch the manager's capability mode |
//! | `theme <dark\|light>` | Switch theme |
//! | `publish` | Publish tags to the store |
//! | `refresh` | Reload tags from the store |
//! | `clear` | Remove every tag |

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    /// `true` = edit mode, `false` = viewer mode.
    Mode(bool),
    /// `true` = dark theme.
    Theme(bool),
    Publish,
    Refresh,
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without
    /// acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "publish" => Ok(Command::Publish),
            "refresh" => Ok(Command::Refresh),
            "clear" => Ok(Command::Clear),
            "mode" => match rest {
                "edit" => Ok(Command::Mode(true)),
                "view" | "viewer" => Ok(Command::Mode(false)),
                _ => Err("usage: mode <edit|view>".to_string()),
            },
            "theme" => match rest {
                "dark" => Ok(Command::Theme(true)),
                "light" => Ok(Command::Theme(false)),
                _ => Err("usage: theme <dark|light>".to_string()),
            },
            other => Err(format!("unknown command: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
