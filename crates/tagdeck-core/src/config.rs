//! Configuration types for tagdeck.
//!
//! [`Config::load`] reads `~/.config/tagdeck/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests), and
//! [`Config::load_from`] reads an explicit path.

use crate::color::ThemeMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r##"
[ui]
dark_mode    = true
chip_spacing = 1
accent       = "#5fafff"

[keybindings]
query_focus = "/"
mode_toggle = "v"
publish     = "p"
refresh     = "r"
delete      = "x"
help        = "?"
"##;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/tagdeck/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    #[serde(default = "default_chip_spacing")]
    pub chip_spacing: u16,
    /// Accent color for the focused border and selection, as `#rrggbb`.
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_dark_mode() -> bool { true }
fn default_chip_spacing() -> u16 { 1 }
fn default_accent() -> String { "#5fafff".to_string() }

impl UiConfig {
    /// Theme mode implied by `dark_mode`.
    pub fn theme_mode(&self) -> ThemeMode {
        if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
            chip_spacing: default_chip_spacing(),
            accent: default_accent(),
        }
    }
}

/// `[keybindings]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_query_focus")]
    pub query_focus: String,
    #[serde(default = "default_mode_toggle")]
    pub mode_toggle: String,
    #[serde(default = "default_publish")]
    pub publish: String,
    #[serde(default = "default_refresh")]
    pub refresh: String,
    #[serde(default = "default_delete")]
    pub delete: String,
    #[serde(default = "default_help")]
    pub help: String,
}

fn default_query_focus() -> String { "/".to_string() }
fn default_mode_toggle() -> String { "v".to_string() }
fn default_publish() -> String { "p".to_string() }
fn default_refresh() -> String { "r".to_string() }
fn default_delete() -> String { "x".to_string() }
fn default_help() -> String { "?".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            query_focus: default_query_focus(),
            mode_toggle: default_mode_toggle(),
            publish: default_publish(),
            refresh: default_refresh(),
            delete: default_delete(),
            help: default_help(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/tagdeck/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }
        Self::load_from(&path)
    }

    /// Load an explicit config file layered on top of the built-in defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("tagdeck")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert!(cfg.ui.dark_mode);
        assert_eq!(cfg.ui.chip_spacing, 1);
        assert_eq!(cfg.ui.accent, "#5fafff");
        assert_eq!(cfg.keybindings.query_focus, "/");
        assert_eq!(cfg.keybindings.delete, "x");
    }

    #[test]
    fn theme_mode_follows_dark_flag() {
        let mut ui = UiConfig::default();
        assert_eq!(ui.theme_mode(), ThemeMode::Dark);
        ui.dark_mode = false;
        assert_eq!(ui.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn user_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndark_mode = false\n").expect("write config");

        let cfg = Config::load_from(&path).expect("load config");
        assert!(!cfg.ui.dark_mode);
        // Untouched keys fall back to the embedded defaults.
        assert_eq!(cfg.ui.chip_spacing, 1);
        assert_eq!(cfg.keybindings.publish, "p");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("nope.toml")).expect("load config");
        assert!(cfg.ui.dark_mode);
    }
}
