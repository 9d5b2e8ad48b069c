//! tagdeck TUI — ratatui application shell.
//!
//! The shell is the "rendering collaborator" of the core: it feeds submit,
//! delete, and query events into a [`TagManager`] and paints whatever
//! `ordered` entries and chip colors the core hands back.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use tagdeck_core::config::Config;
use tagdeck_core::{MemoryStore, TagManager, TagSource};
use theme::Theme;

/// Launch options resolved from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Launch {
    /// Force the light theme regardless of config.
    pub light: bool,
    /// Start in read-only viewer mode.
    pub viewer: bool,
}

/// Start the TUI seeded from the in-memory demo store.
pub fn run(launch: Launch) -> anyhow::Result<()> {
    let mut config = Config::load().unwrap_or_else(|_| Config::defaults());
    if launch.light {
        config.ui.dark_mode = false;
    }
    let theme = Theme::from_config(&config.ui);

    let store = MemoryStore::demo();
    let mut manager = TagManager::with_tags(store.list_tags());
    if launch.viewer {
        manager.set_editable(false);
    }

    App::new(manager, store, config, theme).run()
}
