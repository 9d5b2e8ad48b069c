//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] on every
//! [`crossterm::event::Event`] and match on the returned [`AppEvent`]
//! instead of crossterm types.
//!
//! # Keybindings
//!
//! Defaults are hardcoded and mirror the values documented in the
//! `[keybindings]` config section.
//!
//! | Key(s)               | Event              |
//! |----------------------|--------------------|
//! | `q`, `Ctrl+c`        | `Quit`             |
//! | `Tab`                | `FocusNext`        |
//! | `/`                  | `QueryFocus`       |
//! | `PageUp`, `Ctrl+u`   | `ScrollUp`         |
//! | `PageDown`, `Ctrl+d` | `ScrollDown`       |
//! | `↑` / `k`            | `Nav(Up)`          |
//! | `↓` / `j`            | `Nav(Down)`        |
//! | `←` / `h`            | `Nav(Left)`        |
//! | `→` / `l`            | `Nav(Right)`       |
//! | `Delete`             | `DeleteChip`       |
//! | printable char       | `Char(c)`          |
//! | `Backspace`          | `Backspace`        |
//! | `Enter`              | `Enter`            |
//! | terminal resize      | `Resize(w, h)`     |
//!
//! `v` (mode toggle), `p` (publish), `r` (refresh), `x` (delete), `?`
//! (help), and `:` (command bar) arrive as plain `Char` events and are
//! routed by the app shell.
//!
//! ## Insert mode
//!
//! When the input bar or command bar is focused, the event loop calls
//! [`to_app_event_insert`] instead. In insert mode hjkl and q produce
//! `Char` events so the user can type freely; arrow keys still produce
//! `Nav` for cursor movement, and only `Ctrl+c`, `Escape`, `Enter`, `Tab`,
//! and `Backspace` keep their special bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Cardinal direction for chip-board navigation and text-cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
///
/// Widgets receive `AppEvent` values — they never inspect crossterm types
/// directly. The app shell routes events to the focused widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move keyboard focus to the next pane.
    FocusNext,
    /// Transfer focus to the tag input bar.
    QueryFocus,
    /// Scroll the chip board up one row.
    ScrollUp,
    /// Scroll the chip board down one row.
    ScrollDown,
    /// Move the chip selection (or the text cursor in insert mode).
    Nav(Direction),
    /// Delete the selected chip.
    DeleteChip,
    /// A printable character forwarded to the active text input.
    Char(char),
    /// Delete the character before the cursor in the active text input.
    Backspace,
    /// Confirm the active input.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Dismiss the active modal (input focus, help popup, command bar).
    Escape,
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal mode).
///
/// Returns `None` for events that carry no semantic meaning for the
/// application (mouse events, key releases, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input
/// ("insert") mode.
///
/// Call this variant whenever the input bar or command bar has focus.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        Char('/') if key.modifiers == Mod::NONE => Some(AppEvent::QueryFocus),

        PageUp => Some(AppEvent::ScrollUp),
        PageDown => Some(AppEvent::ScrollDown),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollDown),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),
        Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Char('l') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Right)),

        Delete => Some(AppEvent::DeleteChip),
        Enter => Some(AppEvent::Enter),
        Backspace => Some(AppEvent::Backspace),
        Esc => Some(AppEvent::Escape),

        // Printable fallback: `v`, `p`, `r`, `x`, `?`, `:` and friends are
        // routed by the app shell.
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }
        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        Enter => Some(AppEvent::Enter),
        Backspace => Some(AppEvent::Backspace),
        Esc => Some(AppEvent::Escape),

        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),
        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn normal_mode_binds_navigation_letters() {
        assert_eq!(to_app_event(key(KeyCode::Char('q'))), Some(AppEvent::Quit));
        assert_eq!(
            to_app_event(key(KeyCode::Char('j'))),
            Some(AppEvent::Nav(Direction::Down))
        );
        assert_eq!(
            to_app_event(key(KeyCode::Char('/'))),
            Some(AppEvent::QueryFocus)
        );
    }

    #[test]
    fn insert_mode_forwards_letters_as_chars() {
        assert_eq!(
            to_app_event_insert(key(KeyCode::Char('q'))),
            Some(AppEvent::Char('q'))
        );
        assert_eq!(
            to_app_event_insert(key(KeyCode::Char('j'))),
            Some(AppEvent::Char('j'))
        );
        assert_eq!(to_app_event_insert(ctrl('c')), Some(AppEvent::Quit));
    }

    #[test]
    fn arrows_move_the_cursor_in_both_modes() {
        assert_eq!(
            to_app_event(key(KeyCode::Left)),
            Some(AppEvent::Nav(Direction::Left))
        );
        assert_eq!(
            to_app_event_insert(key(KeyCode::Left)),
            Some(AppEvent::Nav(Direction::Left))
        );
    }
}
