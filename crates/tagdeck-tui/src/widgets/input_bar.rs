//! Tag input bar — the single-line editor at the top of the screen.
//!
//! Every keystroke is forwarded to the manager as a query change, so typing
//! simultaneously filters/re-sorts the board and stages the text of a new
//! tag. `Enter` submits; a rejected submit flashes the border until the next
//! keystroke.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InputBarState {
    /// The staged tag text, doubling as the current search query.
    pub text: String,
    /// Byte offset of the cursor within `text`.
    pub cursor: usize,
    /// Set after a rejected submit; cleared by the next edit.
    pub error_flash: bool,
}

impl InputBarState {
    /// Handle a key event while the input bar is focused. Returns `true`
    /// when the staged text changed (the caller re-applies the query).
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        self.error_flash = false;
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(text = %self.text, "input: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    // Walk back one char boundary
                    let prev = self.text[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.text.remove(prev);
                    self.cursor = prev;
                    tracing::debug!(text = %self.text, "input: backspace");
                    true
                } else {
                    false
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.text[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.text.len() {
                    self.cursor = self.text[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.text.len());
                }
                false
            }
            _ => false,
        }
    }

    /// Reset to empty after a successful submit.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.error_flash = false;
    }

    /// Mark the last submit as rejected (border flash until the next edit).
    pub fn flash_error(&mut self) {
        self.error_flash = true;
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct InputBar<'a> {
    state: &'a InputBarState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    pub fn new(state: &'a InputBarState, focused: bool, theme: &'a Theme) -> Self {
        Self {
            state,
            focused,
            theme,
        }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.text[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.state.error_flash {
            self.theme.border_error
        } else if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Add tag").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.text.is_empty() && !self.focused {
            Line::from(Span::styled("press / to add or filter", self.theme.placeholder))
        } else {
            Line::from(self.state.text.as_str())
        };
        Paragraph::new(line).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
