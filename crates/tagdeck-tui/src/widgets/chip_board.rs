//! Chip board — wrapping flow layout of tag chips.
//!
//! Chips fill each row left to right in the manager's display order and wrap
//! to the next row when the area width runs out, so matching chips cluster
//! at the top. Each chip is painted from its [`ChipColors`]: an edge glyph
//! in the border color, the label, and (in edit mode) a delete button.
//!
//! Navigation moves a linear selection through display order; `Up`/`Down`
//! use the row layout cached from the previous render so vertical movement
//! lands on the visually nearest chip.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};
use std::ops::Range;
use tagdeck_core::chip::ChipMetrics;
use tagdeck_core::color::render_state;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ChipBoardState {
    /// Index of the selected chip in display order.
    pub selected: usize,
    /// First visible row.
    pub row_offset: usize,
    /// Chip to select and scroll into view on the next render.
    scroll_target: Option<String>,
    /// Row layout from the last render; ranges index into display order.
    rows: Vec<Range<usize>>,
}

impl ChipBoardState {
    /// Handle a key event while the board is focused.
    pub fn handle(&mut self, event: &AppEvent, chip_count: usize) {
        if chip_count == 0 {
            self.selected = 0;
            return;
        }
        let last = chip_count - 1;
        match event {
            AppEvent::Nav(Direction::Left) => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Right) => {
                self.selected = (self.selected + 1).min(last);
            }
            AppEvent::Nav(Direction::Up) => self.move_vertical(-1, last),
            AppEvent::Nav(Direction::Down) => self.move_vertical(1, last),
            AppEvent::ScrollUp => {
                self.row_offset = self.row_offset.saturating_sub(1);
            }
            AppEvent::ScrollDown => {
                // Clamped against the real row count at render time.
                self.row_offset = self.row_offset.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Select `name` and scroll it into view on the next render.
    pub fn scroll_to(&mut self, name: &str) {
        self.scroll_target = Some(name.to_string());
    }

    fn move_vertical(&mut self, delta: isize, last: usize) {
        let Some(row_idx) = self.rows.iter().position(|r| r.contains(&self.selected)) else {
            // No layout yet — fall back to linear movement.
            self.selected = self
                .selected
                .saturating_add_signed(delta)
                .min(last);
            return;
        };
        let column = self.selected - self.rows[row_idx].start;
        let target = row_idx.saturating_add_signed(delta);
        if target >= self.rows.len() {
            return;
        }
        let row = &self.rows[target];
        self.selected = (row.start + column).min(row.end.saturating_sub(1)).min(last);
    }
}

// ---------------------------------------------------------------------------
// Flow layout
// ---------------------------------------------------------------------------

/// Greedy row-wrapping: each chip lands on the current row unless it would
/// overflow the width; a chip wider than the whole area gets a row to
/// itself (and is clipped at render).
pub fn layout_rows(widths: &[u16], spacing: u16, area_width: u16) -> Vec<Range<usize>> {
    let mut rows = Vec::new();
    let mut row_start = 0;
    let mut x: u32 = 0;
    for (i, &w) in widths.iter().enumerate() {
        let needed = if x == 0 { u32::from(w) } else { x + u32::from(spacing) + u32::from(w) };
        if x > 0 && needed > u32::from(area_width) {
            rows.push(row_start..i);
            row_start = i;
            x = u32::from(w);
        } else {
            x = needed;
        }
    }
    if row_start < widths.len() {
        rows.push(row_start..widths.len());
    }
    rows
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ChipBoard<'a> {
    /// (tag text, matches_query) in display order.
    entries: Vec<(&'a str, bool)>,
    editable: bool,
    focused: bool,
    spacing: u16,
    theme: &'a Theme,
}

impl<'a> ChipBoard<'a> {
    pub fn new(
        entries: Vec<(&'a str, bool)>,
        editable: bool,
        focused: bool,
        spacing: u16,
        theme: &'a Theme,
    ) -> Self {
        Self {
            entries,
            editable,
            focused,
            spacing,
            theme,
        }
    }

    fn chip_width(&self, label: &str) -> u16 {
        let label_width = label.chars().count() as u32;
        let (w, _) = ChipMetrics::CELLS.size(label_width, 1, self.editable);
        w.min(u32::from(u16::MAX)) as u16
    }
}

impl StatefulWidget for ChipBoard<'_> {
    type State = ChipBoardState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ChipBoardState) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered()
            .title(format!("Tags ({})", self.entries.len()))
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let widths: Vec<u16> = self
            .entries
            .iter()
            .map(|(label, _)| self.chip_width(label))
            .collect();
        let rows = layout_rows(&widths, self.spacing, inner.width);

        // Resolve a pending scroll target now that indices are known.
        if let Some(target) = state.scroll_target.take() {
            if let Some(idx) = self.entries.iter().position(|(label, _)| *label == target) {
                state.selected = idx;
            }
        }
        if !self.entries.is_empty() {
            state.selected = state.selected.min(self.entries.len() - 1);
        } else {
            state.selected = 0;
        }

        // Keep the selected chip's row visible.
        let visible = usize::from(inner.height).max(1);
        if let Some(sel_row) = rows.iter().position(|r| r.contains(&state.selected)) {
            if sel_row < state.row_offset {
                state.row_offset = sel_row;
            } else if sel_row >= state.row_offset + visible {
                state.row_offset = sel_row + 1 - visible;
            }
        }
        state.row_offset = state.row_offset.min(rows.len().saturating_sub(1));

        for (line_no, row) in rows[state.row_offset.min(rows.len())..]
            .iter()
            .take(visible)
            .enumerate()
        {
            let mut x = inner.x;
            let y = inner.y + line_no as u16;
            for idx in row.clone() {
                let (label, is_match) = self.entries[idx];
                let colors = render_state(label, is_match, self.theme.mode);

                let mut label_style = self.theme.chip_label(&colors);
                if self.focused && idx == state.selected {
                    label_style = label_style.patch(self.theme.selection);
                }

                let mut spans = vec![
                    Span::styled("▎", self.theme.chip_edge(&colors)),
                    Span::styled(format!("{label} "), label_style),
                ];
                if self.editable {
                    spans.push(Span::styled("× ", self.theme.chip_button(&colors)));
                }

                let line = Line::from(spans);
                let remaining = inner.right().saturating_sub(x);
                buf.set_line(x, y, &line, remaining);
                x = x.saturating_add(widths[idx]).saturating_add(self.spacing);
                if x >= inner.right() {
                    break;
                }
            }
        }

        state.rows = rows;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
