//! Terminal theme — resolves core chip colors into ratatui [`Style`]s.
//!
//! The core hands out [`ChipColors`] with meaningful alpha channels
//! (non-matching chips are de-emphasized by lowering alpha). Terminals have
//! no alpha, so every color is composited over an assumed canvas color for
//! the active mode before it becomes a [`Color::Rgb`]. UI chrome styles
//! (borders, selection, status line) are pre-resolved once at construction —
//! no allocation at render time.

use ratatui::style::{Color, Modifier, Style};
use tagdeck_core::color::{ChipColors, Rgba, ThemeMode};
use tagdeck_core::config::UiConfig;

/// Canvas colors the chips are composited against.
const DARK_CANVAS: Rgba = Rgba::rgb(24, 24, 24);
const LIGHT_CANVAS: Rgba = Rgba::rgb(250, 250, 250);

/// Application theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme mode forwarded into `render_state` for every chip.
    pub mode: ThemeMode,
    /// Border style for the focused pane.
    pub border_focused: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,
    /// Border style flashed on the input bar after a rejected submit.
    pub border_error: Style,
    /// Modifier applied to the selected chip.
    pub selection: Style,
    /// Status line at the bottom of the screen.
    pub status: Style,
    /// Dim placeholder text in the empty input bar.
    pub placeholder: Style,
    canvas: Rgba,
}

impl Theme {
    /// Build a theme from the `[ui]` config section. A malformed accent
    /// string falls back to the built-in accent rather than failing.
    pub fn from_config(ui: &UiConfig) -> Self {
        let accent = Rgba::parse(&ui.accent).unwrap_or(Rgba::rgb(95, 175, 255));
        match ui.theme_mode() {
            ThemeMode::Dark => Self::dark(accent),
            ThemeMode::Light => Self::light(accent),
        }
    }

    pub fn dark(accent: Rgba) -> Self {
        Self::build(ThemeMode::Dark, DARK_CANVAS, accent)
    }

    pub fn light(accent: Rgba) -> Self {
        Self::build(ThemeMode::Light, LIGHT_CANVAS, accent)
    }

    fn build(mode: ThemeMode, canvas: Rgba, accent: Rgba) -> Self {
        let accent_color = to_color(accent);
        Self {
            mode,
            border_focused: Style::default().fg(accent_color),
            border_unfocused: Style::default().add_modifier(Modifier::DIM),
            border_error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            selection: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            status: Style::default().add_modifier(Modifier::DIM),
            placeholder: Style::default().add_modifier(Modifier::DIM),
            canvas,
        }
    }

    /// Style for a chip's label cells: foreground composited over the chip
    /// background, background composited over the canvas.
    pub fn chip_label(&self, colors: &ChipColors) -> Style {
        let bg = colors.background.blend_over(self.canvas);
        let fg = colors.foreground.blend_over(bg);
        Style::default().fg(to_color(fg)).bg(to_color(bg))
    }

    /// Style for the delete-button glyph inside a chip.
    pub fn chip_button(&self, colors: &ChipColors) -> Style {
        let bg = colors.background.blend_over(self.canvas);
        let fg = colors.button_foreground.blend_over(bg);
        Style::default().fg(to_color(fg)).bg(to_color(bg))
    }

    /// Style for the chip's edge glyph. With the border alpha at zero (dark
    /// mode) the edge dissolves into the canvas.
    pub fn chip_edge(&self, colors: &ChipColors) -> Style {
        let fg = colors.border.blend_over(self.canvas);
        Style::default().fg(to_color(fg)).bg(to_color(self.canvas))
    }
}

fn to_color(c: Rgba) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tagdeck_core::color::render_state;

    #[test]
    fn from_config_respects_dark_flag() {
        let mut ui = UiConfig::default();
        assert_eq!(Theme::from_config(&ui).mode, ThemeMode::Dark);
        ui.dark_mode = false;
        assert_eq!(Theme::from_config(&ui).mode, ThemeMode::Light);
    }

    #[test]
    fn malformed_accent_falls_back() {
        let ui = UiConfig {
            accent: "not-a-color".to_string(),
            ..UiConfig::default()
        };
        let theme = Theme::from_config(&ui);
        assert_ne!(theme.border_focused, Style::default());
    }

    #[test]
    fn non_matching_chip_blends_toward_canvas() {
        let theme = Theme::dark(Rgba::rgb(95, 175, 255));
        let matching = render_state("cat", true, theme.mode);
        let faded = render_state("cat", false, theme.mode);

        let bright = theme.chip_label(&matching);
        let dim = theme.chip_label(&faded);
        assert_ne!(bright.bg, dim.bg, "faded chip should blend toward canvas");
    }

    #[test]
    fn dark_mode_edge_matches_canvas() {
        let theme = Theme::dark(Rgba::rgb(95, 175, 255));
        let colors = render_state("cat", true, ThemeMode::Dark);
        let edge = theme.chip_edge(&colors);
        assert_eq!(edge.fg, Some(Color::Rgb(24, 24, 24)));
    }
}
