//! Chip geometry contract.
//!
//! The rendering surface asks [`ChipMetrics::size`] how much room a chip
//! needs before laying chips out in a wrapping flow. The contract is
//! unit-agnostic: the constants can describe pixels for a raster surface or
//! terminal cells for a TUI.

/// Sizing constants for a chip surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipMetrics {
    /// Horizontal padding around the label.
    pub width_padding: u32,
    /// Width reserved for the delete button when editing is enabled.
    pub delete_button_width: u32,
    /// Minimum chip height regardless of label height.
    pub min_height: u32,
    /// Vertical padding added on top of the label height.
    pub height_padding: u32,
}

impl ChipMetrics {
    /// Metrics for a one-row-per-chip terminal cell grid.
    pub const CELLS: Self = Self {
        width_padding: 2,
        delete_button_width: 2,
        min_height: 1,
        height_padding: 0,
    };

    /// Compute the (width, height) a chip occupies.
    ///
    /// The delete button is only reserved while editing is enabled; in
    /// viewer mode chips shrink to the label alone.
    pub fn size(&self, label_width: u32, label_height: u32, editable: bool) -> (u32, u32) {
        let button = if editable { self.delete_button_width } else { 0 };
        let width = self.width_padding + label_width + button;
        let height = self.height_padding + label_height.max(self.min_height);
        (width, height)
    }
}

impl Default for ChipMetrics {
    fn default() -> Self {
        Self::CELLS
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_mode_drops_the_delete_button() {
        let metrics = ChipMetrics::CELLS;
        let (edit_w, _) = metrics.size(5, 1, true);
        let (view_w, _) = metrics.size(5, 1, false);
        assert_eq!(edit_w - view_w, metrics.delete_button_width);
    }

    #[test]
    fn height_never_drops_below_minimum() {
        let metrics = ChipMetrics {
            width_padding: 20,
            delete_button_width: 24,
            min_height: 20,
            height_padding: 2,
        };
        let (_, h) = metrics.size(40, 12, true);
        assert_eq!(h, 22);
        let (_, tall) = metrics.size(40, 36, true);
        assert_eq!(tall, 38);
    }
}
