//! Ratatui widgets for the tagdeck TUI.

pub mod chip_board;
pub mod command_bar;
pub mod help;
pub mod input_bar;
