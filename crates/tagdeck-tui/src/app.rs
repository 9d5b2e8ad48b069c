//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! The loop is synchronous: each input event is handled to completion before
//! the next is read, which gives the core its single-threaded turn model —
//! a render never observes the manager mid-mutation, and a submit's outcome
//! is fully applied before another submit can arrive.

use crate::{
    commands::Command,
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        chip_board::{ChipBoard, ChipBoardState},
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        input_bar::{InputBar, InputBarState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::{io, time::Duration};
use tagdeck_core::color::Rgba;
use tagdeck_core::config::Config;
use tagdeck_core::{MemoryStore, SubmitOutcome, TagManager};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Board,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub manager: TagManager,
    pub store: MemoryStore,
    pub config: Config,
    pub theme: Theme,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub input: InputBarState,
    pub board: ChipBoardState,
    pub command_bar: CommandBarState,
    pub show_help: bool,
    /// One-line feedback shown in the status row.
    pub status: Option<String>,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(manager: TagManager, store: MemoryStore, config: Config, theme: Theme) -> Self {
        let focus = if manager.is_editable() {
            Focus::Input
        } else {
            Focus::Board
        };
        let state = AppState {
            manager,
            store,
            config,
            theme,
            focus,
            prev_focus: focus,
            input: InputBarState::default(),
            board: ChipBoardState::default(),
            command_bar: CommandBarState::default(),
            show_help: false,
            status: None,
            quit: false,
        };
        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on
    /// exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &mut self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the input bar)
            AppEvent::Char('?') if s.focus != Focus::Input => {
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the input bar)
            AppEvent::Char(':') if s.focus != Focus::Input => {
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Return focus from the input bar
            AppEvent::Escape => {
                if s.focus == Focus::Input {
                    s.focus = Focus::Board;
                }
            }

            // Cycle focus: input ↔ board (input only exists in edit mode)
            AppEvent::FocusNext => {
                s.focus = match s.focus {
                    Focus::Input => Focus::Board,
                    Focus::Board if s.manager.is_editable() => Focus::Input,
                    other => other,
                };
            }

            AppEvent::QueryFocus if s.manager.is_editable() => {
                s.focus = Focus::Input;
            }

            // Shell-level shortcuts from the board
            AppEvent::Char('v') if s.focus == Focus::Board => toggle_mode(s),
            AppEvent::Char('p') if s.focus == Focus::Board => publish(s),
            AppEvent::Char('r') if s.focus == Focus::Board => refresh(s),
            AppEvent::Char('x') | AppEvent::DeleteChip if s.focus == Focus::Board => {
                delete_selected(s);
            }

            AppEvent::Enter if s.focus == Focus::Input => submit(s),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Input | Focus::Command)
}

// ---------------------------------------------------------------------------
// Shell actions
// ---------------------------------------------------------------------------

/// Submit the staged input text; on success the editor clears and re-raises
/// an empty query, mirroring a cleared text field's change notification.
fn submit(s: &mut AppState) {
    let text = s.input.text.clone();
    match s.manager.submit(&text) {
        SubmitOutcome::Added(name) => {
            tracing::debug!(tag = %name, "tag registered");
            s.input.clear();
            s.manager.query("");
            s.board.scroll_to(&name);
            s.status = Some(format!("added {name:?}"));
        }
        SubmitOutcome::Rejected { input, reason } => {
            tracing::debug!(input = %input, %reason, "submit rejected");
            s.input.flash_error();
            s.status = Some(format!("rejected: {reason}"));
        }
    }
}

fn delete_selected(s: &mut AppState) {
    if !s.manager.is_editable() {
        return;
    }
    let Some(name) = s.manager.ordered().get(s.board.selected).cloned() else {
        return;
    };
    s.manager.delete_tag(&name);
    s.board.handle(&AppEvent::Nav(crate::event::Direction::Left), s.manager.len());
    s.status = Some(format!("deleted {name:?}"));
    tracing::debug!(tag = %name, "tag deleted");
}

fn toggle_mode(s: &mut AppState) {
    let editable = !s.manager.is_editable();
    s.manager.set_editable(editable);
    if !editable && s.focus == Focus::Input {
        s.focus = Focus::Board;
    }
    s.status = Some(format!("{} mode", s.manager.mode()));
}

fn publish(s: &mut AppState) {
    s.manager.publish_to(&mut s.store);
    s.status = Some(format!("published {} tags", s.manager.len()));
}

fn refresh(s: &mut AppState) {
    s.manager.load_from(&s.store);
    s.board = ChipBoardState::default();
    s.status = Some(format!("loaded {} tags", s.manager.len()));
}

/// Execute a parsed [`Command`] against the application state.
fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Mode(editable) => {
            if editable != s.manager.is_editable() {
                toggle_mode(s);
            }
        }
        Command::Theme(dark) => {
            let accent =
                Rgba::parse(&s.config.ui.accent).unwrap_or(Rgba::rgb(95, 175, 255));
            s.theme = if dark {
                Theme::dark(accent)
            } else {
                Theme::light(accent)
            };
        }
        Command::Publish => publish(s),
        Command::Refresh => refresh(s),
        Command::Clear => {
            s.manager.clear();
            s.board = ChipBoardState::default();
            s.status = Some("cleared".to_string());
        }
    }
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Input => {
            if s.input.handle(&event) {
                // Every edit re-applies the query, once per keystroke.
                s.manager.query(&s.input.text);
            }
        }
        Focus::Board => s.board.handle(&event, s.manager.len()),
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let editable = state.manager.is_editable();

    // Vertical: 3-line input bar (edit mode only) | board | 1-line status
    let constraints: &[Constraint] = if editable {
        &[
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]
    } else {
        &[Constraint::Fill(1), Constraint::Length(1)]
    };
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints(constraints.iter().copied())
        .split(area);

    let (input_area, board_area, status_area) = if editable {
        (Some(vert[0]), vert[1], vert[2])
    } else {
        (None, vert[0], vert[1])
    };

    if let Some(input_area) = input_area {
        frame.render_widget(
            InputBar::new(&state.input, state.focus == Focus::Input, &state.theme),
            input_area,
        );
    }

    let entries: Vec<(&str, bool)> = state
        .manager
        .entries()
        .into_iter()
        .map(|e| (e.name.as_str(), e.matches_query))
        .collect();
    let board = ChipBoard::new(
        entries,
        editable,
        state.focus == Focus::Board,
        state.config.ui.chip_spacing,
        &state.theme,
    );
    frame.render_stateful_widget(board, board_area, &mut state.board);

    // Status row: mode, counts, current query, last action.
    let query = state.manager.query_text();
    let mut status = format!(" {} — {} tags", state.manager.mode(), state.manager.len());
    if !query.is_empty() {
        status.push_str(&format!(" — query {query:?}"));
    }
    if let Some(ref msg) = state.status {
        status.push_str(&format!(" — {msg}"));
    }
    frame.render_widget(
        Paragraph::new(Line::from(status)).style(state.theme.status),
        status_area,
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return; // cursor is set; skip input-bar cursor below
    }

    // Position the terminal cursor when the input bar is focused
    if let (Focus::Input, Some(input_area)) = (state.focus, input_area) {
        let bar = InputBar::new(&state.input, true, &state.theme);
        let (cx, cy) = bar.cursor_position(input_area);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}
