//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::{layout::Rect, widgets::ListState};
use tictactoe_rules::{GameState, Position, SortOrder};
use tracing::{debug, info, instrument};

use super::input::{digit_cell, move_cursor};
use super::ui::{hit, regions};
use crate::intent::Intent;
use crate::view::{MoveListItem, move_list};

/// Which part of the screen receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    /// Returns the other focus.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// What the event loop should do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Holds the game plus the purely visual bits: board cursor, focus, the
/// highlighted move-list row and the move list's scroll position.
#[derive(Debug, Clone, Getters)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    list_state: ListState,
}

impl App {
    /// Creates a new application with the move list in `order`.
    #[instrument]
    pub fn new(order: SortOrder) -> Self {
        Self {
            game: GameState::with_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// The move list in display order.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        move_list::build(&self.game)
    }

    /// Move-list state synced with the current focus and selection, for
    /// rendering. Ratatui writes the scroll offset back into it.
    pub(super) fn list_state_mut(&mut self) -> &mut ListState {
        let selected = (self.focus == Focus::Moves).then_some(self.selected);
        self.list_state.select(selected);
        &mut self.list_state
    }

    /// Applies an intent to the game.
    ///
    /// The selected move-list row follows its entry when the order flips.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) {
        self.game = intent.apply(&self.game);
        let len = self.game.history().len();
        if intent == Intent::ToggleSort {
            self.selected = (len - 1).saturating_sub(self.selected);
        }
        if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.dispatch(Intent::ToggleSort),
            KeyCode::Char('r') | KeyCode::Char('R') => self.dispatch(Intent::Restart),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            code => {
                if let Some(pos) = digit_cell(code) {
                    self.cursor = pos;
                    self.dispatch(Intent::Play(pos));
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::Moves => self.handle_moves_key(code),
                    }
                }
            }
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Intent::Play(self.cursor)),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let last = self.game.history().len() - 1;
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(target) = self
                    .move_list()
                    .get(self.selected)
                    .and_then(MoveListItem::jump_target)
                {
                    self.dispatch(Intent::JumpTo(target));
                }
            }
            _ => {}
        }
    }

    /// Handles a mouse event; `area` is the full frame area it was drawn in.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);
        let regions = regions(area);

        if let Some(pos) = regions.cell_at(column, row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.dispatch(Intent::Play(pos));
        } else if hit(regions.sort_button, column, row) {
            self.dispatch(Intent::ToggleSort);
        } else if hit(regions.restart_button, column, row) {
            self.dispatch(Intent::Restart);
        } else if let Some(visible_row) = regions.move_row_at(column, row) {
            let index = visible_row + self.list_state.offset();
            let items = self.move_list();
            if let Some(item) = items.get(index) {
                self.focus = Focus::Moves;
                self.selected = index;
                if let Some(target) = item.jump_target() {
                    self.dispatch(Intent::JumpTo(target));
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
