//! Stateless UI rendering for the game screen.
//!
//! [`regions`] computes where everything goes for a given terminal area.
//! Both [`draw`] and mouse hit-testing use it, so a click always lands on
//! what was drawn there.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tictactoe_rules::{Player, Position, Square};

use super::app::{App, Focus};
use crate::view::EntryKind;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;
const SORT_BUTTON_WIDTH: u16 = 16;
const RESTART_BUTTON_WIDTH: u16 = 11;

/// Screen areas for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Title bar.
    pub title: Rect,
    /// Status line box.
    pub status: Rect,
    /// Board cells in board order.
    pub cells: [Rect; 9],
    /// Sort toggle button.
    pub sort_button: Rect,
    /// Restart button.
    pub restart_button: Rect,
    /// Move list, including its border.
    pub moves: Rect,
    /// Key help line.
    pub help: Rect,
}

impl Regions {
    /// Returns the cell under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|rect| hit(*rect, column, row))
            .and_then(Position::from_index)
    }

    /// Returns the move-list row under the given coordinates, counted from
    /// the first visible row. Add the list's scroll offset to get the entry.
    pub fn move_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.moves.inner(ratatui::layout::Margin::new(1, 1));
        hit(inner, column, row).then(|| usize::from(row - inner.y))
    }
}

/// Whether `(column, row)` falls inside `rect`.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Lays out the screen for `area`.
pub fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Title
            Constraint::Min(BOARD_HEIGHT + 3),     // Body
            Constraint::Length(3),                 // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(24)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(BOARD_HEIGHT)])
        .split(body[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SORT_BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(RESTART_BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(right[0]);

    let grid = center_rect(left[1], BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(grid);

    let mut cells = [Rect::default(); 9];
    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (c, cell) in cols.iter().enumerate() {
            cells[r * 3 + c] = *cell;
        }
    }

    Regions {
        title: chunks[0],
        status: left[0],
        cells,
        sort_button: buttons[0],
        restart_button: buttons[2],
        moves: right[1],
        help: chunks[2],
    }
}

/// Draws the whole game screen.
///
/// Takes the app mutably so the move list keeps its scroll position
/// between frames.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let regions = regions(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, regions.title);

    let status = Paragraph::new(app.game().status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, regions.status);

    draw_board(frame, &regions, app);
    draw_controls(frame, &regions, app);
    draw_moves(frame, &regions, app);

    let help = Paragraph::new(
        "Arrows: Move | Enter/1-9: Play | Tab: Moves | S: Sort | R: Restart | Q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, regions.help);
}

fn draw_board(frame: &mut Frame, regions: &Regions, app: &App) {
    let board = app.game().current_board();
    let win = app.game().winner();

    for (pos, area) in Position::ALL.iter().zip(regions.cells) {
        let square = board.get(*pos);
        let mut style = match square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            }
            Square::Occupied(Player::O) => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
        };
        if win.is_some_and(|w| w.contains(*pos)) {
            style = style.bg(Color::Green).fg(Color::Black);
        }

        let border = if *app.focus() == Focus::Board && *app.cursor() == *pos {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let cell = Paragraph::new(Line::from(Span::styled(square.symbol(), style)))
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(cell, area);
    }
}

fn draw_controls(frame: &mut Frame, regions: &Regions, app: &App) {
    let button = |label: &'static str| {
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    };
    frame.render_widget(
        button(app.game().order().button_label()),
        regions.sort_button,
    );
    frame.render_widget(button("Restart"), regions.restart_button);
}

fn draw_moves(frame: &mut Frame, regions: &Regions, app: &mut App) {
    let items: Vec<ListItem> = app
        .move_list()
        .into_iter()
        .map(|item| {
            let style = match item.kind() {
                EntryKind::Jump => Style::default().fg(Color::Cyan),
                EntryKind::Current => Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            };
            ListItem::new(item.label().clone()).style(style)
        })
        .collect();

    let title = match app.focus() {
        Focus::Moves => "Moves (Enter: Go)",
        Focus::Board => "Moves",
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(list, regions.moves, app.list_state_mut());
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
