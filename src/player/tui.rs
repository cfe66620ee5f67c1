use crate::core::{Board, Cell, PlayerId};
use crate::display::{render_board, DisplayState};
use crate::error::GameError;
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::cell::RefCell;
use std::time::Duration;

/// What a key press did to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep prompting, optionally with a message for the status line
    Continue(Option<String>),
    Select(Cell),
    Quit,
}

/// Cursor over the board. Pure, so it can be driven without a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub cursor: Cell,
}

impl CursorState {
    pub fn centered(size: usize) -> Self {
        CursorState {
            cursor: Cell::new(size / 2, size / 2),
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, board: &Board) -> KeyOutcome {
        let last = board.size().saturating_sub(1);
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor.row = self.cursor.row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor.row = (self.cursor.row + 1).min(last);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor.col = self.cursor.col.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor.col = (self.cursor.col + 1).min(last);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if !board.contains(self.cursor) {
                    return KeyOutcome::Continue(Some("Cursor is off the board".to_string()));
                }
                if !board.is_empty(self.cursor) {
                    return KeyOutcome::Continue(Some(format!(
                        "Cell {} is taken, pick another",
                        self.cursor
                    )));
                }
                return KeyOutcome::Select(self.cursor);
            }
            _ => {}
        }
        KeyOutcome::Continue(None)
    }
}

/// Human at the terminal, moving a cursor with the arrow keys.
pub struct TuiController {
    player_id: PlayerId,
    name: String,
    /// Where the cursor was left last turn
    last_cursor: RefCell<Option<Cell>>,
}

impl TuiController {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            last_cursor: RefCell::new(None),
        }
    }

    fn read_key(&self) -> Result<Option<KeyCode>, GameError> {
        let terminal = |e: std::io::Error| GameError::Terminal(e.to_string());
        if !event::poll(Duration::from_millis(100)).map_err(terminal)? {
            return Ok(None);
        }
        match event::read().map_err(terminal)? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => Ok(Some(code)),
            _ => Ok(None),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn choose_move(&self, board: &Board) -> Result<Cell, GameError> {
        if board.is_full() {
            return Err(GameError::NoLegalMove);
        }

        let mut state = match *self.last_cursor.borrow() {
            Some(cursor) if board.contains(cursor) => CursorState { cursor },
            _ => CursorState::centered(board.size()),
        };
        let mut notice: Option<String> = None;
        let mut dirty = true;

        loop {
            if dirty {
                let display = DisplayState {
                    cursor: Some(state.cursor),
                    status_msg: Some(match &notice {
                        Some(msg) => format!("{}'s turn ({}): {}", self.name, self.player_id, msg),
                        None => format!("{}'s turn ({})", self.name, self.player_id),
                    }),
                    footer: Some(
                        "[Arrows/hjkl]: Move | [Enter/Space]: Place | [q/Esc]: Quit".to_string(),
                    ),
                    ..DisplayState::default()
                };
                render_board(board, &display).map_err(|e| GameError::Terminal(e.to_string()))?;
                dirty = false;
            }

            let Some(code) = self.read_key()? else {
                continue;
            };
            match state.handle_key(code, board) {
                KeyOutcome::Select(cell) => {
                    *self.last_cursor.borrow_mut() = Some(cell);
                    return Ok(cell);
                }
                KeyOutcome::Quit => return Err(GameError::Aborted),
                KeyOutcome::Continue(msg) => {
                    notice = msg;
                    dirty = true;
                }
            }
        }
    }
}
