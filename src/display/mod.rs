use crate::core::{Board, Cell, PlayerId};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{self, stdout, Write};

#[derive(Default)]
pub struct DisplayState {
    pub cursor: Option<Cell>,
    /// Cells drawn as the winning line
    pub highlights: Vec<Cell>,
    pub status_msg: Option<String>,
    pub last_move: Option<Cell>,
    pub footer: Option<String>,
}

/// Last decimal digit of `n`; frame labels wrap 9 -> 0.
fn label_digit(n: usize) -> char {
    char::from(b'0' + (n % 10) as u8)
}

/// Plain framed board: column numbers in the top frame, row numbers down the left edge.
///
/// ```text
/// +-1-+-2-+-3-+
/// 1 X |   |   |
/// +---+---+---+
/// ```
pub fn board_to_string(board: &Board) -> String {
    let n = board.size();
    let mut out = String::from("+-");
    for col in 0..n {
        if col > 0 {
            out.push_str("-+-");
        }
        out.push(label_digit(col + 1));
    }
    out.push_str("-+\n");

    let divider = format!("+{}---+\n", "---+".repeat(n.saturating_sub(1)));
    for row in 0..n {
        out.push(label_digit(row + 1));
        for col in 0..n {
            let symbol = board
                .occupant(Cell::new(row, col))
                .map_or(' ', |p| p.display_char());
            out.push(' ');
            out.push(symbol);
            out.push_str(" |");
        }
        out.push('\n');
        out.push_str(&divider);
    }
    out
}

/// Clear the screen and draw the board with cursor, last move and winning line.
pub fn render_board(board: &Board, state: &DisplayState) -> io::Result<()> {
    let mut out = stdout();

    // clear instead of scrolling
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    write!(out, "=== N in a Row ===\r\n")?;
    match &state.status_msg {
        Some(msg) => write!(out, "{}\r\n", msg.clone().bold().yellow())?,
        None => write!(out, "\r\n")?,
    }
    write!(out, "\r\n")?;

    // column labels
    write!(out, "    ")?;
    for col in 0..board.size() {
        write!(out, " {:<3}", col + 1)?;
    }
    write!(out, "\r\n")?;
    write!(out, "   +{}+\r\n", "----".repeat(board.size()))?;

    for row in 0..board.size() {
        write!(out, "{:2} |", row + 1)?;
        for col in 0..board.size() {
            let cell = Cell::new(row, col);
            let piece = board.occupant(cell);
            let symbol = piece.map_or('.', |p| p.display_char());

            let is_cursor = state.cursor == Some(cell);
            let is_winning = state.highlights.contains(&cell);
            let is_last_move = state.last_move == Some(cell);

            let (prefix, suffix) = if is_cursor {
                ('[', ']')
            } else if is_last_move {
                ('{', '}')
            } else {
                (' ', ' ')
            };
            let text = format!("{}{}{} ", prefix, symbol, suffix);

            if is_winning {
                write!(out, "{}", text.black().on_green())?;
            } else if is_cursor {
                write!(out, "{}", text.yellow())?;
            } else if is_last_move {
                write!(out, "{}", text.red())?;
            } else if let Some(p) = piece {
                if p.owner == PlayerId::First {
                    write!(out, "{}", text.cyan())?;
                } else {
                    write!(out, "{}", text.magenta())?;
                }
            } else {
                write!(out, "{}", text)?;
            }
        }
        write!(out, "|\r\n")?;
    }
    write!(out, "   +{}+\r\n", "----".repeat(board.size()))?;

    if let Some(footer) = &state.footer {
        write!(out, "{}\r\n", footer)?;
    }
    out.flush()
}
