use crate::core::{Board, Cell, Piece};

/// Line directions checked through a piece: vertical, horizontal, diagonal, anti-diagonal.
pub const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Longest same-owner run through one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    pub max_run: usize,
    /// Cells of the longest run, from the negative end of its axis to the positive end
    pub cells: Vec<Cell>,
}

impl LineResult {
    pub fn is_win(&self, win_length: usize) -> bool {
        self.max_run >= win_length
    }
}

/// Measure the longest run of `piece.owner` passing through `piece.position`.
///
/// Point-local: only runs containing the piece are considered, which is enough for the
/// win check because any new line must include the stone that was just placed. The
/// piece itself is counted even if the board does not hold it. When two axes tie,
/// the first one in [`AXES`] is reported.
pub fn longest_line(board: &Board, piece: &Piece) -> LineResult {
    let mut best = LineResult {
        max_run: 0,
        cells: Vec::new(),
    };

    for (dr, dc) in AXES {
        let backward = walk(board, piece, -dr, -dc);
        let forward = walk(board, piece, dr, dc);
        let run = backward.len() + 1 + forward.len();

        if run > best.max_run {
            let mut cells = Vec::with_capacity(run);
            cells.extend(backward.into_iter().rev());
            cells.push(piece.position);
            cells.extend(forward);
            best = LineResult { max_run: run, cells };
        }
    }

    best
}

/// Whether placing `piece` completes a run of at least `win_length`.
pub fn is_winning_move(board: &Board, piece: &Piece, win_length: usize) -> bool {
    // no allocation, stops at the first winning axis
    AXES.iter().any(|&(dr, dc)| {
        let run = 1 + steps(board, piece, -dr, -dc).count() + steps(board, piece, dr, dc).count();
        run >= win_length
    })
}

fn walk(board: &Board, piece: &Piece, dr: isize, dc: isize) -> Vec<Cell> {
    steps(board, piece, dr, dc).collect()
}

/// Contiguous same-owner cells stepping away from the piece, nearest first.
fn steps<'a>(
    board: &'a Board,
    piece: &'a Piece,
    dr: isize,
    dc: isize,
) -> impl Iterator<Item = Cell> + 'a {
    let size = board.size();
    std::iter::successors(Some(piece.position), move |cur| cur.offset(dr, dc, size))
        .skip(1)
        .take_while(move |&cell| {
            matches!(board.occupant(cell), Some(p) if p.owner == piece.owner)
        })
}
