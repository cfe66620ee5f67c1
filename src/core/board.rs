use super::piece::Piece;
use super::types::Cell;
use crate::error::GameError;

/// Square grid of optional pieces. Knows nothing about game rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, `size * size` slots
    cells: Vec<Option<Piece>>,
    occupied: usize,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![None; size * size],
            occupied: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Slot index for `cell`. Out-of-range coordinates are a caller bug.
    fn index(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "cell {} is outside the {}x{} board",
            cell,
            self.size,
            self.size
        );
        cell.row * self.size + cell.col
    }

    /// Store `piece` at its own position. Leaves the board untouched when the cell is taken.
    pub fn place(&mut self, piece: Piece) -> Result<(), GameError> {
        let idx = self.index(piece.position);
        if self.cells[idx].is_some() {
            return Err(GameError::CellOccupied(piece.position));
        }
        self.cells[idx] = Some(piece);
        self.occupied += 1;
        Ok(())
    }

    /// Remove whatever sits on `cell`. No-op on an empty cell.
    pub fn clear(&mut self, cell: Cell) -> Option<Piece> {
        let idx = self.index(cell);
        let removed = self.cells[idx].take();
        if removed.is_some() {
            self.occupied -= 1;
        }
        removed
    }

    pub fn occupant(&self, cell: Cell) -> Option<&Piece> {
        self.cells[self.index(cell)].as_ref()
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        self.occupant(cell).is_none()
    }

    pub fn free_cell_count(&self) -> usize {
        self.cells.len() - self.occupied
    }

    pub fn piece_count(&self) -> usize {
        self.occupied
    }

    pub fn is_full(&self) -> bool {
        self.free_cell_count() == 0
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|slot| *slot = None);
        self.occupied = 0;
    }

    /// Every slot in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Option<&Piece>)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, slot)| (Cell::new(i / size, i % size), slot.as_ref()))
    }

    /// Empty cells in row-major order. Every mover enumerates candidates in this order.
    pub fn free_cells(&self) -> Vec<Cell> {
        self.cells()
            .filter(|(_, piece)| piece.is_none())
            .map(|(cell, _)| cell)
            .collect()
    }
}
