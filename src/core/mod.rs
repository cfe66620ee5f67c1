pub mod board;
pub mod piece;
pub mod setup;
pub mod types;

pub use board::Board;
pub use piece::Piece;
pub use setup::board_from_rows;
pub use types::{Cell, PlayerId};
