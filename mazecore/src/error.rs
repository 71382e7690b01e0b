use thiserror::Error;

use crate::pos::Pos;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid grid dimensions; {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },
    #[error("Position out of bounds; {0}")]
    OutOfBounds(Pos),
    #[error("Cells are not adjacent; {0} and {1}")]
    NotAdjacent(Pos, Pos),
    #[error("Cell is not on the border; {0}")]
    NotOnBorder(Pos),
}

pub type Result<T> = std::result::Result<T, Error>;
