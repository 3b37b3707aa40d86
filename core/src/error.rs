use crate::CellCount;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Symbol pool too small: board needs {needed} symbols, pool has {available}")]
    PoolTooSmall {
        needed: CellCount,
        available: CellCount,
    },
    #[error("Board area is odd, cells cannot be paired")]
    UnpairableBoard,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Every symbol must appear exactly twice")]
    UnpairedSymbol,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Selected the same cell twice")]
    DuplicateSelection,
    #[error("Cell already matched")]
    AlreadyMatched,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    /// Configuration errors are fatal at startup; everything else is a
    /// recoverable selection problem the caller can re-prompt on.
    pub const fn is_config(self) -> bool {
        matches!(
            self,
            Self::PoolTooSmall { .. }
                | Self::UnpairableBoard
                | Self::InvalidBoardShape
                | Self::UnpairedSymbol
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
