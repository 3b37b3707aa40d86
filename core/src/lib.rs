use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod generator;
mod types;

/// Immutable parameters for one game: board dimension and the candidate
/// symbol pool, in the order symbols are drawn from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub alphabet: String,
}

impl GameConfig {
    pub fn new(size: Coord, alphabet: impl Into<String>) -> Self {
        Self {
            size,
            alphabet: alphabet.into(),
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Number of symbol pairs the board needs. Truncates for odd areas;
    /// the generator rejects those before this matters.
    pub const fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }
}

/// The fixed grid of paired symbols for one session. Immutable after
/// construction; every symbol it contains appears exactly twice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Symbol>,
}

impl Board {
    /// Builds a board from a prefilled grid, checking the pairing invariant.
    pub fn new(cells: Array2<Symbol>) -> Result<Self> {
        let dim = cells.dim();
        if dim.0 != dim.1 || dim.0 == 0 || dim.0 > Coord::MAX as usize {
            return Err(GameError::InvalidBoardShape);
        }

        let mut counts: std::collections::BTreeMap<Symbol, u32> = Default::default();
        for &symbol in cells.iter() {
            *counts.entry(symbol).or_default() += 1;
        }
        if counts.values().any(|&n| n != 2) {
            return Err(GameError::UnpairedSymbol);
        }

        Ok(Self { cells })
    }

    /// Convenience constructor for tests and fixed layouts.
    pub fn from_rows(rows: &[&[Symbol]]) -> Result<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(GameError::InvalidBoardShape);
        }
        let flat: Vec<Symbol> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        let cells = Array2::from_shape_vec((size, size), flat)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::new(cells)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }

    pub fn symbol_at(&self, coords: Coord2) -> Symbol {
        self[coords]
    }
}

impl Index<Coord2> for Board {
    type Output = Symbol;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Result of judging one two-card selection.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchOutcome {
    NoMatch,
    Matched,
}

impl MatchOutcome {
    pub const fn is_match(self) -> bool {
        match self {
            Self::NoMatch => false,
            Self::Matched => true,
        }
    }
}
