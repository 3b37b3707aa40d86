use crate::Symbol;
use serde::{Deserialize, Serialize};

/// Player-visible state of one cell as tracked by the session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardCell {
    Hidden,
    Matched(Symbol),
}

impl CardCell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for CardCell {
    fn default() -> Self {
        Self::Hidden
    }
}
