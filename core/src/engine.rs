use core::num::Saturating;
use core::time::Duration;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Valid transitions: Playing -> Won, nothing else.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Won,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Represents a game from board generation to full completion.
///
/// Owns the board, the permanently-revealed mask, the move counter, and the
/// session clock. All I/O lives with the caller; the session only judges
/// selections handed to it.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    revealed: Array2<bool>,
    matched_count: Saturating<CellCount>,
    move_count: u32,
    state: SessionState,
    started_at: Instant,
    ended_at: Option<Instant>,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        let size = usize::from(board.size());
        Self {
            board,
            revealed: Array2::default((size, size)),
            matched_count: Saturating(0),
            move_count: 0,
            state: Default::default(),
            started_at: Instant::now(),
            ended_at: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn pairs_matched(&self) -> CellCount {
        self.matched_count.0 / 2
    }

    pub fn pair_count(&self) -> CellCount {
        self.board.pair_count()
    }

    pub fn is_complete(&self) -> bool {
        self.matched_count == Saturating(self.board.total_cells())
    }

    pub fn card_at(&self, coords: Coord2) -> CardCell {
        if self.revealed[coords.to_nd_index()] {
            CardCell::Matched(self.board[coords])
        } else {
            CardCell::Hidden
        }
    }

    /// Face value regardless of the mask, for the caller's flip preview.
    pub fn symbol_at(&self, coords: Coord2) -> Symbol {
        self.board[coords]
    }

    /// How long the session has run, frozen at the winning move.
    pub fn elapsed(&self) -> Duration {
        self.ended_at
            .unwrap_or_else(Instant::now)
            .duration_since(self.started_at)
    }

    /// Judges one turn's selection.
    ///
    /// Counts a move on every accepted selection, match or not. The
    /// already-matched check is enforced here even though interactive callers
    /// validate at the prompt, so the mask invariant holds under any caller.
    pub fn select_pair(&mut self, first: Coord2, second: Coord2) -> Result<MatchOutcome> {
        let first = self.board.validate_coords(first)?;
        let second = self.board.validate_coords(second)?;
        self.check_playing()?;

        if first == second {
            return Err(GameError::DuplicateSelection);
        }
        if self.revealed[first.to_nd_index()] || self.revealed[second.to_nd_index()] {
            return Err(GameError::AlreadyMatched);
        }

        self.move_count += 1;

        if self.board[first] != self.board[second] {
            return Ok(MatchOutcome::NoMatch);
        }

        self.revealed[first.to_nd_index()] = true;
        self.revealed[second.to_nd_index()] = true;
        self.matched_count += 2;
        log::debug!(
            "matched {:?} at {:?} and {:?}, {}/{} pairs",
            self.board[first],
            first,
            second,
            self.pairs_matched(),
            self.pair_count()
        );

        if self.is_complete() {
            self.mark_won();
        }
        Ok(MatchOutcome::Matched)
    }

    fn mark_won(&mut self) {
        if self.state.is_finished() {
            return;
        }
        self.state = SessionState::Won;
        self.ended_at = Some(Instant::now());
        log::debug!("won in {} moves", self.move_count);
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
