use std::fmt::{self, Debug, Display, Formatter};

use crate::moves::Moves;
use crate::state::PuzzleState;

/// Displays every board along a solution, starting with the initial one.
pub struct SolutionFormatter<'a> {
    initial_state: &'a PuzzleState,
    moves: &'a Moves,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(initial_state: &'a PuzzleState, moves: &'a Moves) -> Self {
        Self {
            initial_state,
            moves,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.initial_state)?;
        let mut last_state = self.initial_state.clone();
        for &dir in self.moves {
            if !last_state.apply_in_place(dir) {
                // moves from a different board, show how far they got
                return writeln!(f, "Illegal move: {}", dir);
            }
            writeln!(f, "{}", last_state)?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PuzzleState {
    pub fn format_solution<'a>(&'a self, moves: &'a Moves) -> SolutionFormatter<'a> {
        SolutionFormatter::new(self, moves)
    }
}
