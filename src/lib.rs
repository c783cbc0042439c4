// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

#[macro_use]
extern crate log;

pub mod config;
pub mod moves;
pub mod shuffle;
pub mod solution_formatter;
pub mod solver;

mod data;
mod parser;
mod state;
mod vec2d;

use std::error::Error;
use std::fs;
use std::path::Path;

use rand::Rng;

use crate::config::{Config, Method};
use crate::solver::SolverOk;

pub use crate::data::{Dir, Pos, DIRECTIONS, MAX_SIZE};
pub use crate::parser::ParserErr;
pub use crate::state::PuzzleState;

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<PuzzleState, Box<dyn Error>>;
}

impl<P: AsRef<Path> + ?Sized> LoadPuzzle for P {
    fn load_puzzle(&self) -> Result<PuzzleState, Box<dyn Error>> {
        let text = fs::read_to_string(self)?;
        Ok(text.parse()?)
    }
}

pub trait Solve {
    fn solve(&self, method: Method, config: &Config) -> SolverOk;
}

/// Solved board of the given size.
///
/// Panics if `size` is outside `1..=MAX_SIZE`.
pub fn create_puzzle(size: u8) -> PuzzleState {
    PuzzleState::new(size)
}

pub fn shuffle<R: Rng + ?Sized>(state: &PuzzleState, num_moves: usize, rng: &mut R) -> PuzzleState {
    shuffle::shuffle(state, num_moves, rng)
}

pub fn solve(method: Method, state: &PuzzleState, config: &Config) -> SolverOk {
    solver::solve(state, method, config)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn round_trip() {
        let mut rng = StdRng::seed_from_u64(100);
        for &size in &[2, 3] {
            for &k in &[1, 5, 10, 20] {
                let goal = create_puzzle(size);
                let state = shuffle(&goal, k, &mut rng);
                for &method in &Method::ALL {
                    let solution = solve(method, &state, &Config::default());
                    let moves = solution.moves.unwrap();
                    assert!(moves.move_cnt() <= k);
                    assert_eq!(state.apply_moves(&moves).unwrap(), goal);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "unsupported board size 0")]
    fn create_empty_puzzle() {
        create_puzzle(0);
    }

    #[test]
    fn loading_from_file() {
        let path = env::temp_dir().join(format!("sliding-puzzle-{}.txt", std::process::id()));
        fs::write(&path, "1 2 3\n4 5 6\n7 _ 8\n").unwrap();
        let state = path.load_puzzle().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(state.heuristic(), 1);

        assert!("does/not/exist.txt".load_puzzle().is_err());
    }

    #[test]
    fn loading_invalid_file() {
        let path = env::temp_dir().join(format!("sliding-puzzle-bad-{}.txt", std::process::id()));
        fs::write(&path, "1 2\n2 _\n").unwrap();
        let err = path.load_puzzle().unwrap_err();
        fs::remove_file(&path).unwrap();
        assert_eq!(err.to_string(), ParserErr::Duplicate(2).to_string());
    }
}
