use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::{Dir, DIRECTIONS};
use crate::state::PuzzleState;

/// Applies `num_moves` random legal moves, never undoing the previous one.
///
/// The result is always solvable since it's reached by legal moves.
/// If it ends up solved anyway (easy on 2x2 where the empty cell can only circle),
/// it keeps moving until it isn't.
pub fn shuffle<R: Rng + ?Sized>(state: &PuzzleState, num_moves: usize, rng: &mut R) -> PuzzleState {
    let mut shuffled = state.to_root();
    if shuffled.size() < 2 {
        // no legal moves on 1x1
        return shuffled;
    }

    let mut last: Option<Dir> = None;
    let mut done = 0;
    while done < num_moves || (num_moves > 0 && shuffled.is_goal()) {
        let candidates: Vec<Dir> = DIRECTIONS
            .iter()
            .cloned()
            .filter(|&dir| shuffled.is_legal_move(dir) && last != Some(dir.inverse()))
            .collect();
        // every cell has at least 2 neighbors so at most one candidate is ever excluded
        let dir = match candidates.choose(rng) {
            Some(&dir) => dir,
            None => break,
        };
        shuffled.apply_in_place(dir);
        last = Some(dir);
        done += 1;
    }

    debug!("Shuffled with {} moves", done);
    shuffled
}

pub fn shuffle_random(state: &PuzzleState, num_moves: usize) -> PuzzleState {
    shuffle(state, num_moves, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::{Config, Method};
    use crate::Solve;

    #[test]
    fn no_moves() {
        let goal = PuzzleState::new(4);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffle(&goal, 0, &mut rng).is_goal());
        assert!(shuffle(&PuzzleState::new(1), 10, &mut rng).is_goal());
    }

    #[test]
    fn reproducible_with_seed() {
        let goal = PuzzleState::new(4);
        let a = shuffle(&goal, 50, &mut StdRng::seed_from_u64(5));
        let b = shuffle(&goal, 50, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
        assert!(!a.is_goal());
        assert_eq!(a.path_cost(), 0);
        assert_eq!(a.action(), None);
    }

    #[test]
    fn never_ends_solved() {
        // on 2x2 the empty cell is forced around a 12 move cycle back to the goal
        let goal = PuzzleState::new(2);
        let mut rng = StdRng::seed_from_u64(9);
        for num_moves in 1..30 {
            assert!(!shuffle(&goal, num_moves, &mut rng).is_goal());
        }
        assert!(!shuffle_random(&goal, 12).is_goal());
    }

    #[test]
    fn never_reverses() {
        // a reversal would leave the board at an odd distance from the goal
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let state = shuffle(&PuzzleState::new(3), 2, &mut rng);
            let solution = state.solve(Method::Bfs, &Config::default());
            assert_eq!(solution.moves.unwrap().move_cnt(), 2, "{:?}", state);
        }
    }

    #[test]
    fn single_move_is_undone_by_solver() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..10 {
            let state = shuffle(&PuzzleState::new(3), 1, &mut rng);
            let solution = state.solve(Method::Bfs, &Config::default());
            assert_eq!(solution.moves.unwrap().move_cnt(), 1);
        }
    }
}
