use crate::config::Config;
use crate::data::DIRECTIONS;
use crate::moves::Moves;
use crate::state::PuzzleState;

use super::stats::Stats;
use super::{Deadline, SearchResult};

/// Outcome of searching one subtree.
#[derive(Debug)]
enum Step {
    /// Moves from the subtree's root to the goal, last move first.
    Found(Moves),
    /// Smallest f-value that exceeded the bound, `None` means there's nothing left to explore.
    Bound(Option<u32>),
    Aborted,
}

struct Search<'a> {
    deadline: Deadline,
    stats: &'a mut Stats,
}

impl Search<'_> {
    fn search(&mut self, state: &PuzzleState, bound: u32) -> Step {
        if self.deadline.expired() {
            return Step::Aborted;
        }

        let f = state.evaluation();
        if f > bound {
            return Step::Bound(Some(f));
        }

        self.stats.add_visited(state.path_cost);
        if state.is_goal() {
            return Step::Found(Moves::default());
        }

        let mut min_over = None;
        for &dir in &DIRECTIONS {
            // undoing the last move just returns to the parent
            if state.action == Some(dir.inverse()) {
                continue;
            }
            let next = match state.successor(dir) {
                Some(next) => next,
                None => continue,
            };
            self.stats.add_created(next.path_cost);

            match self.search(&next, bound) {
                Step::Found(mut moves) => {
                    moves.add(dir);
                    return Step::Found(moves);
                }
                Step::Aborted => return Step::Aborted,
                Step::Bound(Some(over)) => {
                    min_over = Some(min_over.map_or(over, |min: u32| min.min(over)));
                }
                Step::Bound(None) => {}
            }
        }
        Step::Bound(min_over)
    }
}

/// Iterative deepening A* - depth first search limited by f-value,
/// the limit is raised to the smallest value that exceeded it until the goal is found.
///
/// Memory is proportional to the solution length, the price is re-expanding
/// the shallow part of the tree in every iteration.
pub(super) fn search(
    initial_state: &PuzzleState,
    config: &Config,
    stats: &mut Stats,
) -> SearchResult {
    debug!("IDA* called");

    let root = initial_state.to_root();
    let mut ida = Search {
        deadline: Deadline::new(config.time_limit),
        stats,
    };

    let mut bound = root.heuristic;
    loop {
        ida.stats.add_bound(bound);
        ida.stats.add_created(0);
        if config.print_status {
            ida.stats.print_bound(bound);
        }

        match ida.search(&root, bound) {
            Step::Found(mut moves) => {
                debug!("Solved with bound {}", bound);
                moves.reverse();
                return SearchResult::Solved(moves);
            }
            Step::Bound(Some(next_bound)) => bound = next_bound,
            Step::Bound(None) => return SearchResult::NoSolution,
            Step::Aborted => return SearchResult::TimedOut,
        }
    }
}
