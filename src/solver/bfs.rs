use std::collections::VecDeque;

use fnv::FnvHashSet;

use crate::config::Config;
use crate::state::PuzzleState;

use super::nodes::Nodes;
use super::stats::Stats;
use super::{Deadline, SearchResult};

/// Breadth-first search - optimal since every move costs the same.
///
/// States are deduplicated when they're generated, not when they're dequeued,
/// so each board enters the queue at most once.
pub(super) fn search(
    initial_state: &PuzzleState,
    config: &Config,
    stats: &mut Stats,
) -> SearchResult {
    debug!("BFS called");

    let deadline = Deadline::new(config.time_limit);
    let mut nodes = Nodes::new();
    let mut seen = FnvHashSet::default();
    let mut to_visit = VecDeque::new();

    let root = initial_state.to_root();
    let root_id = nodes.add(None, None);
    stats.add_created(0);
    seen.insert(root.clone());
    to_visit.push_back((root_id, root));

    while let Some((cur_id, cur)) = to_visit.pop_front() {
        if deadline.expired() {
            return SearchResult::TimedOut;
        }

        if stats.add_visited(cur.path_cost) && config.print_status {
            stats.print_depth(cur.path_cost);
        }

        // only reachable for the root, all other goals are caught when generated
        if cur.is_goal() {
            return SearchResult::Solved(nodes.backtrack(cur_id));
        }

        for next in cur.generate_successors() {
            let depth = next.path_cost;
            stats.add_created(depth);
            if seen.contains(&next) {
                stats.add_reached_duplicate(depth);
                continue;
            }

            let next_id = nodes.add(Some(cur_id), next.action);
            if next.is_goal() {
                debug!("Solved, backtracking path");
                stats.add_visited(depth);
                return SearchResult::Solved(nodes.backtrack(next_id));
            }

            seen.insert(next.clone());
            to_visit.push_back((next_id, next));
        }
    }

    SearchResult::NoSolution
}
