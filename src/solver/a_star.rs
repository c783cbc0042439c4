use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fnv::FnvHashMap;

use crate::config::Config;
use crate::state::PuzzleState;

use super::nodes::{NodeId, Nodes};
use super::stats::Stats;
use super::{Deadline, SearchResult};

#[derive(Debug)]
struct SearchNode {
    id: NodeId,
    state: PuzzleState,
    priority: u32,
}

impl SearchNode {
    fn new(id: NodeId, state: PuzzleState, priority: u32) -> Self {
        SearchNode {
            id,
            state,
            priority,
        }
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap,
        // ties go to the deeper state
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.state.path_cost.cmp(&other.state.path_cost))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

/// A* with lazy deletion: improved states are pushed again
/// and the outdated heap entries are skipped when popped.
///
/// Manhattan distance is consistent so the first expansion of a board
/// is always along a shortest path and no closed set is needed.
pub(super) fn search(
    initial_state: &PuzzleState,
    config: &Config,
    stats: &mut Stats,
) -> SearchResult {
    debug!("A* called");

    let deadline = Deadline::new(config.time_limit);
    let mut nodes = Nodes::new();
    let mut to_visit = BinaryHeap::new();
    let mut best_known = FnvHashMap::default();

    let root = initial_state.to_root();
    let root_id = nodes.add(None, None);
    stats.add_created(0);
    best_known.insert(root.clone(), root.evaluation());
    // seeded with 0 instead of the real f-value, the root is popped first either way
    to_visit.push(SearchNode::new(root_id, root, 0));

    while let Some(cur_node) = to_visit.pop() {
        if deadline.expired() {
            return SearchResult::TimedOut;
        }

        let cur = &cur_node.state;
        if best_known
            .get(cur)
            .map_or(false, |&best| cur_node.priority > best)
        {
            stats.add_reached_duplicate(cur.path_cost);
            continue;
        }

        if stats.add_visited(cur.path_cost) && config.print_status {
            stats.print_depth(cur.path_cost);
        }

        if cur.is_goal() {
            debug!("Solved, backtracking path");
            return SearchResult::Solved(nodes.backtrack(cur_node.id));
        }

        for next in cur.generate_successors() {
            let depth = next.path_cost;
            let f = next.evaluation();
            stats.add_created(depth);

            let improves = best_known.get(&next).map_or(true, |&best| f < best);
            if !improves {
                stats.add_reached_duplicate(depth);
                continue;
            }

            let next_id = nodes.add(Some(cur_node.id), next.action);
            best_known.insert(next.clone(), f);
            to_visit.push(SearchNode::new(next_id, next, f));
        }
    }

    SearchResult::NoSolution
}
