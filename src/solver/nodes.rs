use crate::data::Dir;
use crate::moves::Moves;

pub(crate) type NodeId = usize;

#[derive(Debug, Clone, Copy)]
struct Node {
    parent: Option<NodeId>,
    action: Option<Dir>,
}

/// Generation tree of the states created during one search.
///
/// Only parent links and actions are stored, the boards live in the frontier.
#[derive(Debug, Default)]
pub(crate) struct Nodes {
    nodes: Vec<Node>,
}

impl Nodes {
    pub(crate) fn new() -> Self {
        Nodes::default()
    }

    pub(crate) fn add(&mut self, parent: Option<NodeId>, action: Option<Dir>) -> NodeId {
        self.nodes.push(Node { parent, action });
        self.nodes.len() - 1
    }

    /// Moves from the root to `last` in the order they're played.
    pub(crate) fn backtrack(&self, last: NodeId) -> Moves {
        let mut moves = Moves::default();
        let mut cur = last;
        loop {
            let node = self.nodes[cur];
            match (node.parent, node.action) {
                (Some(parent), Some(action)) => {
                    moves.add(action);
                    cur = parent;
                }
                _ => {
                    moves.reverse();
                    return moves;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backtracking() {
        let mut nodes = Nodes::new();
        let root = nodes.add(None, None);
        let up = nodes.add(Some(root), Some(Dir::Up));
        let _sibling = nodes.add(Some(root), Some(Dir::Left));
        let up_left = nodes.add(Some(up), Some(Dir::Left));
        let up_left_down = nodes.add(Some(up_left), Some(Dir::Down));

        assert_eq!(nodes.backtrack(root).to_string(), "");
        assert_eq!(nodes.backtrack(up_left_down).to_string(), "uld");
    }
}
