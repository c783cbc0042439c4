use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::data::{Dir, Pos, DIRECTIONS, MAX_SIZE};
use crate::moves::Moves;
use crate::vec2d::Vec2d;

/// One configuration of the board plus what the search needs to know about it.
///
/// Equality and hashing only look at the board so states reached
/// by different paths are the same state.
#[derive(Clone)]
pub struct PuzzleState {
    pub(crate) board: Vec2d<u8>,
    pub(crate) empty: Pos,
    pub(crate) path_cost: u32,
    pub(crate) heuristic: u32,
    pub(crate) action: Option<Dir>,
}

impl PuzzleState {
    /// The solved board: `1..N*N-1` row by row, empty cell last.
    ///
    /// Panics if `size` is outside `1..=MAX_SIZE`.
    pub fn new(size: u8) -> Self {
        assert!(size > 0 && size <= MAX_SIZE, "unsupported board size {}", size);

        let last = u32::from(size) * u32::from(size) - 1;
        let board = Vec2d::from_fn(size, |pos| {
            let index = u32::from(pos.r) * u32::from(size) + u32::from(pos.c);
            if index == last {
                0
            } else {
                (index + 1) as u8
            }
        });
        PuzzleState::from_board(board)
    }

    /// The board must contain exactly one zero - the parser checks that for text input.
    pub(crate) fn from_board(board: Vec2d<u8>) -> Self {
        let empty = board
            .cells()
            .find(|&(_, &tile)| tile == 0)
            .map(|(pos, _)| pos)
            .expect("board without an empty cell");
        let heuristic = manhattan(&board);
        PuzzleState {
            board,
            empty,
            path_cost: 0,
            heuristic,
            action: None,
        }
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn tile(&self, pos: Pos) -> u8 {
        self.board[pos]
    }

    pub fn empty_pos(&self) -> Pos {
        self.empty
    }

    /// Rows of the board, `0` is the empty cell.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.board.rows().map(|row| row.to_vec()).collect()
    }

    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// f-value used by A* and IDA*.
    pub fn evaluation(&self) -> u32 {
        self.path_cost + self.heuristic
    }

    /// Move that produced this state from its parent.
    pub fn action(&self) -> Option<Dir> {
        self.action
    }

    pub fn is_goal(&self) -> bool {
        let size = u32::from(self.size());
        self.board.cells().all(|(pos, &tile)| {
            tile == 0 || u32::from(tile) == u32::from(pos.r) * size + u32::from(pos.c) + 1
        })
    }

    pub fn is_legal_move(&self, dir: Dir) -> bool {
        self.empty.step(dir, self.size()).is_some()
    }

    /// Slides the neighboring tile into the empty cell.
    /// Returns false and leaves the state untouched if the move leaves the board.
    pub fn apply_in_place(&mut self, dir: Dir) -> bool {
        match self.empty.step(dir, self.size()) {
            None => false,
            Some(target) => {
                self.heuristic = self.moved_heuristic(target);
                self.board.swap(self.empty, target);
                self.empty = target;
                true
            }
        }
    }

    /// Applies all moves to a copy, `None` if any of them is illegal.
    pub fn apply_moves(&self, moves: &Moves) -> Option<PuzzleState> {
        let mut state = self.clone();
        for &dir in moves {
            if !state.apply_in_place(dir) {
                return None;
            }
        }
        Some(state)
    }

    /// Between 2 and 4 new states one move away (none for a 1x1 board).
    pub fn generate_successors(&self) -> Vec<PuzzleState> {
        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.successor(dir))
            .collect()
    }

    /// New state with the empty cell moved in `dir`, one step further from the root.
    pub fn successor(&self, dir: Dir) -> Option<PuzzleState> {
        let target = self.empty.step(dir, self.size())?;
        let mut board = self.board.clone();
        board.swap(self.empty, target);
        Some(PuzzleState {
            board,
            empty: target,
            path_cost: self.path_cost + 1,
            heuristic: self.moved_heuristic(target),
            action: Some(dir),
        })
    }

    /// Same board with no history - what the search starts from.
    pub(crate) fn to_root(&self) -> PuzzleState {
        PuzzleState {
            path_cost: 0,
            action: None,
            ..self.clone()
        }
    }

    /// Heuristic after the tile at `target` slides into the empty cell.
    /// Only that one tile changes its distance.
    fn moved_heuristic(&self, target: Pos) -> u32 {
        let tile = self.board[target];
        let goal = goal_pos(tile, self.size());
        self.heuristic + self.empty.dist(goal) - target.dist(goal)
    }
}

fn goal_pos(tile: u8, size: u8) -> Pos {
    let index = tile - 1;
    Pos::new(index / size, index % size)
}

fn manhattan(board: &Vec2d<u8>) -> u32 {
    board
        .cells()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(pos, &tile)| pos.dist(goal_pos(tile, board.size())))
        .sum()
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

impl Display for PuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let largest = u32::from(self.size()) * u32::from(self.size()) - 1;
        let width = largest.to_string().len();
        for row in self.board.rows() {
            for (i, &tile) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if tile == 0 {
                    write!(f, "{:>width$}", "_", width = width)?;
                } else {
                    write!(f, "{:>width$}", tile, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for PuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn state(rows: &[Vec<u8>]) -> PuzzleState {
        PuzzleState::from_board(Vec2d::new(rows))
    }

    #[test]
    fn goal_board() {
        let goal = PuzzleState::new(3);
        assert_eq!(
            goal.rows(),
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]
        );
        assert_eq!(goal.empty_pos(), Pos::new(2, 2));
        assert!(goal.is_goal());
        assert_eq!(goal.heuristic(), 0);
        assert_eq!(goal.path_cost(), 0);
        assert_eq!(goal.action(), None);

        assert!(PuzzleState::new(1).is_goal());
        assert!(PuzzleState::new(1).generate_successors().is_empty());
    }

    #[test]
    fn manhattan_heuristic() {
        let one_off = state(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]);
        assert!(!one_off.is_goal());
        assert_eq!(one_off.heuristic(), 1);
        assert_eq!(one_off.empty_pos(), Pos::new(2, 1));

        // 8 and 1 swapped: 8 is 3 away from home, 1 is 3 away
        let swapped = state(&[vec![8, 2, 3], vec![4, 5, 6], vec![7, 1, 0]]);
        assert_eq!(swapped.heuristic(), 6);
        assert_eq!(swapped.evaluation(), 6);
    }

    #[test]
    fn successor_counts() {
        let corner = PuzzleState::new(3);
        assert_eq!(corner.generate_successors().len(), 2);

        let edge = state(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]);
        assert_eq!(edge.generate_successors().len(), 3);

        let interior = state(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]);
        assert_eq!(interior.generate_successors().len(), 4);
    }

    #[test]
    fn successors_differ_by_one_swap() {
        let parent = state(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]);
        let before = parent.clone();
        for succ in parent.generate_successors() {
            assert_eq!(succ.path_cost(), parent.path_cost() + 1);
            assert_eq!(succ.heuristic(), manhattan(&succ.board));
            assert_eq!(succ.empty_pos().dist(parent.empty_pos()), 1);

            let dir = succ.action().unwrap();
            assert_eq!(parent.empty_pos().step(dir, 3), Some(succ.empty_pos()));

            let differing = parent
                .board
                .cells()
                .filter(|&(pos, &tile)| succ.tile(pos) != tile)
                .count();
            assert_eq!(differing, 2);
        }
        // generating successors must never touch the parent
        assert_eq!(parent.rows(), before.rows());
        assert_eq!(parent.empty_pos(), before.empty_pos());
    }

    #[test]
    fn applying_moves_in_place() {
        let mut s = PuzzleState::new(3);
        assert!(!s.is_legal_move(Dir::Down));
        assert!(!s.apply_in_place(Dir::Right));
        assert!(s.is_goal());

        assert!(s.is_legal_move(Dir::Up));
        assert!(s.apply_in_place(Dir::Up));
        assert_eq!(s.empty_pos(), Pos::new(1, 2));
        assert_eq!(s.heuristic(), 1);
        assert!(!s.is_goal());

        assert!(s.apply_in_place(Dir::Down));
        assert!(s.is_goal());
        assert_eq!(s.heuristic(), 0);

        let moves: Moves = "ul".parse().unwrap();
        let moved = s.apply_moves(&moves).unwrap();
        assert_eq!(moved.empty_pos(), Pos::new(1, 1));
        assert_eq!(s.apply_moves(&"r".parse().unwrap()), None);
    }

    #[test]
    fn equality_ignores_history() {
        let a = state(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]);
        let b = PuzzleState::new(3)
            .generate_successors()
            .into_iter()
            .find(|s| s.action() == Some(Dir::Left))
            .unwrap();
        assert_eq!(b.path_cost(), 1);
        assert_eq!(a.path_cost(), 0);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&PuzzleState::new(3)));
    }

    #[test]
    fn formatting() {
        assert_eq!(PuzzleState::new(3).to_string(), "1 2 3\n4 5 6\n7 8 _\n");
        assert_eq!(
            PuzzleState::new(4).to_string(),
            " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  _\n"
        );
    }
}
