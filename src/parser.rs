use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::MAX_SIZE;
use crate::state::PuzzleState;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    Pos(usize, usize),
    NotSquare(usize),
    TooLarge,
    OutOfRange(u32),
    Duplicate(u32),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "No rows"),
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::NotSquare(r) => {
                write!(f, "Row {} has a different length than the number of rows", r)
            }
            ParserErr::TooLarge => write!(f, "Board larger than {}x{}", MAX_SIZE, MAX_SIZE),
            ParserErr::OutOfRange(tile) => write!(f, "Tile {} doesn't fit on the board", tile),
            ParserErr::Duplicate(tile) => write!(f, "Tile {} appears more than once", tile),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for PuzzleState {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses rows of whitespace separated numbers, `0` or `_` is the empty cell.
///
/// Only checks the board is a permutation of `0..N*N`, not that it's solvable.
pub(crate) fn parse(board: &str) -> Result<PuzzleState, ParserErr> {
    // trim so we can specify boards using raw strings more easily
    let board = board.trim_matches('\n').trim_end();

    let mut rows = Vec::new();
    for (r, line) in board.lines().enumerate() {
        let mut row = Vec::new();
        for (c, cell) in line.split_whitespace().enumerate() {
            let tile = if cell == "_" {
                0
            } else {
                cell.parse::<u32>().map_err(|_| ParserErr::Pos(r, c))?
            };
            row.push(tile);
        }
        rows.push(row);
    }

    if rows.is_empty() || rows.iter().all(|row| row.is_empty()) {
        return Err(ParserErr::Empty);
    }
    if rows.len() > usize::from(MAX_SIZE) {
        return Err(ParserErr::TooLarge);
    }
    if let Some(r) = rows.iter().position(|row| row.len() != rows.len()) {
        return Err(ParserErr::NotSquare(r));
    }

    let cell_cnt = (rows.len() * rows.len()) as u32;
    let mut seen = vec![false; cell_cnt as usize];
    for &tile in rows.iter().flatten() {
        if tile >= cell_cnt {
            return Err(ParserErr::OutOfRange(tile));
        }
        if seen[tile as usize] {
            return Err(ParserErr::Duplicate(tile));
        }
        seen[tile as usize] = true;
    }
    // N*N distinct tiles below N*N - every value including 0 is present exactly once

    let rows: Vec<Vec<u8>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(|tile| tile as u8).collect())
        .collect();
    Ok(PuzzleState::from_board(Vec2d::new(&rows)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_3x3() {
        let input = r"
1 2 3
4 5 6
7 _ 8
";
        let state: PuzzleState = input.parse().unwrap();
        assert_eq!(state.rows(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]);
        assert_eq!(state.to_string(), input.trim_start_matches('\n'));

        let zero: PuzzleState = "1 2 3\n4 5 6\n7 0 8".parse().unwrap();
        assert_eq!(zero, state);
    }

    #[test]
    fn parsing_formatted_4x4() {
        let state = PuzzleState::new(4);
        let parsed: PuzzleState = state.to_string().parse().unwrap();
        assert_eq!(parsed, state);
        assert!(parsed.is_goal());
    }

    #[test]
    fn parsing_1x1() {
        let state: PuzzleState = "_".parse().unwrap();
        assert!(state.is_goal());
    }

    #[test]
    fn invalid_cell() {
        assert_failure("1 2 3\n4 x 6\n7 8 0", ParserErr::Pos(1, 1));
        assert_failure("1 2 3\n4 5 -6\n7 8 0", ParserErr::Pos(1, 2));
    }

    #[test]
    fn wrong_shapes() {
        assert_failure("", ParserErr::Empty);
        assert_failure("\n\n", ParserErr::Empty);
        assert_failure("1 2 3\n4 5\n7 8 0", ParserErr::NotSquare(1));
        assert_failure("1 2 3\n4 5 6", ParserErr::NotSquare(0));

        let mut large = String::new();
        for _ in 0..17 {
            large.push_str("0\n");
        }
        assert_failure(&large, ParserErr::TooLarge);
    }

    #[test]
    fn wrong_tiles() {
        assert_failure("1 2 3\n4 5 6\n7 9 0", ParserErr::OutOfRange(9));
        assert_failure("1 2 3\n4 5 6\n7 7 0", ParserErr::Duplicate(7));
        // two empty cells are a duplicate too
        assert_failure("1 2\n0 _", ParserErr::Duplicate(0));
    }

    fn assert_failure(input: &str, expected_err: ParserErr) {
        assert_eq!(input.parse::<PuzzleState>().unwrap_err(), expected_err);
    }
}
