use std::fmt::{self, Debug, Display, Formatter};

/// Largest supported board side - tiles are stored as `u8` so `N * N - 1` must fit.
pub const MAX_SIZE: u8 = 16;

/// Order in which successors are generated.
pub const DIRECTIONS: [Dir; 4] = [Dir::Down, Dir::Up, Dir::Right, Dir::Left];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Self {
        Pos { r, c }
    }

    pub(crate) fn dist(self, other: Pos) -> u32 {
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dc = (i32::from(self.c) - i32::from(other.c)).abs();
        (dr + dc) as u32
    }

    /// Position one step in `dir` if it stays inside a `size` x `size` board.
    pub(crate) fn step(self, dir: Dir, size: u8) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let r = i32::from(self.r) + dr;
        let c = i32::from(self.c) + dc;
        let size = i32::from(size);
        if r < 0 || c < 0 || r >= size || c >= size {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Direction in which the empty cell moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Down,
    Up,
    Right,
    Left,
}

impl Dir {
    /// `(row, col)` delta applied to the empty cell.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Down => (1, 0),
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Left => (0, -1),
        }
    }

    pub fn inverse(self) -> Dir {
        match self {
            Dir::Down => Dir::Up,
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Left => Dir::Right,
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Dir> {
        match c {
            'd' => Some(Dir::Down),
            'u' => Some(Dir::Up),
            'r' => Some(Dir::Right),
            'l' => Some(Dir::Left),
            _ => None,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Down => write!(f, "d"),
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Left => write!(f, "l"),
        }
    }
}

impl Debug for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
