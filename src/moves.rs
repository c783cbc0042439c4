use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::data::Dir;

/// Sequence of empty-cell moves, displayed as `d u r l` letters.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn add(&mut self, dir: Dir) {
        self.0.push(dir);
    }

    pub(crate) fn reverse(&mut self) {
        self.0.reverse();
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Moves {
    type Err = char;

    /// Fails with the first character that isn't a direction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut moves = Moves::default();
        for c in s.trim().chars() {
            moves.add(Dir::from_char(c).ok_or(c)?);
        }
        Ok(moves)
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![Dir::Up, Dir::Right, Dir::Down, Dir::Left]);
        assert_eq!(moves.to_string(), "urdl");
        assert_eq!(format!("{:?}", moves), "urdl");
        assert_eq!("urdl".parse::<Moves>().unwrap(), moves);
        assert_eq!("urxl".parse::<Moves>().unwrap_err(), 'x');
    }

    #[test]
    fn adding_and_reversing() {
        let mut moves = Moves::default();
        assert!(moves.is_empty());

        moves.add(Dir::Left);
        moves.add(Dir::Up);
        moves.add(Dir::Up);
        assert_eq!(moves.move_cnt(), 3);

        moves.reverse();
        let v: Vec<_> = moves.into_iter().collect();
        assert_eq!(v, vec![Dir::Up, Dir::Up, Dir::Left]);
    }
}
