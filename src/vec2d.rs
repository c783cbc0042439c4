use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Square grid stored row-major in one allocation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    size: u8,
}

impl<T: Copy> Vec2d<T> {
    /// The caller guarantees the rows form a square.
    pub(crate) fn new(rows: &[Vec<T>]) -> Self {
        assert!(rows.iter().all(|row| row.len() == rows.len()));

        let mut data = Vec::with_capacity(rows.len() * rows.len());
        for row in rows {
            data.extend_from_slice(row);
        }
        Vec2d {
            data,
            size: rows.len() as u8,
        }
    }

    pub(crate) fn from_fn<F: FnMut(Pos) -> T>(size: u8, mut f: F) -> Self {
        let mut data = Vec::with_capacity(usize::from(size) * usize::from(size));
        for r in 0..size {
            for c in 0..size {
                data.push(f(Pos::new(r, c)));
            }
        }
        Vec2d { data, size }
    }
}

impl<T> Vec2d<T> {
    pub(crate) fn size(&self) -> u8 {
        self.size
    }

    pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
        let a = self.flat_index(a);
        let b = self.flat_index(b);
        self.data.swap(a, b);
    }

    /// Cells with their positions in row-major order.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        let size = usize::from(self.size);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Pos::new((i / size) as u8, (i % size) as u8), cell))
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks panics on 0 and an empty grid has no rows anyway
        self.data.chunks(usize::from(self.size).max(1))
    }

    fn flat_index(&self, pos: Pos) -> usize {
        usize::from(pos.r) * usize::from(self.size) + usize::from(pos.c)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[self.flat_index(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.flat_index(index);
        &mut self.data[index]
    }
}
