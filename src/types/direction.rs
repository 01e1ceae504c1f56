//! Mesh direction tag.

use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the two logical directions of a structured mesh.
///
/// `I` runs along increasing x (faces with normal `(1, 0)`), `J` along
/// increasing y (faces with normal `(0, 1)`). Per-direction data is stored as
/// `[T; 2]` and indexed with this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    I,
    J,
}

impl Direction {
    /// Both directions, `I` first.
    pub const BOTH: [Direction; 2] = [Direction::I, Direction::J];

    /// Array slot for this direction.
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Direction::I => 0,
            Direction::J => 1,
        }
    }

    /// Unit normal `(cosx, cosy)` of faces crossed when moving along this direction.
    #[inline]
    pub const fn normal(self) -> (f64, f64) {
        match self {
            Direction::I => (1.0, 0.0),
            Direction::J => (0.0, 1.0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::I => f.write_str("i"),
            Direction::J => f.write_str("j"),
        }
    }
}

impl<T> Index<Direction> for [T; 2] {
    type Output = T;

    #[inline(always)]
    fn index(&self, dir: Direction) -> &T {
        &self[dir.index()]
    }
}

impl<T> IndexMut<Direction> for [T; 2] {
    #[inline(always)]
    fn index_mut(&mut self, dir: Direction) -> &mut T {
        &mut self[dir.index()]
    }
}
