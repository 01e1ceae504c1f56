//! Per-side values for the four edges of a rectangular domain.
//!
//! Replaces index conventions like `[south, east, north, west]` with named
//! fields and a [`Side`] tag.

use std::fmt;

use super::Direction;

/// One of the four edges of a logically rectangular domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// y = y_min
    South,
    /// x = x_max
    East,
    /// y = y_max
    North,
    /// x = x_min
    West,
}

impl Side {
    /// All sides in counterclockwise order starting from the bottom.
    pub const ALL: [Side; 4] = [Side::South, Side::East, Side::North, Side::West];

    /// Mesh direction normal to this side.
    #[inline]
    pub fn normal_direction(self) -> Direction {
        match self {
            Side::West | Side::East => Direction::I,
            Side::South | Side::North => Direction::J,
        }
    }

    /// Whether the interior cell lies on the low-index side of the boundary
    /// face (i.e. the face normal points out of the domain).
    #[inline]
    pub fn interior_is_left(self) -> bool {
        matches!(self, Side::East | Side::North)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::South => "south",
            Side::East => "east",
            Side::North => "north",
            Side::West => "west",
        };
        f.write_str(name)
    }
}

/// Value attached to each side of the domain.
///
/// # Example
///
/// ```
/// use ugks_rs::types::{Side, SideBoundaries};
///
/// let lid = SideBoundaries::new(0.0, 0.0, 0.15, 0.0);
/// assert_eq!(*lid.get(Side::North), 0.15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideBoundaries<T> {
    /// South boundary (y = y_min)
    pub south: T,
    /// East boundary (x = x_max)
    pub east: T,
    /// North boundary (y = y_max)
    pub north: T,
    /// West boundary (x = x_min)
    pub west: T,
}

impl<T> SideBoundaries<T> {
    /// Create with explicit values, counterclockwise from the bottom.
    pub fn new(south: T, east: T, north: T, west: T) -> Self {
        Self {
            south,
            east,
            north,
            west,
        }
    }

    /// Same value on all sides.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            south: value.clone(),
            east: value.clone(),
            north: value.clone(),
            west: value,
        }
    }

    /// Replace the value on one side.
    pub fn with(mut self, side: Side, value: T) -> Self {
        *self.get_mut(side) = value;
        self
    }

    /// Value for a side.
    #[inline]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::South => &self.south,
            Side::East => &self.east,
            Side::North => &self.north,
            Side::West => &self.west,
        }
    }

    /// Mutable value for a side.
    #[inline]
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::South => &mut self.south,
            Side::East => &mut self.east,
            Side::North => &mut self.north,
            Side::West => &mut self.west,
        }
    }

    /// Map a function over all sides.
    pub fn map<U, F>(self, mut f: F) -> SideBoundaries<U>
    where
        F: FnMut(T) -> U,
    {
        SideBoundaries {
            south: f(self.south),
            east: f(self.east),
            north: f(self.north),
            west: f(self.west),
        }
    }

    /// Iterate over `(side, value)` pairs, counterclockwise from the bottom.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

impl<T: Default> Default for SideBoundaries<T> {
    fn default() -> Self {
        Self {
            south: T::default(),
            east: T::default(),
            north: T::default(),
            west: T::default(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for SideBoundaries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S:{} E:{} N:{} W:{}",
            self.south, self.east, self.north, self.west
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_side() {
        let sides = SideBoundaries::new(1, 2, 3, 4);
        assert_eq!(*sides.get(Side::South), 1);
        assert_eq!(*sides.get(Side::East), 2);
        assert_eq!(*sides.get(Side::North), 3);
        assert_eq!(*sides.get(Side::West), 4);
    }

    #[test]
    fn test_with_replaces_one_side() {
        let sides = SideBoundaries::uniform(0).with(Side::North, 7);
        assert_eq!(sides.north, 7);
        assert_eq!(sides.south, 0);
        assert_eq!(sides.east, 0);
        assert_eq!(sides.west, 0);
    }

    #[test]
    fn test_map() {
        let doubled = SideBoundaries::new(1, 2, 3, 4).map(|x| x * 2);
        assert_eq!(doubled, SideBoundaries::new(2, 4, 6, 8));
    }

    #[test]
    fn test_iter_order() {
        let sides = SideBoundaries::new('s', 'e', 'n', 'w');
        let collected: Vec<_> = sides.iter().map(|(s, v)| (s, *v)).collect();
        assert_eq!(
            collected,
            vec![
                (Side::South, 's'),
                (Side::East, 'e'),
                (Side::North, 'n'),
                (Side::West, 'w')
            ]
        );
    }

    #[test]
    fn test_side_geometry() {
        assert_eq!(Side::West.normal_direction(), Direction::I);
        assert_eq!(Side::North.normal_direction(), Direction::J);
        assert!(Side::East.interior_is_left());
        assert!(!Side::South.interior_is_left());
    }
}
