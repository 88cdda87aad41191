use core::fmt;
use std::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer tile coordinate. `x` grows to the right and `y` grows downwards, so "up" is `y - 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the 4-neighbourhood in expansion order: up, right, down, left.
const NEUMANN_OFFSETS: [Cell; 4] = [
    Cell::new(0, -1),
    Cell::new(1, 0),
    Cell::new(0, 1),
    Cell::new(-1, 0),
];

impl Cell {
    /// The conventional spawn cell.
    pub const ORIGIN: Cell = Cell::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// True if the two cells share an edge.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The [von Neumann neighbourhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood)
    /// of the cell in the fixed order up, right, down, left. Bounds are not checked.
    pub fn neumann_neighborhood(&self) -> [Cell; 4] {
        NEUMANN_OFFSETS.map(|offset| *self + offset)
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Cell {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_order() {
        let c = Cell::new(2, 2);
        assert_eq!(
            c.neumann_neighborhood(),
            [
                Cell::new(2, 1),
                Cell::new(3, 2),
                Cell::new(2, 3),
                Cell::new(1, 2)
            ]
        );
    }

    #[test]
    fn distance_and_adjacency() {
        let a = Cell::new(0, 0);
        let b = Cell::new(4, 4);
        assert_eq!(a.manhattan_distance(&b), 8);
        assert!(a.is_adjacent(&Cell::new(0, 1)));
        assert!(!a.is_adjacent(&Cell::new(1, 1)));
        assert!(!a.is_adjacent(&a));
    }
}
