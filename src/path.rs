use itertools::Itertools;

use crate::Cell;

/// Cells to walk through, starting with the cell after the start and ending on the goal.
/// An empty path means there is nothing to do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn new() -> Path {
        Path::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of steps, which equals the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Checks that the path leaves `start` through an adjacent cell and that every following
    /// step is a single 4-directional move.
    pub fn is_contiguous_from(&self, start: Cell) -> bool {
        std::iter::once(&start)
            .chain(self.cells.iter())
            .tuple_windows()
            .all(|(a, b)| a.is_adjacent(b))
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Path {
        Path { cells }
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
