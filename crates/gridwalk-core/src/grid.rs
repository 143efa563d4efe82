//! The screen [`Grid`] and the [`Frame`] diff sent to drivers.
//!
//! Screen positions use [`Coord`] too: `row` is the terminal line and `col`
//! the terminal column.

use crate::cell::Cell;
use crate::geom::{Coord, Dims};
use crate::style::Style;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A 2D buffer of [`Cell`]s that a [`Model`](crate::app::Model) draws into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    dims: Dims,
}

impl Grid {
    /// Create a new grid filled with default cells. Negative sizes are
    /// treated as zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let dims = Dims::new(rows.max(0), cols.max(0));
        Self {
            cells: vec![Cell::default(); dims.len()],
            dims,
        }
    }

    /// Size of the grid.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.dims.contains(p)
    }

    /// Read the cell at `p`. Returns `Cell::default()` outside the grid.
    pub fn at(&self, p: Coord) -> Cell {
        self.dims
            .index(p)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    /// Set the cell at `p`. No-op outside the grid.
    pub fn set(&mut self, p: Coord, cell: Cell) {
        if let Some(i) = self.dims.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Fill every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `text` on line `p.row` starting at column `p.col`, clipping at
    /// the right edge. Returns the number of cells written.
    pub fn print(&mut self, p: Coord, text: &str, style: Style) -> usize {
        let mut n = 0;
        for (i, ch) in text.chars().enumerate() {
            let q = p.shift(0, i as i32);
            if !self.contains(q) {
                break;
            }
            self.set(q, Cell { ch, style });
            n += 1;
        }
        n
    }

    /// Copy all cells from a grid of the same size. Returns `false` (and
    /// copies nothing) when the sizes differ.
    pub fn copy_from(&mut self, src: &Grid) -> bool {
        if src.dims != self.dims {
            return false;
        }
        self.cells.copy_from_slice(&src.cells);
        true
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.dims.iter().zip(self.cells.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub cell: Cell,
    pub pos: Coord,
}

/// A set of cell changes (a diff frame).
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub dims: Dims,
}

/// Compute the difference between two grids.
///
/// Cells of `curr` that are missing from or differ in `prev` are included,
/// so diffing against an empty grid yields a full redraw.
pub fn compute_frame(prev: &Grid, curr: &Grid) -> Frame {
    let cells = curr
        .iter()
        .filter(|&(p, c)| !prev.contains(p) || prev.at(p) != c)
        .map(|(pos, cell)| FrameCell { cell, pos })
        .collect();
    Frame {
        cells,
        dims: curr.dims(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_and_at() {
        let g = Grid::new(3, 4);
        assert_eq!(g.dims(), Dims::new(3, 4));
        assert_eq!(g.at(Coord::new(0, 0)), Cell::default());
    }

    #[test]
    fn grid_set_and_get() {
        let mut g = Grid::new(3, 4);
        g.set(Coord::new(1, 2), Cell::default().with_char('X'));
        assert_eq!(g.at(Coord::new(1, 2)).ch, 'X');
        // out of bounds reads default and writes nothing
        g.set(Coord::new(10, 10), Cell::default().with_char('Y'));
        assert_eq!(g.at(Coord::new(10, 10)), Cell::default());
    }

    #[test]
    fn grid_fill() {
        let mut g = Grid::new(2, 3);
        g.fill(Cell::default().with_char('.'));
        assert!(g.iter().all(|(_, c)| c.ch == '.'));
    }

    #[test]
    fn print_clips_at_edge() {
        let mut g = Grid::new(1, 4);
        let n = g.print(Coord::new(0, 1), "hello", Style::default());
        assert_eq!(n, 3);
        let line: String = g.iter().map(|(_, c)| c.ch).collect();
        assert_eq!(line, " hel");
    }

    #[test]
    fn copy_from_requires_same_size() {
        let mut a = Grid::new(2, 2);
        let mut b = Grid::new(2, 2);
        b.set(Coord::new(1, 1), Cell::default().with_char('#'));
        assert!(a.copy_from(&b));
        assert_eq!(a, b);
        assert!(!a.copy_from(&Grid::new(3, 3)));
    }

    #[test]
    fn compute_frame_diff() {
        let a = Grid::new(2, 3);
        let mut b = Grid::new(2, 3);
        b.set(Coord::new(0, 1), Cell::default().with_char('A'));
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Coord::new(0, 1));
        assert_eq!(frame.cells[0].cell.ch, 'A');
    }

    #[test]
    fn compute_frame_against_empty_is_full() {
        let frame = compute_frame(&Grid::new(0, 0), &Grid::new(2, 3));
        assert_eq!(frame.cells.len(), 6);
        assert_eq!(frame.dims, Dims::new(2, 3));
    }
}
