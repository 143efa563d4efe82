//! Geometry primitives: [`Coord`], [`Dims`] and [`Direction`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward, columns grow to
//! the right, matching screen layout.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell identified by `(row, col)`.
///
/// Any integer pair is a `Coord`; whether it is inside a grid is decided by
/// [`Dims::contains`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The neighbouring coordinate one step in `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        self.shift(dr, dc)
    }

    /// Like [`step`](Coord::step), but `None` if the result would overflow.
    #[inline]
    pub const fn checked_step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        match (self.row.checked_add(dr), self.col.checked_add(dc)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed expansion order used by the path finder: +col, +row, -col, -row.
    ///
    /// Equal-length alternatives are broken in this order, so results are
    /// reproducible.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// The `(row, col)` delta of a single step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// The direction of a single unit step from `from` to `to`.
    ///
    /// Returns `None` unless the two coordinates differ by exactly one on
    /// exactly one axis.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        let dr = to.row.checked_sub(from.row)?;
        let dc = to.col.checked_sub(from.col)?;
        match (dr, dc) {
            (-1, 0) => Some(Self::Up),
            (1, 0) => Some(Self::Down),
            (0, -1) => Some(Self::Left),
            (0, 1) => Some(Self::Right),
            _ => None,
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lower-case name, as shown in status lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions: the half-open rectangle `[0, rows) x [0, cols)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    /// Create new dimensions.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Whether the rectangle has zero or negative area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `c` lies inside `[0, rows) x [0, cols)`.
    #[inline]
    pub const fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if it is outside.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row as usize) * (self.cols as usize) + (c.col as usize))
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            cur: Coord::ZERO,
        }
    }
}

impl IntoIterator for Dims {
    type Item = Coord;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the coordinates of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    cur: Coord,
}

impl Iterator for DimsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.dims.is_empty() || self.cur.row >= self.dims.rows {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.dims.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.dims.is_empty() || self.cur.row >= self.dims.rows {
            return (0, Some(0));
        }
        let w = self.dims.cols as usize;
        let remaining_in_row = (self.dims.cols - self.cur.col) as usize;
        let remaining_rows = (self.dims.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for DimsIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coord::new(0, 3));
    }

    #[test]
    fn coord_is_hashable_by_value() {
        let mut set = HashSet::new();
        set.insert(Coord::new(1, 1));
        assert!(set.contains(&Coord::from((1, 1))));
        assert!(!set.contains(&Coord::new(1, 2)));
    }

    #[test]
    fn coord_order_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn neighbors_follow_expansion_order() {
        let n = Direction::ALL.map(|d| Coord::new(2, 2).step(d));
        assert_eq!(
            n,
            [
                Coord::new(2, 3),
                Coord::new(3, 2),
                Coord::new(2, 1),
                Coord::new(1, 2),
            ]
        );
    }

    #[test]
    fn direction_between_unit_steps() {
        let c = Coord::new(4, 4);
        for d in Direction::ALL {
            assert_eq!(Direction::between(c, c.step(d)), Some(d));
            assert_eq!(Direction::between(c.step(d), c), Some(d.reverse()));
        }
    }

    #[test]
    fn direction_between_rejects_non_steps() {
        let c = Coord::new(0, 0);
        assert_eq!(Direction::between(c, c), None);
        assert_eq!(Direction::between(c, Coord::new(1, 1)), None);
        assert_eq!(Direction::between(c, Coord::new(0, 2)), None);
    }

    #[test]
    fn direction_between_far_apart_coords() {
        let lo = Coord::new(i32::MIN, 0);
        let hi = Coord::new(i32::MAX, 0);
        assert_eq!(Direction::between(lo, hi), None);
        assert_eq!(Direction::between(hi, lo), None);
        assert_eq!(
            Direction::between(Coord::new(0, i32::MIN), Coord::new(0, i32::MAX)),
            None
        );
    }

    #[test]
    fn checked_step_at_the_edges() {
        let c = Coord::new(i32::MAX, i32::MIN);
        assert_eq!(c.checked_step(Direction::Down), None);
        assert_eq!(c.checked_step(Direction::Left), None);
        assert_eq!(
            c.checked_step(Direction::Up),
            Some(Coord::new(i32::MAX - 1, i32::MIN))
        );
        assert_eq!(Coord::new(3, 3).checked_step(Direction::Right), Some(Coord::new(3, 4)));
    }

    #[test]
    fn dims_contains() {
        let d = Dims::new(2, 3);
        assert!(d.contains(Coord::new(0, 0)));
        assert!(d.contains(Coord::new(1, 2)));
        assert!(!d.contains(Coord::new(2, 0)));
        assert!(!d.contains(Coord::new(0, 3)));
        assert!(!d.contains(Coord::new(-1, 0)));
        assert!(!d.contains(Coord::new(0, -1)));
    }

    #[test]
    fn dims_index() {
        let d = Dims::new(2, 3);
        assert_eq!(d.index(Coord::new(0, 0)), Some(0));
        assert_eq!(d.index(Coord::new(1, 2)), Some(5));
        assert_eq!(d.index(Coord::new(2, 2)), None);
    }

    #[test]
    fn dims_iter_row_major() {
        let d = Dims::new(2, 3);
        let cs: Vec<_> = d.iter().collect();
        assert_eq!(cs.len(), 6);
        assert_eq!(d.iter().len(), 6);
        assert_eq!(cs[0], Coord::new(0, 0));
        assert_eq!(cs[3], Coord::new(1, 0));
        assert_eq!(cs[5], Coord::new(1, 2));
    }

    #[test]
    fn empty_dims() {
        let d = Dims::new(0, 5);
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert_eq!(d.iter().count(), 0);
        assert!(!d.contains(Coord::ZERO));
    }
}
