use gridwalk_core::{Coord, Direction};

/// A walk from a start cell to a target cell, both included.
///
/// Never empty, and consecutive cells always differ by exactly one step on
/// exactly one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path(Vec<Coord>);

impl Path {
    /// Build a path from raw cells. Returns `None` if `cells` is empty or
    /// two consecutive cells are not one cardinal step apart.
    pub fn from_cells(cells: Vec<Coord>) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        if cells
            .windows(2)
            .any(|w| Direction::between(w[0], w[1]).is_none())
        {
            return None;
        }
        Some(Self(cells))
    }

    /// Wrap cells already known to satisfy the invariant.
    pub(crate) fn new_unchecked(cells: Vec<Coord>) -> Self {
        debug_assert!(!cells.is_empty());
        Self(cells)
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Coord {
        self.0[0]
    }

    /// Last cell.
    #[inline]
    pub fn target(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; paths hold at least their start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves (edges), i.e. `len() - 1`.
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    /// The cells in walking order.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    /// Iterate over the cells in walking order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.0.iter()
    }

    /// The move taken between each pair of consecutive cells.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Outcome of a path search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// A shortest path from start to target.
    Found(Path),
    /// No sequence of valid moves connects start to target.
    Unreachable,
}

impl PathResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::Unreachable => None,
        }
    }

    /// Consume the result, returning the path if one was found.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::Unreachable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn from_cells_checks_adjacency() {
        assert!(Path::from_cells(vec![]).is_none());
        assert!(Path::from_cells(vec![c(0, 0), c(1, 1)]).is_none());
        assert!(Path::from_cells(vec![c(0, 0), c(0, 0)]).is_none());
        assert!(Path::from_cells(vec![c(0, 0), c(0, 1), c(1, 1)]).is_some());
    }

    #[test]
    fn from_cells_rejects_extreme_jumps() {
        assert!(Path::from_cells(vec![c(i32::MIN, 0), c(i32::MAX, 0)]).is_none());
        assert!(Path::from_cells(vec![c(0, i32::MAX), c(0, i32::MIN)]).is_none());
        assert!(Path::from_cells(vec![c(i32::MAX - 1, 0), c(i32::MAX, 0)]).is_some());
    }

    #[test]
    fn single_cell_path() {
        let p = Path::from_cells(vec![c(2, 2)]).unwrap();
        assert_eq!(p.start(), c(2, 2));
        assert_eq!(p.target(), c(2, 2));
        assert_eq!(p.len(), 1);
        assert_eq!(p.steps(), 0);
        assert!(!p.is_empty());
        assert_eq!(p.directions().count(), 0);
    }

    #[test]
    fn directions_translate_deltas() {
        let p = Path::from_cells(vec![c(1, 1), c(1, 2), c(2, 2), c(2, 1), c(1, 1)]).unwrap();
        assert_eq!(
            p.directions().collect::<Vec<_>>(),
            vec![
                Direction::Right,
                Direction::Down,
                Direction::Left,
                Direction::Up
            ]
        );
    }

    #[test]
    fn result_accessors() {
        let p = Path::from_cells(vec![c(0, 0)]).unwrap();
        let found = PathResult::Found(p.clone());
        assert!(found.is_found());
        assert_eq!(found.path(), Some(&p));
        assert_eq!(found.into_path(), Some(p));
        assert!(!PathResult::Unreachable.is_found());
        assert_eq!(PathResult::Unreachable.path(), None);
    }
}
