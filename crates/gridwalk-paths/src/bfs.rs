use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use gridwalk_core::Coord;

use crate::path::{Path, PathResult};
use crate::traits::Pather;

/// A path query that cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The start cell is out of bounds or blocked.
    #[error("start {0} is out of bounds or blocked")]
    InvalidStart(Coord),
}

/// Breadth-first shortest-path search over a [`Pather`].
///
/// Each call is independent: nothing is shared between searches.
pub struct PathFinder<'a, P: Pather> {
    pather: &'a P,
}

impl<'a, P: Pather> PathFinder<'a, P> {
    /// Create a path finder over `pather`.
    pub fn new(pather: &'a P) -> Self {
        Self { pather }
    }

    /// Compute a shortest path from `start` to `target`, both included.
    ///
    /// Returns [`PathResult::Unreachable`] when no path exists, which
    /// includes a blocked or out-of-bounds target.
    pub fn shortest_path(&self, start: Coord, target: Coord) -> Result<PathResult, PathError> {
        let tree = self.search(start, target)?;
        let result = match tree.path_to(target) {
            Some(path) => PathResult::Found(path),
            None => PathResult::Unreachable,
        };
        match &result {
            PathResult::Found(path) => log::debug!(
                "bfs {start} -> {target}: {} steps, {} cells expanded",
                path.steps(),
                tree.expanded()
            ),
            PathResult::Unreachable => log::debug!(
                "bfs {start} -> {target}: unreachable, {} cells expanded",
                tree.expanded()
            ),
        }
        Ok(result)
    }

    /// Run the search and return the parent tree.
    ///
    /// Expansion stops as soon as `target` is dequeued, or when the
    /// frontier runs dry.
    pub fn search(&self, start: Coord, target: Coord) -> Result<SearchTree, PathError> {
        if !self.pather.passable(start) {
            return Err(PathError::InvalidStart(start));
        }

        let mut queue = VecDeque::from([start]);
        // Doubles as the visited set.
        let mut parents: HashMap<Coord, Option<Coord>> = HashMap::from([(start, None)]);
        let mut expanded = 0;
        let mut nbuf = Vec::with_capacity(4);

        while let Some(current) = queue.pop_front() {
            if current == target {
                break;
            }
            expanded += 1;

            nbuf.clear();
            self.pather.neighbors(current, &mut nbuf);

            for &n in nbuf.iter() {
                if let Entry::Vacant(e) = parents.entry(n) {
                    e.insert(Some(current));
                    queue.push_back(n);
                }
            }
        }

        Ok(SearchTree {
            start,
            parents,
            expanded,
        })
    }
}

/// Compute a shortest path on `pather` in one call.
///
/// Shorthand for `PathFinder::new(pather).shortest_path(start, target)`.
pub fn shortest_path<P: Pather>(
    pather: &P,
    start: Coord,
    target: Coord,
) -> Result<PathResult, PathError> {
    PathFinder::new(pather).shortest_path(start, target)
}

/// Parent pointers recorded by a breadth-first search.
#[derive(Clone, Debug)]
pub struct SearchTree {
    start: Coord,
    parents: HashMap<Coord, Option<Coord>>,
    expanded: usize,
}

impl SearchTree {
    /// The search origin.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Whether `c` was discovered.
    #[inline]
    pub fn reached(&self, c: Coord) -> bool {
        self.parents.contains_key(&c)
    }

    /// The cell `c` was first reached from; `None` for the start and for
    /// undiscovered cells.
    #[inline]
    pub fn parent(&self, c: Coord) -> Option<Coord> {
        self.parents.get(&c).copied().flatten()
    }

    /// Number of discovered cells.
    #[inline]
    pub fn discovered(&self) -> usize {
        self.parents.len()
    }

    /// Number of cells whose neighbours were examined.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Follow parents back from `target` and return the path from the
    /// start. Returns `None` if `target` was never discovered.
    pub fn path_to(&self, target: Coord) -> Option<Path> {
        if !self.reached(target) {
            return None;
        }
        let mut cells = vec![target];
        let mut cur = target;
        while let Some(p) = self.parent(cur) {
            cells.push(p);
            cur = p;
        }
        cells.reverse();
        Some(Path::new_unchecked(cells))
    }
}
