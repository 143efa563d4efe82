use std::collections::BinaryHeap;

use gridwalk_core::{Coord, Dims};

use crate::traits::WeightedPather;

/// Sentinel value meaning "unreachable" in a [`DistanceMap`].
pub const UNREACHABLE: i32 = i32::MAX;

/// Heap entry ordered by cost, smallest first.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    cost: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest cost first.
        other.cost.cmp(&self.cost).then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Multi-source shortest-distance map over a grid.
///
/// Owns its buffers so that repeated [`compute`](DistanceMap::compute)
/// calls on the same grid do not reallocate.
#[derive(Clone, Debug)]
pub struct DistanceMap {
    dims: Dims,
    dist: Vec<i32>,
    nbuf: Vec<Coord>,
}

impl DistanceMap {
    /// Create an empty map (everything unreachable) for `dims`.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            dist: vec![UNREACHABLE; dims.len()],
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Compute distances from `sources` with Dijkstra's algorithm.
    ///
    /// Every passable source starts at cost 0; impassable sources are
    /// skipped. Expansion stops when the cumulative cost exceeds `max_cost`.
    pub fn compute<P: WeightedPather>(&mut self, pather: &P, sources: &[Coord], max_cost: i32) {
        let dims = pather.dims();
        if dims != self.dims {
            self.dims = dims;
            self.dist.resize(dims.len(), UNREACHABLE);
        }
        self.dist.fill(UNREACHABLE);

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        for &src in sources {
            if !pather.passable(src) {
                continue;
            }
            if let Some(si) = self.dims.index(src) {
                self.dist[si] = 0;
                open.push(NodeRef { idx: si, cost: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let cols = self.dims.cols.max(1) as usize;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if current.cost > self.dist[ci] {
                // Stale entry.
                continue;
            }
            let cp = Coord::new((ci / cols) as i32, (ci % cols) as i32);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.dims.index(np) else {
                    continue;
                };
                let tentative = current.cost.saturating_add(pather.cost(cp, np));
                if tentative > max_cost || tentative >= self.dist[ni] {
                    continue;
                }
                self.dist[ni] = tentative;
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                });
            }
        }

        self.nbuf = nbuf;
        log::trace!(
            "distance map over {}: {} cells reached",
            self.dims,
            self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
        );
    }

    /// Grid dimensions of the map.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Distance at `c`, or `None` if it is outside the map or was not
    /// reached by the last `compute` call.
    pub fn at(&self, c: Coord) -> Option<i32> {
        self.dims
            .index(c)
            .map(|i| self.dist[i])
            .filter(|&d| d != UNREACHABLE)
    }

    /// Largest finite distance in the map, if any cell was reached.
    pub fn max_distance(&self) -> Option<i32> {
        self.dist.iter().copied().filter(|&d| d != UNREACHABLE).max()
    }
}
