use gridwalk_core::{Coord, Dims, Direction, GridModel};

/// Minimal pathfinding interface: which cells may be stood on.
pub trait Pather {
    /// Extent of the searchable area.
    fn dims(&self) -> Dims;

    /// Whether `c` is a legal place to stand. Must be `false` outside
    /// [`dims`](Pather::dims).
    fn passable(&self, c: Coord) -> bool;

    /// Append the passable 4-way neighbours of `c` into `buf`, in
    /// [`Direction::ALL`] order. The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for d in Direction::ALL {
            if let Some(n) = c.checked_step(d).filter(|&n| self.passable(n)) {
                buf.push(n);
            }
        }
    }
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Coord, to: Coord) -> i32;
}

impl Pather for GridModel {
    #[inline]
    fn dims(&self) -> Dims {
        GridModel::dims(self)
    }

    #[inline]
    fn passable(&self, c: Coord) -> bool {
        self.is_valid(c)
    }
}

/// Every move on a [`GridModel`] costs one step.
impl WeightedPather for GridModel {
    #[inline]
    fn cost(&self, _from: Coord, _to: Coord) -> i32 {
        1
    }
}
