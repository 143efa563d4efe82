use gridwalk_core::Coord;

/// Manhattan (L1) distance between two coordinates: a lower bound on the
/// number of 4-way steps between them.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
