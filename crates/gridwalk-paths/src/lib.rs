//! Shortest paths on 4-connected grids.
//!
//! - **BFS** shortest path with parent-pointer reconstruction
//!   ([`PathFinder::shortest_path`])
//! - **Dijkstra** distance maps ([`DistanceMap::compute`]), used for
//!   heatmaps and as an independent check of BFS results
//!
//! Both operate through the [`Pather`] trait, which [`GridModel`] implements.
//!
//! [`GridModel`]: gridwalk_core::GridModel

mod bfs;
mod dijkstra;
mod distance;
mod path;
mod traits;

pub use bfs::{PathError, PathFinder, SearchTree, shortest_path};
pub use dijkstra::{DistanceMap, UNREACHABLE};
pub use distance::manhattan;
pub use path::{Path, PathResult};
pub use traits::{Pather, WeightedPather};
