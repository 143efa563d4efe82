//! The world model: [`GridModel`] and its [`WorldConfig`].

use std::collections::HashSet;

use crate::geom::{Coord, Dims, Direction};

// ---------------------------------------------------------------------------
// GridModel
// ---------------------------------------------------------------------------

/// A fixed grid with a set of impassable cells.
///
/// Immutable once built. A coordinate is *valid* when it lies inside the
/// dimensions and is not blocked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridModel {
    dims: Dims,
    blocked: HashSet<Coord>,
}

impl GridModel {
    /// Create a grid model. Blocked coordinates outside `dims` are kept but
    /// have no effect, since such cells are already invalid.
    pub fn new(dims: Dims, blocked: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            dims,
            blocked: blocked.into_iter().collect(),
        }
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Whether `c` is marked impassable.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        self.blocked.contains(&c)
    }

    /// The blocked cells.
    pub fn blocked(&self) -> impl Iterator<Item = Coord> + '_ {
        self.blocked.iter().copied()
    }

    /// Whether `c` is a legal place to stand. Total over all integer pairs.
    #[inline]
    pub fn is_valid(&self, c: Coord) -> bool {
        self.dims.contains(c) && !self.blocked.contains(&c)
    }

    /// Report which of the four neighbours of `c` are valid.
    pub fn sense(&self, c: Coord) -> Surroundings {
        let open = |dir: Direction| c.checked_step(dir).is_some_and(|n| self.is_valid(n));
        Surroundings {
            up: open(Direction::Up),
            down: open(Direction::Down),
            left: open(Direction::Left),
            right: open(Direction::Right),
        }
    }
}

/// Validity of the four cells around a position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Surroundings {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Surroundings {
    /// Whether moving in `dir` is allowed.
    pub fn is_open(self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Open directions, in [`Direction::ALL`] order.
    pub fn open(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.is_open(d))
    }
}

// ---------------------------------------------------------------------------
// WorldConfig
// ---------------------------------------------------------------------------

/// Largest accepted number of rows or columns.
pub const MAX_SIDE: i32 = 1000;

/// Everything needed to set up one run: grid size, obstacles and the two
/// endpoints.
///
/// The default is the classic 5x5 demo world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    pub rows: i32,
    pub cols: i32,
    pub blocked: Vec<Coord>,
    pub start: Coord,
    pub target: Coord,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            blocked: vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(2, 1)],
            start: Coord::new(0, 0),
            target: Coord::new(4, 4),
        }
    }
}

impl WorldConfig {
    /// Grid dimensions described by this configuration.
    #[inline]
    pub fn dims(&self) -> Dims {
        Dims::new(self.rows, self.cols)
    }

    /// Check the caller-side preconditions: dimensions in `1..=MAX_SIDE`, a
    /// target inside the grid and not blocked, and a valid start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = self.dims();
        if dims.is_empty() {
            return Err(ConfigError::NonPositiveDims {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows > MAX_SIDE || self.cols > MAX_SIDE {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !dims.contains(self.target) {
            return Err(ConfigError::TargetOutOfBounds {
                target: self.target,
                dims,
            });
        }
        if self.blocked.contains(&self.target) {
            return Err(ConfigError::TargetBlocked(self.target));
        }
        if !dims.contains(self.start) || self.blocked.contains(&self.start) {
            return Err(ConfigError::InvalidStart(self.start));
        }
        Ok(())
    }

    /// Validate and build the grid model.
    pub fn build(&self) -> Result<GridModel, ConfigError> {
        self.validate()?;
        let dims = self.dims();
        for &c in &self.blocked {
            if !dims.contains(c) {
                log::warn!("obstacle {c} lies outside the {dims} grid; ignored");
            }
        }
        let model = GridModel::new(dims, self.blocked.iter().copied());
        log::debug!(
            "built {dims} world with {} obstacles, start {} target {}",
            model.blocked.len(),
            self.start,
            self.target
        );
        Ok(model)
    }
}

/// A world configuration that cannot be run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Rows or columns are zero or negative.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    NonPositiveDims { rows: i32, cols: i32 },
    /// Rows or columns exceed [`MAX_SIDE`].
    #[error("grid is {rows}x{cols}, at most {max} per side is supported", max = MAX_SIDE)]
    TooLarge { rows: i32, cols: i32 },
    /// The target lies outside the grid.
    #[error("target {target} is outside the {dims} grid")]
    TargetOutOfBounds { target: Coord, dims: Dims },
    /// The target is an obstacle.
    #[error("target {0} is blocked")]
    TargetBlocked(Coord),
    /// The start is outside the grid or an obstacle.
    #[error("start {0} is out of bounds or blocked")]
    InvalidStart(Coord),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_model() -> GridModel {
        WorldConfig::default().build().unwrap()
    }

    #[test]
    fn valid_inside_and_unblocked() {
        let m = demo_model();
        assert!(m.is_valid(Coord::new(0, 0)));
        assert!(m.is_valid(Coord::new(4, 4)));
        assert!(m.is_valid(Coord::new(2, 2)));
    }

    #[test]
    fn blocked_cells_are_invalid() {
        let m = demo_model();
        assert!(!m.is_valid(Coord::new(1, 1)));
        assert!(!m.is_valid(Coord::new(1, 2)));
        assert!(!m.is_valid(Coord::new(2, 1)));
        assert!(m.is_blocked(Coord::new(2, 1)));
    }

    #[test]
    fn out_of_bounds_is_invalid() {
        let m = demo_model();
        for c in [
            Coord::new(-1, 0),
            Coord::new(0, -1),
            Coord::new(5, 0),
            Coord::new(0, 5),
            Coord::new(i32::MIN, i32::MAX),
        ] {
            assert!(!m.is_valid(c), "{c} should be invalid");
        }
    }

    #[test]
    fn sense_reports_open_neighbours() {
        let m = demo_model();
        let s = m.sense(Coord::new(0, 1));
        assert!(!s.up);
        assert!(!s.down); // (1,1) is blocked
        assert!(s.left);
        assert!(s.right);
        assert_eq!(
            s.open().collect::<Vec<_>>(),
            vec![Direction::Right, Direction::Left]
        );
    }

    #[test]
    fn sense_far_outside_the_grid() {
        let m = GridModel::new(Dims::new(5, 5), []);
        for c in [
            Coord::new(i32::MAX, 0),
            Coord::new(i32::MIN, 0),
            Coord::new(0, i32::MAX),
            Coord::new(i32::MIN, i32::MIN),
        ] {
            assert_eq!(m.sense(c).open().count(), 0, "{c}");
        }
        // One step back in from the far edge is still checked normally.
        let s = m.sense(Coord::new(0, 5));
        assert!(s.left);
        assert!(!s.right);
    }

    #[test]
    fn validate_rejects_non_positive_dims() {
        let cfg = WorldConfig {
            rows: 0,
            ..WorldConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositiveDims { rows: 0, cols: 5 })
        );
    }

    #[test]
    fn validate_rejects_oversized_grids() {
        let cfg = WorldConfig {
            rows: 3,
            cols: i32::MAX,
            ..WorldConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooLarge {
                rows: 3,
                cols: i32::MAX
            })
        );
        let cfg = WorldConfig {
            rows: MAX_SIDE + 1,
            ..WorldConfig::default()
        };
        assert!(matches!(cfg.build(), Err(ConfigError::TooLarge { .. })));
        let cfg = WorldConfig {
            rows: MAX_SIDE,
            cols: MAX_SIDE,
            ..WorldConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_target() {
        let cfg = WorldConfig {
            target: Coord::new(5, 5),
            ..WorldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TargetOutOfBounds { .. })
        ));

        let cfg = WorldConfig {
            target: Coord::new(1, 1),
            ..WorldConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TargetBlocked(Coord::new(1, 1)))
        );
    }

    #[test]
    fn validate_rejects_invalid_start() {
        let cfg = WorldConfig {
            start: Coord::new(2, 1),
            ..WorldConfig::default()
        };
        assert_eq!(
            cfg.build(),
            Err(ConfigError::InvalidStart(Coord::new(2, 1)))
        );
    }

    #[test]
    fn out_of_range_obstacles_are_harmless() {
        let cfg = WorldConfig {
            blocked: vec![Coord::new(9, 9)],
            ..WorldConfig::default()
        };
        let m = cfg.build().unwrap();
        assert!(m.is_valid(Coord::new(1, 1)));
        assert!(m.is_blocked(Coord::new(9, 9)));
    }

    #[test]
    fn error_messages_name_the_cell() {
        let e = ConfigError::TargetBlocked(Coord::new(1, 2));
        assert_eq!(e.to_string(), "target (1, 2) is blocked");
    }
}
