//! **gridwalk-core**: core types for the grid walker.
//!
//! This crate provides geometry primitives ([`Coord`], [`Dims`],
//! [`Direction`]), the immutable world model ([`GridModel`]) built from a
//! [`WorldConfig`], styled screen cells, input messages, and the
//! Elm-architecture application loop used by the terminal front-end.

pub mod app;
pub mod cell;
pub mod geom;
pub mod grid;
pub mod messages;
pub mod style;
pub mod world;

pub use app::{App, AppConfig, Driver, Effect, Model};
pub use cell::Cell;
pub use geom::{Coord, Dims, Direction};
pub use grid::Grid;
pub use messages::*;
pub use style::{AttrMask, Color, Style};
pub use world::{ConfigError, GridModel, MAX_SIDE, Surroundings, WorldConfig};
