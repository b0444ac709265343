extern crate direction;
extern crate grid_2d;
#[cfg(feature = "serialize")]
#[macro_use]
extern crate serde;

mod astar;
mod cell;
mod config;
mod error;
mod frontier;
mod grid;
mod metadata;
mod path;
pub mod render;

pub use astar::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use grid::*;
pub use metadata::*;
pub use path::*;

pub use direction::Direction;
pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;
