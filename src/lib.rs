//! # grid-robot
//!
//! A deterministic simulator for robots exploring a bounded rectangular grid.
//!
//! Each robot starts from a pose and follows a string of `L`, `R` and `F`
//! instructions. A robot that drives off the grid is *lost* and leaves a scent
//! on the last cell it occupied, recording the heading it left along; later
//! robots ignore that same move off the grid instead of being lost.
//!
//! Robots run strictly in input order, because the scent left by one robot is
//! visible to every robot after it.

pub mod error;
pub mod grid;
pub mod mission;
pub mod pose;
pub mod simulator;

pub use error::RobotError;
pub use grid::*;
pub use mission::*;
pub use pose::*;
pub use simulator::*;
