//! Error types for grid-robot.

use thiserror::Error;

/// Errors raised while building a mission from untrusted input.
///
/// The simulation itself never fails; every error is reported at the boundary
/// where text becomes typed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RobotError {
    #[error("invalid heading {0:?}, expected one of N, E, S, W")]
    InvalidHeading(String),

    #[error("invalid instruction {symbol:?} at index {index}, expected one of L, R, F")]
    InvalidInstruction { symbol: char, index: usize },

    #[error("grid boundary must be non-negative, got ({x}, {y})")]
    NegativeBoundary { x: i32, y: i32 },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("input is empty, expected a grid boundary line")]
    EmptyInput,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RobotError>;
