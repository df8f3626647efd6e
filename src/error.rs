//! The Error type shared by Grid construction, Grid mutation and Path searches

use thiserror::Error;

/// Everything that can go wrong when building a Grid or searching a Path on it.
///
/// Reading a Grid never fails: probing a Point outside of the Grid simply reports it as
/// not walkable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A Grid was requested with a width or height of zero or larger than `65536`.
    #[error("invalid grid dimensions {width}x{height}: both must be in 1..=65536")]
    InvalidDimension {
        /// the requested width
        width: usize,
        /// the requested height
        height: usize,
    },

    /// The packed buffer handed to [`Grid::new`](crate::Grid::new) has the wrong length.
    #[error("bytes length mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// `ceil(width * height / 8)`
        expected: usize,
        /// the length of the buffer that was passed in
        actual: usize,
    },

    /// A cell outside of the Grid was modified.
    #[error("({x}, {y}) is out of bounds")]
    OutOfBounds {
        /// x coordinate of the offending cell
        x: isize,
        /// y coordinate of the offending cell
        y: isize,
    },

    /// A coordinate is negative or does not fit into half of a packed key.
    #[error("invalid coordinate ({x}, {y}): x and y must be in 0..65536")]
    InvalidCoordinate {
        /// the x coordinate as passed in
        x: isize,
        /// the y coordinate as passed in
        y: isize,
    },

    /// The search ran out of open Nodes without reaching the goal.
    #[error("failed to find the path")]
    NoPathFound,

    /// The search expanded `max_expansions` Nodes without reaching the goal.
    #[error("search budget exhausted after expanding {expanded} nodes")]
    BudgetExhausted {
        /// number of Nodes expanded before giving up
        expanded: usize,
    },

    /// A random walkable cell was requested on a Grid without any walkable cell.
    #[error("the grid does not contain a walkable cell")]
    NoWalkableCell,

    /// The Manhattan heuristic overestimates diagonal moves and cannot be used with them.
    #[error("the manhattan heuristic is inadmissible when diagonal movement is allowed")]
    InadmissibleHeuristic,
}

/// Shorthand for `Result`s of this crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::NoPathFound.to_string(), "failed to find the path");
        assert_eq!(
            Error::SizeMismatch {
                expected: 4,
                actual: 3
            }
            .to_string(),
            "bytes length mismatch: expected 4 bytes, got 3"
        );
        assert_eq!(
            Error::OutOfBounds { x: -1, y: 2 }.to_string(),
            "(-1, 2) is out of bounds"
        );
    }
}
