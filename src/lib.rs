#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find Paths on large, bit-packed walkability Grids.
//!
//! ## Introduction
//! Many Grids only need to know one thing per cell: can it be walked across or not. Storing
//! that as a single bit instead of a full cost value makes even huge maps cheap to keep in
//! memory and to send around. This crate provides such a [`Grid`], an A* search on top of it,
//! line-of-sight checks and two ways of smoothing the found Paths.
//!
//! Cardinal steps cost `1`, diagonal steps cost `√2`. Whether diagonal steps are allowed, and
//! whether they may squeeze past a blocked corner, is part of the [`SearchConfig`], as are the
//! [`Heuristic`] and the [`Smoothing`](search::Smoothing) of the result.
//!
//! ## Examples
//! Creating the Grid:
//! ```
//! use bitgrid_pathfinding::prelude::*;
//!
//! // 0 = walkable, 1 = wall
//! let grid = Grid::from_matrix(5, 5, &[
//!     [0, 1, 0, 0, 0],
//!     [0, 1, 1, 1, 1],
//!     [0, 1, 0, 0, 0],
//!     [0, 1, 0, 1, 0],
//!     [0, 0, 0, 1, 0],
//! ]).unwrap();
//!
//! assert_eq!(grid.width(), 5);
//! assert!(!grid.is_walkable_at(1, 0));
//! ```
//! The Grid can just as well be created from a buffer that is already packed, see [`Grid::new`]
//! for the layout.
//!
//! ### Pathfinding
//! Finding the Path to a single Goal:
//! ```
//! # use bitgrid_pathfinding::{prelude::*, Point};
//! #
//! # // 0 = walkable, 1 = wall
//! # let grid = Grid::from_matrix(5, 5, &[
//! #     [0, 1, 0, 0, 0],
//! #     [0, 1, 1, 1, 1],
//! #     [0, 1, 0, 0, 0],
//! #     [0, 1, 0, 1, 0],
//! #     [0, 0, 0, 1, 0],
//! # ]).unwrap();
//! #
//! let start = Point::new(0, 0);
//! let goal = Point::new(4, 4);
//!
//! let path = find_path(&grid, start, goal, &SearchConfig::FOUR_WAY).unwrap();
//!
//! assert_eq!(path.cost(), 12.0);
//! assert_eq!(path.first(), Some(&start));
//! assert_eq!(path.last(), Some(&goal));
//!
//! // the top right corner is walled off
//! assert_eq!(
//!     find_path(&grid, start, Point::new(4, 0), &SearchConfig::FOUR_WAY),
//!     Err(Error::NoPathFound)
//! );
//! ```
//!
//! For many searches on the same thread, keep a [`PathFinder`] around instead of calling
//! [`find_path`] every time. It holds all of the search state and reuses its allocations.
//! With the `parallel` feature (enabled by default), [`find_paths_parallel`] answers a batch of
//! queries on the rayon thread pool.
//!
//! ### Configuration
//! [`SearchConfig`] provides presets for the common cases, which can be adjusted with its
//! builder methods:
//! ```
//! use bitgrid_pathfinding::{prelude::*, search::Smoothing, Point};
//!
//! let grid = Grid::open(8, 8).unwrap();
//!
//! let config = SearchConfig::EIGHT_WAY
//!     .with_smoothing(Smoothing::LineOfSight)
//!     .with_max_expansions(1000);
//!
//! let path = find_path(&grid, Point::new(0, 0), Point::new(7, 3), &config).unwrap();
//!
//! // nothing is in the way, so only the two endpoints remain
//! assert_eq!(path, vec![Point::new(0, 0), Point::new(7, 3)]);
//! ```

mod error;
pub use self::error::{Error, Result};

pub mod point;
pub use self::point::{Point, PointMap, PointSet};

mod grid;
pub use self::grid::Grid;

pub mod neighbors;
pub use self::neighbors::DiagonalMovement;

mod heuristic;
pub use self::heuristic::Heuristic;

pub mod queue;

pub mod path;

pub mod search;
pub use self::search::{find_path, find_path_by_key, find_path_xy, PathFinder, SearchConfig};
#[cfg(feature = "parallel")]
pub use self::search::find_paths_parallel;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        find_path, find_path_by_key, find_path_xy, neighbors::DiagonalMovement, Error, Grid,
        Heuristic, PathFinder, SearchConfig,
    };
    #[cfg(feature = "parallel")]
    pub use crate::find_paths_parallel;
}
