//! A* searches on a [`Grid`] and the post-processing of their Paths

use crate::{path::Path, Grid, Point, Result};

mod a_star;
pub use a_star::PathFinder;

mod config;
pub use config::{SearchConfig, Smoothing};

mod smoothing;
pub use smoothing::{path_length, prune_collinear, shortcut_line_of_sight};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::find_paths_parallel;

/// Searches the shortest Path from `start` to `goal`.
///
/// Shorthand for a single search with a fresh [`PathFinder`]. See
/// [`PathFinder::find_path`] for the possible Errors.
///
/// ## Examples
/// ```
/// # use bitgrid_pathfinding::{prelude::*, Point};
/// // 0 = walkable, 1 = wall
/// let grid = Grid::from_matrix(5, 5, &[
///     [0, 0, 1, 0, 0],
///     [0, 0, 1, 0, 0],
///     [0, 0, 1, 0, 0],
///     [0, 0, 1, 0, 0],
///     [0, 0, 0, 0, 0],
/// ]).unwrap();
///
/// let path = find_path(&grid, Point::new(0, 0), Point::new(4, 0), &SearchConfig::FOUR_WAY)
///     .unwrap();
///
/// assert_eq!(path.len(), 13);
/// assert_eq!(path.cost(), 12.0);
/// assert_eq!(path[0], Point::new(0, 0));
/// assert_eq!(path[12], Point::new(4, 0));
/// ```
pub fn find_path(
    grid: &Grid,
    start: Point,
    goal: Point,
    config: &SearchConfig,
) -> Result<Path<Point>> {
    PathFinder::new(*config).find_path(grid, start, goal)
}

/// Same as [`find_path`], but with signed coordinates.
///
/// Fails with [`Error::InvalidCoordinate`](crate::Error::InvalidCoordinate) if either
/// coordinate cannot be represented as a [`Point`].
///
/// ## Examples
/// ```
/// # use bitgrid_pathfinding::{prelude::*, Error};
/// let grid = Grid::open(3, 3).unwrap();
///
/// let path = find_path_xy(&grid, (0, 0), (2, 2), &SearchConfig::EIGHT_WAY).unwrap();
/// assert_eq!(path.len(), 3);
///
/// assert_eq!(
///     find_path_xy(&grid, (-1, 0), (2, 2), &SearchConfig::EIGHT_WAY),
///     Err(Error::InvalidCoordinate { x: -1, y: 0 })
/// );
/// ```
pub fn find_path_xy(
    grid: &Grid,
    (start_x, start_y): (isize, isize),
    (goal_x, goal_y): (isize, isize),
    config: &SearchConfig,
) -> Result<Path<Point>> {
    let start = Point::try_new(start_x, start_y)?;
    let goal = Point::try_new(goal_x, goal_y)?;
    find_path(grid, start, goal, config)
}

/// Searches between two packed keys (see [`Point::key`]) with
/// [`FOUR_WAY`](SearchConfig::FOUR_WAY) movement.
///
/// ## Examples
/// ```
/// # use bitgrid_pathfinding::{prelude::*, Point};
/// let grid = Grid::open(4, 4).unwrap();
/// let (start, goal) = (Point::new(0, 1), Point::new(3, 1));
///
/// let path = find_path_by_key(&grid, start.key(), goal.key()).unwrap();
/// assert_eq!(path.cost(), 3.0);
/// ```
pub fn find_path_by_key(grid: &Grid, start_key: u32, end_key: u32) -> Result<Path<Point>> {
    find_path(
        grid,
        Point::from_key(start_key),
        Point::from_key(end_key),
        &SearchConfig::FOUR_WAY,
    )
}
