use super::{PathFinder, SearchConfig};
use crate::{path::Path, Grid, Point, Result};
use rayon::prelude::*;

/// Runs one search per `(start, goal)` query, spread over the rayon thread pool.
///
/// Every worker thread gets its own [`PathFinder`], while the [`Grid`] is shared. The results
/// are in the same order as `queries`.
///
/// ## Examples
/// ```
/// # use bitgrid_pathfinding::{prelude::*, Error, Point};
/// let grid = Grid::from_matrix(3, 3, &[
///     [0, 1, 0],
///     [0, 1, 0],
///     [0, 1, 0],
/// ]).unwrap();
///
/// let queries = [
///     (Point::new(0, 0), Point::new(0, 2)),
///     (Point::new(0, 0), Point::new(2, 2)),
/// ];
/// let results = find_paths_parallel(&grid, &queries, &SearchConfig::FOUR_WAY);
///
/// assert_eq!(results[0].as_ref().map(|path| path.cost()), Ok(2.0));
/// assert_eq!(results[1], Err(Error::NoPathFound));
/// ```
pub fn find_paths_parallel(
    grid: &Grid,
    queries: &[(Point, Point)],
    config: &SearchConfig,
) -> Vec<Result<Path<Point>>> {
    let config = *config;
    queries
        .par_iter()
        .map_init(
            || PathFinder::new(config),
            |finder, &(start, goal)| finder.find_path(grid, start, goal),
        )
        .collect()
}
