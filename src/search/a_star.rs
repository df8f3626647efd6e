use super::{path_length, prune_collinear, shortcut_line_of_sight, SearchConfig, Smoothing};
use crate::path::{Cost, Path};
use crate::point::{point_map_with_cap, BuildPointHasher};
use crate::queue::PriorityQueue;
use crate::{Error, Grid, Point, PointMap, PointSet, Result};

use hashbrown::hash_map::Entry;
use log::{debug, trace, warn};
use std::f64::consts::SQRT_2;
use std::time::Instant;

#[derive(Clone, Copy, Debug)]
struct Node {
    /// cost of the best known route from the start
    g: Cost,
    /// cached heuristic estimate to the goal
    h: Cost,
    /// `None` only for the start
    parent: Option<Point>,
}

/// A reusable A* search context.
///
/// All state of a search (open and closed sets, scores, parent links) lives in the PathFinder
/// and is reset at the start of every [`find_path`](PathFinder::find_path). Reusing one
/// PathFinder for many searches keeps its allocations around, and since searching requires
/// `&mut self`, no two searches can ever share the same state. To search in parallel, use one
/// PathFinder per thread: the [`Grid`] itself can be shared freely.
///
/// ## Examples
/// ```
/// # use bitgrid_pathfinding::{prelude::*, Point};
/// let grid = Grid::from_matrix(3, 3, &[
///     [0, 0, 0],
///     [1, 1, 0],
///     [0, 0, 0],
/// ]).unwrap();
///
/// let mut finder = PathFinder::new(SearchConfig::FOUR_WAY);
///
/// let path = finder.find_path(&grid, Point::new(0, 0), Point::new(0, 2)).unwrap();
/// assert_eq!(path.len(), 7);
/// assert_eq!(path.cost(), 6.0);
///
/// let path = finder.find_path(&grid, Point::new(0, 2), Point::new(2, 2)).unwrap();
/// assert_eq!(path.cost(), 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct PathFinder {
    config: SearchConfig,
    nodes: PointMap<Node>,
    f_scores: PointMap<Cost>,
    closed: PointSet,
    open: PriorityQueue<Point, BuildPointHasher>,
    neighbors: Vec<Point>,
    expanded: usize,
}

impl PathFinder {
    /// Creates a new PathFinder using `config` for all of its searches
    pub fn new(config: SearchConfig) -> PathFinder {
        PathFinder {
            config,
            nodes: PointMap::default(),
            f_scores: PointMap::default(),
            closed: PointSet::default(),
            open: PriorityQueue::with_hasher(BuildPointHasher),
            neighbors: Vec::with_capacity(8),
            expanded: 0,
        }
    }

    /// Creates a new PathFinder with room for searches touching about `size_hint` cells
    pub fn with_capacity(config: SearchConfig, size_hint: usize) -> PathFinder {
        PathFinder {
            nodes: point_map_with_cap(size_hint),
            f_scores: point_map_with_cap(size_hint),
            open: PriorityQueue::with_capacity_and_hasher(size_hint / 2, BuildPointHasher),
            ..PathFinder::new(config)
        }
    }

    /// The config used for searches
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replaces the config for future searches
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// The number of Nodes expanded by the last search
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.f_scores.clear();
        self.closed.clear();
        self.open.reset();
        self.expanded = 0;
    }

    /// Searches the shortest Path from `start` to `goal` using the
    /// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
    ///
    /// ## Returns
    /// The Path, ordered from `start` to `goal` (both included), or
    /// - [`Error::NoPathFound`] if `start` or `goal` is not walkable or no route connects them
    /// - [`Error::BudgetExhausted`] if [`max_expansions`](SearchConfig::max_expansions) Nodes
    ///   were expanded without reaching the goal
    /// - [`Error::InadmissibleHeuristic`] for the Manhattan Heuristic with diagonal movement
    ///
    /// If `start == goal`, the Path consists of that single Point.
    pub fn find_path(&mut self, grid: &Grid, start: Point, goal: Point) -> Result<Path<Point>> {
        let config = self.config;
        if !config.heuristic.is_admissible(config.diagonal) {
            warn!(
                "refusing to search with {:?} heuristic and {:?} movement",
                config.heuristic, config.diagonal
            );
            return Err(Error::InadmissibleHeuristic);
        }

        self.reset();
        debug!(
            "A* from {} to {} ({:?}, {:?}, smoothing: {:?})",
            start, goal, config.diagonal, config.heuristic, config.smoothing
        );
        let timer = Instant::now();

        if !grid.is_walkable(start) || !grid.is_walkable(goal) {
            debug!("start or goal is not walkable");
            return Err(Error::NoPathFound);
        }

        self.nodes.insert(
            start,
            Node {
                g: 0.0,
                h: config.heuristic.estimate(start, goal),
                parent: None,
            },
        );
        self.f_scores.insert(start, 0.0);
        self.open.push(start, &self.f_scores);

        while let Some(current) = self.open.pop(&self.f_scores) {
            self.closed.insert(current);

            if current == goal {
                let path = self.finish(grid, goal);
                debug!(
                    "found path with {} points and cost {:.3} after expanding {} nodes in {:?}",
                    path.len(),
                    path.cost(),
                    self.expanded,
                    timer.elapsed()
                );
                return Ok(path);
            }

            if config.max_expansions == Some(self.expanded) {
                debug!(
                    "giving up after expanding {} nodes in {:?}",
                    self.expanded,
                    timer.elapsed()
                );
                return Err(Error::BudgetExhausted {
                    expanded: self.expanded,
                });
            }
            self.expanded += 1;
            trace!("expanding {}", current);

            let (x, y) = current.signed();
            grid.neighbors(x, y, config.diagonal, &mut self.neighbors);
            let current_cost = self.nodes[&current].g;

            for &neighbor in self.neighbors.iter() {
                if self.closed.contains(&neighbor) {
                    continue;
                }

                let step = if neighbor.is_diagonal_to(current) {
                    SQRT_2
                } else {
                    1.0
                };
                let cost = current_cost + step;

                match self.nodes.entry(neighbor) {
                    Entry::Occupied(mut entry) => {
                        let node = entry.get_mut();
                        if cost >= node.g {
                            continue;
                        }
                        node.g = cost;
                        node.parent = Some(current);
                        self.f_scores.insert(neighbor, cost + node.h);
                        self.open.update_item(neighbor, &self.f_scores);
                    }
                    Entry::Vacant(entry) => {
                        let h = config.heuristic.estimate(neighbor, goal);
                        entry.insert(Node {
                            g: cost,
                            h,
                            parent: Some(current),
                        });
                        self.f_scores.insert(neighbor, cost + h);
                        self.open.push(neighbor, &self.f_scores);
                    }
                }
            }
        }

        debug!(
            "no path after expanding {} nodes in {:?}",
            self.expanded,
            timer.elapsed()
        );
        Err(Error::NoPathFound)
    }

    /// Follows the parent links back from `goal` and applies the configured smoothing
    fn finish(&self, grid: &Grid, goal: Point) -> Path<Point> {
        let steps = {
            let mut steps = vec![goal];
            let mut current = goal;

            while let Some(prev) = self.nodes[&current].parent {
                steps.push(prev);
                current = prev;
            }
            steps.reverse();
            steps
        };
        let cost = self.nodes[&goal].g;

        match self.config.smoothing {
            Smoothing::None => Path::new(steps, cost),
            Smoothing::Collinear => Path::new(prune_collinear(&steps), cost),
            Smoothing::LineOfSight => {
                let smoothed = shortcut_line_of_sight(grid, &steps, self.config.diagonal);
                let cost = path_length(&smoothed);
                Path::new(smoothed, cost)
            }
        }
    }
}

impl Default for PathFinder {
    fn default() -> PathFinder {
        PathFinder::new(SearchConfig::default())
    }
}
