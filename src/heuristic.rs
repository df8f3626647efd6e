//! Estimates for the remaining distance to the goal

use crate::{neighbors::DiagonalMovement, Point};

/// The Heuristic used by the A* search to estimate the cost from a cell to the goal.
///
/// Cardinal steps cost `1` and diagonal steps cost `√2`. A Heuristic that never overestimates
/// that cost (an "admissible" one) makes A* return optimal Paths.
///
/// | Heuristic | admissible for |
/// |---|---|
/// | [`Euclidean`](Heuristic::Euclidean) | all movement modes |
/// | [`Octile`](Heuristic::Octile) | all movement modes, tighter than Euclidean with diagonals |
/// | [`Manhattan`](Heuristic::Manhattan) | only [`DiagonalMovement::Never`] |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// the straight-line distance `sqrt(dx² + dy²)`
    #[default]
    Euclidean,
    /// the cost of the best 8-connected route without obstacles: `max + (√2 - 1) * min`
    Octile,
    /// `dx + dy`, overestimates as soon as diagonal steps are possible
    Manhattan,
}

impl Heuristic {
    /// Estimates the cost of going from `point` to `goal`
    ///
    /// ## Examples
    /// ```
    /// # use bitgrid_pathfinding::{Heuristic, Point};
    /// let (a, b) = (Point::new(0, 0), Point::new(3, 4));
    /// assert_eq!(Heuristic::Euclidean.estimate(a, b), 5.0);
    /// assert_eq!(Heuristic::Manhattan.estimate(a, b), 7.0);
    /// assert!((Heuristic::Octile.estimate(a, b) - (1.0 + 3.0 * 2f64.sqrt())).abs() < 1e-9);
    /// ```
    pub fn estimate(self, point: Point, goal: Point) -> f64 {
        let dx = (point.x as f64 - goal.x as f64).abs();
        let dy = (point.y as f64 - goal.y as f64).abs();
        match self {
            Heuristic::Euclidean => dx.hypot(dy),
            Heuristic::Octile => dx.max(dy) + (std::f64::consts::SQRT_2 - 1.0) * dx.min(dy),
            Heuristic::Manhattan => dx + dy,
        }
    }

    /// Whether this Heuristic never overestimates under the given movement mode
    pub fn is_admissible(self, diagonal: DiagonalMovement) -> bool {
        !(self == Heuristic::Manhattan && diagonal.allows_diagonal())
    }
}
