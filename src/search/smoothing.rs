//! Post-processing of found Paths

use crate::{neighbors::DiagonalMovement, Grid, Point};
use log::trace;

fn cross(ax: isize, ay: isize, bx: isize, by: isize) -> isize {
    ax * by - ay * bx
}

/// Removes every waypoint that lies on a straight line between its neighbors.
///
/// The route itself is unchanged, only intermediate points of straight runs are dropped. The
/// first and the last point are always kept.
///
/// ## Examples
/// ```
/// # use bitgrid_pathfinding::{Point, search::prune_collinear};
/// let path: Vec<Point> = [(0, 0), (1, 0), (2, 0), (3, 1), (4, 2)]
///     .iter().map(|&p| p.into()).collect();
///
/// assert_eq!(
///     prune_collinear(&path),
///     vec![Point::new(0, 0), Point::new(2, 0), Point::new(4, 2)],
/// );
/// ```
pub fn prune_collinear(path: &[Point]) -> Vec<Point> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut pruned = Vec::with_capacity(path.len());
    pruned.push(path[0]);
    for window in path.windows(3) {
        let [prev, current, next] = [window[0], window[1], window[2]].map(Point::signed);
        let incoming = (current.0 - prev.0, current.1 - prev.1);
        let outgoing = (next.0 - current.0, next.1 - current.1);
        if cross(incoming.0, incoming.1, outgoing.0, outgoing.1) == 0 {
            trace!("pruning collinear waypoint {}", window[1]);
            continue;
        }
        pruned.push(window[1]);
    }
    pruned.push(path[path.len() - 1]);
    pruned
}

/// One pass: drops every waypoint whose last kept predecessor can see its successor
fn shortcut_pass(grid: &Grid, path: &[Point], diagonal: DiagonalMovement) -> Vec<Point> {
    let mut smoothed = Vec::with_capacity(path.len());
    smoothed.push(path[0]);
    for window in path.windows(3) {
        let anchor = smoothed[smoothed.len() - 1];
        let (ax, ay) = Point::signed(anchor);
        let (bx, by) = window[2].signed();
        let visible = match diagonal {
            DiagonalMovement::CornerCutting => grid.is_line_walkable(ax, ay, bx, by),
            _ => grid.is_line_walkable_strict(ax, ay, bx, by),
        };
        if visible {
            trace!("shortcut {} -> {} skips {}", anchor, window[2], window[1]);
            continue;
        }
        smoothed.push(window[1]);
    }
    smoothed.push(path[path.len() - 1]);
    smoothed
}

/// Removes waypoints that can be skipped by walking in a straight line.
///
/// Each interior waypoint is dropped if its predecessor has an unobstructed line of sight to
/// its successor. This is repeated until nothing changes, so smoothing an already smoothed
/// Path returns it unchanged.
///
/// The line of sight follows the corner policy of `diagonal`: with
/// [`CornerCutting`](DiagonalMovement::CornerCutting) it is [`Grid::is_line_walkable`],
/// otherwise [`Grid::is_line_walkable_strict`], so a shortcut never squeezes past a blocked
/// corner that a single step could not pass either.
///
/// ## Examples
/// ```
/// # use bitgrid_pathfinding::{DiagonalMovement, Grid, Point, search::shortcut_line_of_sight};
/// let grid = Grid::open(4, 4).unwrap();
/// let path: Vec<Point> = [(0, 0), (1, 0), (2, 0), (2, 1), (3, 1)]
///     .iter().map(|&p| p.into()).collect();
///
/// assert_eq!(
///     shortcut_line_of_sight(&grid, &path, DiagonalMovement::NoCornerCutting),
///     vec![Point::new(0, 0), Point::new(3, 1)],
/// );
/// ```
pub fn shortcut_line_of_sight(
    grid: &Grid,
    path: &[Point],
    diagonal: DiagonalMovement,
) -> Vec<Point> {
    let mut current = path.to_vec();
    while current.len() > 2 {
        let next = shortcut_pass(grid, &current, diagonal);
        if next.len() == current.len() {
            break;
        }
        current = next;
    }
    current
}

/// The sum of the straight-line lengths of all segments
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(list: &[(u16, u16)]) -> Vec<Point> {
        list.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn collinear_keeps_corners() {
        let path = points(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1)]);
        assert_eq!(
            prune_collinear(&path),
            points(&[(0, 0), (0, 2), (2, 2), (2, 1)])
        );
    }

    #[test]
    fn short_paths_untouched() {
        let grid = Grid::open(3, 3).unwrap();
        for path in [points(&[]), points(&[(1, 1)]), points(&[(0, 0), (1, 1)])] {
            assert_eq!(prune_collinear(&path), path);
            assert_eq!(
                shortcut_line_of_sight(&grid, &path, DiagonalMovement::CornerCutting),
                path
            );
        }
    }

    #[test]
    fn shortcut_respects_walls() {
        // S . #
        // . . #
        // . . E
        let grid = Grid::from_matrix(3, 3, &[[0, 0, 1], [0, 0, 1], [0, 0, 0]]).unwrap();
        let path = points(&[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)]);
        let smoothed = shortcut_line_of_sight(&grid, &path, DiagonalMovement::CornerCutting);

        assert_eq!(smoothed.first(), Some(&Point::new(0, 0)));
        assert_eq!(smoothed.last(), Some(&Point::new(2, 2)));
        for w in smoothed.windows(2) {
            let ((ax, ay), (bx, by)) = (w[0].signed(), w[1].signed());
            assert!(grid.is_line_walkable(ax, ay, bx, by));
        }
        assert!(smoothed.len() < path.len());
    }

    #[test]
    fn shortcut_is_idempotent() {
        let grid = Grid::from_matrix(
            5,
            5,
            &[
                [0, 0, 0, 0, 0],
                [0, 1, 1, 1, 0],
                [0, 0, 0, 1, 0],
                [1, 1, 0, 1, 0],
                [0, 0, 0, 0, 0],
            ],
        )
        .unwrap();
        let path = points(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
            (2, 3),
            (2, 4),
            (3, 4),
            (4, 4),
        ]);
        for diagonal in [
            DiagonalMovement::Never,
            DiagonalMovement::NoCornerCutting,
            DiagonalMovement::CornerCutting,
        ] {
            let once = shortcut_line_of_sight(&grid, &path, diagonal);
            let twice = shortcut_line_of_sight(&grid, &once, diagonal);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn shortcut_follows_corner_policy() {
        // (2, 1) and (1, 2) are blocked
        let grid = Grid::from_matrix(
            5,
            5,
            &[
                [0, 0, 0, 0, 0],
                [0, 0, 1, 0, 0],
                [0, 1, 0, 0, 0],
                [0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0],
            ],
        )
        .unwrap();
        let path = points(&[(1, 1), (1, 0), (2, 0), (3, 0), (3, 1), (3, 2), (2, 2)]);

        let cutting = shortcut_line_of_sight(&grid, &path, DiagonalMovement::CornerCutting);
        assert_eq!(cutting, points(&[(1, 1), (2, 0), (3, 1), (2, 2)]));

        let strict = shortcut_line_of_sight(&grid, &path, DiagonalMovement::NoCornerCutting);
        assert_eq!(strict, points(&[(1, 1), (1, 0), (3, 0), (3, 2), (2, 2)]));
        assert_eq!(path_length(&strict), 6.0);
        for w in strict.windows(2) {
            let ((ax, ay), (bx, by)) = (w[0].signed(), w[1].signed());
            assert!(grid.is_line_walkable_strict(ax, ay, bx, by));
        }
    }

    #[test]
    fn lengths() {
        let path = points(&[(0, 0), (3, 4), (3, 6)]);
        assert_eq!(path_length(&path), 7.0);
        assert_eq!(path_length(&points(&[(2, 2)])), 0.0);
    }
}
