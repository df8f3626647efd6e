use super::Grid;

/// `floor(n / d)` and `ceil(n / d)` for `d > 0`
fn floor_ceil(n: isize, d: isize) -> (isize, isize) {
    let floor = n.div_euclid(d);
    let ceil = if n.rem_euclid(d) == 0 { floor } else { floor + 1 };
    (floor, ceil)
}

impl Grid {
    /// Checks whether the straight line from `(ax, ay)` to `(bx, by)` only crosses walkable
    /// cells.
    ///
    /// Both endpoints have to be walkable. The line is then walked along its major axis: for
    /// every step on that axis, the cells on both sides of the exact intersection on the minor
    /// axis (its floor and ceiling) are checked. Vertical lines check the single column.
    ///
    /// Exact diagonals only touch the cells on the diagonal, so a line may squeeze between two
    /// blocked cells that share a corner.
    ///
    /// ## Examples
    /// ```
    /// # use bitgrid_pathfinding::Grid;
    /// let grid = Grid::from_matrix(4, 3, &[
    ///     [0, 0, 0, 0],
    ///     [0, 0, 1, 0],
    ///     [0, 0, 0, 0],
    /// ]).unwrap();
    ///
    /// assert!(grid.is_line_walkable(0, 0, 3, 0));
    /// assert!(!grid.is_line_walkable(0, 1, 3, 1));
    /// assert!(!grid.is_line_walkable(0, 0, 3, 2));
    /// assert!(grid.is_line_walkable(0, 2, 3, 2));
    /// ```
    pub fn is_line_walkable(&self, ax: isize, ay: isize, bx: isize, by: isize) -> bool {
        if !self.is_walkable_at(ax, ay) || !self.is_walkable_at(bx, by) {
            return false;
        }

        let (dx, dy) = (bx - ax, by - ay);

        if dx == 0 {
            let step = if dy < 0 { -1 } else { 1 };
            let mut y = ay;
            while y != by {
                if !self.is_walkable_at(ax, y) {
                    return false;
                }
                y += step;
            }
        } else if dy.abs() < dx.abs() {
            // mostly horizontal: y = ay + (x - ax) * dy / dx
            let step = dx.signum();
            let mut x = ax;
            while x != bx {
                let (floor, ceil) = floor_ceil((x - ax) * dy * step, dx * step);
                if !self.is_walkable_at(x, ay + ceil) || !self.is_walkable_at(x, ay + floor) {
                    return false;
                }
                x += step;
            }
        } else {
            // mostly vertical: x = ax + (y - ay) * dx / dy
            let step = dy.signum();
            let mut y = ay;
            while y != by {
                let (floor, ceil) = floor_ceil((y - ay) * dx * step, dy * step);
                if !self.is_walkable_at(ax + ceil, y) || !self.is_walkable_at(ax + floor, y) {
                    return false;
                }
                y += step;
            }
        }

        true
    }

    /// [`is_line_walkable`](Grid::is_line_walkable) that also refuses to squeeze past blocked
    /// corners.
    ///
    /// Wherever the line passes exactly through a corner shared by four cells, all four of them
    /// have to be walkable. This matches
    /// [`DiagonalMovement::NoCornerCutting`](crate::DiagonalMovement::NoCornerCutting).
    ///
    /// ## Examples
    /// ```
    /// # use bitgrid_pathfinding::Grid;
    /// let grid = Grid::from_matrix(2, 2, &[[0, 1], [0, 0]]).unwrap();
    ///
    /// assert!(grid.is_line_walkable(0, 0, 1, 1));
    /// assert!(!grid.is_line_walkable_strict(0, 0, 1, 1));
    /// assert!(grid.is_line_walkable_strict(0, 0, 0, 1));
    /// ```
    pub fn is_line_walkable_strict(&self, ax: isize, ay: isize, bx: isize, by: isize) -> bool {
        if !self.is_line_walkable(ax, ay, bx, by) {
            return false;
        }

        // walk every cell the line touches, stepping diagonally through exact corners
        let (nx, ny) = ((bx - ax).abs(), (by - ay).abs());
        let (sx, sy) = ((bx - ax).signum(), (by - ay).signum());
        let (mut x, mut y) = (ax, ay);
        let (mut ix, mut iy) = (0, 0);

        while ix < nx || iy < ny {
            let decision = (1 + 2 * ix) * ny - (1 + 2 * iy) * nx;
            if decision == 0 {
                if !self.is_walkable_at(x + sx, y) || !self.is_walkable_at(x, y + sy) {
                    return false;
                }
                x += sx;
                y += sy;
                ix += 1;
                iy += 1;
            } else if decision < 0 {
                x += sx;
                ix += 1;
            } else {
                y += sy;
                iy += 1;
            }
            if !self.is_walkable_at(x, y) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_ceil_signs() {
        assert_eq!(floor_ceil(3, 2), (1, 2));
        assert_eq!(floor_ceil(-3, 2), (-2, -1));
        assert_eq!(floor_ceil(4, 2), (2, 2));
        assert_eq!(floor_ceil(0, 5), (0, 0));
    }

    #[test]
    fn blocked_endpoints() {
        let grid = Grid::from_matrix(3, 1, &[[1, 0, 0]]).unwrap();
        assert!(!grid.is_line_walkable(0, 0, 2, 0));
        assert!(!grid.is_line_walkable(2, 0, 0, 0));
        assert!(!grid.is_line_walkable(1, 0, 3, 0));
        assert!(grid.is_line_walkable(1, 0, 2, 0));
        assert!(grid.is_line_walkable(2, 0, 2, 0));
    }

    #[test]
    fn vertical() {
        let grid = Grid::from_matrix(2, 4, &[[0, 0], [0, 1], [0, 0], [0, 0]]).unwrap();
        assert!(grid.is_line_walkable(0, 0, 0, 3));
        assert!(grid.is_line_walkable(0, 3, 0, 0));
        assert!(!grid.is_line_walkable(1, 0, 1, 3));
        assert!(!grid.is_line_walkable(1, 3, 1, 0));
    }

    #[test]
    fn shallow_line_checks_both_rows() {
        // the line from (0, 0) to (4, 1) passes between row 0 and row 1 at x = 1..3
        let open = Grid::open(5, 2).unwrap();
        assert!(open.is_line_walkable(0, 0, 4, 1));

        let grid = Grid::from_matrix(5, 2, &[[0, 0, 0, 0, 0], [0, 0, 1, 0, 0]]).unwrap();
        assert!(!grid.is_line_walkable(0, 0, 4, 1));
        assert!(!grid.is_line_walkable(4, 1, 0, 0));
    }

    #[test]
    fn steep_line_checks_both_columns() {
        let grid = Grid::from_matrix(2, 5, &[[0, 0], [0, 0], [1, 0], [0, 0], [0, 0]]).unwrap();
        assert!(!grid.is_line_walkable(0, 0, 1, 4));
        assert!(!grid.is_line_walkable(1, 4, 0, 0));
        assert!(grid.is_line_walkable(1, 0, 1, 4));
    }

    #[test]
    fn diagonal_squeezes_between_corners() {
        let grid = Grid::from_matrix(2, 2, &[[0, 1], [1, 0]]).unwrap();
        assert!(grid.is_line_walkable(0, 0, 1, 1));
    }

    #[test]
    fn strict_refuses_blocked_corners() {
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
        for (ax, ay, bx, by) in [(1, 1, 2, 0), (2, 0, 3, 1), (3, 1, 2, 2), (1, 1, 2, 2)] {
            assert!(!grid.is_line_walkable_strict(ax, ay, bx, by));
            assert!(!grid.is_line_walkable_strict(bx, by, ax, ay));
        }
        assert!(grid.is_line_walkable(1, 1, 2, 0));

        // passes between (2, 1) and (1, 2) on its way to (3, 3)
        assert!(grid.is_line_walkable(1, 1, 3, 3));
        assert!(!grid.is_line_walkable_strict(1, 1, 3, 3));

        assert!(grid.is_line_walkable_strict(0, 0, 4, 0));
        assert!(grid.is_line_walkable_strict(3, 0, 4, 4));
        assert!(grid.is_line_walkable_strict(0, 3, 4, 4));
    }

    #[test]
    fn strict_agrees_on_open_grids() {
        let grid = Grid::open(7, 5).unwrap();
        for (bx, by) in [(6, 4), (6, 1), (2, 4), (0, 4), (6, 0)] {
            assert!(grid.is_line_walkable_strict(0, 0, bx, by));
        }
    }

    #[test]
    fn symmetric() {
        let grid = Grid::from_matrix(
            6,
            4,
            &[
                [0, 0, 0, 0, 0, 0],
                [0, 1, 0, 0, 1, 0],
                [0, 0, 0, 1, 0, 0],
                [0, 0, 0, 0, 0, 0],
            ],
        )
        .unwrap();
        for ay in 0..4 {
            for ax in 0..6 {
                for by in 0..4 {
                    for bx in 0..6 {
                        assert_eq!(
                            grid.is_line_walkable(ax, ay, bx, by),
                            grid.is_line_walkable(bx, by, ax, ay),
                            "({}, {}) -> ({}, {})",
                            ax,
                            ay,
                            bx,
                            by
                        );
                        assert_eq!(
                            grid.is_line_walkable_strict(ax, ay, bx, by),
                            grid.is_line_walkable_strict(bx, by, ax, ay),
                            "strict ({}, {}) -> ({}, {})",
                            ax,
                            ay,
                            bx,
                            by
                        );
                    }
                }
            }
        }
    }
}
