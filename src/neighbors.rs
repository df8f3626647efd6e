//! How a Path may move from one cell to the next

use crate::{Grid, Point};

/// The four cardinal directions, in the order neighbors are reported.
///
/// ```no_code
///     offsets      diagonal offsets:
///   +---+---+---+    +---+---+---+
///   |   | 0 |   |    | 0 |   | 1 |
///   +---+---+---+    +---+---+---+
///   | 3 |   | 1 |    |   |   |   |
///   +---+---+---+    +---+---+---+
///   |   | 2 |   |    | 3 |   | 2 |
///   +---+---+---+    +---+---+---+
/// ```
/// Diagonal `i` lies between the cardinals `i - 1` and `i` (wrapping around).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    /// towards `y - 1`
    UP = 0,
    /// towards `x + 1`
    RIGHT = 1,
    /// towards `y + 1`
    DOWN = 2,
    /// towards `x - 1`
    LEFT = 3,
}
pub use self::Dir::*;

const UNIT_CIRCLE: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

impl Dir {
    /// All four directions, clockwise starting at [`UP`]
    pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Dir>> {
        [UP, RIGHT, DOWN, LEFT].iter().copied()
    }
    /// The index of this direction
    pub fn num(self) -> usize {
        self as usize
    }
    /// The `(dx, dy)` step of this direction
    pub fn offset(self) -> (isize, isize) {
        UNIT_CIRCLE[self.num()]
    }
}

/// Whether and how a Path may move diagonally.
///
/// A diagonal step is flanked by the two cardinal cells it passes between. For a step to the
/// upper left, these are the cells above and to the left:
/// ```no_code
/// D F .
/// F A .
/// . . .
/// ```
/// The diagonal cell `D` itself always has to be walkable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DiagonalMovement {
    /// Only the four cardinal directions
    #[default]
    Never,
    /// Diagonal steps require **both** flanking cells to be walkable
    NoCornerCutting,
    /// Diagonal steps require **either** flanking cell to be walkable
    CornerCutting,
}

impl DiagonalMovement {
    /// Maps the classic `allow_diagonal` and `cross_corners` flags to a movement mode.
    ///
    /// `cross_corners` is ignored when `allow_diagonal` is `false`.
    ///
    /// ## Examples
    /// ```
    /// # use bitgrid_pathfinding::DiagonalMovement;
    /// assert_eq!(DiagonalMovement::from_flags(false, true), DiagonalMovement::Never);
    /// assert_eq!(DiagonalMovement::from_flags(true, false), DiagonalMovement::NoCornerCutting);
    /// assert_eq!(DiagonalMovement::from_flags(true, true), DiagonalMovement::CornerCutting);
    /// ```
    pub fn from_flags(allow_diagonal: bool, cross_corners: bool) -> DiagonalMovement {
        match (allow_diagonal, cross_corners) {
            (false, _) => DiagonalMovement::Never,
            (true, false) => DiagonalMovement::NoCornerCutting,
            (true, true) => DiagonalMovement::CornerCutting,
        }
    }

    /// Whether any diagonal steps are allowed
    pub fn allows_diagonal(self) -> bool {
        self != DiagonalMovement::Never
    }
}

impl Grid {
    /// Collects the walkable neighbors of `(x, y)` into `target`.
    ///
    /// Cardinal neighbors come first (up, right, down, left), followed by the diagonals allowed
    /// by `diagonal` (up-left, up-right, down-right, down-left). An origin outside of the Grid
    /// has no neighbors. The origin itself does not have to be walkable.
    ///
    /// `target` is cleared before use, so a single buffer can be reused across calls.
    ///
    /// ## Examples
    /// ```
    /// # use bitgrid_pathfinding::{DiagonalMovement, Grid, Point};
    /// let grid = Grid::from_matrix(3, 3, &[
    ///     [0, 1, 0],
    ///     [0, 0, 0],
    ///     [0, 0, 0],
    /// ]).unwrap();
    /// let mut neighbors = vec![];
    ///
    /// grid.neighbors(1, 1, DiagonalMovement::NoCornerCutting, &mut neighbors);
    /// assert_eq!(neighbors, vec![
    ///     Point::new(2, 1), Point::new(1, 2), Point::new(0, 1), // right, down, left
    ///     Point::new(2, 2), Point::new(0, 2),                   // down-right, down-left
    /// ]);
    /// ```
    pub fn neighbors(
        &self,
        x: isize,
        y: isize,
        diagonal: DiagonalMovement,
        target: &mut Vec<Point>,
    ) {
        target.clear();
        if !self.contains(x, y) {
            return;
        }

        let mut open = [false; 4];
        for dir in Dir::all() {
            let (dx, dy) = dir.offset();
            if self.is_walkable_at(x + dx, y + dy) {
                open[dir.num()] = true;
                target.push(Point::new((x + dx) as u16, (y + dy) as u16));
            }
        }

        for (i, &(dx, dy)) in DIAGONALS.iter().enumerate() {
            let (before, after) = (open[(i + 3) % 4], open[i]);
            let allowed = match diagonal {
                DiagonalMovement::Never => return,
                DiagonalMovement::NoCornerCutting => before && after,
                DiagonalMovement::CornerCutting => before || after,
            };
            if allowed && self.is_walkable_at(x + dx, y + dy) {
                target.push(Point::new((x + dx) as u16, (y + dy) as u16));
            }
        }
    }

    /// Returns the walkable neighbors of `(x, y)`, see [`neighbors`](Grid::neighbors).
    ///
    /// `cross_corners` selects [`CornerCutting`](DiagonalMovement::CornerCutting) over
    /// [`NoCornerCutting`](DiagonalMovement::NoCornerCutting) and only matters if
    /// `allow_diagonal` is set.
    pub fn get_neighbors(
        &self,
        x: isize,
        y: isize,
        allow_diagonal: bool,
        cross_corners: bool,
    ) -> Vec<Point> {
        let mut target = Vec::with_capacity(8);
        self.neighbors(
            x,
            y,
            DiagonalMovement::from_flags(allow_diagonal, cross_corners),
            &mut target,
        );
        target
    }
}
