use super::Grid;
use crate::{Point, PointMap};
use std::fmt::{self, Write};

const WALKABLE: char = '░';
const BLOCKED: char = '▓';

/// A Grid together with the markers to draw over it
struct Dump<'a> {
    grid: &'a Grid,
    marks: PointMap<char>,
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let Dump { grid, marks } = self;
        write!(
            out,
            "[Grid(width={}, height={})]\nDump: {}=walkable, {}=blocked",
            grid.width, grid.height, WALKABLE, BLOCKED
        )?;
        for y in 0..grid.height {
            out.write_char('\n')?;
            for x in 0..grid.width {
                let point = Point::new(x as u16, y as u16);
                let glyph = match marks.get(&point) {
                    Some(&mark) => mark,
                    None if grid.is_walkable(point) => WALKABLE,
                    None => BLOCKED,
                };
                out.write_char(glyph)?;
            }
        }
        Ok(())
    }
}

impl Grid {
    /// Renders the Grid for human inspection.
    ///
    /// Every cell of `path` is shown as its index in the Path (modulo 10), `start` as `S`
    /// and `end` as `E`. All other cells use `░` if walkable and `▓` if blocked.
    ///
    /// ## Examples
    /// ```
    /// # use bitgrid_pathfinding::{Grid, Point};
    /// let grid = Grid::from_matrix(3, 2, &[[0, 1, 0], [0, 0, 0]]).unwrap();
    /// let path = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 1), Point::new(2, 1)];
    ///
    /// assert_eq!(
    ///     grid.dump(Point::new(0, 0), Point::new(2, 1), &path),
    ///     "[Grid(width=3, height=2)]\nDump: ░=walkable, ▓=blocked\nS▓░\n12E",
    /// );
    /// ```
    pub fn dump(&self, start: Point, end: Point, path: &[Point]) -> String {
        let mut marks = PointMap::default();
        for (i, point) in path.iter().enumerate() {
            let digit = char::from_digit((i % 10) as u32, 10).unwrap_or('?');
            marks.insert(*point, digit);
        }
        marks.insert(start, 'S');
        marks.insert(end, 'E');

        Dump { grid: self, marks }.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dump = Dump {
            grid: self,
            marks: PointMap::default(),
        };
        fmt::Display::fmt(&dump, fmt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let grid = Grid::from_matrix(2, 2, &[[0, 1], [1, 0]]).unwrap();
        assert_eq!(
            grid.to_string(),
            "[Grid(width=2, height=2)]\nDump: ░=walkable, ▓=blocked\n░▓\n▓░"
        );
    }

    #[test]
    fn long_path_wraps_digits() {
        let grid = Grid::open(12, 1).unwrap();
        let path: Vec<Point> = (0..12).map(|x| Point::new(x, 0)).collect();
        let dump = grid.dump(Point::new(0, 0), Point::new(11, 0), &path);
        assert!(dump.ends_with("\nS1234567890E"));
    }
}
