//! Cells on the Grid and the packed keys used to exchange them

use crate::{Error, Result};
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

/// The largest supported value of a coordinate, plus one.
///
/// Packed keys store `x` in the upper and `y` in the lower 16 bits of a `u32`.
pub const COORD_LIMIT: usize = 1 << 16;

/// A cell on the Grid.
///
/// Both coordinates are stored as `u16`, so every Point can be packed into a single key
/// (`x << 16 | y`) without two Points ever colliding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    /// the column
    pub x: u16,
    /// the row
    pub y: u16,
}

impl Point {
    /// Creates a new Point
    pub const fn new(x: u16, y: u16) -> Point {
        Point { x, y }
    }

    /// Creates a Point from signed coordinates, failing with [`Error::InvalidCoordinate`] if
    /// either of them is negative or does not fit into 16 bits.
    ///
    /// ## Examples
    /// ```
    /// # use bitgrid_pathfinding::{Error, Point};
    /// assert_eq!(Point::try_new(3, 4), Ok(Point::new(3, 4)));
    /// assert_eq!(Point::try_new(-1, 4), Err(Error::InvalidCoordinate { x: -1, y: 4 }));
    /// assert!(Point::try_new(0, 65536).is_err());
    /// ```
    pub fn try_new(x: isize, y: isize) -> Result<Point> {
        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(px), Ok(py)) => Ok(Point::new(px, py)),
            _ => Err(Error::InvalidCoordinate { x, y }),
        }
    }

    /// Packs the Point into a single key: `x << 16 | y`
    ///
    /// ## Examples
    /// ```
    /// # use bitgrid_pathfinding::Point;
    /// let point = Point::new(2, 7);
    /// assert_eq!(point.key(), 2 << 16 | 7);
    /// assert_eq!(Point::from_key(point.key()), point);
    /// ```
    pub const fn key(self) -> u32 {
        (self.x as u32) << 16 | self.y as u32
    }

    /// Unpacks a key created by [`key`](Point::key)
    pub const fn from_key(key: u32) -> Point {
        Point {
            x: (key >> 16) as u16,
            y: (key & 0xffff) as u16,
        }
    }

    /// The coordinates as signed values, for offset arithmetic
    pub fn signed(self) -> (isize, isize) {
        (self.x as isize, self.y as isize)
    }

    /// Whether a step from `self` to `other` changes both coordinates
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.x != other.x && self.y != other.y
    }

    /// Straight-line distance between two Points
    pub fn distance(self, other: Point) -> f64 {
        let dx = (self.x as f64 - other.x as f64).abs();
        let dy = (self.y as f64 - other.y as f64).abs();
        dx.hypot(dy)
    }
}

impl From<(u16, u16)> for Point {
    fn from((x, y): (u16, u16)) -> Point {
        Point::new(x, y)
    }
}

impl From<Point> for (u16, u16) {
    fn from(point: Point) -> (u16, u16) {
        (point.x, point.y)
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.key());
    }
}

impl fmt::Display for Point {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.x, self.y)
    }
}

/// A specialized [`HashMap`](hashbrown::HashMap) for Points with a faster Hasher
pub type PointMap<V> = hashbrown::HashMap<Point, V, BuildPointHasher>;
/// A specialized [`HashSet`](hashbrown::HashSet) for Points with a faster Hasher
pub type PointSet = hashbrown::HashSet<Point, BuildPointHasher>;

/// A [`BuildHasher`] specialized on Points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildPointHasher;

/// A [`Hasher`] specialized on Points
///
/// Hashes the packed key with a single multiplication, which spreads the bits enough for
/// hashbrown's control bytes while staying much cheaper than a general purpose hasher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointHasher(u64);

impl BuildHasher for BuildPointHasher {
    type Hasher = PointHasher;
    fn build_hasher(&self) -> PointHasher {
        PointHasher(0)
    }
}

impl Hasher for PointHasher {
    /// panics, since only Points are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with Points")
    }
    /// Writes a packed Point key into this hasher.
    fn write_u32(&mut self, key: u32) {
        let mixed = (key as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        // the low bits pick the bucket, fold the high half in so `x` reaches them
        self.0 = mixed ^ (mixed >> 32);
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

/// create a new [`PointMap`] by calling the [`with_capacity_and_hasher`](hashbrown::HashMap::with_capacity_and_hasher) Function
pub fn point_map_with_cap<V>(capacity: usize) -> PointMap<V> {
    PointMap::with_capacity_and_hasher(capacity, BuildPointHasher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_packing() {
        let corner = Point::new(u16::MAX, u16::MAX);
        assert_eq!(corner.key(), u32::MAX);
        assert_eq!(Point::from_key(corner.key()), corner);

        assert_eq!(Point::new(1, 0).key(), 65536);
        assert_eq!(Point::new(0, 1).key(), 1);
        assert_ne!(Point::new(1, 0).key(), Point::new(0, 1).key());
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Point::try_new(0, 0).is_ok());
        assert!(Point::try_new(65535, 65535).is_ok());
        assert_eq!(
            Point::try_new(65536, 0),
            Err(Error::InvalidCoordinate { x: 65536, y: 0 })
        );
        assert_eq!(
            Point::try_new(3, -2),
            Err(Error::InvalidCoordinate { x: 3, y: -2 })
        );
    }

    #[test]
    fn point_map() {
        let mut map = point_map_with_cap(4);
        map.insert(Point::new(1, 2), 'a');
        map.insert(Point::new(2, 1), 'b');
        assert_eq!(map[&Point::new(1, 2)], 'a');
        assert_eq!(map[&Point::new(2, 1)], 'b');
        assert_eq!(map.get(&Point::new(0, 0)), None);

        let mut set = PointSet::default();
        assert!(set.insert(Point::new(5, 5)));
        assert!(!set.insert(Point::new(5, 5)));
    }

    #[test]
    fn distance() {
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5.0);
        assert!(Point::new(1, 1).is_diagonal_to(Point::new(2, 0)));
        assert!(!Point::new(1, 1).is_diagonal_to(Point::new(1, 0)));
    }
}
