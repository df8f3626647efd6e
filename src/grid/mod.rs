//! The bit-packed walkability Grid

use crate::{point::COORD_LIMIT, Error, Point, Result};
use nanorand::{Rng, WyRand};

mod dump;
mod line;

/// A rectangular Grid of cells that are either walkable or blocked.
///
/// The Grid stores one bit per cell, row by row, writing each byte from its highest to its
/// lowest bit. A set bit marks a **blocked** cell:
/// ```no_code
/// index = y * width + x
/// byte  = index / 8
/// bit   = 7 - index % 8      (1 = blocked, 0 = walkable)
/// ```
/// This buffer (see [`bytes`](Grid::bytes)) is the only persistent artifact of this crate and
/// can be exchanged with anything that uses the same layout.
///
/// The dimensions are fixed once the Grid is created, but individual cells can be opened up
/// with [`set_walkable_at`](Grid::set_walkable_at). Searches only borrow the Grid immutably, so
/// any number of them can run at the same time as long as nobody holds it mutably.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 || width > COORD_LIMIT || height > COORD_LIMIT {
        return Err(Error::InvalidDimension { width, height });
    }
    // 65536 * 65536 does not fit into a 32 bit usize
    match width.checked_mul(height) {
        Some(cells) if cells <= usize::MAX - 7 => Ok(()),
        _ => Err(Error::InvalidDimension { width, height }),
    }
}

fn byte_len(width: usize, height: usize) -> usize {
    (width * height + 7) / 8
}

impl Grid {
    /// Creates a Grid from an already packed buffer.
    ///
    /// Fails with [`Error::InvalidDimension`] for empty or oversized dimensions and with
    /// [`Error::SizeMismatch`] if `bytes` is not exactly `ceil(width * height / 8)` long.
    ///
    /// ## Examples
    /// ```
    /// # use bitgrid_pathfinding::{Error, Grid};
    /// // 3x3, only the center is blocked
    /// let grid = Grid::new(3, 3, vec![0b0000_1000, 0b0000_0000]).unwrap();
    /// assert!(!grid.is_walkable_at(1, 1));
    /// assert!(grid.is_walkable_at(2, 2));
    ///
    /// assert_eq!(
    ///     Grid::new(3, 3, vec![0]),
    ///     Err(Error::SizeMismatch { expected: 2, actual: 1 })
    /// );
    /// ```
    pub fn new(width: usize, height: usize, bytes: Vec<u8>) -> Result<Grid> {
        check_dimensions(width, height)?;
        let expected = byte_len(width, height);
        if bytes.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            bytes,
        })
    }

    /// Creates a Grid where every cell is walkable
    pub fn open(width: usize, height: usize) -> Result<Grid> {
        check_dimensions(width, height)?;
        Grid::new(width, height, vec![0; byte_len(width, height)])
    }

    /// Packs a dense matrix (`matrix[y][x]`, `0` = walkable, anything else = blocked) into the
    /// buffer layout used by [`Grid::new`].
    ///
    /// The buffer starts out fully blocked, so rows or columns the matrix does not provide stay
    /// blocked. Cells of the matrix beyond `width` or `height` are ignored.
    ///
    /// ## Examples
    /// ```
    /// # use bitgrid_pathfinding::Grid;
    /// let bytes = Grid::bytes_from_matrix(3, 3, &[[0, 1, 0], [0, 0, 0], [1, 0, 0]]).unwrap();
    /// // the 7 unused bits at the end stay set
    /// assert_eq!(bytes, vec![0b0100_0010, 0b0111_1111]);
    /// ```
    pub fn bytes_from_matrix<T, R>(width: usize, height: usize, matrix: &[R]) -> Result<Vec<u8>>
    where
        T: Copy + Default + PartialEq,
        R: AsRef<[T]>,
    {
        check_dimensions(width, height)?;

        let mut bytes = vec![0xff; byte_len(width, height)];
        for (y, row) in matrix.iter().take(height).enumerate() {
            for (x, cell) in row.as_ref().iter().take(width).enumerate() {
                if *cell == T::default() {
                    let index = y * width + x;
                    bytes[index >> 3] &= !(1 << (7 - index % 8));
                }
            }
        }
        Ok(bytes)
    }

    /// Creates a Grid from a dense matrix, see [`bytes_from_matrix`](Grid::bytes_from_matrix)
    ///
    /// ## Examples
    /// ```
    /// # use bitgrid_pathfinding::Grid;
    /// // 0 = walkable, 1 = blocked
    /// let grid = Grid::from_matrix(4, 2, &[
    ///     [0, 0, 1, 0],
    ///     [1, 0, 0, 0],
    /// ]).unwrap();
    ///
    /// assert!(grid.is_walkable_at(1, 0));
    /// assert!(!grid.is_walkable_at(2, 0));
    /// assert!(!grid.is_walkable_at(0, 1));
    /// assert!(!grid.is_walkable_at(4, 0)); // out of bounds
    /// ```
    pub fn from_matrix<T, R>(width: usize, height: usize, matrix: &[R]) -> Result<Grid>
    where
        T: Copy + Default + PartialEq,
        R: AsRef<[T]>,
    {
        let bytes = Grid::bytes_from_matrix(width, height, matrix)?;
        Grid::new(width, height, bytes)
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// The packed buffer
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the Grid and returns the packed buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Whether `(x, y)` lies on the Grid
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// byte index and bit mask of an in-bounds cell
    fn bit(&self, x: usize, y: usize) -> (usize, u8) {
        let index = y * self.width + x;
        (index >> 3, 1 << (7 - index % 8))
    }

    /// Determines whether the cell at `(x, y)` can be walked on.
    ///
    /// Cells outside of the Grid are never walkable, so it is always safe to check around the
    /// edges.
    pub fn is_walkable_at(&self, x: isize, y: isize) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let (byte, mask) = self.bit(x as usize, y as usize);
        self.bytes[byte] & mask == 0
    }

    /// Shorthand for [`is_walkable_at`](Grid::is_walkable_at) with a Point
    pub fn is_walkable(&self, point: Point) -> bool {
        let (x, y) = point.signed();
        self.is_walkable_at(x, y)
    }

    /// Opens up the cell at `(x, y)`.
    ///
    /// Fails with [`Error::OutOfBounds`] if the cell is not on the Grid.
    ///
    /// A blocked cell is flipped to walkable; a cell that is already walkable is left alone.
    /// The flag is not consulted, so this never blocks a cell: use
    /// [`set_blocked_at`](Grid::set_blocked_at) for that.
    pub fn set_walkable_at(&mut self, x: isize, y: isize, _walkable: bool) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds { x, y });
        }
        if !self.is_walkable_at(x, y) {
            let (byte, mask) = self.bit(x as usize, y as usize);
            self.bytes[byte] ^= mask;
        }
        Ok(())
    }

    /// Blocks the cell at `(x, y)`.
    ///
    /// Fails with [`Error::OutOfBounds`] if the cell is not on the Grid.
    pub fn set_blocked_at(&mut self, x: isize, y: isize) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds { x, y });
        }
        let (byte, mask) = self.bit(x as usize, y as usize);
        self.bytes[byte] |= mask;
        Ok(())
    }

    /// Counts the walkable cells
    pub fn walkable_count(&self) -> usize {
        let cells = self.width * self.height;
        let full_bytes = cells / 8;
        let mut blocked: usize = self.bytes[..full_bytes]
            .iter()
            .map(|byte| byte.count_ones() as usize)
            .sum();
        let rest = cells % 8;
        if rest != 0 {
            // only the `rest` highest bits of the last byte belong to the Grid
            let mask = !(0xffu8 >> rest);
            blocked += (self.bytes[full_bytes] & mask).count_ones() as usize;
        }
        cells - blocked
    }

    /// Picks a uniformly random walkable cell.
    ///
    /// Fails with [`Error::NoWalkableCell`] instead of sampling forever when every cell is
    /// blocked.
    pub fn random_walkable_cell(&self, rng: &mut WyRand) -> Result<Point> {
        if self.walkable_count() == 0 {
            return Err(Error::NoWalkableCell);
        }
        loop {
            let x = rng.generate_range(0..self.width);
            let y = rng.generate_range(0..self.height);
            if self.is_walkable_at(x as isize, y as isize) {
                return Ok(Point::new(x as u16, y as u16));
            }
        }
    }

    /// [`random_walkable_cell`](Grid::random_walkable_cell) with a freshly seeded generator
    pub fn random_walkable_cell_seeded(&self, seed: u64) -> Result<Point> {
        self.random_walkable_cell(&mut WyRand::new_seed(seed))
    }
}
