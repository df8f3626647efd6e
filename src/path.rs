//! The result of a search

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Index};

/// A type to represent the Cost of a Path: `1` per cardinal step, `√2` per diagonal step
pub type Cost = f64;

/// A sequence of Nodes together with the total Cost of walking along them.
///
/// Paths returned by the searches of this crate always start with the start and end with the
/// goal.
///
/// Path dereferences to a slice, so all slice methods are available:
/// ```
/// # use bitgrid_pathfinding::path::Path;
/// let path = Path::new(vec!['a', 'b', 'c'], 2.0);
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.first(), Some(&'a'));
/// assert_eq!(path.cost(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// the total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// the number of Nodes in the Path, including start and goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// whether the Path has no Nodes at all
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// the Nodes of the Path
    pub fn points(&self) -> &[P] {
        &self.path
    }

    /// consumes the Path, returning its Nodes
    pub fn into_points(self) -> Vec<P> {
        self.path
    }

    /// Returns a reversed copy of the Path, with the same Cost.
    ///
    /// ```
    /// # use bitgrid_pathfinding::path::Path;
    /// let path = Path::new(vec![1, 2, 3], 2.0);
    /// assert_eq!(path.reversed(), vec![3, 2, 1]);
    /// ```
    pub fn reversed(&self) -> Path<P>
    where
        P: Clone,
    {
        let mut path = self.path.clone();
        path.reverse();
        Path::new(path, self.cost)
    }
}

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.path.as_slice() == *rhs
    }
}

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {:.3}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
