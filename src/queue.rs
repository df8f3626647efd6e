//! A binary min-heap whose priorities live outside of the heap

use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashMap;
use std::hash::{BuildHasher, Hash};

/// A table the [`PriorityQueue`] asks for the current priority of a key.
///
/// The table is owned by the caller and handed to every operation of the queue, so the caller
/// can change priorities between operations. After changing the priority of a key that is
/// already queued, [`PriorityQueue::update_item`] has to be called for that key.
pub trait Priorities<K> {
    /// The priority type. Lower priorities are popped first.
    type Priority: PartialOrd;
    /// Returns the current priority of `key`
    fn priority(&self, key: &K) -> Self::Priority;
}

/// Panics if a queued key is missing from the map
impl<K, V, S> Priorities<K> for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialOrd + Copy,
    S: BuildHasher,
{
    type Priority = V;
    fn priority(&self, key: &K) -> V {
        self[key]
    }
}

/// Uses the key as an index into the Vec
impl<V: PartialOrd + Copy> Priorities<usize> for Vec<V> {
    type Priority = V;
    fn priority(&self, key: &usize) -> V {
        self[*key]
    }
}

/// A binary min-heap over opaque keys, ordered by an external [`Priorities`] table.
///
/// Besides the heap array, the queue keeps the heap position of every key, which makes
/// [`update_item`](PriorityQueue::update_item) `O(log n)` instead of requiring a linear scan.
///
/// ## Examples
/// ```
/// # use bitgrid_pathfinding::queue::PriorityQueue;
/// let mut scores = vec![5.0, 3.0, 8.0];
/// let mut queue = PriorityQueue::new();
/// for key in 0..3usize {
///     queue.push(key, &scores);
/// }
///
/// // key 2 becomes the most urgent one
/// scores[2] = 1.0;
/// queue.update_item(2, &scores);
///
/// assert_eq!(queue.pop(&scores), Some(2));
/// assert_eq!(queue.pop(&scores), Some(1));
/// assert_eq!(queue.pop(&scores), Some(0));
/// assert_eq!(queue.pop(&scores), None);
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueue<K, S = DefaultHashBuilder> {
    nodes: Vec<K>,
    positions: HashMap<K, usize, S>,
}

impl<K: Copy + Eq + Hash> PriorityQueue<K> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<K: Copy + Eq + Hash> Default for PriorityQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash, S: BuildHasher> PriorityQueue<K, S> {
    /// Creates an empty queue that hashes its keys with `hasher`
    pub fn with_hasher(hasher: S) -> Self {
        PriorityQueue {
            nodes: Vec::new(),
            positions: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty queue with room for `capacity` keys
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        PriorityQueue {
            nodes: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// The number of queued keys
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no key is queued
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether at least one key is queued
    pub fn is_not_empty(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Whether `key` is currently queued
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// The key that the next [`pop`](PriorityQueue::pop) returns
    pub fn peek(&self) -> Option<K> {
        self.nodes.first().copied()
    }

    /// Empties the queue, keeping the allocations.
    ///
    /// The priority table is passed to every operation, so a reset queue can be used with a
    /// different table right away.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.positions.clear();
    }

    /// Inserts `key`, maintaining the heap invariant.
    ///
    /// Pushing a key that is already queued only re-establishes its position, the same as
    /// [`update_item`](PriorityQueue::update_item).
    pub fn push<P: Priorities<K> + ?Sized>(&mut self, key: K, priorities: &P) {
        if self.update_item(key, priorities) {
            return;
        }
        self.nodes.push(key);
        let pos = self.nodes.len() - 1;
        self.positions.insert(key, pos);
        self.sift_toward_root(0, pos, priorities);
    }

    /// Removes and returns the key with the lowest priority, or `None` if the queue is empty
    pub fn pop<P: Priorities<K> + ?Sized>(&mut self, priorities: &P) -> Option<K> {
        let last = self.nodes.pop()?;
        if self.nodes.is_empty() {
            self.positions.remove(&last);
            return Some(last);
        }
        let top = std::mem::replace(&mut self.nodes[0], last);
        self.positions.remove(&top);
        self.positions.insert(last, 0);
        self.sift_toward_leaves(0, priorities);
        Some(top)
    }

    /// Restores the heap order after the priority of `key` changed in the table.
    ///
    /// Returns `false` if `key` is not queued.
    pub fn update_item<P: Priorities<K> + ?Sized>(&mut self, key: K, priorities: &P) -> bool {
        let pos = match self.positions.get(&key) {
            Some(&pos) => pos,
            None => return false,
        };
        if self.sift_toward_root(0, pos, priorities) == pos {
            self.sift_toward_leaves(pos, priorities);
        }
        true
    }

    /// Checks that no queued key has a lower priority than its parent
    pub fn is_heap<P: Priorities<K> + ?Sized>(&self, priorities: &P) -> bool {
        (1..self.nodes.len()).all(|pos| {
            let parent = (pos - 1) >> 1;
            !(priorities.priority(&self.nodes[pos]) < priorities.priority(&self.nodes[parent]))
        })
    }

    fn place(&mut self, pos: usize, key: K) {
        self.nodes[pos] = key;
        self.positions.insert(key, pos);
    }

    /// Moves the key at `pos` up while it has a lower priority than its parent, but not past
    /// `start`. Returns the final position.
    fn sift_toward_root<P: Priorities<K> + ?Sized>(
        &mut self,
        start: usize,
        mut pos: usize,
        priorities: &P,
    ) -> usize {
        let key = self.nodes[pos];
        let priority = priorities.priority(&key);

        while pos > start {
            let parent_pos = (pos - 1) >> 1;
            let parent = self.nodes[parent_pos];
            if priority < priorities.priority(&parent) {
                self.place(pos, parent);
                pos = parent_pos;
                continue;
            }
            break;
        }
        self.place(pos, key);
        pos
    }

    /// Moves the key at `pos` all the way down along the smaller children (the left one on
    /// ties), then back up to where it belongs.
    fn sift_toward_leaves<P: Priorities<K> + ?Sized>(&mut self, mut pos: usize, priorities: &P) {
        let end = self.nodes.len();
        let start = pos;
        let key = self.nodes[pos];
        let mut child_pos = (pos << 1) + 1;

        while child_pos < end {
            let right_pos = child_pos + 1;
            if right_pos < end
                && priorities.priority(&self.nodes[child_pos])
                    > priorities.priority(&self.nodes[right_pos])
            {
                child_pos = right_pos;
            }
            let child = self.nodes[child_pos];
            self.place(pos, child);
            pos = child_pos;
            child_pos = (pos << 1) + 1;
        }

        self.place(pos, key);
        self.sift_toward_root(start, pos, priorities);
    }
}
