use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue of `(priority, vertex)` entries backed by `BinaryHeap`.
///
/// There is no decrease-key: callers push a fresh entry whenever a priority
/// improves and discard stale entries when they are popped.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the priority queue, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes `vertex` with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority; ties go to the smaller vertex
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the smallest entry without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, vertex))| (*vertex, *priority))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_priority() {
        let mut queue = MinQueue::new();
        queue.push(3usize, 7u32);
        queue.push(1, 2);
        queue.push(4, 9);
        queue.push(2, 2);

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.peek(), Some((1, 2)));
        assert_eq!(queue.pop(), Some((1, 2)));
        assert_eq!(queue.pop(), Some((2, 2)));
        assert_eq!(queue.pop(), Some((3, 7)));
        assert_eq!(queue.pop(), Some((4, 9)));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn keeps_duplicate_vertices() {
        let mut queue = MinQueue::default();
        queue.push(5usize, 10u64);
        queue.push(5, 4);

        assert_eq!(queue.pop(), Some((5, 4)));
        assert_eq!(queue.pop(), Some((5, 10)));
    }
}
