//! Min-priority queue with deterministic tie-breaking
//!
//! `BinaryHeap` is a max-heap, so ordering is reversed. Equal scores pop in
//! push order via a monotonically increasing sequence number, which also
//! keeps payloads out of the comparison.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct MinScored<T> {
    score: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for MinScored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for MinScored<T> {}

impl<T> Ord for MinScored<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for MinScored<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) struct MinQueue<T> {
    heap: BinaryHeap<MinScored<T>>,
    seq: u64,
}

impl<T> MinQueue<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, score: f64, item: T) {
        self.heap.push(MinScored {
            score,
            seq: self.seq,
            item,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|e| (e.score, e.item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_smallest_first() {
        let mut q = MinQueue::new();
        q.push(3.0, 'c');
        q.push(1.0, 'a');
        q.push(2.0, 'b');

        assert_eq!(q.pop(), Some((1.0, 'a')));
        assert_eq!(q.pop(), Some((2.0, 'b')));
        assert_eq!(q.pop(), Some((3.0, 'c')));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_ties_pop_in_push_order() {
        let mut q = MinQueue::new();
        for item in ["x", "y", "z"] {
            q.push(5.0, item);
        }
        assert_eq!(q.pop(), Some((5.0, "x")));
        assert_eq!(q.pop(), Some((5.0, "y")));
        assert_eq!(q.pop(), Some((5.0, "z")));
    }

    #[test]
    fn test_negative_scores() {
        let mut q = MinQueue::new();
        q.push(0.0, 0);
        q.push(-2.5, 1);
        assert_eq!(q.pop(), Some((-2.5, 1)));
    }
}
