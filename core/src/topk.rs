use crate::DocId;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::num::NonZeroUsize;

/// A scored document offered to [`TopK`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub doc_id: DocId,
    pub score: f64,
}

// Higher score ranks first; equal scores rank the lower doc_id first.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.doc_id.cmp(&self.doc_id))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Candidate {}

/// Keeps the best `k` candidates seen so far.
///
/// Backed by a min-heap on rank: the root is always the weakest survivor, so
/// a stronger newcomer replaces it in O(log k).
#[derive(Debug, Clone)]
pub struct TopK {
    heap: BinaryHeap<Reverse<Candidate>>,
    capacity: NonZeroUsize,
}

impl TopK {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { heap: BinaryHeap::with_capacity(capacity.get()), capacity }
    }

    /// Offer a candidate. Returns true if it was kept.
    pub fn insert(&mut self, doc_id: DocId, score: f64) -> bool {
        let cand = Candidate { doc_id, score };
        if self.heap.len() < self.capacity.get() {
            self.heap.push(Reverse(cand));
            return true;
        }
        match self.heap.peek_mut() {
            Some(mut weakest) if cand > weakest.0 => {
                *weakest = Reverse(cand);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() == self.capacity.get()
    }

    /// Lowest score currently held.
    pub fn min_score(&self) -> Option<f64> {
        self.heap.peek().map(|r| r.0.score)
    }

    /// Drain into descending score order, ties by ascending doc_id.
    pub fn into_ranked(self) -> Vec<Candidate> {
        // Ascending order of Reverse<_> is descending rank.
        self.heap.into_sorted_vec().into_iter().map(|r| r.0).collect()
    }
}
