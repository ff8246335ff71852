use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A min-heap over a max-heap, with iteration over the live contents for
/// sweep-line active sets.
pub(crate) struct MinHeap<T: Ord> {
    max_heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord + Copy> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            max_heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, t: T) {
        self.max_heap.push(Reverse(t));
    }

    pub fn pop(&mut self) -> Option<T> {
        Some(self.max_heap.pop()?.0)
    }

    pub fn peek(&self) -> Option<T> {
        Some(self.max_heap.peek()?.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.max_heap.iter().map(|r| r.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_order() {
        let mut heap = MinHeap::new();
        assert_eq!(heap.peek(), None);
        for v in [5, 1, 4, 2, 3] {
            heap.push(v);
        }
        assert_eq!(heap.iter().count(), 5);
        assert_eq!(heap.peek(), Some(1));
        let drained: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
    }
}
