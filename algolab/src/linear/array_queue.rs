//! Unbounded queue backed by a flat vector
//!
//! Dequeue removes index 0 and shifts every remaining element, costing
//! O(n). This is the baseline the ring and linked queues are timed
//! against, so it must not be replaced with a `VecDeque`.

use algolab_core::Queue;

/// FIFO queue appending at the tail and removing from the head of a `Vec`
#[derive(Debug, Clone, Default)]
pub struct ArrayQueue<T> {
    items: Vec<T>,
}

impl<T> ArrayQueue<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Borrow the front element
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = ArrayQueue::new();
        for word in ["a", "b", "c"] {
            queue.enqueue(word);
        }
        assert_eq!(queue.front(), Some(&"a"));
        assert_eq!(queue.dequeue(), Some("a"));
        queue.enqueue("d");
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), Some("c"));
        assert_eq!(queue.dequeue(), Some("d"));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }
}
