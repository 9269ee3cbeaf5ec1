//! Capability traits for stack and queue backends
//!
//! Every backing implementation exposes the same signatures so a timing
//! harness can hold a `dyn Stack<T>` or `dyn Queue<T>` and swap backends
//! without changing its code.

/// LIFO container
///
/// Popping an empty stack is an expected outcome and yields `None`.
pub trait Stack<T> {
    /// Add an element on top of the stack
    fn push(&mut self, item: T);

    /// Remove and return the top element, `None` when empty
    fn pop(&mut self) -> Option<T>;

    /// Number of stored elements, O(1)
    fn size(&self) -> usize;

    /// Whether the stack holds no elements, O(1)
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// FIFO container
///
/// Dequeuing an empty queue is an expected outcome and yields `None`.
/// Bounded backends may drop an enqueue when full; callers that need
/// to know use the backend's own API.
pub trait Queue<T> {
    /// Add an element at the back of the queue
    fn enqueue(&mut self, item: T);

    /// Remove and return the front element, `None` when empty
    fn dequeue(&mut self) -> Option<T>;

    /// Number of stored elements, O(1)
    fn size(&self) -> usize;

    /// Whether the queue holds no elements, O(1)
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
