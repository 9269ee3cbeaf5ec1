//! Stack and queue backends
//!
//! Four backends implement the [`Stack`] / [`Queue`] capability traits
//! from `algolab-core`:
//!
//! - [`ArrayStack`], [`ArrayQueue`]: flat vectors (the queue's dequeue is
//!   O(n) on purpose)
//! - [`RingQueue`]: fixed-capacity circular buffer, drops enqueues when full
//! - [`LinkedStack`], [`LinkedQueue`]: singly-linked nodes
//!
//! [`LinearKind`] builds any of them behind a trait object so timing code
//! stays backend-agnostic.

pub mod array_queue;
pub mod array_stack;
pub mod linked_queue;
pub mod linked_stack;
pub mod ring_queue;

pub use algolab_core::{Queue, Stack};
pub use array_queue::ArrayQueue;
pub use array_stack::ArrayStack;
pub use linked_queue::LinkedQueue;
pub use linked_stack::LinkedStack;
pub use ring_queue::RingQueue;

/// Backing strategy for a stack or queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LinearKind {
    /// Growable vector
    Array,
    /// Singly-linked nodes
    Linked,
    /// Fixed-capacity ring buffer (queues only)
    Ring { capacity: usize },
}

impl LinearKind {
    /// Stable name used in reports
    pub const fn name(self) -> &'static str {
        match self {
            LinearKind::Array => "array",
            LinearKind::Linked => "linked",
            LinearKind::Ring { .. } => "ring",
        }
    }

    /// Build an empty stack of this kind
    ///
    /// A ring buffer has no stack form; `Ring` builds an array stack.
    pub fn new_stack<T: 'static>(self) -> Box<dyn Stack<T>> {
        match self {
            LinearKind::Array | LinearKind::Ring { .. } => Box::new(ArrayStack::new()),
            LinearKind::Linked => Box::new(LinkedStack::new()),
        }
    }

    /// Build an empty queue of this kind
    pub fn new_queue<T: 'static>(self) -> Box<dyn Queue<T>> {
        match self {
            LinearKind::Array => Box::new(ArrayQueue::new()),
            LinearKind::Linked => Box::new(LinkedQueue::new()),
            LinearKind::Ring { capacity } => Box::new(RingQueue::new(capacity)),
        }
    }
}

impl std::fmt::Display for LinearKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinearKind::Ring { capacity } => write!(f, "ring({capacity})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_share_contract() {
        for kind in [LinearKind::Array, LinearKind::Linked] {
            let mut stack = kind.new_stack::<u32>();
            let mut queue = kind.new_queue::<u32>();
            for i in 0..10 {
                stack.push(i);
                queue.enqueue(i);
            }
            assert_eq!(stack.size(), 10);
            assert_eq!(queue.size(), 10);
            assert_eq!(stack.pop(), Some(9), "{kind}");
            assert_eq!(queue.dequeue(), Some(0), "{kind}");
        }
    }

    #[test]
    fn test_ring_kind() {
        let kind = LinearKind::Ring { capacity: 3 };
        let mut queue = kind.new_queue::<u32>();
        for i in 0..5 {
            queue.enqueue(i);
        }
        assert_eq!(queue.size(), 3);
        assert_eq!(kind.to_string(), "ring(3)");

        let mut stack = kind.new_stack::<u32>();
        stack.push(7);
        assert_eq!(stack.pop(), Some(7));
        assert!(stack.is_empty());
    }
}
