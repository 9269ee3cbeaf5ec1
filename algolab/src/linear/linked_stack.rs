//! Stack backed by a singly-linked chain of owned nodes
//!
//! push/pop relink the head in O(1); no traversal ever happens.

use algolab_core::Stack;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// LIFO stack over an owned `Box` chain
pub struct LinkedStack<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, item: T) {
        let node = Box::new(Node {
            value: item,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    fn size(&self) -> usize {
        self.len
    }
}

impl<T> Drop for LinkedStack<T> {
    // Unlink iteratively so a long chain does not overflow the call stack
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}
