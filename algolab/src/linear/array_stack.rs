//! Stack backed by a growable vector

use algolab_core::Stack;

/// LIFO stack pushing and popping at the tail of a `Vec`
#[derive(Debug, Clone, Default)]
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Borrow the top element
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = ArrayStack::new();
        for i in 0..5 {
            stack.push(i);
        }
        assert_eq!(stack.size(), 5);
        assert_eq!(stack.peek(), Some(&4));
        let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(popped, vec![4, 3, 2, 1, 0]);
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }
}
