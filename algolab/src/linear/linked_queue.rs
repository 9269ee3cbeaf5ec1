//! Queue backed by a singly-linked list stored in an index arena
//!
//! Nodes live in a `Vec` and link to each other by slot index, which gives
//! the queue an O(1) tail reference without shared ownership. Freed slots
//! are recycled through a free list.

use algolab_core::Queue;

type NodeId = usize;

#[derive(Debug)]
struct Node<T> {
    value: Option<T>,
    next: Option<NodeId>,
}

/// FIFO queue enqueuing at the tail and dequeuing at the head
#[derive(Debug)]
pub struct LinkedQueue<T> {
    nodes: Vec<Node<T>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Borrow the front element
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.nodes[id].value.as_ref())
    }

    fn allocate(&mut self, value: T) -> NodeId {
        let node = Node {
            value: Some(value),
            next: None,
        };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, item: T) {
        let id = self.allocate(item);
        if let Some(tail) = self.tail {
            self.nodes[tail].next = Some(id);
        }
        self.tail = Some(id);
        if self.head.is_none() {
            self.head = Some(id);
        }
        self.len += 1;
    }

    fn dequeue(&mut self) -> Option<T> {
        let id = self.head?;
        let node = &mut self.nodes[id];
        let value = node.value.take();
        self.head = node.next.take();
        // the last node left: tail must not keep pointing at a freed slot
        if self.head.is_none() {
            self.tail = None;
        }
        self.free.push(id);
        self.len -= 1;
        value
    }

    fn size(&self) -> usize {
        self.len
    }
}
