//! Ring queue: FIFO buffer of fixed capacity.
//!
//! Variables:
//!   buf   : Vec<Option<T>>   circular backing array, length C
//!   head  : usize            index of next dequeue
//!   tail  : usize            index of next enqueue
//!   count : usize            current occupancy
//!
//! Equations:
//!   enqueue(x): buf[tail] = x,  tail = (tail+1) mod C,  count += 1
//!   dequeue():  x = buf[head],  head = (head+1) mod C,  count -= 1
//!   full  iff count == C   (enqueue is dropped)
//!   empty iff count == 0   (dequeue yields None)

use algolab_core::Queue;

#[derive(Debug, Clone)]
pub struct RingQueue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T> RingQueue<T> {
    pub fn new(capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Self {
            buf,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Enqueue, reporting whether the item was accepted
    pub fn try_enqueue(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.buf[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.buf.len();
        self.count += 1;
        true
    }

    pub fn front(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn is_full(&self) -> bool {
        self.count == self.buf.len()
    }
}

impl<T> Queue<T> for RingQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.try_enqueue(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let item = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.count -= 1;
        item
    }

    fn size(&self) -> usize {
        self.count
    }
}
