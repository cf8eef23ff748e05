//! A first-in-first-out queue backed by a circular buffer.
//!
//! The live values occupy `len` consecutive slots starting at `head`, wrapping past the end of
//! the backing store back to slot 0. The newest value (the tail) is at
//! `(head + len - 1) % capacity`; it is derived rather than stored, so an empty queue and a full
//! one can never be confused.
//!
//! # Examples
//!
//! ```
//! use containers::error::EmptyContainer;
//! use containers::queue::Queue;
//!
//! let mut queue = Queue::new();
//! for value in 1..=5 {
//!     queue.enqueue(value);
//! }
//!
//! assert_eq!(queue.peek(), Ok(&1));
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 5]);
//!
//! queue.clear();
//! assert_eq!(queue.dequeue(), Err(EmptyContainer::Queue));
//! ```

use std::fmt;
use std::slice;

use crate::error::EmptyContainer;
use crate::util::{empty_slots, grown_capacity};

/// A queue that grows its circular buffer by doubling (starting at 4 slots). Growing moves the
/// values into the new buffer oldest first, starting at slot 0.
///
/// Like [`Stack::clear`](crate::stack::Stack::clear), [`Queue::clear`] leaves the cleared values
/// in their slots until they are overwritten or the queue is dropped.
pub struct Queue<T> {
    items: Box<[Option<T>]>,
    /// Slot of the oldest value.
    head: usize,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Queue<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Queue<T> {
    /// Creates a new, empty `Queue`. Nothing is allocated until the first enqueue.
    pub fn new() -> Self {
        Self {
            items: empty_slots(0),
            head: 0,
            len: 0,
        }
    }

    /// The number of values in the queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of values the queue can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Adds `value` behind the newest value, growing the buffer first if it is full.
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.items.len() {
            self.grow();
        }
        let tail = (self.head + self.len) % self.items.len();
        self.items[tail] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the oldest value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainer::Queue`] if there is nothing to dequeue.
    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer::Queue);
        }
        let value = self.items[self.head].take().ok_or(EmptyContainer::Queue)?;
        self.head = (self.head + 1) % self.items.len();
        self.len -= 1;
        Ok(value)
    }

    /// Returns the oldest value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainer::Queue`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer::Queue);
        }
        self.items[self.head].as_ref().ok_or(EmptyContainer::Queue)
    }

    /// Forgets every value and moves the head back to slot 0. The buffer and the values in it are
    /// kept.
    pub fn clear(&mut self) {
        self.len = 0;
        self.head = 0;
    }

    /// Lazily yields the values from oldest to newest. Every call starts a fresh walk.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, wrapped) = match self.tail() {
            None => (&self.items[..0], &self.items[..0]),
            // The live region runs off the end of the buffer and continues from slot 0.
            Some(tail) if tail < self.head => (&self.items[self.head..], &self.items[..=tail]),
            Some(tail) => (&self.items[self.head..=tail], &self.items[..0]),
        };

        Iter {
            front: front.iter(),
            wrapped: wrapped.iter(),
        }
    }

    /// Slot of the newest value, or `None` if the queue is empty.
    fn tail(&self) -> Option<usize> {
        self.len
            .checked_sub(1)
            .map(|last| (self.head + last) % self.items.len())
    }

    /// Moves the values into a buffer twice as large (at least 4 slots). The oldest value lands
    /// in slot 0 and the rest follow in order, undoing any wrap.
    fn grow(&mut self) {
        let mut items = empty_slots(grown_capacity(self.items.len()));

        // Only called when full, so every slot is live: `head..` holds the oldest values and
        // `..head` the ones that wrapped around.
        let (wrapped, front) = self.items.split_at_mut(self.head);
        for (new, old) in items.iter_mut().zip(front.iter_mut().chain(wrapped)) {
            *new = old.take();
        }

        self.items = items;
        self.head = 0;
    }
}

/// An oldest-to-newest iterator over a [`Queue`], created by [`Queue::iter`].
pub struct Iter<'a, T> {
    /// From the head towards the end of the buffer.
    front: slice::Iter<'a, Option<T>>,
    /// From slot 0 up to the tail, when the values wrap.
    wrapped: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.front
            .next()
            .or_else(|| self.wrapped.next())
            .and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.front.len() + self.wrapped.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}
