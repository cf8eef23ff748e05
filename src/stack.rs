//! A last-in-first-out stack backed by a single growable array.
//!
//! # Examples
//!
//! ```
//! use containers::error::EmptyContainer;
//! use containers::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.pop(), Err(EmptyContainer::Stack));
//! ```

use std::fmt;

use crate::error::EmptyContainer;
use crate::util::{empty_slots, grown_capacity};

/// A stack whose top is the last occupied slot of its backing store. The store starts with no
/// capacity, takes 4 slots on the first push and doubles whenever it fills up.
///
/// [`Stack::clear`] only forgets the values: they stay in their slots (and stay alive) until a
/// later push overwrites them or the stack is dropped.
pub struct Stack<T> {
    /// Slots `..len` are occupied. Slots past `len` are either empty or hold cleared values.
    items: Box<[Option<T>]>,
    len: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Stack<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Bottom to top, so the copy ends up in the same order.
        self.items[..self.len].iter().flatten().cloned().collect()
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Stack<T> {
    /// Creates a new, empty `Stack`. Nothing is allocated until the first push.
    pub fn new() -> Self {
        Self {
            items: empty_slots(0),
            len: 0,
        }
    }

    /// The number of values on the stack.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of values the stack can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Puts `value` on top of the stack, growing the backing store first if it is full.
    pub fn push(&mut self, value: T) {
        if self.len == self.items.len() {
            self.grow();
        }
        self.items[self.len] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainer::Stack`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        let top = self.len.checked_sub(1).ok_or(EmptyContainer::Stack)?;
        let value = self.items[top].take().ok_or(EmptyContainer::Stack)?;
        self.len = top;
        Ok(value)
    }

    /// Returns the top value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainer::Stack`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.len
            .checked_sub(1)
            .and_then(|top| self.items[top].as_ref())
            .ok_or(EmptyContainer::Stack)
    }

    /// Forgets every value. The backing store and the values in it are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Lazily yields the values from the top of the stack to the bottom. Every call starts a
    /// fresh walk.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.items[..self.len].iter(),
        }
    }

    /// Moves the values into a store twice as large (at least 4 slots), keeping their order.
    fn grow(&mut self) {
        let mut items = empty_slots(grown_capacity(self.items.len()));
        for (new, old) in items.iter_mut().zip(self.items.iter_mut()) {
            *new = old.take();
        }
        self.items = items;
    }
}

/// A top-to-bottom iterator over a [`Stack`], created by [`Stack::iter`].
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the values in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
