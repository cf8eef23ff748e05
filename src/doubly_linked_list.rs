//! A doubly linked list. Ownership flows from the head to the tail through `next`; every node
//! also keeps a non-owning `previous` pointer, which makes [`DoublyLinkedList::remove_last`]
//! `O(1)` and lets [`Iter`] run from either end.
//!
//! # Examples
//!
//! ```
//! use containers::doubly_linked_list::DoublyLinkedList;
//!
//! let mut list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
//!
//! assert_eq!(list.remove_last(), Some(3));
//! list.add_first(0);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
//! assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [2, 1, 0]);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

type Link<T> = Option<NonNull<Node<T>>>;

/// A single element of a [`DoublyLinkedList`].
pub struct Node<T> {
    value: T,
    // Never used to free anything.
    previous: Link<T>,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `value`.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            previous: None,
            next: None,
        }
    }

    /// The value stored in this node.
    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("value", &self.value).finish()
    }
}

/// A list with links in both directions.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_first/last` | `O(1)` |
/// | `remove_first/last` | `O(1)` |
/// | `contains/remove` | `O(n)` |
///
/// For every pair of neighbouring nodes `a -> b`, `b.previous` is `a`. The head has no
/// `previous` and the tail has no `next`.
pub struct DoublyLinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        while self.remove_first().is_some() {}
    }
}

impl<T> Clone for DoublyLinkedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for DoublyLinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for DoublyLinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for DoublyLinkedList<T> where T: Eq {}

impl<T> DoublyLinkedList<T> {
    /// Creates a new, empty `DoublyLinkedList`.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// The number of values in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The value at the head of the list.
    pub fn first(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by this list and `&self` keeps it alive.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    /// The value at the tail of the list.
    pub fn last(&self) -> Option<&T> {
        // SAFETY: `tail` is a live node owned by this list and `&self` keeps it alive.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    /// Adds `value` to the front of the list. Same as [`Self::add_first`].
    pub fn add(&mut self, value: T) {
        self.add_first(value);
    }

    /// Adds `value` to the front of the list.
    pub fn add_first(&mut self, value: T) {
        self.add_first_node(Box::new(Node::new(value)));
    }

    /// Links an existing node in at the front of the list. The list takes ownership of it.
    pub fn add_first_node(&mut self, mut node: Box<Node<T>>) {
        node.previous = None;
        node.next = self.head;
        let node = NonNull::from(Box::leak(node));

        match self.head {
            // SAFETY: The old head is live, and `&mut self` means nothing else borrows it.
            Some(old_head) => unsafe { (*old_head.as_ptr()).previous = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds `value` to the back of the list.
    pub fn add_last(&mut self, value: T) {
        self.add_last_node(Box::new(Node::new(value)));
    }

    /// Links an existing node in at the back of the list. The list takes ownership of it.
    pub fn add_last_node(&mut self, mut node: Box<Node<T>>) {
        node.previous = self.tail;
        node.next = None;
        let node = NonNull::from(Box::leak(node));

        match self.tail {
            // SAFETY: The old tail is live, and `&mut self` means nothing else borrows it.
            Some(old_tail) => unsafe { (*old_tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Unlinks the head and returns its value, or `None` if the list is empty.
    pub fn remove_first(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: The head was leaked from a `Box` when it was linked in. The only other
            // pointers to it (the next node's `previous`, or the tail) are cleared below.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            match self.head {
                // SAFETY: The new head is live and owned by this list.
                Some(new_head) => unsafe { (*new_head.as_ptr()).previous = None },
                None => self.tail = None,
            }
            self.len -= 1;
            node.value
        })
    }

    /// Unlinks the tail and returns its value, or `None` if the list is empty.
    pub fn remove_last(&mut self) -> Option<T> {
        self.tail.map(|tail| {
            // SAFETY: The tail was leaked from a `Box` when it was linked in. The only other
            // pointers to it (the previous node's `next`, or the head) are cleared below.
            let node = unsafe { Box::from_raw(tail.as_ptr()) };
            self.tail = node.previous;
            match self.tail {
                // SAFETY: The new tail is live and owned by this list.
                Some(new_tail) => unsafe { (*new_tail.as_ptr()).next = None },
                None => self.head = None,
            }
            self.len -= 1;
            node.value
        })
    }

    /// Removes every value from the list.
    pub fn clear(&mut self) {
        while self.remove_first().is_some() {}
    }

    /// Lazily yields the values from head to tail (or tail to head with [`Iterator::rev`]).
    /// Every call starts a fresh walk.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Clones every value into `array`, head first, starting at `array[offset]`.
    ///
    /// # Panics
    ///
    /// Panics if `array` has fewer than `self.len()` slots from `offset` onward.
    pub fn copy_to(&self, array: &mut [T], offset: usize)
    where
        T: Clone,
    {
        let room = array.len().saturating_sub(offset);
        assert!(
            room >= self.len,
            "cannot copy {} values into {room} slots starting at offset {offset}",
            self.len,
        );

        for (slot, value) in array[offset..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
    }

    /// Checks that every backward link mirrors a forward link and that a walk from the head
    /// agrees with `len` and `tail`.
    #[cfg(test)]
    fn verify_double_links(&self) {
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);

        let Some(head) = self.head else { return };
        unsafe {
            assert!((*head.as_ptr()).previous.is_none());

            let mut count = 1;
            let mut current = head;
            while let Some(next) = (*current.as_ptr()).next {
                assert!((*next.as_ptr()).previous == Some(current));
                current = next;
                count += 1;
            }
            assert!(Some(current) == self.tail);
            assert_eq!(count, self.len);
        }
    }
}

impl<T> DoublyLinkedList<T>
where
    T: PartialEq,
{
    /// Returns `true` if any value in the list equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// Removes the first value (closest to the head) equal to `value`. Returns `false` if there
    /// is none.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut current = self.head;

        while let Some(node) = current {
            // SAFETY: `node` is reachable from the head and therefore live.
            let (previous, next) = unsafe { ((*node.as_ptr()).previous, (*node.as_ptr()).next) };

            // SAFETY: As above.
            if unsafe { &(*node.as_ptr()).value } == value {
                match (previous, next) {
                    (None, _) => {
                        self.remove_first();
                    }
                    (_, None) => {
                        self.remove_last();
                    }
                    (Some(previous), Some(next)) => {
                        // SAFETY: Both neighbours are live. Once they point at each other nothing
                        // refers to `node`, which was leaked from a `Box`, so it can be freed.
                        unsafe {
                            (*previous.as_ptr()).next = Some(next);
                            (*next.as_ptr()).previous = Some(previous);
                            drop(Box::from_raw(node.as_ptr()));
                        }
                        self.len -= 1;
                    }
                }
                return true;
            }

            current = next;
        }

        false
    }
}

/// An iterator over a [`DoublyLinkedList`], created by [`DoublyLinkedList::iter`].
pub struct Iter<'a, T> {
    front: Link<T>,
    back: Link<T>,
    // The ends meet in the middle; this stops them from crossing.
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.front.map(|node| {
            // SAFETY: The iterator borrows the list, so every node stays alive for `'a`.
            let node = unsafe { &*node.as_ptr() };
            self.front = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back.map(|node| {
            // SAFETY: The iterator borrows the list, so every node stays alive for `'a`.
            let node = unsafe { &*node.as_ptr() };
            self.back = node.previous;
            self.remaining -= 1;
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    /// Appends every value at the back, keeping their order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::VecDeque;

    use super::*;
    use crate::test::quick::ListOp;

    /// Applies a set of operations to a list and a `VecDeque`, checking the backward links after
    /// every step.
    fn do_ops<T>(ops: &[ListOp<T>], list: &mut DoublyLinkedList<T>, model: &mut VecDeque<T>)
    where
        T: PartialEq + Clone + fmt::Debug,
    {
        for op in ops {
            match op {
                ListOp::AddFirst(value) => {
                    list.add_first(value.clone());
                    model.push_front(value.clone());
                }
                ListOp::AddLast(value) => {
                    list.add_last(value.clone());
                    model.push_back(value.clone());
                }
                ListOp::RemoveFirst => assert_eq!(list.remove_first(), model.pop_front()),
                ListOp::RemoveLast => assert_eq!(list.remove_last(), model.pop_back()),
                ListOp::Remove(value) => {
                    let expected = model.iter().position(|x| x == value);
                    if let Some(at) = expected {
                        model.remove(at);
                    }
                    assert_eq!(list.remove(value), expected.is_some());
                }
                ListOp::Iter => {
                    assert!(list.iter().eq(model.iter()));
                    assert!(list.iter().rev().eq(model.iter().rev()));
                }
            }
            list.verify_double_links();
            assert_eq!(list.len(), model.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<ListOp<i8>>) -> bool {
            let mut list = DoublyLinkedList::new();
            let mut model = VecDeque::new();

            do_ops(&ops, &mut list, &mut model);
            list.iter().eq(model.iter())
        }
    }
}
