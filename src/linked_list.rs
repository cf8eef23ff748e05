//! A singly linked list. Each node owns the next one, so ownership flows from the head to the
//! tail. The list also keeps a non-owning pointer to the tail so appending is `O(1)`, but there
//! is no way back from a node to its predecessor: [`LinkedList::remove_last`] has to scan the
//! whole list.
//!
//! # Examples
//!
//! ```
//! use containers::linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add_last(2);
//! list.add_last(3);
//! list.add_first(1);
//!
//! assert!(list.contains(&2));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! assert_eq!(list.remove_last(), Some(3));
//! assert!(list.remove(&1));
//! assert_eq!(list.len(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A pointer to a node owned by the list (through its predecessor, or the head for the first
/// node).
type Link<T> = Option<NonNull<Node<T>>>;

/// A single element of a [`LinkedList`]. Nodes can be built ahead of time and handed to
/// [`LinkedList::add_first_node`] or [`LinkedList::add_last_node`].
pub struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `value`.
    pub const fn new(value: T) -> Self {
        Self { value, next: None }
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

/// A list with forward links only.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_first/last` | `O(1)` |
/// | `remove_first` | `O(1)` |
/// | `remove_last` | `O(n)` |
/// | `contains/remove` | `O(n)` |
pub struct LinkedList<T> {
    head: Link<T>,
    // Never owns anything. It is always the last node reachable from `head`.
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while self.remove_first().is_some() {}
    }
}

impl<T> Clone for LinkedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<T> LinkedList<T> {
    /// Creates a new, empty `LinkedList`.
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
        // SAFETY: `head` points to a node owned by this list, and `&self` prevents it from being
        // freed while the returned reference lives.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    /// The value at the tail of the list.
    pub fn last(&self) -> Option<&T> {
        // SAFETY: As in `first`, `tail` points to a live node owned by this list.
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
        node.next = self.head;
        let node = NonNull::from(Box::leak(node));

        if self.tail.is_none() {
            self.tail = Some(node);
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
        node.next = None;
        let node = NonNull::from(Box::leak(node));

        match self.tail {
            // SAFETY: `tail` is a live node owned by this list, and `&mut self` guarantees no
            // reference into it exists.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Unlinks the head and returns its value, or `None` if the list is empty.
    pub fn remove_first(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: The head was leaked from a `Box` when it was linked in, and unlinking it
            // here leaves nothing else pointing at it (the tail pointer is cleared below if it
            // was the only node).
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            node.value
        })
    }

    /// Unlinks the tail and returns its value, or `None` if the list is empty. Finding the new
    /// tail takes a scan from the head.
    pub fn remove_last(&mut self) -> Option<T> {
        let tail = self.tail?;
        if self.head == Some(tail) {
            return self.remove_first();
        }

        let mut current = self.head?;
        // SAFETY: Every node reachable from the head is live, and the tail is reachable, so the
        // walk stops on the node before it without running off the end.
        unsafe {
            while (*current.as_ptr()).next != Some(tail) {
                current = (*current.as_ptr()).next?;
            }
            (*current.as_ptr()).next = None;
        }
        self.tail = Some(current);
        self.len -= 1;

        // SAFETY: The old tail was leaked from a `Box` and nothing links to it any more.
        let node = unsafe { Box::from_raw(tail.as_ptr()) };
        Some(node.value)
    }

    /// Removes every value from the list.
    pub fn clear(&mut self) {
        while self.remove_first().is_some() {}
    }

    /// Lazily yields the values from head to tail. Every call starts a fresh walk.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
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
}

impl<T> LinkedList<T>
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
        let mut previous: Link<T> = None;
        let mut current = self.head;

        while let Some(node) = current {
            // SAFETY: `node` is reachable from the head and therefore live.
            let next = unsafe { (*node.as_ptr()).next };

            // SAFETY: As above.
            if unsafe { &(*node.as_ptr()).value } == value {
                let Some(previous) = previous else {
                    self.remove_first();
                    return true;
                };

                // SAFETY: `previous` is the live node linking to `node`. Once it skips over
                // `node`, nothing else refers to `node` (the tail is moved off it below), so it
                // can be freed.
                unsafe {
                    (*previous.as_ptr()).next = next;
                    drop(Box::from_raw(node.as_ptr()));
                }
                if next.is_none() {
                    self.tail = Some(previous);
                }
                self.len -= 1;
                return true;
            }

            previous = current;
            current = next;
        }

        false
    }
}

/// A head-to-tail iterator over a [`LinkedList`], created by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: The iterator borrows the list, so every node it can reach stays alive and
            // unmodified for `'a`.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends every value at the back, keeping their order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}
