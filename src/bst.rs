//! An unbalanced Binary Search Tree. Values are ordered by [`Ord`]; values that compare equal to
//! a node are kept in its right subtree, so duplicates are stored rather than merged.
//!
//! The tree never rebalances. Adding values in sorted order produces a tree that is really a
//! list, and every operation degrades to `O(n)`.
//!
//! # Examples
//!
//! ```
//! use containers::bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! for value in [4, 2, 6, 1, 3] {
//!     tree.add(value);
//! }
//! assert!(tree.contains(&3));
//! assert_eq!(tree.len(), 5);
//!
//! // Removing a value that isn't present does nothing.
//! assert!(!tree.remove(&42));
//! assert!(tree.remove(&2));
//!
//! let mut sorted = Vec::new();
//! tree.in_order(|value| sorted.push(*value));
//! assert_eq!(sorted, [1, 3, 4, 6]);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// An owning edge from a node to one of its children (or from the tree to its root).
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree that stores values in the order given by [`Ord`]. No parent pointers
/// are kept: lookups and removals re-descend from the root.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // The default drop recurses once per level, which overflows the stack for a degenerate tree.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone + Ord,
{
    /// Re-adding the values in pre-order rebuilds a tree with exactly the same shape.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        self.pre_order(|value| tree.add(value.clone()));
        tree
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the tree, counting duplicates.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Calls `action` on every value, visiting each node before its left subtree and then its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [4, 2, 6, 1, 3].into_iter().collect();
    /// let mut visited = Vec::new();
    /// tree.pre_order(|value| visited.push(*value));
    ///
    /// assert_eq!(visited, [4, 2, 1, 3, 6]);
    /// ```
    pub fn pre_order(&self, mut action: impl FnMut(&T)) {
        if let Some(root) = self.root.as_deref() {
            root.pre_order(&mut action);
        }
    }

    /// Calls `action` on every value in ascending order: left subtree, node, right subtree.
    pub fn in_order(&self, mut action: impl FnMut(&T)) {
        if let Some(root) = self.root.as_deref() {
            root.in_order(&mut action);
        }
    }

    /// Calls `action` on every value, visiting both subtrees (left, then right) before the node
    /// itself.
    pub fn post_order(&self, mut action: impl FnMut(&T)) {
        if let Some(root) = self.root.as_deref() {
            root.post_order(&mut action);
        }
    }

    /// Lazily yields the values in ascending order. Every call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Adds the value as a new leaf. Values less than a node go to its left, everything else
    /// (including equal values) goes to its right.
    pub fn add(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Returns `true` if some node in the tree compares equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find_with_parent(value).is_some()
    }

    /// Removes the first node (closest to the root) that compares equal to `value`. Returns
    /// `false`, leaving the tree untouched, if there is no such node.
    ///
    /// The node that takes the removed node's place depends on the shape of its right subtree:
    /// 1. No right child: the left child moves up.
    /// 2. A right child without a left child: the right child adopts the removed node's left
    ///    subtree and moves up.
    /// 3. A right child with a left subtree: the in-order successor (the leftmost node of the
    ///    right subtree) is detached, leaving its own right subtree to its parent, and then adopts
    ///    both of the removed node's subtrees.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(slot) = self.find_slot_mut(value) else {
            return false;
        };
        let Some(mut target) = slot.take() else {
            return false;
        };

        *slot = match target.right.take() {
            None => target.left.take(),
            Some(mut right) => match Node::take_leftmost(&mut right) {
                None => {
                    right.left = target.left.take();
                    Some(right)
                }
                Some(mut successor) => {
                    successor.left = target.left.take();
                    successor.right = Some(right);
                    Some(successor)
                }
            },
        };

        self.len -= 1;
        true
    }

    /// Descends from the root to the first node equal to `value`, returning it along with the
    /// last node visited before it (`None` when the match is the root).
    fn find_with_parent(&self, value: &T) -> Option<(&Node<T>, Option<&Node<T>>)> {
        let mut parent = None;
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some((node, parent)),
            };
            parent = Some(node);
        }

        None
    }

    /// The mutable counterpart of [`Self::find_with_parent`]. Instead of the parent node it
    /// returns the parent's link that owns the match (or the root link), which is exactly the
    /// slot a replacement has to be written into.
    fn find_slot_mut(&mut self, value: &T) -> Option<&mut Link<T>> {
        let mut slot = &mut self.root;
        loop {
            let ordering = value.cmp(&slot.as_deref()?.value);
            if ordering == Ordering::Equal {
                return Some(slot);
            }

            let node = slot.as_deref_mut()?;
            slot = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Detaches the leftmost node below `self.left`, handing its right subtree to its parent.
    /// Returns `None` if `self` has no left child, in which case `self` is the leftmost node.
    fn take_leftmost(mut parent: &mut Self) -> Link<T> {
        while parent.left.as_ref().is_some_and(|left| left.left.is_some()) {
            parent = parent.left.as_deref_mut()?;
        }

        let mut leftmost = parent.left.take()?;
        parent.left = leftmost.right.take();
        Some(leftmost)
    }

    fn pre_order<F: FnMut(&T)>(&self, action: &mut F) {
        action(&self.value);
        if let Some(left) = self.left.as_deref() {
            left.pre_order(action);
        }
        if let Some(right) = self.right.as_deref() {
            right.pre_order(action);
        }
    }

    fn in_order<F: FnMut(&T)>(&self, action: &mut F) {
        if let Some(left) = self.left.as_deref() {
            left.in_order(action);
        }
        action(&self.value);
        if let Some(right) = self.right.as_deref() {
            right.in_order(action);
        }
    }

    fn post_order<F: FnMut(&T)>(&self, action: &mut F) {
        if let Some(left) = self.left.as_deref() {
            left.post_order(action);
        }
        if let Some(right) = self.right.as_deref() {
            right.post_order(action);
        }
        action(&self.value);
    }
}

/// An in-order iterator over a [`BinarySearchTree`], created by [`BinarySearchTree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been queued but whose own value hasn't been yielded yet.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
