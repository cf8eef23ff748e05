//! This crate exposes the fundamental container types, mostly for educational purposes:
//!
//! - [`bst::BinarySearchTree`], an unbalanced Binary Search Tree.
//! - [`linked_list::LinkedList`], a singly linked list.
//! - [`doubly_linked_list::DoublyLinkedList`], a doubly linked list.
//! - [`stack::Stack`], a LIFO stack backed by a growable array.
//! - [`queue::Queue`], a FIFO queue backed by a growable circular buffer.
//!
//! ## Ownership
//!
//! Every container exclusively owns its nodes or slots. The tree's nodes own their children and
//! the lists' nodes own their successors; the extra pointers some of them keep (a list's tail, a
//! doubly linked node's predecessor) never own anything and are kept in step with the owning
//! links by every mutation.
//!
//! ## Ordering
//!
//! Each container enumerates its values in a fixed logical order:
//!
//! | Container | `iter` order |
//! |-|-|
//! | `BinarySearchTree` | ascending (in-order) |
//! | `LinkedList`, `DoublyLinkedList` | head to tail |
//! | `Stack` | top to bottom |
//! | `Queue` | oldest to newest |
//!
//! Iterators borrow their container, so it cannot be mutated while an iteration is in progress.
//!
//! ## Errors
//!
//! Only taking a value out of an empty [`stack::Stack`] or [`queue::Queue`] is an error
//! ([`error::EmptyContainer`]). Looking for or removing a value that isn't there is an ordinary
//! outcome and reported with a `bool` or an [`Option`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod doubly_linked_list;
pub mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;

mod util;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
