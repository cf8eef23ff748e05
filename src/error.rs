//! The single fault the containers in this crate can raise.

use derive_more::{Display, Error, IsVariant};

/// Returned when an element is requested from a [`Stack`](crate::stack::Stack) or
/// [`Queue`](crate::queue::Queue) that holds nothing. The variant names the container that was
/// empty.
///
/// Nothing is mutated when this error is returned.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum EmptyContainer {
    /// `pop` or `peek` on an empty stack.
    #[display("the stack is empty")]
    Stack,
    /// `dequeue` or `peek` on an empty queue.
    #[display("the queue is empty")]
    Queue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_container() {
        assert_eq!(EmptyContainer::Stack.to_string(), "the stack is empty");
        assert_eq!(EmptyContainer::Queue.to_string(), "the queue is empty");
    }

    #[test]
    fn is_a_std_error() {
        fn assert_error<E: std::error::Error>(_: E) {}
        assert_error(EmptyContainer::Queue);
        assert!(EmptyContainer::Queue.is_queue());
        assert!(!EmptyContainer::Stack.is_queue());
    }
}
