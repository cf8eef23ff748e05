use containers::doubly_linked_list::DoublyLinkedList;
use containers::linked_list::LinkedList;

use std::collections::VecDeque;

/// `true` pushes to the front, `false` to the back.
#[quickcheck]
fn singly_matches_deque(ops: Vec<(bool, i8)>, removals: Vec<bool>) -> bool {
    let mut list = LinkedList::new();
    let mut model = VecDeque::new();

    for (front, value) in ops {
        if front {
            list.add_first(value);
            model.push_front(value);
        } else {
            list.add_last(value);
            model.push_back(value);
        }
    }

    for front in removals {
        let (got, expected) = if front {
            (list.remove_first(), model.pop_front())
        } else {
            (list.remove_last(), model.pop_back())
        };
        if got != expected {
            return false;
        }
    }

    list.len() == model.len() && list.iter().eq(model.iter())
}

#[quickcheck]
fn doubly_matches_deque(ops: Vec<(bool, i8)>, removals: Vec<bool>) -> bool {
    let mut list = DoublyLinkedList::new();
    let mut model = VecDeque::new();

    for (front, value) in ops {
        if front {
            list.add_first(value);
            model.push_front(value);
        } else {
            list.add_last(value);
            model.push_back(value);
        }
    }

    for front in removals {
        let (got, expected) = if front {
            (list.remove_first(), model.pop_front())
        } else {
            (list.remove_last(), model.pop_back())
        };
        if got != expected {
            return false;
        }
    }

    list.iter().eq(model.iter()) && list.iter().rev().eq(model.iter().rev())
}

#[quickcheck]
fn copy_to_matches_iter(xs: Vec<i8>, offset: u8) -> bool {
    let offset = usize::from(offset % 8);
    let singly: LinkedList<_> = xs.iter().copied().collect();
    let doubly: DoublyLinkedList<_> = xs.iter().copied().collect();

    let mut from_singly = vec![0; offset + xs.len()];
    let mut from_doubly = vec![0; offset + xs.len()];
    singly.copy_to(&mut from_singly, offset);
    doubly.copy_to(&mut from_doubly, offset);

    from_singly[offset..] == xs[..] && from_doubly == from_singly
}

#[quickcheck]
fn remove_by_value_drops_first_match(xs: Vec<i8>, target: i8) -> bool {
    let mut singly: LinkedList<_> = xs.iter().copied().collect();
    let mut doubly: DoublyLinkedList<_> = xs.iter().copied().collect();

    let mut expected = xs.clone();
    let found = match expected.iter().position(|x| *x == target) {
        Some(pos) => {
            expected.remove(pos);
            true
        }
        None => false,
    };

    singly.remove(&target) == found
        && doubly.remove(&target) == found
        && singly.iter().eq(expected.iter())
        && doubly.iter().eq(expected.iter())
}
