use containers::error::EmptyContainer;
use containers::queue::Queue;
use containers::stack::Stack;

#[quickcheck]
fn stack_is_lifo(xs: Vec<i8>) -> bool {
    let mut stack = Stack::new();
    for x in &xs {
        stack.push(*x);
    }
    let top_down: Vec<_> = stack.iter().copied().collect();

    let mut popped = Vec::new();
    while let Ok(x) = stack.pop() {
        popped.push(x);
    }

    let mut reversed = xs;
    reversed.reverse();
    popped == reversed && top_down == reversed && stack.peek() == Err(EmptyContainer::Stack)
}

#[quickcheck]
fn queue_is_fifo(xs: Vec<i8>) -> bool {
    let mut queue = Queue::new();
    for x in &xs {
        queue.enqueue(*x);
    }
    let oldest_first: Vec<_> = queue.iter().copied().collect();

    let mut dequeued = Vec::new();
    while let Ok(x) = queue.dequeue() {
        dequeued.push(x);
    }

    dequeued == xs && oldest_first == xs && queue.peek() == Err(EmptyContainer::Queue)
}

/// Interleaves dequeues with enqueues so the buffer wraps before it grows.
#[quickcheck]
fn queue_is_fifo_while_wrapping(xs: Vec<i8>, every: u8) -> bool {
    let every = usize::from(every % 4) + 2;
    let mut queue = Queue::new();
    let mut dequeued = Vec::new();

    for (i, x) in xs.iter().enumerate() {
        queue.enqueue(*x);
        if i % every == 0 {
            dequeued.extend(queue.dequeue().ok());
        }
    }
    let remaining: Vec<_> = queue.iter().copied().collect();
    while let Ok(x) = queue.dequeue() {
        dequeued.push(x);
    }

    dequeued == xs && remaining[..] == xs[xs.len() - remaining.len()..]
}
