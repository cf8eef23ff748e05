//! Property tests that only go through the public API of each container.

#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod buffers;
mod lists;
mod tree;
