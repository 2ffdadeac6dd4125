//! Two linear containers.
//!
//! [`Deque`] is a double-ended queue with constant time insertion and
//! removal at both ends. Internally it uses a `Vec` and tracks next,
//! previous, front, and back elements by index. Removed slots go on a
//! free list that is used before the `Vec` is expanded.
//!
//! [`RandomizedQueue`] removes and samples its items uniformly at
//! random, and iterates over them in an independent random order.

mod deque;
mod error;
mod iterators;
pub mod permutation;
mod randomized_queue;
mod shuffle;
mod slot;

pub use crate::deque::Deque;
pub use crate::error::{Error, Result, TryNext};
pub use crate::iterators::{Drain, Iter, IterBack, Shuffled};
pub use crate::randomized_queue::{RandomizedQueue, MIN_CAPACITY};
