use crate::deque::Deque;
use std::iter::FusedIterator;

/// An iterator over the deque starting from the front. It is
/// constructed from the [`iter`] method on `Deque`.
///
/// [`iter`]: struct.Deque.html#method.iter
pub struct Iter<'l, T> {
    target: &'l Deque<T>,
    next_index: usize,
    remaining: usize,
}

impl<'l, T> Iter<'l, T> {
    pub(crate) fn new(target: &'l Deque<T>, next_index: usize) -> Self {
        Self {
            target,
            next_index,
            remaining: target.len(),
        }
    }
}

impl<'l, T> Iterator for Iter<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        if usize::MAX != self.next_index {
            let r = self.target.node(self.next_index);
            self.next_index = r.back();
            self.remaining -= 1;
            Some(r.data())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator over the deque starting from the back. It is
/// constructed from the [`iter_back`] method on `Deque`.
///
/// [`iter_back`]: struct.Deque.html#method.iter_back
pub struct IterBack<'l, T> {
    target: &'l Deque<T>,
    next_index: usize,
    remaining: usize,
}

impl<'l, T> IterBack<'l, T> {
    pub(crate) fn new(target: &'l Deque<T>, next_index: usize) -> Self {
        Self {
            target,
            next_index,
            remaining: target.len(),
        }
    }
}

impl<'l, T> Iterator for IterBack<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        if usize::MAX != self.next_index {
            let r = self.target.node(self.next_index);
            self.next_index = r.front();
            self.remaining -= 1;
            Some(r.data())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterBack<'_, T> {}
impl<T> FusedIterator for IterBack<'_, T> {}

/// A draining iterator over the deque starting from the front. It is
/// constructed from the [`drain`] method on `Deque`. Items not yet
/// yielded when the iterator is dropped are removed as well.
///
/// [`drain`]: struct.Deque.html#method.drain
pub struct Drain<'l, T> {
    target: &'l mut Deque<T>,
}

impl<'l, T> Drain<'l, T> {
    pub(crate) fn new(target: &'l mut Deque<T>) -> Self {
        Self { target }
    }
}

impl<'l, T> Iterator for Drain<'l, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if usize::MAX != self.target.front {
            Some(self.target.remove_unchecked(self.target.front))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.target.len(), Some(self.target.len()))
    }
}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.by_ref().for_each(drop);
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

/// An iterator over a private, shuffled copy of a `RandomizedQueue`'s
/// items. It is constructed from the [`iter`] method on
/// `RandomizedQueue`, or by consuming the queue with `into_iter`.
///
/// The copy is taken when the iterator is created, so the queue can
/// be changed afterwards without affecting what this yields.
///
/// [`iter`]: struct.RandomizedQueue.html#method.iter
pub struct Shuffled<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Shuffled<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl<T> Iterator for Shuffled<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for Shuffled<T> {}
impl<T> FusedIterator for Shuffled<T> {}
