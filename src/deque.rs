use crate::error::{Error, Result};
use crate::iterators::{Drain, Iter, IterBack};
use crate::slot::{Node, Slot};
use std::fmt;
use std::iter::FromIterator;

/// A double-ended queue with constant time insertion and removal at
/// both the front and the back.
///
/// Nodes are stored in a `Vec` and linked to each other by index. A
/// removed node's slot is put on a free list, which is drained before
/// the `Vec` grows again.
pub struct Deque<T> {
    // Index of the first element on the free list. MAX when the
    // free-list is empty.
    free_list: usize,
    // The index of the front of the deque. MAX when the deque is empty.
    pub(crate) front: usize,
    // The index of the back of the deque. MAX when the deque is empty.
    pub(crate) back: usize,
    // The number of slots currently used by entries.
    len_used: usize,
    // The number of slots currently on the free list.
    len_free: usize,
    pub(crate) slots: Vec<Slot<T>>,
}

impl<T> fmt::Debug for Deque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Deque<T> {
    /// Creates an empty `Deque`. No allocations are performed until
    /// values are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use randqueue::Deque;
    ///
    /// let deque: Deque<u32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Deque<T> {
        Deque {
            free_list: usize::MAX,
            front: usize::MAX,
            back: usize::MAX,
            len_used: 0,
            len_free: 0,
            slots: Vec::new(),
        }
    }

    /// Create a new `Deque` instance with a freelist `capacity`
    /// elements deep.
    ///
    /// # Examples
    ///
    /// ```
    /// use randqueue::Deque;
    ///
    /// let deque: Deque<u32> = Deque::with_capacity(16);
    /// assert_eq!(16, deque.len_freelist());
    /// ```
    pub fn with_capacity(capacity: usize) -> Deque<T> {
        let mut vec = Vec::with_capacity(capacity);

        let mut next = usize::MAX;
        for i in 0..capacity {
            vec.push(Slot::new_free(next));
            next = i;
        }

        Deque {
            free_list: next,
            front: usize::MAX,
            back: usize::MAX,
            len_used: 0,
            len_free: capacity,
            slots: vec,
        }
    }

    /// Reserves capacity for at least `additional` more slots in the
    /// underlying `Vec`. The reserved slots are not put on the free
    /// list.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional)
    }

    /// Returns how many items could be held without resizing the
    /// internal vector.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The number of items in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use randqueue::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.add_first(1);
    /// d.add_last(2);
    /// assert_eq!(2, d.len());
    ///
    /// d.remove_first().unwrap();
    /// assert_eq!(1, d.len());
    /// ```
    pub fn len(&self) -> usize {
        self.len_used
    }

    /// True when the deque is empty.
    pub fn is_empty(&self) -> bool {
        0 == self.len_used
    }

    /// The number of entries on the deque's freelist.
    pub fn len_freelist(&self) -> usize {
        self.len_free
    }

    /// Insert `data` at the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use randqueue::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_first(1);
    /// d.add_last(2);
    /// d.add_first(0);
    ///
    /// assert_eq!(vec![&0, &1, &2], d.iter().collect::<Vec<_>>());
    /// ```
    pub fn add_first(&mut self, data: T) {
        let new_ix = self.allocate(usize::MAX, self.front, data);

        // Point the old front back at the node we just inserted.
        if usize::MAX != self.front {
            self.node_mut(self.front).set_front(new_ix);
        }
        self.front = new_ix;

        // A single node is both the front and the back.
        if usize::MAX == self.back {
            self.back = new_ix;
        }
    }

    /// Insert `data` at the back of the deque.
    pub fn add_last(&mut self, data: T) {
        let new_ix = self.allocate(self.back, usize::MAX, data);

        if usize::MAX != self.back {
            self.node_mut(self.back).set_back(new_ix);
        }
        self.back = new_ix;

        if usize::MAX == self.front {
            self.front = new_ix;
        }
    }

    /// Remove the front of the deque and return it. Fails with
    /// `Error::Underflow` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use randqueue::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// d.add_last(10);
    /// d.add_last(20);
    ///
    /// assert_eq!(10, d.remove_first().unwrap());
    /// assert_eq!(20, d.remove_first().unwrap());
    /// assert!(matches!(d.remove_first(), Err(Error::Underflow(_))));
    /// ```
    pub fn remove_first(&mut self) -> Result<T> {
        if usize::MAX != self.front {
            Ok(self.remove_unchecked(self.front))
        } else {
            Err(Error::Underflow("deque"))
        }
    }

    /// Remove the back of the deque and return it. Fails with
    /// `Error::Underflow` if the deque is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        if usize::MAX != self.back {
            Ok(self.remove_unchecked(self.back))
        } else {
            Err(Error::Underflow("deque"))
        }
    }

    /// The front value of the deque, `None` when empty.
    pub fn peek_first(&self) -> Option<&T> {
        if usize::MAX != self.front {
            Some(self.node(self.front).data())
        } else {
            None
        }
    }

    /// The back value of the deque, `None` when empty.
    pub fn peek_last(&self) -> Option<&T> {
        if usize::MAX != self.back {
            Some(self.node(self.back).data())
        } else {
            None
        }
    }

    /// Create an iterator over the deque from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use randqueue::{Deque, Error, TryNext};
    ///
    /// let d: Deque<u8> = vec![1, 2].into_iter().collect();
    /// let mut i = d.iter();
    ///
    /// assert_eq!(&1, i.try_next().unwrap());
    /// assert_eq!(&2, i.try_next().unwrap());
    /// assert!(matches!(i.try_next(), Err(Error::Exhausted)));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.front)
    }

    /// Create an iterator over the deque from back to front.
    pub fn iter_back(&self) -> IterBack<'_, T> {
        IterBack::new(self, self.back)
    }

    /// A draining iterator starting from the front. All drained slots
    /// are moved onto the free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use randqueue::Deque;
    ///
    /// let mut d: Deque<u8> = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(vec![1, 2, 3], d.drain().collect::<Vec<u8>>());
    /// assert!(d.is_empty());
    /// assert_eq!(3, d.len_freelist());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    pub(crate) fn node(&self, ix: usize) -> &Node<T> {
        self.slots[ix]
            .get_used()
            .expect("linked slot is expected to be used")
    }

    fn node_mut(&mut self, ix: usize) -> &mut Node<T> {
        self.slots[ix]
            .get_used_mut()
            .expect("linked slot is expected to be used")
    }

    pub(crate) fn remove_unchecked(&mut self, ix: usize) -> T {
        let (front, data, back) = self
            .free(ix)
            .into_used()
            .expect("removed slot is expected to be used")
            .take();

        if self.front == ix {
            debug_assert_eq!(usize::MAX, front);
            self.front = back;
        } else {
            debug_assert_ne!(usize::MAX, front);
            self.node_mut(front).set_back(back);
        }

        if self.back == ix {
            debug_assert_eq!(usize::MAX, back);
            self.back = front;
        } else {
            debug_assert_ne!(usize::MAX, back);
            self.node_mut(back).set_front(front);
        }

        data
    }

    fn allocate(&mut self, front: usize, back: usize, data: T) -> usize {
        self.len_used += 1;

        let s = Slot::new_used(front, back, data);

        if usize::MAX == self.free_list {
            self.slots.push(s);
            self.slots.len() - 1
        } else {
            let ix = self.free_list;
            self.free_list = self.slots[ix]
                .get_free()
                .expect("free list slot is expected to be free")
                .next();
            self.slots[ix] = s;
            self.len_free -= 1;
            ix
        }
    }

    fn free(&mut self, ix: usize) -> Slot<T> {
        debug_assert!(self.slots[ix].get_used().is_some());

        self.len_used -= 1;

        let mut v = Slot::new_free(self.free_list);
        std::mem::swap(&mut v, &mut self.slots[ix]);
        self.free_list = ix;
        self.len_free += 1;
        v
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut l = Self::new();
        l.extend(iter);
        l
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.add_last(i);
        }
    }
}

impl<'l, T> IntoIterator for &'l Deque<T> {
    type Item = &'l T;
    type IntoIter = Iter<'l, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
