use crate::error::{Error, Result};
use crate::iterators::Shuffled;
use crate::shuffle::shuffle;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::iter::FromIterator;
use tracing::trace;

/// The capacity of a freshly created queue. Storage never shrinks
/// below this.
pub const MIN_CAPACITY: usize = 2;

/// A queue whose removal order is uniformly random.
///
/// Items live in the first `len` slots of a resizable array. The array
/// doubles when an insertion finds it full, and halves when a removal
/// leaves it a quarter full, so its capacity is always a power of two.
pub struct RandomizedQueue<T> {
    // Live items occupy `slots[..len]`; every later slot is `None`.
    slots: Vec<Option<T>>,
    len: usize,
    rng: StdRng,
}

impl<T> fmt::Debug for RandomizedQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.live()).finish()
    }
}

impl<T> RandomizedQueue<T> {
    /// Creates an empty queue drawing from an entropy-seeded random
    /// source.
    pub fn new() -> RandomizedQueue<T> {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an empty queue whose choices are reproducible for a
    /// given `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randqueue::RandomizedQueue;
    ///
    /// let mut a = RandomizedQueue::with_seed(3);
    /// a.extend(0..10);
    /// let mut b = RandomizedQueue::with_seed(3);
    /// b.extend(0..10);
    ///
    /// assert_eq!(a.dequeue().unwrap(), b.dequeue().unwrap());
    /// ```
    pub fn with_seed(seed: u64) -> RandomizedQueue<T> {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates an empty queue using `rng` for every random choice.
    pub fn with_rng(rng: StdRng) -> RandomizedQueue<T> {
        RandomizedQueue {
            slots: empty_slots(MIN_CAPACITY),
            len: 0,
            rng,
        }
    }

    /// The number of items in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the queue is empty.
    pub fn is_empty(&self) -> bool {
        0 == self.len
    }

    /// The number of slots in the backing storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use randqueue::RandomizedQueue;
    ///
    /// let mut q = RandomizedQueue::with_seed(0);
    /// assert_eq!(2, q.capacity());
    ///
    /// q.extend(0..3);
    /// assert_eq!(4, q.capacity());
    /// ```
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Add `item` to the queue, doubling the storage first if it is
    /// full.
    pub fn enqueue(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.resize(2 * self.slots.len());
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
    }

    /// Remove and return a uniformly random item. Fails with
    /// `Error::Underflow` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use randqueue::{Error, RandomizedQueue};
    ///
    /// let mut q = RandomizedQueue::with_seed(1);
    /// q.extend(vec!["a", "b"]);
    ///
    /// let mut out = vec![q.dequeue().unwrap(), q.dequeue().unwrap()];
    /// out.sort();
    /// assert_eq!(vec!["a", "b"], out);
    /// assert!(matches!(q.dequeue(), Err(Error::Underflow(_))));
    /// ```
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Underflow("randomized queue"));
        }
        self.shuffle_live();

        // Taking the item leaves `None` behind, so the vacated slot
        // holds no stale value.
        let item = self.slots[self.len - 1]
            .take()
            .expect("live slot is expected to be occupied");
        self.len -= 1;

        if self.len > 0 && self.len == self.slots.len() / 4 {
            self.resize(self.slots.len() / 2);
        }
        Ok(item)
    }

    /// Return a uniformly random item without removing it. Fails with
    /// `Error::Underflow` if the queue is empty.
    ///
    /// The live items are reshuffled in place to make the choice, so
    /// the storage order changes even though the contents do not.
    pub fn sample(&mut self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Underflow("randomized queue"));
        }
        self.shuffle_live();

        Ok(self.slots[self.len - 1]
            .as_ref()
            .expect("live slot is expected to be occupied"))
    }

    /// An iterator over a shuffled copy of the current items. Each
    /// iterator gets its own independent order, and later changes to
    /// the queue do not affect iterators already created.
    ///
    /// # Examples
    ///
    /// ```
    /// use randqueue::RandomizedQueue;
    ///
    /// let mut q = RandomizedQueue::with_seed(5);
    /// q.extend(1..=4);
    ///
    /// let i = q.iter();
    /// q.dequeue().unwrap();
    ///
    /// let mut v: Vec<u8> = i.collect();
    /// v.sort();
    /// assert_eq!(vec![1, 2, 3, 4], v);
    /// ```
    pub fn iter(&mut self) -> Shuffled<T>
    where
        T: Clone,
    {
        let mut copy: Vec<T> = self.live().cloned().collect();
        shuffle(&mut copy, &mut self.rng);
        Shuffled::new(copy)
    }

    fn live(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.len].iter().flatten()
    }

    fn shuffle_live(&mut self) {
        if self.len > 1 {
            shuffle(&mut self.slots[..self.len], &mut self.rng);
        }
    }

    // Move the live items into fresh storage of `capacity` slots,
    // keeping their order.
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        trace!(
            from = self.slots.len(),
            to = capacity,
            len = self.len,
            "resizing randomized queue"
        );

        let mut slots = Vec::with_capacity(capacity);
        slots.extend(self.slots.drain(..self.len));
        slots.resize_with(capacity, || None);
        self.slots = slots;
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

impl<T> Extend<T> for RandomizedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.enqueue(i);
        }
    }
}

impl<T> IntoIterator for RandomizedQueue<T> {
    type Item = T;
    type IntoIter = Shuffled<T>;

    /// Consumes the queue, yielding every item in a uniformly random
    /// order.
    fn into_iter(self) -> Self::IntoIter {
        let RandomizedQueue {
            slots,
            len,
            mut rng,
        } = self;

        let mut items: Vec<T> = slots.into_iter().take(len).flatten().collect();
        shuffle(&mut items, &mut rng);
        Shuffled::new(items)
    }
}
