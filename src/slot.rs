pub(crate) struct Free {
    // The next free slot.
    next: usize,
}

impl Free {
    pub(crate) fn next(&self) -> usize {
        self.next
    }
}

/// A node of the deque. `front` is the non-owning link towards the
/// head and `back` the link towards the tail. Both are slot indices,
/// `usize::MAX` at the ends.
pub(crate) struct Node<T> {
    front: usize,
    back: usize,
    data: T,
}

impl<T> Node<T> {
    pub(crate) fn front(&self) -> usize {
        self.front
    }

    pub(crate) fn set_front(&mut self, new_front: usize) {
        self.front = new_front;
    }

    pub(crate) fn back(&self) -> usize {
        self.back
    }

    pub(crate) fn set_back(&mut self, new_back: usize) {
        self.back = new_back;
    }

    pub(crate) fn data(&self) -> &T {
        &self.data
    }

    pub(crate) fn take(self) -> (usize, T, usize) {
        let Node { front, back, data } = self;
        (front, data, back)
    }
}

pub(crate) enum Slot<T> {
    Free(Free),
    Used(Node<T>),
}

impl<T> Slot<T> {
    pub(crate) fn new_free(next: usize) -> Slot<T> {
        Slot::Free(Free { next })
    }

    pub(crate) fn new_used(front: usize, back: usize, data: T) -> Slot<T> {
        Slot::Used(Node { front, back, data })
    }

    pub(crate) fn get_used(&self) -> Option<&Node<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }

    pub(crate) fn get_used_mut(&mut self) -> Option<&mut Node<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }

    pub(crate) fn get_free(&self) -> Option<&Free> {
        if let Slot::Free(free) = self {
            Some(free)
        } else {
            None
        }
    }

    pub(crate) fn into_used(self) -> Option<Node<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }
}
