use proptest::prelude::*;
use randqueue::{Deque, RandomizedQueue};
use std::collections::VecDeque;

proptest! {
    #[test]
    fn random_add_and_remove(
        adds in proptest::collection::vec(any::<bool>(), 0..64),
        removes in proptest::collection::vec(any::<bool>(), 0..64)
    ) {
        let mut l: Deque<usize> = Deque::new();
        let mut net = 0usize;

        for (i, first) in adds.into_iter().enumerate() {
            if first {
                l.add_first(i);
            } else {
                l.add_last(i);
            }
            net += 1;
        }

        for first in removes {
            let r = if first { l.remove_first() } else { l.remove_last() };
            if r.is_ok() {
                net -= 1;
            }
        }

        prop_assert_eq!(net, l.len());
        prop_assert_eq!(net == 0, l.is_empty());
    }
}

proptest! {
    #[test]
    fn random_interleaved_ops_match_vecdeque(
        action in proptest::collection::vec(any::<usize>(), 0..128)
    ){
        let mut l: Deque<usize> = Deque::new();
        let mut model: VecDeque<usize> = VecDeque::new();

        for a in action {
            match a & 0x03 {
                0x00 => {
                    l.add_first(a);
                    model.push_front(a);
                },
                0x01 => {
                    l.add_last(a);
                    model.push_back(a);
                },
                0x02 => {
                    prop_assert_eq!(model.pop_front(), l.remove_first().ok());
                },
                0x03 => {
                    prop_assert_eq!(model.pop_back(), l.remove_last().ok());
                },
                _ => unreachable!(),
            }
        }

        prop_assert_eq!(model.len(), l.len());
        prop_assert_eq!(model.iter().collect::<Vec<_>>(), l.iter().collect::<Vec<_>>());
        prop_assert_eq!(model.iter().rev().collect::<Vec<_>>(), l.iter_back().collect::<Vec<_>>());
    }
}

proptest! {
    #[test]
    fn dequeue_returns_each_item_once(
        seed in any::<u64>(),
        n in 0usize..200,
    ) {
        let mut q = RandomizedQueue::with_seed(seed);
        q.extend(0..n);

        let mut out: Vec<usize> = (0..n).map(|_| q.dequeue().unwrap()).collect();
        out.sort_unstable();

        prop_assert_eq!((0..n).collect::<Vec<usize>>(), out);
        prop_assert!(q.dequeue().is_err());
        prop_assert!(q.sample().is_err());
    }
}

proptest! {
    #[test]
    fn interleaved_enqueue_dequeue_keeps_count(
        seed in any::<u64>(),
        action in proptest::collection::vec(any::<bool>(), 0..256),
    ) {
        let mut q = RandomizedQueue::with_seed(seed);
        let mut len = 0usize;

        for (i, enqueue) in action.into_iter().enumerate() {
            if enqueue {
                q.enqueue(i);
                len += 1;
            } else if q.dequeue().is_ok() {
                len -= 1;
            }

            prop_assert_eq!(len, q.len());
            prop_assert!(q.capacity().is_power_of_two());
            prop_assert!(len == 0 || q.capacity() / 4 < len);
        }
    }
}

proptest! {
    #[test]
    fn two_iterators_reproduce_the_items(
        seed in any::<u64>(),
        items in proptest::collection::vec(any::<u16>(), 0..64),
    ) {
        let mut q = RandomizedQueue::with_seed(seed);
        q.extend(items.iter().copied());

        let mut expected = items;
        expected.sort_unstable();

        let mut a: Vec<u16> = q.iter().collect();
        let mut b: Vec<u16> = q.iter().collect();
        a.sort_unstable();
        b.sort_unstable();

        prop_assert_eq!(&expected, &a);
        prop_assert_eq!(&expected, &b);
    }
}
