use rand::Rng;

/// Shuffle `items` in place. Walks the slice from the front, swapping
/// each position with a uniformly chosen position at or after it, so
/// every permutation is equally likely.
pub(crate) fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let n = items.len();
    for i in 0..n {
        let r = rng.gen_range(i..n);
        items.swap(i, r);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn keeps_every_item() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut v: Vec<u32> = (0..100).collect();

        shuffle(&mut v, &mut rng);
        assert_ne!((0..100).collect::<Vec<u32>>(), v);

        v.sort_unstable();
        assert_eq!((0..100).collect::<Vec<u32>>(), v);
    }

    #[test]
    fn empty_and_single() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut v: Vec<u8> = vec![];
        shuffle(&mut v, &mut rng);
        assert!(v.is_empty());

        let mut v = vec![1u8];
        shuffle(&mut v, &mut rng);
        assert_eq!(vec![1], v);
    }

    #[test]
    fn all_orders_of_three_appear() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..600 {
            let mut v = [0u8, 1, 2];
            shuffle(&mut v, &mut rng);
            seen.insert(v);
        }

        assert_eq!(6, seen.len());
    }
}
