//! Unique pair enumeration
//!
//! Pairs come out in row-major order: `(0,1), (0,2), .., (0,n-1), (1,2), ..`.
//! The order matters to callers that mutate as they go, since the earlier
//! pair in a cluster is resolved first.

/// Every index pair `(i, j)` with `i < j < len`, in row-major order
pub fn pairs(len: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len.saturating_sub(1)).flat_map(move |i| (i + 1..len).map(move |j| (i, j)))
}

/// Number of pairs [`pairs`] yields for `len` items
#[inline]
pub fn pair_count(len: usize) -> usize {
    len * len.saturating_sub(1) / 2
}

/// Borrow two distinct elements mutably. Requires `i < j < items.len()`.
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i < j, "pair_mut expects i < j, got ({i}, {j})");
    let (head, tail) = items.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Run `f` on every unique pair, in [`pairs`] order
pub fn for_each_pair<T>(items: &mut [T], mut f: impl FnMut(&mut T, &mut T)) {
    for (i, j) in pairs(items.len()) {
        let (a, b) = pair_mut(items, i, j);
        f(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pairs_for_small_inputs() {
        assert_eq!(pairs(0).count(), 0);
        assert_eq!(pairs(1).count(), 0);
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
    }

    #[test]
    fn test_row_major_order() {
        let visited: Vec<_> = pairs(4).collect();
        assert_eq!(
            visited,
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
        assert_eq!(pair_count(4), 6);
    }

    #[test]
    fn test_for_each_pair_sees_earlier_mutations() {
        // Each visit adds the left value into the right one, so later pairs
        // observe the updates from earlier pairs.
        let mut values = vec![1, 1, 1];
        for_each_pair(&mut values, |a, b| *b += *a);
        // (0,1): [1,2,1]  (0,2): [1,2,2]  (1,2): [1,2,4]
        assert_eq!(values, vec![1, 2, 4]);
    }

    #[test]
    fn test_pair_mut_borrows_both() {
        let mut values = [10, 20, 30];
        let (a, b) = pair_mut(&mut values, 0, 2);
        std::mem::swap(a, b);
        assert_eq!(values, [30, 20, 10]);
    }
}
