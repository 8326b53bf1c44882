use std::hash::{Hash, Hasher};

/// Pair of values where `(u, v)` and `(v, u)` are the same key.
///
/// Both equality and hashing are symmetric in the two components, so the
/// pair can index a hash map of undirected edges without normalizing the
/// argument order first.
#[derive(Clone, Copy, Debug)]
pub struct UnorderedPair<T>(pub T, pub T);

impl<T> UnorderedPair<T> {
    pub fn new(u: T, v: T) -> Self {
        UnorderedPair(u, v)
    }
}

impl<T: PartialEq> UnorderedPair<T> {
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl<T: PartialEq> PartialEq for UnorderedPair<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl<T: Eq> Eq for UnorderedPair<T> {}

impl<T: Hash> Hash for UnorderedPair<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // addition instead of xor, so that (u, u) does not collapse to zero
        let a = fxhash::hash64(&self.0);
        let b = fxhash::hash64(&self.1);
        state.write_u64(a.wrapping_add(b));
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::unordered_pair::UnorderedPair;
    use fxhash::{FxHashMap, FxHashSet};

    #[test]
    fn symmetric_eq() {
        assert_eq!(UnorderedPair(1, 2), UnorderedPair(2, 1));
        assert_eq!(UnorderedPair(3, 3), UnorderedPair(3, 3));
        assert_ne!(UnorderedPair(1, 2), UnorderedPair(1, 3));
        assert_ne!(UnorderedPair(1, 1), UnorderedPair(1, 2));
    }

    #[test]
    fn symmetric_lookup() {
        let mut map = FxHashMap::default();
        map.insert(UnorderedPair("a", "b"), 5);
        assert_eq!(map.get(&UnorderedPair("b", "a")), Some(&5));
        assert_eq!(map.get(&UnorderedPair("a", "a")), None);

        map.insert(UnorderedPair("b", "a"), 7);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&UnorderedPair("a", "b")), Some(&7));
    }

    #[test]
    fn self_loops_are_distinct() {
        let set: FxHashSet<_> = (0..100).map(|i| UnorderedPair(i, i)).collect();
        assert_eq!(set.len(), 100);
        assert!(UnorderedPair(4, 4).is_loop());
        assert!(!UnorderedPair(4, 5).is_loop());
    }
}
