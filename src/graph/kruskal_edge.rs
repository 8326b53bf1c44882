use crate::graph::Weight;
use std::cmp::Ordering;

/// Weighted edge as handed to a minimum spanning tree routine.
///
/// Records are ordered by weight only: two records with the same weight
/// compare equal regardless of their endpoints. Use a stable sort (see
/// [`KruskalEdge::sort_by_weight`]) when the order among equal weights must
/// be deterministic.
#[derive(Clone, Debug)]
pub struct KruskalEdge<K> {
    pub u: K,
    pub v: K,
    pub weight: Weight,
}

impl<K> KruskalEdge<K> {
    pub fn new(u: K, v: K, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    pub fn endpoints(&self) -> (&K, &K) {
        (&self.u, &self.v)
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn sort_by_weight(edges: &mut [KruskalEdge<K>]) {
        edges.sort();
    }
}

impl<K> PartialEq for KruskalEdge<K> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl<K> Eq for KruskalEdge<K> {}

impl<K> PartialOrd for KruskalEdge<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for KruskalEdge<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::KruskalEdge;
    use std::cmp::Ordering;

    #[test]
    fn compares_weight_only() {
        let a = KruskalEdge::new("a", "b", 3);
        let b = KruskalEdge::new("x", "y", 3);
        let c = KruskalEdge::new("a", "b", 4);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert!(a < c);
        assert!(c > b);
        assert!(KruskalEdge::new("c", "c", -5) < a);
        assert_eq!(a.endpoints(), (&"a", &"b"));
    }

    #[test]
    fn stable_sort_keeps_ties_in_order() {
        let mut edges = vec![
            KruskalEdge::new(0, 1, 7),
            KruskalEdge::new(1, 2, 2),
            KruskalEdge::new(2, 3, 7),
            KruskalEdge::new(3, 4, 2),
            KruskalEdge::new(4, 5, -1),
        ];
        KruskalEdge::sort_by_weight(&mut edges);
        let order: Vec<_> = edges.iter().map(|e| (e.u, e.v, e.weight)).collect();
        assert_eq!(
            order,
            vec![(4, 5, -1), (1, 2, 2), (3, 4, 2), (0, 1, 7), (2, 3, 7)]
        );
    }
}
