use crate::datastructures::NodeList;
use crate::graph::kruskal_edge::KruskalEdge;
use crate::graph::records::{Edge, EdgeId, Vertex, VertexId};
use crate::graph::unordered_pair::UnorderedPair;
use crate::graph::Weight;
use fxhash::FxBuildHasher;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

#[cfg(feature = "log")]
use log::trace;

/// Neighbors of a vertex together with the weights of the connecting edges.
///
/// `neighbors[i]` is reached over an edge of weight `weights[i]`. Both
/// vectors are fresh copies owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighbors<K> {
    pub neighbors: Vec<K>,
    pub weights: Vec<Weight>,
}

impl<K> Neighbors<K> {
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, Weight)> + '_ {
        self.neighbors.iter().zip(self.weights.iter().copied())
    }
}

/// Weighted, undirected graph with self-loops and without parallel edges.
///
/// Vertices are identified by caller supplied keys. Every vertex owns a
/// linked adjacency list of its incident edges, and every edge remembers the
/// list nodes referring to it, so edges are added and removed in O(1) and a
/// vertex is removed in O(degree). Lookups go through two hash indexes, one
/// from key to vertex and one from unordered vertex pair to edge.
///
/// Operations on keys that are not vertices of the graph are no-ops.
#[derive(Clone, Debug)]
pub struct WUGraph<K, S = FxBuildHasher> {
    vertices: NodeList<Vertex<K>>,
    vertex_index: HashMap<K, VertexId, S>,
    edges: NodeList<Edge>,
    edge_index: HashMap<UnorderedPair<VertexId>, EdgeId, S>,
}

impl<K: Eq + Hash + Clone> WUGraph<K> {
    pub fn new() -> Self {
        Self::with_hasher(FxBuildHasher::default())
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: NodeList::with_capacity(vertices),
            vertex_index: HashMap::with_capacity_and_hasher(vertices, Default::default()),
            edges: NodeList::with_capacity(edges),
            edge_index: HashMap::with_capacity_and_hasher(edges, Default::default()),
        }
    }
}

impl<K: Eq + Hash + Clone, S: BuildHasher + Default> Default for WUGraph<K, S> {
    fn default() -> Self {
        Self {
            vertices: NodeList::new(),
            vertex_index: HashMap::default(),
            edges: NodeList::new(),
            edge_index: HashMap::default(),
        }
    }
}

impl<K, S: BuildHasher + Clone> WUGraph<K, S> {
    /// Creates an empty graph hashing vertex keys with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            vertices: NodeList::new(),
            vertex_index: HashMap::with_hasher(hasher.clone()),
            edges: NodeList::new(),
            edge_index: HashMap::with_hasher(hasher),
        }
    }
}

impl<K: Eq + Hash + Clone, S: BuildHasher> WUGraph<K, S> {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Copies of all vertex keys, in insertion order of the vertices that are
    /// currently present.
    pub fn get_vertices(&self) -> Vec<K> {
        self.vertices.iter().map(|v| v.key.clone()).collect()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.iter().map(|v| &v.key)
    }

    /// Adds `key` as an isolated vertex. Does nothing if it is already a
    /// vertex.
    pub fn add_vertex(&mut self, key: K) {
        if self.vertex_index.contains_key(&key) {
            return;
        }
        let id = self.vertices.push_back(Vertex::new(key.clone()));
        self.vertex_index.insert(key, id);
    }

    /// Removes the vertex `key` and all edges incident on it.
    ///
    /// Running time is O(d) where d is the degree of `key`.
    pub fn remove_vertex<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = match self.vertex_id(key) {
            Some(id) => id,
            None => return,
        };
        #[cfg(feature = "log")]
        trace!(
            "removing vertex with {} incident edges",
            self.vertices[id].degree
        );
        let mut cursor = self.vertices[id].adjacency.front();
        while let Some(node) = cursor {
            let adjacency = &self.vertices[id].adjacency;
            cursor = adjacency.next(node);
            let edge = adjacency[node];
            self.unlink_edge(edge);
        }
        debug_assert_eq!(self.vertices[id].degree, 0);
        self.vertices.remove(id);
        self.vertex_index.remove(key);
    }

    pub fn is_vertex<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertex_index.contains_key(key)
    }

    /// Number of edges incident on `key`, where a self-loop counts once.
    /// Zero if `key` is not a vertex.
    pub fn degree<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertex_id(key)
            .map_or(0, |id| self.vertices[id].degree)
    }

    /// Neighbors of `key` and the weights of the connecting edges, in the
    /// order the edges were added. A self-loop lists `key` itself once.
    ///
    /// Returns `None` if `key` is not a vertex or has no incident edges.
    pub fn get_neighbors<Q>(&self, key: &Q) -> Option<Neighbors<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.vertex_id(key)?;
        let vertex = &self.vertices[id];
        if vertex.degree == 0 {
            return None;
        }
        let mut neighbors = Vec::with_capacity(vertex.degree);
        let mut weights = Vec::with_capacity(vertex.degree);
        for (other, weight) in self.incident(id) {
            neighbors.push(other.clone());
            weights.push(weight);
        }
        Some(Neighbors { neighbors, weights })
    }

    /// Borrowing variant of [`WUGraph::get_neighbors`]; empty for unknown
    /// keys.
    pub fn neighbors<Q>(&self, key: &Q) -> Box<dyn Iterator<Item = (&K, Weight)> + '_>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.vertex_id(key) {
            Some(id) => Box::new(self.incident(id)),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Adds the edge `(u, v)` with `weight`, or updates the weight if the edge
    /// exists. Does nothing unless both `u` and `v` are vertices.
    pub fn add_edge<Q>(&mut self, u: &Q, v: &Q, weight: Weight)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (a, b) = match (self.vertex_id(u), self.vertex_id(v)) {
            (Some(a), Some(b)) => (a, b),
            _ => return,
        };
        let pair = UnorderedPair::new(a, b);
        if let Some(&id) = self.edge_index.get(&pair) {
            self.edges[id].weight = weight;
            return;
        }
        let id = self.edges.push_back(Edge::new(a, b, weight));
        let mut handles = [None, None];
        for (slot, vertex) in Edge::endpoints_of(a, b).enumerate() {
            handles[slot] = Some(self.vertices[vertex].attach(id));
        }
        self.edges[id].handles = handles;
        self.edge_index.insert(pair, id);
    }

    /// Removes the edge `(u, v)` if it exists.
    pub fn remove_edge<Q>(&mut self, u: &Q, v: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(id) = self.edge_id(u, v) {
            self.unlink_edge(id);
        }
    }

    pub fn is_edge<Q>(&self, u: &Q, v: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edge_id(u, v).is_some()
    }

    /// Weight of the edge `(u, v)`, or zero if there is no such edge.
    ///
    /// Zero is also a valid weight, so absence has to be checked with
    /// [`WUGraph::is_edge`] or [`WUGraph::try_weight`].
    pub fn weight<Q>(&self, u: &Q, v: &Q) -> Weight
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.try_weight(u, v).unwrap_or(0)
    }

    pub fn try_weight<Q>(&self, u: &Q, v: &Q) -> Option<Weight>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edge_id(u, v).map(|id| self.edges[id].weight)
    }

    /// Every edge exactly once, in the order the edges were added.
    pub fn kruskal_edges(&self) -> Vec<KruskalEdge<K>> {
        self.edges
            .iter()
            .map(|edge| {
                KruskalEdge::new(
                    self.vertices[edge.a].key.clone(),
                    self.vertices[edge.b].key.clone(),
                    edge.weight,
                )
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.vertex_index.clear();
        self.edges.clear();
        self.edge_index.clear();
    }

    fn vertex_id<Q>(&self, key: &Q) -> Option<VertexId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertex_index.get(key).copied()
    }

    fn edge_id<Q>(&self, u: &Q, v: &Q) -> Option<EdgeId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let a = self.vertex_id(u)?;
        let b = self.vertex_id(v)?;
        self.edge_index.get(&UnorderedPair::new(a, b)).copied()
    }

    fn incident(&self, id: VertexId) -> impl Iterator<Item = (&K, Weight)> + '_ {
        self.vertices[id].adjacency.iter().map(move |&edge_id| {
            let edge = &self.edges[edge_id];
            (&self.vertices[edge.other(id)].key, edge.weight)
        })
    }

    fn unlink_edge(&mut self, id: EdgeId) {
        let edge = match self.edges.remove(id) {
            Some(edge) => edge,
            None => return,
        };
        for (vertex, node) in edge.incidences() {
            self.vertices[vertex].detach(node);
        }
        let removed = self.edge_index.remove(&UnorderedPair::new(edge.a, edge.b));
        debug_assert_eq!(removed, Some(id));
    }
}

impl<K, S> Extend<(K, K, Weight)> for WUGraph<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Adds each edge, adding missing endpoints first.
    fn extend<I: IntoIterator<Item = (K, K, Weight)>>(&mut self, iter: I) {
        for (u, v, weight) in iter {
            self.add_vertex(u.clone());
            self.add_vertex(v.clone());
            self.add_edge(&u, &v, weight);
        }
    }
}

impl<K, S> FromIterator<(K, K, Weight)> for WUGraph<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, K, Weight)>>(iter: I) -> Self {
        let mut graph = Self::default();
        graph.extend(iter);
        graph
    }
}
