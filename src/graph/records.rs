use crate::datastructures::{NodeHandle, NodeList};
use crate::graph::Weight;
use std::iter;

/// Handle of a vertex record in the graph's vertex sequence.
pub(crate) type VertexId = NodeHandle;
/// Handle of an edge record in the graph's edge list.
pub(crate) type EdgeId = NodeHandle;

#[derive(Clone, Debug)]
pub(crate) struct Vertex<K> {
    pub(crate) key: K,
    pub(crate) degree: usize,
    pub(crate) adjacency: NodeList<EdgeId>,
}

impl<K> Vertex<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            degree: 0,
            adjacency: NodeList::new(),
        }
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) -> NodeHandle {
        self.degree += 1;
        self.adjacency.push_back(edge)
    }

    pub(crate) fn detach(&mut self, node: NodeHandle) {
        let removed = self.adjacency.remove(node);
        debug_assert!(removed.is_some(), "edge handle not in adjacency");
        self.degree -= 1;
        debug_assert_eq!(self.degree, self.adjacency.len());
    }
}

/// Undirected weighted edge between `a` and `b`.
///
/// `handles[i]` locates this edge in the adjacency of the `i`-th endpoint as
/// yielded by [`Edge::endpoints`]. A self-loop has one endpoint and therefore
/// only `handles[0]`.
#[derive(Clone, Debug)]
pub(crate) struct Edge {
    pub(crate) a: VertexId,
    pub(crate) b: VertexId,
    pub(crate) weight: Weight,
    pub(crate) handles: [Option<NodeHandle>; 2],
}

impl Edge {
    pub(crate) fn new(a: VertexId, b: VertexId, weight: Weight) -> Self {
        Self {
            a,
            b,
            weight,
            handles: [None, None],
        }
    }

    /// Distinct endpoints, `a` first. Yields a single vertex for a self-loop.
    pub(crate) fn endpoints(&self) -> impl Iterator<Item = VertexId> {
        Self::endpoints_of(self.a, self.b)
    }

    pub(crate) fn endpoints_of(a: VertexId, b: VertexId) -> impl Iterator<Item = VertexId> {
        iter::once(a).chain(if a == b { None } else { Some(b) })
    }

    /// Each distinct endpoint together with the node locating this edge in
    /// that endpoint's adjacency.
    pub(crate) fn incidences(&self) -> impl Iterator<Item = (VertexId, NodeHandle)> + '_ {
        self.endpoints()
            .zip(self.handles.iter())
            .filter_map(|(vertex, handle)| handle.map(|h| (vertex, h)))
    }

    /// The endpoint opposite to `from`; `from` itself for a self-loop.
    #[inline]
    pub(crate) fn other(&self, from: VertexId) -> VertexId {
        if self.a == from {
            self.b
        } else {
            debug_assert_eq!(self.b, from);
            self.a
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::datastructures::NodeList;
    use crate::graph::records::{Edge, Vertex};

    #[test]
    fn self_loop_has_one_endpoint() {
        let mut vertices = NodeList::new();
        let a = vertices.push_back(Vertex::new('a'));
        let b = vertices.push_back(Vertex::new('b'));

        assert_eq!(Edge::new(a, b, 1).endpoints().count(), 2);
        let edge = Edge::new(a, a, 1);
        assert_eq!(edge.endpoints().collect::<Vec<_>>(), vec![a]);
        assert_eq!(edge.other(a), a);
    }

    #[test]
    fn other_endpoint() {
        let mut vertices = NodeList::new();
        let a = vertices.push_back(Vertex::new(0));
        let b = vertices.push_back(Vertex::new(1));
        let edge = Edge::new(a, b, 3);
        assert_eq!(edge.other(a), b);
        assert_eq!(edge.other(b), a);
    }

    #[test]
    fn attach_detach_degree() {
        let mut edges = NodeList::new();
        let mut vertex = Vertex::new("v");
        let mut ids = NodeList::new();
        let placeholder = ids.push_back(());

        let e = edges.push_back(Edge::new(placeholder, placeholder, 0));
        let node = vertex.attach(e);
        assert_eq!(vertex.degree, 1);
        assert_eq!(vertex.adjacency[node], e);
        vertex.detach(node);
        assert_eq!(vertex.degree, 0);
        assert!(vertex.adjacency.is_empty());
    }
}
