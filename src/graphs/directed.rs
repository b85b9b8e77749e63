use crate::graphs::edges::ReadEdges;

/// Incidence queries on a directed graph.
///
/// Every method returns an empty result for a vertex that is not in the
/// graph.
pub trait Directed: ReadEdges {
    /// Returns all edges whose source is `source`, ordered by destination.
    fn outgoing(&self, source: &Self::Vertex) -> Self::Edges<'_>;

    /// Returns the number of edges leaving `vertex`.
    fn outgoing_degree(&self, vertex: &Self::Vertex) -> usize {
        self.outgoing(vertex).count()
    }

    /// Returns all edges whose destination is `destination`, ordered by
    /// source.
    fn ingoing(&self, destination: &Self::Vertex) -> Self::Edges<'_>;

    /// Returns the number of edges entering `vertex`.
    fn ingoing_degree(&self, vertex: &Self::Vertex) -> usize {
        self.ingoing(vertex).count()
    }

    /// Either `0` or `1`: a pair of vertices has at most one edge.
    fn loop_degree(&self, vertex: &Self::Vertex) -> usize {
        usize::from(self.is_connected(vertex, vertex))
    }

    /// Returns true when there is a single-step edge `from -> to`.
    ///
    /// This does not perform a reachability query through longer paths.
    fn is_connected(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool {
        self.weight(from, to).is_some()
    }
}
