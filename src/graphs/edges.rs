use crate::graphs::error::GraphError;

/// Vertex and weight types shared by the edge traits.
///
/// Edges are addressed by their endpoints: a graph implementing these
/// traits holds at most one directed edge per ordered pair of vertices.
pub trait Edges {
    /// Payload identifying a vertex.
    type Vertex;

    /// Value carried by an edge.
    type Weight: Copy + Eq;
}

/// A graph that supports read-only access to its weighted edges.
pub trait ReadEdges: Edges {
    /// Iterator over edges as `(source, weight, destination)` triples.
    ///
    /// The order is stable for a given graph instance unless the graph is
    /// mutated.
    type Edges<'a>: Iterator<Item = (&'a Self::Vertex, Self::Weight, &'a Self::Vertex)>
    where
        Self: 'a,
        Self::Vertex: 'a;

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Weight of the edge `from -> to`.
    ///
    /// Returns `None` when either endpoint is absent or the two are not
    /// connected.
    fn weight(&self, from: &Self::Vertex, to: &Self::Vertex) -> Option<Self::Weight>;
}

/// A graph that supports insertion of weighted edges.
pub trait InsertEdge: Edges {
    /// Inserts `from -> to` or overwrites its weight.
    ///
    /// Returns the weight the edge carried before, or `None` when the edge
    /// is new. Fails when either endpoint is absent.
    fn insert_edge(
        &mut self,
        from: &Self::Vertex,
        to: &Self::Vertex,
        weight: Self::Weight,
    ) -> Result<Option<Self::Weight>, GraphError>;
}

/// A graph that supports removal of weighted edges.
pub trait RemoveEdge: Edges {
    /// Removes `from -> to` and returns the weight it carried.
    fn remove_edge(
        &mut self,
        from: &Self::Vertex,
        to: &Self::Vertex,
    ) -> Result<Self::Weight, GraphError>;
}

/// A graph that supports querying, inserting and removing edges.
pub trait EdgesMut: ReadEdges + InsertEdge + RemoveEdge {}

impl<T> EdgesMut for T where T: ReadEdges + InsertEdge + RemoveEdge {}
