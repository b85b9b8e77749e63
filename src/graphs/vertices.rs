/// Read access to the vertex set of a graph whose vertices are addressed
/// by payload.
pub trait Vertices {
    /// Payload identifying a vertex.
    type Vertex;

    /// Iterator over all vertex payloads.
    ///
    /// The order is stable for a given graph instance unless the graph is
    /// mutated.
    type Vertices<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a,
        Self::Vertex: 'a;

    /// Returns an iterator over all vertex payloads.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Returns true when a vertex with this payload is present.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;
}
