use std::{cmp::Ordering, fmt, slice};

use crate::graphs::{
    directed::Directed,
    edges::{Edges, InsertEdge, ReadEdges, RemoveEdge},
    error::GraphError,
    mark::Mark,
    matrix::{Weight, WeightMatrix, NULL_EDGE},
    vertices::Vertices,
};

/// Capacity used by [`WeightedDigraph::default`].
pub const DEFAULT_CAPACITY: usize = 50;

/// A vertex payload together with its traversal mark.
#[derive(Debug, Clone)]
pub(crate) struct Vertex<T> {
    pub(crate) payload: T,
    pub(crate) mark: Mark,
}

/// A fixed-capacity directed graph with weighted edges stored in an
/// adjacency matrix.
///
/// Vertices are identified by their payload, compared with [`Ord`]. A
/// graph holds at most one vertex per payload and at most one edge per
/// ordered pair of vertices.
///
/// Internally the `i`-th inserted vertex owns row and column `i` of the
/// matrix. Deleting a vertex shifts every later vertex, and its row and
/// column, down by one, so positions are never exposed: every operation
/// looks vertices up by payload.
///
/// Mutations come in two forms. The `try_*` form reports why it left the
/// graph unchanged. The plain form ignores absent vertices, duplicates and
/// a full graph silently, logging the reason at debug level.
#[derive(Debug, Clone)]
pub struct WeightedDigraph<T> {
    pub(crate) vertices: Vec<Vertex<T>>,
    pub(crate) edges: WeightMatrix,
}

impl<T> WeightedDigraph<T> {
    /// Creates an empty graph that holds up to `capacity` vertices.
    ///
    /// The vertex storage and the `capacity x capacity` matrix are
    /// allocated up front and never grow.
    ///
    /// # Panics
    ///
    /// Panics if `capacity^2` overflows `usize`.
    pub fn new(capacity: usize) -> Result<Self, GraphError> {
        if capacity == 0 {
            return Err(GraphError::ZeroCapacity);
        }

        Ok(Self {
            vertices: Vec::with_capacity(capacity),
            edges: WeightMatrix::new(capacity),
        })
    }

    /// Maximum number of vertices.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.edges.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.vertices.len() == self.capacity()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, recounted from the matrix on every call.
    pub fn edge_count(&self) -> usize {
        self.edges.edge_count(self.vertices.len())
    }
}

impl<T> Default for WeightedDigraph<T> {
    /// Empty graph with [`DEFAULT_CAPACITY`].
    fn default() -> Self {
        Self {
            vertices: Vec::with_capacity(DEFAULT_CAPACITY),
            edges: WeightMatrix::new(DEFAULT_CAPACITY),
        }
    }
}

impl<T: Ord> WeightedDigraph<T> {
    /// Position of the vertex carrying `payload`.
    pub(crate) fn index_of(&self, payload: &T) -> Option<usize> {
        self.vertices
            .iter()
            .position(|vertex| vertex.payload.cmp(payload) == Ordering::Equal)
    }

    fn endpoints(&self, from: &T, to: &T) -> Result<(usize, usize), GraphError> {
        let from = self.index_of(from).ok_or(GraphError::MissingSource)?;
        let to = self.index_of(to).ok_or(GraphError::MissingTarget)?;
        Ok((from, to))
    }

    pub fn vertex_exists(&self, payload: &T) -> bool {
        self.index_of(payload).is_some()
    }

    /// Adds a vertex with mark [`Mark::Unvisited`].
    pub fn try_add_vertex(&mut self, payload: T) -> Result<(), GraphError> {
        if self.is_full() {
            return Err(GraphError::Full {
                capacity: self.capacity(),
            });
        }
        if self.vertex_exists(&payload) {
            return Err(GraphError::DuplicateVertex);
        }

        self.vertices.push(Vertex {
            payload,
            mark: Mark::Unvisited,
        });
        tracing::trace!(vertices = self.vertices.len(), "vertex added");
        Ok(())
    }

    /// Adds a vertex, doing nothing when the graph is full or already
    /// holds `payload`.
    pub fn add_vertex(&mut self, payload: T) {
        if let Err(error) = self.try_add_vertex(payload) {
            tracing::debug!(%error, "add_vertex ignored");
        }
    }

    /// Sets the weight of `from -> to`, returning the weight it replaced.
    ///
    /// [`NULL_EDGE`] is rejected since it would read back as "no edge".
    pub fn try_add_edge(
        &mut self,
        from: &T,
        to: &T,
        weight: Weight,
    ) -> Result<Option<Weight>, GraphError> {
        if weight == NULL_EDGE {
            return Err(GraphError::ReservedWeight(weight));
        }

        let (from, to) = self.endpoints(from, to)?;
        let previous = self.edges.set(from, to, weight);
        tracing::trace!(weight, "edge set");
        Ok((previous != NULL_EDGE).then_some(previous))
    }

    /// Sets the weight of `from -> to`; the last write wins. Does nothing
    /// when either endpoint is absent.
    pub fn add_edge(&mut self, from: &T, to: &T, weight: Weight) {
        if let Err(error) = self.try_add_edge(from, to, weight) {
            tracing::debug!(%error, "add_edge ignored");
        }
    }

    /// Removes the vertex carrying `payload` and every edge touching it,
    /// returning the stored payload.
    pub fn try_delete_vertex(&mut self, payload: &T) -> Result<T, GraphError> {
        let index = self.index_of(payload).ok_or(GraphError::MissingVertex)?;

        self.edges.remove(index, self.vertices.len());
        let removed = self.vertices.remove(index);
        tracing::trace!(vertices = self.vertices.len(), "vertex deleted");
        Ok(removed.payload)
    }

    pub fn delete_vertex(&mut self, payload: &T) {
        if let Err(error) = self.try_delete_vertex(payload) {
            tracing::debug!(%error, "delete_vertex ignored");
        }
    }

    /// Removes `from -> to`, returning the weight it carried.
    pub fn try_delete_edge(&mut self, from: &T, to: &T) -> Result<Weight, GraphError> {
        let (from, to) = self.endpoints(from, to)?;
        let weight = self.edges.clear(from, to).ok_or(GraphError::MissingEdge)?;
        tracing::trace!(weight, "edge deleted");
        Ok(weight)
    }

    pub fn delete_edge(&mut self, from: &T, to: &T) {
        if let Err(error) = self.try_delete_edge(from, to) {
            tracing::debug!(%error, "delete_edge ignored");
        }
    }

    /// Weight of `from -> to`, or `None` when there is no such edge or
    /// either endpoint is absent.
    pub fn weight(&self, from: &T, to: &T) -> Option<Weight> {
        let (from, to) = self.endpoints(from, to).ok()?;
        self.edges.weight(from, to)
    }

    /// Weight of `from -> to`, or [`NULL_EDGE`] when there is no such edge
    /// or either endpoint is absent. The two cases are indistinguishable;
    /// use [`edge_exists`](Self::edge_exists) or [`weight`](Self::weight)
    /// to tell them apart.
    pub fn get_weight(&self, from: &T, to: &T) -> Weight {
        self.weight(from, to).unwrap_or(NULL_EDGE)
    }

    pub fn edge_exists(&self, from: &T, to: &T) -> bool {
        self.weight(from, to).is_some()
    }
}

impl<T: fmt::Display> fmt::Display for WeightedDigraph<T> {
    /// Diagnostic dump: vertex count, payloads in insertion order, then
    /// the matrix in use with absent edges shown as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.vertices.len();

        writeln!(f, "There are {len} vertices in this Graph")?;
        for vertex in &self.vertices {
            write!(f, "{} ", vertex.payload)?;
        }
        writeln!(f)?;

        writeln!(f, "Edges are:")?;
        write!(f, "\t")?;
        for to in 0..len {
            write!(f, "{to}\t")?;
        }
        writeln!(f)?;

        for from in 0..len {
            write!(f, "{from}\t")?;
            for &weight in self.edges.row(from, len) {
                match weight {
                    NULL_EDGE => write!(f, "0\t")?,
                    weight => write!(f, "{weight}\t")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Ord> Vertices for WeightedDigraph<T> {
    type Vertex = T;

    type Vertices<'a>
        = Payloads<'a, T>
    where
        Self: 'a;

    /// Payloads in insertion order.
    fn vertices(&self) -> Payloads<'_, T> {
        Payloads {
            inner: self.vertices.iter(),
        }
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, vertex: &T) -> bool {
        self.vertex_exists(vertex)
    }
}

impl<T: Ord> Edges for WeightedDigraph<T> {
    type Vertex = T;

    type Weight = Weight;
}

impl<T: Ord> ReadEdges for WeightedDigraph<T> {
    type Edges<'a>
        = WeightedEdges<'a, T>
    where
        Self: 'a;

    /// Edges in row-major order: by source, then by destination.
    fn edges(&self) -> WeightedEdges<'_, T> {
        WeightedEdges::new(self, EdgesKind::All { from: 0, to: 0 })
    }

    fn edge_count(&self) -> usize {
        self.edges.edge_count(self.vertices.len())
    }

    fn weight(&self, from: &T, to: &T) -> Option<Weight> {
        WeightedDigraph::weight(self, from, to)
    }
}

impl<T: Ord> InsertEdge for WeightedDigraph<T> {
    fn insert_edge(
        &mut self,
        from: &T,
        to: &T,
        weight: Weight,
    ) -> Result<Option<Weight>, GraphError> {
        self.try_add_edge(from, to, weight)
    }
}

impl<T: Ord> RemoveEdge for WeightedDigraph<T> {
    fn remove_edge(&mut self, from: &T, to: &T) -> Result<Weight, GraphError> {
        self.try_delete_edge(from, to)
    }
}

impl<T: Ord> Directed for WeightedDigraph<T> {
    fn outgoing(&self, source: &T) -> WeightedEdges<'_, T> {
        let kind = match self.index_of(source) {
            Some(from) => EdgesKind::Outgoing { from, to: 0 },
            None => EdgesKind::Empty,
        };
        WeightedEdges::new(self, kind)
    }

    fn ingoing(&self, destination: &T) -> WeightedEdges<'_, T> {
        let kind = match self.index_of(destination) {
            Some(to) => EdgesKind::Ingoing { from: 0, to },
            None => EdgesKind::Empty,
        };
        WeightedEdges::new(self, kind)
    }
}

/// Iterator over vertex payloads of a [`WeightedDigraph`].
pub struct Payloads<'a, T> {
    inner: slice::Iter<'a, Vertex<T>>,
}

impl<'a, T> Iterator for Payloads<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|vertex| &vertex.payload)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over edges of a [`WeightedDigraph`].
///
/// Yields `(source, weight, destination)` triples. Which cells are
/// scanned depends on the constructor used by the graph.
pub struct WeightedEdges<'a, T> {
    graph: &'a WeightedDigraph<T>,
    kind: EdgesKind,
}

enum EdgesKind {
    /// Every cell of the block in use, row by row.
    All { from: usize, to: usize },
    /// Row `from`, column by column.
    Outgoing { from: usize, to: usize },
    /// Column `to`, row by row.
    Ingoing { from: usize, to: usize },
    Empty,
}

impl<'a, T> WeightedEdges<'a, T> {
    fn new(graph: &'a WeightedDigraph<T>, kind: EdgesKind) -> Self {
        Self { graph, kind }
    }

    fn triple(&self, from: usize, weight: Weight, to: usize) -> (&'a T, Weight, &'a T) {
        let graph = self.graph;
        (
            &graph.vertices[from].payload,
            weight,
            &graph.vertices[to].payload,
        )
    }
}

impl<'a, T> Iterator for WeightedEdges<'a, T> {
    type Item = (&'a T, Weight, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let len = graph.vertices.len();

        let found = match &mut self.kind {
            EdgesKind::All { from, to } => loop {
                if *from >= len {
                    break None;
                }
                if *to >= len {
                    *from += 1;
                    *to = 0;
                    continue;
                }
                let cell = (*from, *to);
                *to += 1;
                if let Some(weight) = graph.edges.weight(cell.0, cell.1) {
                    break Some((cell.0, weight, cell.1));
                }
            },

            EdgesKind::Outgoing { from, to } => loop {
                if *to >= len {
                    break None;
                }
                let cell = (*from, *to);
                *to += 1;
                if let Some(weight) = graph.edges.weight(cell.0, cell.1) {
                    break Some((cell.0, weight, cell.1));
                }
            },

            EdgesKind::Ingoing { from, to } => loop {
                if *from >= len {
                    break None;
                }
                let cell = (*from, *to);
                *from += 1;
                if let Some(weight) = graph.edges.weight(cell.0, cell.1) {
                    break Some((cell.0, weight, cell.1));
                }
            },

            EdgesKind::Empty => None,
        };

        found.map(|(from, weight, to)| self.triple(from, weight, to))
    }
}
