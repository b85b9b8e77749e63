use thiserror::Error;

use crate::graphs::matrix::Weight;

/// Reasons a graph operation left the graph unchanged.
///
/// The `try_*` operations on [`WeightedDigraph`](crate::WeightedDigraph)
/// return these. Their plain counterparts swallow them and behave as
/// silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph capacity must be at least one vertex")]
    ZeroCapacity,
    #[error("graph is full ({capacity} vertices)")]
    Full { capacity: usize },
    #[error("vertex is already present")]
    DuplicateVertex,
    #[error("vertex is not present")]
    MissingVertex,
    #[error("source vertex is not present")]
    MissingSource,
    #[error("target vertex is not present")]
    MissingTarget,
    #[error("no edge between the given vertices")]
    MissingEdge,
    #[error("weight {0} is reserved to mark absent edges")]
    ReservedWeight(Weight),
}
