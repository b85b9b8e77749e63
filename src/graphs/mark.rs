/// Traversal state of a single vertex.
///
/// A breadth-first traversal moves every reachable vertex through
/// `Unvisited -> Queued -> Visited` exactly once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Unvisited,
    /// Discovered and waiting in the frontier queue.
    Queued,
    Visited,
}

impl Mark {
    #[inline]
    pub fn is_unvisited(self) -> bool {
        self == Mark::Unvisited
    }

    #[inline]
    pub fn is_visited(self) -> bool {
        self == Mark::Visited
    }
}
