pub mod graphs;

pub use graphs::{
    digraph::{WeightedDigraph, DEFAULT_CAPACITY},
    error::GraphError,
    mark::Mark,
    matrix::{Weight, NULL_EDGE},
};
