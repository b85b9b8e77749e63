pub mod bfs;
pub mod digraph;
pub mod directed;
pub mod edges;
pub mod error;
pub mod mark;
pub mod matrix;
pub mod vertices;
