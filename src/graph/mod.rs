//! Dense directed graphs backed by a square weight matrix.
//!
//! - `matrix_graph`: the owned matrix and its shortest-path and ordering algorithms
//! - `weight`: the unsigned integer domain edge weights are drawn from
//! - `error`: failures surfaced by construction and topological ordering

pub mod error;
pub mod matrix_graph;
pub mod weight;

pub use error::{GraphError, Result};
pub use matrix_graph::MatrixGraph;
pub use weight::Weight;
