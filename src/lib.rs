//! # `matgraph` - Dense Weight-Matrix Graphs
//!
//! A small directed weighted graph built on a square matrix of unsigned edge
//! weights, with the two classical queries such a matrix is usually built for:
//! shortest paths (Dijkstra, single-source and all-pairs) and a topological
//! ordering that reports cycles as a recoverable error.
//!
//! ## Model
//!
//! - Vertices are the indices `0..n`; there is no separate vertex type.
//! - Cell `(u, v)` holds the weight of the edge `u -> v`. A weight of `0` means
//!   "no edge", so zero-cost edges cannot be expressed.
//! - The matrix is handed over at construction and never mutated afterwards.
//!   A `MatrixGraph` can therefore be shared freely behind `&` across threads.
//!
//! ## Cargo features
//!
//! - `tracing`: emit `tracing` events for construction and algorithm outcomes.
//!
//! ## Example
//!
//! ```rust
//! use matgraph::{GraphError, MatrixGraph};
//!
//! let graph = MatrixGraph::<u32>::from_rows(vec![
//!     vec![0, 1, 5, 0],
//!     vec![0, 0, 2, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//! ])?;
//!
//! assert_eq!(graph.dijkstra(0), vec![0, 1, 3, u32::MAX]);
//! assert_eq!(graph.topological_sort_dfs()?.len(), 4);
//! # Ok::<(), GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod graph;

pub use graph::{GraphError, MatrixGraph, Result, Weight};

const _: () = {
    use core::mem;

    // The graph is a thin owner of its buffer: a `Vec` plus the vertex count.
    assert!(
        mem::size_of::<MatrixGraph<u32>>() == mem::size_of::<Vec<u32>>() + mem::size_of::<usize>()
    );
    assert!(mem::size_of::<GraphError>() <= mem::size_of::<usize>() * 4);
};
