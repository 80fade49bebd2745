//! A directed weighted graph stored as a dense square weight matrix.
//!
//! The matrix lives in a single contiguous `Vec<W>` in row-major order, so cell
//! `(u, v)` sits at `u * n + v` and a whole row of out-edges is one slice.
//! Weight `0` marks an absent edge; any positive weight is an edge.
//!
//! The graph is immutable once built: it exposes queries and algorithms but no
//! edge mutation. Algorithms allocate their own scratch state, so a shared
//! `&MatrixGraph` can be queried concurrently without synchronization.

use core::fmt;
use std::io;

use crate::graph::{GraphError, Result, Weight};

mod shortest_path;
mod topo;


/// A directed graph over vertices `0..n` with an owned `n x n` weight matrix.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` / `from_rows` | \(O(n^2)\) | Validates shape; `new` moves the buffer in |
/// | `weight` / `has_edge` | \(O(1)\) | Direct row-major index |
/// | `successors` / `out_degree` | \(O(n)\) | Scans one row |
/// | `in_degree` | \(O(n)\) | Scans one column |
/// | `dijkstra` | \(O(n^2 \log n)\) | Binary heap frontier, dense relaxation |
/// | `dijkstra_all` | \(O(n^3 \log n)\) | One independent `dijkstra` per vertex |
/// | `topological_sort_dfs` | \(O(n^2)\) | Iterative DFS over rows |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph<W = u32> {
    weights: Vec<W>,
    n: usize,
}

impl<W: Weight> MatrixGraph<W> {
    /// Takes ownership of a row-major `n x n` weight buffer.
    ///
    /// # Errors
    /// Returns [`GraphError::DimensionMismatch`] if `weights.len() != n * n`.
    pub fn new(weights: Vec<W>, n: usize) -> Result<Self> {
        let expected = n.checked_mul(n);
        if expected != Some(weights.len()) {
            return Err(GraphError::DimensionMismatch {
                expected: expected.unwrap_or(usize::MAX),
                actual: weights.len(),
            });
        }
        Ok(Self::from_square(weights, n))
    }

    /// Builds a graph from one row of weights per vertex.
    ///
    /// The vertex count is the number of rows; every row must have exactly
    /// that many cells.
    ///
    /// # Errors
    /// Returns [`GraphError::RaggedRow`] for the first row of the wrong length.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let n = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GraphError::RaggedRow {
                row,
                expected: n,
                actual: cells.len(),
            });
        }
        let weights = rows.into_iter().flatten().collect();
        Ok(Self::from_square(weights, n))
    }

    fn from_square(weights: Vec<W>, n: usize) -> Self {
        debug_assert_eq!(weights.len(), n * n, "weight buffer is not {n} x {n}");
        let graph = Self { weights, n };
        trace_event!(debug, n, edges = graph.edge_count(), "built matrix graph");
        graph
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The distance reported for unreachable vertices, `W::max_value()`.
    #[inline]
    pub fn infinity() -> W {
        W::max_value()
    }

    /// Returns the weight of the edge `from -> to`.
    ///
    /// `None` if there is no such edge or either index is out of bounds.
    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> Option<W> {
        if to >= self.n {
            return None;
        }
        self.row(from).map(|row| row[to]).filter(|w| !w.is_zero())
    }

    /// Checks if an edge exists from `from` to `to`.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.weight(from, to).is_some()
    }

    /// Returns the raw matrix row for `vertex`, zeros included.
    #[inline]
    pub fn row(&self, vertex: usize) -> Option<&[W]> {
        if vertex < self.n {
            let start = vertex * self.n;
            Some(&self.weights[start..start + self.n])
        } else {
            None
        }
    }

    /// Returns `(target, weight)` for every edge leaving `vertex`.
    ///
    /// Yields nothing for an out-of-bounds vertex.
    pub fn successors(&self, vertex: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        self.row(vertex)
            .unwrap_or(&[])
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
    }

    /// Returns the number of edges leaving `vertex`.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.successors(vertex).count()
    }

    /// Returns the number of edges entering `vertex`.
    pub fn in_degree(&self, vertex: usize) -> usize {
        if vertex >= self.n {
            return 0;
        }
        (0..self.n)
            .filter(|&u| !self.weights[u * self.n + vertex].is_zero())
            .count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|w| !w.is_zero()).count()
    }

    /// Consumes the graph and hands the row-major buffer back to the caller.
    pub fn into_weights(self) -> Vec<W> {
        self.weights
    }

    /// Writes the matrix row by row, each cell followed by a space.
    ///
    /// # Errors
    /// Propagates any error from `out`.
    pub fn write_to<O: io::Write>(&self, out: &mut O) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Dumps the matrix to stdout. A debugging aid; see [`MatrixGraph::write_to`].
    pub fn print(&self) {
        print!("{self}");
    }
}

impl<W: Weight> fmt::Display for MatrixGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in 0..self.n {
            for w in &self.weights[u * self.n..(u + 1) * self.n] {
                write!(f, "{w} ")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
