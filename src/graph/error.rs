//! Graph error type.

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// The error type for graph construction and ordering failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The graph contains a cycle, so no topological order exists.
    Cycle,
    /// A flat weight buffer does not hold exactly `n * n` cells.
    DimensionMismatch {
        /// Number of cells a square matrix of the requested size needs.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A row of a nested matrix does not have one cell per vertex.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of vertices (the required row length).
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Cycle => f.write_str("graph contains a cycle; topological order is impossible"),
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "weight matrix has {actual} cells, expected {expected}")
            }
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "weight matrix row {row} has {actual} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GraphError {}
