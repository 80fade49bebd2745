//! Topological ordering by iterative depth-first search.

use super::MatrixGraph;
use crate::graph::{GraphError, Result, Weight};

impl<W: Weight> MatrixGraph<W> {
    /// Orders the vertices so that every edge `u -> v` has `u` before `v`.
    ///
    /// Each unvisited root seeds an explicit frontier stack. A vertex found on
    /// top of the stack for the first time is marked visited and its unvisited
    /// successors are pushed above it; found again, it is popped and appended
    /// to the post-order once all of its successors are there. The reversed
    /// post-order is the topological order.
    ///
    /// When several orders are valid, which one is returned is unspecified.
    ///
    /// # Errors
    /// Returns [`GraphError::Cycle`] if the graph has a cycle (self-loops
    /// included). A vertex that can reach a cycle never has all of its
    /// successors placed, so the post-order comes up short of `n`.
    pub fn topological_sort_dfs(&self) -> Result<Vec<usize>> {
        let n = self.n;
        let mut visited = vec![false; n];
        let mut placed = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut frontier = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            frontier.push(root);

            while let Some(&vertex) = frontier.last() {
                if visited[vertex] {
                    frontier.pop();
                    if !placed[vertex] && self.successors(vertex).all(|(v, _)| placed[v]) {
                        placed[vertex] = true;
                        order.push(vertex);
                    }
                } else {
                    visited[vertex] = true;
                    frontier.extend(
                        self.successors(vertex)
                            .map(|(v, _)| v)
                            .filter(|&v| !visited[v]),
                    );
                }
            }
        }

        if order.len() != n {
            trace_event!(
                debug,
                placed = order.len(),
                n,
                "cycle detected during topological sort"
            );
            return Err(GraphError::Cycle);
        }

        order.reverse();
        debug_assert!(
            self.is_topological_order(&order),
            "topological order has a backward edge: {order:?}"
        );
        trace_event!(trace, n, "topological sort complete");
        Ok(order)
    }

    /// Returns `true` if the graph has no cycles.
    pub fn is_acyclic(&self) -> bool {
        self.topological_sort_dfs().is_ok()
    }

    /// Checks that `order` is a permutation of the vertices with every edge
    /// pointing forward.
    pub fn is_topological_order(&self, order: &[usize]) -> bool {
        let n = self.n;
        if order.len() != n {
            return false;
        }

        let mut position = vec![usize::MAX; n];
        for (pos, &vertex) in order.iter().enumerate() {
            if vertex >= n || position[vertex] != usize::MAX {
                return false;
            }
            position[vertex] = pos;
        }

        (0..n).all(|u| self.successors(u).all(|(v, _)| position[u] < position[v]))
    }
}
