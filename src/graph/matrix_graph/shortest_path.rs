//! Dijkstra shortest paths over the weight matrix.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use num_traits::Saturating;

use super::MatrixGraph;
use crate::graph::Weight;

impl<W: Weight> MatrixGraph<W> {
    /// Computes the shortest distance from `start` to every vertex.
    ///
    /// Entry `v` of the result is the minimum total weight over all paths
    /// `start -> v`, `0` for `start` itself, and [`MatrixGraph::infinity`] when
    /// `v` is unreachable. Zero cells are not edges, so they never shorten a
    /// path.
    ///
    /// An out-of-bounds `start` is not an error: every vertex is reported
    /// unreachable. Path sums saturate at `W::max_value()`, so a path too long
    /// to represent is indistinguishable from no path.
    pub fn dijkstra(&self, start: usize) -> Vec<W> {
        let n = self.n;
        let mut dist = vec![Self::infinity(); n];
        if start >= n {
            trace_event!(debug, start, n, "dijkstra start vertex out of bounds");
            return dist;
        }
        trace_event!(trace, start, n, "dijkstra");

        dist[start] = W::zero();
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((W::zero(), start)));

        while let Some(Reverse((d, u))) = frontier.pop() {
            // A shorter path to `u` was settled after this entry was queued.
            if d > dist[u] {
                continue;
            }

            for (v, weight) in self.successors(u) {
                let candidate = Saturating::saturating_add(d, weight);
                if candidate < dist[v] {
                    dist[v] = candidate;
                    frontier.push(Reverse((candidate, v)));
                }
            }
        }

        dist
    }

    /// Runs [`MatrixGraph::dijkstra`] from every vertex.
    ///
    /// Row `i` of the result equals `self.dijkstra(i)`.
    pub fn dijkstra_all(&self) -> Vec<Vec<W>> {
        (0..self.n).map(|start| self.dijkstra(start)).collect()
    }
}
