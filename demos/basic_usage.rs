//! Basic MatrixGraph usage example

use anyhow::Context;
use matgraph::{GraphError, MatrixGraph};

fn main() -> anyhow::Result<()> {
    println!("MatrixGraph Basic Usage Example");
    println!("===============================");

    // 0 -> 1 (1), 1 -> 2 (2), 0 -> 2 (5); 3 is isolated
    let graph = MatrixGraph::<u32>::from_rows(vec![
        vec![0, 1, 5, 0],
        vec![0, 0, 2, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ])
    .context("building weight matrix")?;

    println!("Weight matrix ({} vertices):", graph.size());
    graph.print();

    println!("Distances from 0:");
    for (v, d) in graph.dijkstra(0).into_iter().enumerate() {
        if d == MatrixGraph::<u32>::infinity() {
            println!("  0 -> {v}: unreachable");
        } else {
            println!("  0 -> {v}: {d}");
        }
    }

    println!("All-pairs distances:");
    for row in graph.dijkstra_all() {
        println!("  {row:?}");
    }

    let order = graph.topological_sort_dfs()?;
    println!("Topological order: {order:?}");

    // Closing the loop 2 -> 0 makes ordering impossible.
    let cyclic = MatrixGraph::<u32>::from_rows(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]])?;
    match cyclic.topological_sort_dfs() {
        Err(GraphError::Cycle) => println!("Cycle detected: {}", GraphError::Cycle),
        other => anyhow::bail!("expected a cycle, got {other:?}"),
    }

    Ok(())
}
