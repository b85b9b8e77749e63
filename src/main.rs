use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use weighted_digraph::{WeightedDigraph, DEFAULT_CAPACITY};

/// Builds a small city graph, prints it, traverses it, deletes a vertex
/// and prints it again.
///
/// Usage: `digraph-demo [capacity]`. Log filter comes from `RUST_LOG`.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let capacity = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid capacity {arg:?}"))?,
        None => DEFAULT_CAPACITY,
    };

    let mut graph = city_graph(capacity)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write!(out, "{graph}")?;
    writeln!(
        out,
        "{} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    )?;

    write!(out, "Breadth-first from Dallas: ")?;
    graph.write_breadth_first_traversal(&"Dallas", &mut out)?;

    match graph.try_delete_vertex(&"Chicago") {
        Ok(_) => tracing::info!(vertices = graph.vertex_count(), "Chicago removed"),
        Err(error) => tracing::warn!(%error, "Chicago not removed"),
    }

    write!(out, "{graph}")?;
    write!(out, "Breadth-first from Dallas: ")?;
    graph.write_breadth_first_traversal(&"Dallas", &mut out)?;

    Ok(())
}

/// Cities that do not fit in `capacity` are skipped, along with their
/// routes.
fn city_graph(capacity: usize) -> Result<WeightedDigraph<&'static str>> {
    let mut graph = WeightedDigraph::new(capacity).context("cannot create graph")?;
    tracing::info!(capacity, "graph created");

    for city in ["Atlanta", "Austin", "Chicago", "Dallas", "Denver", "Houston"] {
        if graph.is_full() {
            tracing::warn!(city, capacity, "graph full, city skipped");
        }
        graph.add_vertex(city);
    }

    let routes = [
        ("Atlanta", "Houston", 800),
        ("Atlanta", "Washington", 600),
        ("Austin", "Dallas", 200),
        ("Austin", "Houston", 160),
        ("Chicago", "Denver", 1000),
        ("Dallas", "Austin", 200),
        ("Dallas", "Chicago", 900),
        ("Dallas", "Denver", 780),
        ("Denver", "Atlanta", 1400),
        ("Denver", "Chicago", 1000),
        ("Houston", "Atlanta", 800),
    ];
    for (from, to, miles) in routes {
        // Routes to cities outside the graph are skipped.
        graph.add_edge(&from, &to, miles);
    }

    Ok(graph)
}
