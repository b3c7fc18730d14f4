//! polynesia — knowledge sharing and resource distribution across the
//! Polynesian Triangle.
//!
//! Plans and executes one knowledge-sharing trip, then plans the delivery of
//! one resource from its producing island to every other island.
//!
//! ```text
//! cargo run -p polynesia                                  # built-in seed graph
//! cargo run -p polynesia -- demos/polynesia/config.example.json
//! RUST_LOG=debug cargo run -p polynesia                   # per-candidate scoring
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pt_core::PlanConfig;
use pt_network::{DijkstraRouter, IslandGraph, load_graph_csv, polynesian_triangle};
use pt_planner::{ResourceDistributor, TripPlanner, total_trips};

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config() -> Result<PlanConfig> {
    let Some(path) = std::env::args_os().nth(1) else {
        return Ok(PlanConfig::default());
    };
    let path = Path::new(&path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn build_graph(config: &PlanConfig) -> Result<IslandGraph> {
    match (&config.islands_csv, &config.routes_csv) {
        (Some(islands), Some(routes)) => load_graph_csv(islands, routes)
            .with_context(|| format!("loading {} / {}", islands.display(), routes.display())),
        _ => Ok(polynesian_triangle()?),
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = load_config()?;
    config.validate()?;
    let mut graph = build_graph(&config)?;
    info!(
        islands = graph.island_count(),
        routes = graph.route_count(),
        "=== Polynesian Triangle ==="
    );

    // ── Knowledge sharing ─────────────────────────────────────────────────
    let mut leader = TripPlanner::from_name(&graph, &config.home_island, DijkstraRouter)?
        .with_weights(config.weights.clone());

    let trip = leader.plan(&graph, config.max_trip_days);
    info!(
        max_trip_days = config.max_trip_days,
        trip = ?trip.names(&graph),
        "planned trip"
    );

    let days = leader.execute(&mut graph, &trip)?;
    info!(days, clock = %leader.clock(), "trip complete");

    let mut reported = Vec::with_capacity(trip.len());
    for &id in &trip.islands {
        if reported.contains(&id) {
            continue;
        }
        reported.push(id);
        let island = graph.island(id);
        info!(
            island = %island.name,
            last_visited = ?island.last_visited.map(|t| t.0),
            visits = island.visit_count,
            "visit record"
        );
    }

    // ── Resource distribution ─────────────────────────────────────────────
    let distributor = ResourceDistributor::from_name(
        &graph,
        config.resource.as_str(),
        &config.origin_island,
        config.total_units,
        DijkstraRouter,
    )?;
    let deliveries = distributor.distribute(&graph, config.canoe_capacity)?;

    for d in &deliveries {
        info!(
            island = graph.name(d.island),
            trips = d.trips_needed,
            days = d.route.total_days,
            route = ?d.route.names(&graph),
            "delivery"
        );
    }
    info!(
        resource = distributor.resource(),
        deliveries = deliveries.len(),
        total_trips = total_trips(&deliveries),
        "distribution complete"
    );

    Ok(())
}
