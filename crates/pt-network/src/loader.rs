//! CSV dataset loader.
//!
//! # CSV format
//!
//! Two files: one row per island, one row per directed route.
//!
//! ```csv
//! name,population,resources
//! Hawaii,1400000,shells=100;sweet_potato=100;kava=30
//! Tahiti,275000,kava=150
//! Nowhere,12,
//! ```
//!
//! ```csv
//! from,to,days
//! Hawaii,Tahiti,15
//! Tahiti,Hawaii,18
//! ```
//!
//! **`resources`** is a `;`-separated list of `name=quantity` pairs and may be
//! empty.  Islands are added in file order, which fixes their ids and the
//! tie-breaking order of the planners.  Routes may only name islands from the
//! island file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::graph::IslandGraph;
use crate::{NetworkError, NetworkResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct IslandRecord {
    name:       String,
    population: u64,
    #[serde(default)]
    resources:  String,
}

#[derive(Deserialize)]
struct RouteRecord {
    from: String,
    to:   String,
    days: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an [`IslandGraph`] from an island CSV file and a route CSV file.
pub fn load_graph_csv(islands: &Path, routes: &Path) -> NetworkResult<IslandGraph> {
    let islands = File::open(islands)?;
    let routes = File::open(routes)?;
    load_graph_reader(islands, routes)
}

/// Like [`load_graph_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor` or a byte slice) or for
/// datasets embedded in the binary.
pub fn load_graph_reader<I: Read, R: Read>(islands: I, routes: R) -> NetworkResult<IslandGraph> {
    let mut graph = IslandGraph::new();

    // ── Islands ───────────────────────────────────────────────────────────
    let mut reader = csv::Reader::from_reader(islands);
    for result in reader.deserialize::<IslandRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        let resources = parse_resources(&row.resources)?;
        graph.add_island(row.name.trim(), row.population, resources);
    }

    // ── Routes ────────────────────────────────────────────────────────────
    let mut reader = csv::Reader::from_reader(routes);
    for result in reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        graph.add_route(row.from.trim(), row.to.trim(), row.days)?;
    }

    info!(
        islands = graph.island_count(),
        routes = graph.route_count(),
        "loaded island graph"
    );
    Ok(graph)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_resources(s: &str) -> NetworkResult<Vec<(String, u32)>> {
    s.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, qty) = pair.split_once('=').ok_or_else(|| {
                NetworkError::Parse(format!(
                    "invalid resource {pair:?}: expected \"name=quantity\""
                ))
            })?;
            let qty = qty.trim().parse::<u32>().map_err(|_| {
                NetworkError::Parse(format!("invalid quantity for resource {:?}", name.trim()))
            })?;
            Ok((name.trim().to_string(), qty))
        })
        .collect()
}
