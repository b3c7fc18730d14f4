//! The Polynesian Triangle reference dataset.
//!
//! Five islands and twelve asymmetric canoe routes (travel times in days).
//! Tests and the `polynesia` demo build on this graph, so its values are
//! fixed.

use crate::graph::IslandGraph;
use crate::NetworkResult;

pub const NEW_ZEALAND:   &str = "New_Zealand";
pub const HAWAII:        &str = "Hawaii";
pub const TAHITI:        &str = "Tahiti";
pub const SAMOA:         &str = "Samoa";
pub const EASTER_ISLAND: &str = "Easter_Island";

/// `(name, population, [(resource, quantity)])` in insertion order.
pub const ISLANDS: [(&str, u64, [(&str, u32); 3]); 5] = [
    (NEW_ZEALAND,   5_000_000, [("shells", 20),  ("sweet_potato", 90),  ("kava", 40)]),
    (HAWAII,        1_400_000, [("shells", 100), ("sweet_potato", 100), ("kava", 30)]),
    (TAHITI,          275_000, [("shells", 50),  ("sweet_potato", 80),  ("kava", 150)]),
    (SAMOA,           200_000, [("shells", 40),  ("sweet_potato", 70),  ("kava", 180)]),
    (EASTER_ISLAND,     8_000, [("shells", 10),  ("sweet_potato", 150), ("kava", 5)]),
];

/// `(from, to, days)` in insertion order.
pub const ROUTES: [(&str, &str, u32); 12] = [
    (HAWAII,        TAHITI,        15),
    (TAHITI,        HAWAII,        18),
    (TAHITI,        SAMOA,          8),
    (SAMOA,         TAHITI,        10),
    (SAMOA,         NEW_ZEALAND,   12),
    (NEW_ZEALAND,   SAMOA,         14),
    (EASTER_ISLAND, TAHITI,        20),
    (TAHITI,        EASTER_ISLAND, 22),
    (HAWAII,        SAMOA,         20),
    (SAMOA,         HAWAII,        18),
    (NEW_ZEALAND,   TAHITI,        16),
    (TAHITI,        NEW_ZEALAND,   18),
];

/// Build the reference graph.
pub fn polynesian_triangle() -> NetworkResult<IslandGraph> {
    let mut g = IslandGraph::with_capacity(ISLANDS.len());
    for (name, population, resources) in ISLANDS {
        g.add_island(name, population, resources);
    }
    for (from, to, days) in ROUTES {
        g.add_route(from, to, days)?;
    }
    Ok(g)
}
