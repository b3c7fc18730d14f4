//! Island graph representation.
//!
//! # Data layout
//!
//! Islands live in an arena `Vec<Island>` indexed by [`IslandId`], assigned
//! in insertion order.  A name → id index (`FxHashMap`) resolves the string
//! keys callers use.  Outgoing routes are stored per origin:
//!
//! ```text
//! out_routes[origin.index()] = [RouteEdge { to, days }, ...]   // insertion order
//! ```
//!
//! Unlike a CSR layout the graph stays mutable after construction, because
//! islands and routes are added one at a time and visit state changes while
//! planners run.  Nothing is ever removed, so ids stay stable.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use pt_core::{IslandId, Tick};

use crate::{NetworkError, NetworkResult};

// ── Island ────────────────────────────────────────────────────────────────────

/// A node of the graph: a populated island plus its visit-tracking state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Island {
    pub name: String,
    pub population: u64,
    /// Resource name → quantity.  Informational; no planner consumes it.
    pub resources: BTreeMap<String, u32>,
    /// Tick of the most recent knowledge-sharing visit, `None` until the first.
    pub last_visited: Option<Tick>,
    pub visit_count: u32,
}

impl Island {
    pub fn new(name: impl Into<String>, population: u64, resources: BTreeMap<String, u32>) -> Self {
        Self {
            name: name.into(),
            population,
            resources,
            last_visited: None,
            visit_count: 0,
        }
    }

    /// Stamp a visit arriving at `at`.
    pub fn record_visit(&mut self, at: Tick) {
        self.last_visited = Some(at);
        self.visit_count += 1;
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.last_visited.is_some()
    }
}

// ── RouteEdge ─────────────────────────────────────────────────────────────────

/// One directed outgoing route as stored in an origin's adjacency list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteEdge {
    pub to: IslandId,
    /// Travel time in days.  Always positive.
    pub days: u32,
}

// ── IslandGraph ───────────────────────────────────────────────────────────────

/// Directed, weighted graph of islands.
///
/// # Example
///
/// ```
/// use pt_network::IslandGraph;
///
/// let mut g = IslandGraph::new();
/// g.add_island("Hawaii", 1_400_000, [("shells", 100)]);
/// g.add_island("Tahiti", 275_000, [("kava", 150)]);
/// g.add_route("Hawaii", "Tahiti", 15).unwrap();
/// assert_eq!(g.neighbors("Hawaii"), vec![("Tahiti", 15)]);
/// assert!(g.neighbors("Tahiti").is_empty()); // directed
/// ```
#[derive(Clone, Debug, Default)]
pub struct IslandGraph {
    islands:     Vec<Island>,
    index:       FxHashMap<String, IslandId>,
    out_routes:  Vec<Vec<RouteEdge>>,
    route_count: usize,
}

impl IslandGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of islands.
    pub fn with_capacity(islands: usize) -> Self {
        Self {
            islands:     Vec::with_capacity(islands),
            index:       FxHashMap::with_capacity_and_hasher(islands, Default::default()),
            out_routes:  Vec::with_capacity(islands),
            route_count: 0,
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Insert an island, or overwrite the record of an existing one.
    ///
    /// Overwriting keeps the island's id (and therefore its position in
    /// [`island_names`](Self::island_names)) and its routes, but replaces
    /// population, resources and visit state.
    pub fn add_island<I, K>(&mut self, name: &str, population: u64, resources: I) -> IslandId
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        let resources: BTreeMap<String, u32> =
            resources.into_iter().map(|(k, q)| (k.into(), q)).collect();
        let island = Island::new(name, population, resources);

        if let Some(&id) = self.index.get(name) {
            self.islands[id.index()] = island;
            return id;
        }

        let id = IslandId(self.islands.len() as u32);
        self.islands.push(island);
        self.out_routes.push(Vec::new());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Add a **directed** route `from → to` taking `days`.
    ///
    /// Both endpoints must already exist.  A second route between the same
    /// ordered pair overwrites the first one's travel time in place.
    pub fn add_route(&mut self, from: &str, to: &str, days: u32) -> NetworkResult<()> {
        let from_id = self.require_id(from)?;
        let to_id = self.require_id(to)?;
        if days == 0 {
            return Err(NetworkError::NonPositiveTravelTime {
                from: from.to_string(),
                to:   to.to_string(),
            });
        }

        let edges = &mut self.out_routes[from_id.index()];
        match edges.iter_mut().find(|e| e.to == to_id) {
            Some(edge) => edge.days = days,
            None => {
                edges.push(RouteEdge { to: to_id, days });
                self.route_count += 1;
            }
        }
        Ok(())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn island_count(&self) -> usize {
        self.islands.len()
    }

    pub fn route_count(&self) -> usize {
        self.route_count
    }

    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn id_of(&self, name: &str) -> Option<IslandId> {
        self.index.get(name).copied()
    }

    /// Like [`id_of`](Self::id_of) but unknown names are an error.
    pub fn require_id(&self, name: &str) -> NetworkResult<IslandId> {
        self.id_of(name)
            .ok_or_else(|| NetworkError::UnknownIsland(name.to_string()))
    }

    /// The island behind `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this graph.
    #[inline]
    pub fn island(&self, id: IslandId) -> &Island {
        &self.islands[id.index()]
    }

    /// Mutable access to the island behind `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this graph.
    #[inline]
    pub fn island_mut(&mut self, id: IslandId) -> &mut Island {
        &mut self.islands[id.index()]
    }

    /// Checked form of [`island`](Self::island).
    pub fn get(&self, id: IslandId) -> Option<&Island> {
        self.islands.get(id.index())
    }

    pub fn island_by_name(&self, name: &str) -> Option<&Island> {
        self.id_of(name).map(|id| self.island(id))
    }

    #[inline]
    pub fn name(&self, id: IslandId) -> &str {
        &self.islands[id.index()].name
    }

    /// All island names in insertion order.
    pub fn island_names(&self) -> Vec<&str> {
        self.islands.iter().map(|i| i.name.as_str()).collect()
    }

    /// All island ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = IslandId> + '_ {
        (0..self.islands.len()).map(|i| IslandId(i as u32))
    }

    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    /// Largest population in the graph, or 0 for an empty graph.
    pub fn max_population(&self) -> u64 {
        self.islands.iter().map(|i| i.population).max().unwrap_or(0)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Outgoing routes of `id` in insertion order.
    #[inline]
    pub fn out_routes(&self, id: IslandId) -> &[RouteEdge] {
        self.out_routes
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `(neighbor name, days)` for every outgoing route of `name`, in
    /// insertion order.  Empty for islands without routes and for unknown
    /// names.
    pub fn neighbors(&self, name: &str) -> Vec<(&str, u32)> {
        let Some(id) = self.id_of(name) else {
            return Vec::new();
        };
        self.out_routes(id)
            .iter()
            .map(|e| (self.name(e.to), e.days))
            .collect()
    }

    /// Travel time of the direct route `from → to`, if one exists.
    pub fn route_days(&self, from: IslandId, to: IslandId) -> Option<u32> {
        self.out_routes(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.days)
    }
}
