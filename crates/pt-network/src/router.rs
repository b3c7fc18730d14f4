//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Planners call routing via the [`Router`] trait, so applications can swap
//! in other shortest-path engines without touching the planners.  The default
//! [`DijkstraRouter`] is sufficient for island-scale graphs.
//!
//! # Unreachable destinations
//!
//! The two queries report unreachability differently:
//!
//! - [`Router::shortest_path`] returns [`Route::unreachable`]: an empty path
//!   with `total_days == UNREACHABLE_DAYS`.
//! - [`Router::shortest_paths_from`] simply has no entry for the island.
//!
//! Neither is an error.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use pt_core::IslandId;

use crate::graph::IslandGraph;
use crate::NetworkResult;

/// Sentinel "infinite" travel time of an unreachable [`Route`].
pub const UNREACHABLE_DAYS: u32 = u32::MAX;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: islands in travel order, both endpoints
/// included, plus the total travel time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub islands: Vec<IslandId>,
    pub total_days: u32,
}

impl Route {
    /// The route of an island to itself.
    pub fn trivial(island: IslandId) -> Self {
        Self { islands: vec![island], total_days: 0 }
    }

    pub fn unreachable() -> Self {
        Self { islands: Vec::new(), total_days: UNREACHABLE_DAYS }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        !self.islands.is_empty()
    }

    /// `true` if source and destination are the same island.
    pub fn is_trivial(&self) -> bool {
        self.islands.len() == 1
    }

    /// Number of legs travelled.
    pub fn hops(&self) -> usize {
        self.islands.len().saturating_sub(1)
    }

    /// Island names along the route.
    pub fn names<'g>(&self, graph: &'g IslandGraph) -> Vec<&'g str> {
        self.islands.iter().map(|&id| graph.name(id)).collect()
    }
}

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// Single-source shortest routes to every reachable island.
///
/// Iteration yields islands in settle order: the order in which Dijkstra
/// finalized them, so the source comes first and distances never decrease.
#[derive(Debug, Clone, Default)]
pub struct ShortestPaths {
    order:  Vec<IslandId>,
    routes: Vec<Option<Route>>,
}

impl ShortestPaths {
    pub fn get(&self, island: IslandId) -> Option<&Route> {
        self.routes.get(island.index()).and_then(Option::as_ref)
    }

    pub fn contains(&self, island: IslandId) -> bool {
        self.get(island).is_some()
    }

    /// Number of reachable islands, the source included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IslandId, &Route)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.get(id).map(|r| (id, r)))
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
pub trait Router {
    /// Minimum-time route from `from` to `to`.
    ///
    /// `from == to` yields [`Route::trivial`]; an unreachable `to` yields
    /// [`Route::unreachable`].
    fn shortest_path(&self, graph: &IslandGraph, from: IslandId, to: IslandId) -> Route;

    /// Minimum-time routes from `from` to every island reachable from it.
    fn shortest_paths_from(&self, graph: &IslandGraph, from: IslandId) -> ShortestPaths;

    /// Name-keyed form of [`shortest_path`](Self::shortest_path).  Unknown
    /// names are an error; unreachable known islands are not.
    fn shortest_path_by_name(
        &self,
        graph: &IslandGraph,
        from: &str,
        to: &str,
    ) -> NetworkResult<Route> {
        let from = graph.require_id(from)?;
        let to = graph.require_id(to)?;
        Ok(self.shortest_path(graph, from, to))
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the island graph, using route travel
/// days as edge cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(&self, graph: &IslandGraph, from: IslandId, to: IslandId) -> Route {
        if from == to {
            return Route::trivial(from);
        }
        let search = dijkstra(graph, from, Some(to));
        if search.settled.get(to.index()).copied().unwrap_or(false) {
            reconstruct(&search, from, to)
        } else {
            Route::unreachable()
        }
    }

    fn shortest_paths_from(&self, graph: &IslandGraph, from: IslandId) -> ShortestPaths {
        let search = dijkstra(graph, from, None);
        let mut routes = vec![None; graph.island_count()];
        for &id in &search.order {
            routes[id.index()] = Some(reconstruct(&search, from, id));
        }
        ShortestPaths { order: search.order, routes }
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

struct Search {
    /// dist[v] = best known cost (days) to reach v.
    dist:     Vec<u32>,
    /// prev[v] = predecessor on the best known route; INVALID if unreached.
    prev:     Vec<IslandId>,
    settled:  Vec<bool>,
    /// Islands in the order they were settled.
    order:    Vec<IslandId>,
}

fn dijkstra(graph: &IslandGraph, from: IslandId, target: Option<IslandId>) -> Search {
    let n = graph.island_count();
    let mut search = Search {
        dist:    vec![UNREACHABLE_DAYS; n],
        prev:    vec![IslandId::INVALID; n],
        settled: vec![false; n],
        order:   Vec::with_capacity(n),
    };
    if from.index() >= n {
        return search;
    }
    search.dist[from.index()] = 0;

    // Min-heap: (cost, island). Reverse makes BinaryHeap (max) behave as
    // min-heap; the secondary IslandId key makes tie-breaking deterministic.
    let mut heap: BinaryHeap<Reverse<(u32, IslandId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, island))) = heap.pop() {
        // Skip stale heap entries.
        if search.settled[island.index()] || cost > search.dist[island.index()] {
            continue;
        }
        search.settled[island.index()] = true;
        search.order.push(island);

        if Some(island) == target {
            break;
        }

        for edge in graph.out_routes(island) {
            if search.settled[edge.to.index()] {
                continue;
            }
            let new_cost = cost.saturating_add(edge.days);
            if new_cost < search.dist[edge.to.index()] {
                search.dist[edge.to.index()] = new_cost;
                search.prev[edge.to.index()] = island;
                heap.push(Reverse((new_cost, edge.to)));
            }
        }
    }

    search
}

fn reconstruct(search: &Search, from: IslandId, to: IslandId) -> Route {
    let mut islands = vec![to];
    let mut cur = to;
    while cur != from {
        cur = search.prev[cur.index()];
        islands.push(cur);
    }
    islands.reverse();
    Route {
        islands,
        total_days: search.dist[to.index()],
    }
}
