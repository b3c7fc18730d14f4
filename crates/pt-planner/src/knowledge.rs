//! Knowledge-sharing trip planner.
//!
//! A leader departs a home island and visits as many high-priority islands as
//! a day budget allows, then tries to return home.
//!
//! # Phases
//!
//! ```text
//! score:   rank an island by population and days since its last visit
//! plan:    greedy, repeatedly travel to the best island that still leaves
//!           enough budget to get home; append the way home if it fits
//! execute: walk the plan, stamp visit state on arrival, advance the clock
//! ```
//!
//! Planning only reads the graph and the planner clock.  Only `execute`
//! mutates anything.

use pt_core::{IslandId, ScoreWeights, SimClock, Tick};
use pt_network::{IslandGraph, Route, Router};
use tracing::{debug, info, warn};

use crate::{PlanError, PlanResult};

// ── TripPlan ──────────────────────────────────────────────────────────────────

/// Ordered islands of a simulated round trip, including any intermediate
/// islands passed on multi-hop legs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    pub islands: Vec<IslandId>,
}

impl TripPlan {
    /// Build a plan from island names, e.g. to replay a hand-written itinerary.
    pub fn from_names(graph: &IslandGraph, names: &[&str]) -> PlanResult<Self> {
        let islands = names
            .iter()
            .map(|n| graph.require_id(n))
            .collect::<Result<_, _>>()?;
        Ok(Self { islands })
    }

    pub fn names<'g>(&self, graph: &'g IslandGraph) -> Vec<&'g str> {
        self.islands.iter().map(|&id| graph.name(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.islands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    pub fn first(&self) -> Option<IslandId> {
        self.islands.first().copied()
    }

    pub fn last(&self) -> Option<IslandId> {
        self.islands.last().copied()
    }
}

impl From<Vec<IslandId>> for TripPlan {
    fn from(islands: Vec<IslandId>) -> Self {
        Self { islands }
    }
}

// ── TripPlanner ───────────────────────────────────────────────────────────────

/// Greedy knowledge-sharing planner anchored at a home island.
///
/// The graph is not owned: `plan` borrows it shared, `execute` borrows it
/// mutably.  Each planner keeps its own [`SimClock`].
pub struct TripPlanner<R: Router> {
    home:    IslandId,
    router:  R,
    weights: ScoreWeights,
    clock:   SimClock,
}

impl<R: Router> TripPlanner<R> {
    pub fn new(home: IslandId, router: R) -> Self {
        Self {
            home,
            router,
            weights: ScoreWeights::default(),
            clock: SimClock::new(),
        }
    }

    /// Resolve the home island by name.
    pub fn from_name(graph: &IslandGraph, home: &str, router: R) -> PlanResult<Self> {
        Ok(Self::new(graph.require_id(home)?, router))
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn home(&self) -> IslandId {
        self.home
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    /// Priority of visiting `island` at the current planner time.  Higher is
    /// more urgent.
    pub fn score(&self, graph: &IslandGraph, island: IslandId) -> f64 {
        let w = &self.weights;
        let record = graph.island(island);

        let max_population = graph.max_population();
        let population_term = if max_population == 0 {
            0.0
        } else {
            record.population as f64 / max_population as f64
        };

        let recency_term = match record.last_visited {
            None => w.never_visited_recency,
            Some(at) => {
                let days_since = self.clock.now().since(at) as f64;
                (days_since / w.recency_horizon_days).min(1.0)
            }
        };

        w.population * population_term + w.recency * recency_term
    }

    /// Greedily build a round trip from home that fits in `max_trip_days`.
    ///
    /// Each step considers every island not yet chosen on this trip and keeps
    /// those whose outbound leg plus the way home fits the remaining budget.
    /// The highest-scoring one wins; ties go to the island added to the graph
    /// first.  Only the outbound leg is charged against the budget.  If the
    /// final leg home does not fit, the plan ends away from home.
    pub fn plan(&self, graph: &IslandGraph, max_trip_days: u32) -> TripPlan {
        let home = self.home;
        let mut trip = vec![home];
        let mut chosen = vec![false; graph.island_count()];
        if let Some(slot) = chosen.get_mut(home.index()) {
            *slot = true;
        }
        let mut remaining = max_trip_days;
        let mut current = home;

        loop {
            let mut best: Option<(f64, IslandId, Route)> = None;

            for candidate in graph.ids() {
                if chosen[candidate.index()] {
                    continue;
                }
                let outbound = self.router.shortest_path(graph, current, candidate);
                if !outbound.is_reachable() {
                    continue;
                }
                let back = self.router.shortest_path(graph, candidate, home);
                if !back.is_reachable() {
                    continue;
                }
                let needed = u64::from(outbound.total_days) + u64::from(back.total_days);
                if needed > u64::from(remaining) {
                    continue;
                }

                let score = self.score(graph, candidate);
                debug!(
                    island = graph.name(candidate),
                    outbound = outbound.total_days,
                    back = back.total_days,
                    score,
                    "candidate"
                );
                if best.as_ref().is_none_or(|(top, _, _)| score > *top) {
                    best = Some((score, candidate, outbound));
                }
            }

            let Some((score, next, outbound)) = best else {
                break;
            };
            debug!(
                island = graph.name(next),
                score,
                days = outbound.total_days,
                remaining,
                "selected"
            );
            trip.extend_from_slice(&outbound.islands[1..]);
            chosen[next.index()] = true;
            remaining -= outbound.total_days;
            current = next;
        }

        if current != home {
            let back = self.router.shortest_path(graph, current, home);
            if back.is_reachable() && back.total_days <= remaining {
                trip.extend_from_slice(&back.islands[1..]);
            } else {
                warn!(
                    at = graph.name(current),
                    remaining,
                    "return leg does not fit the trip budget; trip ends away from home"
                );
            }
        }

        let plan = TripPlan { islands: trip };
        info!(
            home = graph.name(home),
            max_trip_days,
            stops = plan.len(),
            "planned knowledge-sharing trip"
        );
        plan
    }

    /// Walk `plan` and return the total days travelled.
    ///
    /// Every position after the first is a visit: the island's
    /// `last_visited` becomes the planner time at arrival and its
    /// `visit_count` is incremented.  The planner clock then advances by the
    /// total.
    ///
    /// All legs are checked before anything is mutated.  A leg without a
    /// direct route yields [`PlanError::MissingRoute`] and leaves the graph
    /// and clock untouched.
    pub fn execute(&mut self, graph: &mut IslandGraph, plan: &TripPlan) -> PlanResult<u64> {
        let start = self.clock.now();
        let mut total = 0u64;
        let mut arrivals = Vec::with_capacity(plan.len().saturating_sub(1));

        for leg in plan.islands.windows(2) {
            let (from, to) = (leg[0], leg[1]);
            let days = graph
                .route_days(from, to)
                .ok_or_else(|| PlanError::MissingRoute {
                    from: label(graph, from),
                    to:   label(graph, to),
                })?;
            total += u64::from(days);
            arrivals.push((to, start.offset(total)));
        }

        for &(island, at) in &arrivals {
            graph.island_mut(island).record_visit(at);
        }
        self.clock.advance_by(total);

        info!(
            visits = arrivals.len(),
            total_days = total,
            clock = %self.clock,
            "executed knowledge-sharing trip"
        );
        Ok(total)
    }
}

fn label(graph: &IslandGraph, id: IslandId) -> String {
    graph
        .get(id)
        .map(|i| i.name.clone())
        .unwrap_or_else(|| id.to_string())
}
