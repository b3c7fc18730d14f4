//! Resource distribution from a single producing island.
//!
//! Every other reachable island is sent one unit of the resource along its
//! shortest route from the origin.  Canoe capacity only affects the trip
//! count (`ceil(demand / capacity)`); it does not constrain routing, and the
//! origin's total supply is reported but never rationed.

use pt_core::IslandId;
use pt_network::{IslandGraph, Route, Router};
use tracing::{info, warn};

use crate::{PlanError, PlanResult};

/// Units one canoe carries unless the caller says otherwise.
pub const DEFAULT_CANOE_CAPACITY: u32 = 1;

/// Units delivered to every destination island.
const DEMAND_PER_ISLAND: u32 = 1;

/// One planned delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delivery {
    pub island: IslandId,
    pub trips_needed: u32,
    pub route: Route,
}

/// Plans deliveries of one resource from `origin` to every island reachable
/// from it.
pub struct ResourceDistributor<R: Router> {
    resource:    String,
    origin:      IslandId,
    total_units: u32,
    router:      R,
}

impl<R: Router> ResourceDistributor<R> {
    pub fn new(resource: impl Into<String>, origin: IslandId, total_units: u32, router: R) -> Self {
        Self {
            resource: resource.into(),
            origin,
            total_units,
            router,
        }
    }

    /// Resolve the origin island by name.
    pub fn from_name(
        graph: &IslandGraph,
        resource: impl Into<String>,
        origin: &str,
        total_units: u32,
        router: R,
    ) -> PlanResult<Self> {
        Ok(Self::new(resource, graph.require_id(origin)?, total_units, router))
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn origin(&self) -> IslandId {
        self.origin
    }

    pub fn total_units(&self) -> u32 {
        self.total_units
    }

    /// One [`Delivery`] per reachable non-origin island, sorted by
    /// `trips_needed` ascending.  Islands with equal trip counts keep
    /// shortest-path settle order (nearest first).  Unreachable islands are
    /// left out.
    pub fn distribute(&self, graph: &IslandGraph, canoe_capacity: u32) -> PlanResult<Vec<Delivery>> {
        if canoe_capacity == 0 {
            return Err(PlanError::InvalidCapacity(canoe_capacity));
        }

        let paths = self.router.shortest_paths_from(graph, self.origin);
        let mut deliveries: Vec<Delivery> = paths
            .iter()
            .filter(|&(island, _)| island != self.origin)
            .map(|(island, route)| Delivery {
                island,
                trips_needed: DEMAND_PER_ISLAND.div_ceil(canoe_capacity),
                route: route.clone(),
            })
            .collect();
        deliveries.sort_by_key(|d| d.trips_needed);

        let unreachable = graph.island_count().saturating_sub(paths.len());
        if unreachable > 0 {
            warn!(
                origin = graph.name(self.origin),
                unreachable,
                "islands unreachable from origin are skipped"
            );
        }
        let demand = deliveries.len() as u64 * u64::from(DEMAND_PER_ISLAND);
        if demand > u64::from(self.total_units) {
            warn!(
                resource = %self.resource,
                demand,
                total_units = self.total_units,
                "demand exceeds available supply"
            );
        }
        info!(
            resource = %self.resource,
            origin = graph.name(self.origin),
            canoe_capacity,
            deliveries = deliveries.len(),
            total_trips = total_trips(&deliveries),
            "planned resource distribution"
        );
        Ok(deliveries)
    }

    /// [`distribute`](Self::distribute) with [`DEFAULT_CANOE_CAPACITY`].
    pub fn distribute_default(&self, graph: &IslandGraph) -> PlanResult<Vec<Delivery>> {
        self.distribute(graph, DEFAULT_CANOE_CAPACITY)
    }
}

/// Canoe trips summed over all deliveries.
pub fn total_trips(deliveries: &[Delivery]) -> u64 {
    deliveries.iter().map(|d| u64::from(d.trips_needed)).sum()
}
