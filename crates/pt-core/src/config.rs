//! Planner configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and handed to the planners.  Every field has a default
//! matching the reference Polynesian Triangle scenario, so a partial file is
//! enough.

use std::path::PathBuf;

use crate::{CoreError, CoreResult};

// ── ScoreWeights ──────────────────────────────────────────────────────────────

/// Coefficients of the knowledge-sharing priority score:
///
/// ```text
/// score = population * (pop / max_pop) + recency * recency_term
/// recency_term = never_visited_recency                       if never visited
///              = min(days_since_visit / recency_horizon_days, 1.0)  otherwise
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreWeights {
    pub population: f64,
    pub recency: f64,
    /// Recency term used for islands that have never been visited.
    pub never_visited_recency: f64,
    /// Days after which the recency term saturates at 1.0.
    pub recency_horizon_days: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            population:            0.6,
            recency:               0.4,
            never_visited_recency: 2.0,
            recency_horizon_days:  10.0,
        }
    }
}

// ── PlanConfig ────────────────────────────────────────────────────────────────

/// Top-level configuration for one knowledge-sharing trip and one resource
/// distribution run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlanConfig {
    /// Island the knowledge-sharing leader departs from and returns to.
    pub home_island: String,

    /// Trip budget in days.  Must be positive.
    pub max_trip_days: u32,

    /// Island producing the distributed resource.
    pub origin_island: String,

    /// Name of the distributed resource (e.g. `"shells"`).
    pub resource: String,

    /// Total supply at the origin.  Reported only; demand is one unit per
    /// island.
    pub total_units: u32,

    /// Units one canoe carries per trip.  Must be positive.
    pub canoe_capacity: u32,

    pub weights: ScoreWeights,

    /// Optional island table (`name,population,resources`).  When set,
    /// `routes_csv` must be set too; otherwise the built-in seed graph is used.
    pub islands_csv: Option<PathBuf>,

    /// Optional route table (`from,to,days`).
    pub routes_csv: Option<PathBuf>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            home_island:    "Hawaii".to_string(),
            max_trip_days:  60,
            origin_island:  "Hawaii".to_string(),
            resource:       "shells".to_string(),
            total_units:    10,
            canoe_capacity: 1,
            weights:        ScoreWeights::default(),
            islands_csv:    None,
            routes_csv:     None,
        }
    }
}

impl PlanConfig {
    /// Reject configurations the planners cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_trip_days == 0 {
            return Err(CoreError::Config("max_trip_days must be positive".into()));
        }
        if self.canoe_capacity == 0 {
            return Err(CoreError::Config("canoe_capacity must be positive".into()));
        }
        if self.weights.recency_horizon_days <= 0.0 {
            return Err(CoreError::Config(
                "weights.recency_horizon_days must be positive".into(),
            ));
        }
        if self.islands_csv.is_some() != self.routes_csv.is_some() {
            return Err(CoreError::Config(
                "islands_csv and routes_csv must be given together".into(),
            ));
        }
        Ok(())
    }

    /// `true` if the graph should be loaded from CSV rather than the seed.
    pub fn uses_csv_dataset(&self) -> bool {
        self.islands_csv.is_some()
    }
}
