//! `pt-planner` — planning algorithms over the island graph.
//!
//! | Module             | Contents                                            |
//! |--------------------|-----------------------------------------------------|
//! | [`knowledge`]      | `TripPlanner`, `TripPlan`                           |
//! | [`distribution`]   | `ResourceDistributor`, `Delivery`                   |
//! | [`error`]          | `PlanError`, `PlanResult<T>`                        |
//!
//! Both planners are generic over [`pt_network::Router`] and borrow the
//! graph per call rather than owning it.
//!
//! # Quick-start
//!
//! ```rust
//! use pt_network::{DijkstraRouter, polynesian_triangle};
//! use pt_planner::{ResourceDistributor, TripPlanner};
//!
//! let mut graph = polynesian_triangle()?;
//! let mut leader = TripPlanner::from_name(&graph, "Hawaii", DijkstraRouter)?;
//! let trip = leader.plan(&graph, 60);
//! let days = leader.execute(&mut graph, &trip)?;
//! assert_eq!(days, 41);
//!
//! let shells = ResourceDistributor::from_name(&graph, "shells", "Hawaii", 10, DijkstraRouter)?;
//! assert_eq!(shells.distribute(&graph, 1)?.len(), 4);
//! # Ok::<(), pt_planner::PlanError>(())
//! ```

pub mod distribution;
pub mod error;
pub mod knowledge;


pub use distribution::{DEFAULT_CANOE_CAPACITY, Delivery, ResourceDistributor, total_trips};
pub use error::{PlanError, PlanResult};
pub use knowledge::{TripPlan, TripPlanner};
