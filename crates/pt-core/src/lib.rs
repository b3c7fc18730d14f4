//! `pt-core` — foundational types for the Polynesian Triangle planners.
//!
//! This crate is a dependency of every other `pt-*` crate.  It has no `pt-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `IslandId`                                            |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `PlanConfig`, `ScoreWeights`                          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PlanConfig, ScoreWeights};
pub use error::{CoreError, CoreResult};
pub use ids::IslandId;
pub use time::{SimClock, Tick};
