//! `pt-network` — island graph, shortest-path routing, and datasets.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `IslandGraph`, `Island`, `RouteEdge`                        |
//! | [`router`]  | `Router` trait, `Route`, `ShortestPaths`, `DijkstraRouter`  |
//! | [`loader`]  | `load_graph_csv`, `load_graph_reader`                       |
//! | [`seed`]    | `polynesian_triangle` reference dataset                     |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod loader;
pub mod router;
pub mod seed;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use graph::{Island, IslandGraph, RouteEdge};
pub use loader::{load_graph_csv, load_graph_reader};
pub use router::{DijkstraRouter, Route, Router, ShortestPaths, UNREACHABLE_DAYS};
pub use seed::polynesian_triangle;
