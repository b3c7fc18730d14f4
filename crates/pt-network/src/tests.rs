//! Unit tests for pt-network.
//!
//! Most tests use the reference seed graph; structural tests use small
//! hand-crafted graphs.

#[cfg(test)]
mod helpers {
    use crate::{IslandGraph, polynesian_triangle};

    pub const NONE: [(&str, u32); 0] = [];

    pub fn seed() -> IslandGraph {
        polynesian_triangle().unwrap()
    }

    /// Diamond with a cheap and an expensive branch:
    ///
    /// ```text
    /// A ─1→ B ─1→ D
    /// A ─5→ C ─1→ D
    /// E (isolated)
    /// ```
    pub fn diamond() -> IslandGraph {
        let mut g = IslandGraph::new();
        for name in ["A", "B", "C", "D", "E"] {
            g.add_island(name, 100, NONE);
        }
        g.add_route("A", "B", 1).unwrap();
        g.add_route("B", "D", 1).unwrap();
        g.add_route("A", "C", 5).unwrap();
        g.add_route("C", "D", 1).unwrap();
        g
    }

    /// Sum of route weights along consecutive island pairs.
    pub fn path_days(g: &IslandGraph, islands: &[pt_core::IslandId]) -> u32 {
        islands
            .windows(2)
            .map(|w| g.route_days(w[0], w[1]).expect("route along path"))
            .sum()
    }
}

// ── Graph model ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use super::helpers::{NONE, seed};
    use crate::{IslandGraph, NetworkError};

    #[test]
    fn empty_graph() {
        let g = IslandGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.island_count(), 0);
        assert_eq!(g.route_count(), 0);
        assert_eq!(g.max_population(), 0);
    }

    #[test]
    fn seed_dimensions() {
        let g = seed();
        assert_eq!(g.island_count(), 5);
        assert_eq!(g.route_count(), 12);
        assert_eq!(g.max_population(), 5_000_000);
    }

    #[test]
    fn island_names_in_insertion_order() {
        let g = seed();
        assert_eq!(
            g.island_names(),
            vec!["New_Zealand", "Hawaii", "Tahiti", "Samoa", "Easter_Island"]
        );
    }

    #[test]
    fn neighbors_in_route_insertion_order() {
        let g = seed();
        assert_eq!(
            g.neighbors("Tahiti"),
            vec![("Hawaii", 18), ("Samoa", 8), ("Easter_Island", 22), ("New_Zealand", 18)]
        );
        assert_eq!(g.neighbors("Easter_Island"), vec![("Tahiti", 20)]);
    }

    #[test]
    fn neighbors_of_unknown_or_isolated_is_empty() {
        let mut g = seed();
        assert!(g.neighbors("Atlantis").is_empty());
        g.add_island("Pitcairn", 50, NONE);
        assert!(g.neighbors("Pitcairn").is_empty());
        // Lookups never create entries.
        assert_eq!(g.island_count(), 6);
        assert!(g.id_of("Atlantis").is_none());
    }

    #[test]
    fn route_to_unknown_island_fails() {
        let mut g = seed();
        let err = g.add_route("Hawaii", "Atlantis", 3).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownIsland(ref n) if n == "Atlantis"));
        let err = g.add_route("Atlantis", "Hawaii", 3).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownIsland(_)));
        assert_eq!(g.route_count(), 12);
    }

    #[test]
    fn zero_day_route_rejected() {
        let mut g = seed();
        let err = g.add_route("Hawaii", "Samoa", 0).unwrap_err();
        assert!(matches!(err, NetworkError::NonPositiveTravelTime { .. }));
        assert_eq!(g.neighbors("Hawaii"), vec![("Tahiti", 15), ("Samoa", 20)]);
    }

    #[test]
    fn duplicate_route_overwrites_in_place() {
        let mut g = seed();
        g.add_route("Hawaii", "Tahiti", 4).unwrap();
        assert_eq!(g.route_count(), 12);
        assert_eq!(g.neighbors("Hawaii"), vec![("Tahiti", 4), ("Samoa", 20)]);
    }

    #[test]
    fn routes_are_directed() {
        let mut g = IslandGraph::new();
        let a = g.add_island("A", 1, NONE);
        let b = g.add_island("B", 1, NONE);
        g.add_route("A", "B", 3).unwrap();
        assert_eq!(g.route_days(a, b), Some(3));
        assert_eq!(g.route_days(b, a), None);
    }

    #[test]
    fn overwriting_island_keeps_id_and_routes() {
        let mut g = seed();
        let hawaii = g.id_of("Hawaii").unwrap();
        g.island_mut(hawaii).record_visit(pt_core::Tick(4));

        let again = g.add_island("Hawaii", 1_500_000, [("taro", 7)]);
        assert_eq!(again, hawaii);
        assert_eq!(g.island_count(), 5);

        let island = g.island(hawaii);
        assert_eq!(island.population, 1_500_000);
        assert_eq!(island.resources.get("taro"), Some(&7));
        assert!(island.resources.get("shells").is_none());
        assert_eq!(island.last_visited, None);
        assert_eq!(island.visit_count, 0);
        assert_eq!(g.neighbors("Hawaii").len(), 2);
    }

    #[test]
    fn seed_island_attributes() {
        let g = seed();
        let samoa = g.island_by_name("Samoa").unwrap();
        assert_eq!(samoa.population, 200_000);
        assert_eq!(samoa.resources["kava"], 180);
        assert!(!samoa.is_visited());
        assert_eq!(samoa.visit_count, 0);
    }
}

// ── Shortest paths ────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use super::helpers::{diamond, path_days, seed};
    use crate::{DijkstraRouter, NetworkError, Route, Router, UNREACHABLE_DAYS};

    #[test]
    fn trivial_same_island() {
        let g = seed();
        for id in g.ids() {
            let r = DijkstraRouter.shortest_path(&g, id, id);
            assert_eq!(r, Route::trivial(id));
            assert!(r.is_trivial());
            assert_eq!(r.total_days, 0);
        }
    }

    #[test]
    fn hawaii_to_easter_island_via_tahiti() {
        let g = seed();
        let r = DijkstraRouter
            .shortest_path_by_name(&g, "Hawaii", "Easter_Island")
            .unwrap();
        assert_eq!(r.names(&g), vec!["Hawaii", "Tahiti", "Easter_Island"]);
        assert_eq!(r.total_days, 15 + 22);
        assert_eq!(r.hops(), 2);
    }

    #[test]
    fn hawaii_to_new_zealand_is_multi_hop() {
        let g = seed();
        let hawaii = g.id_of("Hawaii").unwrap();
        let nz = g.id_of("New_Zealand").unwrap();
        assert_eq!(g.route_days(hawaii, nz), None);

        let r = DijkstraRouter.shortest_path(&g, hawaii, nz);
        // Hawaii→Samoa→New_Zealand (20 + 12) beats Hawaii→Tahiti→New_Zealand (15 + 18).
        assert_eq!(r.names(&g), vec!["Hawaii", "Samoa", "New_Zealand"]);
        assert_eq!(r.total_days, 32);
    }

    #[test]
    fn cheaper_multi_hop_beats_direct() {
        let mut g = diamond();
        g.add_route("A", "D", 10).unwrap();
        let r = DijkstraRouter.shortest_path_by_name(&g, "A", "D").unwrap();
        assert_eq!(r.names(&g), vec!["A", "B", "D"]);
        assert_eq!(r.total_days, 2);
    }

    #[test]
    fn unreachable_returns_sentinel() {
        let g = diamond();
        let r = DijkstraRouter.shortest_path_by_name(&g, "A", "E").unwrap();
        assert!(!r.is_reachable());
        assert!(r.islands.is_empty());
        assert_eq!(r.total_days, UNREACHABLE_DAYS);

        // Direction matters: D has no way back.
        let back = DijkstraRouter.shortest_path_by_name(&g, "D", "A").unwrap();
        assert_eq!(back, Route::unreachable());
    }

    #[test]
    fn unknown_name_is_an_error() {
        let g = seed();
        let err = DijkstraRouter
            .shortest_path_by_name(&g, "Hawaii", "Atlantis")
            .unwrap_err();
        assert!(matches!(err, NetworkError::UnknownIsland(_)));
    }

    #[test]
    fn path_weights_sum_to_total() {
        let g = seed();
        for from in g.ids() {
            for to in g.ids() {
                let r = DijkstraRouter.shortest_path(&g, from, to);
                assert!(r.is_reachable(), "seed graph is strongly connected");
                assert_eq!(r.islands.first(), Some(&from));
                assert_eq!(r.islands.last(), Some(&to));
                assert_eq!(path_days(&g, &r.islands), r.total_days);
            }
        }
    }

    #[test]
    fn deterministic_across_runs() {
        let g = seed();
        let first: Vec<Route> = g
            .ids()
            .map(|to| DijkstraRouter.shortest_path(&g, g.ids().next().unwrap(), to))
            .collect();
        for _ in 0..5 {
            let again: Vec<Route> = g
                .ids()
                .map(|to| DijkstraRouter.shortest_path(&g, g.ids().next().unwrap(), to))
                .collect();
            assert_eq!(first, again);
        }
    }
}

#[cfg(test)]
mod all_destinations {
    use super::helpers::{diamond, path_days, seed};
    use crate::{DijkstraRouter, Router};

    #[test]
    fn settle_order_from_hawaii() {
        let g = seed();
        let hawaii = g.id_of("Hawaii").unwrap();
        let tree = DijkstraRouter.shortest_paths_from(&g, hawaii);

        let order: Vec<(&str, u32)> = tree
            .iter()
            .map(|(id, r)| (g.name(id), r.total_days))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Hawaii", 0),
                ("Tahiti", 15),
                ("Samoa", 20),
                ("New_Zealand", 32),
                ("Easter_Island", 37),
            ]
        );
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn agrees_with_single_pair() {
        let g = seed();
        for from in g.ids() {
            let tree = DijkstraRouter.shortest_paths_from(&g, from);
            for to in g.ids() {
                let single = DijkstraRouter.shortest_path(&g, from, to);
                let entry = tree.get(to).expect("reachable");
                assert_eq!(entry.total_days, single.total_days);
                assert_eq!(path_days(&g, &entry.islands), entry.total_days);
            }
        }
    }

    #[test]
    fn unreachable_islands_are_absent() {
        let g = diamond();
        let a = g.id_of("A").unwrap();
        let e = g.id_of("E").unwrap();
        let tree = DijkstraRouter.shortest_paths_from(&g, a);
        assert_eq!(tree.len(), 4);
        assert!(!tree.contains(e));
        assert!(tree.get(e).is_none());

        let d = g.id_of("D").unwrap();
        assert_eq!(tree.get(d).unwrap().total_days, 2);
    }

    #[test]
    fn source_only_when_isolated() {
        let g = diamond();
        let e = g.id_of("E").unwrap();
        let tree = DijkstraRouter.shortest_paths_from(&g, e);
        assert_eq!(tree.len(), 1);
        assert!(tree.get(e).unwrap().is_trivial());
    }

    #[test]
    fn terminates_on_cycles() {
        let mut g = diamond();
        g.add_route("D", "A", 1).unwrap();
        g.add_route("B", "A", 1).unwrap();
        let tree = DijkstraRouter.shortest_paths_from(&g, g.id_of("C").unwrap());
        assert_eq!(tree.len(), 4);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Write;

    use crate::{NetworkError, load_graph_csv, load_graph_reader};

    const ISLANDS: &str = "\
name,population,resources\n\
Hawaii,1400000,shells=100;kava=30\n\
Tahiti,275000,kava=150\n\
Nowhere,12,\n\
";

    const ROUTES: &str = "\
from,to,days\n\
Hawaii,Tahiti,15\n\
Tahiti,Hawaii,18\n\
";

    #[test]
    fn loads_islands_and_routes() {
        let g = load_graph_reader(ISLANDS.as_bytes(), ROUTES.as_bytes()).unwrap();
        assert_eq!(g.island_names(), vec!["Hawaii", "Tahiti", "Nowhere"]);
        assert_eq!(g.route_count(), 2);
        assert_eq!(g.neighbors("Hawaii"), vec![("Tahiti", 15)]);

        let hawaii = g.island_by_name("Hawaii").unwrap();
        assert_eq!(hawaii.resources["shells"], 100);
        assert_eq!(hawaii.resources["kava"], 30);
        assert!(g.island_by_name("Nowhere").unwrap().resources.is_empty());
    }

    #[test]
    fn route_to_unlisted_island_fails() {
        let routes = "from,to,days\nHawaii,Atlantis,3\n";
        let err = load_graph_reader(ISLANDS.as_bytes(), routes.as_bytes()).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownIsland(_)));
    }

    #[test]
    fn malformed_resource_fails() {
        let islands = "name,population,resources\nHawaii,10,shells:4\n";
        let err = load_graph_reader(islands.as_bytes(), ROUTES.as_bytes()).unwrap_err();
        assert!(matches!(err, NetworkError::Parse(_)));
    }

    #[test]
    fn non_numeric_days_fails() {
        let routes = "from,to,days\nHawaii,Tahiti,soon\n";
        let err = load_graph_reader(ISLANDS.as_bytes(), routes.as_bytes()).unwrap_err();
        assert!(matches!(err, NetworkError::Parse(_)));
    }

    #[test]
    fn loads_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let islands_path = dir.path().join("islands.csv");
        let routes_path = dir.path().join("routes.csv");
        std::fs::File::create(&islands_path)
            .unwrap()
            .write_all(ISLANDS.as_bytes())
            .unwrap();
        std::fs::File::create(&routes_path)
            .unwrap()
            .write_all(ROUTES.as_bytes())
            .unwrap();

        let g = load_graph_csv(&islands_path, &routes_path).unwrap();
        assert_eq!(g.island_count(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph_csv(&dir.path().join("nope.csv"), &dir.path().join("nope2.csv"))
            .unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
