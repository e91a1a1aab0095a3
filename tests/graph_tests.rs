//! Graph engine tests: traversal coverage, Kruskal, and haversine-built
//! graphs.

mod fixtures;

use service_dispatch::graph::{total_weight, Edge, Graph};
use service_dispatch::haversine::haversine_km;
use service_dispatch::routing::{build_graph_by_team, build_graph_from_requests};

use fixtures::{pretoria_central, sandton, TestRequest, JOHANNESBURG, PRETORIA};

// ============================================================================
// Helpers
// ============================================================================

/// The five-vertex reference graph; its MST weighs 7.0.
fn reference_graph() -> Graph {
    let mut graph = Graph::undirected(5);
    for (from, to, weight) in [
        (0, 1, 2.0),
        (0, 2, 1.0),
        (1, 2, 3.0),
        (1, 3, 4.0),
        (2, 3, 2.5),
        (2, 4, 1.5),
        (3, 4, 3.5),
    ] {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

fn sorted(mut vertices: Vec<usize>) -> Vec<usize> {
    vertices.sort_unstable();
    vertices
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_traversals_visit_connected_component_once() {
    let graph = reference_graph();
    for start in 0..graph.vertex_count() {
        let dfs = graph.depth_first_search(start).unwrap();
        let bfs = graph.breadth_first_search(start).unwrap();
        assert_eq!(dfs[0], start);
        assert_eq!(bfs[0], start);
        assert_eq!(sorted(dfs), vec![0, 1, 2, 3, 4]);
        assert_eq!(sorted(bfs), vec![0, 1, 2, 3, 4]);
    }
}

#[test]
fn test_directed_traversal_follows_arrows() {
    let mut graph = Graph::directed(4);
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(3, 0, 1.0).unwrap();
    assert_eq!(graph.depth_first_search(0).unwrap(), vec![0, 1, 2]);
    assert_eq!(graph.breadth_first_search(3).unwrap(), vec![3, 0, 1, 2]);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.is_directed());
}

// ============================================================================
// Kruskal
// ============================================================================

#[test]
fn test_reference_mst() {
    let graph = reference_graph();
    assert_eq!(graph.edge_count(), 7);
    assert_eq!(graph.all_edges().len(), 7);

    let mst = graph.minimum_spanning_tree_kruskal();
    assert_eq!(mst.len(), graph.vertex_count() - 1);
    assert!((total_weight(&mst) - 7.0).abs() < 1e-9);
    assert_eq!(mst[0], Edge::new(0, 2, 1.0));
}

#[test]
fn test_mst_is_no_heavier_than_any_spanning_path() {
    let graph = reference_graph();
    let mst_weight = total_weight(&graph.minimum_spanning_tree_kruskal());
    // 0-2, 2-4, 4-3, 3-1 is a spanning path of weight 1 + 1.5 + 3.5 + 4
    assert!(mst_weight <= 10.0);
}

// ============================================================================
// Haversine-built graphs
// ============================================================================

#[test]
fn test_edges_respect_threshold_and_match_haversine() {
    let requests: Vec<TestRequest> = JOHANNESBURG
        .iter()
        .chain(PRETORIA)
        .enumerate()
        .map(|(i, location)| TestRequest::new(&format!("SR-{i}")).at(location))
        .collect();

    let graph = build_graph_from_requests(&requests, 15.0).unwrap();
    assert_eq!(graph.vertex_count(), requests.len());
    assert!(!graph.is_directed());

    for edge in graph.all_edges() {
        assert!(edge.from < edge.to);
        assert!(edge.weight <= 15.0);
        let expected = haversine_km(requests[edge.from].location, requests[edge.to].location);
        assert!((edge.weight - expected).abs() < 1e-9);
    }

    // Johannesburg and Pretoria are ~54 km apart: never linked at 15 km
    let johannesburg = JOHANNESBURG.len();
    assert!(graph
        .all_edges()
        .iter()
        .all(|edge| (edge.from < johannesburg) == (edge.to < johannesburg)));
}

#[test]
fn test_distance_between_cities() {
    let km = haversine_km(sandton().coords(), pretoria_central().coords());
    assert!(km > 50.0 && km < 58.0, "expected ~54km, got {km}");
}

#[test]
fn test_team_graph_links_only_teammates() {
    let requests = vec![
        TestRequest::new("a").at(&JOHANNESBURG[0]).team("Sanitation-Team-01"),
        TestRequest::new("b").at(&PRETORIA[0]).team("Sanitation-Team-01"),
        TestRequest::new("c").at(&JOHANNESBURG[1]).team("Plumbing-Team-01"),
        TestRequest::new("d").at(&JOHANNESBURG[2]),
    ];
    let graph = build_graph_by_team(&requests).unwrap();
    assert_eq!(graph.edge_count(), 1);
    let edge = graph.all_edges()[0];
    assert_eq!((edge.from, edge.to), (0, 1));
    // no distance threshold for team graphs
    assert!(edge.weight > 50.0);
}
