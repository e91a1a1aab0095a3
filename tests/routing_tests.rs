//! Route planning tests
//!
//! End-to-end: sample requests → distance graph → MST route plan.

mod fixtures;

use service_dispatch::config::{DispatchConfig, RoutingOptions};
use service_dispatch::error::DispatchError;
use service_dispatch::routing::{build_distance_graph, plan_route, RoutePlan};
use service_dispatch::sample::generate_requests;

use fixtures::{TestRequest, JOHANNESBURG, PRETORIA};

#[test]
fn test_plan_route_over_sample_requests() {
    let requests = generate_requests(30, 2024);
    let options = RoutingOptions::new(50.0);

    let plan = plan_route(&requests, &options).unwrap();
    // all sample suburbs are within 50 km of each other
    assert!(plan.is_connected());
    assert_eq!(plan.edges.len(), requests.len() - 1);
    assert_eq!(plan.visit_order.len(), requests.len());

    let mut visited = plan.visit_order.clone();
    visited.sort_unstable();
    assert_eq!(visited, (0..requests.len()).collect::<Vec<_>>());

    let summed: f64 = plan.edges.iter().map(|e| e.weight).sum();
    assert!((plan.total_distance_km - summed).abs() < 1e-9);
}

#[test]
fn test_parallel_and_sequential_builders_agree() {
    let requests = generate_requests(120, 5);
    let sequential = RoutingOptions {
        max_distance_km: 8.0,
        parallel_threshold: usize::MAX,
    };
    let parallel = RoutingOptions {
        max_distance_km: 8.0,
        parallel_threshold: 0,
    };

    let a = build_distance_graph(&requests, &sequential).unwrap();
    let b = build_distance_graph(&requests, &parallel).unwrap();
    assert_eq!(a.edge_count(), b.edge_count());
    assert_eq!(a.all_edges(), b.all_edges());
}

#[test]
fn test_two_cities_make_a_forest() {
    let requests: Vec<TestRequest> = JOHANNESBURG
        .iter()
        .chain(PRETORIA)
        .enumerate()
        .map(|(i, location)| TestRequest::new(&format!("SR-{i}")).at(location))
        .collect();

    let plan = plan_route(&requests, &RoutingOptions::new(20.0)).unwrap();
    assert!(!plan.is_connected());
    // one tree per city
    assert_eq!(plan.edges.len(), requests.len() - 2);
    assert_eq!(plan.visit_order.len(), JOHANNESBURG.len());
}

#[test]
fn test_too_few_requests() {
    let err = plan_route(&generate_requests(1, 1), &RoutingOptions::default()).unwrap_err();
    assert_eq!(
        err,
        DispatchError::InsufficientRequests {
            required: 2,
            actual: 1
        }
    );
    assert!(err.is_invalid_argument());

    let none: Vec<TestRequest> = Vec::new();
    assert!(plan_route(&none, &RoutingOptions::default()).is_err());
}

#[test]
fn test_route_plan_serializes() {
    let requests = generate_requests(6, 9);
    let plan = plan_route(&requests, &RoutingOptions::new(50.0)).unwrap();

    let json = serde_json::to_string(&plan).unwrap();
    let back: RoutePlan = serde_json::from_str(&json).unwrap();
    assert_eq!(back.vertex_count, plan.vertex_count);
    assert_eq!(back.visit_order, plan.visit_order);
    assert_eq!(back.edges.len(), plan.edges.len());
}

#[test]
fn test_config_loads_with_partial_json() {
    let config: DispatchConfig =
        serde_json::from_str(r#"{ "routing": { "max_distance_km": 50.0 } }"#).unwrap();
    assert_eq!(config.routing.max_distance_km, 50.0);
    assert_eq!(config.routing.parallel_threshold, 64);
    assert_eq!(config.scheduler.default_top_count, 5);

    let config: DispatchConfig =
        serde_json::from_str(r#"{ "scheduler": { "tie_break": "None" } }"#).unwrap();
    assert_eq!(config.scheduler.tie_break, service_dispatch::TieBreak::None);
    assert_eq!(DispatchConfig::default().scheduler.tie_break, service_dispatch::TieBreak::SubmittedAt);
}
