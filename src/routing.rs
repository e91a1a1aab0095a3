//! Graphs derived from request sets, and MST route planning.
//!
//! Vertex `i` of every graph built here is `requests[i]`.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::RoutingOptions;
use crate::error::{DispatchError, Result};
use crate::graph::{total_weight, Edge, Graph};
use crate::haversine::haversine_km;
use crate::traits::Request;

/// Requests needed before a route is worth planning.
pub const MIN_ROUTE_REQUESTS: usize = 2;

/// Undirected proximity graph: an edge for every pair of requests within
/// `max_distance_km` of each other, weighted by haversine distance.
pub fn build_graph_from_requests<R: Request>(requests: &[R], max_distance_km: f64) -> Result<Graph> {
    build_distance_graph(requests, &RoutingOptions::new(max_distance_km))
}

/// Like [`build_graph_from_requests`], taking the threshold and the
/// parallelism cut-over from `options`.
///
/// Edges are added in `(i, j)` order with `i < j` whether or not the pair
/// distances were computed in parallel.
pub fn build_distance_graph<R: Request>(requests: &[R], options: &RoutingOptions) -> Result<Graph> {
    if requests.is_empty() {
        return Err(DispatchError::EmptyRequestList);
    }

    let locations: Vec<(f64, f64)> = requests.iter().map(R::location).collect();
    let n = locations.len();

    let pairs: Vec<(usize, usize, f64)> = if n >= options.parallel_threshold {
        (0..n)
            .into_par_iter()
            .flat_map_iter(|i| pair_row(&locations, i))
            .collect()
    } else {
        (0..n).flat_map(|i| pair_row(&locations, i)).collect()
    };

    let mut graph = Graph::undirected(n);
    for (i, j, distance) in pairs {
        if !distance.is_finite() {
            warn!(
                from = requests[i].id(),
                to = requests[j].id(),
                "non-finite distance between requests, skipping pair"
            );
            continue;
        }
        if distance <= options.max_distance_km {
            graph.add_edge(i, j, distance)?;
        }
    }

    debug!(
        vertices = n,
        edges = graph.edge_count(),
        max_distance_km = options.max_distance_km,
        "built distance graph"
    );
    Ok(graph)
}

/// Distances from `locations[i]` to every later location.
fn pair_row(locations: &[(f64, f64)], i: usize) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
    (i + 1..locations.len()).map(move |j| (i, j, haversine_km(locations[i], locations[j])))
}

/// Undirected graph linking every pair of requests assigned to the same
/// team, weighted by haversine distance. Unassigned requests stay isolated.
pub fn build_graph_by_team<R: Request>(requests: &[R]) -> Result<Graph> {
    if requests.is_empty() {
        return Err(DispatchError::EmptyRequestList);
    }

    let mut graph = Graph::undirected(requests.len());
    for (i, a) in requests.iter().enumerate() {
        let Some(team) = a.assigned_team() else {
            continue;
        };
        for (j, b) in requests.iter().enumerate().skip(i + 1) {
            if b.assigned_team() == Some(team) {
                graph.add_edge(i, j, haversine_km(a.location(), b.location()))?;
            }
        }
    }

    debug!(vertices = requests.len(), edges = graph.edge_count(), "built team graph");
    Ok(graph)
}

/// Minimum spanning tree over a request set, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub vertex_count: usize,
    /// MST edges in the order Kruskal selected them.
    pub edges: Vec<Edge>,
    pub total_distance_km: f64,
    /// Depth-first walk of the tree from vertex 0.
    pub visit_order: Vec<usize>,
}

impl RoutePlan {
    /// True when the tree spans every request. Requests further than the
    /// distance threshold from all others leave the plan as a forest.
    pub fn is_connected(&self) -> bool {
        self.edges.len() + 1 == self.vertex_count
    }
}

/// Builds the proximity graph for `requests`, then its MST and a visiting
/// order.
pub fn plan_route<R: Request>(requests: &[R], options: &RoutingOptions) -> Result<RoutePlan> {
    if requests.len() < MIN_ROUTE_REQUESTS {
        return Err(DispatchError::InsufficientRequests {
            required: MIN_ROUTE_REQUESTS,
            actual: requests.len(),
        });
    }

    let graph = build_distance_graph(requests, options)?;
    let edges = graph.minimum_spanning_tree_kruskal();
    let total_distance_km = total_weight(&edges);

    let mut tree = Graph::undirected(graph.vertex_count());
    for edge in &edges {
        tree.add_edge(edge.from, edge.to, edge.weight)?;
    }
    let visit_order = tree.depth_first_search(0)?;

    let plan = RoutePlan {
        vertex_count: graph.vertex_count(),
        edges,
        total_distance_km,
        visit_order,
    };
    debug!(
        vertices = plan.vertex_count,
        tree_edges = plan.edges.len(),
        total_distance_km = plan.total_distance_km,
        connected = plan.is_connected(),
        "planned route"
    );
    Ok(plan)
}
