//! Options for scheduling and routing actions.

use serde::{Deserialize, Serialize};

/// How equal-priority requests are ordered inside a priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Priority only; equal priorities come out in heap sift order, which
    /// can differ between two drains of the same queue.
    None,
    /// Priority, then earlier submission first, then id.
    #[default]
    SubmittedAt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerOptions {
    pub tie_break: TieBreak,
    /// Number of requests returned by the "schedule" action.
    pub default_top_count: usize,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::SubmittedAt,
            default_top_count: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingOptions {
    /// Requests farther apart than this are not connected.
    pub max_distance_km: f64,
    /// Inputs at least this large compute pair distances in parallel.
    pub parallel_threshold: usize,
}

impl Default for RoutingOptions {
    fn default() -> Self {
        Self {
            max_distance_km: 10.0,
            parallel_threshold: 64,
        }
    }
}

impl RoutingOptions {
    pub fn new(max_distance_km: f64) -> Self {
        Self {
            max_distance_km,
            ..Self::default()
        }
    }
}

/// Top-level configuration a host application can load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub scheduler: SchedulerOptions,
    pub routing: RoutingOptions,
}
