//! service-dispatch core
//!
//! Priority scheduling and proximity routing for municipal service requests:
//! search trees and heaps for ordering, per-team scheduling queues, and
//! haversine graphs with minimum spanning tree route plans.

pub mod traits;
pub mod error;
pub mod config;
pub mod request;
pub mod binary_tree;
pub mod bst;
pub mod avl;
pub mod red_black;
pub mod heap;
pub mod priority_queue;
pub mod scheduler;
pub mod graph;
pub mod haversine;
pub mod routing;
pub mod repository;
pub mod sample;

pub use config::{DispatchConfig, RoutingOptions, SchedulerOptions, TieBreak};
pub use error::{DispatchError, Result};
pub use graph::{Edge, Graph};
pub use request::{RequestStatus, ServiceRequest};
pub use routing::{plan_route, RoutePlan};
pub use scheduler::{schedule_top, RequestScheduler};
pub use traits::{Request, RequestRepository, Scheduler, SearchTree};
