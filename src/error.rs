//! Error type shared by the scheduling and routing core.

use std::fmt;

/// Errors returned by dispatch operations.
///
/// Lookups that simply miss (tree search, unknown team) are not errors and
/// return `Option` or an empty result instead.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// A vertex index was outside `0..vertex_count`.
    VertexOutOfRange { vertex: usize, vertex_count: usize },
    /// A "top K" query asked for zero elements.
    NonPositiveCount,
    /// A team query was made with an empty team identifier.
    EmptyTeamId,
    /// A graph builder was given no requests.
    EmptyRequestList,
    /// Route planning needs more requests than were supplied.
    InsufficientRequests { required: usize, actual: usize },
    /// Extract or peek on an empty heap.
    EmptyHeap,
    /// Dequeue or peek on an empty priority queue.
    EmptyQueue,
    /// A repository already holds a request with this id.
    DuplicateId(String),
    /// A repository holds no request with this id.
    NotFound(String),
}

impl DispatchError {
    /// True for errors caused by a rejected argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            DispatchError::VertexOutOfRange { .. }
                | DispatchError::NonPositiveCount
                | DispatchError::EmptyTeamId
                | DispatchError::EmptyRequestList
                | DispatchError::InsufficientRequests { .. }
        )
    }

    /// True for extract/peek/dequeue on an empty container.
    pub fn is_empty_container(&self) -> bool {
        matches!(self, DispatchError::EmptyHeap | DispatchError::EmptyQueue)
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {} is out of range for a graph with {} vertices",
                vertex, vertex_count
            ),
            DispatchError::NonPositiveCount => write!(f, "count must be greater than zero"),
            DispatchError::EmptyTeamId => write!(f, "team id cannot be empty"),
            DispatchError::EmptyRequestList => write!(f, "request list cannot be empty"),
            DispatchError::InsufficientRequests { required, actual } => write!(
                f,
                "need at least {} requests, got {}",
                required, actual
            ),
            DispatchError::EmptyHeap => write!(f, "heap is empty"),
            DispatchError::EmptyQueue => write!(f, "priority queue is empty"),
            DispatchError::DuplicateId(id) => {
                write!(f, "service request with id {} already exists", id)
            }
            DispatchError::NotFound(id) => write!(f, "service request with id {} not found", id),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DispatchError>;
