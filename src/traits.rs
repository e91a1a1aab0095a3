//! Core domain traits for the dispatch core.
//!
//! These are intentionally minimal. Applications implement [`Request`] for
//! their own record type; the containers in this crate are generic over it.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::error::Result;

/// A service request that can be scheduled and routed.
pub trait Request {
    /// Unique identifier.
    fn id(&self) -> &str;

    /// Urgency, smaller is more urgent (domain range 1-5).
    fn priority(&self) -> i32;

    /// Submission time (unix timestamp, seconds).
    fn submitted_at(&self) -> i64;

    /// Assigned team, if any.
    fn team_id(&self) -> Option<&str>;

    /// Location coordinates (lat, lng).
    fn location(&self) -> (f64, f64);

    /// Assigned team, treating an empty identifier as unassigned.
    fn assigned_team(&self) -> Option<&str> {
        self.team_id().filter(|team| !team.is_empty())
    }

    /// Scheduling order: priority ascending, then earlier submission first.
    ///
    /// Full ties fall back to the id, so distinct requests never compare
    /// equal and every drain of a queue yields the same sequence.
    fn schedule_cmp(&self, other: &Self) -> Ordering
    where
        Self: Sized,
    {
        self.priority()
            .cmp(&other.priority())
            .then_with(|| self.submitted_at().cmp(&other.submitted_at()))
            .then_with(|| self.id().cmp(other.id()))
    }
}

/// An ordered container indexing items by an extracted key.
///
/// Inserting an item whose key is already present is a no-op: the first
/// item inserted under a key is kept.
pub trait SearchTree<T, K: Ord> {
    /// Inserts an item under the key extracted from it.
    fn insert(&mut self, item: T);

    /// Returns the item stored under `key`.
    fn search<Q>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Items in ascending key order.
    fn in_order(&self) -> Vec<&T>;

    /// Number of stored items.
    fn len(&self) -> usize;

    /// Height of the tree; an empty tree has height 0.
    fn height(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }
}

/// Schedules requests globally and per team.
pub trait Scheduler<R: Request> {
    fn add_request(&mut self, request: R);

    /// Up to `count` most urgent requests assigned to `team_id`.
    fn top_requests_for_team(&mut self, team_id: &str, count: usize) -> Result<Vec<R>>;

    /// Up to `count` most urgent requests overall.
    fn top_requests(&mut self, count: usize) -> Result<Vec<R>>;

    fn total_request_count(&self) -> usize;
}

/// Supplies the request set the core operates on.
pub trait RequestRepository<R: Request> {
    fn all(&self) -> &[R];

    fn get_by_id(&self, id: &str) -> Option<&R>;

    fn add(&mut self, request: R) -> Result<()>;

    fn update(&mut self, request: R) -> Result<()>;

    /// Removes the request with `id`, returning whether one was removed.
    fn delete(&mut self, id: &str) -> bool;
}
