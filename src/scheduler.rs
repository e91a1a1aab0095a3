//! Global and per-team request scheduling.
//!
//! The scheduler keeps one global [`PriorityQueue`] plus one queue per team,
//! created the first time a request names that team. "Top K" queries drain
//! up to K requests and then push them back, so they leave the queues with
//! the same contents.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::config::{SchedulerOptions, TieBreak};
use crate::error::{DispatchError, Result};
use crate::priority_queue::PriorityQueue;
use crate::traits::{Request, Scheduler};

#[derive(Debug)]
pub struct RequestScheduler<R> {
    global: PriorityQueue<R>,
    teams: HashMap<String, PriorityQueue<R>>,
    tie_break: TieBreak,
}

impl<R: Request + Clone> RequestScheduler<R> {
    pub fn new() -> Self {
        Self::with_options(&SchedulerOptions::default())
    }

    pub fn with_options(options: &SchedulerOptions) -> Self {
        Self {
            global: PriorityQueue::with_tie_break(options.tie_break),
            teams: HashMap::new(),
            tie_break: options.tie_break,
        }
    }

    /// Number of requests queued for `team_id` (0 for an unknown team).
    pub fn team_request_count(&self, team_id: &str) -> usize {
        self.teams.get(team_id).map_or(0, PriorityQueue::len)
    }

    /// Teams that have at least one request, sorted.
    pub fn team_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.teams.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl<R: Request + Clone> Default for RequestScheduler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Request + Clone> Scheduler<R> for RequestScheduler<R> {
    fn add_request(&mut self, request: R) {
        if let Some(team_id) = request.assigned_team() {
            let tie_break = self.tie_break;
            let queue = self.teams.entry(team_id.to_string()).or_insert_with(|| {
                trace!(team_id, "creating team queue");
                PriorityQueue::with_tie_break(tie_break)
            });
            queue.enqueue(request.clone());
        }
        self.global.enqueue(request);
    }

    fn top_requests_for_team(&mut self, team_id: &str, count: usize) -> Result<Vec<R>> {
        if team_id.is_empty() {
            return Err(DispatchError::EmptyTeamId);
        }
        if count == 0 {
            return Err(DispatchError::NonPositiveCount);
        }
        let tie_break = self.tie_break;
        let Some(queue) = self.teams.get_mut(team_id) else {
            debug!(team_id, "no queue for team");
            return Ok(Vec::new());
        };
        let top = peek_top(queue, count, tie_break);
        debug!(team_id, requested = count, returned = top.len(), "team top requests");
        Ok(top)
    }

    fn top_requests(&mut self, count: usize) -> Result<Vec<R>> {
        if count == 0 {
            return Err(DispatchError::NonPositiveCount);
        }
        let top = peek_top(&mut self.global, count, self.tie_break);
        debug!(requested = count, returned = top.len(), "global top requests");
        Ok(top)
    }

    fn total_request_count(&self) -> usize {
        self.global.len()
    }
}

/// Drains up to `count` requests from `queue`, then refills it.
fn peek_top<R: Request + Clone>(queue: &mut PriorityQueue<R>, count: usize, tie_break: TieBreak) -> Vec<R> {
    let mut results = Vec::with_capacity(count.min(queue.len()));
    let mut drained = PriorityQueue::with_tie_break(tie_break);

    while results.len() < count {
        let Ok(request) = queue.dequeue() else {
            break;
        };
        drained.enqueue(request.clone());
        results.push(request);
    }

    while let Ok(request) = drained.dequeue() {
        queue.enqueue(request);
    }

    results
}

/// Schedules `requests` with a fresh scheduler and returns the `count` most
/// urgent ones.
pub fn schedule_top<R: Request + Clone>(
    requests: &[R],
    count: usize,
    options: &SchedulerOptions,
) -> Result<Vec<R>> {
    let mut scheduler = RequestScheduler::with_options(options);
    for request in requests {
        scheduler.add_request(request.clone());
    }
    scheduler.top_requests(count)
}
