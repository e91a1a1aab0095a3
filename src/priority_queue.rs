//! Priority queue of service requests.
//!
//! A min-heap over [`Request::priority`]: priority 1 comes out before
//! priority 5. By default equal priorities are ordered by
//! [`Request::schedule_cmp`], so the dequeue sequence does not depend on the
//! heap layout. With [`TieBreak::None`] they come out in whatever order the
//! heap's sift operations leave them.

use std::cmp::Ordering;
use std::fmt;

use crate::config::TieBreak;
use crate::error::{DispatchError, Result};
use crate::heap::{BinaryHeap, HeapKind};
use crate::traits::Request;

type RequestOrder<R> = fn(&R, &R) -> Ordering;

fn by_priority<R: Request>(a: &R, b: &R) -> Ordering {
    a.priority().cmp(&b.priority())
}

pub struct PriorityQueue<R> {
    heap: BinaryHeap<R, RequestOrder<R>>,
    tie_break: TieBreak,
}

impl<R: Request> PriorityQueue<R> {
    pub fn new() -> Self {
        Self::with_tie_break(TieBreak::default())
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        let compare: RequestOrder<R> = match tie_break {
            TieBreak::None => by_priority::<R>,
            TieBreak::SubmittedAt => R::schedule_cmp,
        };
        Self {
            heap: BinaryHeap::with_comparator(HeapKind::Min, compare),
            tie_break,
        }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn enqueue(&mut self, request: R) {
        self.heap.insert(request);
    }

    /// Removes and returns the most urgent request.
    pub fn dequeue(&mut self) -> Result<R> {
        self.heap.extract().map_err(|_| DispatchError::EmptyQueue)
    }

    /// Returns the most urgent request without removing it.
    pub fn peek(&self) -> Result<&R> {
        self.heap.peek().map_err(|_| DispatchError::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<R: Request> Default for PriorityQueue<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: fmt::Debug> fmt::Debug for PriorityQueue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("tie_break", &self.tie_break)
            .field("heap", &self.heap)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ServiceRequest;

    fn request(id: &str, priority: i32, submitted_at: i64) -> ServiceRequest {
        ServiceRequest::new(id, id)
            .with_priority(priority)
            .with_submitted_at(submitted_at)
            .with_location(-25.7479, 28.2293)
    }

    #[test]
    fn test_dequeues_in_priority_order() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(request("low", 5, 0));
        queue.enqueue(request("high", 1, 0));
        queue.enqueue(request("medium", 3, 0));
        queue.enqueue(request("critical", 1, 0));
        queue.enqueue(request("very-low", 4, 0));

        let mut priorities = Vec::new();
        while let Ok(next) = queue.dequeue() {
            priorities.push(next.priority);
        }
        assert_eq!(priorities, vec![1, 1, 3, 4, 5]);
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: PriorityQueue<ServiceRequest> = PriorityQueue::new();
        assert_eq!(queue.peek().err(), Some(DispatchError::EmptyQueue));
        assert_eq!(queue.dequeue().err(), Some(DispatchError::EmptyQueue));
    }

    #[test]
    fn test_peek_returns_minimum() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(request("a", 4, 0));
        queue.enqueue(request("b", 2, 0));
        assert_eq!(queue.peek().map(|r| r.id.as_str()), Ok("b"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_submitted_at_tie_break_is_default() {
        let mut queue = PriorityQueue::new();
        assert_eq!(queue.tie_break(), TieBreak::SubmittedAt);
        queue.enqueue(request("late", 2, 300));
        queue.enqueue(request("early", 2, 100));
        queue.enqueue(request("middle", 2, 200));
        queue.enqueue(request("urgent", 1, 900));

        let mut ids = Vec::new();
        while let Ok(next) = queue.dequeue() {
            ids.push(next.id);
        }
        assert_eq!(ids, vec!["urgent", "early", "middle", "late"]);
    }

    #[test]
    fn test_refilled_queue_dequeues_same_sequence() {
        let mut queue = PriorityQueue::new();
        for (i, priority) in [3, 1, 3, 2, 1, 3, 2, 1, 3, 2].into_iter().enumerate() {
            queue.enqueue(request(&format!("SR-{i:02}"), priority, 0));
        }

        let mut first = Vec::new();
        while let Ok(next) = queue.dequeue() {
            first.push(next);
        }
        for item in first.iter().rev() {
            queue.enqueue(item.clone());
        }
        let mut second = Vec::new();
        while let Ok(next) = queue.dequeue() {
            second.push(next);
        }

        assert_eq!(first, second);
        let ids: Vec<&str> = first.iter().take(3).map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["SR-01", "SR-04", "SR-07"]);
    }

    #[test]
    fn test_priority_only_mode() {
        let mut queue = PriorityQueue::with_tie_break(TieBreak::None);
        queue.enqueue(request("b", 2, 0));
        queue.enqueue(request("a", 1, 0));
        assert_eq!(queue.tie_break(), TieBreak::None);
        assert_eq!(queue.dequeue().map(|r| r.priority), Ok(1));
        assert_eq!(queue.dequeue().map(|r| r.priority), Ok(2));
    }
}
