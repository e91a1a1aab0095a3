//! In-memory request store.

use tracing::trace;

use crate::error::{DispatchError, Result};
use crate::traits::{Request, RequestRepository};

/// Keeps requests in insertion order. Lookups are linear; the store is
/// sized for a single user's working set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository<R> {
    requests: Vec<R>,
}

impl<R: Request + Clone> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self { requests: Vec::new() }
    }

    /// Seeds a repository, rejecting the first repeated id.
    pub fn with_requests(requests: Vec<R>) -> Result<Self> {
        let mut repository = Self::with_capacity(requests.len());
        for request in requests {
            repository.add(request)?;
        }
        Ok(repository)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            requests: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.requests.iter().position(|request| request.id() == id)
    }
}

impl<R: Request + Clone> RequestRepository<R> for InMemoryRepository<R> {
    fn all(&self) -> &[R] {
        &self.requests
    }

    fn get_by_id(&self, id: &str) -> Option<&R> {
        self.position(id).map(|index| &self.requests[index])
    }

    fn add(&mut self, request: R) -> Result<()> {
        if self.position(request.id()).is_some() {
            return Err(DispatchError::DuplicateId(request.id().to_string()));
        }
        trace!(id = request.id(), "adding request");
        self.requests.push(request);
        Ok(())
    }

    fn update(&mut self, request: R) -> Result<()> {
        let index = self
            .position(request.id())
            .ok_or_else(|| DispatchError::NotFound(request.id().to_string()))?;
        self.requests[index] = request;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.requests.remove(index);
                true
            }
            None => false,
        }
    }
}
