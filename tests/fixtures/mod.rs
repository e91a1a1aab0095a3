//! Test fixtures for service-dispatch.
//!
//! Provides:
//! - Named Johannesburg / Pretoria locations
//! - A minimal `Request` implementation with a builder

#![allow(dead_code)]

pub mod johannesburg_locations;

pub use johannesburg_locations::*;

use service_dispatch::traits::Request;

/// Builder for test requests with sensible defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct TestRequest {
    pub id: String,
    pub priority: i32,
    pub submitted_at: i64,
    pub team: Option<String>,
    pub location: (f64, f64),
}

impl TestRequest {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            priority: 3,
            submitted_at: 0,
            team: None,
            location: sandton().coords(),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn submitted(mut self, at: i64) -> Self {
        self.submitted_at = at;
        self
    }

    pub fn team(mut self, team: &str) -> Self {
        self.team = Some(team.to_string());
        self
    }

    pub fn at(mut self, location: &Location) -> Self {
        self.location = location.coords();
        self
    }

    pub fn coords(mut self, lat: f64, lng: f64) -> Self {
        self.location = (lat, lng);
        self
    }
}

impl Request for TestRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn submitted_at(&self) -> i64 {
        self.submitted_at
    }

    fn team_id(&self) -> Option<&str> {
        self.team.as_deref()
    }

    fn location(&self) -> (f64, f64) {
        self.location
    }
}
