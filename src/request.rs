//! Concrete service request record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::traits::Request;

/// Priority assigned when none is given.
pub const DEFAULT_PRIORITY: i32 = 3;

/// Lifecycle status, maintained by the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Submitted,
    InProgress,
    Completed,
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestStatus::Submitted => "Submitted",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// A municipal service request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    /// 1 is most urgent, 5 least.
    pub priority: i32,
    /// Unix timestamp (seconds).
    pub submitted_at: i64,
    pub status: RequestStatus,
    pub latitude: f64,
    pub longitude: f64,
    pub team_id: Option<String>,
}

impl ServiceRequest {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority: DEFAULT_PRIORITY,
            submitted_at: 0,
            status: RequestStatus::Submitted,
            latitude: 0.0,
            longitude: 0.0,
            team_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_submitted_at(mut self, timestamp: i64) -> Self {
        self.submitted_at = timestamp;
        self
    }

    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.latitude = lat;
        self.longitude = lng;
        self
    }

    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

impl Request for ServiceRequest {
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
        self.team_id.as_deref()
    }

    fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl fmt::Display for ServiceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (Priority: {})",
            self.title, self.status, self.priority
        )
    }
}
