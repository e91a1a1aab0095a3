//! Seeded sample requests for demos and tests.
//!
//! Requests are scattered around eight Johannesburg suburbs with a small
//! jitter, so a default 10 km routing threshold links most of them.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::request::{RequestStatus, ServiceRequest};

/// 2025-01-01T00:00:00Z. Submission times fall in the 30 days before this.
pub const REFERENCE_TIMESTAMP: i64 = 1_735_689_600;

const SECONDS_PER_DAY: i64 = 86_400;
const SUBMISSION_WINDOW_DAYS: i64 = 30;

/// Maximum offset in degrees applied to each coordinate.
pub const LOCATION_JITTER: f64 = 0.005;

pub struct Suburb {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub const SUBURBS: [Suburb; 8] = [
    Suburb { name: "Sandton", latitude: -26.2041, longitude: 28.0473 },
    Suburb { name: "Rosebank", latitude: -26.1076, longitude: 28.0567 },
    Suburb { name: "Johannesburg CBD", latitude: -26.2389, longitude: 28.0473 },
    Suburb { name: "Parktown", latitude: -26.1467, longitude: 28.0311 },
    Suburb { name: "Braamfontein", latitude: -26.1715, longitude: 28.0444 },
    Suburb { name: "Melrose", latitude: -26.2041, longitude: 28.0473 },
    Suburb { name: "Houghton", latitude: -26.1076, longitude: 28.0567 },
    Suburb { name: "Newtown", latitude: -26.2389, longitude: 28.0473 },
];

pub const TEAMS: [&str; 7] = [
    "Road-Maintenance-01",
    "Electrical-Team-02",
    "Sanitation-Team-01",
    "Plumbing-Team-01",
    "Parks-Maintenance-01",
    "Infrastructure-Team-01",
    "Traffic-Control-01",
];

const ISSUES: [(&str, &str); 10] = [
    ("Pothole Repair on Main Street", "Large pothole causing vehicle damage."),
    ("Broken Street Light on Elm Drive", "Street light has been out for 3 days."),
    ("Garbage Collection Missed", "Bin was not collected on the scheduled day."),
    ("Water Leak at Community Center", "Water leak near the main entrance."),
    ("Overgrown Tree Branches", "Branches hanging over power lines."),
    ("Damaged Sidewalk Tiles", "Cracked tiles pose a tripping risk."),
    ("Traffic Sign Vandalized", "Stop sign is no longer visible."),
    ("Sewer Blockage on Oak Avenue", "Sewer backup causing odours."),
    ("Road Markings Faded", "Markings barely visible at night."),
    ("Drainage Issue in Residential Area", "Drains not coping after heavy rain."),
];

const STATUSES: [RequestStatus; 3] = [
    RequestStatus::Submitted,
    RequestStatus::InProgress,
    RequestStatus::Completed,
];

/// Generates `count` requests. The same `seed` always yields the same
/// requests; ids run `SR-00001`, `SR-00002`, ...
pub fn generate_requests(count: usize, seed: u64) -> Vec<ServiceRequest> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|i| sample_request(&mut rng, i)).collect()
}

fn sample_request(rng: &mut StdRng, index: usize) -> ServiceRequest {
    let suburb = &SUBURBS[rng.random_range(0..SUBURBS.len())];
    let (title, description) = ISSUES[rng.random_range(0..ISSUES.len())];
    let status = STATUSES[rng.random_range(0..STATUSES.len())];

    // completed work skews low priority, in-progress work skews high
    let priority = match status {
        RequestStatus::Completed => rng.random_range(3..=5),
        RequestStatus::InProgress => rng.random_range(1..=3),
        RequestStatus::Submitted => rng.random_range(1..=5),
    };

    let latitude = suburb.latitude + rng.random_range(-LOCATION_JITTER..LOCATION_JITTER);
    let longitude = suburb.longitude + rng.random_range(-LOCATION_JITTER..LOCATION_JITTER);
    let days_ago = rng.random_range(0..SUBMISSION_WINDOW_DAYS);
    let second_of_day = rng.random_range(0..SECONDS_PER_DAY);

    let request = ServiceRequest::new(format!("SR-{:05}", index + 1), title)
        .with_description(description)
        .with_priority(priority)
        .with_status(status)
        .with_location(latitude, longitude)
        .with_submitted_at(REFERENCE_TIMESTAMP - days_ago * SECONDS_PER_DAY - second_of_day);

    // one slot in eight is left unassigned
    let team = if rng.random_ratio(1, (TEAMS.len() + 1) as u32) {
        None
    } else {
        TEAMS.choose(rng).copied()
    };
    match team {
        Some(team) => request.with_team(team),
        None => request,
    }
}
