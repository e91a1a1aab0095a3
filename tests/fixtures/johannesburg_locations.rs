//! Named Gauteng locations for routing fixtures.
//!
//! Suburb centres are approximate; clusters are within a few kilometres of
//! each other so the default 10 km threshold links them.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Johannesburg suburbs
// ============================================================================

pub const JOHANNESBURG: &[Location] = &[
    Location::new("Sandton", -26.2041, 28.0473),
    Location::new("Rosebank", -26.1076, 28.0567),
    Location::new("Johannesburg CBD", -26.2389, 28.0473),
    Location::new("Parktown", -26.1467, 28.0311),
    Location::new("Braamfontein", -26.1715, 28.0444),
];

// ============================================================================
// Pretoria (about 54 km north of Johannesburg)
// ============================================================================

pub const PRETORIA: &[Location] = &[
    Location::new("Pretoria Central", -25.7479, 28.2293),
    Location::new("Arcadia", -25.7461, 28.2083),
    Location::new("Hatfield", -25.7487, 28.2380),
];

pub fn sandton() -> Location {
    JOHANNESBURG[0].clone()
}

pub fn pretoria_central() -> Location {
    PRETORIA[0].clone()
}
