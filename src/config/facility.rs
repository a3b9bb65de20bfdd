//! Facility configuration structures.

use serde::{Deserialize, Serialize};

/// Audit backend selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditBackendConfig {
    /// No audit trail.
    #[default]
    Disabled,
    /// Bounded in-memory sink.
    InMemory {
        /// Maximum events retained before the oldest are dropped.
        max_events: usize,
    },
}

/// Facility configuration: per-category capacities and audit selection.
///
/// Capacities are taken as given and not range-validated; zero means the
/// facility offers no spaces in that category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityConfig {
    /// Regular car spaces.
    pub car_spaces: u32,
    /// Motorcycle spaces.
    pub motorcycle_spaces: u32,
    /// Oversized spaces for vans and big cars.
    pub big_car_spaces: u32,
    /// Audit backend selection.
    #[serde(default)]
    pub audit: AuditBackendConfig,
}

impl FacilityConfig {
    /// Parse a facility configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a descriptive message when the input is not valid JSON for
    /// this shape.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))
    }

    /// Total capacity across the three categories.
    #[must_use]
    pub const fn total_spaces(&self) -> u32 {
        self.car_spaces + self.motorcycle_spaces + self.big_car_spaces
    }
}
