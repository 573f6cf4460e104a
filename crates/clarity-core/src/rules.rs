//! Separation thresholds and simulation constants.

use serde::{Deserialize, Serialize};

/// Configuration for the simulated airspace and its separation minima.
///
/// The defaults are the tuned constants the conflict thresholds and scoring
/// weights were calibrated against; change them together or not at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirspaceRules {
    /// Minimum vertical separation in feet
    pub alt_separation_ft: i32,
    /// Minimum lateral separation in nautical miles
    pub lateral_separation_nm: f64,
    /// Aircraft count at which the traffic term of workload saturates
    pub max_aircraft: usize,
    /// Trailing history entries consumed by the trend fit
    pub history_window: usize,
    /// Center of the simulated area; also the reference latitude for
    /// lateral distance
    pub center_lat: f64,
    pub center_lon: f64,
    /// Telemetry position jitter around the center, in degrees
    pub position_jitter_deg: f64,
}

impl Default for AirspaceRules {
    fn default() -> Self {
        Self {
            alt_separation_ft: 800,
            lateral_separation_nm: 3.0,
            max_aircraft: 40,
            history_window: 8,
            center_lat: 39.0,
            center_lon: -86.0,
            position_jitter_deg: 0.3,
        }
    }
}

impl AirspaceRules {
    /// Vertical threshold below which a conflict escalates to
    /// loss-of-separation.
    pub fn loss_alt_separation_ft(&self) -> i32 {
        self.alt_separation_ft / 2
    }

    /// Lateral threshold below which a conflict escalates to
    /// loss-of-separation.
    pub fn loss_lateral_separation_nm(&self) -> f64 {
        self.lateral_separation_nm / 2.0
    }
}
