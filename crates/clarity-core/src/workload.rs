//! Workload, communications load, and the fused clarity score.

use rand::Rng;

use crate::models::{CommsLoad, WorkloadEstimate};
use crate::rules::AirspaceRules;

/// Scoring weights for the clarity formula. Tuned together with the
/// separation minima; see `AirspaceRules`.
const CONFLICT_WEIGHT: f64 = 15.0;
const PREDICTED_WEIGHT: f64 = 8.0;
const WORKLOAD_WEIGHT: f64 = 20.0;
const COMMS_WEIGHT: f64 = 25.0;

const CONFLICT_LOAD_FACTOR: f64 = 0.2;

/// Controller workload from traffic volume and active conflicts.
///
/// Index = min(1, count / max_aircraft + conflicts * 0.2); monotonic in both
/// inputs and saturating at 1.0. Counts above `max_aircraft` are not
/// rejected, they simply pin the traffic term.
pub fn compute_workload(
    aircraft_count: usize,
    conflict_count: usize,
    rules: &AirspaceRules,
) -> WorkloadEstimate {
    let traffic = aircraft_count as f64 / rules.max_aircraft.max(1) as f64;
    let conflicts = conflict_count as f64 * CONFLICT_LOAD_FACTOR;
    WorkloadEstimate {
        count: aircraft_count,
        index: (traffic + conflicts).min(1.0),
    }
}

/// Draw the communications-load fraction, uniform in [0.05, 0.25].
///
/// Stands in for unmodeled voice-channel contention; intentionally a fresh
/// random draw each cycle. Reproducible runs must inject a seeded RNG.
pub fn compute_comms<R: Rng + ?Sized>(rng: &mut R) -> CommsLoad {
    CommsLoad {
        fraction: rng.random_range(0.05..=0.25),
    }
}

/// Fuse the load signals into a 0-100 clarity percentage.
///
/// Starts at 100 and subtracts weighted penalties for active conflicts,
/// predicted conflicts, workload, and comms load, clamped to [0, 100].
/// Legitimately floors at 0 under heavy load.
pub fn compute_clarity(
    conflict_count: usize,
    predicted_conflicts: usize,
    workload_index: f64,
    comms_fraction: f64,
) -> f64 {
    let score = 100.0
        - conflict_count as f64 * CONFLICT_WEIGHT
        - predicted_conflicts as f64 * PREDICTED_WEIGHT
        - workload_index * WORKLOAD_WEIGHT
        - comms_fraction * COMMS_WEIGHT;
    score.clamp(0.0, 100.0)
}
