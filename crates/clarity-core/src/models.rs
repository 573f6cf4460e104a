//! Core data models for the clarity advisory pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One simulated aircraft state record.
///
/// Records are created fresh on every generation call and are immutable for
/// that cycle. Ids are unique within a batch but carry no identity across
/// refreshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftRecord {
    pub id: String,
    pub altitude_ft: i32,
    pub speed_kt: i32,
    pub lat: f64,
    pub lon: f64,
    pub heading_deg: i32,
    pub destination: Destination,
}

/// Destination airports used by the telemetry generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Destination {
    Ind,
    Ord,
    Sdf,
    Cvg,
}

impl Destination {
    pub const ALL: [Destination; 4] = [
        Destination::Ind,
        Destination::Ord,
        Destination::Sdf,
        Destination::Cvg,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Destination::Ind => "IND",
            Destination::Ord => "ORD",
            Destination::Sdf => "SDF",
            Destination::Cvg => "CVG",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Severity of a detected separation conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictSeverity {
    /// Both minima violated
    Proximity,
    /// Both half-minima violated as well
    LossOfSeparation,
}

/// A separation violation between a pair of aircraft.
///
/// `plane_a` always sorts lexically before `plane_b`, so each unordered pair
/// appears at most once per cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub plane_a: String,
    pub plane_b: String,
    /// Absolute altitude difference in feet
    pub alt_sep_ft: i32,
    /// Lateral distance in nautical miles, rounded to 2 decimals
    pub lat_dist_nm: f64,
    pub severity: ConflictSeverity,
}

/// Categorical situational states the Bayesian layer reasons over.
///
/// The declaration order is load-bearing: posterior maps iterate in this
/// order and exact arg-max ties resolve to the earlier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SituationState {
    Stable,
    Elevated,
    HighLoad,
    Critical,
}

impl SituationState {
    pub const ALL: [SituationState; 4] = [
        SituationState::Stable,
        SituationState::Elevated,
        SituationState::HighLoad,
        SituationState::Critical,
    ];
}

impl std::fmt::Display for SituationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SituationState::Stable => "STABLE",
            SituationState::Elevated => "ELEVATED",
            SituationState::HighLoad => "HIGH_LOAD",
            SituationState::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

/// Ordered state-to-value mapping used for priors, evidence, and posteriors.
pub type StateMap = BTreeMap<SituationState, f64>;

/// Controller workload derived from traffic volume and active conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadEstimate {
    pub count: usize,
    /// Normalized busyness in [0, 1]
    pub index: f64,
}

/// Voice-channel occupancy stand-in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommsLoad {
    /// Fraction of channel time in use, in [0.05, 0.25]
    pub fraction: f64,
}

/// Everything computed by one refresh cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleSnapshot {
    pub aircraft: Vec<AircraftRecord>,
    pub conflicts: Vec<ConflictRecord>,
    pub workload: WorkloadEstimate,
    pub comms: CommsLoad,
    pub predicted_conflicts: usize,
    pub clarity_pct: f64,
    pub evidence: StateMap,
    pub posterior: StateMap,
    pub best_state: SituationState,
    pub refreshed_at: DateTime<Utc>,
}

/// Operator actions available for manual intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionAction {
    HoldDepartures,
    SpacingInstructions,
    AltitudeSeparation,
    MonitorOnly,
}

impl std::fmt::Display for InterventionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InterventionAction::HoldDepartures => "Hold all departures",
            InterventionAction::SpacingInstructions => "Issue spacing instructions",
            InterventionAction::AltitudeSeparation => "Request altitude separation",
            InterventionAction::MonitorOnly => "Do nothing (monitor only)",
        };
        f.write_str(label)
    }
}

/// Audit-trail entry for a manually approved intervention.
///
/// Captures the advisory snapshot at confirmation time; the system itself
/// never acts on these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionRecord {
    pub timestamp: DateTime<Utc>,
    pub action: InterventionAction,
    pub note: String,
    pub state: SituationState,
    pub clarity_pct: f64,
    pub active_conflicts: usize,
    pub predicted_conflicts: usize,
    pub workload_index: f64,
}
