//! Clarity Core - simulated air-traffic clarity advisory pipeline.
//!
//! Generates synthetic aircraft telemetry, detects pairwise separation
//! conflicts, scores controller workload and communications load,
//! extrapolates a near-term conflict forecast, and fuses the signals into a
//! categorical situational-state belief via a naive Bayesian update. The
//! pipeline is advisory only; it never acts autonomously.

pub mod bayes;
pub mod conflict;
pub mod models;
pub mod rules;
pub mod session;
pub mod spatial;
pub mod telemetry;
pub mod trend;
pub mod workload;

pub use bayes::{bayesian_fuse, compute_evidence, default_priors, most_likely_state};
pub use conflict::{detect_conflicts, detect_conflicts_with_rules};
pub use models::{
    AircraftRecord, CommsLoad, ConflictRecord, ConflictSeverity, CycleSnapshot, Destination,
    InterventionAction, InterventionRecord, SituationState, StateMap, WorkloadEstimate,
};
pub use rules::AirspaceRules;
pub use session::{ClaritySession, SessionError};
pub use spatial::lateral_distance_nm;
pub use telemetry::{generate_aircraft, generate_aircraft_with};
pub use trend::{predict_conflicts, predict_conflicts_windowed};
pub use workload::{compute_clarity, compute_comms, compute_workload};
