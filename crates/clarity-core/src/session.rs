//! Refresh-cycle orchestration and the intervention audit trail.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

use crate::bayes::{bayesian_fuse, compute_evidence, default_priors, most_likely_state};
use crate::conflict::detect_conflicts_with_rules;
use crate::models::{CycleSnapshot, InterventionAction, InterventionRecord, StateMap};
use crate::rules::AirspaceRules;
use crate::telemetry::generate_aircraft_with;
use crate::trend::predict_conflicts_windowed;
use crate::workload::{compute_clarity, compute_comms, compute_workload};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// An intervention was recorded before any refresh cycle ran.
    #[error("no refresh cycle has run yet")]
    NoCycle,
}

/// One operator session over the advisory pipeline.
///
/// Owns the only cross-cycle state: the append-only conflict-count history
/// (grown by exactly one entry per refresh) and the intervention log. The
/// pipeline itself is stateless and re-run in full on every refresh.
pub struct ClaritySession {
    rules: AirspaceRules,
    priors: StateMap,
    history: Vec<usize>,
    interventions: Vec<InterventionRecord>,
    last_snapshot: Option<CycleSnapshot>,
}

impl Default for ClaritySession {
    fn default() -> Self {
        Self::new(AirspaceRules::default())
    }
}

impl ClaritySession {
    pub fn new(rules: AirspaceRules) -> Self {
        Self {
            rules,
            priors: default_priors(),
            history: Vec::new(),
            interventions: Vec::new(),
            last_snapshot: None,
        }
    }

    /// Run one full refresh cycle with the given RNG and return the
    /// snapshot.
    ///
    /// Order matters: the new conflict count is appended to history before
    /// the trend fit, so the forecast always sees the cycle it is fused
    /// with.
    pub fn refresh_cycle_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        aircraft_count: usize,
    ) -> CycleSnapshot {
        let aircraft = generate_aircraft_with(rng, aircraft_count, &self.rules);
        let conflicts = detect_conflicts_with_rules(&aircraft, &self.rules);

        let workload = compute_workload(aircraft.len(), conflicts.len(), &self.rules);
        let comms = compute_comms(rng);

        self.history.push(conflicts.len());
        let predicted = predict_conflicts_windowed(&self.history, self.rules.history_window);

        let clarity = compute_clarity(conflicts.len(), predicted, workload.index, comms.fraction);
        let evidence = compute_evidence(
            clarity,
            conflicts.len(),
            predicted,
            workload.index,
            comms.fraction,
        );
        let posterior = bayesian_fuse(&self.priors, &evidence);
        let best_state = most_likely_state(&posterior);

        debug!(
            aircraft = aircraft.len(),
            conflicts = conflicts.len(),
            predicted,
            workload = workload.index,
            comms = comms.fraction,
            "cycle signals computed"
        );
        info!(clarity, state = %best_state, "refresh cycle complete");

        let snapshot = CycleSnapshot {
            aircraft,
            conflicts,
            workload,
            comms,
            predicted_conflicts: predicted,
            clarity_pct: clarity,
            evidence,
            posterior,
            best_state,
            refreshed_at: Utc::now(),
        };
        self.last_snapshot = Some(snapshot.clone());
        snapshot
    }

    /// Run one refresh cycle, seeded for reproducible telemetry or drawn
    /// from OS entropy when `seed` is `None`.
    pub fn refresh_cycle(&mut self, aircraft_count: usize, seed: Option<u64>) -> CycleSnapshot {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.refresh_cycle_with(&mut rng, aircraft_count)
    }

    /// Append a manually approved intervention to the audit trail,
    /// capturing the advisory state at confirmation time.
    pub fn record_intervention(
        &mut self,
        action: InterventionAction,
        note: impl Into<String>,
    ) -> Result<InterventionRecord, SessionError> {
        let snapshot = self.last_snapshot.as_ref().ok_or(SessionError::NoCycle)?;
        let record = InterventionRecord {
            timestamp: Utc::now(),
            action,
            note: note.into(),
            state: snapshot.best_state,
            clarity_pct: snapshot.clarity_pct,
            active_conflicts: snapshot.conflicts.len(),
            predicted_conflicts: snapshot.predicted_conflicts,
            workload_index: snapshot.workload.index,
        };
        info!(action = %action, state = %record.state, "intervention recorded");
        self.interventions.push(record.clone());
        Ok(record)
    }

    /// Conflict counts observed so far, one per refresh cycle.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// The append-only intervention audit trail.
    pub fn interventions(&self) -> &[InterventionRecord] {
        &self.interventions
    }

    /// Snapshot of the most recent refresh cycle, if any.
    pub fn last_snapshot(&self) -> Option<&CycleSnapshot> {
        self.last_snapshot.as_ref()
    }

    pub fn rules(&self) -> &AirspaceRules {
        &self.rules
    }

    pub fn priors(&self) -> &StateMap {
        &self.priors
    }
}
