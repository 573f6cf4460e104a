//! Naive Bayesian fusion of the advisory signals.
//!
//! Evidence is a fixed log-linear form per situational state; fusion is a
//! single prior-times-likelihood update normalized over the four states.

use crate::models::{SituationState, StateMap};

/// Likelihood substituted for a state missing from the evidence map.
/// Small but nonzero so a missing key dampens rather than annihilates.
const MISSING_EVIDENCE: f64 = 1e-9;

/// Guard on the normalization denominator.
const NORM_EPSILON: f64 = 1e-12;

/// Process-wide prior belief over situational states. Sums to 1.0.
pub fn default_priors() -> StateMap {
    StateMap::from([
        (SituationState::Stable, 0.45),
        (SituationState::Elevated, 0.30),
        (SituationState::HighLoad, 0.15),
        (SituationState::Critical, 0.10),
    ])
}

/// Per-state unnormalized likelihoods from the current cycle's signals.
///
/// Inputs are clamped to their documented ranges (clarity to [0,100],
/// workload and comms to [0,1]) before exponentiation, so the output is
/// always strictly positive and finite. The conflict term combines current
/// and predicted conflicts.
pub fn compute_evidence(
    clarity_pct: f64,
    conflicts_now: usize,
    predicted_conflicts: usize,
    workload_index: f64,
    comms_fraction: f64,
) -> StateMap {
    let c = clarity_pct.clamp(0.0, 100.0) / 100.0;
    let load = workload_index.clamp(0.0, 1.0);
    let comms = comms_fraction.clamp(0.0, 1.0);
    let conflict_term = (conflicts_now + predicted_conflicts) as f64;
    let predicted = predicted_conflicts as f64;

    StateMap::from([
        (
            SituationState::Stable,
            (2.0 * c - 0.5 * conflict_term - 0.5 * load).exp(),
        ),
        (
            SituationState::Elevated,
            (1.0 * load + 0.3 * conflict_term + 0.5 * comms).exp(),
        ),
        (
            SituationState::HighLoad,
            (1.5 * load + 0.7 * comms + 0.5 * predicted).exp(),
        ),
        (
            SituationState::Critical,
            (2.0 * (1.0 - c) + 0.8 * conflict_term + 0.5 * load).exp(),
        ),
    ])
}

/// Fuse priors with evidence into a normalized posterior.
///
/// Each prior is scaled by its evidence likelihood; the denominator carries
/// a tiny epsilon so a degenerate all-zero evidence map cannot divide by
/// zero. The result sums to 1.0 within floating-point tolerance.
pub fn bayesian_fuse(priors: &StateMap, evidence: &StateMap) -> StateMap {
    let unnormalized: StateMap = priors
        .iter()
        .map(|(&state, &prior)| {
            let likelihood = evidence.get(&state).copied().unwrap_or(MISSING_EVIDENCE);
            (state, prior * likelihood)
        })
        .collect();

    let total: f64 = unnormalized.values().sum::<f64>() + NORM_EPSILON;
    unnormalized.into_iter().map(|(s, v)| (s, v / total)).collect()
}

/// Arg-max of the posterior. Exact ties resolve to the earlier state in
/// declaration order.
pub fn most_likely_state(posterior: &StateMap) -> SituationState {
    let mut best = SituationState::Stable;
    let mut best_p = f64::NEG_INFINITY;
    for state in SituationState::ALL {
        let p = posterior.get(&state).copied().unwrap_or(0.0);
        if p > best_p {
            best = state;
            best_p = p;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priors_sum_to_one() {
        let total: f64 = default_priors().values().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn evidence_is_strictly_positive() {
        for (clarity, conflicts, pred, load, comms) in [
            (100.0, 0, 0, 0.0, 0.0),
            (0.0, 10, 10, 1.0, 1.0),
            (55.0, 2, 1, 0.6, 0.12),
            // Out-of-domain inputs are clamped, not propagated
            (-50.0, 0, 0, 7.0, -3.0),
        ] {
            let evidence = compute_evidence(clarity, conflicts, pred, load, comms);
            assert_eq!(evidence.len(), 4);
            for (&state, &value) in &evidence {
                assert!(value > 0.0 && value.is_finite(), "{state}: {value}");
            }
        }
    }

    #[test]
    fn posterior_is_normalized() {
        let evidence = compute_evidence(42.0, 3, 2, 0.8, 0.2);
        let posterior = bayesian_fuse(&default_priors(), &evidence);
        let total: f64 = posterior.values().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn uniform_update_reproduces_the_priors() {
        let priors = default_priors();
        let evidence: StateMap = SituationState::ALL.iter().map(|&s| (s, 1.0)).collect();
        let posterior = bayesian_fuse(&priors, &evidence);
        for state in SituationState::ALL {
            assert!((posterior[&state] - priors[&state]).abs() < 1e-9);
        }
    }

    #[test]
    fn missing_evidence_dampens_but_does_not_zero() {
        let priors = default_priors();
        let mut evidence = compute_evidence(80.0, 0, 0, 0.2, 0.1);
        evidence.remove(&SituationState::Critical);
        let posterior = bayesian_fuse(&priors, &evidence);
        let critical = posterior[&SituationState::Critical];
        assert!(critical > 0.0);
        assert!(critical < 1e-6);
        let total: f64 = posterior.values().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn conflicts_and_workload_push_critical_up_and_stable_down() {
        let calm = compute_evidence(70.0, 0, 0, 0.2, 0.1);
        let busy = compute_evidence(70.0, 3, 1, 0.2, 0.1);
        assert!(busy[&SituationState::Critical] > calm[&SituationState::Critical]);
        assert!(busy[&SituationState::Stable] < calm[&SituationState::Stable]);

        let loaded = compute_evidence(70.0, 0, 0, 0.9, 0.1);
        assert!(loaded[&SituationState::Critical] > calm[&SituationState::Critical]);
        assert!(loaded[&SituationState::Stable] < calm[&SituationState::Stable]);
    }

    #[test]
    fn calm_inputs_select_stable() {
        let evidence = compute_evidence(100.0, 0, 0, 0.1, 0.05);
        let posterior = bayesian_fuse(&default_priors(), &evidence);
        assert_eq!(most_likely_state(&posterior), SituationState::Stable);
    }

    #[test]
    fn saturated_inputs_select_critical() {
        let evidence = compute_evidence(0.0, 6, 4, 1.0, 0.25);
        let posterior = bayesian_fuse(&default_priors(), &evidence);
        assert_eq!(most_likely_state(&posterior), SituationState::Critical);
    }

    #[test]
    fn exact_tie_resolves_to_declaration_order() {
        let posterior: StateMap = SituationState::ALL.iter().map(|&s| (s, 0.25)).collect();
        assert_eq!(most_likely_state(&posterior), SituationState::Stable);
    }
}
