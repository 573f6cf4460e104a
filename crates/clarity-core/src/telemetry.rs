//! Synthetic aircraft telemetry generation.
//!
//! All randomness flows through an explicitly passed RNG so callers choose
//! between reproducible (seeded) and live (entropy-seeded) batches; there is
//! no hidden global source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{AircraftRecord, Destination};
use crate::rules::AirspaceRules;

/// Generate `n` aircraft records using the provided RNG.
///
/// Each field is drawn independently and uniformly within its documented
/// range; positions are jittered around the rules' center point. Ids are
/// `AC01`, `AC02`, ... and are unique within the batch.
pub fn generate_aircraft_with<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    rules: &AirspaceRules,
) -> Vec<AircraftRecord> {
    let jitter = rules.position_jitter_deg;
    (0..n)
        .map(|i| AircraftRecord {
            id: format!("AC{:02}", i + 1),
            altitude_ft: rng.random_range(2000..=38000),
            speed_kt: rng.random_range(250..=520),
            lat: rules.center_lat + rng.random_range(-jitter..=jitter),
            lon: rules.center_lon + rng.random_range(-jitter..=jitter),
            heading_deg: rng.random_range(0..=359),
            destination: Destination::ALL[rng.random_range(0..Destination::ALL.len())],
        })
        .collect()
}

/// Generate `n` aircraft with default rules, seeded or entropy-backed.
///
/// A given seed always reproduces the same batch; `None` draws a fresh
/// RNG from OS entropy.
pub fn generate_aircraft(n: usize, seed: Option<u64>) -> Vec<AircraftRecord> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_aircraft_with(&mut rng, n, &AirspaceRules::default())
}
