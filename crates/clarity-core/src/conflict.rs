//! Pairwise separation conflict detection.

use crate::models::{AircraftRecord, ConflictRecord, ConflictSeverity};
use crate::rules::AirspaceRules;
use crate::spatial::lateral_distance_nm;

/// Detect all separation conflicts in a batch using default rules.
pub fn detect_conflicts(aircraft: &[AircraftRecord]) -> Vec<ConflictRecord> {
    detect_conflicts_with_rules(aircraft, &AirspaceRules::default())
}

/// Detect all separation conflicts in a batch.
///
/// Aircraft are sorted by id and every unordered pair is considered exactly
/// once (i < j over the sorted list), so `plane_a < plane_b` in every record
/// and the output is deterministic for a given set regardless of input
/// order. A pair conflicts only when BOTH the vertical and lateral minima
/// are violated; severity escalates to loss-of-separation when both
/// half-minima are violated as well.
///
/// O(n²) over the batch, fine for the simulated traffic levels.
pub fn detect_conflicts_with_rules(
    aircraft: &[AircraftRecord],
    rules: &AirspaceRules,
) -> Vec<ConflictRecord> {
    let mut sorted: Vec<&AircraftRecord> = aircraft.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));

    let mut conflicts = Vec::new();
    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            let (p1, p2) = (sorted[i], sorted[j]);

            let alt_sep_ft = (p1.altitude_ft - p2.altitude_ft).abs();
            if alt_sep_ft >= rules.alt_separation_ft {
                continue;
            }

            let dist_nm = lateral_distance_nm(p1.lat, p1.lon, p2.lat, p2.lon, rules.center_lat);
            if dist_nm >= rules.lateral_separation_nm {
                continue;
            }

            // Severity is judged on the unrounded distance.
            let severity = if alt_sep_ft < rules.loss_alt_separation_ft()
                && dist_nm < rules.loss_lateral_separation_nm()
            {
                ConflictSeverity::LossOfSeparation
            } else {
                ConflictSeverity::Proximity
            };

            conflicts.push(ConflictRecord {
                plane_a: p1.id.clone(),
                plane_b: p2.id.clone(),
                alt_sep_ft,
                lat_dist_nm: (dist_nm * 100.0).round() / 100.0,
                severity,
            });
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Destination;

    fn plane(id: &str, altitude_ft: i32, lat: f64, lon: f64) -> AircraftRecord {
        AircraftRecord {
            id: id.to_string(),
            altitude_ft,
            speed_kt: 300,
            lat,
            lon,
            heading_deg: 90,
            destination: Destination::Ind,
        }
    }

    #[test]
    fn close_pair_is_a_loss_of_separation() {
        let planes = vec![
            plane("AC01", 10000, 39.0, -86.0),
            plane("AC02", 10300, 39.001, -86.001),
        ];
        let conflicts = detect_conflicts(&planes);
        assert_eq!(conflicts.len(), 1);
        let c = &conflicts[0];
        assert_eq!(c.plane_a, "AC01");
        assert_eq!(c.plane_b, "AC02");
        assert_eq!(c.alt_sep_ft, 300);
        assert!(c.lat_dist_nm < 1.5);
        assert_eq!(c.severity, ConflictSeverity::LossOfSeparation);
    }

    #[test]
    fn detection_is_invariant_to_input_order() {
        let mut planes = vec![
            plane("AC03", 21000, 39.01, -86.01),
            plane("AC01", 10000, 39.0, -86.0),
            plane("AC02", 10300, 39.001, -86.001),
        ];
        let forward = detect_conflicts(&planes);
        planes.reverse();
        let reversed = detect_conflicts(&planes);
        assert_eq!(forward, reversed);
        assert_eq!(forward.len(), 1);
    }

    #[test]
    fn altitude_alone_is_not_a_conflict() {
        // Same altitude but ~12 NM apart laterally
        let planes = vec![
            plane("AC01", 10000, 39.0, -86.0),
            plane("AC02", 10000, 39.2, -86.0),
        ];
        assert!(detect_conflicts(&planes).is_empty());
    }

    #[test]
    fn lateral_proximity_alone_is_not_a_conflict() {
        let planes = vec![
            plane("AC01", 10000, 39.0, -86.0),
            plane("AC02", 20000, 39.0, -86.0),
        ];
        assert!(detect_conflicts(&planes).is_empty());
    }

    #[test]
    fn proximity_severity_between_half_and_full_minima() {
        // 600 ft vertical, well inside 3 NM but outside the half thresholds
        let planes = vec![
            plane("AC01", 10000, 39.0, -86.0),
            plane("AC02", 10600, 39.03, -86.0),
        ];
        let conflicts = detect_conflicts(&planes);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, ConflictSeverity::Proximity);
    }

    #[test]
    fn no_self_pairs_and_no_duplicates() {
        let planes = vec![
            plane("AC01", 10000, 39.0, -86.0),
            plane("AC02", 10100, 39.0005, -86.0005),
            plane("AC03", 10200, 39.001, -86.001),
        ];
        let conflicts = detect_conflicts(&planes);
        assert_eq!(conflicts.len(), 3);
        for c in &conflicts {
            assert!(c.plane_a < c.plane_b);
        }
        let mut pairs: Vec<(&str, &str)> = conflicts
            .iter()
            .map(|c| (c.plane_a.as_str(), c.plane_b.as_str()))
            .collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn empty_and_single_batches_yield_nothing() {
        assert!(detect_conflicts(&[]).is_empty());
        assert!(detect_conflicts(&[plane("AC01", 10000, 39.0, -86.0)]).is_empty());
    }

    #[test]
    fn reported_distance_is_rounded_to_two_decimals() {
        let planes = vec![
            plane("AC01", 10000, 39.0, -86.0),
            plane("AC02", 10300, 39.0123, -86.0),
        ];
        let conflicts = detect_conflicts(&planes);
        assert_eq!(conflicts.len(), 1);
        let d = conflicts[0].lat_dist_nm;
        assert!(((d * 100.0).round() / 100.0 - d).abs() < 1e-12);
    }
}
