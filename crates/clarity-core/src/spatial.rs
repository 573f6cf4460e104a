//! Spatial math for lateral separation.

/// Nautical miles per degree of latitude.
const NM_PER_DEG_LAT: f64 = 60.0;

/// Lateral distance in nautical miles between two points, using an
/// equirectangular flat-earth approximation.
///
/// Longitude deltas are scaled by the cosine of `ref_lat`, the fixed center
/// of the simulated area, not either point's own latitude. The conflict
/// thresholds were tuned against this approximation; it is only valid for
/// the bounded local area the generator produces, and must not be swapped
/// for a geodesic formula.
pub fn lateral_distance_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64, ref_lat: f64) -> f64 {
    let dlat_nm = (lat2 - lat1) * NM_PER_DEG_LAT;
    let dlon_nm = (lon2 - lon1) * NM_PER_DEG_LAT * ref_lat.to_radians().cos();
    (dlat_nm.powi(2) + dlon_nm.powi(2)).sqrt()
}
