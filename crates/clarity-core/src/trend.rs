//! Near-term conflict forecasting by linear extrapolation.

use crate::rules::AirspaceRules;

/// Minimum history before any forecast is attempted.
const MIN_HISTORY: usize = 4;

/// Forecast with the default trailing window.
pub fn predict_conflicts(history: &[usize]) -> usize {
    predict_conflicts_windowed(history, AirspaceRules::default().history_window)
}

/// Forecast the near-term conflict count from the history of per-cycle
/// conflict counts.
///
/// Fits an ordinary-least-squares line to the last `window` entries against
/// their index positions 0..k-1 and evaluates it at k+1, one step beyond the
/// end of the window. Fewer than four entries yield 0 (no forecast), and
/// negative extrapolations clamp to 0.
pub fn predict_conflicts_windowed(history: &[usize], window: usize) -> usize {
    if history.len() < MIN_HISTORY {
        return 0;
    }

    let recent = &history[history.len().saturating_sub(window)..];
    let k = recent.len() as f64;

    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for (i, &y) in recent.iter().enumerate() {
        let x = i as f64;
        let y = y as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    // The window always has >= 4 distinct x positions, so the fit is
    // well-posed; fail closed anyway rather than divide by zero.
    let denom = k * sum_xx - sum_x * sum_x;
    if denom.abs() < f64::EPSILON {
        return 0;
    }

    let m = (k * sum_xy - sum_x * sum_y) / denom;
    let b = (sum_y - m * sum_x) / k;

    let forecast = m * (k + 1.0) + b;
    if forecast.is_finite() && forecast > 0.0 {
        forecast.round() as usize
    } else {
        0
    }
}
