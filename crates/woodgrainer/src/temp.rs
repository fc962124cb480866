//! Randomized temperature selection and command rendering.

use rand::Rng;

/// Pick a target temperature within `[min_temp, max_temp]`.
///
/// The draw is uniform across the range, then blended toward the range
/// midpoint by `1 - intensity/100`: intensity 0 pins the midpoint, 100
/// keeps the full uniform spread. Intensities above 100 saturate at 100.
///
/// The result never leaves the closed range. A degenerate or inverted
/// range collapses to `min_temp`.
pub fn sample_temp<R: Rng + ?Sized>(
    rng: &mut R,
    min_temp: u32,
    max_temp: u32,
    intensity: u32,
) -> u32 {
    if min_temp >= max_temp {
        return min_temp;
    }

    let raw = rng.gen_range(min_temp..=max_temp) as f64;
    let mid = f64::from(min_temp) + f64::from(max_temp - min_temp) / 2.0;
    let blend = f64::from(intensity.min(100)) / 100.0;
    let value = mid + (raw - mid) * blend;

    (value.round() as u32).clamp(min_temp, max_temp)
}

/// Render the command that sets the extruder target temperature.
pub fn temp_change_line(temp: u32) -> String {
    format!("M104 S{}", temp)
}
