//! External (earth) thermal resistance R4 and single-circuit mutual heating.

use std::f64::consts::PI;

/// Earth thermal resistance of a buried cylindrical source, K·m/W.
///
/// Neher-McGrath: with `u = 2L/De`, the full form
/// `(ρ/2π)·ln(u + √(u² − 1))` for shallow burial and the classical
/// `(ρ/2π)·ln(4L/De)` simplification once `u > 10` (the two agree to four
/// significant figures at the handover).
#[must_use]
pub fn earth_resistance(soil_resistivity: f64, depth_m: f64, source_diameter_m: f64) -> f64 {
    let u = 2.0 * depth_m / source_diameter_m;
    if u > 10.0 {
        (soil_resistivity / (2.0 * PI)) * (4.0 * depth_m / source_diameter_m).ln()
    } else {
        (soil_resistivity / (2.0 * PI)) * (u + (u.powi(2) - 1.0).sqrt()).ln()
    }
}

/// Mutual-heating increment from one neighbor at the given spacing, K·m/W.
///
/// Image method: `Δ = (ρ/2π)·ln(d'/d)` where `d' = √(d² + (2L)²)` is the
/// distance to the neighbor's mirror image above the ground surface.
#[must_use]
pub fn neighbor_increment(soil_resistivity: f64, spacing_m: f64, depth_m: f64) -> f64 {
    let d = spacing_m;
    let d_image = (spacing_m.powi(2) + (2.0 * depth_m).powi(2)).sqrt();
    (soil_resistivity / (2.0 * PI)) * (d_image / d).ln()
}

/// Mutual heating factor for a trefoil circuit, `F = 1 + 2Δ/R4`.
///
/// Trefoil approximation: each cable has two adjacent cables at the phase
/// spacing. Never below one.
#[must_use]
pub fn trefoil_mutual_factor(soil_resistivity: f64, spacing_m: f64, depth_m: f64, r4: f64) -> f64 {
    let delta = neighbor_increment(soil_resistivity, spacing_m, depth_m);
    (1.0 + 2.0 * delta / r4).max(1.0)
}

/// Mutual heating factor for a flat row of `count` equally spaced sources.
///
/// Seen from the center position (the hottest), the neighbors sit at
/// integer multiples of the spacing; their increments sum. A row of three
/// reduces to the trefoil form. Never below one.
#[must_use]
pub fn row_mutual_factor(
    soil_resistivity: f64,
    spacing_m: f64,
    depth_m: f64,
    count: usize,
    r4: f64,
) -> f64 {
    if count < 2 || spacing_m == 0.0 {
        return 1.0;
    }

    let center = count / 2;
    let delta: f64 = (0..count)
        .filter(|&j| j != center)
        .map(|j| {
            let distance = center.abs_diff(j) as f64 * spacing_m;
            neighbor_increment(soil_resistivity, distance, depth_m)
        })
        .sum();

    (1.0 + delta / r4).max(1.0)
}
