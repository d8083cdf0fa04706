//! Duct air gap, duct wall, and concrete envelope resistances (R3, R_concrete).

use std::f64::consts::PI;

use crate::support::materials::ConduitMaterial;

/// Mean temperature assumed in the duct air gap, °C.
const DUCT_AIR_MEAN_TEMP_C: f64 = 40.0;

/// Convective resistance of the air gap between cable and duct wall, K·m/W.
///
/// IEC 60287-2-1 empirical form `U/(1 + 0.1·(V + Y·θm)·De)` with `De` the
/// cable outer diameter in mm and material constants for the duct type.
#[must_use]
pub fn air_gap_resistance(cable_od_mm: f64, material: ConduitMaterial) -> f64 {
    let (u, v, y) = material.air_gap_constants();
    u / (1.0 + 0.1 * (v + y * DUCT_AIR_MEAN_TEMP_C) * cable_od_mm)
}

/// Conduction resistance of the duct wall, K·m/W.
#[must_use]
pub fn wall_resistance(inner_mm: f64, outer_mm: f64, wall_resistivity: f64) -> f64 {
    (wall_resistivity / (2.0 * PI)) * (outer_mm / inner_mm).ln()
}

/// Geometric factor for a duct inside a rectangular concrete envelope.
///
/// Kennelly-style factor for a cylindrical source in an isothermal
/// rectangle: `G = ln(gmean(2·d)/r)` over the four boundary distances, each
/// floor-clamped to `1.1·r` so a duct against a wall keeps a physical gap.
/// Strongly elongated envelopes (aspect ratio outside [0.5, 2]) conduct
/// less like the ideal rectangle, so G is scaled up with the excess ratio.
#[must_use]
pub fn concrete_geometric_factor(
    boundary_distances_m: [f64; 4],
    duct_radius_m: f64,
    bank_width_m: f64,
    bank_height_m: f64,
) -> f64 {
    let floor = 1.1 * duct_radius_m;
    let gmean = boundary_distances_m
        .iter()
        .map(|d| 2.0 * d.max(floor))
        .product::<f64>()
        .powf(0.25);

    let mut g = (gmean / duct_radius_m).ln();

    let ratio = bank_width_m / bank_height_m;
    let elongation = ratio.max(1.0 / ratio);
    if elongation > 2.0 {
        g *= 1.0 + 0.1 * (elongation - 2.0);
    }

    g
}

/// Concrete envelope resistance, K·m/W.
#[must_use]
pub fn concrete_resistance(concrete_resistivity: f64, geometric_factor: f64) -> f64 {
    (concrete_resistivity / (2.0 * PI)) * geometric_factor
}
