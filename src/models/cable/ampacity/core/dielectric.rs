//! Dielectric (insulation) losses.

use std::f64::consts::PI;

use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Frequency, Length},
    frequency::hertz,
};

use crate::support::units::{LinearPowerDensity, watt_per_meter};

use super::input::InsulationSpec;

/// Permittivity of free space, F/m.
const EPSILON_0: f64 = 8.854e-12;

/// Dielectric loss per unit length.
///
/// Capacitance of the coaxial insulation
/// `C = 2π·ε0·εᵣ / ln(Di/dc)` (F/m), then `Wd = ω·C·U0²·tan δ`. The
/// dielectric span runs from the conductor to the diameter over the
/// insulation; input validation guarantees `Di > dc`. Voltage-squared
/// scaling makes this the dominant fixed loss on high-voltage cables.
#[must_use]
pub fn dielectric_loss(
    insulation: &InsulationSpec,
    conductor_diameter: Length,
    voltage: ElectricPotential,
    frequency: Frequency,
) -> LinearPowerDensity {
    let d_c = conductor_diameter;
    let d_i = conductor_diameter + 2.0 * insulation.thickness;

    let capacitance =
        2.0 * PI * EPSILON_0 * insulation.resolved_permittivity() / (d_i / d_c).value.ln();

    let omega = 2.0 * PI * frequency.get::<hertz>();
    let u0 = voltage.get::<volt>();

    watt_per_meter(omega * capacitance * u0.powi(2) * insulation.resolved_tan_delta())
}
