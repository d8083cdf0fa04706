//! Shield/sheath losses.
//!
//! The shield loss factor λ1 scales the conductor loss into the heat
//! generated in the metallic shield. Its circulating-current part exists
//! only when the bonding scheme closes a loop (both-ends or cross-bonded);
//! the eddy-current part is always present but small for thin sheaths.

use std::f64::consts::PI;

use uom::si::{
    f64::{Frequency, Length, ThermodynamicTemperature},
    frequency::hertz,
    length::millimeter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{ResistancePerLength, ohm_per_meter};

use super::input::{Bonding, ShieldSpec};

/// Shield temperature assumed while rating, °C.
///
/// The shield runs cooler than the conductor; a fixed reference keeps the
/// loss factor out of the conductor-temperature fixed point.
pub(crate) const SHEATH_REFERENCE_TEMP_C: f64 = 75.0;

/// Shield resistance at the given temperature.
///
/// Uses the manufacturer 20 °C value when supplied, otherwise the thin
/// annulus approximation `ρ/(π·Ds·ts)`, then the linear temperature
/// correction for the sheath metal.
#[must_use]
pub fn shield_resistance(
    shield: &ShieldSpec,
    temperature: ThermodynamicTemperature,
) -> ResistancePerLength {
    let r20 = shield.resistance_20c.map_or_else(
        || {
            let d_s = shield.mean_diameter.value;
            let t_s = shield.thickness.value;
            shield.material.resistivity_20c() / (PI * d_s * t_s)
        },
        |r| r.value,
    );

    let alpha = shield.material.temperature_coefficient();
    let t = temperature.get::<degree_celsius>();

    ohm_per_meter(r20 * (1.0 + alpha * (t - 20.0)))
}

/// Shield loss factor λ1.
///
/// Single-point bonding leaves only the eddy term. Both-ends bonding adds
/// the circulating-current term
/// `λ1' = (Rs/Rac)·1/(1 + (Rs/Xs)²)`, with the shield reactance derived
/// from its mean diameter and the phase spacing. Cross bonding keeps the
/// loop closed but transposition cancels most of the circulating current;
/// the term is scaled by the 0.1 residual factor.
#[must_use]
pub fn shield_loss_factor(
    shield: &ShieldSpec,
    conductor_rac: ResistancePerLength,
    spacing: Length,
    frequency: Frequency,
    temperature: ThermodynamicTemperature,
) -> f64 {
    let eddy = eddy_current_loss_factor(shield, spacing);
    if shield.bonding == Bonding::SinglePoint {
        return eddy;
    }

    let rs = shield_resistance(shield, temperature).value;

    let d_s = shield.mean_diameter.get::<millimeter>();
    let s = effective_spacing(shield, spacing);

    let xs = 2.0 * PI * frequency.get::<hertz>() * 2e-7 * (2.0 * s / d_s).ln() * 1e3;

    let mut circulating = if xs > 0.0 {
        (rs / conductor_rac.value) / (1.0 + (rs / xs).powi(2))
    } else {
        0.0
    };

    if shield.bonding == Bonding::CrossBonded {
        circulating *= 0.1;
    }

    circulating + eddy
}

/// Eddy current loss factor λ1''.
///
/// Thin-sheath approximation `0.01·(ts/Ds)²·(Ds/s)²`.
fn eddy_current_loss_factor(shield: &ShieldSpec, spacing: Length) -> f64 {
    let d_s = shield.mean_diameter.get::<millimeter>();
    let t_s = shield.thickness.get::<millimeter>();
    let s = effective_spacing(shield, spacing);

    0.01 * (t_s / d_s).powi(2) * (d_s / s).powi(2)
}

/// Phase spacing for shield formulas, falling back to twice the shield
/// diameter when no spacing is given.
fn effective_spacing(shield: &ShieldSpec, spacing: Length) -> f64 {
    let s = spacing.get::<millimeter>();
    if s > 0.0 {
        s
    } else {
        2.0 * shield.mean_diameter.get::<millimeter>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::materials::SheathMaterial;

    use super::super::input::ShieldConstruction;

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    fn shield(bonding: Bonding) -> ShieldSpec {
        ShieldSpec::new(
            SheathMaterial::Copper,
            ShieldConstruction::Wire,
            mm(1.5),
            mm(45.0),
            bonding,
        )
    }

    fn reference_temp() -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(SHEATH_REFERENCE_TEMP_C)
    }

    #[test]
    fn resistance_from_annulus_geometry() {
        let s = shield(Bonding::SinglePoint);
        let r20 = 1.7241e-8 / (PI * 0.045 * 0.0015);
        assert_relative_eq!(
            shield_resistance(&s, ThermodynamicTemperature::new::<degree_celsius>(20.0)).value,
            r20,
            max_relative = 1e-12
        );
    }

    #[test]
    fn manufacturer_resistance_wins() {
        let s = shield(Bonding::SinglePoint).with_resistance_20c(ohm_per_meter(1.0e-4));
        assert_relative_eq!(
            shield_resistance(&s, ThermodynamicTemperature::new::<degree_celsius>(20.0)).value,
            1.0e-4,
            max_relative = 1e-9
        );
    }

    #[test]
    fn both_ends_bonding_loses_more_than_single_point() {
        let rac = ohm_per_meter(2.5e-5);
        let spacing = mm(200.0);
        let f = Frequency::new::<hertz>(50.0);

        let single = shield_loss_factor(
            &shield(Bonding::SinglePoint),
            rac,
            spacing,
            f,
            reference_temp(),
        );
        let both = shield_loss_factor(&shield(Bonding::BothEnds), rac, spacing, f, reference_temp());
        let cross = shield_loss_factor(
            &shield(Bonding::CrossBonded),
            rac,
            spacing,
            f,
            reference_temp(),
        );

        assert!(both > single);
        assert!(cross > single);
        assert!(cross < both);
    }

    #[test]
    fn eddy_term_is_small_for_thin_sheaths() {
        let lambda = shield_loss_factor(
            &shield(Bonding::SinglePoint),
            ohm_per_meter(2.5e-5),
            mm(200.0),
            Frequency::new::<hertz>(50.0),
            reference_temp(),
        );
        assert!(lambda > 0.0);
        assert!(lambda < 0.01);
    }
}
