//! Conductor DC and AC resistance.
//!
//! AC resistance follows IEC 60287-1-1: the DC resistance at the operating
//! temperature, increased by the skin effect factor `ycs` and the proximity
//! effect factor `ycp`. Formulas operate on Ω/m, mm, and Hz, the units the
//! standard states them in.

use std::f64::consts::PI;

use uom::si::{
    f64::{Frequency, Length, ThermodynamicTemperature},
    frequency::hertz,
    length::millimeter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{ResistancePerLength, ohm_per_meter};

use super::input::{Arrangement, ConductorSpec};
use super::results::AcResistance;

/// DC resistance at the given conductor temperature.
///
/// Uses the manufacturer 20 °C value when supplied, otherwise resistivity
/// over area, then applies the linear correction
/// `r(T) = r20·(1 + α·(T − 20))`.
#[must_use]
pub fn dc_resistance(
    conductor: &ConductorSpec,
    temperature: ThermodynamicTemperature,
) -> ResistancePerLength {
    let r20 = conductor.dc_resistance_20c.map_or_else(
        || conductor.material.resistivity_20c() / conductor.cross_section.value,
        |r| r.value,
    );

    let alpha = conductor.material.temperature_coefficient();
    let t = temperature.get::<degree_celsius>();

    ohm_per_meter(r20 * (1.0 + alpha * (t - 20.0)))
}

/// Skin effect factor `ycs`.
///
/// A direct override bypasses the formula. Otherwise
/// `xs² = (8πf/R'dc)·1e-7·ks` with `ks` from the stranding default unless
/// supplied, and `ycs` follows the three-regime IEC fit, clamped at zero.
#[must_use]
pub fn skin_effect_factor(
    conductor: &ConductorSpec,
    rdc: ResistancePerLength,
    frequency: Frequency,
) -> f64 {
    if let Some(ycs) = conductor.ycs_override {
        return ycs;
    }

    let ks = conductor
        .ks
        .unwrap_or_else(|| conductor.stranding.skin_effect_coefficient());

    let xs_squared = (8.0 * PI * frequency.get::<hertz>() / rdc.value) * 1e-7 * ks;
    let xs = xs_squared.sqrt();

    let ycs = if xs <= 2.8 {
        let xs_4 = xs_squared * xs_squared;
        xs_4 / (192.0 + 0.8 * xs_4)
    } else if xs <= 3.8 {
        -0.136 - 0.0177 * xs + 0.0563 * xs_squared
    } else {
        0.354 * xs - 0.733
    };

    ycs.max(0.0)
}

/// Proximity effect factor `ycp`.
///
/// A direct override bypasses the formula; zero spacing means a single
/// cable with no neighboring phases and returns zero. Otherwise
/// `xp² = (8πf/R'dc)·1e-7·kp` and
/// `ycp = F(xp)·(dc/s)²·[0.312·(dc/s)² + c/(F(xp) + 0.27)]` with
/// `F(xp) = xp⁴/(192 + 0.8·xp⁴)` over the whole range (the piecewise fit
/// applies to the skin effect only). The coefficient `c` is 1.18 for two
/// cables per circuit and 2.9 for three.
///
/// A flat formation multiplies by 4/3: the center cable sees two adjacent
/// phases and the outer cables one each, and (1 + 2 + 1)/3 averages the
/// unequal heating over the circuit.
#[must_use]
pub fn proximity_effect_factor(
    conductor: &ConductorSpec,
    rdc: ResistancePerLength,
    spacing: Length,
    frequency: Frequency,
    arrangement: Arrangement,
    cables_per_circuit: usize,
) -> f64 {
    if let Some(ycp) = conductor.ycp_override {
        return ycp;
    }

    let s = spacing.get::<millimeter>();
    if s == 0.0 {
        return 0.0;
    }

    let kp = conductor
        .kp
        .unwrap_or_else(|| conductor.stranding.proximity_effect_coefficient());

    let xp_squared = (8.0 * PI * frequency.get::<hertz>() / rdc.value) * 1e-7 * kp;
    let xp_4 = xp_squared * xp_squared;
    let f_xp = xp_4 / (192.0 + 0.8 * xp_4);

    let dc_s = conductor.diameter.get::<millimeter>() / s;
    let coeff = if cables_per_circuit == 2 { 1.18 } else { 2.9 };

    let mut ycp = f_xp * dc_s.powi(2) * (0.312 * dc_s.powi(2) + coeff / (f_xp + 0.27));
    if arrangement == Arrangement::Flat {
        ycp *= 4.0 / 3.0;
    }

    ycp.max(0.0)
}

/// AC resistance with its full factor breakdown.
///
/// `rac = rdc·(1 + ycs + ycp)`, never less than `rdc`.
#[must_use]
pub fn ac_resistance(
    conductor: &ConductorSpec,
    temperature: ThermodynamicTemperature,
    spacing: Length,
    frequency: Frequency,
    arrangement: Arrangement,
    cables_per_circuit: usize,
) -> AcResistance {
    let rdc = dc_resistance(conductor, temperature);
    let ycs = skin_effect_factor(conductor, rdc, frequency);
    let ycp = proximity_effect_factor(
        conductor,
        rdc,
        spacing,
        frequency,
        arrangement,
        cables_per_circuit,
    );

    AcResistance {
        rdc,
        rac: ohm_per_meter(rdc.value * (1.0 + ycs + ycp)),
        ycs,
        ycp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_millimeter, f64::Area};

    use crate::support::materials::{ConductorMaterial, Stranding};

    fn conductor_1000mm2() -> ConductorSpec {
        ConductorSpec::new(
            ConductorMaterial::Copper,
            Area::new::<square_millimeter>(1000.0),
            Length::new::<millimeter>(35.7),
            Stranding::StrandedCompact,
        )
    }

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn hz(f: f64) -> Frequency {
        Frequency::new::<hertz>(f)
    }

    fn mm(s: f64) -> Length {
        Length::new::<millimeter>(s)
    }

    #[test]
    fn dc_resistance_applies_temperature_correction() {
        let conductor = conductor_1000mm2();
        let r20 = dc_resistance(&conductor, celsius(20.0));
        let r90 = dc_resistance(&conductor, celsius(90.0));

        assert_relative_eq!(r20.value, 1.7241e-8 / 1e-3, max_relative = 1e-9);
        assert_relative_eq!(
            r90.value,
            r20.value * (1.0 + 0.00393 * 70.0),
            max_relative = 1e-9
        );
    }

    #[test]
    fn manufacturer_resistance_wins() {
        let conductor = conductor_1000mm2().with_dc_resistance_20c(ohm_per_meter(2.0e-5));
        assert_relative_eq!(
            dc_resistance(&conductor, celsius(20.0)).value,
            2.0e-5,
            max_relative = 1e-9
        );
    }

    #[test]
    fn rac_is_never_below_rdc() {
        let conductor = conductor_1000mm2();
        for spacing_mm in [0.0, 100.0, 300.0] {
            let r = ac_resistance(
                &conductor,
                celsius(90.0),
                mm(spacing_mm),
                hz(50.0),
                Arrangement::Trefoil,
                3,
            );
            assert!(r.rac >= r.rdc);
            assert_relative_eq!(r.rac.value, r.rdc.value * (1.0 + r.ycs + r.ycp));
        }
    }

    #[test]
    fn proximity_effect_is_zero_without_spacing() {
        let conductor = conductor_1000mm2();
        let rdc = dc_resistance(&conductor, celsius(90.0));
        assert_eq!(
            proximity_effect_factor(&conductor, rdc, mm(0.0), hz(50.0), Arrangement::Trefoil, 3),
            0.0
        );
    }

    #[test]
    fn skin_effect_fit_is_continuous_at_regime_boundaries() {
        // Pick rdc values that land xs exactly on the boundaries by inverting
        // xs² = (8πf/rdc)·1e-7·ks.
        let f = 50.0;
        for boundary in [2.8_f64, 3.8] {
            let rdc = ohm_per_meter(8.0 * PI * f * 1e-7 / boundary.powi(2));

            let below = ConductorSpec {
                ks: Some(1.0 - 1e-9),
                ..conductor_1000mm2()
            };
            let above = ConductorSpec {
                ks: Some(1.0 + 1e-9),
                ..conductor_1000mm2()
            };

            let ycs_below = skin_effect_factor(&below, rdc, hz(f));
            let ycs_above = skin_effect_factor(&above, rdc, hz(f));
            // The published fits agree to a few parts in a thousand where
            // they hand over.
            assert!(
                (ycs_below - ycs_above).abs() < 5e-3,
                "discontinuity at xs = {boundary}: {ycs_below} vs {ycs_above}"
            );
        }
    }

    #[test]
    fn direct_overrides_bypass_formulas() {
        let conductor = conductor_1000mm2().with_effect_overrides(0.185, 0.02);
        let rdc = dc_resistance(&conductor, celsius(90.0));

        assert_relative_eq!(skin_effect_factor(&conductor, rdc, hz(60.0)), 0.185);
        assert_relative_eq!(
            proximity_effect_factor(&conductor, rdc, mm(0.0), hz(60.0), Arrangement::Trefoil, 3),
            0.02
        );
    }

    #[test]
    fn flat_formation_averages_higher_than_trefoil() {
        let conductor = conductor_1000mm2();
        let rdc = dc_resistance(&conductor, celsius(90.0));

        let trefoil =
            proximity_effect_factor(&conductor, rdc, mm(200.0), hz(50.0), Arrangement::Trefoil, 3);
        let flat =
            proximity_effect_factor(&conductor, rdc, mm(200.0), hz(50.0), Arrangement::Flat, 3);

        assert_relative_eq!(flat, trefoil * 4.0 / 3.0);
    }

    #[test]
    fn segmental_construction_reduces_skin_effect() {
        let stranded = conductor_1000mm2();
        let segmental = ConductorSpec {
            stranding: Stranding::Segmental,
            ..conductor_1000mm2()
        };
        let rdc = dc_resistance(&stranded, celsius(90.0));

        assert!(
            skin_effect_factor(&segmental, rdc, hz(50.0))
                < skin_effect_factor(&stranded, rdc, hz(50.0))
        );

        // Measured coefficients (bare unidirectional wires) land between the
        // conservative segmental default and a plain stranded conductor.
        let measured = segmental.clone().with_coefficients(0.62, 0.37);
        let ycs_measured = skin_effect_factor(&measured, rdc, hz(50.0));
        assert!(ycs_measured > skin_effect_factor(&segmental, rdc, hz(50.0)));
        assert!(ycs_measured < skin_effect_factor(&stranded, rdc, hz(50.0)));
    }
}
