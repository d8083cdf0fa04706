//! Thermal resistance of the cable's own layers (R1, R2).

use std::f64::consts::PI;

use uom::si::length::millimeter;

use super::super::input::{CableSpec, Geometry};

/// Insulation thermal resistance R1, K·m/W.
///
/// `(ρ/2π)·ln(Di/dc)` with the span running from the conductor to the
/// diameter over the insulation screen: the semiconducting conductor shield
/// and insulation screen conduct heat like the insulation and belong to the
/// same span.
#[must_use]
pub fn insulation_resistance(cable: &CableSpec, geometry: &Geometry) -> f64 {
    let rho = cable.insulation.resolved_thermal_resistivity();
    let d_c = geometry.conductor_diameter().get::<millimeter>();
    let d_i = geometry.insulation_screen_od().get::<millimeter>();

    (rho / (2.0 * PI)) * (d_i / d_c).ln()
}

/// Jacket thermal resistance R2, K·m/W.
///
/// `(ρ/2π)·ln(De/Ds)`; zero for an unjacketed cable.
#[must_use]
pub fn jacket_resistance(cable: &CableSpec, geometry: &Geometry) -> f64 {
    if cable.jacket_thickness.value == 0.0 {
        return 0.0;
    }

    let rho = cable.resolved_jacket_resistivity();
    let d_s = geometry.shield_od().get::<millimeter>();
    let d_e = geometry.overall_diameter().get::<millimeter>();

    (rho / (2.0 * PI)) * (d_e / d_s).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_millimeter,
        f64::{Area, Length},
    };

    use crate::support::materials::{ConductorMaterial, InsulationMaterial, JacketMaterial, Stranding};
    use crate::support::units::kelvin_meter_per_watt;

    use super::super::super::input::{ConductorSpec, InsulationSpec};

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    fn cable(jacket_mm: f64) -> CableSpec {
        CableSpec::new(
            ConductorSpec::new(
                ConductorMaterial::Copper,
                Area::new::<square_millimeter>(1000.0),
                mm(35.7),
                Stranding::StrandedCompact,
            ),
            InsulationSpec::new(InsulationMaterial::Xlpe, mm(15.0)),
            mm(jacket_mm),
            JacketMaterial::Pe,
        )
    }

    #[test]
    fn insulation_resistance_matches_log_formula() {
        let cable = cable(3.0);
        let geometry = cable.geometry();
        let expected = (3.5 / (2.0 * PI)) * (65.7f64 / 35.7).ln();
        assert_relative_eq!(
            insulation_resistance(&cable, &geometry),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn semiconducting_layers_widen_the_span() {
        let bare = cable(3.0);
        let screened = cable(3.0).with_semiconducting_layers(mm(1.7), mm(1.7));

        assert!(
            insulation_resistance(&screened, &screened.geometry())
                > insulation_resistance(&bare, &bare.geometry())
        );
    }

    #[test]
    fn no_jacket_means_no_r2() {
        let cable = cable(0.0);
        assert_eq!(jacket_resistance(&cable, &cable.geometry()), 0.0);
    }

    #[test]
    fn jacket_resistivity_override_scales_r2() {
        let standard = cable(3.0);
        let datasheet = cable(3.0).with_jacket_resistivity(kelvin_meter_per_watt(7.0));
        let geometry = standard.geometry();

        assert_relative_eq!(
            jacket_resistance(&datasheet, &geometry),
            jacket_resistance(&standard, &geometry) * 2.0,
            max_relative = 1e-12
        );
    }
}
