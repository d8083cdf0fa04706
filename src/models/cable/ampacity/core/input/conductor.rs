use uom::si::f64::{Area, Length};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    materials::{ConductorMaterial, Stranding},
    units::ResistancePerLength,
};

use super::super::error::InputError;

/// Phase arrangement of the cables in a circuit.
///
/// Affects the proximity effect: a flat formation heats its center cable
/// from both sides, which the calculation captures with an averaging
/// multiplier over the three positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arrangement {
    #[default]
    Trefoil,
    Flat,
}

/// Specification of the cable conductor.
///
/// Skin and proximity effect factors are resolved in order of precedence:
/// a direct `ycs`/`ycp` override wins outright; otherwise the IEC formula
/// runs with the user-supplied `ks`/`kp` or the stranding defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductorSpec {
    pub material: ConductorMaterial,
    /// Cross-sectional area.
    pub cross_section: Area,
    /// Conductor diameter.
    pub diameter: Length,
    pub stranding: Stranding,
    /// Manufacturer DC resistance at 20 °C, if known.
    pub dc_resistance_20c: Option<ResistancePerLength>,
    /// Skin effect coefficient override.
    pub ks: Option<f64>,
    /// Proximity effect coefficient override.
    pub kp: Option<f64>,
    /// Direct skin effect factor override (e.g., from measurement).
    pub ycs_override: Option<f64>,
    /// Direct proximity effect factor override.
    pub ycp_override: Option<f64>,
}

impl ConductorSpec {
    #[must_use]
    pub fn new(
        material: ConductorMaterial,
        cross_section: Area,
        diameter: Length,
        stranding: Stranding,
    ) -> Self {
        Self {
            material,
            cross_section,
            diameter,
            stranding,
            dc_resistance_20c: None,
            ks: None,
            kp: None,
            ycs_override: None,
            ycp_override: None,
        }
    }

    /// Sets a manufacturer DC resistance at 20 °C.
    #[must_use]
    pub fn with_dc_resistance_20c(mut self, resistance: ResistancePerLength) -> Self {
        self.dc_resistance_20c = Some(resistance);
        self
    }

    /// Sets measured skin and proximity effect coefficients.
    #[must_use]
    pub fn with_coefficients(mut self, ks: f64, kp: f64) -> Self {
        self.ks = Some(ks);
        self.kp = Some(kp);
        self
    }

    /// Sets direct skin and proximity effect factor overrides, bypassing the
    /// formulas entirely.
    #[must_use]
    pub fn with_effect_overrides(mut self, ycs: f64, ycp: f64) -> Self {
        self.ycs_override = Some(ycs);
        self.ycp_override = Some(ycp);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), InputError> {
        if StrictlyPositive::check(&self.cross_section.value).is_err() {
            return Err(InputError::NotStrictlyPositive {
                field: "conductor cross section",
            });
        }
        if StrictlyPositive::check(&self.diameter.value).is_err() {
            return Err(InputError::NotStrictlyPositive {
                field: "conductor diameter",
            });
        }
        if let Some(r) = self.dc_resistance_20c
            && StrictlyPositive::check(&r.value).is_err()
        {
            return Err(InputError::NotStrictlyPositive {
                field: "conductor DC resistance",
            });
        }
        for (value, field) in [(self.ks, "ks"), (self.kp, "kp")] {
            if let Some(k) = value
                && StrictlyPositive::check(&k).is_err()
            {
                return Err(InputError::NotStrictlyPositive { field });
            }
        }
        for (value, field) in [
            (self.ycs_override, "ycs override"),
            (self.ycp_override, "ycp override"),
        ] {
            if let Some(y) = value
                && y < 0.0
            {
                return Err(InputError::Negative { field });
            }
        }
        Ok(())
    }
}
