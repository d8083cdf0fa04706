use uom::si::f64::Length;

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    materials::InsulationMaterial,
    units::ThermalResistivity,
};

use super::super::error::InputError;

/// Specification of the cable insulation.
///
/// Dielectric and thermal properties default from the material table and can
/// be overridden individually when datasheet values are available.
#[derive(Debug, Clone, PartialEq)]
pub struct InsulationSpec {
    pub material: InsulationMaterial,
    /// Radial insulation thickness.
    pub thickness: Length,
    /// Loss factor tan δ override.
    pub tan_delta: Option<f64>,
    /// Relative permittivity override.
    pub permittivity: Option<f64>,
    /// Thermal resistivity override.
    pub thermal_resistivity: Option<ThermalResistivity>,
}

impl InsulationSpec {
    #[must_use]
    pub fn new(material: InsulationMaterial, thickness: Length) -> Self {
        Self {
            material,
            thickness,
            tan_delta: None,
            permittivity: None,
            thermal_resistivity: None,
        }
    }

    /// Sets datasheet dielectric properties.
    #[must_use]
    pub fn with_dielectric_properties(mut self, tan_delta: f64, permittivity: f64) -> Self {
        self.tan_delta = Some(tan_delta);
        self.permittivity = Some(permittivity);
        self
    }

    /// Sets a datasheet thermal resistivity.
    #[must_use]
    pub fn with_thermal_resistivity(mut self, resistivity: ThermalResistivity) -> Self {
        self.thermal_resistivity = Some(resistivity);
        self
    }

    /// Resolved loss factor tan δ.
    #[must_use]
    pub fn resolved_tan_delta(&self) -> f64 {
        self.tan_delta.unwrap_or_else(|| self.material.tan_delta())
    }

    /// Resolved relative permittivity.
    #[must_use]
    pub fn resolved_permittivity(&self) -> f64 {
        self.permittivity
            .unwrap_or_else(|| self.material.permittivity())
    }

    /// Resolved thermal resistivity, K·m/W.
    #[must_use]
    pub fn resolved_thermal_resistivity(&self) -> f64 {
        self.thermal_resistivity
            .map_or_else(|| self.material.thermal_resistivity(), |rho| rho.value)
    }

    pub(crate) fn validate(&self, conductor_diameter: Length) -> Result<(), InputError> {
        if StrictlyPositive::check(&self.thickness.value).is_err() {
            // Zero or negative thickness also means the diameter over the
            // insulation cannot exceed the conductor diameter.
            return Err(InputError::InsulationGeometry {
                outer_mm: (conductor_diameter + self.thickness + self.thickness).value * 1e3,
                conductor_mm: conductor_diameter.value * 1e3,
            });
        }
        for (value, field) in [
            (self.tan_delta, "tan delta"),
            (self.permittivity, "permittivity"),
            (self.thermal_resistivity.map(|r| r.value), "insulation thermal resistivity"),
        ] {
            if let Some(v) = value
                && StrictlyPositive::check(&v).is_err()
            {
                return Err(InputError::NotStrictlyPositive { field });
            }
        }
        Ok(())
    }
}
