use uom::{ConstZero, si::f64::Length};

use crate::support::{
    constraint::{Constraint, NonNegative},
    materials::JacketMaterial,
    units::ThermalResistivity,
};

use super::super::error::InputError;
use super::{ConductorSpec, InsulationSpec, ShieldSpec};

/// Complete cable construction for an ampacity calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CableSpec {
    pub conductor: ConductorSpec,
    pub insulation: InsulationSpec,
    pub shield: Option<ShieldSpec>,
    /// Radial jacket thickness; zero means no jacket.
    pub jacket_thickness: Length,
    pub jacket_material: JacketMaterial,
    /// Jacket thermal resistivity override.
    pub jacket_resistivity: Option<ThermalResistivity>,
    /// Semiconducting conductor-shield thickness.
    pub conductor_shield_thickness: Length,
    /// Semiconducting insulation-screen thickness.
    pub insulation_screen_thickness: Length,
}

impl CableSpec {
    #[must_use]
    pub fn new(
        conductor: ConductorSpec,
        insulation: InsulationSpec,
        jacket_thickness: Length,
        jacket_material: JacketMaterial,
    ) -> Self {
        Self {
            conductor,
            insulation,
            shield: None,
            jacket_thickness,
            jacket_material,
            jacket_resistivity: None,
            conductor_shield_thickness: Length::ZERO,
            insulation_screen_thickness: Length::ZERO,
        }
    }

    /// Adds a metallic shield.
    #[must_use]
    pub fn with_shield(mut self, shield: ShieldSpec) -> Self {
        self.shield = Some(shield);
        self
    }

    /// Sets the semiconducting layer thicknesses.
    #[must_use]
    pub fn with_semiconducting_layers(
        mut self,
        conductor_shield: Length,
        insulation_screen: Length,
    ) -> Self {
        self.conductor_shield_thickness = conductor_shield;
        self.insulation_screen_thickness = insulation_screen;
        self
    }

    /// Sets a datasheet jacket thermal resistivity.
    #[must_use]
    pub fn with_jacket_resistivity(mut self, resistivity: ThermalResistivity) -> Self {
        self.jacket_resistivity = Some(resistivity);
        self
    }

    /// Resolved jacket thermal resistivity, K·m/W.
    #[must_use]
    pub fn resolved_jacket_resistivity(&self) -> f64 {
        self.jacket_resistivity
            .map_or_else(|| self.jacket_material.thermal_resistivity(), |rho| rho.value)
    }

    /// Derives the layered geometry, diameters computed outward.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        let conductor_diameter = self.conductor.diameter;
        let conductor_shield_od = conductor_diameter + 2.0 * self.conductor_shield_thickness;
        let insulation_od = conductor_shield_od + 2.0 * self.insulation.thickness;
        let insulation_screen_od = insulation_od + 2.0 * self.insulation_screen_thickness;
        let shield_thickness = self.shield.as_ref().map_or(Length::ZERO, |s| s.thickness);
        let shield_od = insulation_screen_od + 2.0 * shield_thickness;
        let overall_diameter = shield_od + 2.0 * self.jacket_thickness;

        Geometry {
            conductor_diameter,
            conductor_shield_od,
            insulation_od,
            insulation_screen_od,
            shield_od,
            overall_diameter,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), InputError> {
        self.conductor.validate()?;
        self.insulation.validate(self.conductor.diameter)?;
        if let Some(shield) = &self.shield {
            shield.validate()?;
        }
        for (value, field) in [
            (self.jacket_thickness.value, "jacket thickness"),
            (
                self.conductor_shield_thickness.value,
                "conductor shield thickness",
            ),
            (
                self.insulation_screen_thickness.value,
                "insulation screen thickness",
            ),
        ] {
            if NonNegative::check(&value).is_err() {
                return Err(InputError::Negative { field });
            }
        }
        if let Some(rho) = self.jacket_resistivity
            && rho.value <= 0.0
        {
            return Err(InputError::NotStrictlyPositive {
                field: "jacket thermal resistivity",
            });
        }
        Ok(())
    }
}

/// Derived cable geometry, read-only.
///
/// Each diameter strictly exceeds the previous one, except that optional
/// layers with zero thickness collapse onto the layer below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    conductor_diameter: Length,
    conductor_shield_od: Length,
    insulation_od: Length,
    insulation_screen_od: Length,
    shield_od: Length,
    overall_diameter: Length,
}

impl Geometry {
    /// Conductor diameter.
    #[must_use]
    pub fn conductor_diameter(&self) -> Length {
        self.conductor_diameter
    }

    /// Diameter over the semiconducting conductor shield.
    #[must_use]
    pub fn conductor_shield_od(&self) -> Length {
        self.conductor_shield_od
    }

    /// Diameter over the insulation.
    #[must_use]
    pub fn insulation_od(&self) -> Length {
        self.insulation_od
    }

    /// Diameter over the semiconducting insulation screen.
    ///
    /// This is the outer boundary of the thermal span treated as insulation.
    #[must_use]
    pub fn insulation_screen_od(&self) -> Length {
        self.insulation_screen_od
    }

    /// Diameter over the metallic shield.
    #[must_use]
    pub fn shield_od(&self) -> Length {
        self.shield_od
    }

    /// Overall cable diameter over the jacket.
    #[must_use]
    pub fn overall_diameter(&self) -> Length {
        self.overall_diameter
    }
}
