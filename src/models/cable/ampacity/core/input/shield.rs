use uom::si::f64::Length;

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    materials::SheathMaterial,
    units::ResistancePerLength,
};

use super::super::error::InputError;

/// Shield construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShieldConstruction {
    Tape,
    Wire,
    Corrugated,
    Extruded,
}

/// Shield/sheath grounding scheme.
///
/// Determines whether circulating currents can flow: single-point bonding
/// blocks them entirely, both-ends bonding allows them, and cross bonding
/// cancels most of them over a transposition cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bonding {
    SinglePoint,
    BothEnds,
    CrossBonded,
}

/// Specification of the metallic shield or sheath.
#[derive(Debug, Clone, PartialEq)]
pub struct ShieldSpec {
    pub material: SheathMaterial,
    pub construction: ShieldConstruction,
    /// Radial shield thickness.
    pub thickness: Length,
    /// Mean diameter of the shield annulus.
    pub mean_diameter: Length,
    /// Manufacturer shield resistance at 20 °C, if known.
    pub resistance_20c: Option<ResistancePerLength>,
    pub bonding: Bonding,
}

impl ShieldSpec {
    #[must_use]
    pub fn new(
        material: SheathMaterial,
        construction: ShieldConstruction,
        thickness: Length,
        mean_diameter: Length,
        bonding: Bonding,
    ) -> Self {
        Self {
            material,
            construction,
            thickness,
            mean_diameter,
            resistance_20c: None,
            bonding,
        }
    }

    /// Sets a manufacturer shield resistance at 20 °C.
    #[must_use]
    pub fn with_resistance_20c(mut self, resistance: ResistancePerLength) -> Self {
        self.resistance_20c = Some(resistance);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), InputError> {
        for (value, field) in [
            (self.thickness.value, "shield thickness"),
            (self.mean_diameter.value, "shield mean diameter"),
        ] {
            if StrictlyPositive::check(&value).is_err() {
                return Err(InputError::NotStrictlyPositive { field });
            }
        }
        if let Some(r) = self.resistance_20c
            && StrictlyPositive::check(&r.value).is_err()
        {
            return Err(InputError::NotStrictlyPositive {
                field: "shield resistance",
            });
        }
        Ok(())
    }
}
