//! Dielectric and thermal constants for insulation systems.

/// Insulation system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsulationMaterial {
    /// Cross-linked polyethylene.
    Xlpe,
    /// Ethylene propylene rubber.
    Epr,
    /// Impregnated paper (fluid filled).
    PaperOil,
}

impl InsulationMaterial {
    /// Dielectric loss factor tan δ.
    #[must_use]
    pub fn tan_delta(self) -> f64 {
        match self {
            Self::Xlpe => 0.004,
            Self::Epr => 0.020,
            Self::PaperOil => 0.0035,
        }
    }

    /// Relative permittivity εᵣ.
    #[must_use]
    pub fn permittivity(self) -> f64 {
        match self {
            Self::Xlpe => 2.5,
            Self::Epr => 3.0,
            Self::PaperOil => 3.5,
        }
    }

    /// Thermal resistivity of the insulation, K·m/W.
    #[must_use]
    pub fn thermal_resistivity(self) -> f64 {
        match self {
            Self::Xlpe | Self::Epr => 3.5,
            Self::PaperOil => 6.0,
        }
    }

    /// Maximum continuous conductor temperature, °C.
    #[must_use]
    pub fn max_conductor_temp(self) -> f64 {
        match self {
            Self::Xlpe | Self::Epr => 90.0,
            Self::PaperOil => 85.0,
        }
    }
}
