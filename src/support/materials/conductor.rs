//! Electrical constants for conductor and sheath metals.

/// Conductor metal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConductorMaterial {
    Copper,
    Aluminum,
}

impl ConductorMaterial {
    /// Electrical resistivity at 20 °C, Ω·m.
    #[must_use]
    pub fn resistivity_20c(self) -> f64 {
        match self {
            Self::Copper => 1.7241e-8,
            Self::Aluminum => 2.8264e-8,
        }
    }

    /// Linear temperature coefficient of resistance at 20 °C, per °C.
    ///
    /// Equivalent to the IEC-228 reciprocal form `α₂₀ = 1/(β + 20)` with
    /// β = 234.5 K for copper and 228.0 K for aluminum.
    #[must_use]
    pub fn temperature_coefficient(self) -> f64 {
        match self {
            Self::Copper => 0.00393,
            Self::Aluminum => 0.00403,
        }
    }
}

/// Metallic sheath or shield metal.
///
/// Lead appears here but not in [`ConductorMaterial`]; it is common as a
/// sheath and never as a conductor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheathMaterial {
    Copper,
    Aluminum,
    Lead,
}

impl SheathMaterial {
    /// Electrical resistivity at 20 °C, Ω·m.
    #[must_use]
    pub fn resistivity_20c(self) -> f64 {
        match self {
            Self::Copper => 1.7241e-8,
            Self::Aluminum => 2.8264e-8,
            Self::Lead => 21.4e-8,
        }
    }

    /// Linear temperature coefficient of resistance at 20 °C, per °C.
    #[must_use]
    pub fn temperature_coefficient(self) -> f64 {
        match self {
            Self::Copper => 0.00393,
            Self::Aluminum => 0.00403,
            Self::Lead => 0.00400,
        }
    }
}

/// Conductor construction.
///
/// Determines the default skin and proximity effect coefficients of
/// IEC 60287-1-1 Table 2. The segmental (Milliken) values assume a
/// fluid/paper/PPL insulation system, the conservative choice when the wire
/// construction is not known; measured `ks`/`kp` values can be supplied on
/// the conductor spec to override these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stranding {
    Solid,
    StrandedRound,
    StrandedCompact,
    /// Milliken (segmental) construction.
    Segmental,
}

impl Stranding {
    /// Default skin effect coefficient `ks`.
    #[must_use]
    pub fn skin_effect_coefficient(self) -> f64 {
        match self {
            Self::Solid | Self::StrandedRound | Self::StrandedCompact => 1.0,
            Self::Segmental => 0.435,
        }
    }

    /// Default proximity effect coefficient `kp`.
    #[must_use]
    pub fn proximity_effect_coefficient(self) -> f64 {
        match self {
            Self::Solid | Self::StrandedRound | Self::StrandedCompact => 1.0,
            Self::Segmental => 0.37,
        }
    }
}
