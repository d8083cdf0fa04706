//! Underground cable ampacity model.
//!
//! The computational core lives in the internal [`core`] module; this module
//! is the thin [`twine_core::Model`] adapter plus the re-exported types that
//! form the engine's contract.

mod core;

pub use self::core::{
    AcResistance, AmpacityError, Arrangement, BackfillLayer, Bonding, CablePosition, CableRating,
    CableSpec, Conduit, ConductorSpec, DirectBuried, DuctBank, Geometry, InputError, Installation,
    InstallationKind, InsulationSpec, Losses, OperatingConditions, Rating, ShieldConstruction,
    ShieldSpec, SolverConfig, TemperatureRise, ThermalResistance, conductor, dielectric, rate,
    rate_with, shield, thermal,
};

use twine_core::Model;

/// Complete input of one ampacity calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct AmpacityInput {
    pub cable: CableSpec,
    pub installation: Installation,
    pub operating: OperatingConditions,
}

/// Ampacity rating model.
///
/// A stateless adapter over [`rate_with`]; construct once and call from as
/// many threads as needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ampacity {
    pub config: SolverConfig,
}

impl Ampacity {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl Model for Ampacity {
    type Input = AmpacityInput;
    type Output = Rating;
    type Error = AmpacityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        rate_with(
            &input.cable,
            &input.installation,
            &input.operating,
            &self.config,
        )
    }
}
