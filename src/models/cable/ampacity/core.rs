//! Ampacity calculation engine.
//!
//! IEC 60287 / Neher-McGrath steady-state rating of buried power cables:
//! temperature-dependent AC resistance, dielectric and shield losses, the
//! layered thermal network for each installation topology, image-method
//! mutual heating, and the fixed-point solver tying them together.
//!
//! The engine is purely synchronous, CPU-bound computation over immutable
//! inputs. Every loop is bounded by an explicit iteration cap, so a call is
//! one self-contained unit of work; concurrent calls with independent inputs
//! need no synchronization.

pub mod conductor;
pub mod dielectric;
pub mod shield;
pub mod thermal;

mod error;
mod input;
mod mutual;
mod results;
mod solve;

pub use error::{AmpacityError, InputError};
pub use input::{
    Arrangement, BackfillLayer, Bonding, CablePosition, CableSpec, Conduit, ConductorSpec,
    DirectBuried, DuctBank, Geometry, Installation, InstallationKind, InsulationSpec,
    OperatingConditions, ShieldConstruction, ShieldSpec,
};
pub use results::{
    AcResistance, CableRating, Losses, Rating, TemperatureRise, ThermalResistance,
};
pub use solve::{SolverConfig, rate, rate_with};
