//! Input value objects for ampacity calculations.
//!
//! All inputs are immutable once constructed; the engine never mutates them
//! and holds no state across calls. Validation runs once at the solve entry
//! point, before any iteration.

mod cable;
mod conductor;
mod installation;
mod insulation;
mod operating;
mod shield;

pub use cable::{CableSpec, Geometry};
pub use conductor::{Arrangement, ConductorSpec};
pub use installation::{
    BackfillLayer, CablePosition, Conduit, DirectBuried, DuctBank, Installation, InstallationKind,
};
pub use insulation::InsulationSpec;
pub use operating::OperatingConditions;
pub use shield::{Bonding, ShieldConstruction, ShieldSpec};
