//! Material property tables for cable rating.
//!
//! Process-wide immutable data covering the metals, insulation systems, and
//! polymers a buried cable system is built from. Electrical and dielectric
//! values follow IEC 60287-1-1; thermal values follow IEC 60287-2-1.
//!
//! Every table is a `match` over a closed enum, so an unknown material is
//! unrepresentable rather than a runtime error. Empirical constants are
//! plain `f64` in the units the standard quotes them in; the formulas that
//! consume them operate in those units.

mod conductor;
mod dielectric;
mod polymer;

pub use conductor::{ConductorMaterial, SheathMaterial, Stranding};
pub use dielectric::InsulationMaterial;
pub use polymer::{ConduitMaterial, JacketMaterial};
