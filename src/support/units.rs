//! Unit helpers and custom quantities.
//!
//! Cable rating works in a handful of per-unit-length quantities that `uom`
//! does not predefine. This module provides type aliases for them, along with
//! constructors in the units the rating standards quote. All three aliases
//! are SI-coherent, so the raw `value` of a quantity equals its magnitude in
//! the quoted unit.

mod quantities;
mod temperature_difference;

pub use quantities::{
    LinearPowerDensity, ResistancePerLength, ThermalResistivity, kelvin_meter_per_watt,
    ohm_per_meter, watt_per_meter,
};
pub use temperature_difference::TemperatureDifference;
