use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, P3, Z0},
};

/// Thermal resistivity (or thermal resistance per unit length), K·m/W in SI.
///
/// The two usages share a dimension: the resistivity of a material and the
/// radial thermal resistance of a cylindrical layer per metre of cable are
/// both quoted in K·m/W.
pub type ThermalResistivity = Quantity<ISQ<N1, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Electrical resistance per unit length, Ω/m in SI.
pub type ResistancePerLength = Quantity<ISQ<P1, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Heat generation per unit length, W/m in SI.
pub type LinearPowerDensity = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`ThermalResistivity`] from a magnitude in K·m/W.
#[must_use]
pub fn kelvin_meter_per_watt(value: f64) -> ThermalResistivity {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}

/// Creates a [`ResistancePerLength`] from a magnitude in Ω/m.
#[must_use]
pub fn ohm_per_meter(value: f64) -> ResistancePerLength {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}

/// Creates a [`LinearPowerDensity`] from a magnitude in W/m.
#[must_use]
pub fn watt_per_meter(value: f64) -> LinearPowerDensity {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}
