//! Rating results.
//!
//! Every intermediate quantity the solver touches is reported so a reviewer
//! can audit the calculation line by line. Unit conventions are contractual:
//! Ω/m, W/m, K·m/W, °C, and amperes, formatted verbatim by consumers.

use uom::si::f64::{ElectricCurrent, Length, TemperatureInterval, ThermodynamicTemperature};

use crate::support::units::{LinearPowerDensity, ResistancePerLength, ThermalResistivity};

use super::input::InstallationKind;

/// AC resistance breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcResistance {
    /// DC resistance at the evaluation temperature.
    pub rdc: ResistancePerLength,
    /// AC resistance `rdc·(1 + ycs + ycp)`.
    pub rac: ResistancePerLength,
    /// Skin effect factor.
    pub ycs: f64,
    /// Proximity effect factor.
    pub ycp: f64,
}

/// Loss breakdown at the rated current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Losses {
    pub conductor: LinearPowerDensity,
    pub dielectric: LinearPowerDensity,
    pub shield: LinearPowerDensity,
    pub total: LinearPowerDensity,
}

/// Thermal resistance breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalResistance {
    pub r1: ThermalResistivity,
    pub r2: ThermalResistivity,
    pub r3: ThermalResistivity,
    pub r_concrete: ThermalResistivity,
    pub r4: ThermalResistivity,
    /// Earth path inflated by mutual heating.
    pub r4_effective: ThermalResistivity,
    pub mutual_heating_factor: f64,
    pub total: ThermalResistivity,
}

/// Temperature rise split at the rated current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRise {
    pub conductor_losses: TemperatureInterval,
    pub dielectric_losses: TemperatureInterval,
    pub total: TemperatureInterval,
}

/// Rating of one explicit cable position in a duct bank.
#[derive(Debug, Clone, PartialEq)]
pub struct CableRating {
    pub x: Length,
    pub y: Length,
    pub circuit_id: u32,
    pub phase: String,
    pub cable_id: Option<String>,
    pub ampacity: ElectricCurrent,
    /// This cable's own earth path.
    pub r4: ThermalResistivity,
    /// Earth path including weighted couplings from every other cable.
    pub r4_effective: ThermalResistivity,
    /// Total conductor-to-ambient resistance for this position.
    pub total_thermal_resistance: ThermalResistivity,
    /// Conductor temperature when every cable carries the limiting
    /// (minimum) ampacity.
    pub conductor_temp: ThermodynamicTemperature,
}

/// Complete ampacity rating with its diagnostic breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    /// Steady-state ampacity.
    pub ampacity: ElectricCurrent,
    /// Cyclic ampacity derived from the load factor.
    pub ampacity_cyclic: ElectricCurrent,
    pub installation: InstallationKind,
    pub max_conductor_temp: ThermodynamicTemperature,
    pub ambient_temp: ThermodynamicTemperature,
    pub delta_t_available: TemperatureInterval,
    /// AC resistance evaluated at the maximum conductor temperature.
    pub ac_resistance: AcResistance,
    pub losses: Losses,
    pub thermal_resistance: ThermalResistance,
    pub temperature_rise: TemperatureRise,
    pub shield_loss_factor: f64,
    /// Fixed-point iterations performed.
    pub iterations: usize,
    /// Unset when the iteration cap was reached before the tolerance; the
    /// rating still holds the last iterate.
    pub converged: bool,
    /// Per-cable ratings; populated only in duct-bank multi-cable mode.
    pub per_cable: Vec<CableRating>,
}

impl Rating {
    /// Estimated conductor temperature at an arbitrary operating current.
    ///
    /// Temperature rise scales with the square of the loading ratio; exact
    /// at the rated current, slightly conservative below it because the
    /// real resistance falls with temperature.
    #[must_use]
    pub fn temperature_at(&self, current: ElectricCurrent) -> ThermodynamicTemperature {
        let ratio = (current.value / self.ampacity.value).powi(2);
        self.ambient_temp + ratio * self.temperature_rise.total
    }

    /// Fraction of the rating consumed by an operating current.
    #[must_use]
    pub fn utilization(&self, current: ElectricCurrent) -> f64 {
        current.value / self.ampacity.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_current::ampere, temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::units::{kelvin_meter_per_watt, ohm_per_meter, watt_per_meter};

    fn rating() -> Rating {
        Rating {
            ampacity: ElectricCurrent::new::<ampere>(1000.0),
            ampacity_cyclic: ElectricCurrent::new::<ampere>(1000.0),
            installation: InstallationKind::DirectBuried,
            max_conductor_temp: ThermodynamicTemperature::new::<degree_celsius>(90.0),
            ambient_temp: ThermodynamicTemperature::new::<degree_celsius>(20.0),
            delta_t_available: TemperatureInterval::new::<delta_celsius>(70.0),
            ac_resistance: AcResistance {
                rdc: ohm_per_meter(2.0e-5),
                rac: ohm_per_meter(2.5e-5),
                ycs: 0.2,
                ycp: 0.05,
            },
            losses: Losses {
                conductor: watt_per_meter(25.0),
                dielectric: watt_per_meter(0.1),
                shield: watt_per_meter(0.0),
                total: watt_per_meter(25.1),
            },
            thermal_resistance: ThermalResistance {
                r1: kelvin_meter_per_watt(0.34),
                r2: kelvin_meter_per_watt(0.05),
                r3: kelvin_meter_per_watt(0.0),
                r_concrete: kelvin_meter_per_watt(0.0),
                r4: kelvin_meter_per_watt(0.64),
                r4_effective: kelvin_meter_per_watt(0.64),
                mutual_heating_factor: 1.0,
                total: kelvin_meter_per_watt(1.03),
            },
            temperature_rise: TemperatureRise {
                conductor_losses: TemperatureInterval::new::<delta_celsius>(69.9),
                dielectric_losses: TemperatureInterval::new::<delta_celsius>(0.1),
                total: TemperatureInterval::new::<delta_celsius>(70.0),
            },
            shield_loss_factor: 0.0,
            iterations: 3,
            converged: true,
            per_cable: Vec::new(),
        }
    }

    #[test]
    fn temperature_scales_with_load_squared() {
        let rating = rating();

        let at_rated = rating.temperature_at(ElectricCurrent::new::<ampere>(1000.0));
        assert_relative_eq!(at_rated.get::<degree_celsius>(), 90.0, epsilon = 1e-9);

        let at_half = rating.temperature_at(ElectricCurrent::new::<ampere>(500.0));
        assert_relative_eq!(at_half.get::<degree_celsius>(), 20.0 + 70.0 * 0.25, epsilon = 1e-9);

        assert_relative_eq!(
            rating.utilization(ElectricCurrent::new::<ampere>(500.0)),
            0.5
        );
    }
}
