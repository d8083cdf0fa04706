use uom::si::f64::{ElectricPotential, Frequency, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, ConstraintError, UnitIntervalLowerOpen};

use super::super::error::InputError;

/// Electrical operating conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingConditions {
    /// Phase-to-ground voltage.
    pub voltage: ElectricPotential,
    /// System frequency.
    pub frequency: Frequency,
    /// Maximum conductor temperature override; defaults from the insulation
    /// material when absent.
    pub max_conductor_temp: Option<ThermodynamicTemperature>,
    /// Daily load factor in `(0, 1]`; unity means continuous full load.
    pub load_factor: Constrained<f64, UnitIntervalLowerOpen>,
}

impl OperatingConditions {
    #[must_use]
    pub fn new(voltage: ElectricPotential, frequency: Frequency) -> Self {
        Self {
            voltage,
            frequency,
            max_conductor_temp: None,
            load_factor: UnitIntervalLowerOpen::one(),
        }
    }

    /// Overrides the maximum conductor temperature.
    #[must_use]
    pub fn with_max_conductor_temp(mut self, temp: ThermodynamicTemperature) -> Self {
        self.max_conductor_temp = Some(temp);
        self
    }

    /// Sets the daily load factor.
    ///
    /// # Errors
    ///
    /// Returns an error if the load factor is outside `(0, 1]`.
    pub fn with_load_factor(mut self, load_factor: f64) -> Result<Self, ConstraintError> {
        self.load_factor = UnitIntervalLowerOpen::new(load_factor)?;
        Ok(self)
    }

    pub(crate) fn validate(&self) -> Result<(), InputError> {
        if self.voltage.value <= 0.0 {
            return Err(InputError::NotStrictlyPositive { field: "voltage" });
        }
        if self.frequency.value <= 0.0 {
            return Err(InputError::NotStrictlyPositive { field: "frequency" });
        }
        Ok(())
    }
}
