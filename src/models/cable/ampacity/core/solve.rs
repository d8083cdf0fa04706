//! Ampacity fixed-point solver.
//!
//! The thermal equation couples two ways: the current determines the
//! conductor temperature through the losses, and the temperature determines
//! the AC resistance that produced those losses. The solver seeds the
//! current at the temperature limit and relaxes both until the ampacity
//! settles.

use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{TemperatureDifference, kelvin_meter_per_watt, watt_per_meter};

use super::conductor;
use super::dielectric::dielectric_loss;
use super::error::AmpacityError;
use super::input::{
    Arrangement, CablePosition, CableSpec, DuctBank, Installation, InstallationKind,
    OperatingConditions,
};
use super::mutual::{self, MutualConfig, SharedContext};
use super::results::{AcResistance, CableRating, Losses, Rating, TemperatureRise, ThermalResistance};
use super::shield::{SHEATH_REFERENCE_TEMP_C, shield_loss_factor};
use super::thermal::{self, ThermalResistances};

/// Cables per circuit assumed for the proximity effect (three-phase).
const CABLES_PER_CIRCUIT: usize = 3;

/// Convergence settings for the rating solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Ampacity tolerance of the temperature/resistance fixed point.
    pub tolerance: ElectricCurrent,
    /// Iteration cap of the fixed point.
    pub max_iterations: usize,
    /// Ampacity tolerance of the per-cable mutual-heating refinement.
    pub mutual_tolerance: ElectricCurrent,
    /// Iteration cap of the mutual-heating refinement.
    pub mutual_max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: ElectricCurrent::new::<ampere>(0.01),
            max_iterations: 100,
            mutual_tolerance: ElectricCurrent::new::<ampere>(0.5),
            mutual_max_iterations: 20,
        }
    }
}

impl SolverConfig {
    fn mutual(&self) -> MutualConfig {
        MutualConfig {
            tolerance_a: self.mutual_tolerance.get::<ampere>(),
            max_iterations: self.mutual_max_iterations,
        }
    }
}

/// Rates a cable with default solver settings.
///
/// # Errors
///
/// Returns [`AmpacityError::Input`] on invalid inputs and
/// [`AmpacityError::ThermalInfeasibility`] when dielectric heating alone
/// exhausts the temperature budget.
pub fn rate(
    cable: &CableSpec,
    installation: &Installation,
    operating: &OperatingConditions,
) -> Result<Rating, AmpacityError> {
    rate_with(cable, installation, operating, &SolverConfig::default())
}

/// Rates a cable with explicit solver settings.
///
/// # Errors
///
/// Returns [`AmpacityError::Input`] on invalid inputs and
/// [`AmpacityError::ThermalInfeasibility`] when dielectric heating alone
/// exhausts the temperature budget.
pub fn rate_with(
    cable: &CableSpec,
    installation: &Installation,
    operating: &OperatingConditions,
    config: &SolverConfig,
) -> Result<Rating, AmpacityError> {
    cable.validate()?;
    operating.validate()?;
    let geometry = cable.geometry();
    installation.validate(&geometry)?;

    let tc_max = operating.max_conductor_temp.unwrap_or_else(|| {
        ThermodynamicTemperature::new::<degree_celsius>(
            cable.insulation.material.max_conductor_temp(),
        )
    });
    let ambient = installation.ambient_temp();
    let ambient_c = ambient.get::<degree_celsius>();
    let delta_t_available = tc_max.minus(ambient).get::<delta_celsius>();

    let network = thermal::compute(cable, &geometry, installation);

    let wd = dielectric_loss(
        &cable.insulation,
        cable.conductor.diameter,
        operating.voltage,
        operating.frequency,
    )
    .value;

    let sheath_temp = ThermodynamicTemperature::new::<degree_celsius>(SHEATH_REFERENCE_TEMP_C);
    let spacing = installation.phase_spacing();

    let rac_at_limit = conductor::ac_resistance(
        &cable.conductor,
        tc_max,
        spacing,
        operating.frequency,
        Arrangement::Trefoil,
        CABLES_PER_CIRCUIT,
    );

    // Seed the shield loss factor from the resistance at the limit.
    let mut lambda1 = cable.shield.as_ref().map_or(0.0, |shield| {
        shield_loss_factor(
            shield,
            rac_at_limit.rac,
            spacing,
            operating.frequency,
            sheath_temp,
        )
    });

    let fixed = network.r1 + network.r2 + network.r3 + network.r_concrete;
    let r4_effective = network.r4_effective();
    let mut r_conductor = (1.0 + lambda1) * (fixed + r4_effective);
    let r_dielectric = 0.5 * network.r1 + network.r2 + network.r3 + network.r_concrete + r4_effective;

    let delta_t_dielectric = wd * r_dielectric;
    let delta_t_conductor = delta_t_available - delta_t_dielectric;
    if delta_t_conductor <= 0.0 {
        return Err(AmpacityError::ThermalInfeasibility {
            available_c: delta_t_available,
            dielectric_c: delta_t_dielectric,
        });
    }

    // Fixed point: current → losses → temperature → resistance → current.
    let mut rac = rac_at_limit.rac.value;
    let mut current = (delta_t_conductor / (rac * r_conductor)).sqrt();
    let mut iterations = 0;
    let mut converged = false;
    while iterations < config.max_iterations {
        iterations += 1;

        let wc = current.powi(2) * rac;
        let t_conductor = ambient_c + wc * r_conductor + delta_t_dielectric;

        let r_ac = conductor::ac_resistance(
            &cable.conductor,
            ThermodynamicTemperature::new::<degree_celsius>(t_conductor),
            spacing,
            operating.frequency,
            Arrangement::Trefoil,
            CABLES_PER_CIRCUIT,
        );

        if let Some(shield) = &cable.shield {
            lambda1 = shield_loss_factor(
                shield,
                r_ac.rac,
                spacing,
                operating.frequency,
                sheath_temp,
            );
            r_conductor = (1.0 + lambda1) * (fixed + r4_effective);
        }

        let next = (delta_t_conductor / (r_ac.rac.value * r_conductor)).sqrt();
        let change = (next - current).abs();
        current = next;
        rac = r_ac.rac.value;

        if change < config.tolerance.get::<ampere>() {
            converged = true;
            break;
        }
    }

    // Rated resistance is reported at the temperature limit, not at the
    // converged operating temperature.
    let ac_resistance = rac_at_limit;

    if let Installation::DuctBank(bank) = installation {
        let positions = bank.effective_positions();
        if positions.len() >= 2 {
            return rate_duct_bank_positions(
                bank,
                &positions,
                operating,
                &network,
                ac_resistance,
                lambda1,
                wd,
                delta_t_available,
                ambient,
                tc_max,
                config,
            );
        }
    }

    let wc = current.powi(2) * ac_resistance.rac.value;
    let ws = lambda1 * wc;

    let ampacity = ElectricCurrent::new::<ampere>(current);

    Ok(Rating {
        ampacity,
        ampacity_cyclic: cyclic_ampacity(ampacity, operating),
        installation: installation.kind(),
        max_conductor_temp: tc_max,
        ambient_temp: ambient,
        delta_t_available: TemperatureInterval::new::<delta_celsius>(delta_t_available),
        ac_resistance,
        losses: Losses {
            conductor: watt_per_meter(wc),
            dielectric: watt_per_meter(wd),
            shield: watt_per_meter(ws),
            total: watt_per_meter(wc + wd + ws),
        },
        thermal_resistance: ThermalResistance {
            r1: kelvin_meter_per_watt(network.r1),
            r2: kelvin_meter_per_watt(network.r2),
            r3: kelvin_meter_per_watt(network.r3),
            r_concrete: kelvin_meter_per_watt(network.r_concrete),
            r4: kelvin_meter_per_watt(network.r4),
            r4_effective: kelvin_meter_per_watt(r4_effective),
            mutual_heating_factor: network.mutual_heating_factor,
            total: kelvin_meter_per_watt(network.total()),
        },
        temperature_rise: TemperatureRise {
            conductor_losses: TemperatureInterval::new::<delta_celsius>(wc * r_conductor),
            dielectric_losses: TemperatureInterval::new::<delta_celsius>(delta_t_dielectric),
            total: TemperatureInterval::new::<delta_celsius>(wc * r_conductor + delta_t_dielectric),
        },
        shield_loss_factor: lambda1,
        iterations,
        converged,
        per_cable: Vec::new(),
    })
}

/// Multi-cable duct-bank path: the per-cable engine replaces the aggregate
/// mutual-heating term, and the limiting cable becomes the headline rating.
#[allow(clippy::too_many_arguments)]
fn rate_duct_bank_positions(
    bank: &DuctBank,
    positions: &[CablePosition],
    operating: &OperatingConditions,
    network: &ThermalResistances,
    ac_resistance: AcResistance,
    lambda1: f64,
    wd: f64,
    delta_t_available: f64,
    ambient: ThermodynamicTemperature,
    tc_max: ThermodynamicTemperature,
    config: &SolverConfig,
) -> Result<Rating, AmpacityError> {
    let fixed = network.r1 + network.r2 + network.r3;
    let context = SharedContext {
        fixed_resistance: fixed,
        r1: network.r1,
        rac: ac_resistance.rac.value,
        lambda1,
        dielectric_loss: wd,
        delta_t_available,
    };

    let outcome = mutual::solve_positions(bank, positions, &context, &config.mutual());

    let worst = outcome
        .solutions
        .iter()
        .min_by(|a, b| a.ampacity_a.total_cmp(&b.ampacity_a))
        .expect("at least two positions are present in multi-cable mode");

    let worst_r_dielectric =
        fixed - 0.5 * network.r1 + worst.r_concrete + worst.r4_effective;
    let worst_delta_t_dielectric = wd * worst_r_dielectric;
    if delta_t_available - worst_delta_t_dielectric <= 0.0 {
        return Err(AmpacityError::ThermalInfeasibility {
            available_c: delta_t_available,
            dielectric_c: worst_delta_t_dielectric,
        });
    }

    let current = worst.ampacity_a;
    let r_conductor = (1.0 + lambda1) * worst.total_resistance(&context);
    let wc = current.powi(2) * ac_resistance.rac.value;
    let ws = lambda1 * wc;

    let ambient_c = ambient.get::<degree_celsius>();
    let per_cable: Vec<CableRating> = positions
        .iter()
        .zip(&outcome.solutions)
        .map(|(position, solution)| {
            // Temperature with every cable carrying the limiting current;
            // the limiting cable itself lands on the conductor limit.
            let r_cond = (1.0 + lambda1) * solution.total_resistance(&context);
            let r_diel =
                fixed - 0.5 * network.r1 + solution.r_concrete + solution.r4_effective;
            let temp_c = ambient_c + wc * r_cond + wd * r_diel;

            CableRating {
                x: position.x,
                y: position.y,
                circuit_id: position.circuit_id,
                phase: position.phase.clone(),
                cable_id: position.cable_id.clone(),
                ampacity: ElectricCurrent::new::<ampere>(solution.ampacity_a),
                r4: kelvin_meter_per_watt(solution.r4),
                r4_effective: kelvin_meter_per_watt(solution.r4_effective),
                total_thermal_resistance: kelvin_meter_per_watt(
                    solution.total_resistance(&context),
                ),
                conductor_temp: ThermodynamicTemperature::new::<degree_celsius>(temp_c),
            }
        })
        .collect();

    let ampacity = ElectricCurrent::new::<ampere>(current);

    Ok(Rating {
        ampacity,
        ampacity_cyclic: cyclic_ampacity(ampacity, operating),
        installation: InstallationKind::DuctBank,
        max_conductor_temp: tc_max,
        ambient_temp: ambient,
        delta_t_available: TemperatureInterval::new::<delta_celsius>(delta_t_available),
        ac_resistance,
        losses: Losses {
            conductor: watt_per_meter(wc),
            dielectric: watt_per_meter(wd),
            shield: watt_per_meter(ws),
            total: watt_per_meter(wc + wd + ws),
        },
        thermal_resistance: ThermalResistance {
            r1: kelvin_meter_per_watt(network.r1),
            r2: kelvin_meter_per_watt(network.r2),
            r3: kelvin_meter_per_watt(network.r3),
            r_concrete: kelvin_meter_per_watt(worst.r_concrete),
            r4: kelvin_meter_per_watt(worst.r4),
            r4_effective: kelvin_meter_per_watt(worst.r4_effective),
            mutual_heating_factor: worst.r4_effective / worst.r4,
            total: kelvin_meter_per_watt(worst.total_resistance(&context)),
        },
        temperature_rise: TemperatureRise {
            conductor_losses: TemperatureInterval::new::<delta_celsius>(wc * r_conductor),
            dielectric_losses: TemperatureInterval::new::<delta_celsius>(worst_delta_t_dielectric),
            total: TemperatureInterval::new::<delta_celsius>(
                wc * r_conductor + worst_delta_t_dielectric,
            ),
        },
        shield_loss_factor: lambda1,
        iterations: outcome.iterations,
        converged: outcome.converged,
        per_cable,
    })
}

fn cyclic_ampacity(ampacity: ElectricCurrent, operating: &OperatingConditions) -> ElectricCurrent {
    let load_factor = *operating.load_factor.as_ref();
    if load_factor < 1.0 {
        ampacity / load_factor.sqrt()
    } else {
        ampacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_millimeter,
        electric_potential::kilovolt,
        f64::{Area, ElectricPotential, Frequency, Length},
        frequency::hertz,
        length::{meter, millimeter},
    };

    use crate::support::materials::{
        ConductorMaterial, ConduitMaterial, InsulationMaterial, JacketMaterial, Stranding,
    };
    use crate::support::units::kelvin_meter_per_watt;

    use super::super::input::{Conduit, ConductorSpec, DirectBuried, InsulationSpec};

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    /// Copper 1000 mm², XLPE, 3 mm PE jacket, no shield.
    fn reference_cable() -> CableSpec {
        CableSpec::new(
            ConductorSpec::new(
                ConductorMaterial::Copper,
                Area::new::<square_millimeter>(1000.0),
                mm(35.7),
                Stranding::StrandedCompact,
            ),
            InsulationSpec::new(InsulationMaterial::Xlpe, mm(15.0)),
            mm(3.0),
            JacketMaterial::Pe,
        )
    }

    /// Direct burial at 1.0 m in 1.0 K·m/W soil at 20 °C.
    fn reference_burial() -> Installation {
        Installation::DirectBuried(DirectBuried::new(
            m(1.0),
            kelvin_meter_per_watt(1.0),
            celsius(20.0),
        ))
    }

    fn reference_operating() -> OperatingConditions {
        OperatingConditions::new(
            ElectricPotential::new::<kilovolt>(12.0),
            Frequency::new::<hertz>(50.0),
        )
    }

    #[test]
    fn reference_scenario_rates_plausibly() {
        let rating = rate(&reference_cable(), &reference_burial(), &reference_operating())
            .expect("reference scenario must rate");

        // Recorded reference run: ~1.6 kA for this construction.
        let amps = rating.ampacity.get::<ampere>();
        assert!(amps > 1000.0 && amps < 2500.0, "ampacity = {amps} A");

        assert!(rating.converged);
        assert!(rating.iterations >= 1);
        assert!(rating.per_cable.is_empty());

        // Breakdown consistency.
        assert_relative_eq!(
            rating.ac_resistance.rac.value,
            rating.ac_resistance.rdc.value
                * (1.0 + rating.ac_resistance.ycs + rating.ac_resistance.ycp),
            max_relative = 1e-12
        );
        assert!(rating.ac_resistance.rac >= rating.ac_resistance.rdc);
        assert_eq!(rating.ac_resistance.ycp, 0.0, "no spacing, no proximity");

        // At the rated current the conductor sits on its limit.
        assert_relative_eq!(
            rating.temperature_rise.total.value,
            rating.delta_t_available.value,
            epsilon = 0.5
        );
    }

    #[test]
    fn rating_is_a_pure_function_of_inputs() {
        let first = rate(&reference_cable(), &reference_burial(), &reference_operating()).unwrap();
        let second = rate(&reference_cable(), &reference_burial(), &reference_operating()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn hotter_soil_means_lower_rating() {
        let cool = rate(&reference_cable(), &reference_burial(), &reference_operating()).unwrap();

        let hot_burial = Installation::DirectBuried(DirectBuried::new(
            m(1.0),
            kelvin_meter_per_watt(1.0),
            celsius(35.0),
        ));
        let hot = rate(&reference_cable(), &hot_burial, &reference_operating()).unwrap();

        assert!(hot.ampacity < cool.ampacity);
    }

    #[test]
    fn bigger_conductor_means_higher_rating() {
        let small = rate(&reference_cable(), &reference_burial(), &reference_operating()).unwrap();

        let mut bigger = reference_cable();
        bigger.conductor.cross_section = Area::new::<square_millimeter>(1600.0);
        bigger.conductor.diameter = mm(45.1);
        let big = rate(&bigger, &reference_burial(), &reference_operating()).unwrap();

        assert!(big.ampacity > small.ampacity);
    }

    #[test]
    fn load_factor_raises_cyclic_rating() {
        let operating = reference_operating().with_load_factor(0.75).unwrap();
        let rating = rate(&reference_cable(), &reference_burial(), &operating).unwrap();

        assert_relative_eq!(
            rating.ampacity_cyclic.value,
            rating.ampacity.value / 0.75f64.sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn unity_load_factor_keeps_ratings_equal() {
        let rating = rate(&reference_cable(), &reference_burial(), &reference_operating()).unwrap();
        assert_eq!(rating.ampacity, rating.ampacity_cyclic);
    }

    #[test]
    fn conduit_derates_against_direct_burial() {
        let buried = rate(&reference_cable(), &reference_burial(), &reference_operating()).unwrap();

        let conduit = Installation::Conduit(Conduit::new(
            m(1.0),
            kelvin_meter_per_watt(1.0),
            celsius(20.0),
            mm(202.72),
            mm(219.08),
            ConduitMaterial::Pvc,
        ));
        let ducted = rate(&reference_cable(), &conduit, &reference_operating()).unwrap();

        assert!(ducted.ampacity < buried.ampacity);
        assert!(ducted.thermal_resistance.r3.value > 0.0);

        let row = Installation::Conduit(
            Conduit::new(
                m(1.0),
                kelvin_meter_per_watt(1.0),
                celsius(20.0),
                mm(202.72),
                mm(219.08),
                ConduitMaterial::Pvc,
            )
            .with_conduit_row(m(0.3), 6),
        );
        let in_row = rate(&reference_cable(), &row, &reference_operating()).unwrap();

        assert!(in_row.ampacity < ducted.ampacity);
        assert!(in_row.thermal_resistance.mutual_heating_factor > 1.0);
    }

    #[test]
    fn dielectric_heating_can_exhaust_the_budget() {
        // A lossy insulation at transmission voltage with the conductor
        // limit pinned just above ambient.
        let cable = CableSpec::new(
            ConductorSpec::new(
                ConductorMaterial::Copper,
                Area::new::<square_millimeter>(1000.0),
                mm(35.7),
                Stranding::StrandedCompact,
            ),
            InsulationSpec::new(InsulationMaterial::Epr, mm(20.0)),
            mm(3.0),
            JacketMaterial::Pe,
        );
        let operating = OperatingConditions::new(
            ElectricPotential::new::<kilovolt>(200.0),
            Frequency::new::<hertz>(50.0),
        )
        .with_max_conductor_temp(celsius(21.0));

        let result = rate(&cable, &reference_burial(), &operating);

        match result {
            Err(AmpacityError::ThermalInfeasibility {
                available_c,
                dielectric_c,
            }) => {
                assert_relative_eq!(available_c, 1.0, epsilon = 1e-9);
                assert!(dielectric_c > available_c);
            }
            other => panic!("expected ThermalInfeasibility, got {other:?}"),
        }
    }

    #[test]
    fn iteration_cap_returns_last_iterate() {
        let config = SolverConfig {
            tolerance: ElectricCurrent::new::<ampere>(0.0),
            max_iterations: 1,
            ..SolverConfig::default()
        };

        let rating = rate_with(
            &reference_cable(),
            &reference_burial(),
            &reference_operating(),
            &config,
        )
        .expect("cap without convergence is not an error");

        assert_eq!(rating.iterations, 1);
        assert!(!rating.converged);
        assert!(rating.ampacity.value > 0.0);
    }

    #[test]
    fn validation_runs_before_any_iteration() {
        let mut cable = reference_cable();
        cable.conductor.cross_section = Area::new::<square_millimeter>(-1.0);

        let result = rate(&cable, &reference_burial(), &reference_operating());
        assert!(matches!(result, Err(AmpacityError::Input(_))));
    }

    #[test]
    fn neighboring_circuits_derate_a_trefoil() {
        let single = rate(&reference_cable(), &reference_burial(), &reference_operating()).unwrap();

        let shared_trench = Installation::DirectBuried(
            DirectBuried::new(m(1.0), kelvin_meter_per_watt(1.0), celsius(20.0))
                .with_circuits(m(0.3), 2),
        );
        let crowded = rate(&reference_cable(), &shared_trench, &reference_operating()).unwrap();

        assert!(crowded.ampacity < single.ampacity);
        assert!(crowded.thermal_resistance.mutual_heating_factor > 1.0);
        // Spacing switches the proximity effect on as well.
        assert!(crowded.ac_resistance.ycp > 0.0);
    }

    #[test]
    fn bonded_shield_costs_ampacity() {
        use super::super::input::{Bonding, ShieldConstruction, ShieldSpec};
        use crate::support::materials::SheathMaterial;

        let shielded = |bonding: Bonding| {
            reference_cable().with_shield(ShieldSpec::new(
                SheathMaterial::Copper,
                ShieldConstruction::Wire,
                mm(1.5),
                mm(70.0),
                bonding,
            ))
        };

        let operating = reference_operating();
        let single_point = rate(
            &shielded(Bonding::SinglePoint),
            &reference_burial(),
            &operating,
        )
        .unwrap();
        let both_ends = rate(&shielded(Bonding::BothEnds), &reference_burial(), &operating).unwrap();

        assert!(single_point.shield_loss_factor >= 0.0);
        assert!(both_ends.shield_loss_factor > single_point.shield_loss_factor);
        assert!(both_ends.ampacity < single_point.ampacity);
        assert!(both_ends.losses.shield.value > 0.0);
    }

    fn six_duct_bank() -> DuctBank {
        DuctBank {
            depth: m(1.0),
            soil_resistivity: kelvin_meter_per_watt(0.9),
            concrete_resistivity: kelvin_meter_per_watt(1.0),
            ambient_temp: celsius(20.0),
            bank_width: m(1.2),
            bank_height: m(0.7),
            duct_rows: 2,
            duct_cols: 3,
            duct_spacing_h: m(0.3),
            duct_spacing_v: m(0.3),
            duct_inner_diameter: mm(202.72),
            duct_outer_diameter: mm(219.08),
            duct_material: ConduitMaterial::Pvc,
            wall_resistivity: None,
            occupied_ducts: vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)],
            backfill_layers: Vec::new(),
            cable_positions: Vec::new(),
        }
    }

    #[test]
    fn occupied_duct_bank_rates_every_cable() {
        let installation = Installation::DuctBank(six_duct_bank());
        let rating = rate(&reference_cable(), &installation, &reference_operating())
            .expect("duct bank must rate");

        assert_eq!(rating.per_cable.len(), 6);
        assert_eq!(rating.installation, InstallationKind::DuctBank);

        // The headline is the limiting cable.
        let min = rating
            .per_cable
            .iter()
            .map(|c| c.ampacity.value)
            .fold(f64::INFINITY, f64::min);
        assert_relative_eq!(rating.ampacity.value, min, max_relative = 1e-12);
        assert!(min > 0.0);

        // With every cable at the limiting current, the limiting cable sits
        // on the conductor temperature limit and no cable exceeds it.
        let hottest = rating
            .per_cable
            .iter()
            .map(|c| c.conductor_temp.get::<degree_celsius>())
            .fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(hottest, 90.0, epsilon = 1e-6);

        for cable in &rating.per_cable {
            assert!(cable.r4_effective.value > cable.r4.value);
        }
    }

    #[test]
    fn single_occupied_duct_skips_per_cable_mode() {
        let mut bank = six_duct_bank();
        bank.occupied_ducts = vec![(0, 1)];
        let rating = rate(
            &reference_cable(),
            &Installation::DuctBank(bank),
            &reference_operating(),
        )
        .unwrap();

        assert!(rating.per_cable.is_empty());
        assert!(rating.thermal_resistance.r_concrete.value > 0.0);
        assert!(rating.thermal_resistance.r3.value > 0.0);
    }

    #[test]
    fn crowded_bank_derates_against_single_duct() {
        let full = rate(
            &reference_cable(),
            &Installation::DuctBank(six_duct_bank()),
            &reference_operating(),
        )
        .unwrap();

        let mut lone = six_duct_bank();
        lone.occupied_ducts = vec![(0, 1)];
        let single = rate(
            &reference_cable(),
            &Installation::DuctBank(lone),
            &reference_operating(),
        )
        .unwrap();

        assert!(full.ampacity < single.ampacity);
    }
}
