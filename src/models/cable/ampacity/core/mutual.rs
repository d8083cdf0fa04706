//! Per-cable mutual heating for explicit duct-bank positions.
//!
//! The image method gives the steady-state interference between buried heat
//! sources: cable j raises the temperature at cable i as if a mirrored sink
//! above the ground surface drew the heat back out. Each ordered pair
//! contributes a coupling resistance, and couplings are weighted by each
//! cable's actual heat output. The heat outputs depend on the ampacities
//! being solved, so the engine refines both together.

use std::f64::consts::PI;

use super::input::{CablePosition, DuctBank};
use super::thermal::{CableEnvironment, cable_environment};

/// Convergence settings for the per-cable refinement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MutualConfig {
    /// Stop once the largest per-cable ampacity change falls below this, A.
    pub tolerance_a: f64,
    /// Iteration cap; the last iterate is returned when it is reached.
    pub max_iterations: usize,
}

impl Default for MutualConfig {
    fn default() -> Self {
        Self {
            tolerance_a: 0.5,
            max_iterations: 20,
        }
    }
}

/// Electro-thermal context shared by every cable in the bank.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SharedContext {
    /// `r1 + r2 + r3`, K·m/W.
    pub fixed_resistance: f64,
    /// Insulation resistance alone, for the half-weighted dielectric path.
    pub r1: f64,
    /// Conductor AC resistance at the temperature limit, Ω/m.
    pub rac: f64,
    /// Shield loss factor.
    pub lambda1: f64,
    /// Dielectric loss, W/m.
    pub dielectric_loss: f64,
    /// Temperature budget between ambient and the conductor limit, °C.
    pub delta_t_available: f64,
}

/// One cable's solved rating inside the bank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PerCableSolution {
    /// Own earth path, K·m/W.
    pub r4: f64,
    /// Earth path plus weighted couplings, K·m/W.
    pub r4_effective: f64,
    /// Own concrete envelope resistance, K·m/W.
    pub r_concrete: f64,
    /// Solved ampacity, A.
    pub ampacity_a: f64,
}

impl PerCableSolution {
    /// Total conductor-to-ambient resistance for this position, K·m/W.
    pub fn total_resistance(&self, context: &SharedContext) -> f64 {
        context.fixed_resistance + self.r_concrete + self.r4_effective
    }
}

/// Outcome of the per-cable refinement.
#[derive(Debug, Clone)]
pub(crate) struct MutualOutcome {
    pub solutions: Vec<PerCableSolution>,
    /// Refinement iterations performed.
    pub iterations: usize,
    /// Unset when the cap was reached before the tolerance.
    pub converged: bool,
}

/// Solves every explicit position.
///
/// Seeds with unweighted coupling sums, then alternates heat-output
/// weighting and ampacity recomputation until the largest change drops
/// below tolerance or the cap is hit; the last iterate is always returned.
/// A single position degenerates to the plain single-cable formula.
pub(crate) fn solve_positions(
    bank: &DuctBank,
    positions: &[CablePosition],
    context: &SharedContext,
    config: &MutualConfig,
) -> MutualOutcome {
    let environments: Vec<CableEnvironment> = positions
        .iter()
        .map(|position| cable_environment(bank, position))
        .collect();

    let couplings = coupling_matrix(bank, positions, &environments);
    let n = positions.len();

    // Seed with unweighted couplings.
    let mut solutions: Vec<PerCableSolution> = (0..n)
        .map(|i| {
            let r4_effective = environments[i].r4 + couplings[i].iter().sum::<f64>();
            solve_single(&environments[i], r4_effective, context)
        })
        .collect();

    let mut iterations = 0;
    let mut converged = false;
    while iterations < config.max_iterations {
        iterations += 1;

        // Relative heat-output weights; cables pushing more heat into the
        // soil couple more strongly.
        let heat: Vec<f64> = solutions
            .iter()
            .map(|s| s.ampacity_a.powi(2) * context.rac * (1.0 + context.lambda1))
            .collect();
        let mean_heat = heat.iter().sum::<f64>() / n as f64;
        if mean_heat == 0.0 {
            converged = true;
            break;
        }

        let mut max_change = 0.0_f64;
        let next: Vec<PerCableSolution> = (0..n)
            .map(|i| {
                let coupled: f64 = couplings[i]
                    .iter()
                    .enumerate()
                    .map(|(j, f)| (heat[j] / mean_heat) * f)
                    .sum();
                let solution = solve_single(&environments[i], environments[i].r4 + coupled, context);
                max_change = max_change.max((solution.ampacity_a - solutions[i].ampacity_a).abs());
                solution
            })
            .collect();

        solutions = next;
        if max_change < config.tolerance_a {
            converged = true;
            break;
        }
    }

    MutualOutcome {
        solutions,
        iterations,
        converged,
    }
}

/// Image-method coupling matrix; `couplings[i][j]` is the extra thermal
/// resistance cable j imposes on cable i, with the self term held at zero.
fn coupling_matrix(
    bank: &DuctBank,
    positions: &[CablePosition],
    environments: &[CableEnvironment],
) -> Vec<Vec<f64>> {
    let n = positions.len();
    // Two cables cannot sit closer than one duct.
    let min_distance = bank.duct_outer_diameter.value;

    (0..n)
        .map(|i| {
            let rho = environments[i].path_resistivity;
            (0..n)
                .map(|j| {
                    if i == j {
                        return 0.0;
                    }
                    let dx = positions[i].x.value - positions[j].x.value;
                    let dy = positions[i].y.value - positions[j].y.value;
                    let d = (dx.powi(2) + dy.powi(2)).sqrt().max(min_distance);
                    let dy_image = positions[i].y.value + positions[j].y.value;
                    let d_image = (dx.powi(2) + dy_image.powi(2)).sqrt();
                    (rho / (2.0 * PI)) * (d_image / d).ln()
                })
                .collect()
        })
        .collect()
}

/// Single-cable ampacity formula at a given effective earth resistance.
fn solve_single(
    environment: &CableEnvironment,
    r4_effective: f64,
    context: &SharedContext,
) -> PerCableSolution {
    let r_conductor = (1.0 + context.lambda1)
        * (context.fixed_resistance + environment.r_concrete + r4_effective);
    let r_dielectric = context.fixed_resistance - 0.5 * context.r1
        + environment.r_concrete
        + r4_effective;

    let delta_t_conductor =
        context.delta_t_available - context.dielectric_loss * r_dielectric;

    let ampacity_a = if delta_t_conductor > 0.0 {
        (delta_t_conductor / (context.rac * r_conductor)).sqrt()
    } else {
        0.0
    };

    PerCableSolution {
        r4: environment.r4,
        r4_effective,
        r_concrete: environment.r_concrete,
        ampacity_a,
    }
}
