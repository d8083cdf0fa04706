//! Layered thermal-resistance network.
//!
//! Builds the serial thermal path from conductor to ambient earth for each
//! installation topology: insulation and jacket (all variants), duct air gap
//! and wall (conduit and duct bank), concrete envelope (duct bank), and the
//! external earth path with its mutual-heating factor.

pub(crate) mod backfill;
mod cable_layers;
mod duct;
mod earth;

pub use cable_layers::{insulation_resistance, jacket_resistance};
pub use duct::{air_gap_resistance, concrete_geometric_factor, concrete_resistance, wall_resistance};
pub use earth::{earth_resistance, neighbor_increment, row_mutual_factor, trefoil_mutual_factor};

use uom::{
    ConstZero,
    si::{f64::Length, length::millimeter},
};

use super::input::{CablePosition, CableSpec, Conduit, DirectBuried, DuctBank, Geometry, Installation};

/// Per-layer thermal resistances, K·m/W, with the mutual-heating factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalResistances {
    /// Insulation (including semiconducting screens).
    pub r1: f64,
    /// Jacket.
    pub r2: f64,
    /// Duct air gap plus wall; zero for direct burial.
    pub r3: f64,
    /// Concrete envelope; zero outside duct banks.
    pub r_concrete: f64,
    /// Earth path of the single source.
    pub r4: f64,
    /// Mutual heating factor applied to the earth path, ≥ 1.
    pub mutual_heating_factor: f64,
}

impl ThermalResistances {
    /// Earth resistance inflated by mutual heating.
    #[must_use]
    pub fn r4_effective(&self) -> f64 {
        self.r4 * self.mutual_heating_factor
    }

    /// Total conductor-to-ambient resistance.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.r1 + self.r2 + self.r3 + self.r_concrete + self.r4_effective()
    }
}

/// Computes the thermal network for the selected installation variant.
#[must_use]
pub fn compute(
    cable: &CableSpec,
    geometry: &Geometry,
    installation: &Installation,
) -> ThermalResistances {
    let r1 = insulation_resistance(cable, geometry);
    let r2 = jacket_resistance(cable, geometry);

    match installation {
        Installation::DirectBuried(buried) => direct_buried(r1, r2, geometry, buried),
        Installation::Conduit(conduit) => in_conduit(r1, r2, geometry, conduit),
        Installation::DuctBank(bank) => in_duct_bank(r1, r2, geometry, bank),
    }
}

fn direct_buried(
    r1: f64,
    r2: f64,
    geometry: &Geometry,
    buried: &DirectBuried,
) -> ThermalResistances {
    let rho = buried.soil_resistivity.value;
    let depth = buried.depth.value;
    let r4 = earth_resistance(rho, depth, geometry.overall_diameter().value);

    let mutual_heating_factor = if buried.spacing.value > 0.0 && buried.circuits > 1 {
        trefoil_mutual_factor(rho, buried.spacing.value, depth, r4)
    } else {
        1.0
    };

    ThermalResistances {
        r1,
        r2,
        r3: 0.0,
        r_concrete: 0.0,
        r4,
        mutual_heating_factor,
    }
}

fn in_conduit(r1: f64, r2: f64, geometry: &Geometry, conduit: &Conduit) -> ThermalResistances {
    let r3 = air_gap_resistance(
        geometry.overall_diameter().get::<millimeter>(),
        conduit.material,
    ) + wall_resistance(
        conduit.inner_diameter.get::<millimeter>(),
        conduit.outer_diameter.get::<millimeter>(),
        conduit.resolved_wall_resistivity(),
    );

    let rho = conduit.soil_resistivity.value;
    let depth = conduit.depth.value;
    let r4 = earth_resistance(rho, depth, conduit.outer_diameter.value);

    let mutual_heating_factor = if conduit.spacing.value > 0.0 && conduit.conduits > 1 {
        row_mutual_factor(rho, conduit.spacing.value, depth, conduit.conduits, r4)
    } else {
        1.0
    };

    ThermalResistances {
        r1,
        r2,
        r3,
        r_concrete: 0.0,
        r4,
        mutual_heating_factor,
    }
}

/// Aggregate duct-bank network with the bank as one equivalent source.
///
/// Mutual heating between the bank's own ducts is not modeled here; banks
/// with more than one occupied duct route through the per-cable engine
/// instead.
fn in_duct_bank(r1: f64, r2: f64, geometry: &Geometry, bank: &DuctBank) -> ThermalResistances {
    let r3 = duct_r3(geometry, bank);

    // Bank-centered duct for the envelope factor.
    let half_height = 0.5 * bank.bank_height.value;
    let half_width = 0.5 * bank.bank_width.value;
    let r_concrete = concrete_resistance(
        bank.concrete_resistivity.value,
        concrete_geometric_factor(
            [half_height, half_height, half_width, half_width],
            0.5 * bank.duct_outer_diameter.value,
            bank.bank_width.value,
            bank.bank_height.value,
        ),
    );

    let center_x = Length::ZERO;
    let center_y = bank.equivalent_depth();
    let rho = backfill::resistivity_at(
        center_x,
        center_y,
        &bank.backfill_layers,
        bank.soil_resistivity.value,
    );
    let r4 = earth_resistance(rho, center_y.value, bank.equivalent_diameter().value);

    ThermalResistances {
        r1,
        r2,
        r3,
        r_concrete,
        r4,
        mutual_heating_factor: 1.0,
    }
}

/// Air gap plus duct wall for a duct-bank duct.
pub(crate) fn duct_r3(geometry: &Geometry, bank: &DuctBank) -> f64 {
    air_gap_resistance(
        geometry.overall_diameter().get::<millimeter>(),
        bank.duct_material,
    ) + wall_resistance(
        bank.duct_inner_diameter.get::<millimeter>(),
        bank.duct_outer_diameter.get::<millimeter>(),
        bank.resolved_wall_resistivity(),
    )
}

/// Thermal environment of one explicit cable position in a duct bank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CableEnvironment {
    /// Concrete envelope resistance from this duct's own boundary distances.
    pub r_concrete: f64,
    /// This cable's own earth path, from its containing layer and depth.
    pub r4: f64,
    /// Blended resistivity of this cable's path to the surface, used for
    /// image-method couplings.
    pub path_resistivity: f64,
}

pub(crate) fn cable_environment(bank: &DuctBank, position: &CablePosition) -> CableEnvironment {
    let x = position.x.value;
    let y = position.y.value;

    let top = bank.depth.value;
    let bottom = top + bank.bank_height.value;
    let half_width = 0.5 * bank.bank_width.value;
    let boundary_distances = [y - top, bottom - y, x + half_width, half_width - x];

    let r_concrete = concrete_resistance(
        bank.concrete_resistivity.value,
        concrete_geometric_factor(
            boundary_distances,
            0.5 * bank.duct_outer_diameter.value,
            bank.bank_width.value,
            bank.bank_height.value,
        ),
    );

    let rho_local = backfill::resistivity_at(
        position.x,
        position.y,
        &bank.backfill_layers,
        bank.soil_resistivity.value,
    );
    let r4 = earth_resistance(rho_local, y, bank.duct_outer_diameter.value);

    let path_resistivity = backfill::mutual_path_resistivity(
        position.x,
        position.y,
        &bank.backfill_layers,
        bank.soil_resistivity.value,
    );

    CableEnvironment {
        r_concrete,
        r4,
        path_resistivity,
    }
}
