use std::fmt;

use uom::{
    ConstZero,
    si::f64::{Length, ThermodynamicTemperature},
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    materials::ConduitMaterial,
    units::ThermalResistivity,
};

use super::super::error::InputError;
use super::Geometry;

/// Installation topology, dispatched once per calculation.
///
/// Each variant knows how to describe its thermal environment; the solver
/// asks the thermal network for the variant's resistances without inspecting
/// the variant again.
#[derive(Debug, Clone, PartialEq)]
pub enum Installation {
    DirectBuried(DirectBuried),
    Conduit(Conduit),
    DuctBank(DuctBank),
}

/// Discriminant of [`Installation`], reported on the rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallationKind {
    DirectBuried,
    Conduit,
    DuctBank,
}

impl fmt::Display for InstallationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DirectBuried => "direct_buried",
            Self::Conduit => "conduit",
            Self::DuctBank => "duct_bank",
        };
        f.write_str(name)
    }
}

impl Installation {
    #[must_use]
    pub fn kind(&self) -> InstallationKind {
        match self {
            Self::DirectBuried(_) => InstallationKind::DirectBuried,
            Self::Conduit(_) => InstallationKind::Conduit,
            Self::DuctBank(_) => InstallationKind::DuctBank,
        }
    }

    /// Ambient soil temperature at the installation.
    #[must_use]
    pub fn ambient_temp(&self) -> ThermodynamicTemperature {
        match self {
            Self::DirectBuried(d) => d.ambient_temp,
            Self::Conduit(c) => c.ambient_temp,
            Self::DuctBank(b) => b.ambient_temp,
        }
    }

    /// Axial spacing between phase conductors, used by the proximity effect.
    #[must_use]
    pub fn phase_spacing(&self) -> Length {
        match self {
            Self::DirectBuried(d) => d.spacing,
            Self::Conduit(c) => c.spacing,
            Self::DuctBank(b) => b.duct_spacing_h,
        }
    }

    pub(crate) fn validate(&self, geometry: &Geometry) -> Result<(), InputError> {
        match self {
            Self::DirectBuried(d) => d.validate(),
            Self::Conduit(c) => c.validate(geometry),
            Self::DuctBank(b) => b.validate(geometry),
        }
    }
}

/// Cable buried directly in soil.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectBuried {
    /// Burial depth to the cable center.
    pub depth: Length,
    /// Native soil thermal resistivity.
    pub soil_resistivity: ThermalResistivity,
    /// Ambient soil temperature at burial depth.
    pub ambient_temp: ThermodynamicTemperature,
    /// Axial spacing between phases; zero for a single cable.
    pub spacing: Length,
    /// Number of parallel circuits sharing the trench.
    pub circuits: usize,
}

impl DirectBuried {
    #[must_use]
    pub fn new(
        depth: Length,
        soil_resistivity: ThermalResistivity,
        ambient_temp: ThermodynamicTemperature,
    ) -> Self {
        Self {
            depth,
            soil_resistivity,
            ambient_temp,
            spacing: Length::ZERO,
            circuits: 1,
        }
    }

    /// Sets the phase spacing and circuit count.
    #[must_use]
    pub fn with_circuits(mut self, spacing: Length, circuits: usize) -> Self {
        self.spacing = spacing;
        self.circuits = circuits;
        self
    }

    fn validate(&self) -> Result<(), InputError> {
        validate_burial(self.depth, self.soil_resistivity, self.spacing)
    }
}

/// Cable pulled into a buried conduit.
#[derive(Debug, Clone, PartialEq)]
pub struct Conduit {
    /// Burial depth to the conduit center.
    pub depth: Length,
    pub soil_resistivity: ThermalResistivity,
    pub ambient_temp: ThermodynamicTemperature,
    /// Axial spacing between conduits; zero for a single conduit.
    pub spacing: Length,
    /// Conduit bore (inner diameter).
    pub inner_diameter: Length,
    /// Conduit outer diameter.
    pub outer_diameter: Length,
    pub material: ConduitMaterial,
    /// Duct wall thermal resistivity override.
    pub wall_resistivity: Option<ThermalResistivity>,
    /// Number of parallel conduits in the trench.
    pub conduits: usize,
}

impl Conduit {
    #[must_use]
    pub fn new(
        depth: Length,
        soil_resistivity: ThermalResistivity,
        ambient_temp: ThermodynamicTemperature,
        inner_diameter: Length,
        outer_diameter: Length,
        material: ConduitMaterial,
    ) -> Self {
        Self {
            depth,
            soil_resistivity,
            ambient_temp,
            spacing: Length::ZERO,
            inner_diameter,
            outer_diameter,
            material,
            wall_resistivity: None,
            conduits: 1,
        }
    }

    /// Sets the conduit spacing and count.
    #[must_use]
    pub fn with_conduit_row(mut self, spacing: Length, conduits: usize) -> Self {
        self.spacing = spacing;
        self.conduits = conduits;
        self
    }

    /// Sets a datasheet duct wall resistivity.
    #[must_use]
    pub fn with_wall_resistivity(mut self, resistivity: ThermalResistivity) -> Self {
        self.wall_resistivity = Some(resistivity);
        self
    }

    /// Resolved duct wall resistivity, K·m/W.
    #[must_use]
    pub fn resolved_wall_resistivity(&self) -> f64 {
        self.wall_resistivity
            .map_or_else(|| self.material.wall_resistivity(), |rho| rho.value)
    }

    fn validate(&self, geometry: &Geometry) -> Result<(), InputError> {
        validate_burial(self.depth, self.soil_resistivity, self.spacing)?;
        validate_duct_walls(
            self.inner_diameter,
            self.outer_diameter,
            self.wall_resistivity,
            geometry,
        )
    }
}

/// Duct bank: a grid of ducts embedded in a concrete envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct DuctBank {
    /// Burial depth to the top of the concrete envelope.
    pub depth: Length,
    pub soil_resistivity: ThermalResistivity,
    /// Thermal resistivity of the concrete envelope.
    pub concrete_resistivity: ThermalResistivity,
    pub ambient_temp: ThermodynamicTemperature,
    /// Envelope width.
    pub bank_width: Length,
    /// Envelope height.
    pub bank_height: Length,
    pub duct_rows: usize,
    pub duct_cols: usize,
    /// Horizontal center-to-center duct spacing.
    pub duct_spacing_h: Length,
    /// Vertical center-to-center duct spacing.
    pub duct_spacing_v: Length,
    /// Duct bore (inner diameter).
    pub duct_inner_diameter: Length,
    /// Duct outer diameter.
    pub duct_outer_diameter: Length,
    pub duct_material: ConduitMaterial,
    /// Duct wall thermal resistivity override.
    pub wall_resistivity: Option<ThermalResistivity>,
    /// Occupied `(row, col)` positions in the duct grid.
    pub occupied_ducts: Vec<(usize, usize)>,
    /// Rectangular soil/backfill regions above and around the bank.
    pub backfill_layers: Vec<BackfillLayer>,
    /// Explicit cable coordinates; two or more trigger per-cable solving.
    pub cable_positions: Vec<CablePosition>,
}

impl DuctBank {
    /// Resolved duct wall resistivity, K·m/W.
    #[must_use]
    pub fn resolved_wall_resistivity(&self) -> f64 {
        self.wall_resistivity
            .map_or_else(|| self.duct_material.wall_resistivity(), |rho| rho.value)
    }

    /// Depth to the thermal center of the bank.
    #[must_use]
    pub fn equivalent_depth(&self) -> Length {
        self.depth + 0.5 * self.bank_height
    }

    /// Diameter of the circle with the bank's cross-sectional area scale.
    #[must_use]
    pub fn equivalent_diameter(&self) -> Length {
        (self.bank_width * self.bank_height).sqrt()
    }

    /// Center of the duct at `(row, col)`, meters, x from bank centerline and
    /// y downward from the surface.
    #[must_use]
    pub fn duct_center(&self, row: usize, col: usize) -> (f64, f64) {
        let col_offset = col as f64 - (self.duct_cols as f64 - 1.0) / 2.0;
        let row_offset = row as f64 - (self.duct_rows as f64 - 1.0) / 2.0;
        let x = col_offset * self.duct_spacing_h.value;
        let y = (self.depth + 0.5 * self.bank_height).value + row_offset * self.duct_spacing_v.value;
        (x, y)
    }

    /// Cable positions for mutual-heating analysis.
    ///
    /// Explicit positions win; otherwise positions are derived from the
    /// occupied ducts, one circuit per duct.
    #[must_use]
    pub fn effective_positions(&self) -> Vec<CablePosition> {
        if !self.cable_positions.is_empty() {
            return self.cable_positions.clone();
        }
        self.occupied_ducts
            .iter()
            .enumerate()
            .map(|(i, &(row, col))| {
                let (x, y) = self.duct_center(row, col);
                CablePosition {
                    x: Length::new::<uom::si::length::meter>(x),
                    y: Length::new::<uom::si::length::meter>(y),
                    circuit_id: u32::try_from(i + 1).unwrap_or(u32::MAX),
                    phase: String::new(),
                    cable_id: None,
                }
            })
            .collect()
    }

    fn validate(&self, geometry: &Geometry) -> Result<(), InputError> {
        validate_burial(self.depth, self.soil_resistivity, self.duct_spacing_h)?;
        if StrictlyPositive::check(&self.concrete_resistivity.value).is_err() {
            return Err(InputError::NotStrictlyPositive {
                field: "concrete resistivity",
            });
        }
        for (value, field) in [
            (self.bank_width.value, "bank width"),
            (self.bank_height.value, "bank height"),
        ] {
            if StrictlyPositive::check(&value).is_err() {
                return Err(InputError::NotStrictlyPositive { field });
            }
        }
        if NonNegative::check(&self.duct_spacing_v.value).is_err() {
            return Err(InputError::Negative {
                field: "vertical duct spacing",
            });
        }
        if self.duct_rows == 0 {
            return Err(InputError::EmptyDuctBank { what: "duct row" });
        }
        if self.duct_cols == 0 {
            return Err(InputError::EmptyDuctBank { what: "duct column" });
        }
        if self.occupied_ducts.is_empty() && self.cable_positions.is_empty() {
            return Err(InputError::EmptyDuctBank {
                what: "occupied duct or cable position",
            });
        }
        validate_duct_walls(
            self.duct_inner_diameter,
            self.duct_outer_diameter,
            self.wall_resistivity,
            geometry,
        )?;
        for layer in &self.backfill_layers {
            layer.validate()?;
        }
        for position in &self.cable_positions {
            if StrictlyPositive::check(&position.y.value).is_err() {
                return Err(InputError::NotStrictlyPositive {
                    field: "cable position depth",
                });
            }
        }
        Ok(())
    }
}

/// A named rectangular soil or backfill region.
///
/// `y` grows downward from the ground surface; `x` is centered on the trench
/// centerline.
#[derive(Debug, Clone, PartialEq)]
pub struct BackfillLayer {
    pub name: String,
    /// Horizontal center of the region.
    pub x_center: Length,
    /// Depth of the region's top edge.
    pub y_top: Length,
    pub width: Length,
    pub height: Length,
    pub thermal_resistivity: ThermalResistivity,
}

impl BackfillLayer {
    /// Depth of the region's bottom edge.
    #[must_use]
    pub fn y_bottom(&self) -> Length {
        self.y_top + self.height
    }

    /// Left edge of the region.
    #[must_use]
    pub fn x_left(&self) -> Length {
        self.x_center - 0.5 * self.width
    }

    /// Right edge of the region.
    #[must_use]
    pub fn x_right(&self) -> Length {
        self.x_center + 0.5 * self.width
    }

    /// Whether the point `(x, y)` lies inside the region.
    #[must_use]
    pub fn contains(&self, x: Length, y: Length) -> bool {
        x >= self.x_left() && x <= self.x_right() && y >= self.y_top && y <= self.y_bottom()
    }

    fn validate(&self) -> Result<(), InputError> {
        for (value, field) in [
            (self.width.value, "backfill layer width"),
            (self.height.value, "backfill layer height"),
            (
                self.thermal_resistivity.value,
                "backfill layer resistivity",
            ),
        ] {
            if StrictlyPositive::check(&value).is_err() {
                return Err(InputError::NotStrictlyPositive { field });
            }
        }
        Ok(())
    }
}

/// Explicit cable coordinate inside a duct bank.
#[derive(Debug, Clone, PartialEq)]
pub struct CablePosition {
    /// Horizontal position from the bank centerline.
    pub x: Length,
    /// Depth below the ground surface.
    pub y: Length,
    pub circuit_id: u32,
    /// Phase label, e.g. "A".
    pub phase: String,
    pub cable_id: Option<String>,
}

impl CablePosition {
    #[must_use]
    pub fn new(x: Length, y: Length, circuit_id: u32, phase: &str) -> Self {
        Self {
            x,
            y,
            circuit_id,
            phase: phase.to_string(),
            cable_id: None,
        }
    }
}

fn validate_burial(
    depth: Length,
    soil_resistivity: ThermalResistivity,
    spacing: Length,
) -> Result<(), InputError> {
    if StrictlyPositive::check(&depth.value).is_err() {
        return Err(InputError::NotStrictlyPositive {
            field: "burial depth",
        });
    }
    if StrictlyPositive::check(&soil_resistivity.value).is_err() {
        return Err(InputError::NotStrictlyPositive {
            field: "soil resistivity",
        });
    }
    if NonNegative::check(&spacing.value).is_err() {
        return Err(InputError::Negative { field: "spacing" });
    }
    Ok(())
}

fn validate_duct_walls(
    inner: Length,
    outer: Length,
    wall_resistivity: Option<ThermalResistivity>,
    geometry: &Geometry,
) -> Result<(), InputError> {
    if StrictlyPositive::check(&inner.value).is_err() {
        return Err(InputError::NotStrictlyPositive {
            field: "duct inner diameter",
        });
    }
    if outer <= inner {
        return Err(InputError::WallGeometry {
            inner_mm: inner.value * 1e3,
            outer_mm: outer.value * 1e3,
        });
    }
    if geometry.overall_diameter() >= inner {
        return Err(InputError::CableExceedsDuct {
            cable_mm: geometry.overall_diameter().value * 1e3,
            bore_mm: inner.value * 1e3,
        });
    }
    Ok(())
}
