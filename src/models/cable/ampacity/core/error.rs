use thiserror::Error;

/// Errors raised by input validation, before any iteration runs.
///
/// The embedding service maps these to client-error responses. Unknown
/// material names cannot occur here, and neither can an out-of-range load
/// factor: materials are closed enums, and the load factor enforces its
/// interval at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A dimension, resistivity, or similar scalar that must be strictly
    /// positive is zero or negative.
    #[error("{field} must be strictly positive")]
    NotStrictlyPositive { field: &'static str },

    /// A scalar that may be zero but not negative is negative.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    /// The diameter over the insulation does not exceed the conductor
    /// diameter.
    #[error(
        "insulation outer diameter {outer_mm:.2} mm must exceed \
         conductor diameter {conductor_mm:.2} mm"
    )]
    InsulationGeometry { outer_mm: f64, conductor_mm: f64 },

    /// A duct or conduit wall with outer diameter not exceeding its bore.
    #[error("duct outer diameter {outer_mm:.2} mm must exceed its bore {inner_mm:.2} mm")]
    WallGeometry { inner_mm: f64, outer_mm: f64 },

    /// The cable does not fit inside the duct or conduit bore.
    #[error("cable diameter {cable_mm:.2} mm does not fit the duct bore {bore_mm:.2} mm")]
    CableExceedsDuct { cable_mm: f64, bore_mm: f64 },

    /// A duct bank grid with no rows, no columns, or no occupied ducts.
    #[error("duct bank must have at least one {what}")]
    EmptyDuctBank { what: &'static str },
}

/// Errors from an ampacity calculation.
///
/// Reaching the iteration cap is deliberately *not* an error: the rating is
/// returned with its iteration count at the cap and `converged` unset, so
/// callers can warn without losing the estimate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmpacityError {
    /// The inputs failed validation.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Dielectric heating alone exceeds the available temperature budget,
    /// so no positive current satisfies the conductor temperature limit.
    #[error(
        "dielectric losses exceed the available temperature rise: \
         ΔT available = {available_c:.2} °C, ΔT dielectric = {dielectric_c:.2} °C"
    )]
    ThermalInfeasibility {
        /// Budget between ambient and the conductor temperature limit, °C.
        available_c: f64,
        /// Temperature rise consumed by dielectric losses alone, °C.
        dielectric_c: f64,
    },
}
