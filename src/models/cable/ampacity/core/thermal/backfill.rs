//! Layered backfill resolution.
//!
//! Duct banks are often trenched through several rectangular backfill
//! regions with very different thermal resistivities. Two questions arise:
//! which resistivity surrounds a given cable (for its own earth path), and
//! what a heat path from a cable to the surface effectively sees (for
//! mutual-heating terms, where the image method assumes homogeneous soil).

use uom::si::f64::Length;

use super::super::input::BackfillLayer;

/// Resistivity of the layer containing the point, K·m/W.
///
/// First matching layer wins; native soil when no layer contains the point.
#[must_use]
pub fn resistivity_at(
    x: Length,
    y: Length,
    layers: &[BackfillLayer],
    native_resistivity: f64,
) -> f64 {
    layers
        .iter()
        .find(|layer| layer.contains(x, y))
        .map_or(native_resistivity, |layer| layer.thermal_resistivity.value)
}

/// Effective resistivity of the vertical path from a cable to the surface,
/// K·m/W.
///
/// Escaping heat crosses every layer above the cable, so the layers are
/// blended along the path at the cable's x. Layers nearer the surface carry
/// more weight (up to 2×): all heat must cross them, whereas deep layers
/// only intercept part of the heat flow. A high-resistivity surface layer
/// blankets the whole trench, which thickness-weighted blending understates;
/// when one is present the blend is amplified by up to 4×.
#[must_use]
pub fn mutual_path_resistivity(
    x: Length,
    y: Length,
    layers: &[BackfillLayer],
    native_resistivity: f64,
) -> f64 {
    let depth = y.value;
    if depth <= 0.0 || layers.is_empty() {
        return native_resistivity;
    }

    // Segment the path at every clipped layer boundary, then resolve each
    // segment midpoint with the same first-match rule as `resistivity_at`.
    let mut boundaries = vec![0.0, depth];
    for layer in layers {
        for edge in [layer.y_top.value, layer.y_bottom().value] {
            if edge > 0.0 && edge < depth {
                boundaries.push(edge);
            }
        }
    }
    boundaries.sort_by(f64::total_cmp);

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut surface_resistivity = native_resistivity;

    for pair in boundaries.windows(2) {
        let (top, bottom) = (pair[0], pair[1]);
        let thickness = bottom - top;
        if thickness <= 0.0 {
            continue;
        }

        let mid = 0.5 * (top + bottom);
        let rho = resistivity_at(
            x,
            Length::new::<uom::si::length::meter>(mid),
            layers,
            native_resistivity,
        );

        if top == 0.0 {
            surface_resistivity = rho;
        }

        let weight = thickness * (2.0 - mid / depth);
        weighted_sum += weight * rho;
        weight_total += weight;
    }

    let blended = weighted_sum / weight_total;

    if surface_resistivity > native_resistivity {
        let amplification =
            (1.0 + 0.5 * (surface_resistivity / native_resistivity - 1.0)).min(4.0);
        blended * amplification
    } else {
        blended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::meter;

    use crate::support::units::kelvin_meter_per_watt;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn layer(name: &str, y_top: f64, height: f64, width: f64, rho: f64) -> BackfillLayer {
        BackfillLayer {
            name: name.to_string(),
            x_center: m(0.0),
            y_top: m(y_top),
            width: m(width),
            height: m(height),
            thermal_resistivity: kelvin_meter_per_watt(rho),
        }
    }

    #[test]
    fn containing_layer_wins_over_native_soil() {
        let layers = vec![layer("Thermal Backfill", 0.5, 2.0, 10.0, 0.6)];

        assert_relative_eq!(resistivity_at(m(0.0), m(1.5), &layers, 1.3), 0.6);
        assert_relative_eq!(resistivity_at(m(0.0), m(3.0), &layers, 1.3), 1.3);
        assert_relative_eq!(resistivity_at(m(6.0), m(1.5), &layers, 1.3), 1.3);
    }

    #[test]
    fn uniform_native_soil_blends_to_itself() {
        let layers = vec![layer("Backfill", 0.5, 1.0, 10.0, 1.3)];
        assert_relative_eq!(
            mutual_path_resistivity(m(0.0), m(2.0), &layers, 1.3),
            1.3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn shallow_layers_outweigh_deep_ones() {
        // Same thickness of insulating backfill, once near the surface and
        // once at the cable: the shallow placement must dominate the blend.
        let shallow = vec![layer("Shallow", 0.0, 0.5, 10.0, 5.0)];
        let deep = vec![layer("Deep", 1.5, 0.5, 10.0, 5.0)];

        let blended_shallow = mutual_path_resistivity(m(0.0), m(2.0), &shallow, 1.0);
        let blended_deep = mutual_path_resistivity(m(0.0), m(2.0), &deep, 1.0);

        assert!(blended_shallow > blended_deep);
    }

    #[test]
    fn insulating_surface_layer_is_amplified_but_bounded() {
        let layers = vec![layer("Surface Ag", 0.0, 0.5, 10.0, 5.0)];
        let effective = mutual_path_resistivity(m(0.0), m(2.0), &layers, 1.0);

        // Above the naive thickness-weighted blend...
        let naive = (0.5 * 5.0 + 1.5 * 1.0) / 2.0;
        assert!(effective > naive);
        // ...but never more than 4× the blend itself.
        assert!(effective < 4.0 * naive * 2.0);
    }
}
