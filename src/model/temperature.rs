use crate::constants::{LayerBoundary, LayerKind};
use crate::errors::AtmosphereError;
use crate::model::geopotential::geopotential_height;
use crate::model::layer::get_layer;

impl LayerBoundary {
    /// Temperature (K) at a geopotential height inside this layer. Not clamped.
    pub fn temperature_at(&self, geopotential_height: f64) -> f64 {
        match self.kind {
            LayerKind::Isothermal => self.start_temperature,
            LayerKind::Gradient { lapse_rate } => {
                self.start_temperature + lapse_rate * (geopotential_height - self.start_height)
            }
        }
    }
}

pub fn isa_temperature(geometric_height: f64) -> Result<f64, AtmosphereError> {
    let layer = get_layer(geometric_height)?;
    Ok(layer.temperature_at(geopotential_height(geometric_height)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEA_LEVEL_TEMPERATURE;
    use crate::model::geopotential::geometric_height;
    use crate::model::layer::Layer;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_sea_level_temperature() {
        assert_eq!(isa_temperature(0.0), Ok(SEA_LEVEL_TEMPERATURE));
    }

    #[test]
    fn test_gradient_layer_ends() {
        let cases = [
            (11_000.0, 216.66),
            (47_000.0, 282.66),
            (79_000.0, 165.66),
            (105_000.0, 225.66),
        ];
        for (height, expected) in cases {
            let temperature = isa_temperature(geometric_height(height)).unwrap();
            assert_abs_diff_eq!(temperature, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_isothermal_layers_are_constant() {
        for (low, high, expected) in [
            (11_500.0, 24_500.0, 216.66),
            (47_500.0, 52_500.0, 282.66),
            (79_500.0, 89_500.0, 165.66),
        ] {
            let low = isa_temperature(geometric_height(low)).unwrap();
            let high = isa_temperature(geometric_height(high)).unwrap();
            assert_eq!(low, expected);
            assert_eq!(high, expected);
        }
    }

    #[test]
    fn test_lapse_rate_signs() {
        // Troposphere cools, upper stratosphere warms, mesosphere cools,
        // thermosphere warms.
        let midpoints = [
            (Layer::Gradient1, 5_500.0, -1.0),
            (Layer::Gradient2, 36_000.0, 1.0),
            (Layer::Gradient3, 66_000.0, -1.0),
            (Layer::Gradient4, 97_500.0, 1.0),
        ];
        for (layer, height, sign) in midpoints {
            let slope = layer.temperature_at(height + 1.0) - layer.temperature_at(height);
            assert!(slope * sign > 0.0, "{} has the wrong lapse sign", layer);
        }
    }

    #[test]
    fn test_gradient_formula() {
        let h = 5_000.0;
        let expected = 288.16 - 6.5e-3 * h;
        assert_abs_diff_eq!(Layer::Gradient1.temperature_at(h), expected, epsilon = EPSILON);
    }

    #[test]
    fn test_out_of_range_propagates() {
        assert!(matches!(
            isa_temperature(200_000.0),
            Err(AtmosphereError::OutOfRange { .. })
        ));
    }
}
