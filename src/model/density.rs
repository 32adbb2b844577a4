use crate::constants::{LayerBoundary, LayerKind, GAS_CONSTANT_AIR, SURFACE_GRAVITY};
use crate::errors::AtmosphereError;
use crate::model::geopotential::geopotential_height;
use crate::model::layer::get_layer;

impl LayerBoundary {
    /// Density (kg/m³) at a geopotential height inside this layer.
    pub fn density_at(&self, geopotential_height: f64) -> f64 {
        match self.kind {
            LayerKind::Isothermal => {
                let exponent = -SURFACE_GRAVITY / (GAS_CONSTANT_AIR * self.start_temperature)
                    * (geopotential_height - self.start_height);
                self.start_density * exponent.exp()
            }
            LayerKind::Gradient { lapse_rate } => {
                let temperature = self.temperature_at(geopotential_height);
                // One more than the pressure exponent, from p = ρ·R·T.
                let exponent = -(SURFACE_GRAVITY / (lapse_rate * GAS_CONSTANT_AIR) + 1.0);
                self.start_density * (temperature / self.start_temperature).powf(exponent)
            }
        }
    }
}

pub fn isa_density(geometric_height: f64) -> Result<f64, AtmosphereError> {
    let layer = get_layer(geometric_height)?;
    Ok(layer.density_at(geopotential_height(geometric_height)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEA_LEVEL_DENSITY;
    use crate::model::geopotential::geometric_height;
    use crate::model::layer::Layer;
    use approx::assert_relative_eq;

    #[test]
    fn test_sea_level_density() {
        assert_eq!(isa_density(0.0), Ok(SEA_LEVEL_DENSITY));
    }

    #[test]
    fn test_tropopause_density() {
        let density = isa_density(geometric_height(11_000.0)).unwrap();
        assert_relative_eq!(density, 0.363937, max_relative = 1e-5);
    }

    #[test]
    fn test_density_tracks_ideal_gas_ratio() {
        // ρ/ρ₁ = (p/p₁)·(T₁/T) holds in every layer.
        for layer in Layer::ALL {
            let boundary = layer.boundary();
            let h = 0.5 * (boundary.start_height + boundary.end_height);
            let pressure_ratio = layer.pressure_at(h) / boundary.start_pressure;
            let temperature_ratio = boundary.start_temperature / layer.temperature_at(h);
            let density_ratio = layer.density_at(h) / boundary.start_density;
            assert_relative_eq!(
                density_ratio,
                pressure_ratio * temperature_ratio,
                max_relative = 1e-10
            );
        }
    }

    #[test]
    fn test_out_of_range_propagates() {
        assert!(matches!(
            isa_density(geometric_height(105_100.0)),
            Err(AtmosphereError::OutOfRange { .. })
        ));
    }
}
