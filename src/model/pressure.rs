use crate::constants::{LayerBoundary, LayerKind, GAS_CONSTANT_AIR, SURFACE_GRAVITY};
use crate::errors::AtmosphereError;
use crate::model::geopotential::geopotential_height;
use crate::model::layer::get_layer;

impl LayerBoundary {
    /// Pressure (Pa) at a geopotential height inside this layer.
    ///
    /// Isothermal layers are anchored at their start height, which is the end
    /// height of the gradient layer below and where `start_pressure` was
    /// evaluated.
    pub fn pressure_at(&self, geopotential_height: f64) -> f64 {
        match self.kind {
            LayerKind::Isothermal => {
                let exponent = -SURFACE_GRAVITY / (GAS_CONSTANT_AIR * self.start_temperature)
                    * (geopotential_height - self.start_height);
                self.start_pressure * exponent.exp()
            }
            LayerKind::Gradient { lapse_rate } => {
                let temperature = self.temperature_at(geopotential_height);
                let exponent = -SURFACE_GRAVITY / (lapse_rate * GAS_CONSTANT_AIR);
                self.start_pressure * (temperature / self.start_temperature).powf(exponent)
            }
        }
    }
}

pub fn isa_pressure(geometric_height: f64) -> Result<f64, AtmosphereError> {
    let layer = get_layer(geometric_height)?;
    Ok(layer.pressure_at(geopotential_height(geometric_height)))
}
