pub mod density;
pub mod geopotential;
pub mod layer;
pub mod pressure;
pub mod temperature;

use crate::errors::AtmosphereError;
use layer::get_layer;

/// Full atmospheric state at one geometric altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereSample {
    pub geometric_height: f64,
    pub geopotential_height: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub density: f64,
}

impl AtmosphereSample {
    pub fn at(geometric_height: f64) -> Result<Self, AtmosphereError> {
        let layer = get_layer(geometric_height)?;
        let h = geopotential::geopotential_height(geometric_height);

        Ok(AtmosphereSample {
            geometric_height,
            geopotential_height: h,
            temperature: layer.temperature_at(h),
            pressure: layer.pressure_at(h),
            density: layer.density_at(h),
        })
    }
}
