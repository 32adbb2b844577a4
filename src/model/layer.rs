use std::fmt;

use log::{trace, warn};

use crate::constants::{LayerBoundary, LayerKind, BOUNDARY_TOLERANCE, LAYER_TABLE};
use crate::errors::AtmosphereError;
use crate::model::geopotential::geopotential_height;

/// The seven ISA regions, in ascending altitude order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Gradient1,
    Isothermal1,
    Gradient2,
    Isothermal2,
    Gradient3,
    Isothermal3,
    Gradient4,
}

impl Layer {
    pub const ALL: [Layer; 7] = [
        Layer::Gradient1,
        Layer::Isothermal1,
        Layer::Gradient2,
        Layer::Isothermal2,
        Layer::Gradient3,
        Layer::Isothermal3,
        Layer::Gradient4,
    ];

    /// Places a geopotential height into a layer. Each layer covers
    /// `[start, end + BOUNDARY_TOLERANCE)`; the scan runs bottom-up and the
    /// first match wins.
    pub fn classify(geopotential_height: f64) -> Result<Layer, AtmosphereError> {
        let found = Self::ALL.into_iter().find(|layer| {
            let boundary = layer.boundary();
            geopotential_height >= boundary.start_height
                && geopotential_height < boundary.end_height + BOUNDARY_TOLERANCE
        });

        match found {
            Some(layer) => {
                trace!("{:.3} m geopotential is in {}", geopotential_height, layer);
                Ok(layer)
            }
            None => {
                warn!("{:.3} m geopotential is outside the model", geopotential_height);
                Err(AtmosphereError::OutOfRange {
                    height: geopotential_height,
                })
            }
        }
    }

    pub fn boundary(self) -> &'static LayerBoundary {
        &LAYER_TABLE[self as usize]
    }

    pub fn is_isothermal(self) -> bool {
        matches!(self.boundary().kind, LayerKind::Isothermal)
    }

    /// The layer directly above, if any.
    pub fn above(self) -> Option<Layer> {
        Self::ALL.get(self as usize + 1).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Layer::Gradient1 => "gradient layer one",
            Layer::Isothermal1 => "isothermal layer one",
            Layer::Gradient2 => "gradient layer two",
            Layer::Isothermal2 => "isothermal layer two",
            Layer::Gradient3 => "gradient layer three",
            Layer::Isothermal3 => "isothermal layer three",
            Layer::Gradient4 => "gradient layer four",
        }
    }

    pub fn temperature_at(self, geopotential_height: f64) -> f64 {
        self.boundary().temperature_at(geopotential_height)
    }

    pub fn pressure_at(self, geopotential_height: f64) -> f64 {
        self.boundary().pressure_at(geopotential_height)
    }

    pub fn density_at(self, geopotential_height: f64) -> f64 {
        self.boundary().density_at(geopotential_height)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn get_layer(geometric_height: f64) -> Result<Layer, AtmosphereError> {
    Layer::classify(geopotential_height(geometric_height))
}
