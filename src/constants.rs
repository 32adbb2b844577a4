use log::debug;
use once_cell::sync::Lazy;

// Earth Constants
pub const EARTH_RADIUS: f64 = 6.371e6; // m
pub const SURFACE_GRAVITY: f64 = 9.80665; // m/s²

// Sea Level Air Constants
pub const SEA_LEVEL_PRESSURE: f64 = 1.01325e5; // Pa
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m³
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.16; // K
pub const GAS_CONSTANT_AIR: f64 = 287.053; // J/(kg·K)

// Lapse rates of the temperature gradient layers
pub const LAPSE_RATE_LAYER_ONE: f64 = -6.5e-3; // K/m
pub const LAPSE_RATE_LAYER_TWO: f64 = 3e-3; // K/m
pub const LAPSE_RATE_LAYER_THREE: f64 = -4.5e-3; // K/m
pub const LAPSE_RATE_LAYER_FOUR: f64 = 4e-3; // K/m

// Gradient layer start and end geopotential heights
pub const LAYER_ONE_START_HEIGHT: f64 = 0.0; // m
pub const LAYER_ONE_END_HEIGHT: f64 = 11e3; // m
pub const LAYER_TWO_START_HEIGHT: f64 = 25e3; // m
pub const LAYER_TWO_END_HEIGHT: f64 = 47e3; // m
pub const LAYER_THREE_START_HEIGHT: f64 = 53e3; // m
pub const LAYER_THREE_END_HEIGHT: f64 = 79e3; // m
pub const LAYER_FOUR_START_HEIGHT: f64 = 90e3; // m
pub const LAYER_FOUR_END_HEIGHT: f64 = 105e3; // m

// Gradient layer start temperatures
pub const LAYER_ONE_START_TEMPERATURE: f64 = SEA_LEVEL_TEMPERATURE; // K
pub const LAYER_TWO_START_TEMPERATURE: f64 = 216.66; // K
pub const LAYER_THREE_START_TEMPERATURE: f64 = 282.66; // K
pub const LAYER_FOUR_START_TEMPERATURE: f64 = 165.66; // K

// Isothermal layer temperatures
pub const ISOTHERMAL_LAYER_ONE_TEMPERATURE: f64 = 216.66; // K
pub const ISOTHERMAL_LAYER_TWO_TEMPERATURE: f64 = 282.66; // K
pub const ISOTHERMAL_LAYER_THREE_TEMPERATURE: f64 = 165.66; // K

/// Widening applied to the upper bound of every layer during classification,
/// so a height sitting on a nominal boundary lands in the lower layer.
pub const BOUNDARY_TOLERANCE: f64 = 20.0; // m

pub const LAYER_COUNT: usize = 7;

/// How temperature behaves inside a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerKind {
    /// Linear temperature change with a non-zero lapse rate (K/m).
    Gradient { lapse_rate: f64 },
    /// Constant temperature, equal to the layer start temperature.
    Isothermal,
}

/// One row of the boundary table. Heights are geopotential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerBoundary {
    pub start_height: f64,
    pub end_height: f64,
    pub start_temperature: f64,
    pub kind: LayerKind,
    pub start_pressure: f64,
    pub start_density: f64,
}

const LAYER_DEFINITIONS: [(f64, f64, f64, LayerKind); LAYER_COUNT] = [
    (
        LAYER_ONE_START_HEIGHT,
        LAYER_ONE_END_HEIGHT,
        LAYER_ONE_START_TEMPERATURE,
        LayerKind::Gradient {
            lapse_rate: LAPSE_RATE_LAYER_ONE,
        },
    ),
    (
        LAYER_ONE_END_HEIGHT,
        LAYER_TWO_START_HEIGHT,
        ISOTHERMAL_LAYER_ONE_TEMPERATURE,
        LayerKind::Isothermal,
    ),
    (
        LAYER_TWO_START_HEIGHT,
        LAYER_TWO_END_HEIGHT,
        LAYER_TWO_START_TEMPERATURE,
        LayerKind::Gradient {
            lapse_rate: LAPSE_RATE_LAYER_TWO,
        },
    ),
    (
        LAYER_TWO_END_HEIGHT,
        LAYER_THREE_START_HEIGHT,
        ISOTHERMAL_LAYER_TWO_TEMPERATURE,
        LayerKind::Isothermal,
    ),
    (
        LAYER_THREE_START_HEIGHT,
        LAYER_THREE_END_HEIGHT,
        LAYER_THREE_START_TEMPERATURE,
        LayerKind::Gradient {
            lapse_rate: LAPSE_RATE_LAYER_THREE,
        },
    ),
    (
        LAYER_THREE_END_HEIGHT,
        LAYER_FOUR_START_HEIGHT,
        ISOTHERMAL_LAYER_THREE_TEMPERATURE,
        LayerKind::Isothermal,
    ),
    (
        LAYER_FOUR_START_HEIGHT,
        LAYER_FOUR_END_HEIGHT,
        LAYER_FOUR_START_TEMPERATURE,
        LayerKind::Gradient {
            lapse_rate: LAPSE_RATE_LAYER_FOUR,
        },
    ),
];

/// Boundary table in ascending altitude order. Start pressure and density of
/// each layer are the previous layer's values evaluated at its end height,
/// computed once on first access.
pub static LAYER_TABLE: Lazy<[LayerBoundary; LAYER_COUNT]> = Lazy::new(build_layer_table);

fn build_layer_table() -> [LayerBoundary; LAYER_COUNT] {
    let mut pressure = SEA_LEVEL_PRESSURE;
    let mut density = SEA_LEVEL_DENSITY;

    LAYER_DEFINITIONS.map(|(start_height, end_height, start_temperature, kind)| {
        let boundary = LayerBoundary {
            start_height,
            end_height,
            start_temperature,
            kind,
            start_pressure: pressure,
            start_density: density,
        };
        pressure = boundary.pressure_at(end_height);
        density = boundary.density_at(end_height);
        debug!(
            "layer [{:.0}, {:.0}] m starts at {:.6} Pa, {:.6e} kg/m³",
            start_height, end_height, boundary.start_pressure, boundary.start_density
        );
        boundary
    })
}
