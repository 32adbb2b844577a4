pub mod constants;
pub mod errors;
pub mod model;
pub mod report_system;

pub use constants::*;
pub use errors::{AtmosphereError, ReportError};

// Re-export the atmosphere model
pub use model::density::isa_density;
pub use model::geopotential::{geometric_height, geopotential_height, gravitational_accel};
pub use model::layer::{get_layer, Layer};
pub use model::pressure::isa_pressure;
pub use model::temperature::isa_temperature;
pub use model::AtmosphereSample;

// Re-export the reporting entry points
pub use report_system::prompt::run_prompt;
pub use report_system::table_export::{export_table, write_table, TableConfig};
