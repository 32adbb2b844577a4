use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AtmosphereError {
    #[error(
        "Unable to calculate at geopotential height {height} m, modeled range is [0, 105000] m"
    )]
    OutOfRange { height: f64 },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Atmosphere error: {0}")]
    Atmosphere(#[from] AtmosphereError),

    #[error("Invalid altitude input: {0}")]
    InvalidAltitude(String),

    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
