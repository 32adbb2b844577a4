use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::errors::ReportError;
use crate::model::AtmosphereSample;

pub const TABLE_HEADER: [&str; 5] = [
    "Geometric height",
    "Geopotential height",
    "temperature",
    "pressure",
    "density",
];

pub const DEFAULT_END_HEIGHT: f64 = 105_000.0; // m, geometric
pub const DEFAULT_STEP: f64 = 1_000.0; // m

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub end_height: f64,
    pub step: f64,
}

impl TableConfig {
    pub fn new(end_height: f64, step: f64) -> Result<Self, ReportError> {
        let config = TableConfig { end_height, step };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if !self.end_height.is_finite() || self.end_height < 0.0 {
            return Err(ReportError::InvalidConfig(format!(
                "end height must be a finite, non-negative number of meters, got {}",
                self.end_height
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ReportError::InvalidConfig(format!(
                "step must be a finite, positive number of meters, got {}",
                self.step
            )));
        }
        Ok(())
    }

    /// Sample altitudes from 0 in `step` increments, ending once the altitude
    /// truncated to whole meters passes the truncated end height.
    pub fn heights(&self) -> impl Iterator<Item = f64> + '_ {
        let end = self.end_height as i64;
        (0u64..)
            .map(move |index| index as f64 * self.step)
            .take_while(move |height| (*height as i64) <= end)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            end_height: DEFAULT_END_HEIGHT,
            step: DEFAULT_STEP,
        }
    }
}

/// Writes the CSV table to any writer. Returns the number of data rows.
pub fn write_table<W: Write>(writer: W, config: &TableConfig) -> Result<usize, ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    write_rows(&mut csv_writer, config)
}

pub fn export_table<P: AsRef<Path>>(path: P, config: &TableConfig) -> Result<usize, ReportError> {
    info!(
        "exporting table to {} (end {} m, step {} m)",
        path.as_ref().display(),
        config.end_height,
        config.step
    );
    let mut csv_writer = csv::Writer::from_path(path)?;
    write_rows(&mut csv_writer, config)
}

fn write_rows<W: Write>(
    csv_writer: &mut csv::Writer<W>,
    config: &TableConfig,
) -> Result<usize, ReportError> {
    config.validate()?;
    csv_writer.write_record(TABLE_HEADER)?;

    let mut rows = 0;
    for height in config.heights() {
        let sample = AtmosphereSample::at(height)?;
        csv_writer.write_record([
            sample.geometric_height.to_string(),
            sample.geopotential_height.to_string(),
            sample.temperature.to_string(),
            sample.pressure.to_string(),
            sample.density.to_string(),
        ])?;
        rows += 1;
    }
    csv_writer.flush()?;

    debug!("wrote {} table rows", rows);
    Ok(rows)
}
