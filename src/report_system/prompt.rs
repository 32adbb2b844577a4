use std::io::{BufRead, Write};

use log::{debug, info};

use crate::errors::ReportError;
use crate::model::AtmosphereSample;

pub const PROMPT: &str = "Enter geometric altitude";
pub const COLUMN_WIDTH: usize = 12;

pub fn format_row(sample: &AtmosphereSample) -> String {
    format!(
        "{:>width$.3}{:>width$.3}{:>width$.3}{:>width$.5e}{:>width$.5e}",
        sample.geometric_height,
        sample.geopotential_height,
        sample.temperature,
        sample.pressure,
        sample.density,
        width = COLUMN_WIDTH
    )
}

/// Reads whitespace separated geometric altitudes until end of input and
/// writes one row per altitude. Stops at the first token that is not a number
/// or the first altitude outside the model. Returns the number of rows written.
pub fn run_prompt<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<usize, ReportError> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut rows = 0;
    for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let geometric_height: f64 = token
                .parse()
                .map_err(|_| ReportError::InvalidAltitude(token.to_string()))?;
            let sample = AtmosphereSample::at(geometric_height)?;
            debug!("prompt sample: {:?}", sample);

            writeln!(output, "{}", format_row(&sample))?;
            rows += 1;
        }
        output.flush()?;
    }

    info!("end of input after {} altitudes", rows);
    Ok(rows)
}
