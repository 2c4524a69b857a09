use std::io::{self, Write};
use std::str::FromStr;

use crate::model::sample::Sample;

/// Output encodings supported by the demo consumer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{other}', expected csv or json")),
        }
    }
}

/// Writes one CSV line per sample, `timestamp_ms,acc_x,acc_y,acc_z` with
/// six fractional digits on each axis, newline-terminated.
///
/// Returns the total number of bytes written: zero samples, zero bytes.
/// The line count always equals the number of samples passed in.
pub fn write_csv<W: Write>(samples: &[Sample], out: &mut W) -> io::Result<usize> {
    let mut written = 0;
    for sample in samples {
        let line = format!(
            "{},{:.6},{:.6},{:.6}\n",
            sample.timestamp_ms, sample.acc_x, sample.acc_y, sample.acc_z
        );
        out.write_all(line.as_bytes())?;
        written += line.len();
    }
    Ok(written)
}

/// Writes the samples as a newline-terminated JSON array.
///
/// Returns the total number of bytes written.
pub fn write_json<W: Write>(samples: &[Sample], out: &mut W) -> io::Result<usize> {
    let mut body = serde_json::to_string(samples)?;
    body.push('\n');
    out.write_all(body.as_bytes())?;
    Ok(body.len())
}
