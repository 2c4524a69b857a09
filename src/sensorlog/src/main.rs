use std::io::Write;

use anyhow::Context;
use clap::{Arg, Command};
use foundation::{Format, MockSensor, SensorLog, SensorSource, write_csv, write_json};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = Command::new("sensorlog")
        .version("0.1")
        .about("Circular-buffer sensor data logger demo")
        .subcommand(
            Command::new("run")
                .about("Generate mock samples and dump the retained log")
                .arg(
                    Arg::new("samples")
                        .long("samples")
                        .default_value("200")
                        .help("Number of mock samples to generate"),
                )
                .arg(
                    Arg::new("capacity")
                        .long("capacity")
                        .default_value("128")
                        .help("Number of samples the buffer retains"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("Output format: csv or json"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("RNG seed for a reproducible sample stream"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("run", sub_matches)) => {
            let samples: u32 = sub_matches
                .get_one::<String>("samples")
                .unwrap()
                .parse()
                .context("--samples must be a non-negative integer")?;
            let capacity: usize = sub_matches
                .get_one::<String>("capacity")
                .unwrap()
                .parse()
                .context("--capacity must be a positive integer")?;
            anyhow::ensure!(capacity > 0, "--capacity must be greater than zero");
            let format: Format = sub_matches
                .get_one::<String>("format")
                .unwrap()
                .parse()
                .map_err(anyhow::Error::msg)?;
            let seed: Option<u64> = sub_matches
                .get_one::<String>("seed")
                .map(|value| value.parse())
                .transpose()
                .context("--seed must be an unsigned integer")?;

            let mut sensor = match seed {
                Some(seed) => MockSensor::seeded(seed),
                None => MockSensor::new(),
            };

            let sensor_log = SensorLog::new(capacity);
            for _ in 0..samples {
                sensor_log.log(sensor.read());
            }
            log::info!(
                "logged {} samples, {} retained",
                samples,
                sensor_log.len()
            );

            let snapshot = sensor_log.snapshot();
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let written = match format {
                Format::Csv => write_csv(&snapshot, &mut out)?,
                Format::Json => write_json(&snapshot, &mut out)?,
            };
            out.flush()?;
            log::info!("wrote {} bytes for {} samples", written, snapshot.len());
        }
        _ => {
            println!("Use --help for usage.");
        }
    }
    Ok(())
}
