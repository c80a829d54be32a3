use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::core::animation::Frame;
use crate::core::error::SimResult;
use crate::core::kinematics::{LaunchConfig, TrajectoryStats};
use crate::core::planet::Planet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RunReport {
    pub planet: Planet,
    pub config: LaunchConfig,
    pub stats: TrajectoryStats,
}

impl RunReport {
    pub fn new(planet: Planet, config: LaunchConfig) -> Self {
        Self {
            planet,
            config,
            stats: TrajectoryStats::from_config(&config),
        }
    }
}

pub fn wind_line(wind_mps: f64) -> String {
    if wind_mps > 0.0 {
        format!("Wind Speed = {wind_mps:.2} m/s   Wind direction: Right")
    } else if wind_mps < 0.0 {
        format!("Wind Speed = {wind_mps:.2} m/s   Wind direction: Left")
    } else {
        format!("Wind Speed = {wind_mps:.2} m/s")
    }
}

pub fn stats_lines(stats: &TrajectoryStats, wind_mps: f64) -> [String; 4] {
    [
        format!("Horizontal range = {:.2} m", stats.horizontal_range_m),
        format!("Maximum height = {:.2} m", stats.max_height_m),
        format!("Time of flight = {:.2} s", stats.flight_time_s),
        wind_line(wind_mps),
    ]
}

/// JSON is a single compact line so frames can follow it as NDJSON.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &RunReport,
    format: OutputFormat,
) -> SimResult<()> {
    match format {
        OutputFormat::Table => {
            for line in stats_lines(&report.stats, report.config.wind_mps) {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Csv => {
            writeln!(
                out,
                "planet,speed_mps,angle_deg,gravity_mps2,wind_mps,\
                 range_m,max_height_m,flight_time_s"
            )?;
            writeln!(
                out,
                "{},{},{},{},{},{:.4},{:.4},{:.4}",
                report.planet,
                report.config.speed_mps,
                report.config.angle_deg,
                report.config.gravity_mps2,
                report.config.wind_mps,
                report.stats.horizontal_range_m,
                report.stats.max_height_m,
                report.stats.flight_time_s
            )?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(report)?)?;
        }
    }
    Ok(())
}

/// Streams frames as they are produced; a long flight never sits in memory.
pub fn write_frames<W, I>(out: &mut W, frames: I, format: OutputFormat) -> SimResult<u64>
where
    W: Write,
    I: IntoIterator<Item = Frame>,
{
    match format {
        OutputFormat::Table => writeln!(
            out,
            "{:>7} {:>9} {:>11} {:>11}",
            "frame", "t (s)", "x (m)", "y (m)"
        )?,
        OutputFormat::Csv => writeln!(out, "index,time_s,x_m,y_m,trace_marker")?,
        OutputFormat::Json => {}
    }

    let mut written = 0;
    for frame in frames {
        match format {
            OutputFormat::Table => writeln!(
                out,
                "{:>7} {:>9.2} {:>11.3} {:>11.3}",
                frame.index, frame.time_s, frame.x_m, frame.y_m
            )?,
            OutputFormat::Csv => writeln!(
                out,
                "{},{:.3},{:.4},{:.4},{}",
                frame.index, frame.time_s, frame.x_m, frame.y_m, frame.trace_marker
            )?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&frame)?)?,
        }
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RunReport {
        let config = LaunchConfig::new(20.0, 45.0, 9.8, 0.0).expect("valid config");
        RunReport::new(Planet::Earth, config)
    }

    #[test]
    fn wind_direction_follows_sign() {
        assert!(wind_line(3.0).ends_with("Wind direction: Right"));
        assert!(wind_line(-3.0).ends_with("Wind direction: Left"));
        assert_eq!(wind_line(0.0), "Wind Speed = 0.00 m/s");
    }

    #[test]
    fn table_uses_two_decimals() {
        let mut out = Vec::new();
        write_report(&mut out, &report(), OutputFormat::Table).expect("write should succeed");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.contains("Horizontal range = 40.82 m"));
        assert!(text.contains("Maximum height = 10.20 m"));
        assert!(text.contains("Time of flight = 2.89 s"));
    }

    #[test]
    fn json_report_names_planet_and_stats() {
        let mut out = Vec::new();
        write_report(&mut out, &report(), OutputFormat::Json).expect("write should succeed");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");

        assert_eq!(value["planet"], "earth");
        assert!(value["stats"]["flight_time_s"].as_f64().is_some());
    }

    #[test]
    fn csv_frames_have_header_and_rows() {
        let frames = [
            Frame {
                index: 0,
                time_s: 0.0,
                x_m: 0.0,
                y_m: 0.0,
                trace_marker: true,
            },
            Frame {
                index: 1,
                time_s: 0.01,
                x_m: 0.1414,
                y_m: 0.1409,
                trace_marker: false,
            },
        ];
        let mut out = Vec::new();
        let written =
            write_frames(&mut out, frames, OutputFormat::Csv).expect("write should succeed");
        let text = String::from_utf8(out).expect("utf8");

        assert_eq!(written, 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "index,time_s,x_m,y_m,trace_marker");
        assert_eq!(lines[1], "0,0.000,0.0000,0.0000,true");
        assert_eq!(lines.len(), 3);
    }
}
