use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::core::animation::{Animation, AnimationSettings, Frame};
use crate::core::constants::FRAME_INTERVAL_MS;
use crate::core::error::SimResult;
use crate::core::planet::Planet;
use crate::core::plot::{default_plot_path, render_svg};
use crate::core::report::{OutputFormat, RunReport, write_frames, write_report};

/// What to produce for each configured launch.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub output: OutputFormat,
    pub frames: bool,
    pub step_ms: u64,
    /// `Some(None)` asks for a timestamped file name.
    pub plot: Option<Option<PathBuf>>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output: OutputFormat::Table,
            frames: false,
            step_ms: FRAME_INTERVAL_MS,
            plot: None,
        }
    }
}

impl RunOptions {
    pub fn plot_path(&self, planet: Planet, now: DateTime<Local>) -> Option<PathBuf> {
        self.plot
            .as_ref()
            .map(|requested| requested.clone().unwrap_or_else(|| default_plot_path(planet, now)))
    }
}

#[derive(Serialize)]
struct StopRecord {
    reason: &'static str,
    frames: u64,
    frame: Frame,
}

#[derive(Serialize)]
struct StopLine {
    stop: StopRecord,
}

/// Writes one launch in the requested format.
///
/// JSON output is NDJSON: the report, then one line per frame, then a stop
/// record. CSV with frames carries only the frame table, so the stream stays
/// a single table.
pub fn emit_run<W: Write>(
    out: &mut W,
    options: &RunOptions,
    report: &RunReport,
    now: DateTime<Local>,
) -> SimResult<()> {
    let frames_only = options.frames && options.output == OutputFormat::Csv;
    if !frames_only {
        write_report(out, report, options.output)?;
    }
    tracing::info!(
        range_m = report.stats.horizontal_range_m,
        max_height_m = report.stats.max_height_m,
        flight_time_s = report.stats.flight_time_s,
        "stats computed"
    );

    if options.frames {
        let settings = AnimationSettings::default().with_step_ms(options.step_ms);
        let mut animation = Animation::new(report.config, settings);
        let written = write_frames(out, animation.frames(), options.output)?;
        let end = animation.advance();
        let last = end.frame();
        match options.output {
            OutputFormat::Table => writeln!(
                out,
                "Stopped ({}) after {written} frames at t = {:.2} s, x = {:.2} m, y = {:.2} m",
                end.label(),
                last.time_s,
                last.x_m,
                last.y_m
            )?,
            OutputFormat::Json => {
                let line = StopLine {
                    stop: StopRecord {
                        reason: end.label(),
                        frames: written,
                        frame: last,
                    },
                };
                writeln!(out, "{}", serde_json::to_string(&line)?)?;
            }
            OutputFormat::Csv => {
                tracing::info!(reason = end.label(), frames = written, "frames written")
            }
        }
    }

    if let Some(path) = options.plot_path(report.planet, now) {
        render_svg(&path, report)?;
        if options.output == OutputFormat::Table {
            writeln!(out, "Plot saved to {}", path.display())?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::core::kinematics::LaunchConfig;

    fn report(speed: f64, angle: f64) -> RunReport {
        let config = LaunchConfig::new(speed, angle, 9.8, 0.0).expect("valid config");
        RunReport::new(Planet::Earth, config)
    }

    fn emit(options: &RunOptions, report: &RunReport) -> String {
        let mut out = Vec::new();
        emit_run(&mut out, options, report, Local::now()).expect("emit should succeed");
        String::from_utf8(out).expect("utf8")
    }

    fn with_frames(output: OutputFormat) -> RunOptions {
        RunOptions {
            output,
            frames: true,
            ..Default::default()
        }
    }

    #[test]
    fn table_without_frames_is_just_stats() {
        let text = emit(&RunOptions::default(), &report(20.0, 45.0));

        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("Horizontal range = 40.82 m"));
    }

    #[test]
    fn table_frames_end_with_stop_summary() {
        let text = emit(&with_frames(OutputFormat::Table), &report(10.0, 0.0));
        let last = text.lines().last().expect("summary line");

        assert_eq!(
            last,
            "Stopped (landed) after 1 frames at t = 0.01 s, x = 0.10 m, y = -0.00 m"
        );
        assert!(text.contains("Horizontal range"));
    }

    #[test]
    fn step_ms_changes_frame_count() {
        let options = RunOptions {
            step_ms: 100,
            ..with_frames(OutputFormat::Table)
        };
        let text = emit(&options, &report(20.0, 45.0));

        assert!(text.contains("Stopped (landed) after 29 frames"));
    }

    #[test]
    fn json_with_frames_is_one_value_per_line() {
        let text = emit(&with_frames(OutputFormat::Json), &report(20.0, 45.0));
        let values: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("each line is json"))
            .collect();

        assert_eq!(values.len(), 1 + 289 + 1);
        assert_eq!(values[0]["planet"], "earth");
        assert_eq!(values[1]["index"], 0);
        let stop = &values[values.len() - 1]["stop"];
        assert_eq!(stop["reason"], "landed");
        assert_eq!(stop["frames"], 289);
        assert!(stop["frame"]["y_m"].as_f64().expect("number") < 0.0);
    }

    #[test]
    fn json_without_frames_is_a_single_document() {
        let text = emit(
            &RunOptions {
                output: OutputFormat::Json,
                ..Default::default()
            },
            &report(20.0, 45.0),
        );
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

        assert_eq!(value["config"]["angle_deg"], 45.0);
    }

    #[test]
    fn csv_with_frames_is_a_single_table() {
        let text = emit(&with_frames(OutputFormat::Csv), &report(20.0, 45.0));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "index,time_s,x_m,y_m,trace_marker");
        assert_eq!(lines.len(), 1 + 289);
        assert!(lines.iter().all(|line| line.split(',').count() == 5));
    }

    #[test]
    fn csv_without_frames_keeps_stats_row() {
        let text = emit(
            &RunOptions {
                output: OutputFormat::Csv,
                ..Default::default()
            },
            &report(20.0, 45.0),
        );
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("earth,20,45,9.8,0,"));
    }

    #[test]
    fn plot_path_uses_timestamp_unless_given() {
        let now = Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .expect("unambiguous local time");

        assert_eq!(RunOptions::default().plot_path(Planet::Moon, now), None);

        let timestamped = RunOptions {
            plot: Some(None),
            ..Default::default()
        };
        assert_eq!(
            timestamped.plot_path(Planet::Moon, now),
            Some(PathBuf::from("trajectory-moon-20240309-140507.svg"))
        );

        let explicit = RunOptions {
            plot: Some(Some(PathBuf::from("out/shot.svg"))),
            ..Default::default()
        };
        assert_eq!(
            explicit.plot_path(Planet::Moon, now),
            Some(PathBuf::from("out/shot.svg"))
        );
    }
}
