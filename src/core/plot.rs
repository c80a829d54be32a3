use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use plotters::prelude::*;

use crate::core::constants::{PLOT_HEIGHT_PX, PLOT_SAMPLES, PLOT_WIDTH_PX};
use crate::core::error::{SimError, SimResult};
use crate::core::kinematics::sample_trajectory;
use crate::core::planet::Planet;
use crate::core::report::RunReport;
use crate::core::window::fixed_ratio_axis_window;

pub fn default_plot_path(planet: Planet, now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "trajectory-{}-{}.svg",
        planet,
        now.format("%Y%m%d-%H%M%S")
    ))
}

pub fn plot_caption(report: &RunReport) -> String {
    format!(
        "{} (g = {:.2} m/s^2) | range {:.2} m | max height {:.2} m | flight {:.2} s",
        report.planet,
        report.config.gravity_mps2,
        report.stats.horizontal_range_m,
        report.stats.max_height_m,
        report.stats.flight_time_s
    )
}

fn plot_error<E: std::fmt::Display>(err: E) -> SimError {
    SimError::Plot(err.to_string())
}

/// Writes the analytic trajectory of `report` as an SVG chart.
pub fn render_svg(path: &Path, report: &RunReport) -> SimResult<()> {
    let points = sample_trajectory(&report.config, &report.stats, PLOT_SAMPLES);
    let window = fixed_ratio_axis_window(&points);

    let root = SVGBackend::new(path, (PLOT_WIDTH_PX, PLOT_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(plot_caption(report), ("sans-serif", 22))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(window.x_min..window.x_max, 0.0..window.y_max)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .light_line_style(&RGBColor(227, 231, 236))
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(2)))
        .map_err(plot_error)?;

    let apex = (report.stats.horizontal_range_m / 2.0, report.stats.max_height_m);
    chart
        .draw_series(std::iter::once(Circle::new(apex, 4, RED.filled())))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    tracing::info!(path = %path.display(), points = points.len(), "plot written");
    Ok(())
}
