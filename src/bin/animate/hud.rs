use macroquad::prelude::*;
use projectile_sim::core::constants::CANVAS_HEIGHT_PX;
use projectile_sim::core::report::stats_lines;

use crate::constants::{STATS_LINE_SPACING, STATS_TOP_OFFSET, TEXT_COLOR, TITLE_Y};
use crate::render::draw_ui_text;
use crate::state::ViewerState;

pub(crate) fn draw_hud(state: &ViewerState, font: Option<&Font>) {
    draw_ui_text(
        &format!(
            "2-D PROJECTILE MOTION SIMULATOR-{}",
            state.report.planet.name().to_ascii_uppercase()
        ),
        10.0,
        TITLE_Y,
        36,
        TEXT_COLOR,
        font,
    );

    let first_line_y = CANVAS_HEIGHT_PX as f32 - STATS_TOP_OFFSET + 20.0;
    let lines = stats_lines(&state.report.stats, state.report.config.wind_mps);
    for (i, line) in lines.iter().enumerate() {
        draw_ui_text(
            line,
            10.0,
            first_line_y + i as f32 * STATS_LINE_SPACING,
            26,
            TEXT_COLOR,
            font,
        );
    }

    let status_y = first_line_y + lines.len() as f32 * STATS_LINE_SPACING;
    draw_ui_text(
        &format!("{} | R replay | Esc quit", state.status_text()),
        10.0,
        status_y,
        22,
        DARKGRAY,
        font,
    );
}
