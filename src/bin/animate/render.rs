use macroquad::prelude::*;
use projectile_sim::core::constants::{
    CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, GROUND_HEIGHT_PX, PARTICLE_SIZE_PX,
};

use crate::constants::{
    CLOUD_OFFSETS_PX, GUIDE_COLOR, GUIDE_WIDTH_PX, PARTICLE_COLOR, RANGE_GUIDE_OFFSET_PX,
    TRACE_COLOR,
};
use crate::model::Theme;
use crate::state::ViewerState;

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn ground_y() -> f32 {
    (CANVAS_HEIGHT_PX - GROUND_HEIGHT_PX) as f32
}

pub(crate) fn draw_environment(theme: Theme) {
    let width = CANVAS_WIDTH_PX as f32;
    let height = CANVAS_HEIGHT_PX as f32;
    let ground = ground_y();

    draw_rectangle(0.0, 0.0, width, ground, theme.sky);
    draw_rectangle(0.0, ground, width, height - ground, theme.ground);
    draw_line(0.0, ground, width, ground, 1.0, BLACK);

    if let Some(cloud) = theme.cloud {
        for offset in CLOUD_OFFSETS_PX {
            draw_cloud(offset, cloud);
        }
    }
}

/// Five overlapping puffs, 200 px wide, anchored at `x`.
fn draw_cloud(x: f32, color: Color) {
    const PUFFS: [(f32, f32); 5] = [
        (50.0, 200.0),
        (100.0, 200.0),
        (150.0, 200.0),
        (75.0, 150.0),
        (125.0, 150.0),
    ];
    for (dx, cy) in PUFFS {
        draw_circle(x + dx, cy, 50.0, color);
    }
}

/// Yellow markers for the predicted range and the apex height.
pub(crate) fn draw_guides(state: &ViewerState) {
    let launch = state.launch_screen();
    let stats = state.report.stats;
    let scale = state.animation.settings().bounds.pixels_per_metre;
    let range_px = (stats.horizontal_range_m * scale) as f32;
    let height_px = (stats.max_height_m * scale) as f32;

    let range_y = launch.y + RANGE_GUIDE_OFFSET_PX;
    draw_line(
        launch.x,
        range_y,
        launch.x + range_px,
        range_y,
        GUIDE_WIDTH_PX,
        GUIDE_COLOR,
    );

    let apex_x = launch.x + range_px * 0.5;
    draw_line(
        apex_x,
        launch.y - height_px,
        apex_x,
        launch.y,
        GUIDE_WIDTH_PX,
        GUIDE_COLOR,
    );
}

pub(crate) fn draw_traces(state: &ViewerState) {
    let base_y = state.launch_screen().y;
    for point in &state.traces {
        draw_line(point.x, point.y, point.x, base_y, 1.0, TRACE_COLOR);
    }
}

pub(crate) fn draw_particle(position: Vec2) {
    let radius = (PARTICLE_SIZE_PX * 0.5) as f32;
    draw_circle(position.x + radius, position.y + radius, radius, PARTICLE_COLOR);
    draw_circle_lines(position.x + radius, position.y + radius, radius, 1.0, BLACK);
}
