use macroquad::prelude::*;
use projectile_sim::core::constants::{CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX};

use crate::constants::{MSAA_SAMPLES, UI_FONT_PATH};
use crate::hud::draw_hud;
use crate::render::{draw_environment, draw_guides, draw_particle, draw_traces};
use crate::state::ViewerState;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion Simulator".to_string(),
        window_width: CANVAS_WIDTH_PX as i32,
        window_height: CANVAS_HEIGHT_PX as i32,
        window_resizable: false,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run(mut state: ViewerState) {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::debug!(path = UI_FONT_PATH, %err, "falling back to default font");
            None
        }
    };

    println!("Simulation running: view the projectile motion window.");
    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::R) {
            state.replay();
        }

        state.step(get_frame_time());

        clear_background(WHITE);
        draw_environment(state.theme);
        draw_guides(&state);
        draw_traces(&state);
        draw_particle(state.particle);
        draw_hud(&state, ui_font.as_ref());

        next_frame().await;
    }
}
