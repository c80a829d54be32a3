use macroquad::prelude::{Vec2, vec2};
use projectile_sim::core::animation::{Animation, AnimationSettings, Phase, StepOutcome};
use projectile_sim::core::constants::{CANVAS_HEIGHT_PX, GROUND_HEIGHT_PX, PARTICLE_SIZE_PX};
use projectile_sim::core::kinematics::LaunchConfig;
use projectile_sim::core::planet::Planet;
use projectile_sim::core::report::RunReport;

use crate::constants::MAX_CATCH_UP_S;
use crate::model::Theme;

pub(crate) struct ViewerState {
    pub(crate) report: RunReport,
    pub(crate) theme: Theme,
    pub(crate) animation: Animation,
    /// Top-left corner of the particle, in screen pixels.
    pub(crate) particle: Vec2,
    /// Screen points where a vertical trace line meets the particle.
    pub(crate) traces: Vec<Vec2>,
    /// Time of the flying frame currently on screen.
    shown_time_s: f64,
    accumulator_s: f32,
}

impl ViewerState {
    pub(crate) fn new(planet: Planet, config: LaunchConfig, settings: AnimationSettings) -> Self {
        let mut state = Self {
            report: RunReport::new(planet, config),
            theme: Theme::for_planet(planet),
            animation: Animation::new(config, settings),
            particle: Vec2::ZERO,
            traces: Vec::new(),
            shown_time_s: 0.0,
            accumulator_s: 0.0,
        };
        state.particle = state.launch_screen();
        state
    }

    /// Particle resting position before launch; y is measured down from the top.
    pub(crate) fn launch_screen(&self) -> Vec2 {
        vec2(
            self.animation.settings().bounds.origin_x_px as f32,
            (CANVAS_HEIGHT_PX - GROUND_HEIGHT_PX - PARTICLE_SIZE_PX) as f32,
        )
    }

    pub(crate) fn to_screen(&self, x_m: f64, y_m: f64) -> Vec2 {
        let bounds = self.animation.settings().bounds;
        let launch = self.launch_screen();
        vec2(
            bounds.screen_x(x_m) as f32,
            launch.y - (y_m * bounds.pixels_per_metre) as f32,
        )
    }

    pub(crate) fn replay(&mut self) {
        let config = *self.animation.config();
        let settings = *self.animation.settings();
        self.animation = Animation::new(config, settings);
        self.particle = self.launch_screen();
        self.traces.clear();
        self.shown_time_s = 0.0;
        self.accumulator_s = 0.0;
        tracing::info!("replaying launch");
    }

    /// Runs as many fixed animation steps as the elapsed frame time covers.
    pub(crate) fn step(&mut self, frame_dt: f32) {
        if !self.animation.is_running() {
            return;
        }

        let step_s = self.animation.settings().step_s as f32;
        self.accumulator_s += frame_dt.min(MAX_CATCH_UP_S);
        while self.accumulator_s >= step_s && self.animation.is_running() {
            self.accumulator_s -= step_s;
            let outcome = self.animation.advance();
            let frame = outcome.frame();
            self.particle = self.to_screen(frame.x_m, frame.y_m);

            if let StepOutcome::Flying(frame) = outcome {
                self.shown_time_s = frame.time_s;
                if frame.trace_marker {
                    self.traces.push(self.particle);
                }
            } else {
                tracing::info!(
                    reason = outcome.label(),
                    frames = frame.index,
                    time_s = frame.time_s,
                    "animation finished"
                );
            }
        }
    }

    pub(crate) fn status_text(&self) -> String {
        match self.animation.phase() {
            Phase::Running => format!("Flying: t = {:.2} s", self.shown_time_s),
            Phase::Stopped(StepOutcome::Landed(frame)) => {
                format!("Landed at t = {:.2} s, x = {:.2} m", frame.time_s, frame.x_m)
            }
            Phase::Stopped(outcome) => {
                let frame = outcome.frame();
                format!("Left the canvas at t = {:.2} s, x = {:.2} m", frame.time_s, frame.x_m)
            }
        }
    }
}
