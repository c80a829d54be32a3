use serde::Serialize;

use crate::core::constants::{
    CANVAS_WIDTH_PX, FRAME_INTERVAL_MS, LAUNCH_ORIGIN_X_PX, PIXELS_PER_METRE, TRACE_SPACING_FRAMES,
};
use crate::core::kinematics::{LaunchConfig, position_at_time};

/// Horizontal extent of the canvas the particle is drawn on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayBounds {
    pub origin_x_px: f64,
    pub pixels_per_metre: f64,
    pub width_px: f64,
}

impl Default for DisplayBounds {
    fn default() -> Self {
        Self {
            origin_x_px: LAUNCH_ORIGIN_X_PX,
            pixels_per_metre: PIXELS_PER_METRE,
            width_px: CANVAS_WIDTH_PX,
        }
    }
}

impl DisplayBounds {
    pub fn screen_x(&self, x_m: f64) -> f64 {
        self.origin_x_px + x_m * self.pixels_per_metre
    }

    pub fn contains_x(&self, x_m: f64) -> bool {
        self.screen_x(x_m) <= self.width_px
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSettings {
    pub step_s: f64,
    pub trace_spacing: u64,
    pub bounds: DisplayBounds,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            step_s: FRAME_INTERVAL_MS as f64 / 1000.0,
            trace_spacing: TRACE_SPACING_FRAMES,
            bounds: DisplayBounds::default(),
        }
    }
}

impl AnimationSettings {
    pub fn with_step_ms(mut self, step_ms: u64) -> Self {
        self.step_s = step_ms.max(1) as f64 / 1000.0;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub elapsed_s: f64,
    pub frame_index: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub index: u64,
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
    pub trace_marker: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    Flying(Frame),
    Landed(Frame),
    OutOfBounds(Frame),
}

impl StepOutcome {
    pub fn frame(&self) -> Frame {
        match *self {
            Self::Flying(frame) | Self::Landed(frame) | Self::OutOfBounds(frame) => frame,
        }
    }

    pub fn is_stopped(&self) -> bool {
        !matches!(self, Self::Flying(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Flying(_) => "flying",
            Self::Landed(_) => "landed",
            Self::OutOfBounds(_) => "out of bounds",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Running,
    Stopped(StepOutcome),
}

/// Fixed-step playback of one launch. Time only moves forward; once the
/// particle hits the ground or leaves the canvas the run is over for good.
#[derive(Clone, Debug)]
pub struct Animation {
    config: LaunchConfig,
    settings: AnimationSettings,
    state: AnimationState,
    phase: Phase,
}

impl Animation {
    pub fn new(config: LaunchConfig, settings: AnimationSettings) -> Self {
        Self {
            config,
            settings,
            state: AnimationState::default(),
            phase: Phase::Running,
        }
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn advance(&mut self) -> StepOutcome {
        if let Phase::Stopped(outcome) = self.phase {
            return outcome;
        }

        let time_s = self.state.elapsed_s;
        let (x_m, y_m) = position_at_time(&self.config, time_s);
        let mut frame = Frame {
            index: self.state.frame_index,
            time_s,
            x_m,
            y_m,
            trace_marker: false,
        };

        let stopped = if y_m < 0.0 {
            Some(StepOutcome::Landed(frame))
        } else if !self.settings.bounds.contains_x(x_m) {
            Some(StepOutcome::OutOfBounds(frame))
        } else {
            None
        };
        if let Some(outcome) = stopped {
            tracing::debug!(
                reason = outcome.label(),
                frame = frame.index,
                time_s = frame.time_s,
                x_m = frame.x_m,
                "animation stopped"
            );
            self.phase = Phase::Stopped(outcome);
            return outcome;
        }

        frame.trace_marker = frame.index % self.settings.trace_spacing.max(1) == 0;
        self.state.frame_index += 1;
        // Derived from the index so long runs don't accumulate rounding drift.
        self.state.elapsed_s = self.state.frame_index as f64 * self.settings.step_s;
        StepOutcome::Flying(frame)
    }

    /// Flying frames in order, ending when the run stops.
    pub fn frames(&mut self) -> impl Iterator<Item = Frame> + '_ {
        std::iter::from_fn(move || match self.advance() {
            StepOutcome::Flying(frame) => Some(frame),
            _ => None,
        })
    }
}
