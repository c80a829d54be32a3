use serde::Serialize;

use crate::core::error::{SimError, SimResult};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LaunchConfig {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub gravity_mps2: f64,
    pub wind_mps: f64,
}

impl LaunchConfig {
    /// Builds a config, rejecting anything the closed-form model can't handle.
    pub fn new(
        speed_mps: f64,
        angle_deg: f64,
        gravity_mps2: f64,
        wind_mps: f64,
    ) -> SimResult<Self> {
        let config = Self {
            speed_mps,
            angle_deg,
            gravity_mps2,
            wind_mps,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        let fields = [
            ("velocity", self.speed_mps),
            ("angle", self.angle_deg),
            ("gravity", self.gravity_mps2),
            ("wind speed", self.wind_mps),
        ];
        if let Some((label, value)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::OutOfRange {
                label,
                value,
                reason: "must be a finite number",
            });
        }
        if self.speed_mps <= 0.0 {
            return Err(SimError::OutOfRange {
                label: "velocity",
                value: self.speed_mps,
                reason: "must be greater than zero",
            });
        }
        if self.gravity_mps2 <= 0.0 {
            return Err(SimError::OutOfRange {
                label: "gravity",
                value: self.gravity_mps2,
                reason: "must be greater than zero",
            });
        }
        if !(0.0..=180.0).contains(&self.angle_deg) {
            return Err(SimError::OutOfRange {
                label: "angle",
                value: self.angle_deg,
                reason: "must be between 0 and 180 degrees",
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrajectoryStats {
    pub horizontal_range_m: f64,
    pub max_height_m: f64,
    pub flight_time_s: f64,
}

impl TrajectoryStats {
    pub fn from_config(config: &LaunchConfig) -> Self {
        let sin_theta = config.angle_deg.to_radians().sin();
        let (vx, vy) = velocity_components(config);
        let g = config.gravity_mps2;

        let max_height_m = config.speed_mps.powi(2) * sin_theta.powi(2) / (2.0 * g);
        let flight_time_s = 2.0 * vy / g;
        Self {
            horizontal_range_m: vx * flight_time_s,
            max_height_m,
            flight_time_s,
        }
    }
}

/// Launch velocity with the wind folded into the horizontal component.
pub fn velocity_components(config: &LaunchConfig) -> (f64, f64) {
    let theta = config.angle_deg.to_radians();
    let vx = config.speed_mps * theta.cos() + config.wind_mps;
    let vy = config.speed_mps * theta.sin();
    (vx, vy)
}

pub fn position_at_time(config: &LaunchConfig, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(config);
    let x = vx * time_s;
    let y = (vy * time_s) - (0.5 * config.gravity_mps2 * time_s * time_s);
    (x, y)
}

pub fn sample_trajectory(
    config: &LaunchConfig,
    stats: &TrajectoryStats,
    samples: usize,
) -> Vec<(f64, f64)> {
    let sample_count = samples.max(2);
    let flight_time_s = stats.flight_time_s.max(0.0);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * flight_time_s) / sample_count as f64;
            let (x, y) = position_at_time(config, t);
            (x, y.max(0.0))
        })
        .collect()
}
