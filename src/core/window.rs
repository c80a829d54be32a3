pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Data window for a trajectory plot. Always contains the launch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl AxisWindow {
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }
}

pub fn fixed_ratio_axis_window(points: &[(f64, f64)]) -> AxisWindow {
    let (raw_min_x, raw_max_x, raw_max_y) = points.iter().fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(min_x, max_x, max_y), &(x, y)| (min_x.min(x), max_x.max(x), max_y.max(y)),
    );

    let raw_x_span = (raw_max_x - raw_min_x).max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_x_span + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    // Headwind shots drift left of the launch point; keep the extra room on that side.
    if raw_min_x < 0.0 {
        AxisWindow {
            x_min: raw_max_x - x_span,
            x_max: raw_max_x,
            y_max: y_span,
        }
    } else {
        AxisWindow {
            x_min: 0.0,
            x_max: x_span,
            y_max: y_span,
        }
    }
}
