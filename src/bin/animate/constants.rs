use macroquad::prelude::Color;

pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const TITLE_Y: f32 = 58.0;
pub const STATS_TOP_OFFSET: f32 = 190.0; // first stats line, measured up from the bottom
pub const STATS_LINE_SPACING: f32 = 30.0;
pub const MAX_CATCH_UP_S: f32 = 0.10;

pub const RANGE_GUIDE_OFFSET_PX: f32 = 20.0;
pub const GUIDE_WIDTH_PX: f32 = 4.0;
pub const CLOUD_OFFSETS_PX: [f32; 3] = [0.0, 400.0, 900.0];

pub const PARTICLE_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const TRACE_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const GUIDE_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
