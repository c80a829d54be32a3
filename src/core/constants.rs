pub const MARS_GRAVITY_MPS2: f64 = 3.71;
pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const MOON_GRAVITY_MPS2: f64 = 1.62;
pub const JUPITER_GRAVITY_MPS2: f64 = 24.79;

pub const FRAME_INTERVAL_MS: u64 = 10;
pub const TRACE_SPACING_FRAMES: u64 = 10; // vertical trace line every N frames

pub const CANVAS_WIDTH_PX: f64 = 1200.0;
pub const CANVAS_HEIGHT_PX: f64 = 800.0;
pub const GROUND_HEIGHT_PX: f64 = 200.0;
pub const LAUNCH_ORIGIN_X_PX: f64 = 50.0;
pub const PARTICLE_SIZE_PX: f64 = 25.0;
pub const PIXELS_PER_METRE: f64 = 1.0;

pub const PLOT_WIDTH_PX: u32 = 1200;
pub const PLOT_HEIGHT_PX: u32 = 600;
pub const PLOT_SAMPLES: usize = 240;
