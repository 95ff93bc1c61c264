/// Game tuning parameters for the runner
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas (pixels, y grows downward)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 200.0;
    pub const GROUND_BAND_HEIGHT: f32 = 50.0;

    // Actor
    pub const ACTOR_X: f32 = 50.0;
    pub const ACTOR_SIZE: f32 = 40.0;
    pub const GRAVITY: f32 = 0.6; // px/tick^2
    pub const JUMP_IMPULSE: f32 = -12.0; // px/tick, negative = up
    pub const MAX_JUMP_HEIGHT: f32 = 100.0; // above ground level
    pub const GROUND_TOLERANCE: f32 = 1.0;

    // Obstacles
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_HEIGHT_RANGE: f32 = 20.0;
    pub const SPAWN_CHANCE: f64 = 0.7;
    pub const BASE_SPAWN_INTERVAL: u32 = 150;
    pub const MIN_SPAWN_INTERVAL: u32 = 60;
    pub const SPAWN_RAMP_TICKS: u32 = 200; // interval shrinks by 1 every N ticks
    pub const FIRST_OBSTACLE_DELAY_TICKS: u32 = 6; // ~100ms at 60 Hz

    // Speed
    pub const BASE_SPEED: f32 = 2.0; // px/tick
    pub const MAX_SPEED: f32 = 10.0;
    pub const SPEED_INCREMENT: f32 = 0.1;
    pub const SPEED_RAMP_TICKS: u32 = 100;

    // Score
    pub const SCORE_INTERVAL: u32 = 5;

    // Timing
    pub const TICK_RATE_HZ: f64 = 60.0;
    pub const TICK_INTERVAL_MS: f64 = 1000.0 / Self::TICK_RATE_HZ;
}
