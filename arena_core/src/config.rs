/// Game tuning parameters for the arena fighter
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Physics
    pub const GRAVITY: f32 = 0.5; // added to vy every tick; projectiles are exempt
    pub const KNOCKBACK_FACTOR: f32 = 0.3; // fraction of projectile velocity transferred on hit

    // Projectiles
    pub const OOB_MARGIN: f32 = 50.0; // how far outside the arena a projectile may travel

    // Reset
    pub const RESET_SPEED_MIN: f32 = 3.0;
    pub const RESET_SPEED_MAX: f32 = 7.0;

    // Clock
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub gravity: f32,
    pub knockback_factor: f32,
    pub oob_margin: f32,
    pub reset_speed_min: f32,
    pub reset_speed_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            gravity: Params::GRAVITY,
            knockback_factor: Params::KNOCKBACK_FACTOR,
            oob_margin: Params::OOB_MARGIN,
            reset_speed_min: Params::RESET_SPEED_MIN,
            reset_speed_max: Params::RESET_SPEED_MAX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}
