// Tuning constants shared by the kinematics, the cue scheduler and the
// native frontend.

// Physical inputs (world height is one unit)
pub const BALL_RADIUS: f64 = 0.175;
pub const GRAVITY: f64 = -3.0; // downward
pub const UPWARDS_ACCELERATION: f64 = 24.0; // bounce-back field, non-physical
pub const STARTING_HEIGHT: f64 = 1.0 - BALL_RADIUS; // ball starts touching the top edge

// Rendering-only shine highlight
pub const SHINE_OFFSET: f64 = 0.375;

// Audio cue
pub const CUE_VOLUME: f32 = 0.4;
// empirical audio start-up latency; the first fire is pulled forward by this
pub const CUE_START_LATENCY_MS: u64 = 100;
