/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 3.0; // pixels per tick

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 3.0; // pixels per tick

    // Physics
    pub const MAX_DEFLECT_DEG: f32 = 45.0; // steepest return off a paddle edge

    // AI
    pub const AI_DEADZONE_FRAC: f32 = 0.1; // fraction of paddle height

    // Timing
    pub const FRAME_DELAY_MS: u64 = 10;

    // Colors
    pub const BACKGROUND_TINT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PADDLE_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
