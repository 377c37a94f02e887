use std::time::Duration;

use glam::Vec2;

use crate::params::Params;

/// Game configuration
///
/// Every system receives this by reference; there is no global tuning state.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub max_deflect_deg: f32,
    pub ai_deadzone_frac: f32,
    pub frame_delay_ms: u64,
    pub background_tint: [f32; 4],
    pub paddle_tint: [f32; 4],
    pub ball_tint: [f32; 4],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            max_deflect_deg: Params::MAX_DEFLECT_DEG,
            ai_deadzone_frac: Params::AI_DEADZONE_FRAC,
            frame_delay_ms: Params::FRAME_DELAY_MS,
            background_tint: Params::BACKGROUND_TINT,
            paddle_tint: Params::PADDLE_TINT,
            ball_tint: Params::BALL_TINT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            0.0 // Left paddle
        } else {
            self.arena_width - self.paddle_width // Right paddle
        }
    }

    /// Y position centering a paddle vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Top-left position centering the ball in the arena
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.arena_width - self.ball_size) / 2.0,
            (self.arena_height - self.ball_size) / 2.0,
        )
    }

    /// Dead-zone around the AI paddle center, in pixels
    pub fn ai_deadzone(&self) -> f32 {
        self.paddle_height * self.ai_deadzone_frac
    }

    /// Fixed per-tick delay
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}
