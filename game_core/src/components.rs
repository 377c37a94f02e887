use glam::Vec2;

/// Top-left corner in playfield pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Displacement applied each tick, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// Visual footprint of an entity
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub size: Vec2,     // width, height in pixels
    pub tint: [f32; 4], // rgba
}

/// Who steers a paddle, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Marker for the ball entity
#[derive(Debug, Clone, Copy)]
pub struct Ball;
