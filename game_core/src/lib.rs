pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the Pong simulation by one tick
pub fn step(world: &mut World, config: &Config, queue: &mut InputQueue, events: &mut Events) {
    // Events describe a single tick
    events.clear();

    // 1. Apply queued steering to the human paddle
    apply_steering(world, queue, config);

    // 2. Integrate positions and clip to the playfield
    move_entities(world, config);

    // 3. Steer the AI paddle toward the ball
    track_ball(world, config);

    // 4. Resolve wall and paddle bounces
    check_collisions(world, config, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    player_id: u8,
    controller: Controller,
) -> hecs::Entity {
    world.spawn((
        Position(Vec2::new(config.paddle_x(player_id), config.paddle_spawn_y())),
        Velocity::default(),
        Sprite {
            size: Vec2::new(config.paddle_width, config.paddle_height),
            tint: config.paddle_tint,
        },
        controller,
    ))
}

/// Helper to create the ball entity, served toward a random side
pub fn create_ball(world: &mut World, config: &Config, rng: &mut GameRng) -> hecs::Entity {
    use rand::Rng;
    let vx = if rng.0.gen_bool(0.5) {
        config.ball_speed
    } else {
        -config.ball_speed
    };
    world.spawn((
        Position(config.ball_spawn()),
        Velocity(Vec2::new(vx, 0.0)),
        Sprite {
            size: Vec2::splat(config.ball_size),
            tint: config.ball_tint,
        },
        Ball,
    ))
}
