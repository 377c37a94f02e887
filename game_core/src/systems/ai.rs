use hecs::World;

use crate::components::{Ball, Controller, Position, Sprite, Velocity};
use crate::config::Config;

/// Steer AI paddles toward the ball
///
/// A paddle only chases while the ball is heading its way; otherwise it
/// drifts back toward the arena's vertical center. The dead-zone around the
/// paddle center keeps it from oscillating once aligned.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_data = {
        let mut query = world.query::<(&Position, &Velocity, &Sprite, &Ball)>();
        query
            .iter()
            .next()
            .map(|(_e, (pos, vel, sprite, _))| (pos.0.y + sprite.size.y * 0.5, vel.0.x))
    };

    let (ball_center_y, ball_vx) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    let deadzone = config.ai_deadzone();
    for (_entity, (pos, vel, sprite, controller)) in
        world.query_mut::<(&Position, &mut Velocity, &Sprite, &Controller)>()
    {
        if *controller != Controller::Ai {
            continue;
        }

        let center = pos.0 + sprite.size * 0.5;
        let on_left = center.x < config.arena_width * 0.5;
        let approaching = if on_left { ball_vx < 0.0 } else { ball_vx > 0.0 };
        let target_y = if approaching {
            ball_center_y
        } else {
            config.arena_height * 0.5
        };

        let diff = target_y - center.y;
        vel.0.y = if diff > deadzone {
            config.paddle_speed
        } else if diff < -deadzone {
            -config.paddle_speed
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Ball, Controller, Position, Sprite, Velocity};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config) {
        let world = hecs::World::new();
        let config = Config::new();
        (world, config)
    }

    fn spawn_ball_at(world: &mut hecs::World, config: &Config, center_y: f32, vx: f32) {
        let half = config.ball_size * 0.5;
        world.spawn((
            Position(Vec2::new(400.0, center_y - half)),
            Velocity(Vec2::new(vx, 0.0)),
            Sprite {
                size: Vec2::splat(config.ball_size),
                tint: config.ball_tint,
            },
            Ball,
        ));
    }

    fn paddle_center_y(world: &hecs::World, paddle: hecs::Entity) -> f32 {
        let pos = world.get::<&Position>(paddle).unwrap().0;
        let sprite = *world.get::<&Sprite>(paddle).unwrap();
        pos.y + sprite.size.y * 0.5
    }

    #[test]
    fn test_ai_moves_down_when_ball_below() {
        let (mut world, config) = setup_world();
        let paddle = create_paddle(&mut world, &config, 1, Controller::Ai);
        let center = paddle_center_y(&world, paddle);
        spawn_ball_at(&mut world, &config, center + 50.0, config.ball_speed);

        track_ball(&mut world, &config);

        let vel = world.get::<&Velocity>(paddle).unwrap();
        assert_eq!(vel.0.y, config.paddle_speed, "Ball below, paddle moves down");
    }

    #[test]
    fn test_ai_moves_up_when_ball_above() {
        let (mut world, config) = setup_world();
        let paddle = create_paddle(&mut world, &config, 1, Controller::Ai);
        let center = paddle_center_y(&world, paddle);
        spawn_ball_at(&mut world, &config, center - 50.0, config.ball_speed);

        track_ball(&mut world, &config);

        let vel = world.get::<&Velocity>(paddle).unwrap();
        assert_eq!(vel.0.y, -config.paddle_speed, "Ball above, paddle moves up");
    }

    #[test]
    fn test_ai_holds_inside_deadzone() {
        let (mut world, config) = setup_world();
        let paddle = create_paddle(&mut world, &config, 1, Controller::Ai);
        let center = paddle_center_y(&world, paddle);
        let offset = config.ai_deadzone() * 0.5;
        spawn_ball_at(&mut world, &config, center + offset, config.ball_speed);

        track_ball(&mut world, &config);

        let vel = world.get::<&Velocity>(paddle).unwrap();
        assert_eq!(vel.0.y, 0.0, "Small misalignment must not cause jitter");
    }

    #[test]
    fn test_ai_returns_to_center_when_ball_recedes() {
        let (mut world, config) = setup_world();
        let paddle = create_paddle(&mut world, &config, 1, Controller::Ai);
        for (_e, pos) in world.query_mut::<&mut Position>() {
            pos.0.y = 0.0; // Parked at the top
        }
        // Ball moving toward the far side
        spawn_ball_at(&mut world, &config, 300.0, -config.ball_speed);

        track_ball(&mut world, &config);

        let vel = world.get::<&Velocity>(paddle).unwrap();
        assert_eq!(
            vel.0.y, config.paddle_speed,
            "Receding ball sends the paddle back toward center"
        );
    }

    #[test]
    fn test_ai_never_steers_human_paddle() {
        let (mut world, config) = setup_world();
        let human = create_paddle(&mut world, &config, 0, Controller::Human);
        spawn_ball_at(&mut world, &config, 50.0, -config.ball_speed);

        track_ball(&mut world, &config);

        let vel = world.get::<&Velocity>(human).unwrap();
        assert_eq!(vel.0.y, 0.0, "Only AI paddles are driven by tracking");
    }

    #[test]
    fn test_ai_idles_without_ball() {
        let (mut world, config) = setup_world();
        let paddle = create_paddle(&mut world, &config, 1, Controller::Ai);

        track_ball(&mut world, &config);

        let vel = world.get::<&Velocity>(paddle).unwrap();
        assert_eq!(vel.0.y, 0.0);
    }
}
