use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Controller, Position, Sprite, Velocity};
use crate::config::Config;
use crate::resources::Events;

/// Axis-aligned box in playfield pixels, top-left anchored
#[derive(Debug, Clone, Copy)]
struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    fn from_rect(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Check ball collisions with walls and paddles
///
/// Walls resolve first, then paddles in spawn order (ascending entity id) so
/// a degenerate double-overlap resolves the same way every tick. Only the
/// first overlapping paddle is honored.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect ball state without holding borrows
    let ball_data = {
        let mut query = world.query::<(&Position, &Velocity, &Sprite, &Ball)>();
        query
            .iter()
            .next()
            .map(|(_e, (pos, vel, sprite, _))| (pos.0, vel.0, sprite.size))
    };

    let (mut ball_pos, mut ball_vel, ball_size) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    // Wall bounces: invert the axis component still pushing out of bounds
    if ball_pos.y <= 0.0 && ball_vel.y < 0.0 {
        ball_vel.y = -ball_vel.y;
        events.wall_bounce = true;
    } else if ball_pos.y + ball_size.y >= config.arena_height && ball_vel.y > 0.0 {
        ball_vel.y = -ball_vel.y;
        events.wall_bounce = true;
    }
    if ball_pos.x <= 0.0 && ball_vel.x < 0.0 {
        ball_vel.x = -ball_vel.x;
        events.wall_bounce = true;
    } else if ball_pos.x + ball_size.x >= config.arena_width && ball_vel.x > 0.0 {
        ball_vel.x = -ball_vel.x;
        events.wall_bounce = true;
    }

    let mut paddles: Vec<(hecs::Entity, Vec2, Vec2)> = world
        .query::<(&Position, &Sprite, &Controller)>()
        .iter()
        .map(|(e, (pos, sprite, _))| (e, pos.0, sprite.size))
        .collect();
    paddles.sort_by_key(|(e, _, _)| e.id());

    let ball_box = Aabb::from_rect(ball_pos, ball_size);
    for (_entity, paddle_pos, paddle_size) in paddles {
        let paddle_box = Aabb::from_rect(paddle_pos, paddle_size);
        if !ball_box.overlaps(&paddle_box) {
            continue;
        }

        // Only bounce when the ball is heading into this paddle's side
        let on_left = paddle_box.center().x < config.arena_width * 0.5;
        let should_bounce = (on_left && ball_vel.x < 0.0) || (!on_left && ball_vel.x > 0.0);
        if !should_bounce {
            continue;
        }

        // Contact offset from paddle center: -1 at the top edge, 1 at the
        // bottom, clamped for corner grazes
        let half_height = paddle_size.y * 0.5;
        let offset = (ball_box.center().y - paddle_box.center().y) / half_height;
        let angle = offset.clamp(-1.0, 1.0) * config.max_deflect_deg.to_radians();

        ball_vel.x = -ball_vel.x;
        ball_vel.y = angle.tan() * ball_vel.x.abs();

        // Push the ball flush against the paddle face
        if on_left {
            ball_pos.x = paddle_box.max.x;
        } else {
            ball_pos.x = paddle_box.min.x - ball_size.x;
        }

        events.paddle_bounce = true;
        break;
    }

    for (_entity, (pos, vel, _)) in world.query_mut::<(&mut Position, &mut Velocity, &Ball)>() {
        pos.0 = ball_pos;
        vel.0 = ball_vel;
    }
}
