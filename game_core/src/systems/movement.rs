use hecs::World;

use crate::components::{Position, Sprite, Velocity};
use crate::config::Config;

/// Advance every moving entity by its velocity and clamp it to the playfield
///
/// Clamping only clips the position; velocity is left untouched. Bounce
/// decisions belong to the collision system.
pub fn move_entities(world: &mut World, config: &Config) {
    for (_entity, (pos, vel, sprite)) in world.query_mut::<(&mut Position, &Velocity, &Sprite)>() {
        pos.0 += vel.0;

        pos.0.x = pos.0.x.clamp(0.0, config.arena_width - sprite.size.x);
        pos.0.y = pos.0.y.clamp(0.0, config.arena_height - sprite.size.y);
    }
}
