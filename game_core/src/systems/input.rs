use hecs::World;

use crate::components::{Controller, Velocity};
use crate::config::Config;
use crate::resources::{InputQueue, SteerCommand};

/// Drain queued steering commands into the human paddle's velocity
///
/// Commands apply in arrival order, so the last one queued this tick wins.
pub fn apply_steering(world: &mut World, queue: &mut InputQueue, config: &Config) {
    for command in queue.drain() {
        for (_entity, (vel, controller)) in world.query_mut::<(&mut Velocity, &Controller)>() {
            if *controller != Controller::Human {
                continue;
            }
            vel.0.y = match command {
                SteerCommand::Up => -config.paddle_speed,
                SteerCommand::Down => config.paddle_speed,
                SteerCommand::Stop => 0.0,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Controller, Velocity};

    fn setup_world() -> (hecs::World, Config, InputQueue) {
        let world = hecs::World::new();
        let config = Config::new();
        let queue = InputQueue::new();
        (world, config, queue)
    }

    #[test]
    fn test_up_command_moves_paddle_up() {
        let (mut world, config, mut queue) = setup_world();
        let paddle = create_paddle(&mut world, &config, 0, Controller::Human);
        queue.push(SteerCommand::Up);

        apply_steering(&mut world, &mut queue, &config);

        let vel = world.get::<&Velocity>(paddle).unwrap();
        assert_eq!(vel.0.y, -config.paddle_speed, "Up means negative Y");
        assert_eq!(vel.0.x, 0.0, "Paddles never move horizontally");
    }

    #[test]
    fn test_stop_command_zeroes_velocity() {
        let (mut world, config, mut queue) = setup_world();
        let paddle = create_paddle(&mut world, &config, 0, Controller::Human);
        queue.push(SteerCommand::Down);
        apply_steering(&mut world, &mut queue, &config);

        queue.push(SteerCommand::Stop);
        apply_steering(&mut world, &mut queue, &config);

        let vel = world.get::<&Velocity>(paddle).unwrap();
        assert_eq!(vel.0.y, 0.0, "Stop should zero the paddle velocity");
    }

    #[test]
    fn test_last_command_in_tick_wins() {
        let (mut world, config, mut queue) = setup_world();
        let paddle = create_paddle(&mut world, &config, 0, Controller::Human);
        queue.push(SteerCommand::Up);
        queue.push(SteerCommand::Down);

        apply_steering(&mut world, &mut queue, &config);

        let vel = world.get::<&Velocity>(paddle).unwrap();
        assert_eq!(vel.0.y, config.paddle_speed, "Later command overrides");
        assert!(queue.commands.is_empty(), "Queue drained after apply");
    }

    #[test]
    fn test_ai_paddle_ignores_steering() {
        let (mut world, config, mut queue) = setup_world();
        let paddle = create_paddle(&mut world, &config, 1, Controller::Ai);
        queue.push(SteerCommand::Down);

        apply_steering(&mut world, &mut queue, &config);

        let vel = world.get::<&Velocity>(paddle).unwrap();
        assert_eq!(vel.0.y, 0.0, "Steering only applies to the human paddle");
    }
}
