use game_core::{
    create_ball, create_paddle, Config, Controller, Events, GameRng, InputQueue, Position, Sprite,
    SteerCommand,
};
use hecs::World;

use crate::renderer::{Frame, RectInstance};

/// Self-contained simulation driven by the window loop.
pub struct LocalGame {
    pub world: World,
    pub config: Config,
    queue: InputQueue,
    events: Events,
}

impl LocalGame {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, &config, 0, Controller::Human);
        create_paddle(&mut world, &config, 1, Controller::Ai);
        create_ball(&mut world, &config, &mut rng);

        Self {
            world,
            config,
            queue: InputQueue::new(),
            events: Events::new(),
        }
    }

    pub fn push_command(&mut self, command: SteerCommand) {
        self.queue.push(command);
    }

    /// Advance one tick and report what bounced during it.
    pub fn step(&mut self) -> &Events {
        game_core::step(
            &mut self.world,
            &self.config,
            &mut self.queue,
            &mut self.events,
        );
        &self.events
    }

    /// Snapshot the drawable state for the render backends.
    pub fn frame(&self) -> Frame {
        let mut rects = Vec::new();
        for (_entity, (pos, sprite)) in self.world.query::<(&Position, &Sprite)>().iter() {
            rects.push(RectInstance {
                pos: pos.0,
                size: sprite.size,
                tint: sprite.tint,
            });
        }
        Frame {
            background: self.config.background_tint,
            rects,
        }
    }
}
