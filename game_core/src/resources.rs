/// Steering command for the human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteerCommand {
    Up,
    Down,
    Stop,
}

/// Queued steering commands, drained once per tick in arrival order
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub commands: Vec<SteerCommand>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: SteerCommand) {
        self.commands.push(command);
    }

    pub fn drain(&mut self) -> Vec<SteerCommand> {
        let commands = self.commands.clone();
        self.commands.clear();
        commands
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_bounce: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounce = false;
        self.paddle_bounce = false;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
