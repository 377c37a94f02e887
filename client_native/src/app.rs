use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::keyboard::PhysicalKey;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

use crate::game::LocalGame;
use crate::input;
use crate::renderer::RenderBackend;
use game_core::SteerCommand;

/// Window events folded down to what a single tick cares about.
#[derive(Default)]
pub struct TickEvents {
    pub commands: Vec<SteerCommand>,
    pub resized: Option<(u32, u32)>,
    pub quit: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LoopSignal {
    Continue,
    Quit,
}

pub struct App {
    game: LocalGame,
    backend: Box<dyn RenderBackend>,
    surface_size: (u32, u32),
}

impl App {
    pub fn new(game: LocalGame, backend: Box<dyn RenderBackend>, surface_size: (u32, u32)) -> Self {
        Self {
            game,
            backend,
            surface_size,
        }
    }

    pub fn frame_delay(&self) -> Duration {
        self.game.config.frame_delay()
    }

    /// One tick: inputs, simulation, then a single render.
    ///
    /// A quit request wins before anything is drawn.
    pub fn advance(&mut self, tick: TickEvents) -> Result<LoopSignal> {
        if tick.quit {
            return Ok(LoopSignal::Quit);
        }

        if let Some((width, height)) = tick.resized {
            self.surface_size = (width, height);
            self.backend.resize(width, height);
        }

        for command in tick.commands {
            self.game.push_command(command);
        }

        let events = self.game.step();
        if events.wall_bounce {
            log::debug!("Wall bounce");
        }
        if events.paddle_bounce {
            log::debug!("Paddle bounce");
        }

        let frame = self.game.frame();
        match self.backend.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = self.surface_size;
                self.backend.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(anyhow!("Surface out of memory"));
            }
            Err(err) => log::warn!("Skipping frame: {err:?}"),
        }

        Ok(LoopSignal::Continue)
    }
}

fn collect_event(event: Event<()>, elwt: &EventLoopWindowTarget<()>, tick: &mut TickEvents) {
    if let Event::WindowEvent { event, .. } = event {
        match event {
            WindowEvent::CloseRequested => {
                tick.quit = true;
                elwt.exit();
            }
            WindowEvent::Resized(size) => {
                tick.resized = Some((size.width.max(1), size.height.max(1)));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(command) = input::steer_for(code, event.state) {
                        tick.commands.push(command);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Drive the game at a fixed cadence until the player quits.
pub fn run(mut event_loop: EventLoop<()>, mut app: App) -> Result<()> {
    loop {
        let mut tick = TickEvents::default();
        let status = event_loop.pump_events(Some(Duration::ZERO), |event, elwt| {
            collect_event(event, elwt, &mut tick);
        });

        if let PumpStatus::Exit(code) = status {
            log::info!("Event loop exited with code {code}");
            break;
        }

        if app.advance(tick)? == LoopSignal::Quit {
            break;
        }

        thread::sleep(app.frame_delay());
    }
    Ok(())
}
