mod app;
mod camera;
mod game;
mod input;
mod mesh;
mod renderer;

use std::env;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use app::App;
use game::LocalGame;
use game_core::Config;
use renderer::RenderMode;

struct CliOptions {
    mode: RenderMode,
}

impl CliOptions {
    fn parse() -> Result<Self> {
        let mut mode = RenderMode::Software;
        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--hardware" => mode = RenderMode::Hardware,
                other => {
                    return Err(anyhow!("Unknown argument: {other}. Usage: pong [--hardware]"));
                }
            }
        }
        Ok(Self { mode })
    }
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = CliOptions::parse()?;
    let config = Config::new();

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let window = WindowBuilder::new()
        .with_title("Pong")
        .with_inner_size(LogicalSize::new(
            config.arena_width as f64,
            config.arena_height as f64,
        ))
        .with_resizable(false)
        .build(&event_loop)
        .context("Failed to create window")?;
    let window = Arc::new(window);

    log::info!("Render mode: {:?}", options.mode);
    let backend = renderer::create_backend(options.mode, Arc::clone(&window), &config)?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(12345);
    let game = LocalGame::new(config, seed);

    let size = window.inner_size();
    let app = App::new(game, backend, (size.width.max(1), size.height.max(1)));
    app::run(event_loop, app)
}
