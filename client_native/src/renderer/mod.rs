mod hardware;
mod init;
mod pipeline;
mod shaders;
mod software;

pub use hardware::HardwareRenderer;
pub use software::SoftwareRenderer;

use std::sync::Arc;

use anyhow::Result;
use glam::Vec2;
use winit::window::Window;

use game_core::Config;

/// Which presentation path draws the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Software,
    Hardware,
}

/// One rectangle to draw, in playfield pixels.
#[derive(Debug, Clone, Copy)]
pub struct RectInstance {
    pub pos: Vec2,
    pub size: Vec2,
    pub tint: [f32; 4],
}

/// Everything a backend needs to draw one tick.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub background: [f32; 4],
    pub rects: Vec<RectInstance>,
}

/// Presentation strategy; the loop drives whichever one was picked at
/// startup and never switches afterwards.
pub trait RenderBackend {
    fn resize(&mut self, width: u32, height: u32);
    fn render(&mut self, frame: &Frame) -> Result<(), wgpu::SurfaceError>;
}

pub fn create_backend(
    mode: RenderMode,
    window: Arc<Window>,
    config: &Config,
) -> Result<Box<dyn RenderBackend>> {
    let ctx = pollster::block_on(init::init_wgpu(window))?;
    let backend: Box<dyn RenderBackend> = match mode {
        RenderMode::Software => Box::new(SoftwareRenderer::new(ctx, config)),
        RenderMode::Hardware => Box::new(HardwareRenderer::new(ctx, config)),
    };
    Ok(backend)
}
