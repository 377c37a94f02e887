use wgpu::util::DeviceExt;

use super::init::WgpuContext;
use super::pipeline::{create_blit_pipeline, BlitPipeline};
use super::{Frame, RenderBackend};
use game_core::Config;

/// CPU-side RGBA pixel buffer the software path rasterizes into.
pub struct Framebuffer {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width * height * 4) as usize],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Fill a rectangle, clipped to the buffer edges.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: [u8; 4]) {
        let x0 = x.clamp(0, self.width as i32) as u32;
        let y0 = y.clamp(0, self.height as i32) as u32;
        let x1 = (x + width as i32).clamp(0, self.width as i32) as u32;
        let y1 = (y + height as i32).clamp(0, self.height as i32) as u32;

        for row in y0..y1 {
            let start = ((row * self.width + x0) * 4) as usize;
            let end = ((row * self.width + x1) * 4) as usize;
            for pixel in self.pixels[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&color);
            }
        }
    }
}

pub fn tint_to_bytes(tint: [f32; 4]) -> [u8; 4] {
    let mut out = [0u8; 4];
    for (byte, channel) in out.iter_mut().zip(tint) {
        *byte = (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    out
}

/// Rasterizes the frame on the CPU, then blits the pixels to the window.
pub struct SoftwareRenderer {
    ctx: WgpuContext,
    pipeline: BlitPipeline,
    framebuffer: Framebuffer,
    texture: wgpu::Texture,
    frame_bind_group: wgpu::BindGroup,
    quad_vertex_buffer: wgpu::Buffer,
}

impl SoftwareRenderer {
    pub fn new(ctx: WgpuContext, config: &Config) -> Self {
        let pipeline = create_blit_pipeline(&ctx.device, ctx.config.format);

        let framebuffer = Framebuffer::new(config.arena_width as u32, config.arena_height as u32);

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Playfield Texture"),
            size: wgpu::Extent3d {
                width: framebuffer.width,
                height: framebuffer.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Nearest keeps the pixels crisp when the window scales them.
        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Playfield Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let frame_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Playfield Bind Group"),
            layout: &pipeline.texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        // x, y, u, v; strip order covers the whole surface.
        let quad: [f32; 16] = [
            -1.0, -1.0, 0.0, 1.0, //
            1.0, -1.0, 1.0, 1.0, //
            -1.0, 1.0, 0.0, 0.0, //
            1.0, 1.0, 1.0, 0.0, //
        ];
        let quad_vertex_buffer =
            ctx.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Blit Quad"),
                    contents: bytemuck::cast_slice(&quad),
                    usage: wgpu::BufferUsages::VERTEX,
                });

        Self {
            ctx,
            pipeline,
            framebuffer,
            texture,
            frame_bind_group,
            quad_vertex_buffer,
        }
    }

    fn rasterize(&mut self, frame: &Frame) {
        self.framebuffer.clear(tint_to_bytes(frame.background));
        for rect in &frame.rects {
            self.framebuffer.fill_rect(
                rect.pos.x.round() as i32,
                rect.pos.y.round() as i32,
                rect.size.x.round() as u32,
                rect.size.y.round() as u32,
                tint_to_bytes(rect.tint),
            );
        }
    }
}

impl RenderBackend for SoftwareRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
    }

    fn render(&mut self, frame: &Frame) -> Result<(), wgpu::SurfaceError> {
        self.rasterize(frame);

        self.ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &self.framebuffer.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.framebuffer.width),
                rows_per_image: Some(self.framebuffer.height),
            },
            wgpu::Extent3d {
                width: self.framebuffer.width,
                height: self.framebuffer.height,
                depth_or_array_layers: 1,
            },
        );

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.ctx
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Blit Encoder"),
                });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Blit Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline.pipeline);
            pass.set_bind_group(0, &self.frame_bind_group, &[]);
            pass.set_vertex_buffer(0, self.quad_vertex_buffer.slice(..));
            pass.draw(0..4, 0..1);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut fb = Framebuffer::new(4, 3);
        fb.clear([9, 8, 7, 255]);

        for pixel in fb.pixels.chunks_exact(4) {
            assert_eq!(pixel, [9, 8, 7, 255]);
        }
    }

    #[test]
    fn test_fill_rect_colors_only_the_inside() {
        let mut fb = Framebuffer::new(8, 8);
        fb.clear([0, 0, 0, 255]);
        fb.fill_rect(2, 2, 3, 3, [255, 255, 255, 255]);

        let pixel_at = |x: u32, y: u32| {
            let idx = ((y * 8 + x) * 4) as usize;
            [
                fb.pixels[idx],
                fb.pixels[idx + 1],
                fb.pixels[idx + 2],
                fb.pixels[idx + 3],
            ]
        };
        assert_eq!(pixel_at(2, 2), [255; 4]);
        assert_eq!(pixel_at(4, 4), [255; 4]);
        assert_eq!(pixel_at(1, 2), [0, 0, 0, 255]);
        assert_eq!(pixel_at(5, 5), [0, 0, 0, 255]);
    }

    #[test]
    fn test_fill_rect_clips_to_the_buffer() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_rect(-2, -2, 10, 10, [1, 2, 3, 4]);
        for pixel in fb.pixels.chunks_exact(4) {
            assert_eq!(pixel, [1, 2, 3, 4]);
        }

        let mut fb = Framebuffer::new(4, 4);
        fb.fill_rect(10, 10, 5, 5, [9, 9, 9, 9]);
        assert!(
            fb.pixels.iter().all(|&b| b == 0),
            "Off-screen rect touches nothing"
        );
    }

    #[test]
    fn test_tint_conversion_clamps_and_scales() {
        assert_eq!(tint_to_bytes([0.0, 0.5, 1.0, 2.0]), [0, 128, 255, 255]);
        assert_eq!(tint_to_bytes([-1.0, 0.3, 0.0, 1.0])[0], 0);
    }
}
