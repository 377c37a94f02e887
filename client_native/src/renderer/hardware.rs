use wgpu::util::DeviceExt;

use super::init::WgpuContext;
use super::pipeline::{create_rect_pipeline, InstanceData, RectPipeline};
use super::{Frame, RenderBackend};
use crate::camera::{Camera, CameraUniform};
use crate::mesh::{create_unit_rect, Mesh};
use game_core::Config;

/// Draws the frame's rects directly with an instanced pipeline.
pub struct HardwareRenderer {
    ctx: WgpuContext,
    pipeline: RectPipeline,
    camera_bind_group: wgpu::BindGroup,
    rect_mesh: Mesh,
    instance_buffer: wgpu::Buffer,
    max_instances: usize,
}

impl HardwareRenderer {
    pub fn new(ctx: WgpuContext, config: &Config) -> Self {
        let pipeline = create_rect_pipeline(&ctx.device, ctx.config.format);

        let camera = Camera::orthographic(config.arena_width, config.arena_height);
        let camera_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::bytes_of(&CameraUniform::from_camera(&camera)),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        // The bind group keeps the buffer alive.
        let camera_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipeline.camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let rect_mesh = create_unit_rect(&ctx.device);

        let max_instances = 16;
        let instance_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (max_instances * std::mem::size_of::<InstanceData>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            ctx,
            pipeline,
            camera_bind_group,
            rect_mesh,
            instance_buffer,
            max_instances,
        }
    }

    fn grow_instance_buffer(&mut self, needed: usize) {
        self.max_instances = needed.next_power_of_two();
        self.instance_buffer = self.ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (self.max_instances * std::mem::size_of::<InstanceData>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
    }
}

fn clear_color(tint: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: tint[0] as f64,
        g: tint[1] as f64,
        b: tint[2] as f64,
        a: tint[3] as f64,
    }
}

impl RenderBackend for HardwareRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
    }

    fn render(&mut self, frame: &Frame) -> Result<(), wgpu::SurfaceError> {
        let instances: Vec<InstanceData> = frame
            .rects
            .iter()
            .map(|rect| InstanceData {
                transform: [rect.pos.x, rect.pos.y, rect.size.x, rect.size.y],
                tint: rect.tint,
            })
            .collect();

        if instances.len() > self.max_instances {
            self.grow_instance_buffer(instances.len());
        }
        if !instances.is_empty() {
            self.ctx
                .queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Rect Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color(frame.background)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline.pipeline);
            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, self.rect_mesh.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            pass.set_index_buffer(
                self.rect_mesh.index_buffer.slice(..),
                wgpu::IndexFormat::Uint16,
            );
            pass.draw_indexed(0..self.rect_mesh.index_count, 0, 0..instances.len() as u32);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
