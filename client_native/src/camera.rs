use glam::Mat4;

/// Orthographic camera over the playfield, y growing downward.
pub struct Camera {
    pub view_proj: Mat4,
}

impl Camera {
    pub fn orthographic(width: f32, height: f32) -> Self {
        Self {
            view_proj: Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0),
        }
    }
}

/// GPU-side layout; uniform bindings round up to 256 bytes.
#[repr(C, align(256))]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub _padding: [f32; 48],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
