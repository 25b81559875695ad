use hero_scene::Geometry;

/// A vertex of the background plane: position(vec3) + uv(vec2) = 20 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl PlaneVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PlaneVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

/// Uniform block for the spotlight shader.
///
/// Layout: mat4 + vec2 + padding = 80 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BackgroundUniforms {
    pub mvp: [f32; 16],
    /// Spotlight centre in plane UV space.
    pub light_position: [f32; 2],
    pub _padding: [f32; 2],
}

/// Single-quad plane in the XY plane, centred on the origin, facing +Z.
///
/// UV (0, 1) is the top-left corner.
pub fn generate_plane(width: f32, height: f32) -> ([PlaneVertex; 4], [u16; 6]) {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let vertices = [
        PlaneVertex {
            position: [-hw, hh, 0.0],
            uv: [0.0, 1.0],
        },
        PlaneVertex {
            position: [hw, hh, 0.0],
            uv: [1.0, 1.0],
        },
        PlaneVertex {
            position: [-hw, -hh, 0.0],
            uv: [0.0, 0.0],
        },
        PlaneVertex {
            position: [hw, -hh, 0.0],
            uv: [1.0, 0.0],
        },
    ];
    // Counter-clockwise seen from +Z.
    let indices = [0, 2, 1, 2, 3, 1];
    (vertices, indices)
}

/// Tessellate a scene plane. Returns `None` for non-plane shapes.
pub fn plane_for(geometry: &Geometry) -> Option<([PlaneVertex; 4], [u16; 6])> {
    match *geometry {
        Geometry::Plane { width, height } => Some(generate_plane(width, height)),
        Geometry::Sphere { .. } => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
