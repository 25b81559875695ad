//! Hero sphere rendering: mesh generation, uniforms, and wgpu pipeline.

mod mesh;
mod pipeline;
mod types;

pub use mesh::*;
pub use pipeline::*;
pub use types::*;
