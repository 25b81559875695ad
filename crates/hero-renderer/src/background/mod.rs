//! Spotlight background plane: vertex layout, uniforms, and wgpu pipeline.

mod pipeline;
mod types;

pub use pipeline::*;
pub use types::*;
