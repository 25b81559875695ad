//! Per-window rendering state: GPU context, pipelines, and textures.

mod frame;
mod helpers;
mod state;

pub use state::RenderState;
