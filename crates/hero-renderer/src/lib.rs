//! wgpu renderer for the hero scene.
//!
//! Turns a [`hero_scene::Scene`] into draw calls: a displaced sphere and a
//! spotlight background plane sharing one depth-tested pass.

pub mod assets;
pub mod background;
pub mod frames;
pub mod gpu;
pub mod perf;
pub mod render_state;
pub mod sphere;
pub mod texture;
pub mod uniforms;

pub use assets::{load_background, load_frames, load_image, ImageData};
pub use frames::{FramePlayer, FrameSequence};
pub use gpu::{GpuContext, RendererError};
pub use perf::FrameTimer;
pub use render_state::RenderState;
pub use texture::TextureRegistry;
