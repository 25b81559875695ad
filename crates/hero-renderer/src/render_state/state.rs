use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use hero_scene::{Scene, TextureHandle};

use crate::assets::ImageData;
use crate::background::{self, BackgroundPipeline};
use crate::frames::FrameSequence;
use crate::gpu::{GpuContext, RendererError};
use crate::sphere::{SphereMesh, SpherePipeline};
use crate::texture::{self, TextureRegistry};

use super::helpers::clear_color_for;

/// Core rendering state for the hero window.
///
/// Pipelines are built once from the scene's geometry; the per-frame
/// uniforms and texture bindings are read from the [`Scene`] on every
/// [`RenderState::render_scene`] call.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) sphere: SpherePipeline,
    pub(super) background: Option<BackgroundPipeline>,
    pub textures: TextureRegistry,
    pub(super) sampler: wgpu::Sampler,
    pub clear_color: wgpu::Color,
    pub(super) last_frame: Option<Instant>,
}

impl RenderState {
    /// Create a fully initialized render state for `scene` on `window`.
    pub async fn new(
        window: Arc<Window>,
        scene: &Scene,
        transparent: bool,
    ) -> Result<Self, RendererError> {
        let mesh = SphereMesh::from_geometry(&scene.sphere.geometry).ok_or_else(|| {
            RendererError::UnsupportedScene("sphere mesh must use sphere geometry".to_string())
        })?;
        let plane = match &scene.background {
            Some(mesh) => Some(background::plane_for(&mesh.geometry).ok_or_else(|| {
                RendererError::UnsupportedScene(
                    "background mesh must use plane geometry".to_string(),
                )
            })?),
            None => None,
        };

        let gpu = GpuContext::new(window, transparent).await?;
        let format = gpu.format();

        let sphere = SpherePipeline::new(&gpu.device, format, scene.sphere.material.kind, &mesh);
        let background = plane.map(|(vertices, indices)| {
            BackgroundPipeline::new(&gpu.device, format, &vertices, &indices)
        });
        let textures = TextureRegistry::new(&gpu.device, &gpu.queue);
        let sampler = texture::create_sampler(&gpu.device);

        tracing::info!(
            preset = ?scene.preset,
            vertices = mesh.vertices.len(),
            background = background.is_some(),
            "Render state ready"
        );

        Ok(Self {
            gpu,
            sphere,
            background,
            textures,
            sampler,
            clear_color: clear_color_for(transparent),
            last_frame: None,
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Upload a decoded still image and return its handle.
    pub fn upload_image(&mut self, label: &str, image: &ImageData) -> TextureHandle {
        self.textures
            .insert_image(&self.gpu.device, &self.gpu.queue, label, image)
    }

    /// Upload a (possibly animated) frame sequence and return its handle.
    pub fn upload_frames(
        &mut self,
        label: &str,
        frames: FrameSequence,
    ) -> Result<TextureHandle, RendererError> {
        if frames.is_empty() {
            return Err(RendererError::TextureError(format!(
                "{label}: frame sequence is empty"
            )));
        }
        Ok(self
            .textures
            .insert_frames(&self.gpu.device, &self.gpu.queue, label, frames))
    }
}
