use std::time::Instant;

use hero_scene::uniforms as names;
use hero_scene::{Scene, SceneRenderer};

use crate::gpu::RendererError;
use crate::uniforms::{background_uniforms, sphere_uniforms};

use super::helpers::log_first_frame;
use super::state::RenderState;

impl RenderState {
    /// Render one frame of `scene`: advance animated textures, upload
    /// uniforms, then draw the sphere followed by the background plane.
    pub fn render_scene(&mut self, scene: &Scene) -> Result<(), RendererError> {
        let now = Instant::now();
        if let Some(last) = self.last_frame.replace(now) {
            self.textures.advance(&self.gpu.queue, now - last);
        }

        self.sphere
            .update_uniforms(&self.gpu.queue, &sphere_uniforms(scene));
        let sphere_texture = scene.sphere.material.uniforms.texture(names::SPHERE_TEXTURE);
        let handle = self.textures.resolve(sphere_texture);
        self.sphere.bind_texture(
            &self.gpu.device,
            &self.sampler,
            handle,
            self.textures.get(Some(handle)),
        );

        if let (Some(pipeline), Some(plane), Some(uniforms)) = (
            self.background.as_mut(),
            scene.background.as_ref(),
            background_uniforms(scene),
        ) {
            pipeline.update_uniforms(&self.gpu.queue, &uniforms);
            let video = plane.material.uniforms.texture(names::VIDEO_TEXTURE);
            let handle = self.textures.resolve(video);
            pipeline.bind_texture(
                &self.gpu.device,
                &self.sampler,
                handle,
                self.textures.get(Some(handle)),
            );
        }

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("Surface texture timed out, skipping frame");
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("hero frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("hero main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Scene order: sphere first, then the transparent plane.
            self.sphere.draw(&mut pass);
            if let Some(background) = &self.background {
                background.draw(&mut pass);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}

impl SceneRenderer for RenderState {
    type Error = RendererError;

    fn render(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        self.render_scene(scene)
    }
}
