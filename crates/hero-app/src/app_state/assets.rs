//! Background asset decoding.
//!
//! Decoding runs on a dedicated thread; GPU uploads happen on the event-loop
//! thread when the results are polled.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use hero_config::schema::AssetsConfig;
use hero_renderer::assets;
use hero_scene::uniforms as names;

use super::core::HeroApp;
use super::types::AssetEvent;

/// Start decoding the sphere texture, then the background frames.
///
/// Returns `None` when the thread could not be spawned.
pub(super) fn spawn_asset_loader(config: &AssetsConfig) -> Option<Receiver<AssetEvent>> {
    let background = config.background_video_path();
    let sphere = config.sphere_texture_path();
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name("hero-assets".into())
        .spawn(move || {
            // The sphere texture gates the loop; decode it before the frames.
            let texture = assets::load_image(&sphere);
            if tx.send(AssetEvent::SphereTexture(texture)).is_err() {
                return;
            }
            let _ = tx.send(AssetEvent::Background(assets::load_background(&background)));
        });

    match spawned {
        Ok(_) => Some(rx),
        Err(e) => {
            tracing::error!("Failed to spawn asset loader: {e}");
            None
        }
    }
}

impl HeroApp {
    /// Upload a decoded asset and bind it into the scene.
    pub(super) fn handle_asset_event(&mut self, event: AssetEvent) {
        let (Some(ctx), Some(rs)) = (self.ctx.as_mut(), self.render_state.as_mut()) else {
            return;
        };

        match event {
            AssetEvent::Background(frames) => {
                let frame_count = frames.len();
                match rs.upload_frames(names::VIDEO_TEXTURE, frames) {
                    Ok(handle) => {
                        if let Err(e) = ctx.scene.set_video_texture(handle) {
                            tracing::warn!(error = %e, "Scene has no background plane");
                        } else {
                            tracing::info!(frames = frame_count, "Background frames bound");
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "Background upload failed"),
                }
            }
            AssetEvent::SphereTexture(result) => {
                let result = result.map(|image| rs.upload_image(names::SPHERE_TEXTURE, &image));
                self.animation.on_texture_loaded(ctx, result);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
