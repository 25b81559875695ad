//! Window creation, scene construction, and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use hero_common::HeroError;
use hero_config::schema::ScenePreset;
use hero_renderer::RenderState;
use hero_scene::HeroContext;

use super::assets::spawn_asset_loader;
use super::core::HeroApp;
use super::navigation::BrowserNavigator;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl HeroApp {
    /// Create the window, build the scene, and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        match self.try_initialize_window(event_loop) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to initialize window: {e}");
                false
            }
        }
    }

    fn try_initialize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), HeroError> {
        let window_config = &self.config.window;
        let transparent = window_config.transparent;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_transparent(transparent)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| HeroError::Other(format!("window creation failed: {e}")))?;

        let size = window.inner_size();
        let ctx = HeroContext::from_config(&self.config, size.width, size.height, BrowserNavigator);

        let rs = pollster::block_on(RenderState::new(window.clone(), &ctx.scene, transparent))?;
        self.render_state = Some(rs);

        if self.config.scene.preset == ScenePreset::Textured {
            self.asset_rx = spawn_asset_loader(&self.config.assets);
        }

        self.ctx = Some(ctx);
        self.window = Some(window);
        tracing::info!(
            width = size.width,
            height = size.height,
            "Window created and renderer initialized"
        );
        Ok(())
    }
}
