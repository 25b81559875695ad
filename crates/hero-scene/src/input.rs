//! Window input: resize, pointer movement, and the enter button.

use std::time::Duration;

use crate::context::HeroContext;
use crate::transition::Navigator;

/// Drawable size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Map a pointer position to spotlight UV space: `(x / W, 1 - y / H)`.
    pub fn normalize(&self, x: f64, y: f64) -> Option<[f32; 2]> {
        if self.is_empty() {
            return None;
        }
        let u = x / f64::from(self.width);
        let v = 1.0 - y / f64::from(self.height);
        Some([u as f32, v as f32])
    }
}

/// One-shot trigger for the zoom transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterButton {
    enabled: bool,
}

impl EnterButton {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// A button that never fires (presets without an enter control).
    pub fn absent() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` on the first press only; the button disables itself.
    pub fn press(&mut self) -> bool {
        std::mem::replace(&mut self.enabled, false)
    }
}

impl Default for EnterButton {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a new drawable size to the viewport and camera.
///
/// Zero-sized windows (minimized) are ignored. Returns `true` when the size
/// was applied and the renderer should be resized to match.
pub fn handle_resize<N: Navigator>(ctx: &mut HeroContext<N>, width: u32, height: u32) -> bool {
    let viewport = Viewport::new(width, height);
    if viewport.is_empty() {
        tracing::debug!(width, height, "Ignoring zero-sized resize");
        return false;
    }
    ctx.viewport = viewport;
    ctx.scene.camera.set_viewport(width, height);
    true
}

/// Move the background spotlight under the pointer.
///
/// Returns the UV written, or `None` when there is nothing to light.
pub fn handle_mouse_move<N: Navigator>(ctx: &mut HeroContext<N>, x: f64, y: f64) -> Option<[f32; 2]> {
    ctx.scene.background.as_ref()?;
    let uv = ctx.viewport.normalize(x, y)?;
    match ctx.scene.set_spotlight(uv) {
        Ok(()) => Some(uv),
        Err(e) => {
            tracing::warn!(error = %e, "Spotlight update rejected");
            None
        }
    }
}

/// Press the enter button at `now`. Starts the zoom on the first press.
pub fn handle_click<N: Navigator>(ctx: &mut HeroContext<N>, now: Duration) -> bool {
    if !ctx.button.press() {
        return false;
    }
    ctx.transition.start(&ctx.scene, now).is_some()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hero_config::schema::{HeroConfig, ScenePreset};

    struct NoopNavigator;

    impl Navigator for NoopNavigator {
        fn navigate(&mut self, _url: &str) {}
    }

    fn textured(width: u32, height: u32) -> HeroContext<NoopNavigator> {
        HeroContext::from_config(&HeroConfig::default(), width, height, NoopNavigator)
    }

    #[test]
    fn mouse_maps_to_flipped_uv() {
        let mut ctx = textured(1000, 500);
        let uv = handle_mouse_move(&mut ctx, 250.0, 100.0).unwrap();
        assert!((uv[0] - 0.25).abs() < 1e-6);
        assert!((uv[1] - 0.8).abs() < 1e-6);
        assert_eq!(ctx.scene.spotlight(), Some(uv));
    }

    #[test]
    fn mouse_corners() {
        let mut ctx = textured(800, 600);
        assert_eq!(handle_mouse_move(&mut ctx, 0.0, 0.0), Some([0.0, 1.0]));
        assert_eq!(handle_mouse_move(&mut ctx, 800.0, 600.0), Some([1.0, 0.0]));
    }

    #[test]
    fn last_mouse_event_wins() {
        let mut ctx = textured(100, 100);
        handle_mouse_move(&mut ctx, 10.0, 10.0);
        handle_mouse_move(&mut ctx, 50.0, 50.0);
        assert_eq!(ctx.scene.spotlight(), Some([0.5, 0.5]));
    }

    #[test]
    fn mouse_without_background_is_noop() {
        let mut config = HeroConfig::default();
        config.scene.preset = ScenePreset::Gradient;
        let mut ctx = HeroContext::from_config(&config, 800, 600, NoopNavigator);
        assert_eq!(handle_mouse_move(&mut ctx, 10.0, 10.0), None);
    }

    #[test]
    fn mouse_uses_latest_viewport() {
        let mut ctx = textured(100, 100);
        handle_resize(&mut ctx, 200, 400);
        assert_eq!(handle_mouse_move(&mut ctx, 100.0, 100.0), Some([0.5, 0.75]));
    }

    #[test]
    fn resize_updates_viewport_and_aspect() {
        let mut ctx = textured(800, 600);
        assert!(handle_resize(&mut ctx, 1920, 1080));
        assert_eq!(ctx.viewport, Viewport::new(1920, 1080));
        assert!((ctx.scene.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut ctx = textured(800, 600);
        handle_resize(&mut ctx, 1024, 768);
        let once = (ctx.viewport, ctx.scene.clone());
        handle_resize(&mut ctx, 1024, 768);
        assert_eq!((ctx.viewport, ctx.scene.clone()), once);
    }

    #[test]
    fn zero_resize_is_ignored() {
        let mut ctx = textured(800, 600);
        assert!(!handle_resize(&mut ctx, 0, 600));
        assert!(!handle_resize(&mut ctx, 800, 0));
        assert_eq!(ctx.viewport, Viewport::new(800, 600));
        assert!((ctx.scene.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn button_fires_once() {
        let mut button = EnterButton::new();
        assert!(button.press());
        assert!(!button.is_enabled());
        assert!(!button.press());
    }

    #[test]
    fn absent_button_never_fires() {
        let mut button = EnterButton::absent();
        assert!(!button.press());
    }

    #[test]
    fn repeated_clicks_start_one_tween() {
        let mut ctx = textured(800, 600);
        assert!(handle_click(&mut ctx, Duration::ZERO));
        assert!(!handle_click(&mut ctx, Duration::from_millis(10)));
        assert!(!handle_click(&mut ctx, Duration::from_millis(20)));
        assert_eq!(ctx.transition.active_tweens(), 1);
        assert!(!ctx.button.is_enabled());
    }
}
