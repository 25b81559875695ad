//! Explicit state object shared by input handlers and the animation loop.

use std::time::Duration;

use hero_config::schema::{HeroConfig, ScenePreset};

use crate::input::{EnterButton, Viewport};
use crate::scene::{Scene, SceneBuilder};
use crate::transition::{Navigator, TransitionController, TransitionSettings};

/// All mutable hero state. Handlers and ticks take it by `&mut`, so the
/// last write always wins and nothing needs locking.
pub struct HeroContext<N> {
    pub scene: Scene,
    pub viewport: Viewport,
    pub button: EnterButton,
    pub transition: TransitionController,
    pub navigator: N,
}

impl<N: Navigator> HeroContext<N> {
    pub fn new(scene: Scene, viewport: Viewport, settings: TransitionSettings, navigator: N) -> Self {
        let button = match scene.preset {
            ScenePreset::Textured => EnterButton::new(),
            ScenePreset::Gradient => EnterButton::absent(),
        };
        Self {
            scene,
            viewport,
            button,
            transition: TransitionController::new(settings),
            navigator,
        }
    }

    /// Build the scene for the configured preset at the given viewport size.
    pub fn from_config(config: &HeroConfig, width: u32, height: u32, navigator: N) -> Self {
        let scene = SceneBuilder::new(config.scene.preset)
            .with_viewport(width, height)
            .build();
        Self::new(
            scene,
            Viewport::new(width, height),
            TransitionSettings::from_config(&config.transition),
            navigator,
        )
    }

    /// Advance every active tween to `now`. Returns `true` when a zoom completed.
    pub fn update_tweens(&mut self, now: Duration) -> bool {
        self.transition
            .update(&mut self.scene, &mut self.navigator, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopNavigator;

    impl Navigator for NoopNavigator {
        fn navigate(&mut self, _url: &str) {}
    }

    #[test]
    fn from_config_uses_preset_and_viewport() {
        let mut config = HeroConfig::default();
        config.scene.preset = ScenePreset::Gradient;
        let ctx = HeroContext::from_config(&config, 800, 400, NoopNavigator);
        assert_eq!(ctx.scene.preset, ScenePreset::Gradient);
        assert_eq!(ctx.viewport, Viewport::new(800, 400));
        assert!((ctx.scene.camera.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn textured_preset_has_enabled_button() {
        let ctx = HeroContext::from_config(&HeroConfig::default(), 800, 600, NoopNavigator);
        assert!(ctx.button.is_enabled());
    }

    #[test]
    fn gradient_preset_has_no_button() {
        let mut config = HeroConfig::default();
        config.scene.preset = ScenePreset::Gradient;
        let ctx = HeroContext::from_config(&config, 800, 600, NoopNavigator);
        assert!(!ctx.button.is_enabled());
    }

    #[test]
    fn update_tweens_without_transition_is_noop() {
        let mut ctx = HeroContext::from_config(&HeroConfig::default(), 800, 600, NoopNavigator);
        let before = ctx.scene.clone();
        assert!(!ctx.update_tweens(Duration::from_secs(1)));
        assert_eq!(ctx.scene, before);
    }
}
