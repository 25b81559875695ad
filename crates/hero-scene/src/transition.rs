//! Enter-button zoom transition.
//!
//! Grows the sphere and pulls the camera back over a fixed duration, then
//! navigates to the configured page exactly once.

use std::time::Duration;

use hero_config::schema::TransitionConfig;

use crate::easing::{lerp, Easing};
use crate::scene::Scene;
use crate::tween::{Interpolate, TweenEngine, TweenEvent, TweenId};

/// Destination for the post-transition navigation.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Sphere scale and camera depth at one point of the zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFrame {
    pub scale: f32,
    pub camera_z: f32,
}

impl Interpolate for ZoomFrame {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        Self {
            scale: lerp(from.scale, to.scale, t),
            camera_z: lerp(from.camera_z, to.camera_z, t),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSettings {
    pub duration: Duration,
    pub target_scale: f32,
    pub camera_pullback: f32,
    pub easing: Easing,
    /// Page opened on completion. `None` or unusable values skip navigation.
    pub target_url: Option<String>,
}

impl TransitionSettings {
    pub fn from_config(config: &TransitionConfig) -> Self {
        let url = config.target_url.trim();
        Self {
            duration: Duration::from_millis(u64::from(config.duration_ms)),
            target_scale: config.target_scale as f32,
            camera_pullback: config.camera_pullback as f32,
            easing: Easing::CubicInOut,
            target_url: (!url.is_empty()).then(|| url.to_string()),
        }
    }
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self::from_config(&TransitionConfig::default())
    }
}

/// Drives the zoom tween and the one-shot navigation that follows it.
#[derive(Debug)]
pub struct TransitionController {
    settings: TransitionSettings,
    tweens: TweenEngine<ZoomFrame>,
    active: Option<TweenId>,
    navigations: u32,
}

impl TransitionController {
    pub fn new(settings: TransitionSettings) -> Self {
        Self {
            settings,
            tweens: TweenEngine::new(),
            active: None,
            navigations: 0,
        }
    }

    pub fn settings(&self) -> &TransitionSettings {
        &self.settings
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Number of tweens the engine is currently advancing.
    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    /// How many times navigation has fired.
    pub fn navigations(&self) -> u32 {
        self.navigations
    }

    /// Start the zoom from the scene's current sphere scale and camera depth.
    ///
    /// Returns `None` if a zoom is already running.
    pub fn start(&mut self, scene: &Scene, now: Duration) -> Option<TweenId> {
        if self.active.is_some() {
            return None;
        }

        let from = ZoomFrame {
            scale: scene.sphere.transform.scale[0],
            camera_z: scene.camera.position[2],
        };
        let to = ZoomFrame {
            scale: self.settings.target_scale,
            camera_z: from.camera_z + self.settings.camera_pullback,
        };

        let id = self
            .tweens
            .start(from, to, self.settings.duration, self.settings.easing, now);
        self.active = Some(id);
        tracing::info!(
            from_scale = from.scale,
            to_scale = to.scale,
            to_camera_z = to.camera_z,
            duration_ms = self.settings.duration.as_millis() as u64,
            "Zoom transition started"
        );
        Some(id)
    }

    /// Advance the zoom to `now`, writing interpolated values into the scene.
    ///
    /// Returns `true` on the update that completes the zoom.
    pub fn update<N: Navigator + ?Sized>(
        &mut self,
        scene: &mut Scene,
        navigator: &mut N,
        now: Duration,
    ) -> bool {
        let mut completed = false;
        for event in self.tweens.update(now) {
            match event {
                TweenEvent::Updated { value, .. } => {
                    scene.sphere.transform.set_uniform_scale(value.scale);
                    scene.camera.position[2] = value.camera_z;
                }
                TweenEvent::Completed { id } => {
                    if self.active == Some(id) {
                        self.active = None;
                        completed = true;
                    }
                }
            }
        }

        if completed {
            self.navigate(navigator);
        }
        completed
    }

    fn navigate<N: Navigator + ?Sized>(&mut self, navigator: &mut N) {
        match self.settings.target_url.as_deref().and_then(usable_url) {
            Some(url) => {
                tracing::info!(url, "Zoom finished, navigating");
                self.navigations += 1;
                navigator.navigate(url);
            }
            None => {
                tracing::debug!(
                    target_url = ?self.settings.target_url,
                    "Zoom finished without a usable target URL"
                );
            }
        }
    }
}

/// Accept `scheme://rest` with an alphabetic scheme and a non-empty rest.
fn usable_url(url: &str) -> Option<&str> {
    let url = url.trim();
    let (scheme, rest) = url.split_once("://")?;
    let scheme_ok = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    (scheme_ok && !rest.is_empty()).then_some(url)
}

// =============================================================================
// Tests
// =============================================================================
