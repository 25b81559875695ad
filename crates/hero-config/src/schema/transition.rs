//! Enter-button zoom transition settings.

use serde::{Deserialize, Serialize};

/// Zoom transition played before navigating away.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Tween duration in milliseconds (valid range: 1-60000).
    pub duration_ms: u32,
    /// Uniform sphere scale at the end of the tween (must be > 0).
    pub target_scale: f64,
    /// Distance the camera moves back along +Z during the tween.
    pub camera_pullback: f64,
    /// Page opened when the tween completes. Empty disables navigation.
    pub target_url: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            target_scale: 20.0,
            camera_pullback: 10.0,
            target_url: String::new(),
        }
    }
}
