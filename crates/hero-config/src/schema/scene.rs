//! Scene composition types.

use serde::{Deserialize, Serialize};

/// Which hero scene to build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ScenePreset {
    /// Lit gradient sphere with a point light; animates immediately.
    Gradient,
    /// Textured sphere over a spotlit video plane; waits for its texture.
    #[default]
    Textured,
}

/// Scene settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SceneConfig {
    pub preset: ScenePreset,
}
