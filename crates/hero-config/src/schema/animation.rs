//! Animation loop timing types.

use serde::{Deserialize, Serialize};

/// How the shader `time` uniform advances each tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum TimeMode {
    /// Constant step per frame, independent of frame duration.
    #[default]
    Fixed,
    /// Step scaled by elapsed wall-clock time, normalised to 60 fps.
    Delta,
}

/// Animation loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Time advanced per tick at 60 fps (valid range: 0.0 exclusive - 1.0).
    pub time_step: f64,
    pub time_mode: TimeMode,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.01,
            time_mode: TimeMode::Fixed,
        }
    }
}
