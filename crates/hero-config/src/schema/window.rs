//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 200-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 200-4320).
    pub height: u32,
    /// Let the desktop show through where the scene is transparent.
    pub transparent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hero".into(),
            width: 1280,
            height: 800,
            transparent: true,
        }
    }
}
