//! Static asset locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Asset paths, relative to `root` unless absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub root: String,
    /// Image wrapped around the textured sphere.
    pub sphere_texture: String,
    /// Animated GIF shown through the background spotlight.
    pub background_video: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: "static".into(),
            sphere_texture: "images/giraffe_texture1.png".into(),
            background_video: "videos/kah.gif".into(),
        }
    }
}

impl AssetsConfig {
    /// Full path of the sphere texture.
    pub fn sphere_texture_path(&self) -> PathBuf {
        self.resolve(&self.sphere_texture)
    }

    /// Full path of the background frame source.
    pub fn background_video_path(&self) -> PathBuf {
        self.resolve(&self.background_video)
    }

    fn resolve(&self, relative: &str) -> PathBuf {
        let path = PathBuf::from(relative);
        if path.is_absolute() {
            path
        } else {
            PathBuf::from(&self.root).join(path)
        }
    }
}
