//! Configuration schema types for Hero.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that reproduce the stock scene.

mod animation;
mod assets;
mod scene;
mod system;
mod transition;
mod window;

pub use animation::*;
pub use assets::*;
pub use scene::*;
pub use system::*;
pub use transition::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Hero.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HeroConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub animation: AnimationConfig,
    pub transition: TransitionConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
