//! Internal types and constants for the app state module.

use std::time::Duration;

use hero_common::AssetError;
use hero_renderer::{FrameSequence, ImageData};

/// Results sent from the asset loader thread.
pub(super) enum AssetEvent {
    /// Background frames, already substituted with a grey frame on failure.
    Background(FrameSequence),
    /// The sphere texture or the reason it could not be decoded.
    SphereTexture(Result<ImageData, AssetError>),
}

/// How often to check for decoded assets while the loop is idle.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);
