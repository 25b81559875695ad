//! Decoding image assets from disk into RGBA8 buffers.
//!
//! Pure CPU work: safe to call from a background thread, the results are
//! uploaded to the GPU later on the render thread.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use hero_common::AssetError;
use image::AnimationDecoder;

use crate::frames::{Frame, FrameSequence};

/// A decoded still image, tightly packed RGBA8.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    /// 1×1 opaque mid-grey, shown when a texture is missing.
    pub fn fallback() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![128, 128, 128, 255],
        }
    }
}

fn decode_error(path: &Path, reason: impl ToString) -> AssetError {
    AssetError::Decode {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Load any supported still image (PNG, JPEG, first GIF frame).
pub fn load_image(path: &Path) -> Result<ImageData, AssetError> {
    if !path.is_file() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|e| decode_error(path, e))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::Empty(path.to_path_buf()));
    }
    tracing::debug!(path = %path.display(), width, height, "Image decoded");
    Ok(ImageData {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Load an animated GIF as a frame sequence. Other formats load as one frame.
pub fn load_frames(path: &Path) -> Result<FrameSequence, AssetError> {
    if !path.is_file() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }

    let is_gif = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gif"));
    if !is_gif {
        let still = load_image(path)?;
        return Ok(FrameSequence::still(still.width, still.height, still.rgba));
    }

    let file = File::open(path).map_err(|e| decode_error(path, e))?;
    let decoder = image::codecs::gif::GifDecoder::new(BufReader::new(file))
        .map_err(|e| decode_error(path, e))?;
    let decoded = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| decode_error(path, e))?;

    let mut size = None;
    let mut frames = Vec::with_capacity(decoded.len());
    for frame in decoded {
        let (numer, denom) = frame.delay().numer_denom_ms();
        let delay = Duration::from_micros(u64::from(numer) * 1000 / u64::from(denom.max(1)));
        let buffer = frame.into_buffer();
        let dims = buffer.dimensions();
        match size {
            None => size = Some(dims),
            Some(first) if first != dims => {
                return Err(decode_error(path, "frames differ in size"));
            }
            Some(_) => {}
        }
        frames.push(Frame {
            rgba: buffer.into_raw(),
            delay,
        });
    }

    let Some((width, height)) = size else {
        return Err(AssetError::Empty(path.to_path_buf()));
    };
    tracing::debug!(
        path = %path.display(),
        width,
        height,
        frames = frames.len(),
        "Frame sequence decoded"
    );
    Ok(FrameSequence::new(width, height, frames))
}

/// Load background frames, substituting a grey still on failure so the
/// spotlight still has something to reveal.
pub fn load_background(path: &Path) -> FrameSequence {
    match load_frames(path) {
        Ok(frames) => frames,
        Err(e) => {
            tracing::warn!(error = %e, "Background frames unavailable, using fallback");
            let grey = ImageData::fallback();
            FrameSequence::still(grey.width, grey.height, grey.rgba)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Delay, Rgba, RgbaImage};

    fn write_gif(path: &Path, colors: &[[u8; 4]], delay_ms: u32) {
        let file = File::create(path).unwrap();
        let mut encoder = GifEncoder::new(file);
        let frames = colors.iter().map(|c| {
            image::Frame::from_parts(
                RgbaImage::from_pixel(4, 3, Rgba(*c)),
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            )
        });
        encoder.encode_frames(frames).unwrap();
    }

    #[test]
    fn load_png_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sphere.png");
        RgbaImage::from_pixel(2, 3, Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!((img.width, img.height), (2, 3));
        assert_eq!(img.rgba.len(), 2 * 3 * 4);
        assert_eq!(&img.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn missing_image_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");
        assert_eq!(load_image(&path), Err(AssetError::NotFound(path)));
    }

    #[test]
    fn corrupt_image_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_image(&path),
            Err(AssetError::Decode { .. })
        ));
    }

    #[test]
    fn gif_frames_and_delays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kah.gif");
        write_gif(&path, &[[255, 0, 0, 255], [0, 0, 255, 255]], 50);

        let seq = load_frames(&path).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!((seq.width, seq.height), (4, 3));
        assert_eq!(seq.delays(), vec![Duration::from_millis(50); 2]);
        let first = seq.frame(0).unwrap();
        assert_eq!(first.rgba.len(), 4 * 3 * 4);
        assert!(first.rgba[0] > 200 && first.rgba[2] < 50);
    }

    #[test]
    fn png_loads_as_single_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("still.png");
        RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();
        let seq = load_frames(&path).unwrap();
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn missing_background_falls_back_to_grey() {
        let dir = tempfile::tempdir().unwrap();
        let seq = load_background(&dir.path().join("missing.gif"));
        assert_eq!(seq.len(), 1);
        assert_eq!((seq.width, seq.height), (1, 1));
        assert_eq!(seq.frame(0).unwrap().rgba, vec![128, 128, 128, 255]);
    }
}
