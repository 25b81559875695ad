//! GPU textures and the handle registry that backs scene texture uniforms.

use std::collections::HashMap;
use std::time::Duration;

use hero_scene::TextureHandle;

use crate::assets::ImageData;
use crate::frames::{FramePlayer, FrameSequence};

/// Uploaded RGBA8 texture with its default view.
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl GpuTexture {
    /// Create an sRGB texture and upload `rgba` (tightly packed, 4 bytes per pixel).
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let tex = Self {
            texture,
            view,
            width,
            height,
        };
        tex.write(queue, rgba);
        tex
    }

    /// Overwrite the full texture contents. Short buffers are ignored.
    pub fn write(&self, queue: &wgpu::Queue, rgba: &[u8]) {
        let expected = (self.width * self.height * 4) as usize;
        if rgba.len() < expected {
            tracing::warn!(
                got = rgba.len(),
                expected,
                "Texture upload skipped: buffer too small"
            );
            return;
        }
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &rgba[..expected],
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
    }
}

/// Bind group layout for a `texture_2d<f32>` at binding 0 and its sampler at 1.
pub fn texture_bind_group_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// Linear, clamp-to-edge sampler used for every scene texture.
pub fn create_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("scene sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

pub fn create_texture_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    texture: &GpuTexture,
    sampler: &wgpu::Sampler,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&texture.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

// ---------------------------------------------------------------------------
// TextureRegistry
// ---------------------------------------------------------------------------

struct AnimatedSource {
    frames: FrameSequence,
    player: FramePlayer,
}

struct TextureSlot {
    texture: GpuTexture,
    animation: Option<AnimatedSource>,
}

/// Owns every uploaded texture and hands out [`TextureHandle`]s for them.
///
/// [`Self::FALLBACK`] resolves to a 1×1 opaque grey texture, used wherever
/// a material's texture uniform is unset or points at an unknown handle.
pub struct TextureRegistry {
    fallback: GpuTexture,
    slots: HashMap<TextureHandle, TextureSlot>,
    next: u32,
}

impl TextureRegistry {
    pub const FALLBACK: TextureHandle = TextureHandle(0);

    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let grey = ImageData::fallback();
        let fallback = GpuTexture::from_rgba(
            device,
            queue,
            "fallback texture",
            grey.width,
            grey.height,
            &grey.rgba,
        );
        Self {
            fallback,
            slots: HashMap::new(),
            next: 1,
        }
    }

    /// Upload a still image.
    pub fn insert_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        image: &ImageData,
    ) -> TextureHandle {
        let texture =
            GpuTexture::from_rgba(device, queue, label, image.width, image.height, &image.rgba);
        self.insert(texture, None)
    }

    /// Upload the first frame of a sequence; later frames stream in via
    /// [`Self::advance`].
    pub fn insert_frames(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        frames: FrameSequence,
    ) -> TextureHandle {
        let texture = GpuTexture::from_rgba(
            device,
            queue,
            label,
            frames.width,
            frames.height,
            frames.frame(0).map(|f| f.rgba.as_slice()).unwrap_or(&[]),
        );
        let animation = (frames.len() > 1).then(|| AnimatedSource {
            player: FramePlayer::new(frames.delays()),
            frames,
        });
        self.insert(texture, animation)
    }

    fn insert(&mut self, texture: GpuTexture, animation: Option<AnimatedSource>) -> TextureHandle {
        let handle = TextureHandle(self.next);
        self.next += 1;
        self.slots.insert(handle, TextureSlot { texture, animation });
        tracing::debug!(handle = handle.0, "Texture registered");
        handle
    }

    /// Resolve a handle, falling back to the grey texture.
    pub fn get(&self, handle: Option<TextureHandle>) -> &GpuTexture {
        handle
            .and_then(|h| self.slots.get(&h))
            .map(|slot| &slot.texture)
            .unwrap_or(&self.fallback)
    }

    /// Resolve a handle to the handle actually bound (after fallback).
    pub fn resolve(&self, handle: Option<TextureHandle>) -> TextureHandle {
        match handle {
            Some(h) if self.slots.contains_key(&h) => h,
            _ => Self::FALLBACK,
        }
    }

    /// Advance every animated texture by `dt`, uploading frames that changed.
    pub fn advance(&mut self, queue: &wgpu::Queue, dt: Duration) {
        for slot in self.slots.values_mut() {
            let Some(anim) = slot.animation.as_mut() else {
                continue;
            };
            if let Some(index) = anim.player.advance(dt) {
                if let Some(frame) = anim.frames.frame(index) {
                    slot.texture.write(queue, &frame.rgba);
                }
            }
        }
    }

    /// Number of registered textures, not counting the fallback.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
