//! Shader uniform sets.
//!
//! A [`UniformSet`] is the CPU-side mapping from uniform name to typed value
//! owned by one material. The renderer reads it every pass and packs the
//! values into the matching WGSL uniform block.

use std::collections::BTreeMap;

use crate::error::SceneError;

/// Advancing animation clock, in shader time units.
pub const TIME: &str = "time";
/// Image wrapped around the textured sphere.
pub const SPHERE_TEXTURE: &str = "sphereTexture";
/// Point light (gradient sphere, view space) or spotlight centre (background, UV space).
pub const LIGHT_POSITION: &str = "lightPosition";
/// Animated frames shown through the background spotlight.
pub const VIDEO_TEXTURE: &str = "videoTexture";

/// Opaque reference to a texture owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(pub u32);

/// Type tag of a uniform value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformKind {
    Float,
    Vec2,
    Vec3,
    Texture,
}

/// A typed uniform value. Texture slots start empty until an asset loads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Texture(Option<TextureHandle>),
}

impl UniformValue {
    pub fn kind(&self) -> UniformKind {
        match self {
            UniformValue::Float(_) => UniformKind::Float,
            UniformValue::Vec2(_) => UniformKind::Vec2,
            UniformValue::Vec3(_) => UniformKind::Vec3,
            UniformValue::Texture(_) => UniformKind::Texture,
        }
    }
}

/// Named uniforms declared by a material.
///
/// The set of names and their kinds is fixed at declaration; later writes
/// may only replace values with ones of the same kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformSet {
    values: BTreeMap<String, UniformValue>,
}

impl UniformSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a uniform with its initial value (builder style).
    pub fn with(mut self, name: &str, value: UniformValue) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overwrite a declared uniform. Last write wins.
    pub fn set(&mut self, name: &str, value: UniformValue) -> Result<(), SceneError> {
        let slot = self
            .values
            .get_mut(name)
            .ok_or_else(|| SceneError::UnknownUniform(name.to_string()))?;
        if slot.kind() != value.kind() {
            return Err(SceneError::UniformKindMismatch {
                name: name.to_string(),
                expected: slot.kind(),
                actual: value.kind(),
            });
        }
        *slot = value;
        Ok(())
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name)? {
            UniformValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn vec2(&self, name: &str) -> Option<[f32; 2]> {
        match self.get(name)? {
            UniformValue::Vec2(v) => Some(*v),
            _ => None,
        }
    }

    pub fn vec3(&self, name: &str) -> Option<[f32; 3]> {
        match self.get(name)? {
            UniformValue::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    /// Handle bound to a texture uniform, `None` while unloaded or undeclared.
    pub fn texture(&self, name: &str) -> Option<TextureHandle> {
        match self.get(name)? {
            UniformValue::Texture(handle) => *handle,
            _ => None,
        }
    }
}
