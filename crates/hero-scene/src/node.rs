//! Scene graph nodes: transforms, camera, meshes, and lights.

use crate::math::{self, Mat4};
use crate::uniforms::UniformSet;

/// Position and per-axis scale of a node. Rotation is never used by the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: [f32; 3],
    pub scale: [f32; 3],
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: [0.0, 0.0, 0.0],
        scale: [1.0, 1.0, 1.0],
    };

    pub fn at(position: [f32; 3]) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Set the same scale on all three axes.
    pub fn set_uniform_scale(&mut self, s: f32) {
        self.scale = [s, s, s];
    }

    /// Model matrix: translate × scale.
    pub fn matrix(&self) -> Mat4 {
        let [x, y, z] = self.position;
        math::mul(&math::translate(x, y, z), &math::scale(self.scale))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Perspective camera looking down -Z from `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect,
            near,
            far,
            position: [0.0, 0.0, 0.0],
        }
    }

    /// Recompute the aspect ratio from a viewport size. Zero height is ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn projection(&self) -> Mat4 {
        math::perspective(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// World-to-view matrix (inverse of the camera translation).
    pub fn view(&self) -> Mat4 {
        let [x, y, z] = self.position;
        math::translate(-x, -y, -z)
    }
}

/// Mesh shape. Tessellation happens in the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
    },
}

/// Which shader pair a material runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Three-term distortion, colour straight from `sphereTexture`.
    TexturedSphere,
    /// Two-term distortion, UV gradient modulated by `lightPosition`.
    GradientSphere,
    /// Flat plane showing `videoTexture` inside a spotlight at `lightPosition`.
    SpotlightPlane,
}

/// A shader pair plus the uniforms it declares.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderMaterial {
    pub kind: MaterialKind,
    pub uniforms: UniformSet,
    /// Alpha-blended against what is already drawn.
    pub transparent: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub transform: Transform,
    pub geometry: Geometry,
    pub material: ShaderMaterial,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: [f32; 3],
}
