//! Scene composition for the two hero presets.

use hero_config::schema::ScenePreset;

use crate::error::SceneError;
use crate::node::{
    Geometry, MaterialKind, Mesh, PerspectiveCamera, PointLight, ShaderMaterial, Transform,
};
use crate::uniforms::{self, TextureHandle, UniformSet, UniformValue};

// =============================================================================
// CONSTANTS
// =============================================================================

const CAMERA_FOV_DEGREES: f32 = 75.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;

/// Point light shared by the gradient material uniform and the scene light.
const LIGHT_POSITION: [f32; 3] = [2.0, 2.0, 3.0];

/// Background plane edge length, large enough to fill the view at z = -5.
const BACKGROUND_SIZE: f32 = 40.0;
const BACKGROUND_Z: f32 = -5.0;

/// Spotlight starts in the middle of the background.
const SPOTLIGHT_START: [f32; 2] = [0.5, 0.5];

// =============================================================================
// SCENE
// =============================================================================

/// Everything the renderer draws in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub preset: ScenePreset,
    pub camera: PerspectiveCamera,
    pub sphere: Mesh,
    pub background: Option<Mesh>,
    pub light: Option<PointLight>,
}

impl Scene {
    /// Current value of the sphere's `time` uniform.
    pub fn time(&self) -> f32 {
        self.sphere
            .material
            .uniforms
            .float(uniforms::TIME)
            .unwrap_or(0.0)
    }

    /// Advance the sphere's `time` uniform by `step` and return the value
    /// now stored. A material without a float `time` stays where it was.
    pub fn advance_time(&mut self, step: f32) -> f32 {
        let time = self.time() + step;
        match self
            .sphere
            .material
            .uniforms
            .set(uniforms::TIME, UniformValue::Float(time))
        {
            Ok(()) => time,
            Err(e) => {
                tracing::warn!(error = %e, "Sphere time not advanced");
                self.time()
            }
        }
    }

    /// Spotlight centre on the background plane, in UV space.
    pub fn spotlight(&self) -> Option<[f32; 2]> {
        self.background
            .as_ref()?
            .material
            .uniforms
            .vec2(uniforms::LIGHT_POSITION)
    }

    /// Move the background spotlight. Fails when the preset has no plane.
    pub fn set_spotlight(&mut self, uv: [f32; 2]) -> Result<(), SceneError> {
        let background = self.background.as_mut().ok_or(SceneError::NoBackground)?;
        background
            .material
            .uniforms
            .set(uniforms::LIGHT_POSITION, UniformValue::Vec2(uv))
    }

    /// Bind a loaded image to the sphere's texture slot.
    pub fn set_sphere_texture(&mut self, handle: TextureHandle) -> Result<(), SceneError> {
        self.sphere
            .material
            .uniforms
            .set(uniforms::SPHERE_TEXTURE, UniformValue::Texture(Some(handle)))
    }

    /// Bind the animated frame texture to the background plane.
    pub fn set_video_texture(&mut self, handle: TextureHandle) -> Result<(), SceneError> {
        let background = self.background.as_mut().ok_or(SceneError::NoBackground)?;
        background
            .material
            .uniforms
            .set(uniforms::VIDEO_TEXTURE, UniformValue::Texture(Some(handle)))
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// One-time construction of camera, sphere, background plane, and light.
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    preset: ScenePreset,
    width: u32,
    height: u32,
}

impl SceneBuilder {
    pub fn new(preset: ScenePreset) -> Self {
        Self {
            preset,
            width: 1,
            height: 1,
        }
    }

    /// Initial viewport, used for the camera aspect ratio.
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn build(self) -> Scene {
        let mut camera = PerspectiveCamera::new(CAMERA_FOV_DEGREES, 1.0, CAMERA_NEAR, CAMERA_FAR);
        camera.set_viewport(self.width, self.height);

        match self.preset {
            ScenePreset::Gradient => {
                camera.position = [0.0, 0.0, 2.0];
                Scene {
                    preset: self.preset,
                    camera,
                    sphere: gradient_sphere(),
                    background: None,
                    light: Some(PointLight {
                        color: [1.0, 1.0, 1.0],
                        intensity: 1.0,
                        position: LIGHT_POSITION,
                    }),
                }
            }
            ScenePreset::Textured => {
                camera.position = [0.0, 0.0, 2.5];
                Scene {
                    preset: self.preset,
                    camera,
                    sphere: textured_sphere(),
                    background: Some(spotlight_plane()),
                    light: None,
                }
            }
        }
    }
}

fn gradient_sphere() -> Mesh {
    Mesh {
        transform: Transform::IDENTITY,
        geometry: Geometry::Sphere {
            radius: 1.0,
            width_segments: 64,
            height_segments: 64,
        },
        material: ShaderMaterial {
            kind: MaterialKind::GradientSphere,
            uniforms: UniformSet::new()
                .with(uniforms::TIME, UniformValue::Float(0.0))
                .with(uniforms::LIGHT_POSITION, UniformValue::Vec3(LIGHT_POSITION)),
            transparent: false,
        },
    }
}

fn textured_sphere() -> Mesh {
    Mesh {
        transform: Transform::IDENTITY,
        geometry: Geometry::Sphere {
            radius: 1.0,
            width_segments: 128,
            height_segments: 128,
        },
        material: ShaderMaterial {
            kind: MaterialKind::TexturedSphere,
            uniforms: UniformSet::new()
                .with(uniforms::TIME, UniformValue::Float(0.0))
                .with(uniforms::SPHERE_TEXTURE, UniformValue::Texture(None)),
            transparent: false,
        },
    }
}

fn spotlight_plane() -> Mesh {
    Mesh {
        transform: Transform::at([0.0, 0.0, BACKGROUND_Z]),
        geometry: Geometry::Plane {
            width: BACKGROUND_SIZE,
            height: BACKGROUND_SIZE,
        },
        material: ShaderMaterial {
            kind: MaterialKind::SpotlightPlane,
            uniforms: UniformSet::new()
                .with(uniforms::VIDEO_TEXTURE, UniformValue::Texture(None))
                .with(uniforms::LIGHT_POSITION, UniformValue::Vec2(SPOTLIGHT_START)),
            transparent: true,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textured_preset_composition() {
        let scene = SceneBuilder::new(ScenePreset::Textured)
            .with_viewport(1600, 900)
            .build();

        assert_eq!(scene.camera.position, [0.0, 0.0, 2.5]);
        assert!((scene.camera.fov_y_degrees - 75.0).abs() < f32::EPSILON);
        assert!((scene.camera.near - 0.1).abs() < f32::EPSILON);
        assert!((scene.camera.far - 1000.0).abs() < f32::EPSILON);
        assert!((scene.camera.aspect - 1600.0 / 900.0).abs() < 1e-6);

        assert_eq!(scene.sphere.material.kind, MaterialKind::TexturedSphere);
        assert_eq!(
            scene.sphere.geometry,
            Geometry::Sphere {
                radius: 1.0,
                width_segments: 128,
                height_segments: 128,
            }
        );

        let bg = scene.background.as_ref().unwrap();
        assert_eq!(bg.transform.position, [0.0, 0.0, -5.0]);
        assert_eq!(
            bg.geometry,
            Geometry::Plane {
                width: 40.0,
                height: 40.0
            }
        );
        assert!(bg.material.transparent);
        assert_eq!(scene.spotlight(), Some([0.5, 0.5]));
        assert!(scene.light.is_none());
    }

    #[test]
    fn gradient_preset_composition() {
        let scene = SceneBuilder::new(ScenePreset::Gradient).build();

        assert_eq!(scene.camera.position, [0.0, 0.0, 2.0]);
        assert_eq!(scene.sphere.material.kind, MaterialKind::GradientSphere);
        assert_eq!(
            scene.sphere.material.uniforms.vec3(uniforms::LIGHT_POSITION),
            Some([2.0, 2.0, 3.0])
        );
        assert!(scene.background.is_none());

        let light = scene.light.unwrap();
        assert_eq!(light.position, [2.0, 2.0, 3.0]);
        assert_eq!(light.color, [1.0, 1.0, 1.0]);
        assert!((light.intensity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn sphere_starts_unscaled_at_time_zero() {
        let scene = SceneBuilder::new(ScenePreset::Textured).build();
        assert_eq!(scene.sphere.transform, Transform::IDENTITY);
        assert!((scene.time() - 0.0).abs() < f32::EPSILON);
        assert_eq!(
            scene.sphere.material.uniforms.texture(uniforms::SPHERE_TEXTURE),
            None
        );
    }

    #[test]
    fn advance_time_accumulates() {
        let mut scene = SceneBuilder::new(ScenePreset::Gradient).build();
        scene.advance_time(0.25);
        let t = scene.advance_time(0.25);
        assert!((t - 0.5).abs() < 1e-6);
        assert!((scene.time() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn advance_time_without_time_uniform_stays_put() {
        let mut scene = SceneBuilder::new(ScenePreset::Textured).build();
        scene.sphere.material.uniforms = UniformSet::new();
        assert_eq!(scene.advance_time(0.01), 0.0);
        assert_eq!(scene.time(), 0.0);
    }

    #[test]
    fn spotlight_requires_background() {
        let mut scene = SceneBuilder::new(ScenePreset::Gradient).build();
        assert_eq!(scene.spotlight(), None);
        assert_eq!(
            scene.set_spotlight([0.1, 0.2]),
            Err(SceneError::NoBackground)
        );
    }

    #[test]
    fn texture_handles_bind_to_their_slots() {
        let mut scene = SceneBuilder::new(ScenePreset::Textured).build();
        scene.set_sphere_texture(TextureHandle(1)).unwrap();
        scene.set_video_texture(TextureHandle(2)).unwrap();
        assert_eq!(
            scene.sphere.material.uniforms.texture(uniforms::SPHERE_TEXTURE),
            Some(TextureHandle(1))
        );
        let bg = scene.background.as_ref().unwrap();
        assert_eq!(
            bg.material.uniforms.texture(uniforms::VIDEO_TEXTURE),
            Some(TextureHandle(2))
        );
    }

    #[test]
    fn gradient_sphere_has_no_texture_slot() {
        let mut scene = SceneBuilder::new(ScenePreset::Gradient).build();
        assert_eq!(
            scene.set_sphere_texture(TextureHandle(1)),
            Err(SceneError::UnknownUniform(uniforms::SPHERE_TEXTURE.into()))
        );
    }
}
