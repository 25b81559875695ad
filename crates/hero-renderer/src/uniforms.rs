//! Scene → GPU uniform conversion.
//!
//! Builds the per-draw uniform blocks from a [`Scene`]. Kept free of wgpu
//! handles so the math is testable without a device.

use hero_scene::math::{self, Mat4};
use hero_scene::uniforms as names;
use hero_scene::{Mesh, PerspectiveCamera, Scene};

use crate::background::BackgroundUniforms;
use crate::sphere::SphereUniforms;

fn model_view(camera: &PerspectiveCamera, mesh: &Mesh) -> Mat4 {
    math::mul(&camera.view(), &mesh.transform.matrix())
}

/// Sphere block: MVP, model-view, `time`, and `lightPosition` when declared.
pub fn sphere_uniforms(scene: &Scene) -> SphereUniforms {
    let mv = model_view(&scene.camera, &scene.sphere);
    let mvp = math::mul(&scene.camera.projection(), &mv);
    let light = scene
        .sphere
        .material
        .uniforms
        .vec3(names::LIGHT_POSITION)
        .unwrap_or([0.0; 3]);

    SphereUniforms {
        mvp,
        model_view: mv,
        light_position: [light[0], light[1], light[2], 1.0],
        time: scene.time(),
        _padding: [0.0; 3],
    }
}

/// Background block, or `None` when the preset has no plane.
pub fn background_uniforms(scene: &Scene) -> Option<BackgroundUniforms> {
    let plane = scene.background.as_ref()?;
    let mv = model_view(&scene.camera, plane);
    let mvp = math::mul(&scene.camera.projection(), &mv);
    let light = plane
        .material
        .uniforms
        .vec2(names::LIGHT_POSITION)
        .unwrap_or([0.5, 0.5]);

    Some(BackgroundUniforms {
        mvp,
        light_position: light,
        _padding: [0.0; 2],
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hero_scene::{SceneBuilder, ScenePreset};

    fn project(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
        let c = math::transform_point(m, p);
        [c[0] / c[3], c[1] / c[3], c[2] / c[3]]
    }

    #[test]
    fn sphere_centre_projects_to_screen_centre() {
        let scene = SceneBuilder::new(ScenePreset::Textured)
            .with_viewport(1280, 720)
            .build();
        let u = sphere_uniforms(&scene);
        let ndc = project(&u.mvp, [0.0, 0.0, 0.0]);
        assert!(ndc[0].abs() < 1e-5);
        assert!(ndc[1].abs() < 1e-5);
        assert!(ndc[2] > 0.0 && ndc[2] < 1.0);
    }

    #[test]
    fn model_view_places_sphere_in_front_of_camera() {
        let scene = SceneBuilder::new(ScenePreset::Textured).build();
        let u = sphere_uniforms(&scene);
        // Camera at z = 2.5 looking down -Z.
        assert!((u.model_view[14] + 2.5).abs() < 1e-6);
    }

    #[test]
    fn sphere_scale_reaches_mvp() {
        let mut scene = SceneBuilder::new(ScenePreset::Textured).build();
        let before = sphere_uniforms(&scene);
        scene.sphere.transform.set_uniform_scale(20.0);
        let after = sphere_uniforms(&scene);
        assert!((after.model_view[0] - 20.0 * before.model_view[0]).abs() < 1e-4);
    }

    #[test]
    fn time_is_copied() {
        let mut scene = SceneBuilder::new(ScenePreset::Textured).build();
        scene.advance_time(0.42);
        assert!((sphere_uniforms(&scene).time - 0.42).abs() < 1e-6);
    }

    #[test]
    fn gradient_light_position_is_copied() {
        let scene = SceneBuilder::new(ScenePreset::Gradient).build();
        let u = sphere_uniforms(&scene);
        assert_eq!(u.light_position, [2.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn background_carries_spotlight() {
        let mut scene = SceneBuilder::new(ScenePreset::Textured).build();
        scene.set_spotlight([0.2, 0.9]).unwrap();
        let u = background_uniforms(&scene).unwrap();
        assert_eq!(u.light_position, [0.2, 0.9]);
        // Plane sits behind the sphere.
        let plane_ndc = project(&u.mvp, [0.0, 0.0, 0.0]);
        let sphere_ndc = project(&sphere_uniforms(&scene).mvp, [0.0, 0.0, 0.0]);
        assert!(plane_ndc[2] > sphere_ndc[2]);
    }

    #[test]
    fn gradient_has_no_background_uniforms() {
        let scene = SceneBuilder::new(ScenePreset::Gradient).build();
        assert!(background_uniforms(&scene).is_none());
    }
}
