//! CPU reference implementations of the shader math.
//!
//! These mirror `shaders/*.wgsl` in the renderer constant for constant.
//! They are pure functions of their inputs; the renderer never calls them,
//! but they pin down the displacement and colour formulas under test.

/// Per-term displacement of the textured sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distortion {
    pub d1: f32,
    pub d2: f32,
    pub d3: f32,
}

impl Distortion {
    pub fn sum(&self) -> f32 {
        self.d1 + self.d2 + self.d3
    }
}

/// Three sinusoidal terms at spatial frequencies 5, 10, and 15.
pub fn textured_distortion(p: [f32; 3], time: f32) -> Distortion {
    let [x, y, _] = p;
    Distortion {
        d1: 0.1 * (y * 5.0 + time).sin() * (x * 5.0 + time).sin(),
        d2: 0.05 * (y * 10.0 + time * 1.5).sin() * (x * 10.0 + time).cos(),
        d3: 0.025 * (y * 15.0 + time * 2.0).cos() * (x * 15.0 + time * 1.5).sin(),
    }
}

/// Displaced position and perturbed normal for the textured sphere.
pub fn displace_textured(p: [f32; 3], normal: [f32; 3], time: f32) -> ([f32; 3], [f32; 3]) {
    let d = textured_distortion(p, time);
    let s = d.sum();
    let pos = [p[0] + s, p[1], p[2] + s];
    let n = [normal[0] + d.d1, normal[1] + d.d2, normal[2] + d.d3];
    (pos, n)
}

/// Single-term displacement of the gradient sphere.
pub fn gradient_distortion(p: [f32; 3], time: f32) -> f32 {
    0.2 * (p[1] * 5.0 + time).sin() + 0.2 * (p[0] * 5.0 + time).sin()
}

pub fn displace_gradient(p: [f32; 3], time: f32) -> [f32; 3] {
    let d = gradient_distortion(p, time);
    [p[0] + d, p[1], p[2] + d]
}

/// Lit UV gradient of the gradient sphere, RGBA.
///
/// `view_pos` is the undisplaced vertex in view space, `normal` the
/// object-space normal, `light` the `lightPosition` uniform.
pub fn gradient_color(uv: [f32; 2], normal: [f32; 3], view_pos: [f32; 3], light: [f32; 3]) -> [f32; 4] {
    let light_dir = normalize(sub(light, view_pos));
    let intensity = dot(normalize(normal), light_dir).max(0.0);

    let r = 0.2 + uv[0] * 0.5;
    let g = 0.2 + uv[1] * 0.5;
    let b = 0.6 + 0.8;

    [r * intensity, g * intensity, b * intensity, 1.0]
}

/// Hermite step between `edge0` and `edge1`, as in GLSL/WGSL.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Spotlight weight at `uv`: 1 inside radius 0.02, fading to 0 at 0.1.
pub fn spotlight_effect(uv: [f32; 2], light: [f32; 2]) -> f32 {
    let dx = uv[0] - light[0];
    let dy = uv[1] - light[1];
    let dist = (dx * dx + dy * dy).sqrt();
    1.0 - smoothstep(0.02, 0.1, dist)
}

/// Background pixel: black blended toward the video sample by the spotlight.
pub fn spotlight_color(uv: [f32; 2], light: [f32; 2], video: [f32; 4]) -> [f32; 4] {
    let e = spotlight_effect(uv, light);
    [video[0] * e, video[1] * e, video[2] * e, video[3]]
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = dot(v, v).sqrt();
    if len <= f32::EPSILON {
        return [0.0, 0.0, 0.0];
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

// =============================================================================
// Tests
// =============================================================================
