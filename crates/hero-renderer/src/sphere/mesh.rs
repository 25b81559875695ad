//! Sphere mesh generation.
//!
//! Indexed UV sphere with the same vertex order, winding, and UV layout as
//! the classic `SphereGeometry`: rows run from the north pole (v = 1) to the
//! south pole (v = 0), columns wrap once around Y starting on -X.

use std::f32::consts::PI;

use hero_scene::Geometry;

use super::types::SphereVertex;

#[derive(Debug, Clone)]
pub struct SphereMesh {
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Tessellate a scene geometry. Returns `None` for non-sphere shapes.
    pub fn from_geometry(geometry: &Geometry) -> Option<Self> {
        match *geometry {
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => Some(generate_sphere_mesh(radius, width_segments, height_segments)),
            Geometry::Plane { .. } => None,
        }
    }
}

/// Generate a UV sphere with `(w + 1) × (h + 1)` vertices.
///
/// Pole rows skip their degenerate triangle, so the index count is
/// `6·w·h − 6·w`.
pub fn generate_sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> SphereMesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);

    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        // Centre the pole UVs on their segment.
        let u_offset = if iy == 0 {
            0.5 / w as f32
        } else if iy == h {
            -0.5 / w as f32
        } else {
            0.0
        };

        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let phi = u * 2.0 * PI;
            let theta = v * PI;

            let normal = [
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            ];
            vertices.push(SphereVertex {
                position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                normal,
                uv: [u + u_offset, 1.0 - v],
            });
        }
    }

    let row = w + 1;
    let mut indices = Vec::with_capacity((6 * w * h) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    SphereMesh { vertices, indices }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_and_index_counts() {
        let mesh = generate_sphere_mesh(1.0, 8, 4);
        assert_eq!(mesh.vertices.len(), 9 * 5);
        assert_eq!(mesh.indices.len(), (6 * 8 * 4 - 6 * 8) as usize);
    }

    #[test]
    fn preset_resolutions() {
        let hi = generate_sphere_mesh(1.0, 128, 128);
        assert_eq!(hi.vertices.len(), 129 * 129);
        let lo = generate_sphere_mesh(1.0, 64, 64);
        assert_eq!(lo.vertices.len(), 65 * 65);
    }

    #[test]
    fn first_row_is_north_pole() {
        let mesh = generate_sphere_mesh(2.0, 8, 4);
        let v = &mesh.vertices[0];
        assert!(v.position[0].abs() < 1e-6);
        assert!((v.position[1] - 2.0).abs() < 1e-6);
        assert!((v.uv[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn last_row_is_south_pole() {
        let mesh = generate_sphere_mesh(1.0, 8, 4);
        let v = mesh.vertices.last().unwrap();
        assert!((v.position[1] + 1.0).abs() < 1e-5);
        assert!(v.uv[1].abs() < 1e-6);
    }

    #[test]
    fn equator_starts_on_negative_x() {
        let mesh = generate_sphere_mesh(1.0, 8, 4);
        // Row 2 of 4 is the equator.
        let v = &mesh.vertices[2 * 9];
        assert!((v.position[0] + 1.0).abs() < 1e-5);
        assert!(v.position[2].abs() < 1e-5);
    }

    #[test]
    fn positions_lie_on_radius_and_normals_are_unit() {
        let mesh = generate_sphere_mesh(3.0, 16, 8);
        for v in &mesh.vertices {
            let [x, y, z] = v.position;
            assert!(((x * x + y * y + z * z).sqrt() - 3.0).abs() < 1e-4);
            let [nx, ny, nz] = v.normal;
            assert!(((nx * nx + ny * ny + nz * nz).sqrt() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn indices_in_bounds() {
        let mesh = generate_sphere_mesh(1.0, 12, 6);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn minimum_segments_clamped() {
        let mesh = generate_sphere_mesh(1.0, 1, 1);
        assert_eq!(mesh.vertices.len(), 4 * 3);
    }

    #[test]
    fn from_geometry_rejects_plane() {
        let plane = Geometry::Plane {
            width: 1.0,
            height: 1.0,
        };
        assert!(SphereMesh::from_geometry(&plane).is_none());
        let sphere = Geometry::Sphere {
            radius: 1.0,
            width_segments: 4,
            height_segments: 2,
        };
        assert_eq!(
            SphereMesh::from_geometry(&sphere).unwrap().vertices.len(),
            5 * 3
        );
    }
}
