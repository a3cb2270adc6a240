use std::f32::consts::{PI, TAU};

use crate::{
    error::{MarchingCubesError, Result},
    types::{Point, TRIANGLE_STRIDE, Value},
};

/// Generates an unindexed UV ellipsoid centred on the origin.
///
/// `density` is used for both the number of segments around the Y axis and the
/// number of stacks from pole to pole. Stacks touching a pole are fans of single
/// triangles, so a well-formed ellipsoid has no zero-area triangles. All
/// triangles wind counter-clockwise when seen from outside.
///
/// ```text
/// triangles = density * (2 * density - 2)
/// ```
///
/// Returns [`MarchingCubesError::InvalidDensity`] when `density < 3`.
pub fn generate_sphere(
    radius_x: Value,
    radius_y: Value,
    radius_z: Value,
    density: usize,
) -> Result<Vec<Value>> {
    if density < 3 {
        return Err(MarchingCubesError::InvalidDensity { density });
    }
    let segments = density;
    let stacks = density;

    let vertex = |i: usize, j: usize| {
        let theta = i as Value / segments as Value * TAU;
        let phi = j as Value / stacks as Value * PI;
        Point::new(
            radius_x * theta.cos() * phi.sin(),
            radius_y * phi.cos(),
            radius_z * theta.sin() * phi.sin(),
        )
    };

    let mut vertices = Vec::with_capacity(segments * (2 * stacks - 2) * TRIANGLE_STRIDE);
    let mut push = |tri: [Point; 3]| {
        for p in tri {
            vertices.extend_from_slice(p.coords.as_slice());
        }
    };

    for i in 0..segments {
        for j in 0..stacks {
            let a = vertex(i, j);
            let b = vertex(i + 1, j);
            let c = vertex(i + 1, j + 1);
            let d = vertex(i, j + 1);

            if j > 0 {
                push([a, b, c]);
            }
            if j < stacks - 1 {
                push([a, c, d]);
            }
        }
    }

    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{SurfaceMesh, find_degenerate_mask, generate_flat_normals};

    #[test]
    fn test_triangle_count() {
        for density in [3, 4, 10, 17] {
            let vertices = generate_sphere(1., 1., 1., density).unwrap();
            assert_eq!(vertices.len() / TRIANGLE_STRIDE, density * (2 * density - 2));
        }
    }

    #[test]
    fn test_rejects_low_density() {
        assert_eq!(
            generate_sphere(1., 1., 1., 2),
            Err(MarchingCubesError::InvalidDensity { density: 2 })
        );
    }

    #[test]
    fn test_no_degenerate_triangles() {
        let vertices = generate_sphere(2., 1., 0.5, 24).unwrap();
        let normals = generate_flat_normals(&vertices).unwrap();
        let mask = find_degenerate_mask(&vertices, &normals).unwrap();
        assert!(mask.iter().all(|&m| !m));
    }

    #[test]
    fn test_vertices_lie_on_ellipsoid() {
        let (rx, ry, rz) = (3., 2., 1.5);
        let vertices = generate_sphere(rx, ry, rz, 12).unwrap();
        for p in vertices.chunks_exact(3) {
            let r = (p[0] / rx).powi(2) + (p[1] / ry).powi(2) + (p[2] / rz).powi(2);
            assert!((r - 1.).abs() < 1e-4, "{p:?}");
        }
    }

    #[test]
    fn test_normals_face_outwards() {
        let mesh = SurfaceMesh::build(generate_sphere(1., 1.5, 2., 16).unwrap()).unwrap();
        for (tri, n) in mesh
            .vertices()
            .chunks_exact(TRIANGLE_STRIDE)
            .zip(mesh.normals().chunks_exact(TRIANGLE_STRIDE))
        {
            let centroid: Vec<Value> = (0..3).map(|k| (tri[k] + tri[3 + k] + tri[6 + k]) / 3.).collect();
            let dot: Value = (0..3).map(|k| centroid[k] * n[k]).sum();
            assert!(dot > 0., "inward triangle {tri:?}");
        }
    }
}
