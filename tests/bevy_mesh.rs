//! Upload of filtered surface meshes into Bevy render meshes.

use bevy::prelude::Mesh;
use volume_marching_cubes::{SurfaceMesh, render::to_bevy_mesh, sphere::generate_sphere};

fn sphere_surface() -> SurfaceMesh {
    SurfaceMesh::build(generate_sphere(1., 1., 1., 8).unwrap())
        .unwrap()
        .without_degenerates()
}

#[test]
fn test_sphere_uploads_every_vertex() {
    let surface = sphere_surface();
    let mesh = Mesh::from(&surface);

    assert_eq!(mesh.count_vertices(), surface.triangle_count() * 3);
    assert_eq!(mesh.indices().map(|i| i.len()), Some(surface.triangle_count() * 3));
}

#[test]
fn test_positions_and_normals_keep_vertex_order() {
    let surface = sphere_surface();
    let mesh = to_bevy_mesh(&surface);

    let positions = mesh
        .attribute(Mesh::ATTRIBUTE_POSITION)
        .and_then(|values| values.as_float3())
        .unwrap();
    let normals = mesh
        .attribute(Mesh::ATTRIBUTE_NORMAL)
        .and_then(|values| values.as_float3())
        .unwrap();

    assert_eq!(positions.concat(), surface.vertices());
    assert_eq!(normals.concat(), surface.normals());
}
