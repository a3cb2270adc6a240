//! Hand-off of a filtered [`SurfaceMesh`] to Bevy's renderer.

use bevy::{
    asset::RenderAssetUsages,
    mesh::{Indices, PrimitiveTopology},
    prelude::*,
};

use crate::mesh::SurfaceMesh;

/// Builds a Bevy [`Mesh`] from a surface mesh.
///
/// Vertices are not shared, so indices are simply `0..n`. Run
/// [`SurfaceMesh::without_degenerates`] first; NaN normals upload as-is.
pub fn to_bevy_mesh(mesh: &SurfaceMesh) -> Mesh {
    let positions: Vec<[f32; 3]> = mesh
        .vertices()
        .chunks_exact(3)
        .map(|v| [v[0], v[1], v[2]])
        .collect();
    let normals: Vec<[f32; 3]> = mesh
        .normals()
        .chunks_exact(3)
        .map(|n| [n[0], n[1], n[2]])
        .collect();
    let indices: Vec<u32> = (0..positions.len() as u32).collect();

    let mut bevy_mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    bevy_mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    bevy_mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    bevy_mesh.insert_indices(Indices::U32(indices));
    bevy_mesh
}

impl From<&SurfaceMesh> for Mesh {
    fn from(mesh: &SurfaceMesh) -> Self {
        to_bevy_mesh(mesh)
    }
}
