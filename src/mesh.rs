use tracing::debug;

use crate::{
    error::{MarchingCubesError, Result},
    types::{TRIANGLE_STRIDE, Value, Vector},
};

/// Flat-shaded, unindexed triangle mesh ready for a consumer.
///
/// `vertices` and `normals` are index-aligned flat buffers: every 9 floats are one
/// triangle, and each triangle's normal is repeated for its 3 vertices.
///
/// Meshes straight out of [`SurfaceMesh::build`] may still contain degenerate
/// triangles with NaN normals. Call [`without_degenerates`](SurfaceMesh::without_degenerates)
/// before lighting or exporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceMesh {
    vertices: Vec<Value>,
    normals: Vec<Value>,
}

impl SurfaceMesh {
    /// Wraps a flat triangle list and computes its flat normals.
    ///
    /// Returns [`MarchingCubesError::MisalignedBuffer`] if `vertices.len()` is not a multiple of 9.
    pub fn build(vertices: Vec<Value>) -> Result<Self> {
        let normals = generate_flat_normals(&vertices)?;
        Ok(Self { vertices, normals })
    }

    pub fn vertices(&self) -> &[Value] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Value] {
        &self.normals
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / TRIANGLE_STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Per-float mask, `true` for every component of a triangle with a NaN normal.
    pub fn degenerate_mask(&self) -> Vec<bool> {
        expand_triangle_flags(degenerate_triangles(&self.normals))
    }

    /// Drops every degenerate triangle from both buffers in lock-step.
    pub fn without_degenerates(self) -> Self {
        let mask = self.degenerate_mask();
        let before = self.triangle_count();

        let vertices = compact(&self.vertices, &mask, false);
        let normals = compact(&self.normals, &mask, false);

        let removed = before - vertices.len() / TRIANGLE_STRIDE;
        if removed > 0 {
            debug!(removed, kept = before - removed, "removed degenerate triangles");
        }

        Self { vertices, normals }
    }

    /// Returns `(vertices, normals)`.
    pub fn into_parts(self) -> (Vec<Value>, Vec<Value>) {
        (self.vertices, self.normals)
    }
}

/// Computes one unit normal per triangle, replicated to its three vertices.
///
/// For a triangle `A, B, C` the normal is `cross(B - A, C - A) / |cross(B - A, C - A)|`.
/// Zero-area triangles divide by zero and come out as NaN; that is the signal
/// [`find_degenerate_mask`] looks for, not an error.
pub fn generate_flat_normals(vertices: &[Value]) -> Result<Vec<Value>> {
    check_stride(vertices.len())?;

    let mut normals = Vec::with_capacity(vertices.len());
    for tri in vertices.chunks_exact(TRIANGLE_STRIDE) {
        let a = Vector::new(tri[0], tri[1], tri[2]);
        let b = Vector::new(tri[3], tri[4], tri[5]);
        let c = Vector::new(tri[6], tri[7], tri[8]);

        let cross = (b - a).cross(&(c - a));
        let normal = cross / cross.norm();

        for _ in 0..3 {
            normals.extend_from_slice(normal.as_slice());
        }
    }
    Ok(normals)
}

/// Flags all 9 positions of every triangle whose normal has a NaN component.
///
/// The mask applies equally to `vertices` and `normals`.
pub fn find_degenerate_mask(vertices: &[Value], normals: &[Value]) -> Result<Vec<bool>> {
    if vertices.len() != normals.len() {
        return Err(MarchingCubesError::LengthMismatch {
            vertices: vertices.len(),
            other: normals.len(),
        });
    }
    check_stride(vertices.len())?;

    Ok(expand_triangle_flags(degenerate_triangles(normals)))
}

/// Stable compaction: keeps exactly the elements whose mask entry equals `keep`.
///
/// Filter vertices and normals with the same mask to keep them aligned.
pub fn filter_array<T: Copy>(array: &[T], mask: &[bool], keep: bool) -> Result<Vec<T>> {
    if array.len() != mask.len() {
        return Err(MarchingCubesError::LengthMismatch {
            vertices: array.len(),
            other: mask.len(),
        });
    }
    Ok(compact(array, mask, keep))
}

pub fn invert_mask(mask: &[bool]) -> Vec<bool> {
    mask.iter().map(|&m| !m).collect()
}

fn check_stride(len: usize) -> Result<()> {
    if len % TRIANGLE_STRIDE != 0 {
        return Err(MarchingCubesError::MisalignedBuffer {
            len,
            stride: TRIANGLE_STRIDE,
        });
    }
    Ok(())
}

fn degenerate_triangles(normals: &[Value]) -> impl Iterator<Item = bool> + '_ {
    normals
        .chunks_exact(TRIANGLE_STRIDE)
        .map(|tri| tri.iter().any(|c| c.is_nan()))
}

fn expand_triangle_flags(flags: impl Iterator<Item = bool>) -> Vec<bool> {
    flags
        .flat_map(|flag| std::iter::repeat_n(flag, TRIANGLE_STRIDE))
        .collect()
}

fn compact<T: Copy>(array: &[T], mask: &[bool], keep: bool) -> Vec<T> {
    array
        .iter()
        .zip(mask)
        .filter(|&(_, &m)| m == keep)
        .map(|(&v, _)| v)
        .collect()
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;
