use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, trace};

use crate::{
    chunk::VolumeChunk,
    config::MarchingCubesConfig,
    error::{MarchingCubesError, Result},
    sample::Sample,
    tables::EDGE_TABLE,
    types::{TRIANGLE_STRIDE, Value, Vector},
    utils::{get_corner_positions, get_edge_points, get_state, triangle_verts_from_state},
};

/// Runs the marching cubes algorithm over one volume chunk.
///
/// Returns a flat, unindexed triangle list: every 9 floats are one triangle.
/// Cells are visited z-outermost, then y, then x, so output from consecutive
/// chunks can be concatenated into a full-volume mesh.
///
/// ```text
/// Per cell:
/// 1. chunk.corner_values        →  8 samples
/// 2. get_state                  →  256-entry lookup key
/// 3. EDGE_TABLE[state]          →  bitmask of intersected edges (0 → skip)
/// 4. get_corner_positions       →  8 physical points
/// 5. get_edge_points            →  up to 12 interpolated points
/// 6. triangle_verts_from_state  →  reversed triangles from TRI_TABLE
/// ```
///
/// Near-equal corner samples may produce NaN or infinite vertices. They are not
/// trapped here; run the output through [`SurfaceMesh`](crate::mesh::SurfaceMesh)
/// before handing it to a consumer.
pub fn march<T: Sample>(
    chunk: &VolumeChunk<'_, T>,
    iso_level: T,
    config: &MarchingCubesConfig,
) -> Vec<Value> {
    let [cells_x, cells_y, cells_z] = chunk.cell_dims();
    let voxel_size = chunk.voxel_size();

    let mut vertices: Vec<Value> = Vec::new();
    let mut triangles = 0;

    for z in 0..cells_z {
        for y in 0..cells_y {
            for x in 0..cells_x {
                let corner_values = chunk.corner_values(x, y, z);
                let state = get_state(&corner_values, iso_level);

                let edges_mask = EDGE_TABLE[state];
                if edges_mask == 0 {
                    continue;
                }

                let corner_positions = get_corner_positions(chunk.cell_origin(x, y, z), voxel_size);
                let edge_points =
                    get_edge_points(edges_mask, &corner_positions, &corner_values, iso_level);

                triangles += triangle_verts_from_state(&edge_points, state, config, &mut vertices);
            }
        }
    }

    debug!(
        kind = %T::KIND,
        z_offset = chunk.z_offset(),
        cells = chunk.cell_count(),
        triangles,
        "marched volume chunk"
    );

    vertices
}

/// Marches a whole volume as disjoint Z slabs on the rayon thread pool.
///
/// Each slab spans `slab_depth` planes and shares its last plane with the next
/// slab, so every cell is visited exactly once. Results are concatenated in slab
/// order and match a single [`march`] over the full volume.
///
/// `dims` is `[width, height, depth]` of the full volume in `samples`.
pub fn march_slabs<T: Sample>(
    samples: &[T],
    dims: [usize; 3],
    voxel_size: Vector,
    iso_level: T,
    config: &MarchingCubesConfig,
    slab_depth: usize,
) -> Result<Vec<Value>> {
    if slab_depth < 2 {
        return Err(MarchingCubesError::InvalidSlabDepth { depth: slab_depth });
    }

    let [width, height, depth] = dims;
    // Validates the buffer once for the whole volume.
    VolumeChunk::new(samples, width, height, depth)?;

    let cells_z = depth.saturating_sub(1);
    let cells_per_slab = slab_depth - 1;
    let slab_count = cells_z.div_ceil(cells_per_slab);

    let per_slab: Vec<Vec<Value>> = (0..slab_count)
        .into_par_iter()
        .map(|slab| -> Result<Vec<Value>> {
            let z_offset = slab * cells_per_slab;
            let planes = slab_depth.min(depth - z_offset);
            trace!(slab, z_offset, planes, "marching slab");

            let chunk = VolumeChunk::new(samples, width, height, planes)?
                .with_z_offset(z_offset)?
                .with_voxel_size(voxel_size);
            Ok(march(&chunk, iso_level, config))
        })
        .collect::<Result<_>>()?;

    // Merge per-slab buffers into a single vertex buffer
    let total: usize = per_slab.iter().map(|v| v.len()).sum();
    let mut vertices: Vec<Value> = Vec::with_capacity(total);
    for mut v in per_slab {
        vertices.append(&mut v);
    }

    debug!(
        slabs = slab_count,
        triangles = vertices.len() / TRIANGLE_STRIDE,
        "marched volume in slabs"
    );

    Ok(vertices)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
