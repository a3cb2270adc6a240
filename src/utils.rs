use crate::{
    config::MarchingCubesConfig,
    interp::interpolate_points,
    sample::Sample,
    tables::{CORNER_BITS, CORNER_OFFSETS, EDGE_CORNERS, TRI_TABLE},
    types::{Point, Value, Vector},
};

/// Computes the marching cubes configuration index for a cell.
///
/// A corner contributes its bit from [`CORNER_BITS`] when its sample **exceeds**
/// the iso-level. The bit is not the corner index:
///
/// ```text
/// corner:  0  1  2  3  4   5   6    7
/// bit:     1  2  8  4  16  32  128  64
/// ```
#[inline]
pub fn get_state<T: Sample>(corner_values: &[T; 8], iso_level: T) -> usize {
    corner_values
        .iter()
        .zip(CORNER_BITS)
        .filter(|(value, _)| value.exceeds(iso_level))
        .fold(0, |state, (_, bit)| state | bit)
}

/// Returns the 8 physical corner positions of a cell whose origin corner is at `origin`.
///
/// Ordered as [`CORNER_OFFSETS`]: `p, px, py, pxy, pz, pxz, pyz, pxyz`.
#[inline]
pub fn get_corner_positions(origin: [Value; 3], voxel_size: Vector) -> [Point; 8] {
    CORNER_OFFSETS.map(|[dx, dy, dz]| {
        Point::new(
            origin[0] + dx as Value * voxel_size.x,
            origin[1] + dy as Value * voxel_size.y,
            origin[2] + dz as Value * voxel_size.z,
        )
    })
}

/// Interpolates the surface crossing on every edge flagged in `edges_mask`.
///
/// `edges_mask` is the 12-bit entry from `EDGE_TABLE`. Inactive edges stay `None`.
/// Crossings on edges whose two samples are equal come out as NaN or infinite
/// points; they are left for the degenerate-triangle filter.
#[inline]
pub fn get_edge_points<T: Sample>(
    edges_mask: u16,
    corner_positions: &[Point; 8],
    corner_values: &[T; 8],
    iso_level: T,
) -> [Option<Point>; 12] {
    let mut edge_points: [Option<Point>; 12] = [None; 12];

    for (i, &[a, b]) in EDGE_CORNERS.iter().enumerate() {
        if (edges_mask & (1 << i)) == 0 {
            continue;
        }

        let t = T::interpolation_factor(iso_level, corner_values[a], corner_values[b]);
        edge_points[i] = Some(interpolate_points(corner_positions[a], corner_positions[b], t));
    }

    edge_points
}

/// Appends the triangles of configuration `state` to `out` as flat `xyz` triples.
///
/// `TRI_TABLE[state]` lists edge indices in groups of three, terminated by `-1`.
/// Each triangle is written back to front, `e2, e1, e0`, and every coordinate is
/// passed through [`MarchingCubesConfig`]'s normalization:
///
/// ```text
/// TRI_TABLE[state] = [e0, e1, e2,  e3, e4, e5,  -1, ...]
/// out             += [p(e2), p(e1), p(e0),  p(e5), p(e4), p(e3)]
/// ```
///
/// Returns the number of triangles appended.
#[inline]
pub fn triangle_verts_from_state(
    edge_points: &[Option<Point>; 12],
    state: usize,
    config: &MarchingCubesConfig,
    out: &mut Vec<Value>,
) -> usize {
    let mut emitted = 0;
    for tri in TRI_TABLE[state]
        .chunks_exact(3)
        .take_while(|tri| tri[0] != -1)
    {
        let points = [tri[0], tri[1], tri[2]].map(|edge| edge_points[edge as usize]);
        debug_assert!(
            points.iter().all(Option::is_some),
            "TRI_TABLE[{state}] triangle {tri:?} uses an unpopulated edge"
        );
        let [Some(p0), Some(p1), Some(p2)] = points else {
            continue;
        };

        for p in [p2, p1, p0] {
            out.extend(p.coords.iter().map(|&c| config.normalize(c)));
        }
        emitted += 1;
    }
    emitted
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod utils_test;
