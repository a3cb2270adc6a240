use crate::types::{Value, Vector};

/// Subtracted from every vertex coordinate after normalization.
pub const RECENTER_OFFSET: Value = 0.5;

/// Output coordinate settings for the extractor.
///
/// Every emitted coordinate is mapped as `c / normalization_divisor - RECENTER_OFFSET`.
/// The default divisor of `1.0` leaves vertices in physical units, shifted by `-0.5`.
/// Use [`unit_cube_divisor`](MarchingCubesConfig::unit_cube_divisor) to scale the
/// whole volume into a unit cube centred on the origin instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchingCubesConfig {
    pub normalization_divisor: Value,
}

impl Default for MarchingCubesConfig {
    fn default() -> Self {
        Self {
            normalization_divisor: 1.,
        }
    }
}

impl MarchingCubesConfig {
    pub fn with_normalization_divisor(mut self, divisor: Value) -> Self {
        self.normalization_divisor = divisor;
        self
    }

    /// Largest physical extent of a volume with `full_dims` samples per axis.
    ///
    /// `full_dims[2]` is the depth of the whole volume, not of a single chunk.
    /// Returns `1.0` for volumes with no extent so the divisor stays usable.
    pub fn unit_cube_divisor(full_dims: [usize; 3], voxel_size: Vector) -> Value {
        let extent = |samples: usize, size: Value| samples.saturating_sub(1) as Value * size;
        let max = extent(full_dims[0], voxel_size.x)
            .max(extent(full_dims[1], voxel_size.y))
            .max(extent(full_dims[2], voxel_size.z));
        if max > 0. { max } else { 1. }
    }

    #[inline]
    pub(crate) fn normalize(&self, c: Value) -> Value {
        c / self.normalization_divisor - RECENTER_OFFSET
    }
}
