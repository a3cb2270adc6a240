use crate::{
    error::{MarchingCubesError, Result},
    sample::Sample,
    tables::CORNER_OFFSETS,
    types::{Value, Vector},
};

/// A Z-slab of a dense scalar volume, borrowed from the caller's sample buffer.
///
/// Samples are stored x-fastest, then y, then z:
///
/// ```text
/// index(x, y, z) = x + width * y + width * height * z
/// ```
///
/// The chunk covers planes `z_offset .. z_offset + depth` of the buffer and
/// produces cells for `z_offset .. z_offset + depth - 1`. The buffer is never
/// re-based, so it must hold at least `width * height * (z_offset + depth)`
/// samples; [`VolumeChunk::new`] rejects anything shorter.
#[derive(Debug, Clone, Copy)]
pub struct VolumeChunk<'a, T> {
    samples: &'a [T],
    /// `[width, height, depth]` where depth counts the planes in this chunk.
    dims: [usize; 3],
    z_offset: usize,
    voxel_size: Vector,
}

impl<'a, T: Sample> VolumeChunk<'a, T> {
    /// Creates a chunk starting at plane `0` with unit voxel size.
    pub fn new(samples: &'a [T], width: usize, height: usize, depth: usize) -> Result<Self> {
        Self {
            samples,
            dims: [width, height, depth],
            z_offset: 0,
            voxel_size: Vector::new(1., 1., 1.),
        }
        .validated()
    }

    /// Moves the chunk's first plane to `z_offset` within the same buffer.
    pub fn with_z_offset(mut self, z_offset: usize) -> Result<Self> {
        self.z_offset = z_offset;
        self.validated()
    }

    /// Sets the physical size of one voxel along each axis.
    pub fn with_voxel_size(mut self, voxel_size: Vector) -> Self {
        self.voxel_size = voxel_size;
        self
    }

    fn validated(self) -> Result<Self> {
        let required = self
            .checked_required_len()
            .ok_or(MarchingCubesError::DimensionsOverflow {
                dims: self.dims,
                z_offset: self.z_offset,
            })?;
        if self.samples.len() < required {
            return Err(MarchingCubesError::SampleBufferTooShort {
                len: self.samples.len(),
                required,
            });
        }
        Ok(self)
    }

    /// Number of samples the chunk addresses, counted from the start of the buffer.
    pub fn required_len(&self) -> usize {
        // Constructors reject chunks whose length overflows.
        self.checked_required_len().unwrap_or(usize::MAX)
    }

    fn checked_required_len(&self) -> Option<usize> {
        let [width, height, depth] = self.dims;
        width
            .checked_mul(height)?
            .checked_mul(self.z_offset.checked_add(depth)?)
    }

    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    pub fn z_offset(&self) -> usize {
        self.z_offset
    }

    pub fn voxel_size(&self) -> Vector {
        self.voxel_size
    }

    /// Number of cells in each axis; zero when the chunk is thinner than two planes.
    pub fn cell_dims(&self) -> [usize; 3] {
        self.dims.map(|d| d.saturating_sub(1))
    }

    pub fn cell_count(&self) -> usize {
        self.cell_dims().iter().product()
    }

    /// Buffer index of the origin corner of cell `(x, y, z)`, with `z` local to the chunk.
    #[inline]
    pub fn base_index(&self, x: usize, y: usize, z: usize) -> usize {
        let [width, height, _] = self.dims;
        x + width * y + width * height * (z + self.z_offset)
    }

    /// Returns the 8 corner samples of cell `(x, y, z)` in [`CORNER_OFFSETS`] order.
    #[inline]
    pub fn corner_values(&self, x: usize, y: usize, z: usize) -> [T; 8] {
        let [width, height, _] = self.dims;
        let base = self.base_index(x, y, z);
        CORNER_OFFSETS.map(|[dx, dy, dz]| self.samples[base + dx + width * dy + width * height * dz])
    }

    /// Physical position of the origin corner of cell `(x, y, z)`.
    ///
    /// Z includes the chunk offset, so vertices land in full-volume coordinates.
    #[inline]
    pub fn cell_origin(&self, x: usize, y: usize, z: usize) -> [Value; 3] {
        [
            x as Value * self.voxel_size.x,
            y as Value * self.voxel_size.y,
            (z + self.z_offset) as Value * self.voxel_size.z,
        ]
    }
}

#[cfg(test)]
#[path = "chunk_test.rs"]
mod chunk_test;
