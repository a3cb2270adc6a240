use derive_more::Display;

pub type Result<T> = core::result::Result<T, MarchingCubesError>;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum MarchingCubesError {
    /// A flat triangle buffer whose length is not a multiple of the per-triangle stride.
    #[display("buffer of length {len} is not a multiple of {stride}")]
    MisalignedBuffer { len: usize, stride: usize },
    /// Two buffers that must be index-aligned have different lengths.
    #[display("buffer length mismatch: {vertices} vertex components vs {other}")]
    LengthMismatch { vertices: usize, other: usize },
    /// The sample buffer does not reach the last plane addressed by the chunk.
    #[display("sample buffer holds {len} values but the chunk addresses {required}")]
    SampleBufferTooShort { len: usize, required: usize },
    /// Chunk dimensions whose sample count does not fit in `usize`.
    #[display("chunk {dims:?} at z offset {z_offset} addresses more samples than fit in usize")]
    DimensionsOverflow { dims: [usize; 3], z_offset: usize },
    #[display("unsupported sample kind: {kind}")]
    UnsupportedSampleKind { kind: &'static str },
    #[display("channel {channel} out of range (image has {channels})")]
    ChannelOutOfRange { channel: usize, channels: usize },
    #[display("frame {frame} out of range (image has {frames})")]
    FrameOutOfRange { frame: usize, frames: usize },
    #[display("unknown length unit {unit:?}")]
    UnknownLengthUnit { unit: String },
    #[display("sphere density must be at least 3, got {density}")]
    InvalidDensity { density: usize },
    #[display("slab depth must be at least 2 planes, got {depth}")]
    InvalidSlabDepth { depth: usize },
}

impl std::error::Error for MarchingCubesError {}
