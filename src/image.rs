//! Meshing straight from a multi-dimensional image.
//!
//! A thin layer over [`march`]: it picks one channel and frame out of an
//! [`ImageStack`], derives the voxel size from the image calibration and casts
//! the iso-level into the image's sample kind. Integer casts truncate toward
//! zero, saturate at the `i32` range and then wrap to 16 bits.

use ndarray::{Array5, s};
use tracing::debug;

use crate::{
    chunk::VolumeChunk,
    config::MarchingCubesConfig,
    error::{MarchingCubesError, Result},
    extract::march,
    sample::Sample,
    types::{Value, Vector},
    units::LengthUnit,
};

/// Physical size of one voxel and the unit it is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub pixel_width: f64,
    pub pixel_height: f64,
    pub pixel_depth: f64,
    pub unit: String,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            pixel_width: 1.,
            pixel_height: 1.,
            pixel_depth: 1.,
            unit: "pixel".to_owned(),
        }
    }
}

/// Image samples, indexed `[frame, channel, z, y, x]`.
#[derive(Debug, Clone)]
pub enum ImageData {
    Gray8(Array5<u8>),
    Gray16(Array5<i16>),
    Gray32(Array5<f32>),
    /// Packed 24-bit colour. Carried for completeness; it cannot be meshed.
    Rgb(Array5<u32>),
}

impl ImageData {
    /// `(frames, channels, depth, height, width)`
    pub fn dim(&self) -> (usize, usize, usize, usize, usize) {
        match self {
            ImageData::Gray8(a) => a.dim(),
            ImageData::Gray16(a) => a.dim(),
            ImageData::Gray32(a) => a.dim(),
            ImageData::Rgb(a) => a.dim(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageStack {
    pub data: ImageData,
    pub calibration: Calibration,
}

impl ImageStack {
    pub fn new(data: ImageData) -> Self {
        Self {
            data,
            calibration: Calibration::default(),
        }
    }

    pub fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;
        self
    }
}

/// Settings for [`march_image`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMeshOptions {
    pub channel: usize,
    pub frame: usize,
    /// Truncated to an integer for integer kinds, then wrapped to 16 bits.
    /// 8-bit images mesh nothing once the wrapped level is above 255.
    pub iso_level: f64,
    /// First plane to mesh. Planes below it are skipped, coordinates are not shifted.
    pub z_offset: usize,
    /// Use the calibration's voxel size instead of `(1, 1, 1)`.
    pub physical_sizes: bool,
    /// Convert physical sizes into this unit. Ignored unless `physical_sizes` is set.
    pub mesh_length_unit: Option<LengthUnit>,
    pub config: MarchingCubesConfig,
}

impl Default for ImageMeshOptions {
    fn default() -> Self {
        Self {
            channel: 0,
            frame: 0,
            iso_level: 0.,
            z_offset: 0,
            physical_sizes: false,
            mesh_length_unit: None,
            config: MarchingCubesConfig::default(),
        }
    }
}

impl ImageMeshOptions {
    pub fn with_iso_level(mut self, iso_level: f64) -> Self {
        self.iso_level = iso_level;
        self
    }

    pub fn with_channel_and_frame(mut self, channel: usize, frame: usize) -> Self {
        self.channel = channel;
        self.frame = frame;
        self
    }

    pub fn with_z_offset(mut self, z_offset: usize) -> Self {
        self.z_offset = z_offset;
        self
    }

    /// Enables physical voxel sizes, optionally converted into `unit`.
    pub fn with_physical_sizes(mut self, unit: Option<LengthUnit>) -> Self {
        self.physical_sizes = true;
        self.mesh_length_unit = unit;
        self
    }

    pub fn with_config(mut self, config: MarchingCubesConfig) -> Self {
        self.config = config;
        self
    }
}

/// Voxel size used for meshing.
///
/// The unit conversion is a single factor applied to all three axes.
pub fn effective_voxel_size(
    calibration: &Calibration,
    physical_sizes: bool,
    mesh_length_unit: Option<LengthUnit>,
) -> Result<Vector> {
    if !physical_sizes {
        return Ok(Vector::new(1., 1., 1.));
    }

    let factor = match mesh_length_unit {
        Some(target) => calibration.unit.parse::<LengthUnit>()?.conversion_factor(target),
        None => 1.,
    };

    Ok(Vector::new(
        (calibration.pixel_width * factor) as Value,
        (calibration.pixel_height * factor) as Value,
        (calibration.pixel_depth * factor) as Value,
    ))
}

/// Meshes one channel and frame of `image` at `options.iso_level`.
///
/// Supports 8-bit, 16-bit and 32-bit float images; anything else returns
/// [`MarchingCubesError::UnsupportedSampleKind`].
pub fn march_image(image: &ImageStack, options: &ImageMeshOptions) -> Result<Vec<Value>> {
    let voxel_size = effective_voxel_size(
        &image.calibration,
        options.physical_sizes,
        options.mesh_length_unit,
    )?;

    match &image.data {
        ImageData::Gray8(data) => {
            march_planes(data, gray8_iso_level(options.iso_level), voxel_size, options)
        }
        ImageData::Gray16(data) => {
            march_planes(data, gray16_iso_level(options.iso_level), voxel_size, options)
        }
        ImageData::Gray32(data) => march_planes(data, options.iso_level as f32, voxel_size, options),
        ImageData::Rgb(_) => Err(MarchingCubesError::UnsupportedSampleKind { kind: "rgb" }),
    }
}

/// Wrapped levels above 255 become 255, which no byte exceeds.
fn gray8_iso_level(iso_level: f64) -> u8 {
    u8::try_from(iso_level as i32 as u16).unwrap_or(u8::MAX)
}

fn gray16_iso_level(iso_level: f64) -> i16 {
    iso_level as i32 as i16
}

fn march_planes<T: Sample>(
    data: &Array5<T>,
    iso_level: T,
    voxel_size: Vector,
    options: &ImageMeshOptions,
) -> Result<Vec<Value>> {
    let (frames, channels, depth, height, width) = data.dim();
    if options.frame >= frames {
        return Err(MarchingCubesError::FrameOutOfRange {
            frame: options.frame,
            frames,
        });
    }
    if options.channel >= channels {
        return Err(MarchingCubesError::ChannelOutOfRange {
            channel: options.channel,
            channels,
        });
    }

    // Logical iteration order is z, y, x, matching the flat chunk layout.
    let samples: Vec<T> = data
        .slice(s![options.frame, options.channel, .., .., ..])
        .iter()
        .copied()
        .collect();

    let chunk = VolumeChunk::new(
        &samples,
        width,
        height,
        depth.saturating_sub(options.z_offset),
    )?
    .with_z_offset(options.z_offset)?
    .with_voxel_size(voxel_size);

    debug!(
        kind = %T::KIND,
        width,
        height,
        depth,
        channel = options.channel,
        frame = options.frame,
        "meshing image planes"
    );

    Ok(march(&chunk, iso_level, &options.config))
}

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;
