//! Marching Cubes iso-surface extraction over dense scalar volumes.
//!
//! ```text
//! VolumeChunk ──march──▶ flat vertices ──SurfaceMesh::build──▶ + flat normals
//!                                         ──without_degenerates──▶ consumer
//! ```
//!
//! Extraction never fails on ill-conditioned cells. Degenerate triangles are
//! emitted and must be removed with [`SurfaceMesh::without_degenerates`] (or
//! [`mesh::find_degenerate_mask`] + [`mesh::filter_array`]) before the normals
//! are used.

pub mod chunk;
pub mod config;
pub mod error;
pub mod extract;
pub mod image;
pub mod interp;
pub mod mesh;
#[cfg(feature = "bevy")]
pub mod render;
pub mod sample;
pub mod sphere;
pub mod tables;
pub mod types;
pub mod units;
pub mod utils;

pub use chunk::VolumeChunk;
pub use config::MarchingCubesConfig;
pub use error::{MarchingCubesError, Result};
pub use extract::{march, march_slabs};
pub use mesh::SurfaceMesh;
pub use sample::{ComparisonPolicy, Sample, SampleKind};
