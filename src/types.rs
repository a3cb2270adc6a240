use nalgebra::{Point3, Vector3};

/// Coordinate type of every emitted vertex and normal.
pub type Value = f32;

/// A 3D point with [`Value`] components.
pub type Point = Point3<Value>;

/// A 3D vector with [`Value`] components.
pub type Vector = Vector3<Value>;

/// Floats per triangle in a flat, unindexed buffer: 3 vertices × xyz.
pub const TRIANGLE_STRIDE: usize = 9;
