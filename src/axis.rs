//! World axis gizmo drawn next to the path.

use core::mem::size_of;
use alloc::vec::Vec;

use rgb::RGB;

use crate::tessellation::{flatten, Float, Point3};

pub const AXIS_EXTENT: Float = 5.0;
pub const AXIS_VERTICES: usize = 6;

/// Byte offset of the colours inside `Axis::vertex_buffer`.
pub const COLOR_OFFSET: usize = AXIS_VERTICES * 3 * size_of::<Float>();

pub const X_COLOR: RGB<Float> = RGB { r: 1.0, g: 0.0, b: 0.2 };
pub const Y_COLOR: RGB<Float> = RGB { r: 0.0, g: 1.0, b: 0.5 };
pub const Z_COLOR: RGB<Float> = RGB { r: 0.0, g: 0.7, b: 1.0 };

/// Three coloured lines through the origin, one per axis,
/// meant to be drawn as line pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub positions: [Point3; AXIS_VERTICES],
    pub colors: [RGB<Float>; AXIS_VERTICES],
}

impl Axis {
    pub fn new() -> Self {
        Self::with_extent(AXIS_EXTENT)
    }

    pub fn with_extent(extent: Float) -> Self {
        Self {
            positions: [
                Point3::new(-extent, 0.0, 0.0),
                Point3::new(extent, 0.0, 0.0),
                Point3::new(0.0, -extent, 0.0),
                Point3::new(0.0, extent, 0.0),
                Point3::new(0.0, 0.0, -extent),
                Point3::new(0.0, 0.0, extent),
            ],
            colors: [X_COLOR, X_COLOR, Y_COLOR, Y_COLOR, Z_COLOR, Z_COLOR],
        }
    }

    /// All positions followed by all colours, three floats each.
    pub fn vertex_buffer(&self) -> Vec<Float> {
        let mut buffer = flatten(&self.positions);
        for color in &self.colors {
            buffer.extend_from_slice(&[color.r, color.g, color.b]);
        }
        buffer
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new()
    }
}
