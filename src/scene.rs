//! Per-frame draw calls for an external renderer.

use alloc::vec::Vec;

use rgb::RGBA;

use crate::axis::{Axis, AXIS_VERTICES};
use crate::path::PathModel;
use crate::tessellation::{Float, Point3};

use Primitive::*;

pub const CURVE_COLOR: RGBA<Float> = RGBA { r: 1.0, g: 1.0, b: 1.0, a: 0.9 };
pub const SEGMENT_COLOR: RGBA<Float> = RGBA { r: 0.8, g: 0.8, b: 0.8, a: 0.7 };
pub const ENDPOINT_COLOR: RGBA<Float> = RGBA { r: 1.0, g: 1.0, b: 1.0, a: 0.8 };
pub const CONTROL_COLOR: RGBA<Float> = RGBA { r: 1.0, g: 0.5, b: 0.2, a: 1.0 };

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum VertexBuffer {
    Axis,
    Curve,
    Endpoints,
    Controls,
}

impl VertexBuffer {
    pub fn points<'a>(self, path: &'a PathModel, axis: &'a Axis) -> &'a [Point3] {
        match self {
            VertexBuffer::Axis => &axis.positions,
            VertexBuffer::Curve => path.curve(),
            VertexBuffer::Endpoints => path.endpoints(),
            VertexBuffer::Controls => path.controls(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive {
    Lines,
    LineStrip,
    Points,
}

/// Draw the first `count` vertices of `buffer`.
///
/// `color` is `None` when the buffer carries per-vertex colours.
/// `size` is the line width or the point size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCall {
    pub buffer: VertexBuffer,
    pub primitive: Primitive,
    pub count: usize,
    pub color: Option<RGBA<Float>>,
    pub size: Float,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawOptions {
    pub show_controls: bool,
    pub show_points: bool,
    pub show_segments: bool,
    pub show_axis: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            show_controls: true,
            show_points: true,
            show_segments: false,
            show_axis: true,
        }
    }
}

/// Draw calls for one frame, back to front.
///
/// The curve line strip always comes first after the axis and is
/// limited to `visible` points; everything else is drawn whole.
pub fn draw_list(path: &PathModel, visible: usize, options: &DrawOptions) -> Vec<DrawCall> {
    let mut calls = Vec::with_capacity(5);

    if options.show_axis {
        calls.push(DrawCall {
            buffer: VertexBuffer::Axis,
            primitive: Lines,
            count: AXIS_VERTICES,
            color: None,
            size: 1.0,
        });
    }

    calls.push(DrawCall {
        buffer: VertexBuffer::Curve,
        primitive: LineStrip,
        count: visible.min(path.point_count()),
        color: Some(CURVE_COLOR),
        size: 1.0,
    });

    if options.show_segments {
        calls.push(DrawCall {
            buffer: VertexBuffer::Curve,
            primitive: Points,
            count: path.point_count(),
            color: Some(SEGMENT_COLOR),
            size: 1.0,
        });
    }

    if options.show_points {
        calls.push(DrawCall {
            buffer: VertexBuffer::Endpoints,
            primitive: Points,
            count: path.endpoints().len(),
            color: Some(ENDPOINT_COLOR),
            size: 4.0,
        });
    }

    if options.show_controls {
        calls.push(DrawCall {
            buffer: VertexBuffer::Controls,
            primitive: Points,
            count: path.controls().len(),
            color: Some(CONTROL_COLOR),
            size: 3.0,
        });
    }

    calls
}
