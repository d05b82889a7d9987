//! Sampling of quadratic Bézier arcs into polylines.

use core::iter::FusedIterator;
use alloc::vec::Vec;

use vek::ops::Lerp;

use crate::path::PathError::TooFewSegments;
use crate::path::PathResult;

pub type Float = f32;
pub type Point3 = vek::vec::repr_c::vec3::Vec3<Float>;
pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

/// One quadratic Bézier piece of a path, from `start` to `end`,
/// bending towards `ctrl`.
pub type Arc = vek::bezier::repr_c::QuadraticBezier3<Float>;

/// Position on the quadratic Bézier (p0, p1, p2) at `t`,
/// computed as a lerp between two lerps.
///
/// The precise lerp form returns `p0` at `t = 0` and `p2` at `t = 1`.
pub fn quadratic_point(p0: Point3, p1: Point3, p2: Point3, t: Float) -> Point3 {
    let l0: Point3 = Lerp::lerp_unclamped_precise(p0, p1, t);
    let l1: Point3 = Lerp::lerp_unclamped_precise(p1, p2, t);
    Lerp::lerp_unclamped_precise(l0, l1, t)
}

#[inline(always)]
pub fn arc_point(arc: &Arc, t: Float) -> Point3 {
    quadratic_point(arc.start, arc.ctrl, arc.end, t)
}

/// Lazy sequence of `segments` samples along one arc,
/// for `t = i / (segments - 1)` with `i` in `0..segments`.
///
/// Cloning it gives an independent iterator starting
/// at the same position.
#[derive(Debug, Clone, PartialEq)]
pub struct Tessellation {
    arc: Arc,
    segments: usize,
    next: usize,
}

impl Tessellation {
    /// `segments` must already be known to be at least 2.
    pub(crate) fn new(arc: Arc, segments: usize) -> Self {
        Self {
            arc,
            segments,
            next: 0,
        }
    }

    pub fn arc(&self) -> &Arc {
        &self.arc
    }

    pub fn segments(&self) -> usize {
        self.segments
    }
}

impl Iterator for Tessellation {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.next < self.segments {
            // i == segments - 1 divides a value by itself: t is exactly 1
            let t = self.next as Float / (self.segments - 1) as Float;
            self.next += 1;
            Some(arc_point(&self.arc, t))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.segments - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Tessellation {}
impl FusedIterator for Tessellation {}

/// Samples the arc from `p0` to `p2` governed by control `p1`.
///
/// The first sample is `p0` and the last one is `p2`, bit for bit.
/// Fewer than two segments cannot reach both ends and is rejected.
pub fn tessellate(p0: Point3, p1: Point3, p2: Point3, segments: usize) -> PathResult<Tessellation> {
    tessellate_arc(Arc { start: p0, ctrl: p1, end: p2 }, segments)
}

pub fn tessellate_arc(arc: Arc, segments: usize) -> PathResult<Tessellation> {
    match segments < 2 {
        true => Err(TooFewSegments),
        false => Ok(Tessellation::new(arc, segments)),
    }
}

/// Flattens points into `x, y, z` triplets, ready for a vertex buffer.
pub fn flatten(points: &[Point3]) -> Vec<Float> {
    let mut flat = Vec::with_capacity(points.len() * 3);
    for point in points {
        flat.extend_from_slice(&point.into_array());
    }
    flat
}
