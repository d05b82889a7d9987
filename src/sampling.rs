//! Sources of arc endpoints and control points.

use alloc::vec::Vec;

use rand::Rng;

use crate::tessellation::{Float, Point3, ORIGIN};

/// Half extent of the cube new endpoints are drawn from.
pub const ENDPOINT_EXTENT: Float = 5.0;
/// Half extent for the control point of the first arc.
pub const FIRST_CONTROL_EXTENT: Float = 5.0;
/// Half extent for the control points of appended arcs.
/// Tighter than the endpoint cube, which keeps curvature smooth.
pub const CONTROL_EXTENT: Float = 4.0;

/// Anything able to hand out points for new arcs.
pub trait PointSource {
    /// Returns a point inside `[-half_extent, half_extent)` on each axis.
    ///
    /// `half_extent` must be positive. An empty cube (zero, negative
    /// or NaN extent) is a caller bug: debug builds panic and release
    /// builds get the origin.
    fn next_point(&mut self, half_extent: Float) -> Point3;
}

impl<S: PointSource + ?Sized> PointSource for &mut S {
    fn next_point(&mut self, half_extent: Float) -> Point3 {
        (**self).next_point(half_extent)
    }
}

/// Uniformly distributed points drawn from a random number generator.
#[derive(Debug, Clone)]
pub struct RandomPoints<R> {
    rng: R,
}

impl<R: Rng> RandomPoints<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> PointSource for RandomPoints<R> {
    fn next_point(&mut self, half_extent: Float) -> Point3 {
        debug_assert!(half_extent > 0.0, "empty cube: half extent is {}", half_extent);
        if !(half_extent > 0.0) {
            return ORIGIN;
        }
        let x = self.rng.gen_range(-half_extent..half_extent);
        let y = self.rng.gen_range(-half_extent..half_extent);
        let z = self.rng.gen_range(-half_extent..half_extent);
        Point3::new(x, y, z)
    }
}

/// Replays a fixed list of points, wrapping around when exhausted.
/// The requested extent is ignored; an empty list yields the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedPoints {
    points: Vec<Point3>,
    cursor: usize,
}

impl ScriptedPoints {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points, cursor: 0 }
    }

    /// Number of points handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl PointSource for ScriptedPoints {
    fn next_point(&mut self, _half_extent: Float) -> Point3 {
        if self.points.is_empty() {
            return ORIGIN;
        }
        let point = self.points[self.cursor % self.points.len()];
        self.cursor += 1;
        point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_points_stay_in_cube() {
        let mut source = RandomPoints::new(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let point = source.next_point(CONTROL_EXTENT);
            for axis in point.into_array() {
                assert!(axis >= -CONTROL_EXTENT && axis < CONTROL_EXTENT);
            }
        }
    }

    #[test]
    fn same_seed_same_points() {
        let mut a = RandomPoints::new(StdRng::seed_from_u64(42));
        let mut b = RandomPoints::new(StdRng::seed_from_u64(42));
        for _ in 0..16 {
            assert_eq!(a.next_point(ENDPOINT_EXTENT), b.next_point(ENDPOINT_EXTENT));
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "empty cube")]
    fn zero_extent_is_a_bug() {
        RandomPoints::new(StdRng::seed_from_u64(1)).next_point(0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "empty cube")]
    fn nan_extent_is_a_bug() {
        RandomPoints::new(StdRng::seed_from_u64(1)).next_point(Float::NAN);
    }

    #[test]
    fn scripted_points_wrap() {
        let one = Point3::new(1.0, 0.0, 0.0);
        let two = Point3::new(0.0, 2.0, 0.0);
        let mut source = ScriptedPoints::new(vec![one, two]);
        assert_eq!(source.next_point(5.0), one);
        assert_eq!(source.next_point(4.0), two);
        assert_eq!(source.next_point(5.0), one);
        assert_eq!(source.drawn(), 3);

        let mut empty = ScriptedPoints::new(vec![]);
        assert_eq!(empty.next_point(5.0), ORIGIN);
    }
}
