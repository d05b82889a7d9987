use core::fmt;
use alloc::vec::Vec;

use crate::config::PathConfig;
use crate::playback::visible_count;
use crate::sampling::{PointSource, CONTROL_EXTENT, ENDPOINT_EXTENT, FIRST_CONTROL_EXTENT};
use crate::tessellation::{Arc, Point3, Tessellation, ORIGIN};

use PathError::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathError {
    NoArcs,
    TooFewSegments,
    OutOfRange,
    UnknownSetting,
    CanvasTooSmall,
}

pub type PathResult<T> = Result<T, PathError>;

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NoArcs => "a path needs at least one arc",
            TooFewSegments => "an arc needs at least two segments",
            OutOfRange => "setting value is outside of its range",
            UnknownSetting => "no setting has this name",
            CanvasTooSmall => "canvas or mask is smaller than the requested size",
        })
    }
}

fn check(arc_count: usize, segments_per_arc: usize) -> PathResult<()> {
    if arc_count < 1 {
        Err(NoArcs)
    } else if segments_per_arc < 2 {
        Err(TooFewSegments)
    } else {
        Ok(())
    }
}

/// Empty vector with room for `count` items when the allocator agrees.
/// The vector still grows on demand when it does not.
fn reserved<T>(count: usize) -> Vec<T> {
    let mut items = Vec::new();
    if items.try_reserve(count).is_err() {
        log::warn!("could not reserve room for {} points up front", count);
    }
    items
}

/// A growing chain of arcs starting at the origin, together
/// with its tessellated curve.
///
/// `endpoints` holds one more point than there are arcs; arc `i` goes
/// from `endpoints[i]` to `endpoints[i + 1]` and bends towards
/// `controls[i]`. Its samples are `curve[i * S..(i + 1) * S]`, where `S`
/// is the segment count the path was generated with.
#[derive(Debug, Clone, PartialEq)]
pub struct PathModel {
    endpoints: Vec<Point3>,
    controls: Vec<Point3>,
    curve: Vec<Point3>,
    segments_per_arc: usize,
}

impl PathModel {
    /// Generates a random path of `arc_count` arcs.
    ///
    /// Nothing is drawn from `source` if the counts are rejected.
    pub fn initialize<S: PointSource + ?Sized>(
        arc_count: usize,
        segments_per_arc: usize,
        source: &mut S,
    ) -> PathResult<Self> {
        check(arc_count, segments_per_arc)?;

        let mut model = Self {
            endpoints: reserved(arc_count.saturating_add(1)),
            controls: reserved(arc_count),
            curve: reserved(arc_count.saturating_mul(segments_per_arc)),
            segments_per_arc,
        };

        model.endpoints.push(ORIGIN);
        let end = source.next_point(ENDPOINT_EXTENT);
        let control = source.next_point(FIRST_CONTROL_EXTENT);
        model.push_arc(control, end);

        for _ in 1..arc_count {
            model.append_arc(source);
        }

        log::debug!(
            "generated path: {} arcs, {} segments per arc, {} curve points",
            model.arc_count(),
            segments_per_arc,
            model.point_count(),
        );

        Ok(model)
    }

    pub fn from_config<S: PointSource + ?Sized>(config: &PathConfig, source: &mut S) -> PathResult<Self> {
        Self::initialize(config.arcs(), config.segments(), source)
    }

    /// Throws the current path away and generates a new one in place.
    /// On error the current path is kept.
    pub fn regenerate<S: PointSource + ?Sized>(
        &mut self,
        arc_count: usize,
        segments_per_arc: usize,
        source: &mut S,
    ) -> PathResult<()> {
        *self = Self::initialize(arc_count, segments_per_arc, source)?;
        Ok(())
    }

    /// Extends the path with one random arc starting at the last endpoint.
    pub fn append_arc<S: PointSource + ?Sized>(&mut self, source: &mut S) {
        let end = source.next_point(ENDPOINT_EXTENT);
        let control = source.next_point(CONTROL_EXTENT);
        self.push_arc(control, end);
        log::trace!("appended arc #{} ending at {:?}", self.arc_count() - 1, end);
    }

    fn push_arc(&mut self, control: Point3, end: Point3) {
        let start = self.last_endpoint();
        let arc = Arc { start, ctrl: control, end };
        let samples = Tessellation::new(arc, self.segments_per_arc);
        self.curve.extend(samples);
        self.endpoints.push(end);
        self.controls.push(control);
    }

    pub fn arc_count(&self) -> usize {
        self.controls.len()
    }

    pub fn segments_per_arc(&self) -> usize {
        self.segments_per_arc
    }

    /// Number of curve points, `arc_count * segments_per_arc`.
    pub fn point_count(&self) -> usize {
        self.curve.len()
    }

    pub fn endpoints(&self) -> &[Point3] {
        &self.endpoints
    }

    pub fn controls(&self) -> &[Point3] {
        &self.controls
    }

    pub fn curve(&self) -> &[Point3] {
        &self.curve
    }

    pub fn last_endpoint(&self) -> Point3 {
        self.endpoints.last().copied().unwrap_or(ORIGIN)
    }

    pub fn arc(&self, i: usize) -> Option<Arc> {
        Some(Arc {
            start: *self.endpoints.get(i)?,
            ctrl: *self.controls.get(i)?,
            end: *self.endpoints.get(i + 1)?,
        })
    }

    pub fn arcs(&self) -> impl ExactSizeIterator<Item = Arc> + '_ {
        self.controls.iter().enumerate().map(|(i, ctrl)| Arc {
            start: self.endpoints[i],
            ctrl: *ctrl,
            end: self.endpoints[i + 1],
        })
    }

    /// Tessellated samples of arc `i`.
    pub fn arc_samples(&self, i: usize) -> Option<&[Point3]> {
        let start = i.checked_mul(self.segments_per_arc)?;
        let stop = start.checked_add(self.segments_per_arc)?;
        self.curve.get(start..stop)
    }

    /// Number of leading curve points to draw after `elapsed` seconds.
    ///
    /// Clamped to the length of this curve, whatever
    /// the configuration says now.
    pub fn visible_count(&self, elapsed: f64, time_multiplier: f64) -> usize {
        visible_count(elapsed, time_multiplier, self.point_count())
    }

    pub fn visible_curve(&self, elapsed: f64, time_multiplier: f64) -> &[Point3] {
        &self.curve[..self.visible_count(elapsed, time_multiplier)]
    }

    pub fn log_path(&self) {
        log::info!(    "| ARC |          START          |         CONTROL         |           END           |");

        for (i, arc) in self.arcs().enumerate() {
            let (sx, sy, sz) = arc.start.into_tuple();
            let (cx, cy, cz) = arc.ctrl.into_tuple();
            let (ex, ey, ez) = arc.end.into_tuple();
            log::info!(
                "| {:^3} | {:>7.3} {:>7.3} {:>7.3} | {:>7.3} {:>7.3} {:>7.3} | {:>7.3} {:>7.3} {:>7.3} |",
                i, sx, sy, sz, cx, cy, cz, ex, ey, ez,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use crate::sampling::{RandomPoints, ScriptedPoints};
    use crate::tessellation::{tessellate_arc, Float};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn p(x: Float, y: Float, z: Float) -> Point3 {
        Point3::new(x, y, z)
    }

    fn seeded(seed: u64) -> RandomPoints<StdRng> {
        RandomPoints::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn sizes_follow_counts() {
        for (arcs, segments) in [(1, 2), (1, 80), (8, 80), (3, 7), (300, 2)] {
            let model = PathModel::initialize(arcs, segments, &mut seeded(1)).unwrap();
            assert_eq!(model.curve().len(), arcs * segments);
            assert_eq!(model.endpoints().len(), arcs + 1);
            assert_eq!(model.controls().len(), arcs);
            assert_eq!(model.arc_count(), arcs);
            assert_eq!(model.endpoints()[0], ORIGIN);
        }
    }

    #[test]
    fn single_arc_scenario() {
        let mut source = ScriptedPoints::new(vec![p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        let model = PathModel::initialize(1, 3, &mut source).unwrap();
        assert_eq!(model.curve(), [ORIGIN, p(0.25, 0.5, 0.0), p(1.0, 0.0, 0.0)]);
        assert_eq!(model.endpoints(), [ORIGIN, p(1.0, 0.0, 0.0)]);
        assert_eq!(model.controls(), [p(0.0, 1.0, 0.0)]);
    }

    #[test]
    fn arcs_join_without_gaps() {
        let model = PathModel::initialize(12, 17, &mut seeded(99)).unwrap();
        let s = model.segments_per_arc();
        for i in 0..model.arc_count() {
            assert_eq!(model.curve()[i * s], model.endpoints()[i]);
            let last = model.curve()[i * s + s - 1];
            assert!(last.distance(model.endpoints()[i + 1]) < 1e-5);
        }
    }

    #[test]
    fn append_is_pure_append() {
        let mut source = seeded(5);
        let mut model = PathModel::initialize(4, 10, &mut source).unwrap();
        let before = model.clone();

        model.append_arc(&mut source);

        assert_eq!(model.arc_count(), before.arc_count() + 1);
        assert_eq!(&model.endpoints()[..5], before.endpoints());
        assert_eq!(&model.controls()[..4], before.controls());
        assert_eq!(&model.curve()[..40], before.curve());
        assert_eq!(model.arc_samples(4).unwrap()[0], before.last_endpoint());
        assert_eq!(model.point_count(), 50);
    }

    #[test]
    fn appended_points_use_their_cubes() {
        let mut source = seeded(11);
        let mut model = PathModel::initialize(1, 4, &mut source).unwrap();
        for _ in 0..200 {
            model.append_arc(&mut source);
        }
        for arc in model.arcs().skip(1) {
            for axis in arc.ctrl.into_array() {
                assert!(axis >= -CONTROL_EXTENT && axis < CONTROL_EXTENT);
            }
            for axis in arc.end.into_array() {
                assert!(axis >= -ENDPOINT_EXTENT && axis < ENDPOINT_EXTENT);
            }
        }
    }

    #[test]
    fn draws_endpoint_before_control() {
        let mut source = ScriptedPoints::new(vec![
            p(1.0, 1.0, 1.0),
            p(2.0, 2.0, 2.0),
            p(3.0, 3.0, 3.0),
            p(4.0, 4.0, 4.0),
        ]);
        let model = PathModel::initialize(2, 5, &mut source).unwrap();
        assert_eq!(model.endpoints(), [ORIGIN, p(1.0, 1.0, 1.0), p(3.0, 3.0, 3.0)]);
        assert_eq!(model.controls(), [p(2.0, 2.0, 2.0), p(4.0, 4.0, 4.0)]);
        assert_eq!(source.drawn(), 4);
    }

    #[test]
    fn rejects_bad_counts_without_drawing() {
        let mut source = ScriptedPoints::new(vec![p(1.0, 0.0, 0.0)]);
        assert_eq!(PathModel::initialize(0, 80, &mut source), Err(NoArcs));
        assert_eq!(PathModel::initialize(8, 1, &mut source), Err(TooFewSegments));
        assert_eq!(PathModel::initialize(8, 0, &mut source), Err(TooFewSegments));
        assert_eq!(source.drawn(), 0);
    }

    #[test]
    fn reservation_tolerates_huge_counts() {
        let huge: Vec<Point3> = reserved(usize::MAX);
        assert!(huge.is_empty());
        assert_eq!(huge.capacity(), 0);

        let small: Vec<Point3> = reserved(17);
        assert!(small.capacity() >= 17);

        // counts that cannot be represented are checked before anything is drawn
        let mut source = ScriptedPoints::new(vec![p(1.0, 0.0, 0.0)]);
        assert_eq!(PathModel::initialize(usize::MAX, 0, &mut source), Err(TooFewSegments));
        assert_eq!(source.drawn(), 0);
    }

    #[test]
    fn failed_regeneration_keeps_path() {
        let mut model = PathModel::initialize(3, 6, &mut seeded(3)).unwrap();
        let before = model.clone();
        assert_eq!(model.regenerate(0, 6, &mut seeded(4)), Err(NoArcs));
        assert_eq!(model, before);

        model.regenerate(2, 9, &mut seeded(4)).unwrap();
        assert_eq!(model.arc_count(), 2);
        assert_eq!(model.point_count(), 18);
    }

    #[test]
    fn arc_accessors_agree() {
        let model = PathModel::initialize(5, 8, &mut seeded(21)).unwrap();
        assert_eq!(model.arcs().len(), 5);
        for (i, arc) in model.arcs().enumerate() {
            assert_eq!(model.arc(i), Some(arc));
            let samples: Vec<Point3> = tessellate_arc(arc, 8).unwrap().collect();
            assert_eq!(model.arc_samples(i).unwrap(), samples.as_slice());
        }
        assert_eq!(model.arc(5), None);
        assert_eq!(model.arc_samples(5), None);
    }

    #[test]
    fn visible_count_uses_generated_counts() {
        let model = PathModel::initialize(1, 15, &mut seeded(0)).unwrap();
        assert_eq!(model.visible_count(2.0, 10.0), 15);
        assert_eq!(model.visible_count(0.0, 10.0), 0);
        assert_eq!(model.visible_count(0.55, 10.0), 5);
        assert_eq!(model.visible_curve(0.55, 10.0), &model.curve()[..5]);
    }
}
