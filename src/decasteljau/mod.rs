mod evaluate;

pub use self::evaluate::{bezier_point, evaluate};
pub(crate) use self::evaluate::point_at_with;

use super::coordinate::Coordinate;
use super::point::Point2D;
use super::segment::LineSegment;

/// Linear interpolation, `(1 - t) * p1 + t * p2`. Every other operation in this crate is built on
/// this one. `t` is not clamped.
pub fn lerp<C: Coordinate>(p1: C, p2: C, t: f64) -> C {
    p1.lerp(p2, t)
}

/// Everything one pass of De Casteljau's algorithm produces at a single `t`.
///
/// [`segments`](Decomposition::segments) is level-major: the n-1 edges between the control points first, in index order,
/// then the n-2 edges between the points interpolated on those, and so on down to the single
/// edge the curve point lies on.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition<C = Point2D> {
    segments: Vec<LineSegment<C>>,
    pub bezier_point: C,
    control_count: usize,
}

impl<C: Coordinate> Decomposition<C> {
    pub(crate) fn new(segments: Vec<LineSegment<C>>, bezier_point: C, control_count: usize) -> Self {
        Decomposition { segments, bezier_point, control_count }
    }

    pub fn segments(&self) -> &[LineSegment<C>] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<LineSegment<C>> {
        self.segments
    }

    /// Number of control points this decomposition was built from.
    pub fn control_count(&self) -> usize {
        self.control_count
    }

    /// Number of construction levels, one per interpolation pass.
    pub fn depth(&self) -> usize {
        self.control_count - 1
    }

    /// Segments grouped by level, in construction order.
    pub fn levels(&self) -> Levels<'_, C> {
        Levels {
            rest: &self.segments,
            width: self.control_count - 1,
        }
    }

    /// Both ends of every segment, in segment order. Interior points show up twice, once as the
    /// end of one edge and once as the start of the next.
    pub fn segment_points(&self) -> impl Iterator<Item = C> + '_ {
        self.segments.iter().flat_map(|s| s.endpoints())
    }
}

#[derive(Clone, Debug)]
pub struct Levels<'a, C> {
    rest: &'a [LineSegment<C>],
    width: usize,
}

impl<'a, C> Iterator for Levels<'a, C> {
    type Item = &'a [LineSegment<C>];

    fn next(&mut self) -> Option<Self::Item> {
        if self.width == 0 || self.rest.len() < self.width {
            return None;
        }
        let (level, rest) = self.rest.split_at(self.width);
        self.rest = rest;
        self.width -= 1;
        Some(level)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.width, Some(self.width))
    }
}

impl<'a, C> ExactSizeIterator for Levels<'a, C> {}
