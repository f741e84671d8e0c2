use super::coordinate::Coordinate;
use super::point::Point2D;

/// One interpolation edge of a De Casteljau construction, drawn from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment<C = Point2D> {
    pub start: C,
    pub end: C,
}

impl<C: Coordinate> LineSegment<C> {
    pub fn new(start: C, end: C) -> Self {
        LineSegment { start, end }
    }

    /// The point `t` of the way from `start` to `end`.
    pub fn at(&self, t: f64) -> C {
        self.start.lerp(self.end, t)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn reversed(&self) -> Self {
        LineSegment::new(self.end, self.start)
    }

    pub fn endpoints(&self) -> [C; 2] {
        [self.start, self.end]
    }
}

impl<C: Coordinate> From<(C, C)> for LineSegment<C> {
    fn from((start, end): (C, C)) -> Self {
        LineSegment::new(start, end)
    }
}
