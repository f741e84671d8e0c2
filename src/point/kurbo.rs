use super::Point2D;
use crate::segment::LineSegment;

impl From<Point2D> for kurbo::Point {
    fn from(p: Point2D) -> Self {
        kurbo::Point::new(p.x, p.y)
    }
}

impl From<kurbo::Point> for Point2D {
    fn from(p: kurbo::Point) -> Self {
        Point2D::from_components(p.x, p.y)
    }
}

impl From<LineSegment<Point2D>> for kurbo::Line {
    fn from(segment: LineSegment<Point2D>) -> Self {
        kurbo::Line::new(segment.start, segment.end)
    }
}
