use super::Point2D;
use flo_curves::{Coordinate, Coordinate2D};

// Lets a Point2D stand in wherever flo_curves expects a coordinate, e.g. `Curve<Point2D>`.
impl Coordinate2D for Point2D {
    #[inline]
    fn x(&self) -> f64 { self.x }

    #[inline]
    fn y(&self) -> f64 { self.y }
}

impl Coordinate for Point2D {
    fn from_components(components: &[f64]) -> Point2D {
        Point2D::from_components(components[0], components[1])
    }

    fn origin() -> Point2D {
        Point2D::default()
    }

    fn len() -> usize { 2 }

    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.x,
            1 => self.y,
            _ => panic!("Point2D has no component {}", index)
        }
    }

    fn from_biggest_components(p1: Point2D, p2: Point2D) -> Point2D {
        Point2D::from_components(p1.x.max(p2.x), p1.y.max(p2.y))
    }

    fn from_smallest_components(p1: Point2D, p2: Point2D) -> Point2D {
        Point2D::from_components(p1.x.min(p2.x), p1.y.min(p2.y))
    }

    fn distance_to(&self, target: &Point2D) -> f64 {
        self.distance(*target)
    }

    fn dot(&self, target: &Self) -> f64 {
        self.x * target.x + self.y * target.y
    }
}
