mod flo;
#[cfg(feature = "kurbo")]
mod kurbo;

use super::coordinate::Coordinate;

/// A position in the caller's coordinate space. Two points are the same point when their
/// coordinates are equal.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

#[macro_export]
macro_rules! point2 {
    ($x: expr, $y: expr) => {
        $crate::point::Point2D { x: $x, y: $y }
    };
}

impl Point2D {
    pub fn from_components(x: f64, y: f64) -> Self
    {
        Point2D { x, y }
    }

    pub fn is_near(self, p1: Point2D, eps: f64) -> bool
    {
        self.x - p1.x <= eps && self.x - p1.x >= -eps &&
        self.y - p1.y <= eps && self.y - p1.y >= -eps
    }

    pub fn is_finite(self) -> bool
    {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn add(self, p1: Point2D) -> Self
    {
        Point2D { x: self.x + p1.x, y: self.y + p1.y }
    }

    pub fn sub(self, p1: Point2D) -> Self
    {
        Point2D { x: self.x - p1.x, y: self.y - p1.y }
    }

    pub fn multiply_scalar(self, s: f64) -> Self
    {
        Point2D { x: self.x * s, y: self.y * s }
    }

    pub fn magnitude(self) -> f64
    {
        f64::sqrt(f64::powi(self.x, 2) + f64::powi(self.y, 2))
    }

    pub fn distance(self, p1: Point2D) -> f64
    {
        let p0 = self;
        f64::sqrt(f64::powi(p1.x - p0.x, 2) + f64::powi(p1.y - p0.y, 2))
    }

    /// `(1 - t) * self + t * p1`, componentwise. `t` outside of 0..=1 extrapolates along the line.
    pub fn lerp(self, p1: Point2D, t: f64) -> Self
    {
        let p0 = self;
        Point2D {
            x: (1. - t) * p0.x + t * p1.x,
            y: (1. - t) * p0.y + t * p1.y
        }
    }
}

impl std::cmp::PartialEq for Point2D {
    fn eq(&self, other: &Self) -> bool {
        return self.x == other.x && self.y == other.y;
    }
}

impl std::ops::Add<Point2D> for Point2D {
    type Output = Point2D;

    fn add(self, p1: Point2D) -> Point2D { return self.add(p1); }
}

impl std::ops::Sub<Point2D> for Point2D {
    type Output = Point2D;

    fn sub(self, p1: Point2D) -> Point2D { return self.sub(p1); }
}

impl std::ops::Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, s: f64) -> Point2D { return self.multiply_scalar(s); }
}

impl std::ops::Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Point2D { Point2D { x: -self.x, y: -self.y } }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D { x, y }
    }
}

impl From<Point2D> for (f64, f64) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

impl Coordinate for Point2D {
    fn magnitude(self) -> f64
    {
        self.magnitude()
    }

    fn distance(self, p1: Self) -> f64
    {
        self.distance(p1)
    }

    fn lerp(self, p1: Self, t: f64) -> Self
    {
        self.lerp(p1, t)
    }

    fn is_finite(self) -> bool
    {
        self.is_finite()
    }
}
