use std::cmp::PartialEq;
use std::fmt::Debug;
use std::ops::*;

// Anything we can run De Casteljau's algorithm over. Points in the plane are the usual case, but a
// plain f64 works too and gives us one dimensional curves (easing functions and the like).
pub trait Coordinate: Sized + Copy + Debug + Add<Self, Output = Self> + Sub<Self, Output = Self> + Mul<f64, Output = Self> + PartialEq {
    fn magnitude(self) -> f64;
    fn distance(self, v1: Self) -> f64;
    fn lerp(self, v1: Self, t: f64) -> Self;
    fn is_finite(self) -> bool;
}

impl Coordinate for f64 {
    fn magnitude(self) -> f64 {
        return f64::abs(self);
    }

    fn distance(self, v1: Self) -> f64 {
        return f64::abs(self - v1);
    }

    fn lerp(self, v1: Self, t: f64) -> Self {
        return (1. - t) * self + t * v1;
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
