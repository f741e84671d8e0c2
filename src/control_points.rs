use crate::consts::{MAX_CONTROL_POINTS, MIN_CONTROL_POINTS};
use crate::coordinate::Coordinate;
use crate::decasteljau::{self, Decomposition};
use crate::error::{BezierError, BezierResult};
use crate::point::Point2D;
use crate::rect::Rect;
use crate::sampling::{self, PathSamples};

use flo_curves::bezier::{BezierCurveFactory, Curve};

/// An editable, ordered set of control points: the start anchor, any interior points, then the
/// end anchor.
///
/// The first point pushed becomes the start anchor and the second the end anchor. Every later
/// push lands just in front of the end anchor, so the anchors stay at either end of the set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoints<C = Point2D> {
    points: Vec<C>,
    capacity: usize,
}

impl<C: Coordinate> Default for ControlPoints<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coordinate> ControlPoints<C> {
    pub fn new() -> Self {
        ControlPoints {
            points: Vec::new(),
            capacity: MAX_CONTROL_POINTS,
        }
    }

    /// An empty set that holds at most `capacity` points. A curve needs two, so anything smaller
    /// is rejected.
    pub fn with_capacity_limit(capacity: usize) -> BezierResult<Self> {
        if capacity < MIN_CONTROL_POINTS {
            return Err(BezierError::InvalidParameter {
                parameter: "capacity",
                message: format!("must be at least {}, got {}", MIN_CONTROL_POINTS, capacity),
            });
        }
        Ok(ControlPoints {
            points: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Takes `points` as they are, already in curve order.
    pub fn from_points(points: Vec<C>) -> BezierResult<Self> {
        if points.len() > MAX_CONTROL_POINTS {
            return Err(BezierError::CapacityExceeded { capacity: MAX_CONTROL_POINTS });
        }
        Ok(ControlPoints {
            points,
            capacity: MAX_CONTROL_POINTS,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity_limit(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    pub fn as_slice(&self) -> &[C] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<C> {
        self.points.get(index).copied()
    }

    pub fn start(&self) -> Option<C> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<C> {
        if self.points.len() < 2 {
            return None;
        }
        self.points.last().copied()
    }

    /// The points between the two anchors.
    pub fn interior(&self) -> &[C] {
        if self.points.len() <= 2 {
            return &[];
        }
        &self.points[1..self.points.len() - 1]
    }

    /// Adds a point and returns the index it ended up at.
    pub fn push(&mut self, p: C) -> BezierResult<usize> {
        if self.is_full() {
            log::warn!("Ignoring control point {:?}, the set is full ({} points)", p, self.capacity);
            return Err(BezierError::CapacityExceeded { capacity: self.capacity });
        }

        let index = match self.points.len() {
            0 | 1 => self.points.len(),
            n => n - 1,
        };
        self.points.insert(index, p);
        log::debug!("Added control point {:?} at {} ({} total)", p, index, self.points.len());
        Ok(index)
    }

    pub fn move_point(&mut self, index: usize, to: C) -> BezierResult<()> {
        let len = self.points.len();
        let p = self.points.get_mut(index).ok_or(BezierError::IndexOutOfRange { index, len })?;
        *p = to;
        log::debug!("Moved control point {} to {:?}", index, to);
        Ok(())
    }

    pub fn translate_point(&mut self, index: usize, delta: C) -> BezierResult<()> {
        let current = self.get(index).ok_or(BezierError::IndexOutOfRange { index, len: self.points.len() })?;
        self.move_point(index, current + delta)
    }

    pub fn remove(&mut self, index: usize) -> BezierResult<C> {
        if index >= self.points.len() {
            return Err(BezierError::IndexOutOfRange { index, len: self.points.len() });
        }
        let p = self.points.remove(index);
        log::debug!("Removed control point {} ({} left)", index, self.points.len());
        Ok(p)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn evaluate(&self, t: f64) -> BezierResult<Decomposition<C>> {
        decasteljau::evaluate(&self.points, t)
    }

    pub fn bezier_point(&self, t: f64) -> BezierResult<C> {
        decasteljau::bezier_point(&self.points, t)
    }

    pub fn sample_path(&self, start_t: f64, end_t: f64, step: f64) -> BezierResult<PathSamples<'_, C>> {
        sampling::sample_path(&self.points, start_t, end_t, step)
    }
}

impl ControlPoints<Point2D> {
    /// Bounding box of the control polygon, which also bounds the curve.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.points.iter().copied())
    }

    /// The set as a flo_curves cubic, when it holds exactly four points.
    pub fn as_cubic(&self) -> Option<Curve<Point2D>> {
        match self.points.as_slice() {
            &[start, cp1, cp2, end] => Some(Curve::from_points(start, (cp1, cp2), end)),
            _ => None,
        }
    }
}
