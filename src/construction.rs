//! Headless state behind an interactive De Casteljau demo.
//!
//! A UI owns one [`Construction`], forwards pointer and slider input to it, and redraws whatever
//! [`Construction::frame`] returns after every change. Colors, sizes and screen mapping stay with
//! the UI.

use crate::consts::DRAWING_STEP;
use crate::control_points::ControlPoints;
use crate::decasteljau;
use crate::error::{require_finite, BezierResult};
use crate::point::Point2D;
use crate::sampling;
use crate::segment::LineSegment;

#[derive(Clone, Debug)]
pub struct Construction {
    control_points: ControlPoints,
    t: f64,
    draw_segments: bool,
    draw_path: bool,
}

/// What to draw for the current state.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub bezier_point: Point2D,
    /// Every construction edge at the current `t`; empty when segment drawing is off.
    pub segments: Vec<LineSegment>,
    /// The curve traced from 0 up to the current `t`; empty when path drawing is off.
    pub path: Vec<Point2D>,
}

impl Default for Construction {
    fn default() -> Self {
        Self::new()
    }
}

impl Construction {
    pub fn new() -> Self {
        Construction {
            control_points: ControlPoints::new(),
            t: 0.,
            draw_segments: true,
            draw_path: true,
        }
    }

    pub fn control_points(&self) -> &ControlPoints {
        &self.control_points
    }

    pub fn add_point(&mut self, p: Point2D) -> BezierResult<usize> {
        self.control_points.push(p)
    }

    pub fn move_point(&mut self, index: usize, to: Point2D) -> BezierResult<()> {
        self.control_points.move_point(index, to)
    }

    pub fn drag_point(&mut self, index: usize, delta: Point2D) -> BezierResult<()> {
        self.control_points.translate_point(index, delta)
    }

    pub fn clear(&mut self) {
        log::debug!("Clearing construction ({} points)", self.control_points.len());
        self.control_points.clear();
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    /// Sets the parameter, clamped to 0..=1 the way a slider would be.
    pub fn set_t(&mut self, t: f64) -> BezierResult<()> {
        require_finite(t, "t")?;
        self.t = t.max(0.).min(1.);
        Ok(())
    }

    pub fn draw_segments(&self) -> bool {
        self.draw_segments
    }

    pub fn set_draw_segments(&mut self, on: bool) {
        self.draw_segments = on;
    }

    pub fn draw_path(&self) -> bool {
        self.draw_path
    }

    pub fn set_draw_path(&mut self, on: bool) {
        self.draw_path = on;
    }

    /// Nothing is drawn until there is a start anchor, an end anchor and at least one point
    /// between them.
    pub fn is_drawable(&self) -> bool {
        self.control_points.len() > 2
    }

    /// `Ok(None)` while the construction isn't drawable yet.
    pub fn frame(&self) -> BezierResult<Option<Frame>> {
        if !self.is_drawable() {
            return Ok(None);
        }
        let points = self.control_points.as_slice();

        let decomposition = decasteljau::evaluate(points, self.t)?;
        let bezier_point = decomposition.bezier_point;
        let segments = if self.draw_segments { decomposition.into_segments() } else { Vec::new() };
        let path = if self.draw_path {
            sampling::sample_path(points, 0., self.t, DRAWING_STEP)?.collect()
        } else {
            Vec::new()
        };

        Ok(Some(Frame {
            bezier_point,
            segments,
            path,
        }))
    }
}
