use crate::consts::{DRAWING_STEP, SAMPLE_EPSILON};
use crate::coordinate::Coordinate;
use crate::decasteljau::point_at_with;
use crate::error::{require_control_points, require_finite, BezierError, BezierResult};
use crate::point::Point2D;

/// Lazily evaluated points along a curve for `t` running over a closed range.
///
/// Samples sit at `start_t + i * step`, except the last one which is always exactly `end_t`.
/// A clone carries on from wherever the original had got to; [`PathSamples::restart`] rewinds to
/// the first sample.
#[derive(Clone, Debug)]
pub struct PathSamples<'a, C = Point2D> {
    points: &'a [C],
    start_t: f64,
    end_t: f64,
    step: f64,
    len: usize,
    index: usize,
    scratch: Vec<C>,
}

/// Samples the curve defined by `points` from `start_t` through `end_t`, `step` apart.
///
/// Yields `floor((end_t - start_t) / step) + 1` points, or none at all when `end_t < start_t`.
/// A ratio that falls short of a whole number only by float rounding (a relative 1e-12) counts
/// as that whole number, so `0.0..=0.7` by `0.1` gives 8 samples.
pub fn sample_path<C: Coordinate>(points: &[C], start_t: f64, end_t: f64, step: f64) -> BezierResult<PathSamples<'_, C>> {
    require_control_points(points.len(), "sample_path")?;
    require_finite(start_t, "start_t")?;
    require_finite(end_t, "end_t")?;
    require_finite(step, "step")?;
    if step <= 0. {
        return Err(BezierError::InvalidParameter {
            parameter: "step",
            message: format!("must be positive, got {}", step),
        });
    }

    let len = sample_count(start_t, end_t, step);
    log::trace!("sampling {} control points over [{}, {}] by {}: {} samples", points.len(), start_t, end_t, step, len);

    Ok(PathSamples {
        points,
        start_t,
        end_t,
        step,
        len,
        index: 0,
        scratch: Vec::with_capacity(points.len()),
    })
}

/// [`sample_path`] at the default [`DRAWING_STEP`].
pub fn sample_path_default<C: Coordinate>(points: &[C], start_t: f64, end_t: f64) -> BezierResult<PathSamples<'_, C>> {
    sample_path(points, start_t, end_t, DRAWING_STEP)
}

fn sample_count(start_t: f64, end_t: f64, step: f64) -> usize {
    if end_t < start_t {
        return 0;
    }
    // Float to int casts saturate, so a step too small to count in a usize just means "a lot".
    let ratio = (end_t - start_t) / step;
    let whole_steps = (ratio + ratio * SAMPLE_EPSILON).floor() as usize;
    whole_steps.saturating_add(1)
}

impl<'a, C: Coordinate> PathSamples<'a, C> {
    /// Parameter value of the `index`th sample.
    pub fn t_at(&self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        if index == self.len - 1 {
            return Some(self.end_t);
        }
        Some(self.start_t + index as f64 * self.step)
    }

    pub fn restart(&mut self) {
        self.index = 0;
    }
}

impl<'a, C: Coordinate> Iterator for PathSamples<'a, C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        let t = self.t_at(self.index)?;
        self.index += 1;
        Some(point_at_with(self.points, t, &mut self.scratch))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, C: Coordinate> ExactSizeIterator for PathSamples<'a, C> {}

/// A polyline through `points`, ready to hand to a kurbo based renderer.
#[cfg(feature = "kurbo")]
pub fn to_bez_path(points: &[Point2D]) -> kurbo::BezPath {
    let mut path = kurbo::BezPath::new();
    let mut points = points.iter();
    if let Some(first) = points.next() {
        path.move_to(*first);
        for p in points {
            path.line_to(*p);
        }
    }
    path
}
