use super::Decomposition;
use crate::coordinate::Coordinate;
use crate::error::{require_control_points, require_finite, BezierResult};
use crate::segment::LineSegment;

/// Runs De Casteljau's algorithm over `points` at `t` and keeps every edge it draws on the way.
///
/// For n control points the result holds n(n-1)/2 segments. Fails with
/// [`BezierError::InvalidInput`](crate::BezierError::InvalidInput) when fewer than two points are
/// given.
pub fn evaluate<C: Coordinate>(points: &[C], t: f64) -> BezierResult<Decomposition<C>> {
    require_control_points(points.len(), "evaluate")?;
    require_finite(t, "t")?;
    assert_finite_points(points);

    let n = points.len();
    let mut segments = Vec::with_capacity(n * (n - 1) / 2);
    let bezier_point = decompose(points, t, &mut segments);

    log::trace!("evaluated {} control points at t={} into {} segments", n, t, segments.len());
    Ok(Decomposition::new(segments, bezier_point, n))
}

/// The curve point alone. Always equal to `evaluate(points, t)?.bezier_point`.
pub fn bezier_point<C: Coordinate>(points: &[C], t: f64) -> BezierResult<C> {
    require_control_points(points.len(), "bezier_point")?;
    require_finite(t, "t")?;
    assert_finite_points(points);

    let mut scratch = Vec::with_capacity(points.len());
    Ok(point_at_with(points, t, &mut scratch))
}

// This level's edges go in before the recursion adds the next level's, which is what keeps the
// segment list level-major.
fn decompose<C: Coordinate>(points: &[C], t: f64, segments: &mut Vec<LineSegment<C>>) -> C {
    if points.len() == 2 {
        let segment = LineSegment::new(points[0], points[1]);
        segments.push(segment);
        return segment.at(t);
    }

    let intermediate: Vec<C> = points
        .windows(2)
        .map(|pair| {
            let segment = LineSegment::new(pair[0], pair[1]);
            segments.push(segment);
            segment.at(t)
        })
        .collect();

    decompose(&intermediate, t, segments)
}

// Same interpolations, in the same order, as `decompose`, but folded in place over one buffer so
// repeated sampling doesn't allocate. `points` must hold at least two entries.
pub(crate) fn point_at_with<C: Coordinate>(points: &[C], t: f64, scratch: &mut Vec<C>) -> C {
    scratch.clear();
    scratch.extend_from_slice(points);

    for level in (1..points.len()).rev() {
        for i in 0..level {
            scratch[i] = scratch[i].lerp(scratch[i + 1], t);
        }
    }

    scratch[0]
}

#[cfg(feature = "strict")]
fn assert_finite_points<C: Coordinate>(points: &[C]) {
    debug_assert!(points.iter().all(|p| p.is_finite()), "non-finite control point in {:?}", points);
}

#[cfg(not(feature = "strict"))]
fn assert_finite_points<C: Coordinate>(_points: &[C]) {}
