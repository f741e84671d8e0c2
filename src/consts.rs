/// Distance between two consecutive parameter values when a curve is sampled into a polyline.
pub const DRAWING_STEP: f64 = 0.01;

/// A curve needs a start and an end anchor.
pub const MIN_CONTROL_POINTS: usize = 2;

/// Largest control point set an interactive construction accepts.
pub const MAX_CONTROL_POINTS: usize = 10;

// Relative slack when counting how many whole steps fit in a parameter range, so that 0.7 / 0.1
// (6.999999999999999) counts as 7 steps. Only ratios within a few ulps of a whole number round up.
pub(crate) const SAMPLE_EPSILON: f64 = 1e-12;
