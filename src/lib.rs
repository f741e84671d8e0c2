//! De Casteljau's algorithm for Bezier curves of any degree, with every construction step kept
//! around so it can be drawn.
//!
//! ```
//! use casteljau::{evaluate, point2, sample_path};
//!
//! let points = [point2!(0.0, 0.0), point2!(5.0, 10.0), point2!(10.0, 0.0)];
//! let construction = evaluate(&points, 0.5).unwrap();
//! assert_eq!(construction.segments().len(), 3);
//! assert_eq!(construction.bezier_point, point2!(5.0, 5.0));
//!
//! let path: Vec<_> = sample_path(&points, 0.0, 1.0, 0.01).unwrap().collect();
//! assert_eq!(path.len(), 101);
//! ```

pub mod consts;
pub mod construction;
pub mod control_points;
pub mod coordinate;
pub mod decasteljau;
pub mod error;
pub mod point;
pub mod rect;
pub mod sampling;
pub mod segment;

pub use self::construction::{Construction, Frame};
pub use self::control_points::ControlPoints;
pub use self::coordinate::Coordinate;
pub use self::decasteljau::{bezier_point, evaluate, lerp, Decomposition, Levels};
pub use self::error::{BezierError, BezierResult};
pub use self::point::Point2D;
pub use self::rect::Rect;
pub use self::sampling::{sample_path, sample_path_default, PathSamples};
#[cfg(feature = "kurbo")]
pub use self::sampling::to_bez_path;
pub use self::segment::LineSegment;

#[cfg(feature = "kurbo")]
pub use kurbo;
pub use flo_curves;
