use approx::assert_relative_eq;
use casteljau::{evaluate, point2, sample_path, sample_path_default, BezierError, Point2D};

fn quadratic() -> [Point2D; 3] {
    [point2!(0.0, 0.0), point2!(5.0, 10.0), point2!(10.0, 0.0)]
}

#[test]
fn unit_range_at_default_step() {
    let points = quadratic();
    let path: Vec<_> = sample_path(&points, 0.0, 1.0, 0.01).unwrap().collect();
    assert_eq!(path.len(), 101);
    assert_eq!(*path.last().unwrap(), evaluate(&points, 1.0).unwrap().bezier_point);
    assert_eq!(path[0], points[0]);

    let default: Vec<_> = sample_path_default(&points, 0.0, 1.0).unwrap().collect();
    assert_eq!(default, path);
}

#[test]
fn linear_at_half_steps() {
    let points = [point2!(0.0, 0.0), point2!(10.0, 0.0)];
    let path: Vec<_> = sample_path(&points, 0.0, 1.0, 0.5).unwrap().collect();
    assert_eq!(path, vec![point2!(0.0, 0.0), point2!(5.0, 0.0), point2!(10.0, 0.0)]);
}

#[test]
fn last_sample_is_pinned_to_end() {
    let points = [point2!(0.0, 0.0), point2!(10.0, 0.0)];
    let samples = sample_path(&points, 0.0, 1.0, 0.3).unwrap();
    let ts: Vec<f64> = (0..samples.len()).map(|i| samples.t_at(i).unwrap()).collect();
    assert_eq!(ts.len(), 4);
    assert_relative_eq!(ts[1], 0.3);
    assert_relative_eq!(ts[2], 0.6);
    assert_eq!(ts[3], 1.0);

    let path: Vec<_> = samples.collect();
    assert_eq!(path[3], point2!(10.0, 0.0));
}

#[test]
fn partial_range_follows_the_parameter() {
    let points = quadratic();
    let path: Vec<_> = sample_path(&points, 0.0, 0.5, 0.01).unwrap().collect();
    assert_eq!(path.len(), 51);
    assert_eq!(*path.last().unwrap(), point2!(5.0, 5.0));
}

#[test]
fn single_point_range() {
    let points = quadratic();
    let path: Vec<_> = sample_path(&points, 0.5, 0.5, 0.01).unwrap().collect();
    assert_eq!(path, vec![point2!(5.0, 5.0)]);
}

#[test]
fn backwards_range_is_empty() {
    let points = quadratic();
    let mut samples = sample_path(&points, 1.0, 0.0, 0.01).unwrap();
    assert_eq!(samples.len(), 0);
    assert!(samples.next().is_none());
}

#[test]
fn samples_are_lazy_and_restartable() {
    let points = quadratic();
    let mut samples = sample_path(&points, 0.0, 1.0, 0.25).unwrap();
    assert_eq!(samples.len(), 5);

    let fresh = samples.clone();
    let first_two: Vec<_> = samples.by_ref().take(2).collect();
    assert_eq!(samples.len(), 3);

    samples.restart();
    let all: Vec<_> = samples.collect();
    assert_eq!(&all[..2], &first_two[..]);
    assert_eq!(fresh.collect::<Vec<_>>(), all);
}

#[test]
fn clone_keeps_position_and_restart_rewinds() {
    let points = [point2!(0.0, 0.0), point2!(10.0, 0.0)];
    let mut samples = sample_path(&points, 0.0, 1.0, 0.25).unwrap();
    assert_eq!(samples.next(), Some(point2!(0.0, 0.0)));
    assert_eq!(samples.next(), Some(point2!(2.5, 0.0)));

    let mut copy = samples.clone();
    assert_eq!(copy.len(), 3);
    assert_eq!(copy.next(), Some(point2!(5.0, 0.0)));
    assert_eq!(samples.len(), 3);

    copy.restart();
    assert_eq!(copy.len(), 5);
    assert_eq!(
        copy.collect::<Vec<_>>(),
        vec![point2!(0.0, 0.0), point2!(2.5, 0.0), point2!(5.0, 0.0), point2!(7.5, 0.0), point2!(10.0, 0.0)]
    );
}

#[test]
fn range_just_short_of_a_step_is_not_rounded_up() {
    let points = [point2!(0.0, 0.0), point2!(10.0, 0.0)];
    let samples = sample_path(&points, 0.0, 0.29999999995, 0.1).unwrap();
    assert_eq!(samples.len(), 3);
    assert_relative_eq!(samples.t_at(1).unwrap(), 0.1);
    assert_eq!(samples.t_at(2), Some(0.29999999995));

    // 0.7 / 0.1 is 6.999999999999999 in floating point.
    assert_eq!(sample_path(&points, 0.0, 0.7, 0.1).unwrap().len(), 8);
}

#[test]
fn samples_lie_on_the_curve() {
    let points = [point2!(0.0, 0.0), point2!(2.0, 8.0), point2!(7.0, 9.0), point2!(10.0, 1.0)];
    let samples = sample_path(&points, 0.0, 1.0, 0.05).unwrap();
    for (i, p) in samples.clone().enumerate() {
        let t = samples.t_at(i).unwrap();
        assert_eq!(p, evaluate(&points, t).unwrap().bezier_point);
    }
}

#[test]
fn polyline_error_shrinks_with_step() {
    // x(t) = 10t here, so the chord midpoint maps straight back to its parameter.
    let points = quadratic();
    let max_error = |step: f64| {
        let path: Vec<_> = sample_path(&points, 0.0, 1.0, step).unwrap().collect();
        let mut worst: f64 = 0.0;
        for pair in path.windows(2) {
            let mid = pair[0].lerp(pair[1], 0.5);
            let on_curve = casteljau::bezier_point(&points, mid.x / 10.0).unwrap();
            worst = worst.max((on_curve.y - mid.y).abs());
        }
        worst
    };
    let coarse = max_error(0.1);
    let fine = max_error(0.01);
    assert!(fine < coarse / 50.0, "coarse {} fine {}", coarse, fine);
}

#[test]
fn invalid_input() {
    let one = [point2!(1.0, 1.0)];
    assert!(matches!(
        sample_path(&one, 0.0, 1.0, 0.01),
        Err(BezierError::InvalidInput { actual: 1, .. })
    ));

    let points = quadratic();
    for &step in [0.0, -0.01, f64::NAN, f64::INFINITY].iter() {
        let err = sample_path(&points, 0.0, 1.0, step).unwrap_err();
        assert!(err.is_invalid_input(), "step {}", step);
    }
    assert!(sample_path(&points, f64::NEG_INFINITY, 1.0, 0.01).is_err());
    assert!(sample_path(&points, 0.0, f64::NAN, 0.01).is_err());
}

#[cfg(feature = "kurbo")]
#[test]
fn polyline_for_kurbo() {
    use casteljau::kurbo::PathEl;

    let points = [point2!(0.0, 0.0), point2!(10.0, 0.0)];
    let path: Vec<_> = sample_path(&points, 0.0, 1.0, 0.5).unwrap().collect();
    let bez = casteljau::to_bez_path(&path);
    let els = bez.elements();
    assert_eq!(els.len(), 3);
    assert_eq!(els[0], PathEl::MoveTo(casteljau::kurbo::Point::new(0.0, 0.0)));
    assert_eq!(els[2], PathEl::LineTo(casteljau::kurbo::Point::new(10.0, 0.0)));

    assert!(casteljau::to_bez_path(&[]).elements().is_empty());
}
