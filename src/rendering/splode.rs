use crate::basic::Point;
use crate::ease::slurp;

// tiles beyond this distance from the origin get a negative exponent,
// which inverts the effect instead of flattening it further
const FALLOFF_RADIUS: f32 = 500.;
const MAX_SCALE: f32 = 1.2;

/// Scale factor applied to a tile's center (not its size) for the
/// radial breathing effect. At the origin the exponent is 1 and the
/// factor reduces to exactly `slurp(1, 1.2, splode_amt)`; with
/// distance the exponent shrinks toward 0, so far tiles snap out
/// early and linger at full extension while near tiles track the raw
/// amount.
pub fn splode_factor(center: Point, splode_amt: f32) -> f32 {
    let dist_amt = 1. - center.magnitude2() / (FALLOFF_RADIUS * FALLOFF_RADIUS);
    let adjusted = splode_amt.powf(dist_amt);
    slurp(1., MAX_SCALE, adjusted)
}

#[test]
fn test_splode_at_origin() {
    for &amt in &[0., 0.25, 0.5, 1.] {
        assert_eq!(splode_factor(Point::ORIGIN, amt), slurp(1., MAX_SCALE, amt));
    }
}

#[test]
fn test_splode_response_sharpens_with_distance() {
    // at mid amplitude a far tile is already close to full extension
    let near = splode_factor(Point { x: 40., y: 0. }, 0.5);
    let far = splode_factor(Point { x: 400., y: 0. }, 0.5);
    assert!(far > near, "near {} far {}", near, far);
    assert!((1. ..=1.2).contains(&near));
    assert!((1. ..=1.2).contains(&far));
}

#[test]
fn test_splode_idle_at_zero_amt() {
    // inside the falloff radius a resting field is not displaced
    assert_eq!(splode_factor(Point { x: 100., y: 100. }, 0.), 1.);
    // and fully extended tiles scale by exactly the max factor
    assert_eq!(splode_factor(Point { x: 100., y: 100. }, 1.), MAX_SCALE);
}
