//! Shaping functions applied to linear animation progress.

/// Rational ease-in-out: slow at both ends, fast in the middle.
/// `power` controls how sharp the middle section is (higher power =
/// flatter start and end). Maps 0 to 0, 1 to 1, 0.5 to 0.5.
pub fn ease_in_out(t: f32, power: f32) -> f32 {
    let tp = t.powf(power);
    tp / (tp + (1. - t).powf(power))
}

/// Unclamped lerp, extrapolates for t outside [0, 1].
pub fn slurp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Triangle wave over one cycle: rises 0 to 1 over the first half,
/// falls back to 0 over the second.
pub fn loop_amt(t: f32) -> f32 {
    1. - (1. - 2. * t).abs()
}

#[test]
fn test_ease_in_out_endpoints() {
    for &power in &[1., 2., 3., 5., 10.] {
        assert_eq!(ease_in_out(0., power), 0., "power {}", power);
        assert_eq!(ease_in_out(1., power), 1., "power {}", power);
        assert!((ease_in_out(0.5, power) - 0.5).abs() < 1e-6, "power {}", power);
    }
}

#[test]
fn test_ease_in_out_monotonic() {
    for &power in &[1., 2., 3., 5.] {
        let mut prev = 0.;
        for i in 1..=100 {
            let eased = ease_in_out(i as f32 / 100., power);
            assert!(eased >= prev, "not monotonic at {} for power {}", i, power);
            prev = eased;
        }
    }
}

#[test]
fn test_ease_in_out_symmetric_about_half() {
    for &power in &[2., 3., 7.] {
        for i in 0..=50 {
            let t = i as f32 / 100.;
            let sum = ease_in_out(t, power) + ease_in_out(1. - t, power);
            assert!((sum - 1.).abs() < 1e-5, "t {} power {}", t, power);
        }
    }
}

#[test]
fn test_slurp() {
    assert_eq!(slurp(1., 1.2, 0.), 1.);
    assert!((slurp(1., 1.2, 1.) - 1.2).abs() < 1e-6);
    assert!((slurp(1., 1.2, 0.5) - 1.1).abs() < 1e-6);
    // extrapolates, no clamping
    assert!((slurp(0., 10., 1.5) - 15.).abs() < 1e-5);
    assert!((slurp(0., 10., -0.5) + 5.).abs() < 1e-5);
}

#[test]
fn test_loop_amt() {
    assert_eq!(loop_amt(0.), 0.);
    assert_eq!(loop_amt(0.5), 1.);
    assert!(loop_amt(1.).abs() < 1e-6);
    assert!((loop_amt(0.25) - 0.5).abs() < 1e-6);

    // symmetric: the wave falls the same way it rose
    for i in 0..=100 {
        let t = i as f32 / 100.;
        assert!((loop_amt(t) - loop_amt(1. - t)).abs() < 1e-6, "t {}", t);
    }
}
