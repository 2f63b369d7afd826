use crate::error::{Error, Result};

/// Cyclic animation clock.
///
/// Tracks normalized progress through one animation period; the phase
/// wraps back to 0 every `period` seconds of simulated time.
// INVARIANT: phase is always in [0, 1)
#[derive(Copy, Clone, Debug)]
pub struct Clock {
    phase: f32,
    period: f32,
}

impl Clock {
    pub fn new(period: f32) -> Result<Self> {
        if !period.is_finite() || period <= 0. {
            return Err(Error::invalid_configuration(format!(
                "period must be a positive number of seconds, got {}",
                period
            )));
        }
        Ok(Self { phase: 0., period })
    }

    /// Simulate `dt` seconds passing. Negative `dt` is rejected with
    /// `InvalidArgument`, not clamped.
    pub fn advance(&mut self, dt: f32) -> Result {
        if !dt.is_finite() || dt < 0. {
            return Err(Error::invalid_argument(format!(
                "dt must be a non-negative number of seconds, got {}",
                dt
            )));
        }
        self.phase = (self.phase + dt / self.period) % 1.;
        Ok(())
    }

    pub fn phase(self) -> f32 {
        self.phase
    }

    /// Which half of the cycle the clock is in: 0 for the first half,
    /// 1 for the second.
    pub fn sub_phase(self) -> u8 {
        (self.phase * 2.) as u8
    }

    /// Progress within the current half cycle, resets to 0 at the
    /// start of each half.
    pub fn sub_amt(self) -> f32 {
        (self.phase * 2.) % 1.
    }
}

#[test]
fn test_invalid_period_rejected() {
    assert!(Clock::new(0.).is_err());
    assert!(Clock::new(-1.).is_err());
    assert!(Clock::new(f32::NAN).is_err());
    assert!(Clock::new(f32::INFINITY).is_err());
    assert!(Clock::new(9.).is_ok());
}

#[test]
fn test_negative_dt_rejected() {
    let mut clock = Clock::new(9.).unwrap();
    assert!(clock.advance(-0.001).is_err());
    assert!(clock.advance(f32::NAN).is_err());
    // a failed advance leaves the phase untouched
    assert_eq!(clock.phase(), 0.);
}

#[test]
fn test_small_deltas_match_one_large_delta() {
    let mut many = Clock::new(7.).unwrap();
    let mut one = Clock::new(7.).unwrap();
    for _ in 0..100 {
        many.advance(0.037).unwrap();
    }
    one.advance(3.7).unwrap();
    assert!((many.phase() - one.phase()).abs() < 1e-4);
}

#[test]
fn test_phase_stays_in_range() {
    for &period in &[0.1, 1., 8., 1000.] {
        let mut clock = Clock::new(period).unwrap();
        for &dt in &[0., 0.016, 0.5, 3., 250., 1e6] {
            clock.advance(dt).unwrap();
            assert!(
                (0. ..1.).contains(&clock.phase()),
                "phase {} out of range for period {} after dt {}",
                clock.phase(),
                period,
                dt
            );
        }
    }
}

#[test]
fn test_full_period_wraps_to_zero() {
    let mut clock = Clock::new(8.).unwrap();
    clock.advance(8.).unwrap();
    assert_eq!(clock.phase(), 0.);
}

#[test]
fn test_sub_clock() {
    let mut clock = Clock::new(8.).unwrap();
    assert_eq!(clock.sub_phase(), 0);
    assert_eq!(clock.sub_amt(), 0.);

    clock.advance(2.).unwrap(); // phase 0.25
    assert_eq!(clock.sub_phase(), 0);
    assert!((clock.sub_amt() - 0.5).abs() < 1e-6);

    clock.advance(2.).unwrap(); // phase 0.5, start of the second half
    assert_eq!(clock.sub_phase(), 1);
    assert_eq!(clock.sub_amt(), 0.);

    clock.advance(3.).unwrap(); // phase 0.875
    assert_eq!(clock.sub_phase(), 1);
    assert!((clock.sub_amt() - 0.75).abs() < 1e-6);
}
