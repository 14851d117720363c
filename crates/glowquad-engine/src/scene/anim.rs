//! Per-frame animation steppers.
//!
//! Both steppers advance by a fixed amount each frame, independent of wall
//! time: the loop is unlocked, so the animation rate is whatever the host
//! can iterate. The wrap thresholds are carried over verbatim from the
//! original demo, including its 6.285 stand-in for 2π.

/// Fixed per-frame rotation increment, in radians.
pub const SPIN_STEP: f32 = 0.0002;

/// Rotation wrap threshold (an approximation of 2π, preserved as-is).
pub const SPIN_WRAP: f32 = 6.285;

/// Fixed per-frame translation increment.
pub const DRIFT_STEP: f32 = 0.0001;

/// Translation range: offsets live in `[DRIFT_MIN, DRIFT_MAX)`.
pub const DRIFT_MIN: f32 = -2.0;
pub const DRIFT_MAX: f32 = 2.0;

/// Rotation-angle stepper for the quad's spin about Z.
#[derive(Debug, Copy, Clone, Default)]
pub struct Spin {
    angle: f32,
}

impl Spin {
    pub const fn new() -> Self {
        Self { angle: 0.0 }
    }

    /// Advances by one frame and returns the new angle.
    ///
    /// Resets to 0 the moment the angle exceeds the wrap threshold.
    pub fn advance(&mut self) -> f32 {
        self.angle += SPIN_STEP;
        if self.angle > SPIN_WRAP {
            self.angle = 0.0;
        }
        self.angle
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }
}

/// Horizontal-offset stepper for the quad's drift along X.
#[derive(Debug, Copy, Clone)]
pub struct Drift {
    offset: f32,
}

impl Drift {
    pub const fn new() -> Self {
        Self { offset: DRIFT_MIN }
    }

    /// Advances by one frame and returns the new offset.
    ///
    /// Wraps back to the left edge upon reaching or passing the right edge.
    pub fn advance(&mut self) -> f32 {
        self.offset += DRIFT_STEP;
        if self.offset >= DRIFT_MAX {
            self.offset = DRIFT_MIN;
        }
        self.offset
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl Default for Drift {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── spin ──────────────────────────────────────────────────────────────

    #[test]
    fn spin_stays_in_range_before_reset() {
        let mut spin = Spin::new();
        for _ in 0..100_000 {
            let a = spin.advance();
            assert!((0.0..=SPIN_WRAP).contains(&a));
        }
    }

    #[test]
    fn spin_resets_exactly_when_threshold_exceeded() {
        let mut spin = Spin::new();
        let mut prev = spin.angle();
        // Step until the first reset and check it fires only past the
        // threshold, landing exactly on zero.
        loop {
            let a = spin.advance();
            if a == 0.0 {
                assert!(prev + SPIN_STEP > SPIN_WRAP);
                break;
            }
            prev = a;
        }
    }

    #[test]
    fn spin_accumulates_fixed_steps() {
        let mut spin = Spin::new();
        let n = 1_000;
        let mut last = 0.0;
        for _ in 0..n {
            last = spin.advance();
        }
        // No wrap occurs this early; the angle is N steps of accumulation
        // (within float summation error of N × step).
        assert!((last - n as f32 * SPIN_STEP).abs() < 1e-4);
    }

    // ── drift ─────────────────────────────────────────────────────────────

    #[test]
    fn drift_starts_at_left_edge() {
        assert_eq!(Drift::new().offset(), DRIFT_MIN);
    }

    #[test]
    fn drift_stays_in_half_open_range() {
        let mut drift = Drift::new();
        for _ in 0..100_000 {
            let t = drift.advance();
            assert!((DRIFT_MIN..DRIFT_MAX).contains(&t));
        }
    }

    #[test]
    fn drift_wraps_to_left_edge_at_right_edge() {
        let mut drift = Drift::new();
        loop {
            let t = drift.advance();
            if t == DRIFT_MIN {
                break; // wrapped
            }
            assert!(t < DRIFT_MAX);
        }
        // After the wrap the march starts over from the left edge.
        assert!(drift.advance() > DRIFT_MIN);
    }

    #[test]
    fn drift_accumulates_fixed_steps() {
        let mut drift = Drift::new();
        let n = 1_000;
        let mut last = 0.0;
        for _ in 0..n {
            last = drift.advance();
        }
        // Wider tolerance than the spin test: each step rounds near
        // magnitude 2.0, so summation error grows faster.
        assert!((last - (DRIFT_MIN + n as f32 * DRIFT_STEP)).abs() < 1e-3);
    }
}
