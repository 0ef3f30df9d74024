use crate::Vec3f;

/// Floor for step intervals when deriving velocity from position deltas.
/// Keeps a collapsed tick from blowing a delta up toward infinity.
pub const MIN_DT: f32 = 1e-5;

/// Exponential smoothing of a sampled point's velocity across physics
/// steps, used for hands and paddle tips.
///
/// Two blend directions are exposed and each call site picks one
/// explicitly: pulling toward the new sample tracks quickly (drag feel),
/// pulling toward the history resists single-step spikes (propulsion
/// feel).
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocitySmoother {
    last_position: Option<Vec3f>,
    smoothed: Vec3f,
}

impl VelocitySmoother {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prime the position history on attach; the first subsequent update
    /// then measures a real delta instead of a teleport.
    pub fn seed(&mut self, position: Vec3f) {
        self.last_position = Some(position);
        self.smoothed = Vec3f::ZERO;
    }

    /// Clear all history. The next update reports zero instantaneous
    /// velocity (no prior sample).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn velocity(&self) -> Vec3f {
        self.smoothed
    }

    fn instant(&mut self, position: Vec3f, dt: f32) -> Vec3f {
        let v = match self.last_position {
            Some(prev) => (position - prev) / dt.max(MIN_DT),
            None => Vec3f::ZERO,
        };
        self.last_position = Some(position);
        v
    }

    /// Blend toward the new sample: `smoothed = lerp(smoothed, instant, alpha)`.
    /// Higher `alpha` tracks faster.
    pub fn update_toward_sample(&mut self, position: Vec3f, dt: f32, alpha: f32) -> Vec3f {
        let instant = self.instant(position, dt);
        self.smoothed = self.smoothed.lerp(instant, alpha.clamp(0.0, 1.0));
        self.smoothed
    }

    /// Blend toward the history: `smoothed = lerp(instant, smoothed, alpha)`.
    /// Higher `alpha` is stickier; one fast frame cannot spike the output.
    pub fn update_toward_history(&mut self, position: Vec3f, dt: f32, alpha: f32) -> Vec3f {
        let instant = self.instant(position, dt);
        self.smoothed = instant.lerp(self.smoothed, alpha.clamp(0.0, 1.0));
        self.smoothed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn first_update_without_seed_reports_zero() {
        let mut s = VelocitySmoother::new();
        let v = s.update_toward_sample(Vec3f::new(5.0, 0.0, 0.0), DT, 1.0);
        assert_eq!(v, Vec3f::ZERO);
    }

    #[test]
    fn seeded_update_measures_the_delta() {
        let mut s = VelocitySmoother::new();
        s.seed(Vec3f::ZERO);
        let v = s.update_toward_sample(Vec3f::new(1.0, 0.0, 0.0), 0.5, 1.0);
        assert!((v.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn collapsed_dt_is_floored_not_infinite() {
        let mut s = VelocitySmoother::new();
        s.seed(Vec3f::ZERO);
        let v = s.update_toward_sample(Vec3f::new(0.001, 0.0, 0.0), 0.0, 1.0);
        assert!(v.x.is_finite());
        assert!((v.x - 0.001 / MIN_DT).abs() < 1.0);
    }

    #[test]
    fn toward_history_damps_a_single_spike() {
        let mut s = VelocitySmoother::new();
        s.seed(Vec3f::ZERO);
        // One frame of 6 m/s after a standing start, history weight 0.8
        let v = s.update_toward_history(Vec3f::new(0.1, 0.0, 0.0), DT, 0.8);
        let instant = 0.1 / DT;
        assert!((v.x - 0.2 * instant).abs() < 1e-3);
    }

    #[test]
    fn toward_sample_tracks_faster_than_toward_history() {
        let mut a = VelocitySmoother::new();
        let mut b = VelocitySmoother::new();
        a.seed(Vec3f::ZERO);
        b.seed(Vec3f::ZERO);
        let va = a.update_toward_sample(Vec3f::new(0.1, 0.0, 0.0), DT, 0.8);
        let vb = b.update_toward_history(Vec3f::new(0.1, 0.0, 0.0), DT, 0.8);
        assert!(va.x > vb.x);
    }

    #[test]
    fn reset_clears_history() {
        let mut s = VelocitySmoother::new();
        s.seed(Vec3f::ZERO);
        s.update_toward_sample(Vec3f::new(1.0, 0.0, 0.0), DT, 1.0);
        s.reset();
        assert_eq!(s.velocity(), Vec3f::ZERO);
        let v = s.update_toward_sample(Vec3f::new(9.0, 0.0, 0.0), DT, 1.0);
        assert_eq!(v, Vec3f::ZERO, "no prior sample after reset");
    }
}
