use serde::{Deserialize, Serialize};

/// Blend times for the hysteresis-smoothed occupancy signal.
///
/// Entry is deliberately snappier than exit so a body bobbing right at
/// the surface does not flicker between wet and dry. The defaults are
/// empirical tuning, not derived constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WetnessSpec {
    /// Seconds for wetness to fade in after entering water.
    pub enter_blend_time: f32,
    /// Seconds for wetness to fade out after the last exit.
    pub exit_blend_time: f32,
}

impl Default for WetnessSpec {
    fn default() -> Self {
        Self {
            enter_blend_time: 0.20,
            exit_blend_time: 0.40,
        }
    }
}

/// Bell curve over wetness, peaking at half-wet and zero at either
/// extreme. Used to boost vertical damping right at the surface.
pub fn surface_blend(wetness: f32) -> f32 {
    (wetness * (1.0 - wetness) * 4.0).clamp(0.0, 1.0)
}

/// Continuous in-water state for one rigid body, driven by discrete
/// enter/exit overlap events from the host's collision system.
///
/// The overlap counter supports simultaneous overlap with several water
/// volumes; the body only counts as out once the last volume is exited.
/// Wetness converges monotonically toward the target, bounded by
/// `dt / blend_time` per step, so consumers can blend drag and lift by
/// it without discontinuities.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaterOccupancyTracker {
    overlaps: u32,
    wetness: f32,
}

impl WaterOccupancyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter(&mut self) {
        self.overlaps += 1;
    }

    /// Exit events for volumes not currently tracked are a no-op; the
    /// counter never goes negative.
    pub fn on_exit(&mut self) {
        self.overlaps = self.overlaps.saturating_sub(1);
    }

    pub fn overlap_count(&self) -> u32 {
        self.overlaps
    }

    pub fn is_in_water(&self) -> bool {
        self.overlaps > 0
    }

    pub fn wetness(&self) -> f32 {
        self.wetness
    }

    pub fn surface_blend(&self) -> f32 {
        surface_blend(self.wetness)
    }

    /// Advance wetness toward 1 while any overlap holds, toward 0
    /// otherwise. Returns the updated value.
    pub fn update(&mut self, spec: &WetnessSpec, dt: f32) -> f32 {
        if dt <= 0.0 {
            return self.wetness;
        }
        let (target, tau) = if self.overlaps > 0 {
            (1.0, spec.enter_blend_time)
        } else {
            (0.0, spec.exit_blend_time)
        };
        let step = dt / tau.max(1e-4);
        self.wetness = (self.wetness + (target - self.wetness).clamp(-step, step)).clamp(0.0, 1.0);
        self.wetness
    }

    /// Disable path: clears the counter and wetness so a re-enabled body
    /// starts dry with no residual forces.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
