use serde::{Deserialize, Serialize};

use crate::Vec3f;

/// Points closer to the surface than this read as dry, so forces do not
/// chatter on and off exactly at the waterline.
pub const SURFACE_EPSILON: f32 = 0.01;

/// Axis-aligned box standing in for a body of water.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaterVolume {
    pub min: Vec3f,
    pub max: Vec3f,
}

/// Result of a submersion query for a single point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubmersionSample {
    /// Distance below the surface, clamped into `[0, volume_height]` (m).
    pub depth: f32,
    pub submerged: bool,
}

impl WaterVolume {
    pub fn new(min: Vec3f, max: Vec3f) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec3f, size: Vec3f) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Water surface is the top face of the box.
    pub fn surface_height(&self) -> f32 {
        self.max.y
    }

    pub fn volume_height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    pub fn contains(&self, p: Vec3f) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Submersion depth of a world-space point. Pure; points outside the
    /// bounds read as dry rather than erroring.
    pub fn depth_at(&self, point: Vec3f) -> SubmersionSample {
        if !self.contains(point) {
            return SubmersionSample::default();
        }
        let depth = (self.surface_height() - point.y).clamp(0.0, self.volume_height());
        SubmersionSample {
            depth,
            submerged: depth > SURFACE_EPSILON,
        }
    }
}
