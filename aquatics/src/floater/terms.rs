use crate::Vec3f;

/// Per-step attenuation factor for direct velocity scaling. Floored at
/// zero so an oversized `coeff * dt` stops the component instead of
/// reversing it.
pub(super) fn attenuation(coeff: f32, wetness: f32, dt: f32) -> f32 {
    (1.0 - coeff * wetness * dt).max(0.0)
}

/// Depth-proportional uplift at a float point (N, world up).
pub(super) fn buoyant_lift(float_force: f32, depth: f32, wetness: f32) -> Vec3f {
    Vec3f::Y * (float_force * depth * wetness)
}

/// Force opposing the vertical velocity of a float point (N).
pub(super) fn vertical_damping(vy: f32, factor: f32, wetness: f32) -> Vec3f {
    -Vec3f::Y * (vy * factor * wetness)
}
