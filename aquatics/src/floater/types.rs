use crate::Vec3f;

/// Totals from one buoyancy accumulation pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuoyancySummary {
    /// Float points that sampled as submerged this step.
    pub submerged_points: u32,
    /// Deepest submersion among the float points (m).
    pub deepest: f32,
    /// Total upward lift accumulated (N).
    pub uplift_n: f32,
    /// Total vertical damping force accumulated (N, signed).
    pub damping_n: f32,
}

/// Per-step telemetry filled by `step_floater_dbg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatStepDebug {
    pub dt: f32,
    pub wetness: f32,
    pub buoyancy: BuoyancySummary,
    /// Constant occupancy lift applied at the center of mass (N).
    pub constant_lift_n: f32,
    // Attenuation before/after, body frame
    pub local_vel_before: Vec3f,
    pub local_vel_after: Vec3f,
    pub local_ang_before: Vec3f,
    pub local_ang_after: Vec3f,
}
