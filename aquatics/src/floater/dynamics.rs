use super::terms;
use super::types::{BuoyancySummary, FloatStepDebug};
use crate::wetness::surface_blend;
use crate::{BodySpec, BodyState, FloaterSpec, ForceAccumulator, Vec3f, WaterVolume};

/// Directional drag and angular settling by direct velocity attenuation.
///
/// Linear velocity is expressed in the body frame, each axis scaled by
/// its own `(1 - coeff * wetness * dt)`, and written back; likewise the
/// roll/pitch/yaw rates. This is not a force: scaling is unconditionally
/// stable where force accumulation is at the mercy of the integrator.
pub fn dampen_velocity(spec: &FloaterSpec, state: &mut BodyState, wetness: f32, dt: f32) {
    if dt <= 0.0 || wetness <= 0.0 {
        return;
    }
    let inv = state.orientation.inverse();

    let mut local = inv * state.velocity;
    local.x *= terms::attenuation(spec.drag_sideways, wetness, dt);
    local.y *= terms::attenuation(spec.drag_vertical, wetness, dt);
    local.z *= terms::attenuation(spec.drag_forward, wetness, dt);
    state.velocity = state.orientation * local;

    // Angular settling only applies to rigs with configured float points.
    if spec.float_points.is_empty() {
        return;
    }
    let mut ang = inv * state.ang_vel;
    ang.x *= terms::attenuation(spec.pitch_damping, wetness, dt);
    ang.y *= terms::attenuation(spec.yaw_damping, wetness, dt);
    ang.z *= terms::attenuation(spec.roll_damping, wetness, dt);
    state.ang_vel = state.orientation * ang;
}

/// Multi-point buoyancy: for every submerged float point, accumulate
/// depth-proportional uplift plus vertical damping at that point. The
/// off-center application perturbs angular momentum through the lever
/// arm, which is what rights a heeled hull.
pub fn accumulate_buoyancy(
    spec: &FloaterSpec,
    body: &BodySpec,
    volume: &WaterVolume,
    state: &BodyState,
    wetness: f32,
    forces: &mut ForceAccumulator,
) -> BuoyancySummary {
    let mut summary = BuoyancySummary::default();
    if wetness <= 0.0 || spec.float_points.is_empty() {
        return summary;
    }
    let com = body.com_world(state);
    for offset in &spec.float_points {
        let point = state.position + state.orientation * *offset;
        let sample = volume.depth_at(point);
        if !sample.submerged {
            continue;
        }
        summary.submerged_points += 1;
        summary.deepest = summary.deepest.max(sample.depth);

        let uplift = terms::buoyant_lift(spec.float_force, sample.depth, wetness);
        forces.apply_force_at_point(uplift, point, com);
        summary.uplift_n += uplift.y;

        let point_vel = state.point_velocity(point, com);
        let damping = terms::vertical_damping(point_vel.y, spec.vertical_damping, wetness);
        forces.apply_force_at_point(damping, point, com);
        summary.damping_n += damping.y;
    }
    summary
}

/// Constant occupancy lift at the center of mass, with vertical damping
/// boosted near the surface (the boost peaks at half-wet and vanishes at
/// either extreme). Returns the lift applied (N). Zero `constant_lift`
/// disables the whole term.
pub fn accumulate_wetness_lift(
    spec: &FloaterSpec,
    state: &BodyState,
    wetness: f32,
    forces: &mut ForceAccumulator,
) -> f32 {
    if spec.constant_lift <= 0.0 || wetness <= 0.0 {
        return 0.0;
    }
    let lift = Vec3f::Y * (spec.constant_lift * wetness);
    forces.apply_force(lift);

    let boost = 1.0 + spec.surface_damping_boost * surface_blend(wetness);
    forces.apply_force(terms::vertical_damping(
        state.velocity.y,
        spec.vertical_damping * boost,
        wetness,
    ));
    lift.y
}

/// Post-integration speed clamp: rescale to `max_speed` preserving
/// direction, then cap upward velocity at `max_rise_speed`. Call after
/// the host has integrated this step's forces.
pub fn clamp_speed(spec: &FloaterSpec, state: &mut BodyState) {
    if spec.max_speed > 0.0 {
        let speed = state.velocity.length();
        if speed > spec.max_speed {
            state.velocity *= spec.max_speed / speed;
        }
    }
    if spec.max_rise_speed > 0.0 && state.velocity.y > spec.max_rise_speed {
        state.velocity.y = spec.max_rise_speed;
    }
}

/// One floater tick: attenuation, then force accumulation. The caller
/// integrates the accumulator and finishes with [`clamp_speed`].
/// A missing water volume skips buoyancy for the tick; the rest of the
/// step still runs.
pub fn step_floater(
    spec: &FloaterSpec,
    body: &BodySpec,
    volume: Option<&WaterVolume>,
    state: &mut BodyState,
    wetness: f32,
    dt: f32,
    forces: &mut ForceAccumulator,
) {
    step_floater_dbg(spec, body, volume, state, wetness, dt, forces, None);
}

/// Variant of [`step_floater`] that fills out an optional telemetry
/// struct.
#[allow(clippy::too_many_arguments)]
pub fn step_floater_dbg(
    spec: &FloaterSpec,
    body: &BodySpec,
    volume: Option<&WaterVolume>,
    state: &mut BodyState,
    wetness: f32,
    dt: f32,
    forces: &mut ForceAccumulator,
    mut dbg: Option<&mut FloatStepDebug>,
) {
    if dt <= 0.0 {
        return;
    }
    let inv = state.orientation.inverse();
    let local_vel_before = inv * state.velocity;
    let local_ang_before = inv * state.ang_vel;

    dampen_velocity(spec, state, wetness, dt);

    let buoyancy = match volume {
        Some(volume) => accumulate_buoyancy(spec, body, volume, state, wetness, forces),
        None => BuoyancySummary::default(),
    };
    let constant_lift_n = accumulate_wetness_lift(spec, state, wetness, forces);

    if let Some(d) = dbg.as_mut() {
        let inv = state.orientation.inverse();
        d.dt = dt;
        d.wetness = wetness;
        d.buoyancy = buoyancy;
        d.constant_lift_n = constant_lift_n;
        d.local_vel_before = local_vel_before;
        d.local_vel_after = inv * state.velocity;
        d.local_ang_before = local_ang_before;
        d.local_ang_after = inv * state.ang_vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{profiles, Quatf};

    fn pool() -> WaterVolume {
        WaterVolume::from_center_size(Vec3f::new(0.0, -2.0, 0.0), Vec3f::new(40.0, 4.0, 40.0))
    }

    #[test]
    fn submerged_point_at_two_metres_accumulates_thirty_newtons() {
        let mut spec = profiles::rowboat();
        spec.float_points = vec![Vec3f::ZERO];
        spec.vertical_damping = 0.0;
        let body = profiles::rowboat_body();
        let state = BodyState::at_rest(Vec3f::new(0.0, -2.0, 0.0));
        let mut forces = ForceAccumulator::default();
        let summary = accumulate_buoyancy(&spec, &body, &pool(), &state, 1.0, &mut forces);
        assert_eq!(summary.submerged_points, 1);
        assert!((forces.force.y - 30.0).abs() < 1e-5);
        assert_eq!(forces.torque, Vec3f::ZERO);
    }

    #[test]
    fn dry_points_accumulate_nothing() {
        let spec = profiles::rowboat();
        let body = profiles::rowboat_body();
        let state = BodyState::at_rest(Vec3f::new(0.0, 5.0, 0.0));
        let mut forces = ForceAccumulator::default();
        let summary = accumulate_buoyancy(&spec, &body, &pool(), &state, 1.0, &mut forces);
        assert_eq!(summary.submerged_points, 0);
        assert_eq!(forces.force, Vec3f::ZERO);
    }

    #[test]
    fn heeled_hull_gets_a_righting_torque() {
        let spec = profiles::rowboat();
        let body = profiles::rowboat_body();
        let mut state = BodyState::at_rest(Vec3f::new(0.0, -0.6, 0.0));
        // Heel 0.3 rad to starboard (roll about forward +Z)
        state.orientation = Quatf::from_rotation_z(-0.3);
        let mut forces = ForceAccumulator::default();
        accumulate_buoyancy(&spec, &body, &pool(), &state, 1.0, &mut forces);
        // Starboard point sits deeper, so its extra lift must roll the
        // hull back toward level (positive torque about +Z).
        assert!(forces.torque.z > 0.0, "torque.z = {}", forces.torque.z);
    }

    #[test]
    fn drag_is_anisotropic_in_the_body_frame() {
        let spec = profiles::rowboat();
        let mut state = BodyState::at_rest(Vec3f::ZERO);
        state.velocity = Vec3f::new(1.0, 0.0, 1.0);
        dampen_velocity(&spec, &mut state, 1.0, 1.0 / 60.0);
        // Sideways (x) bleeds off faster than forward (z)
        assert!(state.velocity.x < state.velocity.z);
        assert!(state.velocity.x > 0.0);
    }

    #[test]
    fn zero_wetness_leaves_velocity_untouched() {
        let spec = profiles::rowboat();
        let mut state = BodyState::at_rest(Vec3f::ZERO);
        state.velocity = Vec3f::new(1.0, 2.0, 3.0);
        dampen_velocity(&spec, &mut state, 0.0, 1.0 / 60.0);
        assert_eq!(state.velocity, Vec3f::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn clamp_preserves_direction() {
        let mut spec = profiles::rowboat();
        spec.max_speed = 2.0;
        let mut state = BodyState::at_rest(Vec3f::ZERO);
        state.velocity = Vec3f::new(6.0, 0.0, 8.0);
        clamp_speed(&spec, &mut state);
        assert!((state.velocity.length() - 2.0).abs() < 1e-5);
        let dir = state.velocity.normalize();
        assert!((dir - Vec3f::new(0.6, 0.0, 0.8)).length() < 1e-5);
    }

    #[test]
    fn rise_speed_cap_only_touches_upward_motion() {
        let spec = profiles::vr_rig();
        let mut state = BodyState::at_rest(Vec3f::ZERO);
        state.velocity = Vec3f::new(0.0, 3.0, 0.0);
        clamp_speed(&spec, &mut state);
        assert!((state.velocity.y - spec.max_rise_speed).abs() < 1e-6);
        state.velocity = Vec3f::new(0.0, -3.0, 0.0);
        clamp_speed(&spec, &mut state);
        assert_eq!(state.velocity.y, -3.0);
    }

    #[test]
    fn missing_volume_still_runs_the_rest_of_the_step() {
        let spec = profiles::rowboat();
        let body = profiles::rowboat_body();
        let mut state = BodyState::at_rest(Vec3f::ZERO);
        state.velocity = Vec3f::new(1.0, 0.0, 0.0);
        let mut forces = ForceAccumulator::default();
        step_floater(&spec, &body, None, &mut state, 1.0, 1.0 / 60.0, &mut forces);
        assert_eq!(forces.force, Vec3f::ZERO);
        assert!(state.velocity.x < 1.0, "drag still applied");
    }

    #[test]
    fn wetness_lift_scales_with_wetness() {
        let spec = profiles::vr_rig();
        let state = BodyState::at_rest(Vec3f::ZERO);
        let mut half = ForceAccumulator::default();
        let mut full = ForceAccumulator::default();
        accumulate_wetness_lift(&spec, &state, 0.5, &mut half);
        accumulate_wetness_lift(&spec, &state, 1.0, &mut full);
        assert!((half.force.y - 50.0).abs() < 1e-4);
        assert!((full.force.y - 100.0).abs() < 1e-4);
    }
}
