use serde::{Deserialize, Serialize};

use crate::{Quatf, Vec3f};

/// Standard gravity (m/s²). Hosts that bring their own integrator apply
/// gravity themselves; the reference [`integrate`] leaves it to the caller.
pub const GRAVITY: f32 = 9.81;

/// Mass properties of one simulated rigid body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySpec {
    pub mass: f32,
    /// Diagonal inertia tensor in the body frame (kg·m²).
    pub inertia: Vec3f,
    /// Center-of-mass offset from the body origin, body frame (m).
    pub com_offset: Vec3f,
}

impl BodySpec {
    /// World-space center of mass for the given pose.
    pub fn com_world(&self, state: &BodyState) -> Vec3f {
        state.position + state.orientation * self.com_offset
    }
}

/// Pose and velocity of a rigid body. Owned by the host physics engine;
/// the engine only reads it and writes velocity back for attenuation.
#[derive(Debug, Clone, Copy)]
pub struct BodyState {
    pub position: Vec3f,
    /// Orientation as quaternion (body→world). Body axes follow the
    /// workspace convention: +Z forward, +Y up, +X right.
    pub orientation: Quatf,
    /// Linear velocity in world space (m/s).
    pub velocity: Vec3f,
    /// Angular velocity in world space (rad/s).
    pub ang_vel: Vec3f,
}

impl BodyState {
    pub fn at_rest(position: Vec3f) -> Self {
        Self {
            position,
            orientation: Quatf::IDENTITY,
            velocity: Vec3f::ZERO,
            ang_vel: Vec3f::ZERO,
        }
    }

    /// Velocity of a world-space point riding on the body:
    /// `v + ω × (point − com)`.
    pub fn point_velocity(&self, point_world: Vec3f, com_world: Vec3f) -> Vec3f {
        self.velocity + self.ang_vel.cross(point_world - com_world)
    }
}

/// Force and torque contributions accumulated for one step, expressed
/// about the body's center of mass. The host integrates these; direct
/// velocity attenuation (drag, angular settling) bypasses this path
/// entirely, since the two integrate under different stability limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceAccumulator {
    pub force: Vec3f,
    pub torque: Vec3f,
}

impl ForceAccumulator {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Add a force acting through the center of mass (no torque).
    pub fn apply_force(&mut self, force: Vec3f) {
        self.force += force;
    }

    pub fn apply_torque(&mut self, torque: Vec3f) {
        self.torque += torque;
    }

    /// Add a force at a world-space point; the lever arm from the center
    /// of mass contributes torque.
    pub fn apply_force_at_point(&mut self, force: Vec3f, point: Vec3f, com_world: Vec3f) {
        self.force += force;
        self.torque += (point - com_world).cross(force);
    }
}

/// Reference semi-implicit Euler integrator for hosts that do not bring
/// their own (the simulator and the scenario tests use it). Torque is
/// resolved through the diagonal body-frame inertia.
pub fn integrate(body: &BodySpec, state: &mut BodyState, forces: &ForceAccumulator, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    let mass = body.mass.max(1e-3);
    state.velocity += forces.force / mass * dt;

    // ω̇ = I⁻¹ τ with τ rotated into the body frame
    let tau_body = state.orientation.inverse() * forces.torque;
    let alpha_body = Vec3f::new(
        if body.inertia.x > 0.0 { tau_body.x / body.inertia.x } else { 0.0 },
        if body.inertia.y > 0.0 { tau_body.y / body.inertia.y } else { 0.0 },
        if body.inertia.z > 0.0 { tau_body.z / body.inertia.z } else { 0.0 },
    );
    state.ang_vel += state.orientation * alpha_body * dt;

    state.position += state.velocity * dt;
    let w = state.ang_vel;
    let w_len = w.length();
    if w_len > 1e-8 {
        let delta = Quatf::from_axis_angle(w / w_len, w_len * dt);
        state.orientation = (delta * state.orientation).normalize();
    }
}
