use crate::{
    BodySpec, BodyState, ForceAccumulator, PropulsionMode, PropulsionSpec, Vec3f,
    VelocitySmoother,
};

/// Which branch of the stroke model fired this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeOutcome {
    /// Relative stroke speed under the deadzone and no counter-drag
    /// configured; nothing applied.
    Idle,
    /// Blade held still in the water: drag opposing the body's own
    /// velocity at the stroke point.
    CounterDrag,
    /// Propulsive reaction applied.
    Thrust,
}

/// Forces actually delivered by one [`apply_stroke`] call, for host
/// logging and tests.
#[derive(Debug, Clone, Copy)]
pub struct StrokeResult {
    pub outcome: StrokeOutcome,
    pub force: Vec3f,
    /// Torque injected about the center of mass. In coupled mode this is
    /// the implicit lever-arm torque; in decoupled mode the scaled and
    /// clamped explicit one.
    pub torque: Vec3f,
}

impl StrokeResult {
    fn idle() -> Self {
        Self {
            outcome: StrokeOutcome::Idle,
            force: Vec3f::ZERO,
            torque: Vec3f::ZERO,
        }
    }
}

/// Convert a stroke velocity sample into propulsion on the target body.
///
/// The stroke is always taken relative to the body's own velocity at the
/// application point; a hull already moving with the blade produces no
/// thrust. Below the deadzone the optional counter-drag models water
/// resisting a stationary blade.
pub fn apply_stroke(
    spec: &PropulsionSpec,
    body: &BodySpec,
    state: &BodyState,
    stroke_velocity: Vec3f,
    application_point: Vec3f,
    dt: f32,
    forces: &mut ForceAccumulator,
) -> StrokeResult {
    let com = body.com_world(state);
    let point_vel = state.point_velocity(application_point, com);
    let mut rel = stroke_velocity - point_vel;
    if spec.horizontal_only {
        rel.y = 0.0;
    }

    if rel.length_squared() < spec.min_stroke_speed * spec.min_stroke_speed {
        if spec.counter_drag > 0.0 {
            let drag = -point_vel * spec.counter_drag;
            forces.apply_force_at_point(drag, application_point, com);
            return StrokeResult {
                outcome: StrokeOutcome::CounterDrag,
                force: drag,
                torque: (application_point - com).cross(drag),
            };
        }
        return StrokeResult::idle();
    }

    // Reaction opposes the stroke; the lateral body component is reduced
    // so a sideways sweep shoves the hull less than a straight pull.
    let mut local = state.orientation.inverse() * (-rel * spec.force_scale);
    local.x *= spec.sideways_factor;
    let mut force = state.orientation * local;
    if spec.max_thrust > 0.0 {
        let mag = force.length();
        if mag > spec.max_thrust {
            force *= spec.max_thrust / mag;
        }
    }

    let lever = application_point - com;
    match spec.mode {
        PropulsionMode::Coupled => {
            forces.apply_force_at_point(force, application_point, com);
            StrokeResult {
                outcome: StrokeOutcome::Thrust,
                force,
                torque: lever.cross(force),
            }
        }
        PropulsionMode::Decoupled => {
            forces.apply_force(force);
            let torque =
                clamp_angular_step(body, lever.cross(force) * spec.torque_scale, spec, dt);
            forces.apply_torque(torque);
            StrokeResult {
                outcome: StrokeOutcome::Thrust,
                force,
                torque,
            }
        }
    }
}

/// Shrink a torque until the angular-velocity change it would cause this
/// tick fits under `max_angular_step`. Conservative: uses the smallest
/// inertia component.
fn clamp_angular_step(body: &BodySpec, torque: Vec3f, spec: &PropulsionSpec, dt: f32) -> Vec3f {
    if spec.max_angular_step <= 0.0 || dt <= 0.0 {
        return torque;
    }
    let i_min = body
        .inertia
        .x
        .min(body.inertia.y)
        .min(body.inertia.z)
        .max(1e-6);
    let max_torque = spec.max_angular_step * i_min / dt;
    let mag = torque.length();
    if mag > max_torque {
        torque * (max_torque / mag)
    } else {
        torque
    }
}

/// A grabbable stroke point (hand or blade tip) with smoothed velocity.
///
/// Created when the propulsion-capable object is grabbed or enabled and
/// reset on release, so a re-grab never inherits a stale position delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrokeTracker {
    smoother: VelocitySmoother,
    active: bool,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin tracking at the given position with zero initial velocity.
    pub fn grab(&mut self, position: Vec3f) {
        self.smoother.reset();
        self.smoother.seed(position);
        self.active = true;
    }

    pub fn release(&mut self) {
        self.smoother.reset();
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sample the tracked point once per tick. Returns the smoothed
    /// stroke velocity, or `None` while released. Smoothing pulls toward
    /// the history so one fast frame cannot spike the propulsion force.
    pub fn sample(&mut self, position: Vec3f, dt: f32, smoothing: f32) -> Option<Vec3f> {
        if !self.active {
            return None;
        }
        Some(self.smoother.update_toward_history(position, dt, smoothing))
    }
}
