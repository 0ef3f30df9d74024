use serde::{Deserialize, Serialize};

use crate::Vec3f;

/// Buoyancy and damping tunables for one floating rigid body.
///
/// All fields are plain per-body configuration; nothing here changes at
/// runtime. Force-based terms are blended by the caller's wetness, the
/// direct attenuations likewise, so a body fading out of water sheds its
/// water handling gradually.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloaterSpec {
    /// Upward force per metre of submersion, per float point (N/m).
    pub float_force: f32,
    /// Body-frame offsets where buoyancy is sampled independently. An
    /// empty list skips buoyancy and angular settling entirely, which is
    /// a valid out-of-water rig, not an error.
    pub float_points: Vec<Vec3f>,
    /// Per-step velocity attenuation along body forward (+Z).
    pub drag_forward: f32,
    /// Per-step velocity attenuation along body right (+X).
    pub drag_sideways: f32,
    /// Per-step velocity attenuation along body up (+Y).
    pub drag_vertical: f32,
    /// Force opposing vertical point velocity at each submerged float
    /// point (N·s/m).
    pub vertical_damping: f32,
    /// Angular settling about body forward (+Z).
    pub roll_damping: f32,
    /// Angular settling about body right (+X).
    pub pitch_damping: f32,
    /// Angular settling about body up (+Y).
    pub yaw_damping: f32,
    /// Constant wetness-scaled lift at the center of mass (N). Zero
    /// disables; used by rigs that float on occupancy alone, without
    /// depth sampling.
    pub constant_lift: f32,
    /// Extra vertical damping near the surface, as a factor on top of
    /// the base damping. Only affects the constant-lift path.
    pub surface_damping_boost: f32,
    /// Post-integration linear speed cap (m/s). Zero = uncapped.
    pub max_speed: f32,
    /// Cap on upward velocity (m/s). Zero = uncapped.
    pub max_rise_speed: f32,
}

/// How a stroke's reaction is delivered to the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropulsionMode {
    /// Full force at the application point; the host derives torque
    /// implicitly from the lever arm. Can over-rotate on off-center
    /// strokes.
    Coupled,
    /// Force at the center of mass plus a separately scaled explicit
    /// torque, so rotation is tunable independently of thrust.
    Decoupled,
}

/// Stroke-to-force tunables for one propulsion source (paddle blade or
/// bare hand).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PropulsionSpec {
    pub mode: PropulsionMode,
    /// Reaction force per m/s of relative stroke speed (N·s/m).
    pub force_scale: f32,
    /// Scale on the lever-arm torque in decoupled mode. Usually well
    /// below 1 to keep a single stroke from spinning the hull.
    pub torque_scale: f32,
    /// Strokes slower than this (relative to the body) are ignored,
    /// rejecting idle-hand jitter (m/s).
    pub min_stroke_speed: f32,
    /// Below the deadzone, drag opposing the body's own velocity at the
    /// stroke point — water resisting a held-still blade. Zero disables.
    pub counter_drag: f32,
    /// Attenuation of the lateral (body +X) force component; a sideways
    /// sweep shoves the hull less than a straight pull.
    pub sideways_factor: f32,
    /// Zero the vertical component of the relative stroke before
    /// converting it to force.
    pub horizontal_only: bool,
    /// Cap on the reaction force magnitude (N). Zero = uncapped.
    pub max_thrust: f32,
    /// Cap on the angular-velocity change one stroke may inject in a
    /// single tick (rad/s), decoupled mode only. Zero = uncapped.
    pub max_angular_step: f32,
    /// History weight for stroke velocity smoothing, in [0, 1).
    pub smoothing: f32,
}

/// Preset rigs recovered from the source variants, unified as
/// configurations of the one engine.
pub mod profiles {
    use super::*;
    use crate::BodySpec;

    /// Four-point rowboat hull: bow, stern, starboard, port. Forward
    /// glide is cheap, sideways slip is expensive.
    pub fn rowboat() -> FloaterSpec {
        FloaterSpec {
            float_force: 15.0,
            float_points: vec![
                Vec3f::new(0.0, 0.0, 1.0),  // bow
                Vec3f::new(0.0, 0.0, -1.0), // stern
                Vec3f::new(0.5, 0.0, 0.0),  // starboard
                Vec3f::new(-0.5, 0.0, 0.0), // port
            ],
            drag_forward: 0.2,
            drag_sideways: 2.0,
            drag_vertical: 0.0,
            vertical_damping: 0.5,
            roll_damping: 1.0,
            pitch_damping: 0.5,
            yaw_damping: 0.2,
            constant_lift: 0.0,
            surface_damping_boost: 0.0,
            max_speed: 10.0,
            max_rise_speed: 0.0,
        }
    }

    /// Mass properties for the rowboat hull (approx. 1×0.5×2 m box).
    pub fn rowboat_body() -> BodySpec {
        BodySpec {
            mass: 4.0,
            inertia: Vec3f::new(1.42, 1.67, 0.42),
            com_offset: Vec3f::ZERO,
        }
    }

    /// Single-point swimmer: buoyancy sampled at the center of mass,
    /// uniform drag and settling on every axis.
    pub fn swimmer() -> FloaterSpec {
        FloaterSpec {
            float_force: 15.0,
            float_points: vec![Vec3f::ZERO],
            drag_forward: 2.0,
            drag_sideways: 2.0,
            drag_vertical: 0.0,
            vertical_damping: 2.0,
            roll_damping: 2.0,
            pitch_damping: 2.0,
            yaw_damping: 2.0,
            constant_lift: 0.0,
            surface_damping_boost: 0.0,
            max_speed: 10.0,
            max_rise_speed: 0.0,
        }
    }

    pub fn swimmer_body() -> BodySpec {
        BodySpec {
            mass: 1.0,
            inertia: Vec3f::new(0.4, 0.2, 0.4),
            com_offset: Vec3f::ZERO,
        }
    }

    /// Occupancy-only rig: no float points, constant wetness-scaled lift
    /// with surface-boosted damping and a rise-speed cap. Exercises the
    /// "no float points configured" path by design.
    pub fn vr_rig() -> FloaterSpec {
        FloaterSpec {
            float_force: 0.0,
            float_points: vec![],
            drag_forward: 2.0,
            drag_sideways: 2.0,
            drag_vertical: 2.0,
            vertical_damping: 12.0,
            roll_damping: 0.0,
            pitch_damping: 0.0,
            yaw_damping: 0.0,
            constant_lift: 100.0,
            surface_damping_boost: 2.0,
            max_speed: 3.5,
            max_rise_speed: 1.5,
        }
    }

    /// Kayak paddle blade: decoupled reaction with suppressed lateral
    /// shove and counter-drag when the blade is held still in water.
    pub fn kayak_paddle() -> PropulsionSpec {
        PropulsionSpec {
            mode: PropulsionMode::Decoupled,
            force_scale: 15.0,
            torque_scale: 0.35,
            min_stroke_speed: 0.05,
            counter_drag: 50.0,
            sideways_factor: 0.2,
            horizontal_only: false,
            max_thrust: 0.0,
            max_angular_step: 0.02,
            smoothing: 0.2,
        }
    }

    /// Bare-hand swimming stroke: thrust through the center of mass only
    /// (decoupled with zero torque), wider deadzone against jitter.
    pub fn hand_stroke() -> PropulsionSpec {
        PropulsionSpec {
            mode: PropulsionMode::Decoupled,
            force_scale: 3.0,
            torque_scale: 0.0,
            min_stroke_speed: 0.2,
            counter_drag: 0.0,
            sideways_factor: 1.0,
            horizontal_only: false,
            max_thrust: 50.0,
            max_angular_step: 0.0,
            smoothing: 0.2,
        }
    }
}
