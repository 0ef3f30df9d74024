//! Per-step buoyancy, anisotropic drag and angular settling for one
//! rigid body against a water volume.

mod dynamics;
mod terms;
mod types;

pub use dynamics::{
    accumulate_buoyancy, accumulate_wetness_lift, clamp_speed, dampen_velocity, step_floater,
    step_floater_dbg,
};
pub use types::{BuoyancySummary, FloatStepDebug};
