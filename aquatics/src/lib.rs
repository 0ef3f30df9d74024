//! Buoyancy and aquatic propulsion for rigid bodies in bounded water
//! volumes.
//!
//! This crate intentionally avoids owning any body state beyond its own
//! trackers. It reads pose/velocity from the host physics engine, writes
//! velocity back only for direct attenuation and clamping, and submits
//! force/torque contributions through a [`ForceAccumulator`] for the host
//! to integrate once per fixed step.

mod math;
pub use math::{Quatf, Vec3f};

mod body;
pub use body::{integrate, BodySpec, BodyState, ForceAccumulator, GRAVITY};

mod volume;
pub use volume::{SubmersionSample, WaterVolume, SURFACE_EPSILON};

mod smoothing;
pub use smoothing::{VelocitySmoother, MIN_DT};

mod wetness;
pub use wetness::{surface_blend, WaterOccupancyTracker, WetnessSpec};

mod tuning;
pub use tuning::profiles;
pub use tuning::{FloaterSpec, PropulsionMode, PropulsionSpec};

pub mod floater;
pub use floater::{
    accumulate_buoyancy, accumulate_wetness_lift, clamp_speed, dampen_velocity, step_floater,
    step_floater_dbg, BuoyancySummary, FloatStepDebug,
};

mod propulsion;
pub use propulsion::{apply_stroke, StrokeOutcome, StrokeResult, StrokeTracker};
