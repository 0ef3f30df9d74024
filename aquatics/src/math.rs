//! Math aliases shared across the workspace.

pub type Vec3f = bevy_math::Vec3;
pub type Quatf = bevy_math::Quat;
