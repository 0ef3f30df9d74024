use anyhow::Result;
use tracing::{debug, info};

use aquatics::{
    apply_stroke, clamp_speed, integrate, profiles, step_floater_dbg, BodySpec, BodyState,
    FloatStepDebug, FloaterSpec, ForceAccumulator, PropulsionSpec, StrokeOutcome, StrokeTracker,
    Vec3f, WaterOccupancyTracker, WaterVolume, GRAVITY,
};

use crate::config::{Config, Scenario};

/// End-of-run facts logged by main.
#[derive(Debug)]
pub struct Summary {
    pub steps: u32,
    pub final_position: Vec3f,
    pub final_speed: f32,
    pub final_wetness: f32,
    pub distance_travelled: f32,
}

pub fn run(cfg: &Config) -> Result<Summary> {
    let scenario = cfg.scenario()?;
    match scenario {
        Scenario::BoatDrop => {
            info!("Running boat-drop: rowboat released above the surface");
            let rig = Rig::new(
                profiles::rowboat(),
                profiles::rowboat_body(),
                BodyState::at_rest(Vec3f::new(0.0, 1.5, 0.0)),
            );
            Ok(run_rig(cfg, rig, None))
        }
        Scenario::PaddleStrokes => {
            info!("Running paddle-strokes: scripted kayak strokes on a floating rowboat");
            let rig = Rig::new(
                profiles::rowboat(),
                profiles::rowboat_body(),
                BodyState::at_rest(Vec3f::new(0.0, -0.65, 0.0)),
            );
            Ok(run_rig(cfg, rig, Some(Strokes::paddle())))
        }
        Scenario::Swimmer => {
            info!("Running swimmer: hand strokes on a single-point floater");
            let rig = Rig::new(
                profiles::swimmer(),
                profiles::swimmer_body(),
                BodyState::at_rest(Vec3f::new(0.0, -0.6, 0.0)),
            );
            Ok(run_rig(cfg, rig, Some(Strokes::hands())))
        }
    }
}

/// One tracked body with its tuning.
struct Rig {
    floater: FloaterSpec,
    body: BodySpec,
    state: BodyState,
    occupancy: WaterOccupancyTracker,
    was_inside: bool,
}

impl Rig {
    fn new(floater: FloaterSpec, body: BodySpec, state: BodyState) -> Self {
        Self {
            floater,
            body,
            state,
            occupancy: WaterOccupancyTracker::new(),
            was_inside: false,
        }
    }

    /// Synthesize enter/exit events from center-of-mass containment, the
    /// way a host trigger volume would deliver them.
    fn track_occupancy(&mut self, volume: &WaterVolume) {
        let inside = volume.contains(self.body.com_world(&self.state));
        if inside && !self.was_inside {
            self.occupancy.on_enter();
        }
        if !inside && self.was_inside {
            self.occupancy.on_exit();
        }
        self.was_inside = inside;
    }
}

/// Scripted stroke source: sweeps the blade/hand backward relative to
/// the body for `power_steps`, then recovers with the tracker released.
struct Strokes {
    spec: PropulsionSpec,
    tracker: StrokeTracker,
    /// Stroke point at the start of the power phase, body frame.
    start_local: Vec3f,
    local: Vec3f,
    stroke_speed: f32,
    power_steps: u32,
    recovery_steps: u32,
    phase_step: u32,
    alternate_sides: bool,
    cycle: u32,
}

impl Strokes {
    fn paddle() -> Self {
        Self {
            spec: profiles::kayak_paddle(),
            tracker: StrokeTracker::new(),
            start_local: Vec3f::new(0.6, -0.2, 0.5),
            local: Vec3f::ZERO,
            stroke_speed: 1.5,
            power_steps: 40,
            recovery_steps: 20,
            phase_step: 0,
            alternate_sides: true,
            cycle: 0,
        }
    }

    fn hands() -> Self {
        Self {
            spec: profiles::hand_stroke(),
            tracker: StrokeTracker::new(),
            start_local: Vec3f::new(0.3, 0.1, 0.4),
            local: Vec3f::ZERO,
            stroke_speed: 2.0,
            power_steps: 30,
            recovery_steps: 30,
            phase_step: 0,
            alternate_sides: false,
            cycle: 0,
        }
    }

    /// Advance the script one tick and, during the power phase, feed the
    /// sampled stroke into the force model.
    fn tick(
        &mut self,
        body: &BodySpec,
        state: &BodyState,
        dt: f32,
        forces: &mut ForceAccumulator,
    ) {
        let cycle_len = self.power_steps + self.recovery_steps;
        let in_power = self.phase_step < self.power_steps;

        if self.phase_step == 0 {
            self.local = self.start_local;
            if self.alternate_sides && self.cycle % 2 == 1 {
                self.local.x = -self.local.x;
            }
            self.tracker
                .grab(state.position + state.orientation * self.local);
        }

        if in_power {
            self.local.z -= self.stroke_speed * dt;
            let point = state.position + state.orientation * self.local;
            if let Some(stroke_vel) = self.tracker.sample(point, dt, self.spec.smoothing) {
                let result =
                    apply_stroke(&self.spec, body, state, stroke_vel, point, dt, forces);
                if result.outcome != StrokeOutcome::Idle {
                    debug!(
                        outcome = ?result.outcome,
                        force = ?result.force,
                        torque = ?result.torque,
                        "stroke applied"
                    );
                }
            }
        } else if self.phase_step == self.power_steps {
            self.tracker.release();
        }

        self.phase_step += 1;
        if self.phase_step >= cycle_len {
            self.phase_step = 0;
            self.cycle += 1;
        }
    }
}

fn run_rig(cfg: &Config, mut rig: Rig, mut strokes: Option<Strokes>) -> Summary {
    let volume = cfg.water_volume();
    let wetness_spec = cfg.wetness();
    let start = rig.state.position;
    let dt = cfg.dt;
    let mut dbg = FloatStepDebug::default();

    for step in 0..cfg.steps {
        rig.track_occupancy(&volume);
        let wetness = rig.occupancy.update(&wetness_spec, dt);

        let mut forces = ForceAccumulator::default();
        forces.apply_force(Vec3f::new(0.0, -GRAVITY * rig.body.mass, 0.0));

        if let Some(strokes) = strokes.as_mut() {
            strokes.tick(&rig.body, &rig.state, dt, &mut forces);
        }

        step_floater_dbg(
            &rig.floater,
            &rig.body,
            Some(&volume),
            &mut rig.state,
            wetness,
            dt,
            &mut forces,
            Some(&mut dbg),
        );
        integrate(&rig.body, &mut rig.state, &forces, dt);
        clamp_speed(&rig.floater, &mut rig.state);

        if cfg.log_every > 0 && step % cfg.log_every == 0 {
            info!(
                step,
                y = rig.state.position.y,
                speed = rig.state.velocity.length(),
                wetness,
                submerged_points = dbg.buoyancy.submerged_points,
                uplift_n = dbg.buoyancy.uplift_n,
                "tick"
            );
        }
    }

    Summary {
        steps: cfg.steps,
        final_position: rig.state.position,
        final_speed: rig.state.velocity.length(),
        final_wetness: rig.occupancy.wetness(),
        distance_travelled: (rig.state.position - start).length(),
    }
}
