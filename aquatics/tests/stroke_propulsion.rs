use aquatics::{
    apply_stroke, clamp_speed, dampen_velocity, integrate, profiles, BodyState, ForceAccumulator,
    StrokeOutcome, StrokeTracker, Vec3f,
};

const DT: f32 = 1.0 / 60.0;

/// Scripted paddle strokes drive the rowboat forward: a grab, a sweep of
/// the blade toward the stern, a release, repeated. Mirrors how a host
/// would wire tracker + stroke model + its own integrator together.
#[test]
fn repeated_strokes_propel_the_boat_forward() {
    let floater = profiles::rowboat();
    let paddle = profiles::kayak_paddle();
    let body = profiles::rowboat_body();
    let mut state = BodyState::at_rest(Vec3f::ZERO);
    let mut tracker = StrokeTracker::new();

    let stroke_steps = 40; // ~0.67 s power phase
    let recovery_steps = 20;
    let blade_speed = 1.5; // m/s toward the stern, boat-relative

    for cycle in 0..10 {
        // Blade enters the water beside the hull, alternating sides the
        // way a kayaker actually paddles.
        let side = if cycle % 2 == 0 { 0.6 } else { -0.6 };
        let mut blade_local = Vec3f::new(side, -0.2, 0.5);
        tracker.grab(state.position + state.orientation * blade_local);

        for _ in 0..stroke_steps {
            blade_local.z -= blade_speed * DT;
            let blade_world = state.position + state.orientation * blade_local;
            let stroke_vel = tracker
                .sample(blade_world, DT, paddle.smoothing)
                .expect("blade grabbed");

            let mut forces = ForceAccumulator::default();
            apply_stroke(
                &paddle,
                &body,
                &state,
                stroke_vel,
                blade_world,
                DT,
                &mut forces,
            );
            dampen_velocity(&floater, &mut state, 1.0, DT);
            integrate(&body, &mut state, &forces, DT);
            clamp_speed(&floater, &mut state);
        }

        tracker.release();
        for _ in 0..recovery_steps {
            dampen_velocity(&floater, &mut state, 1.0, DT);
            let forces = ForceAccumulator::default();
            integrate(&body, &mut state, &forces, DT);
            clamp_speed(&floater, &mut state);
        }

        if cycle == 0 {
            assert!(
                state.velocity.z > 0.0,
                "first stroke should already move the boat forward"
            );
        }
    }

    assert!(
        state.position.z > 1.0,
        "ten strokes only moved the boat {} m",
        state.position.z
    );
    assert!(
        state.velocity.length() <= floater.max_speed + 1e-4,
        "speed cap violated"
    );
    // Decoupled propulsion with a low torque scale: the hull may crab a
    // little but must not spin.
    assert!(
        state.ang_vel.length() < 0.5,
        "hull is spinning at {} rad/s",
        state.ang_vel.length()
    );
}

#[test]
fn torque_scale_does_not_change_linear_acceleration() {
    let body = profiles::rowboat_body();
    let stroke = Vec3f::new(0.0, 0.0, -2.0);
    let point = Vec3f::new(0.6, -0.2, 0.5);

    let mut quiet = profiles::kayak_paddle();
    quiet.torque_scale = 0.1;
    quiet.max_angular_step = 0.0;
    let mut spinny = quiet;
    spinny.torque_scale = 0.9;

    let mut state_a = BodyState::at_rest(Vec3f::ZERO);
    let mut state_b = BodyState::at_rest(Vec3f::ZERO);
    for _ in 0..60 {
        for (spec, state) in [(&quiet, &mut state_a), (&spinny, &mut state_b)] {
            let mut forces = ForceAccumulator::default();
            apply_stroke(spec, &body, state, stroke, point, DT, &mut forces);
            // Only integrate the linear part so the states stay comparable.
            state.velocity += forces.force / body.mass * DT;
        }
    }
    assert!(
        (state_a.velocity - state_b.velocity).length() < 1e-5,
        "torque scale leaked into the linear response"
    );
}

#[test]
fn hand_carried_by_the_body_generates_no_thrust() {
    let spec = profiles::hand_stroke();
    let body = profiles::swimmer_body();
    let mut state = BodyState::at_rest(Vec3f::ZERO);
    state.velocity = Vec3f::new(0.0, 0.0, 2.0);

    let hand = Vec3f::new(0.3, 0.0, 0.2);
    let mut forces = ForceAccumulator::default();
    // Hand moving exactly with the body: stroke velocity equals the
    // body's velocity at the hand.
    let result = apply_stroke(
        &spec,
        &body,
        &state,
        state.velocity,
        hand,
        DT,
        &mut forces,
    );
    assert_eq!(result.outcome, StrokeOutcome::Idle);
    assert_eq!(forces.force, Vec3f::ZERO);
}

#[test]
fn held_blade_drags_a_moving_boat() {
    let spec = profiles::kayak_paddle();
    let body = profiles::rowboat_body();
    let mut state = BodyState::at_rest(Vec3f::ZERO);
    state.velocity = Vec3f::new(0.0, 0.0, 3.0);

    let blade = Vec3f::new(0.6, -0.2, 0.5);
    let mut forces = ForceAccumulator::default();
    let result = apply_stroke(
        &spec,
        &body,
        &state,
        state.velocity, // blade held fixed relative to the hull
        blade,
        DT,
        &mut forces,
    );
    assert_eq!(result.outcome, StrokeOutcome::CounterDrag);
    assert!(
        forces.force.z < 0.0,
        "counter-drag must oppose the hull velocity"
    );
    assert!((forces.force.z + 3.0 * spec.counter_drag).abs() < 1e-3);
}
