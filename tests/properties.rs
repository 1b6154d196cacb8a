//! Property tests over whole sessions driven by arbitrary input streams.

use neon_runner::consts::*;
use neon_runner::sim::{GamePhase, Obstacle, Rect, ScriptedRng, Session, TickInput};
use proptest::prelude::*;

fn tick_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), prop::option::of(any::<bool>()), any::<bool>()).prop_map(
        |(jump, crouch, restart)| TickInput {
            jump,
            crouch,
            restart,
        },
    )
}

fn rect() -> impl Strategy<Value = Rect> {
    (-50.0f32..50.0, -50.0f32..50.0, 1.0f32..40.0, 1.0f32..40.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn prop_player_never_sinks_below_ground(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..400),
    ) {
        let mut session = Session::new(seed);
        for input in &inputs {
            session.step(input);
            let player = session.player();
            prop_assert!(player.pos.y <= PLAYER_REST_Y);
            prop_assert_eq!(player.on_ground, player.pos.y == PLAYER_REST_Y);
            // Crouch is only ever pressed on the ground and blocks jumping
            prop_assert!(!player.crouching || player.on_ground);
        }
    }

    #[test]
    fn prop_score_and_speed_advance_while_playing(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..400),
    ) {
        let mut session = Session::new(seed);
        for input in &inputs {
            let before_score = session.difficulty().score;
            let before_speed = session.difficulty().scroll_speed;
            let restarted = input.restart && session.phase() == GamePhase::GameOver;
            let plays_this_tick = restarted || session.phase() == GamePhase::Playing;

            session.step(input);

            let after = session.difficulty();
            if plays_this_tick {
                let base_score = if restarted { 0 } else { before_score };
                let base_speed = if restarted { INITIAL_SCROLL_SPEED } else { before_speed };
                prop_assert_eq!(after.score, base_score + 1);
                prop_assert!(after.scroll_speed > base_speed);
                prop_assert!((after.scroll_speed - base_speed - SCROLL_ACCELERATION).abs() < 1e-4);
            } else {
                prop_assert_eq!(after.score, before_score);
                prop_assert_eq!(after.scroll_speed, before_speed);
            }
        }
    }

    #[test]
    fn prop_high_score_is_max_of_sessions(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..600),
    ) {
        let mut session = Session::new(seed);
        let mut best = 0u64;
        for input in &inputs {
            session.step(input);
            if session.phase() == GamePhase::GameOver {
                best = best.max(session.difficulty().score);
            }
            prop_assert_eq!(session.difficulty().high_score, best);
        }
    }

    #[test]
    fn prop_collision_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn prop_shared_edge_never_collides(a in rect(), h in 1.0f32..40.0, dy in -20.0f32..20.0) {
        let neighbour = Rect::new(a.right(), a.y + dy, 10.0, h);
        prop_assert!(!a.intersects(&neighbour));
        prop_assert!(!neighbour.intersects(&a));
    }

    #[test]
    fn prop_glitch_only_within_duration(seed in any::<u64>(), frames in 1u64..2_000) {
        let mut session = Session::new(seed);
        for _ in 0..frames {
            session.clear_obstacles();
            session.tick();
            let glitch = session.glitch();
            if glitch.active {
                prop_assert!(session.frame() >= glitch.activated_at);
                prop_assert!(session.frame() < glitch.activated_at + GLITCH_DURATION_FRAMES);
            }
        }
    }

    #[test]
    fn prop_live_obstacles_stay_on_field(seed in any::<u64>(), frames in 1u64..1_500) {
        let mut session = Session::new(seed);
        for _ in 0..frames {
            if session.tick().is_some() {
                break;
            }
            for obstacle in session.obstacles() {
                prop_assert!(obstacle.x + obstacle.width >= 0.0);
                prop_assert!(obstacle.x <= FIELD_WIDTH);
                prop_assert!(obstacle.y + obstacle.height <= GROUND_Y + 1e-3);
            }
        }
    }
}

#[test]
fn scripted_generator_replays_identically() {
    let values = vec![0.05, 0.35, 0.65, 0.95, 0.5, 0.25, 0.75];
    let mut a = Session::with_rng(ScriptedRng::new(values.clone()));
    let mut b = Session::with_rng(ScriptedRng::new(values));
    for _ in 0..1_000 {
        assert_eq!(a.tick(), b.tick());
    }
    assert_eq!(a.obstacles(), b.obstacles());
    assert_eq!(a.rng().draws(), b.rng().draws());
}

#[test]
fn jump_and_crouch_are_noops_in_the_air() {
    let mut session = Session::new(77);
    session.request_jump();
    session.tick();
    let vel = session.player().vel_y;

    session.request_jump();
    assert_eq!(session.player().vel_y, vel);
    session.set_crouch(true);
    assert!(!session.player().crouching);
}

#[test]
fn crouched_player_ducks_a_low_flyer() {
    // Flyer bottom dipped into the standing body but above the crouched one
    let low_flyer = Obstacle {
        y: 310.0,
        ..Obstacle::flyer(PLAYER_X, FLYER_LIFT_MIN)
    };
    assert!(low_flyer.rect().bottom() > 322.0);
    assert!(low_flyer.rect().bottom() < 338.0);

    let mut standing = Session::new(5);
    standing.spawn_obstacle(low_flyer.clone());
    assert!(standing.tick().is_some());

    let mut crouched = Session::new(5);
    crouched.set_crouch(true);
    crouched.spawn_obstacle(low_flyer);
    assert!(crouched.tick().is_none());
}
