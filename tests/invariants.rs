//! Property tests for the simulation

use glam::Vec2;
use proptest::prelude::*;

use brick_breaker::Tuning;
use brick_breaker::consts::*;
use brick_breaker::sim::collision::{brick_bounce, paddle_bounce};
use brick_breaker::sim::{
    Ball, Difficulty, GameEvent, GamePhase, GameRng, GameState, Paddle, Rect, TickInput, start_game,
    tick,
};

const DT: f32 = 1.0 / 60.0;

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn steering() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>()).prop_map(|(left, right)| TickInput {
        left,
        right,
        ..Default::default()
    })
}

proptest! {
    #[test]
    fn brick_counter_tracks_grid(
        seed in any::<u64>(),
        difficulty in difficulty(),
        inputs in prop::collection::vec(steering(), 1..400),
    ) {
        let mut state = GameState::new(seed);
        start_game(&mut state, difficulty);

        for input in &inputs {
            if state.phase != GamePhase::Playing {
                break;
            }
            tick(&mut state, input, DT);

            prop_assert_eq!(state.active_bricks, state.count_active_bricks());
            let x = state.paddle.rect.x;
            prop_assert!(x >= 0.0 && x <= FIELD_WIDTH - state.paddle.rect.width);

            let cleared = state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::LevelCleared { .. }));
            prop_assert_eq!(cleared, state.phase == GamePhase::YouWin);
            if cleared {
                prop_assert_eq!(state.active_bricks, 0);
            }
        }
    }

    #[test]
    fn autopilot_keeps_invariants(seed in any::<u64>(), frames in 1usize..600) {
        let mut state = GameState::new(seed);
        let input = TickInput { idle_mode: true, ..Default::default() };

        for _ in 0..frames {
            tick(&mut state, &input, DT);
            prop_assert_eq!(state.active_bricks, state.count_active_bricks());
            prop_assert!(state.balls.len() <= MAX_BALLS);
            prop_assert!(state.paddle.rect.width <= PADDLE_MAX_WIDTH);
        }
    }

    #[test]
    fn paddle_bounce_keeps_horizontal_floor(
        seed in any::<u64>(),
        offset in 0.0f32..1.0,
        vx in -8.0f32..8.0,
        vy in 0.5f32..8.0,
        width in 50.0f32..200.0,
    ) {
        let mut rng = GameRng::new(seed);
        let mut paddle = Paddle::default();
        paddle.set_width(width);
        let rect = paddle.rect;

        let pos = Vec2::new(rect.x + offset * rect.width, rect.y - 5.0);
        let mut ball = Ball::new(pos, Vec2::new(vx, vy));
        paddle_bounce(&mut ball, &rect, &Tuning::default(), &mut rng);

        prop_assert!(ball.vel.x.abs() >= MIN_BALL_SPEED_X);
        prop_assert!(ball.vel.y < 0.0);
        prop_assert!(ball.pos.y < rect.y);
    }

    #[test]
    fn brick_bounce_floor_or_untouched(
        seed in any::<u64>(),
        dx in -60.0f32..60.0,
        dy in -30.0f32..30.0,
        vx in -6.0f32..6.0,
        vy in -6.0f32..6.0,
    ) {
        let mut rng = GameRng::new(seed);
        let brick = Rect::new(300.0, 100.0, 79.0, 29.0);
        let mut ball = Ball::new(brick.center() + Vec2::new(dx, dy), Vec2::new(vx, vy));

        match brick_bounce(&mut ball, &brick, &mut rng) {
            Some(_) => prop_assert!(ball.vel.x.abs() >= MIN_BALL_SPEED_X),
            // Separating balls keep their velocity
            None => prop_assert_eq!(ball.vel, Vec2::new(vx, vy)),
        }
    }

    #[test]
    fn free_flight_is_linear(
        seed in any::<u64>(),
        difficulty in difficulty(),
        x in 100.0f32..700.0,
        y in 280.0f32..420.0,
        vx in -6.0f32..6.0,
        vy in -6.0f32..6.0,
    ) {
        let mut state = GameState::new(seed);
        start_game(&mut state, difficulty);
        let start = Vec2::new(x, y);
        let vel = Vec2::new(vx, vy);
        state.balls = vec![Ball::new(start, vel)];

        tick(&mut state, &TickInput::default(), DT);

        let ball = &state.balls[0];
        prop_assert!((ball.pos - (start + vel)).length() < 1e-4);
        prop_assert_eq!(ball.vel, vel);
    }

    #[test]
    fn game_over_is_inert(seed in any::<u64>(), inputs in prop::collection::vec(steering(), 1..50)) {
        let mut state = GameState::new(seed);
        start_game(&mut state, Difficulty::Easy);
        state.lives = 1;
        state.timer = 0.001;
        tick(&mut state, &TickInput::default(), DT);
        prop_assert_eq!(state.phase, GamePhase::GameOver);

        let score = state.score;
        let bricks = state.active_bricks;
        for input in &inputs {
            tick(&mut state, input, DT);
        }
        prop_assert_eq!(state.phase, GamePhase::GameOver);
        prop_assert_eq!(state.score, score);
        prop_assert_eq!(state.active_bricks, bricks);
    }
}
