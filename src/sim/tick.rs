//! Per-frame state machine
//!
//! Routes one frame of input to the menu, the simulation step or the
//! game-over / win banners, and owns every phase transition.

use super::autopilot;
use super::level::setup_level;
use super::state::{Difficulty, GameEvent, GamePhase, GameState};
use super::step::simulate;
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held: move paddle left
    pub left: bool,
    /// Held: move paddle right
    pub right: bool,
    /// Pressed this frame: pause toggle
    pub pause: bool,
    /// Pressed this frame: confirm / enter
    pub confirm: bool,
    /// Pressed this frame: menu cursor up
    pub up: bool,
    /// Pressed this frame: menu cursor down
    pub down: bool,
    /// Pressed this frame: abandon the level and return to the menu
    pub menu: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    let mut input = input.clone();
    if input.idle_mode {
        autopilot::drive(state, &mut input);
    }
    let input = &input;

    match state.phase {
        GamePhase::Menu => update_menu(state, input),
        GamePhase::Playing => update_playing(state, input, dt),
        GamePhase::GameOver => {
            if input.confirm {
                log::info!("Returning to menu after game over");
                state.reset_to_menu();
            }
        }
        GamePhase::YouWin => {
            if input.confirm {
                advance_after_win(state);
            }
        }
    }
}

fn update_menu(state: &mut GameState, input: &TickInput) {
    if input.up {
        state.menu_selection = state.menu_selection.cycle(-1);
    }
    if input.down {
        state.menu_selection = state.menu_selection.cycle(1);
    }
    if input.confirm {
        let difficulty = state.menu_selection;
        start_game(state, difficulty);
    }
}

fn update_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.menu {
        log::info!("Level abandoned, returning to menu");
        state.reset_to_menu();
        return;
    }

    if input.pause {
        state.paused = !state.paused;
        log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
    }
    if state.paused {
        return;
    }

    simulate(state, input, dt);
}

/// Fresh run at the chosen difficulty
pub fn start_game(state: &mut GameState, difficulty: Difficulty) {
    state.reset_to_menu();
    state.score = 0;
    state.lives = STARTING_LIVES;
    state.level = 1;
    begin_level(state, difficulty);
}

/// Next tier after a win, or back to the menu once Hard is cleared
fn advance_after_win(state: &mut GameState) {
    match state.difficulty.next() {
        Some(next) => {
            state.level += 1;
            state.score += LEVEL_BONUS;
            begin_level(state, next);
        }
        None => {
            log::info!("Final level cleared with score {}", state.score);
            state.reset_to_menu();
        }
    }
}

fn begin_level(state: &mut GameState, difficulty: Difficulty) {
    setup_level(state, difficulty);
    state.phase = GamePhase::Playing;
    state.push_event(GameEvent::LevelStarted {
        level: state.level,
        difficulty,
    });
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::state::Ball;

    const DT: f32 = 1.0 / 60.0;

    fn press(f: impl FnOnce(&mut TickInput)) -> TickInput {
        let mut input = TickInput::default();
        f(&mut input);
        input
    }

    fn started(difficulty: Difficulty) -> GameState {
        let mut state = GameState::new(12345);
        start_game(&mut state, difficulty);
        state
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &press(|i| i.up = true), DT);
        assert_eq!(state.menu_selection, Difficulty::Hard);
        tick(&mut state, &press(|i| i.down = true), DT);
        assert_eq!(state.menu_selection, Difficulty::Easy);
        tick(&mut state, &press(|i| i.down = true), DT);
        assert_eq!(state.menu_selection, Difficulty::Medium);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_menu_confirm_starts_selected_difficulty() {
        let mut state = GameState::new(1);
        tick(&mut state, &press(|i| i.down = true), DT);
        tick(&mut state, &press(|i| i.confirm = true), DT);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty, Difficulty::Medium);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert!(state.active_bricks > 0);
        assert!(matches!(
            state.events.as_slice(),
            [GameEvent::LevelStarted { level: 1, difficulty: Difficulty::Medium }]
        ));
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut state = started(Difficulty::Easy);
        tick(&mut state, &press(|i| i.pause = true), DT);
        assert!(state.paused);

        let before = state.balls[0].pos;
        let timer = state.timer;
        for _ in 0..10 {
            tick(&mut state, &press(|i| i.left = true), DT);
        }
        assert_eq!(state.balls[0].pos, before);
        assert_eq!(state.timer, timer);
        assert_eq!(state.phase, GamePhase::Playing);

        // Unpausing resumes on the same frame
        tick(&mut state, &press(|i| i.pause = true), DT);
        assert!(!state.paused);
        assert_ne!(state.balls[0].pos, before);
    }

    #[test]
    fn test_menu_exit_while_paused() {
        let mut state = started(Difficulty::Hard);
        tick(&mut state, &press(|i| i.pause = true), DT);
        tick(&mut state, &press(|i| i.menu = true), DT);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(!state.paused);
        assert!(state.bricks.is_empty());
    }

    #[test]
    fn test_game_over_is_frozen_until_confirm() {
        let mut state = started(Difficulty::Easy);
        state.lives = 1;
        state.timer = 0.0;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);

        let score = state.score;
        let bricks = state.bricks.clone();
        for _ in 0..30 {
            tick(&mut state, &press(|i| i.right = true), DT);
        }
        assert_eq!(state.score, score);
        assert_eq!(state.bricks, bricks);

        tick(&mut state, &press(|i| i.confirm = true), DT);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.lives, STARTING_LIVES);
    }

    #[test]
    fn test_win_advances_difficulty_with_bonus() {
        let mut state = started(Difficulty::Easy);
        state.phase = GamePhase::YouWin;
        state.score = 250;

        tick(&mut state, &press(|i| i.confirm = true), DT);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty, Difficulty::Medium);
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 250 + LEVEL_BONUS);
        assert_eq!(state.active_bricks, state.count_active_bricks());
    }

    #[test]
    fn test_win_at_hard_returns_to_menu() {
        let mut state = started(Difficulty::Hard);
        state.phase = GamePhase::YouWin;
        state.score = 900;

        tick(&mut state, &press(|i| i.confirm = true), DT);

        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_you_win_ignores_other_input() {
        let mut state = started(Difficulty::Easy);
        state.phase = GamePhase::YouWin;
        tick(&mut state, &press(|i| i.pause = true), DT);
        tick(&mut state, &press(|i| i.down = true), DT);
        assert_eq!(state.phase, GamePhase::YouWin);
        assert_eq!(state.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_full_clear_flow_through_tick() {
        let mut state = started(Difficulty::Easy);
        for brick in &mut state.bricks {
            brick.active = false;
        }
        let target = 4;
        state.bricks[target].active = true;
        state.bricks[target].hits_required = 1;
        state.active_bricks = 1;
        let rect = state.bricks[target].rect;
        state.balls = vec![Ball::new(
            Vec2::new(rect.center().x, rect.bottom() + 12.0),
            Vec2::new(2.0, -3.0),
        )];

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.phase, GamePhase::YouWin);
        assert!(state.events.contains(&GameEvent::LevelCleared { level: 1 }));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            press(|i| i.confirm = true),
            press(|i| i.left = true),
            press(|i| i.right = true),
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input, DT);
                tick(&mut state2, input, DT);
            }
        }

        assert_eq!(state1.snapshot_json(), state2.snapshot_json());
    }
}
