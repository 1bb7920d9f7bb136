//! Entities, HUD and banners for one frame

use glam::Vec2;

use super::Canvas;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::palette::{self, Rgba};
use crate::sim::{Difficulty, GamePhase, GameState, Rect};

const HUD_SIZE: f32 = 20.0;
const BANNER_SIZE: f32 = 40.0;
const HINT_SIZE: f32 = 20.0;

/// Draw the whole frame for the current phase
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear(palette::BACKGROUND);

    if state.phase == GamePhase::Menu {
        draw_menu(state, canvas);
        return;
    }

    draw_entities(state, canvas);
    draw_hud(state, canvas);

    match state.phase {
        GamePhase::Playing if state.paused => {
            centered_text(canvas, "PAUSED", FIELD_HEIGHT / 2.0 - 20.0, BANNER_SIZE, palette::HUD_MUTED);
        }
        GamePhase::GameOver => {
            draw_banner(
                canvas,
                "GAME OVER",
                palette::BANNER_LOSE,
                "Press [ENTER] to return to MENU",
            );
        }
        GamePhase::YouWin => {
            let hint = if state.difficulty.is_max() {
                "Press [ENTER] to return to MENU"
            } else {
                "Press [ENTER] for NEXT LEVEL"
            };
            draw_banner(canvas, "YOU WIN!", palette::BANNER_WIN, hint);
        }
        _ => {}
    }
}

fn draw_entities(state: &GameState, canvas: &mut impl Canvas) {
    canvas.fill_rect(state.paddle.rect, state.paddle.color);

    for brick in state.bricks.iter().filter(|b| b.active) {
        canvas.fill_rect(brick.rect, brick.color);
    }

    for power_up in state.power_ups.iter().filter(|p| p.active) {
        canvas.fill_rect(power_up.rect, power_up.color);
        let tag = power_up.kind.tag();
        let size = power_up.rect.height;
        let x = power_up.rect.center().x - canvas.measure_text(tag, size) / 2.0;
        canvas.draw_text(tag, Vec2::new(x, power_up.rect.y), size, palette::BACKGROUND);
    }

    for ball in state.balls.iter().filter(|b| b.active) {
        canvas.fill_circle(ball.pos, ball.radius, ball.color);
    }
}

fn draw_hud(state: &GameState, canvas: &mut impl Canvas) {
    canvas.draw_text(
        &format!("SCORE: {:04}", state.score),
        Vec2::new(10.0, 10.0),
        HUD_SIZE,
        palette::HUD_TEXT,
    );
    canvas.draw_text(
        &format!("LIVES: {}", state.lives),
        Vec2::new(FIELD_WIDTH - 100.0, 10.0),
        HUD_SIZE,
        palette::HUD_TEXT,
    );
    canvas.draw_text(
        &format!("TIME: {}", format_clock(state.timer)),
        Vec2::new(FIELD_WIDTH / 2.0 - 50.0, 10.0),
        HUD_SIZE,
        palette::HUD_TEXT,
    );
    canvas.draw_text(
        &format!("LEVEL: {} ({})", state.level, state.difficulty.label()),
        Vec2::new(10.0, 30.0),
        HUD_SIZE,
        palette::HUD_TEXT,
    );
}

fn draw_menu(state: &GameState, canvas: &mut impl Canvas) {
    centered_text(canvas, "BREAKOUT", 150.0, BANNER_SIZE, palette::HUD_TEXT);
    centered_text(canvas, "Select difficulty", 230.0, HINT_SIZE, palette::HUD_MUTED);

    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let y = 280.0 + i as f32 * 40.0;
        let (text, color) = if *difficulty == state.menu_selection {
            (format!("> {} <", difficulty.label()), palette::PADDLE)
        } else {
            (difficulty.label().to_string(), palette::HUD_TEXT)
        };
        centered_text(canvas, &text, y, HUD_SIZE + 10.0, color);
    }

    centered_text(
        canvas,
        "[UP]/[DOWN] to choose, [ENTER] to start",
        450.0,
        HINT_SIZE,
        palette::HUD_MUTED,
    );
}

/// Translucent strip across the middle with a title and a hint line
fn draw_banner(canvas: &mut impl Canvas, title: &str, color: Rgba, hint: &str) {
    let mid = FIELD_HEIGHT / 2.0;
    canvas.fill_rect(Rect::new(0.0, mid - 40.0, FIELD_WIDTH, 80.0), palette::BANNER_STRIP);
    centered_text(canvas, title, mid - 20.0, BANNER_SIZE, color);
    centered_text(canvas, hint, mid + 25.0, HINT_SIZE, palette::BANNER_HINT);
}

fn centered_text(canvas: &mut impl Canvas, text: &str, y: f32, size: f32, color: Rgba) {
    let x = FIELD_WIDTH / 2.0 - canvas.measure_text(text, size) / 2.0;
    canvas.draw_text(text, Vec2::new(x, y), size, color);
}

/// Remaining countdown as `mm:ss`, never negative
pub fn format_clock(seconds: f32) -> String {
    let total = seconds.max(0.0).ceil() as u32;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Ball, start_game};

    /// Canvas that records calls for inspection
    #[derive(Default)]
    struct Recorder {
        clears: usize,
        rects: Vec<(Rect, Rgba)>,
        circles: Vec<Vec2>,
        texts: Vec<String>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self, _color: Rgba) {
            self.clears += 1;
        }
        fn fill_rect(&mut self, rect: Rect, color: Rgba) {
            self.rects.push((rect, color));
        }
        fn fill_circle(&mut self, center: Vec2, _radius: f32, _color: Rgba) {
            self.circles.push(center);
        }
        fn draw_text(&mut self, text: &str, _pos: Vec2, _size: f32, _color: Rgba) {
            self.texts.push(text.to_string());
        }
    }

    fn render(state: &GameState) -> Recorder {
        let mut recorder = Recorder::default();
        draw_frame(state, &mut recorder);
        recorder
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(120.0), "02:00");
        assert_eq!(format_clock(59.2), "01:00");
        assert_eq!(format_clock(61.0), "01:01");
        assert_eq!(format_clock(-3.0), "00:00");
    }

    #[test]
    fn test_menu_highlights_selection() {
        let mut state = GameState::new(1);
        state.menu_selection = Difficulty::Medium;
        let frame = render(&state);
        assert_eq!(frame.clears, 1);
        assert!(frame.rects.is_empty());
        assert!(frame.texts.contains(&"> MEDIUM <".to_string()));
        assert!(frame.texts.contains(&"EASY".to_string()));
    }

    #[test]
    fn test_playing_draws_entities_and_hud() {
        let mut state = GameState::new(3);
        start_game(&mut state, Difficulty::Hard);
        state.balls.push(Ball::new(Vec2::new(10.0, 10.0), Vec2::ZERO));
        state.balls.push(Ball {
            active: false,
            ..Ball::new(Vec2::new(20.0, 20.0), Vec2::ZERO)
        });

        let frame = render(&state);
        assert_eq!(frame.rects.len(), 1 + state.active_bricks as usize);
        assert_eq!(frame.circles.len(), 2);
        assert!(frame.texts.contains(&"SCORE: 0000".to_string()));
        assert!(frame.texts.contains(&"LIVES: 3".to_string()));
        assert!(frame.texts.contains(&"TIME: 03:00".to_string()));
        assert!(frame.texts.contains(&"LEVEL: 1 (HARD)".to_string()));
        assert!(!frame.texts.contains(&"PAUSED".to_string()));
    }

    #[test]
    fn test_paused_banner() {
        let mut state = GameState::new(3);
        start_game(&mut state, Difficulty::Easy);
        state.paused = true;
        assert!(render(&state).texts.contains(&"PAUSED".to_string()));
    }

    #[test]
    fn test_end_banners() {
        let mut state = GameState::new(3);
        start_game(&mut state, Difficulty::Easy);

        state.phase = GamePhase::GameOver;
        let frame = render(&state);
        assert!(frame.texts.contains(&"GAME OVER".to_string()));
        assert!(frame.rects.iter().any(|(_, c)| *c == palette::BANNER_STRIP));

        state.phase = GamePhase::YouWin;
        let frame = render(&state);
        assert!(frame.texts.contains(&"Press [ENTER] for NEXT LEVEL".to_string()));

        state.difficulty = Difficulty::Hard;
        let frame = render(&state);
        assert!(frame.texts.contains(&"Press [ENTER] to return to MENU".to_string()));
    }
}
