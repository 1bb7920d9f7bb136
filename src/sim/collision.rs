//! Collision response for the ball
//!
//! Detection is plain rect/circle overlap (see `geometry`); this module holds
//! the rules for what the ball does afterwards: wall reflection, the paddle's
//! hit-point steering, the brick bounce axis and the horizontal speed floor.

use glam::Vec2;

use super::geometry::Rect;
use super::rng::GameRng;
use super::state::Ball;
use crate::consts::*;
use crate::tuning::Tuning;

/// Hits left of this paddle fraction (or right of `1 - PADDLE_EDGE_ZONE`) are edge hits
pub const PADDLE_EDGE_ZONE: f32 = 0.4;
/// Gap left between ball and paddle after a bounce
const PADDLE_SNAP_GAP: f32 = 0.1;
/// Upper bound of the random floor jitter after a paddle bounce, in tenths
const FLOOR_JITTER_STEPS: i32 = 5;

/// What the ball touched when checked against the field boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    None,
    Reflected,
    /// The ball crossed the bottom edge and is lost
    Bottom,
}

/// Which velocity component a brick hit flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    Horizontal,
    Vertical,
}

/// Reflect off the side and top walls; report a bottom exit.
///
/// Components are only flipped while moving into the wall, so a ball that is
/// still overlapping a wall on the next frame is not flipped back.
pub fn bounce_off_walls(ball: &mut Ball) -> WallContact {
    let mut contact = WallContact::None;

    if (ball.pos.x - ball.radius <= 0.0 && ball.vel.x < 0.0)
        || (ball.pos.x + ball.radius >= FIELD_WIDTH && ball.vel.x > 0.0)
    {
        ball.vel.x = -ball.vel.x;
        contact = WallContact::Reflected;
    }

    if ball.pos.y - ball.radius <= 0.0 && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        contact = WallContact::Reflected;
    }

    if ball.pos.y + ball.radius >= FIELD_HEIGHT {
        return WallContact::Bottom;
    }

    contact
}

/// Normalized horizontal contact position on the paddle, in [0, 1]
#[inline]
pub fn hit_point(ball_x: f32, paddle: &Rect) -> f32 {
    ((ball_x - paddle.x) / paddle.width).clamp(0.0, 1.0)
}

/// Send the ball back up with a horizontal speed steered by where it landed
pub fn paddle_bounce(ball: &mut Ball, paddle: &Rect, tuning: &Tuning, rng: &mut GameRng) {
    let speed = ball.vel.length();
    let hit = hit_point(ball.pos.x, paddle);

    ball.vel.y = -ball.vel.y.abs();
    ball.vel.x = if hit < PADDLE_EDGE_ZONE {
        -speed * tuning.paddle_edge_factor
    } else if hit > 1.0 - PADDLE_EDGE_ZONE {
        speed * tuning.paddle_edge_factor
    } else {
        (hit - 0.5) * 2.0 * speed * tuning.paddle_center_factor
    };

    let jitter = rng.random_int(0, FLOOR_JITTER_STEPS) as f32 * 0.1;
    enforce_min_speed_x(&mut ball.vel, MIN_BALL_SPEED_X + jitter, rng);

    ball.pos.y = paddle.y - ball.radius - PADDLE_SNAP_GAP;
}

/// Pick the bounce axis from where the ball center sits relative to the brick.
///
/// Outside the brick's extent on one or both axes, the axis with the larger
/// relative overshoot wins. A center inside the brick flips vertically.
pub fn brick_bounce_axis(ball_pos: Vec2, brick: &Rect) -> BounceAxis {
    let half = brick.half_extents();
    let offset = ball_pos - brick.center();
    let over_x = (offset.x.abs() - half.x) / half.x;
    let over_y = (offset.y.abs() - half.y) / half.y;

    if over_x <= 0.0 && over_y <= 0.0 {
        BounceAxis::Vertical
    } else if over_x > over_y {
        BounceAxis::Horizontal
    } else {
        BounceAxis::Vertical
    }
}

/// Bounce axis for a ball closing on `brick`, or `None` when the ball is
/// already separating along that axis.
///
/// A brick that keeps overlapping the ball for several frames (a moving brick
/// catching up with it) must not flip it back or take another hit.
pub fn brick_approach(ball_pos: Vec2, ball_vel: Vec2, brick: &Rect) -> Option<BounceAxis> {
    let axis = brick_bounce_axis(ball_pos, brick);
    let offset = ball_pos - brick.center();
    let closing = match axis {
        BounceAxis::Horizontal => closing_on(ball_vel.x, offset.x),
        BounceAxis::Vertical => closing_on(ball_vel.y, offset.y),
    };
    closing.then_some(axis)
}

/// Velocity component points back toward the brick center
fn closing_on(vel: f32, offset: f32) -> bool {
    if offset == 0.0 {
        vel != 0.0
    } else {
        vel * offset < 0.0
    }
}

/// Flip the chosen component and restore the horizontal floor.
/// Leaves the ball untouched when it is moving away from the brick.
pub fn brick_bounce(ball: &mut Ball, brick: &Rect, rng: &mut GameRng) -> Option<BounceAxis> {
    let axis = brick_approach(ball.pos, ball.vel, brick)?;
    match axis {
        BounceAxis::Horizontal => ball.vel.x = -ball.vel.x,
        BounceAxis::Vertical => ball.vel.y = -ball.vel.y,
    }
    enforce_min_speed_x(&mut ball.vel, MIN_BALL_SPEED_X, rng);
    Some(axis)
}

/// Raise `|vel.x|` to at least `floor`, keeping its sign (random when zero)
pub fn enforce_min_speed_x(vel: &mut Vec2, floor: f32, rng: &mut GameRng) {
    if vel.x.abs() >= floor {
        return;
    }
    let sign = if vel.x > 0.0 {
        1.0
    } else if vel.x < 0.0 {
        -1.0
    } else {
        rng.coin_flip_sign()
    };
    vel.x = floor * sign;
}
