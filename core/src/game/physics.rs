use log::*;

use crate::game::entities::Entity;
use crate::hardware::buttons::{Button, ButtonRegister};
use crate::hardware::display::{RESOLUTION_HEIGHT, RESOLUTION_WIDTH};

/// Travel bounds for the player paddle (15 rows of paddle plus a 2 row
/// margin below the screen edge).
pub const PLAYER_MIN_Y: u16 = 1;
pub const PLAYER_MAX_Y: u16 = RESOLUTION_HEIGHT as u16 - 17;

/// Travel bounds for the autonomous paddle's sweep.
pub const SWEEP_TOP_Y: u16 = 1;
pub const SWEEP_BOTTOM_Y: u16 = 143;

/// Where the ball respawns after a point.
pub const BALL_RESET_X: u16 = 100;
pub const BALL_RESET_Y: u16 = 50;

/// Horizontal distance between the ball's centre and its leading edge when
/// the paddle test fires.
const BALL_EDGE_OFFSET: u16 = 3;
/// Vertical window of the paddle test. Deliberately larger than the 15 row
/// paddle sprite; the extra rows are part of the game's tuning.
const PADDLE_HIT_SPAN: u16 = 20;

/// Initial value of both score counters. Counting starts at 1, and a score
/// of 1 renders as zero tick marks.
pub const INITIAL_SCORE: u8 = 1;
/// Score at which the round resets.
pub const DEFAULT_SCORE_LIMIT: u8 = 6;

/// Nudge the player paddle one row per frame while Up/Down are held.
///
/// Left/Right are polled but move nothing; the horizontal axis was never
/// wired up and the paddles live on fixed columns.
pub fn apply_player_input(paddle: &mut Entity, buttons: &ButtonRegister) {
    if buttons.is_pressed(Button::Down) && paddle.y != PLAYER_MAX_Y {
        paddle.y += 1;
    }
    if buttons.is_pressed(Button::Up) && paddle.y != PLAYER_MIN_Y {
        paddle.y -= 1;
    }
    if buttons.is_pressed(Button::Right) {
        // No horizontal travel.
    }
    if buttons.is_pressed(Button::Left) {
        // No horizontal travel.
    }
}

/// Current travel direction of the autonomous paddle.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub enum SweepDirection {
    Down,
    Up,
}

/// Advance the autonomous paddle one row along its open-loop sweep,
/// reversing at the travel bounds. Not a reactive AI; it never looks at
/// the ball.
pub fn advance_opponent(paddle: &mut Entity, direction: &mut SweepDirection) {
    if paddle.y == SWEEP_BOTTOM_Y && *direction == SweepDirection::Down {
        *direction = SweepDirection::Up;
    } else if paddle.y == SWEEP_TOP_Y && *direction == SweepDirection::Up {
        *direction = SweepDirection::Down;
    }

    match *direction {
        SweepDirection::Down => paddle.y += 1,
        SweepDirection::Up => paddle.y -= 1,
    }
}

/// One unit-step of ball motion. No sub-pixel accumulation; position and
/// velocity are whole units per frame.
pub fn advance_ball(ball: &mut Entity) {
    ball.x = ball.x.wrapping_add(ball.dx as u16);
    ball.y = ball.y.wrapping_add(ball.dy as u16);
}

/// Which side won the point this frame.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub enum Scorer {
    Player,
    Opponent,
}

/// Resolve the ball against walls, paddles and the scoring edges, in that
/// fixed order. Returns the scorer if the ball went out this frame.
pub fn resolve_collisions(
    ball: &mut Entity,
    player: &Entity,
    opponent: &Entity,
) -> Option<Scorer> {
    if ball.y == 0 || ball.y == RESOLUTION_HEIGHT as u16 {
        ball.dy = -ball.dy;
    }

    let hits_left = ball.x.wrapping_sub(BALL_EDGE_OFFSET) == player.x
        && ball.y >= player.y
        && ball.y <= player.y + PADDLE_HIT_SPAN;
    let hits_right = ball.x + BALL_EDGE_OFFSET == opponent.x
        && ball.y >= opponent.y
        && ball.y <= opponent.y + PADDLE_HIT_SPAN;
    if hits_left || hits_right {
        ball.dx = -ball.dx;
    }

    if ball.x == RESOLUTION_WIDTH as u16 {
        reset_ball(ball, -1, -1);
        Some(Scorer::Player)
    } else if ball.x == 0 {
        reset_ball(ball, 1, 1);
        Some(Scorer::Opponent)
    } else {
        None
    }
}

fn reset_ball(ball: &mut Entity, dx: i16, dy: i16) {
    ball.x = BALL_RESET_X;
    ball.y = BALL_RESET_Y;
    ball.dx = dx;
    ball.dy = dy;
}

/// The two bounded score counters.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    player: u8,
    opponent: u8,
    limit: u8,
}

impl Scoreboard {
    pub fn new(limit: u8) -> Self {
        // A limit at or below the starting score can never be reached by
        // play, which would leave the counters growing unbounded.
        Scoreboard {
            player: INITIAL_SCORE,
            opponent: INITIAL_SCORE,
            limit: limit.max(INITIAL_SCORE + 1),
        }
    }

    pub fn player(&self) -> u8 {
        self.player
    }

    pub fn opponent(&self) -> u8 {
        self.opponent
    }

    /// Credit a point to exactly one side.
    pub fn record(&mut self, scorer: Scorer) {
        match scorer {
            Scorer::Player => self.player += 1,
            Scorer::Opponent => self.opponent += 1,
        }
        debug!(
            "Point for {:?}, scores now {}:{}",
            scorer, self.player, self.opponent
        );
    }

    /// Whether either counter has hit the round limit.
    pub fn round_finished(&self) -> bool {
        self.player == self.limit || self.opponent == self.limit
    }

    /// Put both counters back to their starting value.
    pub fn reset_round(&mut self) {
        info!(
            "Round over at {}:{}, resetting",
            self.player, self.opponent
        );
        self.player = INITIAL_SCORE;
        self.opponent = INITIAL_SCORE;
    }
}
