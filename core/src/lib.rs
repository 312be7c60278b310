use crate::game::physics::DEFAULT_SCORE_LIMIT;
use crate::hardware::palette::Rgb;

pub use crate::game::scheduler::GameLoop;
pub use crate::hardware::buttons::Button;
pub use crate::hardware::{FrameSync, HardwareContext, InstantSync};

pub mod game;
pub mod hardware;

/// Struct for wrapping all the various options for the `GameLoop`
#[derive(Debug, Copy, Clone)]
pub struct GameOptions {
    pub player_colour: Rgb,
    pub opponent_colour: Rgb,
    pub ball_colour: Rgb,
    pub background_colour: Rgb,
    pub score_colour: Rgb,
    pub score_limit: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptionsBuilder::new().build()
    }
}

#[derive(Debug)]
pub struct GameOptionsBuilder {
    player_colour: Rgb,
    opponent_colour: Rgb,
    ball_colour: Rgb,
    background_colour: Rgb,
    score_colour: Rgb,
    score_limit: u8,
}

impl GameOptionsBuilder {
    /// The canonical scene: green player paddle, red opponent paddle, white
    /// ball, black background, blue score ticks, rounds to 6.
    pub fn new() -> Self {
        GameOptionsBuilder {
            player_colour: Rgb(0, 20, 2),
            opponent_colour: Rgb(20, 0, 0),
            ball_colour: Rgb(20, 20, 20),
            background_colour: Rgb(0, 0, 0),
            score_colour: Rgb(2, 0, 20),
            score_limit: DEFAULT_SCORE_LIMIT,
        }
    }

    pub fn player_colour(mut self, colour: Rgb) -> Self {
        self.player_colour = colour;
        self
    }

    pub fn opponent_colour(mut self, colour: Rgb) -> Self {
        self.opponent_colour = colour;
        self
    }

    pub fn ball_colour(mut self, colour: Rgb) -> Self {
        self.ball_colour = colour;
        self
    }

    pub fn background_colour(mut self, colour: Rgb) -> Self {
        self.background_colour = colour;
        self
    }

    pub fn score_colour(mut self, colour: Rgb) -> Self {
        self.score_colour = colour;
        self
    }

    pub fn score_limit(mut self, limit: u8) -> Self {
        self.score_limit = limit;
        self
    }

    pub fn build(self) -> GameOptions {
        GameOptions {
            player_colour: self.player_colour,
            opponent_colour: self.opponent_colour,
            ball_colour: self.ball_colour,
            background_colour: self.background_colour,
            score_colour: self.score_colour,
            score_limit: self.score_limit,
        }
    }
}

impl From<GameOptions> for GameOptionsBuilder {
    fn from(from: GameOptions) -> Self {
        GameOptionsBuilder {
            player_colour: from.player_colour,
            opponent_colour: from.opponent_colour,
            ball_colour: from.ball_colour,
            background_colour: from.background_colour,
            score_colour: from.score_colour,
            score_limit: from.score_limit,
        }
    }
}
