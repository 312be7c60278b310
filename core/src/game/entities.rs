use crate::hardware::palette::ColorIndex;

/// An axis-aligned coloured rectangle in screen space, top-left origin.
///
/// Size and colour are fixed at creation. Position mutates once per frame;
/// velocity only ever changes sign, and only for the ball.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Entity {
    pub x: u16,
    pub y: u16,
    width: u16,
    height: u16,
    pub dx: i16,
    pub dy: i16,
    colour: ColorIndex,
}

impl Entity {
    pub fn new(x: u16, y: u16, width: u16, height: u16, dx: i16, dy: i16, colour: ColorIndex) -> Self {
        Entity {
            x,
            y,
            width,
            height,
            dx,
            dy,
            colour,
        }
    }

    /// The player's paddle, resting on the left side.
    pub fn player_paddle(colour: ColorIndex) -> Self {
        Entity::new(10, 10, 3, 15, 0, 0, colour)
    }

    /// The autonomous paddle on the right side.
    pub fn opponent_paddle(colour: ColorIndex) -> Self {
        Entity::new(200, 10, 3, 15, 0, 0, colour)
    }

    pub fn ball(colour: ColorIndex) -> Self {
        Entity::new(100, 5, 3, 3, -1, -1, colour)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn colour(&self) -> ColorIndex {
        self.colour
    }
}
