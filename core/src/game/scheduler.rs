use log::*;

use crate::game::entities::Entity;
use crate::game::physics::{self, Scoreboard, SweepDirection};
use crate::game::renderer;
use crate::hardware::display::BufferId;
use crate::hardware::palette::{ColorIndex, PaletteFull};
use crate::hardware::{FrameSync, HardwareContext};
use crate::GameOptions;

/// Owns the hardware context and the three scene entities, and runs the
/// per-frame erase → mutate → draw → present pass.
pub struct GameLoop {
    hw: HardwareContext,
    player: Entity,
    opponent: Entity,
    ball: Entity,
    opponent_direction: SweepDirection,
    scoreboard: Scoreboard,
    background: ColorIndex,
    score_colour: ColorIndex,
    drawable: BufferId,
}

impl GameLoop {
    /// Build the hardware context, allocate the palette in creation order
    /// (player, opponent, ball, background, score mark) and clear both
    /// pages to the background colour.
    pub fn new(options: GameOptions) -> Result<Self, PaletteFull> {
        let mut hw = HardwareContext::new();

        let player = Entity::player_paddle(hw.palette.allocate(options.player_colour)?);
        let opponent = Entity::opponent_paddle(hw.palette.allocate(options.opponent_colour)?);
        let ball = Entity::ball(hw.palette.allocate(options.ball_colour)?);
        let background = hw.palette.allocate(options.background_colour)?;
        let score_colour = hw.palette.allocate(options.score_colour)?;

        renderer::clear_all(&mut hw.display, BufferId::Front, background);
        renderer::clear_all(&mut hw.display, BufferId::Back, background);

        let drawable = hw.display.drawable();
        info!("Game initialised, drawing into {:?}", drawable);

        Ok(GameLoop {
            hw,
            player,
            opponent,
            ball,
            opponent_direction: SweepDirection::Down,
            scoreboard: Scoreboard::new(options.score_limit),
            background,
            score_colour,
            drawable,
        })
    }

    /// Advance the simulation by one frame and present it.
    ///
    /// The pass order is fixed: erase the old footprints, resolve a finished
    /// round, draw the new footprints, apply input and physics, then block
    /// for the frame boundary and flip.
    pub fn frame(&mut self, sync: &mut impl FrameSync) {
        let buffer = self.drawable;
        self.hw.display.set_scanline(0);

        renderer::erase_margin(&mut self.hw.display, buffer, self.background, &self.player);
        renderer::erase_margin(&mut self.hw.display, buffer, self.background, &self.opponent);
        renderer::erase_margin(&mut self.hw.display, buffer, self.background, &self.ball);

        if self.scoreboard.round_finished() {
            self.scoreboard.reset_round();
            // Ticks persist across flips, so both pages need the clear.
            renderer::clear_score(&mut self.hw.display, BufferId::Front, self.background);
            renderer::clear_score(&mut self.hw.display, BufferId::Back, self.background);
        }

        renderer::draw_rect(&mut self.hw.display, buffer, &self.player);
        renderer::draw_rect(&mut self.hw.display, buffer, &self.opponent);
        renderer::draw_rect(&mut self.hw.display, buffer, &self.ball);

        physics::apply_player_input(&mut self.player, &self.hw.buttons);
        physics::advance_opponent(&mut self.opponent, &mut self.opponent_direction);
        physics::advance_ball(&mut self.ball);

        if let Some(scorer) = physics::resolve_collisions(&mut self.ball, &self.player, &self.opponent) {
            self.scoreboard.record(scorer);
            renderer::clear_side_borders(&mut self.hw.display, BufferId::Front, self.background);
            renderer::clear_side_borders(&mut self.hw.display, BufferId::Back, self.background);
        }

        renderer::draw_score(
            &mut self.hw.display,
            buffer,
            self.scoreboard.player(),
            self.scoreboard.opponent(),
            self.score_colour,
        );

        sync.wait_for_vblank(&mut self.hw);
        self.drawable = self.hw.display.flip();
    }

    /// Run frames for as long as `keep_running` allows. Production callers
    /// pass `|_| true`; tests and headless runs bound the iteration count.
    pub fn run<S: FrameSync>(&mut self, sync: &mut S, mut keep_running: impl FnMut(&GameLoop) -> bool) {
        while keep_running(self) {
            self.frame(sync);
        }
    }

    pub fn hardware(&self) -> &HardwareContext {
        &self.hw
    }

    pub fn hardware_mut(&mut self) -> &mut HardwareContext {
        &mut self.hw
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn opponent(&self) -> &Entity {
        &self.opponent
    }

    pub fn ball(&self) -> &Entity {
        &self.ball
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn scoreboard_mut(&mut self) -> &mut Scoreboard {
        &mut self.scoreboard
    }

    pub fn background_colour(&self) -> ColorIndex {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::physics::{Scorer, BALL_RESET_X, BALL_RESET_Y, INITIAL_SCORE};
    use crate::hardware::InstantSync;
    use pretty_assertions::assert_eq;

    fn run_frames(game: &mut GameLoop, frames: usize) {
        let mut remaining = frames;
        game.run(&mut InstantSync, |_| {
            if remaining == 0 {
                false
            } else {
                remaining -= 1;
                true
            }
        });
    }

    #[test]
    fn palette_is_allocated_in_creation_order() {
        let game = GameLoop::new(GameOptions::default()).unwrap();

        assert_eq!(game.player().colour(), 0);
        assert_eq!(game.opponent().colour(), 1);
        assert_eq!(game.ball().colour(), 2);
        assert_eq!(game.background_colour(), 3);
        assert_eq!(game.hardware().palette.len(), 5);
    }

    #[test]
    fn presented_buffer_alternates_every_frame() {
        let mut game = GameLoop::new(GameOptions::default()).unwrap();
        let mut previous = game.hardware().display.presented();

        for _ in 0..8 {
            game.frame(&mut InstantSync);
            let current = game.hardware().display.presented();
            assert_eq!(current, previous.other());
            assert_eq!(game.hardware().display.drawable(), current.other());
            previous = current;
        }
    }

    #[test]
    fn ball_travels_one_unit_per_axis_per_frame() {
        let mut game = GameLoop::new(GameOptions::default()).unwrap();

        run_frames(&mut game, 3);
        // From (100, 5) with velocity (-1, -1), no collision for 3 frames.
        assert_eq!((game.ball().x, game.ball().y), (97, 2));
    }

    #[test]
    fn unattended_ball_reaches_the_player_wall() {
        let mut game = GameLoop::new(GameOptions::default()).unwrap();

        // x ticks down from 100 once per frame; neither paddle intercepts.
        run_frames(&mut game, 100);

        assert_eq!(game.scoreboard().opponent(), INITIAL_SCORE + 1);
        assert_eq!(game.scoreboard().player(), INITIAL_SCORE);
        assert_eq!((game.ball().x, game.ball().y), (BALL_RESET_X, BALL_RESET_Y));
        assert_eq!((game.ball().dx, game.ball().dy), (1, 1));
    }

    #[test]
    fn finished_round_resets_scores_and_clears_the_ticks() {
        let mut game = GameLoop::new(GameOptions::default()).unwrap();

        // Draw some ticks into both pages first.
        for _ in 0..4 {
            game.scoreboard_mut().record(Scorer::Opponent);
        }
        run_frames(&mut game, 2);
        let background = game.background_colour();
        assert_ne!(
            game.hardware().display.pixel(BufferId::Front, 5, 185),
            background
        );

        game.scoreboard_mut().record(Scorer::Opponent);
        assert!(game.scoreboard().round_finished());
        run_frames(&mut game, 1);

        assert_eq!(game.scoreboard().player(), INITIAL_SCORE);
        assert_eq!(game.scoreboard().opponent(), INITIAL_SCORE);
        for buffer in [BufferId::Front, BufferId::Back].iter() {
            for i in 1..6 {
                assert_eq!(game.hardware().display.pixel(*buffer, 5, 10 * i + 15), background);
                assert_eq!(game.hardware().display.pixel(*buffer, 5, 195 - 10 * i), background);
            }
        }
    }

    #[test]
    fn held_down_button_moves_the_player_paddle() {
        let mut game = GameLoop::new(GameOptions::default()).unwrap();
        game.hardware_mut()
            .buttons
            .set_pressed(crate::Button::Down, true);

        run_frames(&mut game, 5);
        assert_eq!(game.player().y, 15);

        game.hardware_mut()
            .buttons
            .set_pressed(crate::Button::Down, false);
        run_frames(&mut game, 5);
        assert_eq!(game.player().y, 15);
    }

    #[test]
    fn first_frame_draws_into_the_back_buffer() {
        let mut game = GameLoop::new(GameOptions::default()).unwrap();
        assert_eq!(game.hardware().display.presented(), BufferId::Front);

        game.frame(&mut InstantSync);

        // The paddle footprint must be in Back only; Front was on screen.
        assert_eq!(
            game.hardware().display.pixel(BufferId::Back, 10, 10),
            game.player().colour()
        );
        assert_eq!(
            game.hardware().display.pixel(BufferId::Front, 10, 10),
            game.background_colour()
        );
    }
}
