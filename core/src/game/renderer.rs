use itertools::Itertools;

use crate::game::entities::Entity;
use crate::hardware::display::{BufferId, DisplaySurface, RESOLUTION_HEIGHT, RESOLUTION_WIDTH};
use crate::hardware::palette::ColorIndex;

/// How far the erase pass reaches beyond an entity's bounding box. Must be
/// at least the per-frame travel distance or moving entities leave trails.
const ERASE_MARGIN: u16 = 3;

/// Geometry of the score tick marks along the top of the screen.
const TICK_TOP: usize = 5;
const TICK_BOTTOM: usize = 25;
const TICK_SPACING: usize = 10;
const TICK_WIDTH: usize = 2;
const PLAYER_TICK_BASE: usize = 15;
const OPPONENT_TICK_BASE: usize = 195;

/// Width of the left outer margin that the per-entity erase pass never
/// reaches.
const SIDE_BORDER_WIDTH: usize = 10;
/// The right-side clear starts much further inward; the scoring edge leaves
/// trails across the whole outer strip, not just the last ten columns.
const RIGHT_BORDER_START: usize = 210;

/// Paint every pixel of the entity's bounding box with its colour.
pub fn draw_rect(display: &mut DisplaySurface, buffer: BufferId, entity: &Entity) {
    let rows = entity.y as usize..(entity.y + entity.height()) as usize;
    let cols = entity.x as usize..(entity.x + entity.width()) as usize;

    for (row, col) in rows.cartesian_product(cols) {
        display.set_pixel(buffer, row, col, entity.colour());
    }
}

/// Paint over the entity's footprint plus a margin on every side.
///
/// Run at the old position before the entity moves; together with the margin
/// this removes the previous frame's footprint without a full clear. The top
/// and left edges saturate at the screen origin, the far edges rely on the
/// surface's own range guard.
pub fn erase_margin(
    display: &mut DisplaySurface,
    buffer: BufferId,
    background: ColorIndex,
    entity: &Entity,
) {
    let rows = entity.y.saturating_sub(ERASE_MARGIN) as usize
        ..(entity.y + entity.height() + ERASE_MARGIN) as usize;
    let cols = entity.x.saturating_sub(ERASE_MARGIN) as usize
        ..(entity.x + entity.width() + ERASE_MARGIN) as usize;

    for (row, col) in rows.cartesian_product(cols) {
        display.set_pixel(buffer, row, col, background);
    }
}

/// Draw one vertical tick per point for both sides, marching inward from
/// each edge. Scores count from 1, so a fresh 1:1 game draws nothing.
pub fn draw_score(
    display: &mut DisplaySurface,
    buffer: BufferId,
    player_score: u8,
    opponent_score: u8,
    colour: ColorIndex,
) {
    for i in 1..player_score as usize {
        let base = TICK_SPACING * i + PLAYER_TICK_BASE;
        fill_tick(display, buffer, base, colour);
    }
    for i in 1..opponent_score as usize {
        let base = OPPONENT_TICK_BASE - TICK_SPACING * i;
        fill_tick(display, buffer, base, colour);
    }
}

/// Erase every position a tick could occupy, on both sides.
pub fn clear_score(display: &mut DisplaySurface, buffer: BufferId, background: ColorIndex) {
    for i in 1..6 {
        fill_tick(display, buffer, TICK_SPACING * i + PLAYER_TICK_BASE, background);
        fill_tick(display, buffer, OPPONENT_TICK_BASE - TICK_SPACING * i, background);
    }
}

fn fill_tick(display: &mut DisplaySurface, buffer: BufferId, base_col: usize, colour: ColorIndex) {
    for (row, col) in (TICK_TOP..TICK_BOTTOM).cartesian_product(base_col..base_col + TICK_WIDTH) {
        display.set_pixel(buffer, row, col, colour);
    }
}

/// Clear the outer margins on both edges. Only needed after a point, when
/// the ball has crossed territory the erase pass does not cover.
pub fn clear_side_borders(display: &mut DisplaySurface, buffer: BufferId, background: ColorIndex) {
    let rows = 0..RESOLUTION_HEIGHT;
    let left = 0..SIDE_BORDER_WIDTH;
    let right = RIGHT_BORDER_START..RESOLUTION_WIDTH;

    for (row, col) in rows.clone().cartesian_product(left) {
        display.set_pixel(buffer, row, col, background);
    }
    for (row, col) in rows.cartesian_product(right) {
        display.set_pixel(buffer, row, col, background);
    }
}

/// Full-buffer fill; startup only.
pub fn clear_all(display: &mut DisplaySurface, buffer: BufferId, colour: ColorIndex) {
    for (row, col) in (0..RESOLUTION_HEIGHT).cartesian_product(0..RESOLUTION_WIDTH) {
        display.set_pixel(buffer, row, col, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::display::DisplaySurface;

    const BUFFER: BufferId = BufferId::Front;

    #[test]
    fn draw_rect_paints_exactly_the_bounding_box() {
        let mut display = DisplaySurface::new();
        let entity = Entity::new(20, 30, 3, 15, 0, 0, 7);

        draw_rect(&mut display, BUFFER, &entity);

        assert_eq!(display.pixel(BUFFER, 30, 20), 7);
        assert_eq!(display.pixel(BUFFER, 44, 22), 7);
        // One past each far edge is untouched.
        assert_eq!(display.pixel(BUFFER, 45, 20), 0);
        assert_eq!(display.pixel(BUFFER, 30, 23), 0);
        assert_eq!(display.pixel(BUFFER, 29, 20), 0);
        assert_eq!(display.pixel(BUFFER, 30, 19), 0);
    }

    #[test]
    fn erase_margin_reaches_three_units_past_the_box() {
        let mut display = DisplaySurface::new();
        let entity = Entity::new(20, 30, 3, 3, 0, 0, 7);
        clear_all(&mut display, BUFFER, 9);

        erase_margin(&mut display, BUFFER, 0, &entity);

        assert_eq!(display.pixel(BUFFER, 27, 17), 0);
        assert_eq!(display.pixel(BUFFER, 35, 25), 0);
        assert_eq!(display.pixel(BUFFER, 26, 20), 9);
        assert_eq!(display.pixel(BUFFER, 30, 16), 9);
        assert_eq!(display.pixel(BUFFER, 36, 20), 9);
        assert_eq!(display.pixel(BUFFER, 30, 26), 9);
    }

    #[test]
    fn erase_margin_saturates_at_the_screen_origin() {
        let mut display = DisplaySurface::new();
        let entity = Entity::new(1, 1, 3, 3, 0, 0, 7);
        clear_all(&mut display, BUFFER, 9);

        erase_margin(&mut display, BUFFER, 0, &entity);

        assert_eq!(display.pixel(BUFFER, 0, 0), 0);
        assert_eq!(display.pixel(BUFFER, 6, 6), 0);
        assert_eq!(display.pixel(BUFFER, 7, 7), 9);
    }

    #[test]
    fn score_of_one_draws_no_ticks() {
        let mut display = DisplaySurface::new();

        draw_score(&mut display, BUFFER, 1, 1, 5);

        for row in TICK_TOP..TICK_BOTTOM {
            for col in 0..RESOLUTION_WIDTH {
                assert_eq!(display.pixel(BUFFER, row, col), 0);
            }
        }
    }

    #[test]
    fn ticks_march_inward_from_both_edges() {
        let mut display = DisplaySurface::new();

        draw_score(&mut display, BUFFER, 3, 2, 5);

        // Player: ticks at columns 25 and 35.
        assert_eq!(display.pixel(BUFFER, 5, 25), 5);
        assert_eq!(display.pixel(BUFFER, 24, 26), 5);
        assert_eq!(display.pixel(BUFFER, 5, 35), 5);
        assert_eq!(display.pixel(BUFFER, 5, 45), 0);
        // Opponent: a single tick at column 185.
        assert_eq!(display.pixel(BUFFER, 5, 185), 5);
        assert_eq!(display.pixel(BUFFER, 5, 175), 0);
    }

    #[test]
    fn clear_score_erases_all_tick_positions() {
        let mut display = DisplaySurface::new();
        draw_score(&mut display, BUFFER, 6, 6, 5);

        clear_score(&mut display, BUFFER, 0);

        for row in TICK_TOP..TICK_BOTTOM {
            for col in 0..RESOLUTION_WIDTH {
                assert_eq!(display.pixel(BUFFER, row, col), 0);
            }
        }
    }

    #[test]
    fn side_borders_cover_both_outer_strips() {
        let mut display = DisplaySurface::new();
        clear_all(&mut display, BUFFER, 9);

        clear_side_borders(&mut display, BUFFER, 0);

        for row in 0..RESOLUTION_HEIGHT {
            assert_eq!(display.pixel(BUFFER, row, 0), 0);
            assert_eq!(display.pixel(BUFFER, row, 9), 0);
            assert_eq!(display.pixel(BUFFER, row, 10), 9);
            assert_eq!(display.pixel(BUFFER, row, 209), 9);
            assert_eq!(display.pixel(BUFFER, row, 210), 0);
            assert_eq!(display.pixel(BUFFER, row, 230), 0);
            assert_eq!(display.pixel(BUFFER, row, 239), 0);
        }
    }
}
