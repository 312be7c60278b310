use std::time::{Duration, Instant};

use gumdrop::Options;
use log::LevelFilter;
use log::*;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::render::{Texture, WindowCanvas};
use simplelog::{CombinedLogger, Config, TermLogger, TerminalMode};

use rustypong_core::hardware::display::{RESOLUTION_HEIGHT, RESOLUTION_WIDTH, VBLANK_SCANLINE};
use rustypong_core::{Button, FrameSync, GameLoop, HardwareContext};
use rustypong_core::GameOptionsBuilder;

use crate::options::AppOptions;
use crate::sdl::{fill_texture_and_copy, setup_sdl};

mod options;
mod sdl;

const FPS: u64 = 60;
const FRAME_DELAY: Duration = Duration::from_nanos(1_000_000_000u64 / FPS);

/// Presents the completed frame and holds the loop to the display refresh
/// rate, standing in for the hardware scanline poll.
struct SdlSync {
    canvas: WindowCanvas,
    texture: Texture,
    last_frame: Instant,
    uncapped: bool,
}

impl FrameSync for SdlSync {
    fn wait_for_vblank(&mut self, ctx: &mut HardwareContext) {
        let presented = ctx.display.presented();
        let frame = ctx.frame_rgb24(presented);
        fill_texture_and_copy(&mut self.canvas, &mut self.texture, &frame);
        self.canvas.present();

        if !self.uncapped {
            let elapsed = self.last_frame.elapsed();
            if elapsed < FRAME_DELAY {
                std::thread::sleep(FRAME_DELAY - elapsed);
            }
        }
        self.last_frame = Instant::now();

        ctx.display.set_scanline(VBLANK_SCANLINE);
    }
}

fn main() {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
    )])
    .unwrap();

    let options: AppOptions = AppOptions::parse_args_default_or_exit();

    let sdl_context = sdl2::init().expect("Failed to initialise SDL context!");
    let video_subsystem = sdl_context.video().expect("SDL context failed to initialise video!");

    let mut canvas = video_subsystem
        .window(
            "RustyPong",
            RESOLUTION_WIDTH as u32 * options.scale,
            RESOLUTION_HEIGHT as u32 * options.scale,
        )
        .position_centered()
        .resizable()
        .build()
        .expect("Failed to create the main window!")
        .into_canvas()
        .accelerated()
        .build()
        .expect("Failed to create a canvas!");
    let texture = setup_sdl(&mut canvas);

    let game_options = GameOptionsBuilder::new()
        .score_limit(options.score_limit)
        .build();
    let mut game = GameLoop::new(game_options).expect("Palette table overflowed during setup!");
    let mut sync = SdlSync {
        canvas,
        texture,
        last_frame: Instant::now(),
        uncapped: options.uncapped,
    };

    let mut event_pump = sdl_context.event_pump().unwrap();

    info!("Starting main loop at {} FPS", FPS);

    'mainloop: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'mainloop,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(button) = keymap(key) {
                        game.hardware_mut().buttons.set_pressed(button, true);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(button) = keymap(key) {
                        game.hardware_mut().buttons.set_pressed(button, false);
                    }
                }
                _ => {}
            }
        }

        game.frame(&mut sync);
    }

    info!("Quit requested, shutting down");
}

fn keymap(key: Keycode) -> Option<Button> {
    match key {
        Keycode::Up => Some(Button::Up),
        Keycode::Down => Some(Button::Down),
        Keycode::Left => Some(Button::Left),
        Keycode::Right => Some(Button::Right),
        Keycode::Z => Some(Button::A),
        Keycode::X => Some(Button::B),
        Keycode::A => Some(Button::L),
        Keycode::S => Some(Button::R),
        Keycode::Return => Some(Button::Start),
        Keycode::RShift => Some(Button::Select),
        _ => None,
    }
}
