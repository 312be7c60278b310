//! Headless runner: simulates a fixed number of frames as fast as possible
//! and saves the finally presented framebuffer as a PNG. Handy for eyeballing
//! the game state after long runs without opening a window.

use anyhow::Context;
use gumdrop::Options;
use image::RgbImage;
use log::LevelFilter;
use log::*;
use simplelog::{CombinedLogger, Config, TermLogger, TerminalMode};

use rustypong_core::hardware::display::{RESOLUTION_HEIGHT, RESOLUTION_WIDTH};
use rustypong_core::{GameLoop, GameOptions, InstantSync};

use crate::options::HeadlessOptions;

mod options;

fn main() -> anyhow::Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
    )])
    .unwrap();

    let options: HeadlessOptions = HeadlessOptions::parse_args_default_or_exit();

    let mut game = GameLoop::new(GameOptions::default())?;
    let mut remaining = options.frames;

    game.run(&mut InstantSync, |_| {
        if remaining == 0 {
            false
        } else {
            remaining -= 1;
            true
        }
    });

    info!(
        "Simulated {} frames, final score {}:{}",
        options.frames,
        game.scoreboard().player(),
        game.scoreboard().opponent()
    );

    let presented = game.hardware().display.presented();
    let frame = game.hardware().frame_rgb24(presented);
    let image = RgbImage::from_raw(RESOLUTION_WIDTH as u32, RESOLUTION_HEIGHT as u32, frame)
        .context("Framebuffer did not match the display resolution")?;
    image
        .save(&options.output)
        .with_context(|| format!("Failed to save the frame to {}", options.output))?;

    info!("Saved the presented frame to {}", options.output);

    Ok(())
}
