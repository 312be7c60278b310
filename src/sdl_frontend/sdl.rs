use rustypong_core::hardware::display::{RESOLUTION_HEIGHT, RESOLUTION_WIDTH};
use sdl2::pixels::Color;
use sdl2::pixels::PixelFormatEnum::RGB24;
use sdl2::render::{Texture, WindowCanvas};

pub fn setup_sdl(canvas: &mut WindowCanvas) -> Texture {
    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();

    // Keep the aspect ratio regardless of how the window gets resized.
    canvas
        .set_logical_size(RESOLUTION_WIDTH as u32, RESOLUTION_HEIGHT as u32)
        .unwrap();

    canvas.present();
    canvas
        .create_texture_streaming(RGB24, RESOLUTION_WIDTH as u32, RESOLUTION_HEIGHT as u32)
        .unwrap()
}

/// This function assumes framebuffer size == texture buffer size, otherwise panic
pub fn fill_texture_and_copy(canvas: &mut WindowCanvas, texture: &mut Texture, framebuffer: &[u8]) {
    texture
        .update(None, framebuffer, RESOLUTION_WIDTH * 3)
        .unwrap();

    canvas.copy(&texture, None, None).unwrap();
}
