use crate::hardware::buttons::ButtonRegister;
use crate::hardware::display::{BufferId, DisplaySurface, VBLANK_SCANLINE};
use crate::hardware::display::{RESOLUTION_HEIGHT, RESOLUTION_WIDTH};
use crate::hardware::interrupts::InterruptTable;
use crate::hardware::palette::PaletteTable;

pub mod buttons;
pub mod display;
pub mod interrupts;
pub mod palette;

/// All memory-mapped hardware the game touches, as one explicitly
/// constructed value.
///
/// On the device these live at fixed global addresses; here they are owned
/// fields so tests can construct a context, drive it, and inspect it without
/// any process-wide state.
pub struct HardwareContext {
    pub display: DisplaySurface,
    pub palette: PaletteTable,
    pub buttons: ButtonRegister,
    pub interrupts: InterruptTable,
}

impl HardwareContext {
    pub fn new() -> Self {
        HardwareContext {
            display: DisplaySurface::new(),
            palette: PaletteTable::new(),
            buttons: ButtonRegister::new(),
            interrupts: InterruptTable::new(),
        }
    }

    /// Resolve a buffer through the palette into a tightly packed RGB24
    /// byte array, row-major. Frontends hand this straight to a texture or
    /// image encoder.
    pub fn frame_rgb24(&self, buffer: BufferId) -> Vec<u8> {
        let mut out = Vec::with_capacity(RESOLUTION_WIDTH * RESOLUTION_HEIGHT * 3);

        for row in 0..RESOLUTION_HEIGHT {
            for col in 0..RESOLUTION_WIDTH {
                let index = self.display.pixel(buffer, row, col);
                let (r, g, b) = self.palette.resolve(index).to_rgb24();
                out.push(r);
                out.push(g);
                out.push(b);
            }
        }

        out
    }
}

impl Default for HardwareContext {
    fn default() -> Self {
        HardwareContext::new()
    }
}

/// The sole blocking point of the whole system.
///
/// `wait_for_vblank` must return only once the display has finished scanning
/// the visible rows; it is what paces the simulation to the refresh rate.
/// Frontends present the current frame here as well, since this is the one
/// moment the presented buffer is guaranteed complete.
pub trait FrameSync {
    fn wait_for_vblank(&mut self, ctx: &mut HardwareContext);
}

/// Reports vblank immediately. Used by tests and headless runs, where frames
/// should be simulated as fast as possible.
pub struct InstantSync;

impl FrameSync for InstantSync {
    fn wait_for_vblank(&mut self, ctx: &mut HardwareContext) {
        ctx.display.set_scanline(VBLANK_SCANLINE);
    }
}
