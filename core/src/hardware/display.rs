use bitflags::*;

pub const RESOLUTION_WIDTH: usize = 240;
pub const RESOLUTION_HEIGHT: usize = 160;
/// Two packed pixels per addressable word.
pub const WORDS_PER_BUFFER: usize = RESOLUTION_WIDTH * RESOLUTION_HEIGHT / 2;

/// First scanline of the vertical blanking interval.
pub const VBLANK_SCANLINE: u16 = 160;
/// The scan counter runs past the visible region before wrapping.
pub const SCANLINES_PER_FRAME: u16 = 228;

bitflags! {
    /// The display mode/control register.
    pub struct DisplayControl: u32 {
        /// Indexed-colour bitmap mode.
        const MODE4     = 0x0004;
        /// Background layer 2 enable, the only layer mode 4 renders.
        const BG2       = 0x0400;
        /// When set the back page is presented instead of the front page.
        const SHOW_BACK = 0x0010;
    }
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub enum BufferId {
    Front,
    Back,
}

impl BufferId {
    pub fn other(self) -> BufferId {
        match self {
            BufferId::Front => BufferId::Back,
            BufferId::Back => BufferId::Front,
        }
    }
}

/// The double-buffered indexed-colour display surface.
///
/// Pixels are 8-bit palette indices stored two to a word, the even column in
/// the low byte and the odd column in the high byte, so single-pixel writes
/// are read-modify-write on the containing word.
pub struct DisplaySurface {
    control: DisplayControl,
    front: [u16; WORDS_PER_BUFFER],
    back: [u16; WORDS_PER_BUFFER],
    scanline: u16,
}

impl DisplaySurface {
    /// A fresh surface in indexed-colour mode with the front page presented.
    pub fn new() -> Self {
        DisplaySurface {
            control: DisplayControl::MODE4 | DisplayControl::BG2,
            front: [0; WORDS_PER_BUFFER],
            back: [0; WORDS_PER_BUFFER],
            scanline: 0,
        }
    }

    pub fn control(&self) -> DisplayControl {
        self.control
    }

    /// The buffer the hardware is currently scanning out.
    pub fn presented(&self) -> BufferId {
        if self.control.contains(DisplayControl::SHOW_BACK) {
            BufferId::Back
        } else {
            BufferId::Front
        }
    }

    /// The buffer that is safe to draw into.
    pub fn drawable(&self) -> BufferId {
        self.presented().other()
    }

    /// Toggle which page is presented and return the newly drawable buffer.
    ///
    /// The hardware only shows the new page from the next vertical blank, but
    /// the returned handle is valid for drawing immediately.
    pub fn flip(&mut self) -> BufferId {
        self.control.toggle(DisplayControl::SHOW_BACK);
        self.drawable()
    }

    /// Write a palette index at (row, col) without disturbing the pixel that
    /// shares its storage word.
    ///
    /// Out-of-range coordinates are ignored; raw writes past the buffer would
    /// land in unrelated memory on the real device, so the guard is the
    /// clamping behaviour rather than an assertion.
    pub fn set_pixel(&mut self, buffer: BufferId, row: usize, col: usize, colour: u8) {
        if row >= RESOLUTION_HEIGHT || col >= RESOLUTION_WIDTH {
            return;
        }
        let offset = (row * RESOLUTION_WIDTH + col) >> 1;
        let words = self.buffer_mut(buffer);
        let word = words[offset];

        words[offset] = if col & 1 == 1 {
            ((colour as u16) << 8) | (word & 0x00FF)
        } else {
            (word & 0xFF00) | colour as u16
        };
    }

    /// Read back the palette index at (row, col); out-of-range reads are 0.
    pub fn pixel(&self, buffer: BufferId, row: usize, col: usize) -> u8 {
        if row >= RESOLUTION_HEIGHT || col >= RESOLUTION_WIDTH {
            return 0;
        }
        let offset = (row * RESOLUTION_WIDTH + col) >> 1;
        let word = self.buffer(buffer)[offset];

        if col & 1 == 1 {
            (word >> 8) as u8
        } else {
            (word & 0x00FF) as u8
        }
    }

    pub fn scanline(&self) -> u16 {
        self.scanline
    }

    pub fn set_scanline(&mut self, scanline: u16) {
        self.scanline = scanline % SCANLINES_PER_FRAME;
    }

    /// Whether the scan counter has passed the last visible row.
    pub fn in_vblank(&self) -> bool {
        self.scanline >= VBLANK_SCANLINE
    }

    fn buffer(&self, buffer: BufferId) -> &[u16; WORDS_PER_BUFFER] {
        match buffer {
            BufferId::Front => &self.front,
            BufferId::Back => &self.back,
        }
    }

    fn buffer_mut(&mut self, buffer: BufferId) -> &mut [u16; WORDS_PER_BUFFER] {
        match buffer {
            BufferId::Front => &mut self.front,
            BufferId::Back => &mut self.back,
        }
    }
}
