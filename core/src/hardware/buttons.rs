use bitflags::*;

/// The logical buttons exposed by the button register.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub enum Button {
    A,
    B,
    Select,
    Start,
    Right,
    Left,
    Up,
    Down,
    R,
    L,
}

bitflags! {
    /// Raw button register bits, one per button.
    struct ButtonFlags: u16 {
        const A      = 1 << 0;
        const B      = 1 << 1;
        const SELECT = 1 << 2;
        const START  = 1 << 3;
        const RIGHT  = 1 << 4;
        const LEFT   = 1 << 5;
        const UP     = 1 << 6;
        const DOWN   = 1 << 7;
        const R      = 1 << 8;
        const L      = 1 << 9;
    }
}

impl Button {
    fn flag(self) -> ButtonFlags {
        match self {
            Button::A => ButtonFlags::A,
            Button::B => ButtonFlags::B,
            Button::Select => ButtonFlags::SELECT,
            Button::Start => ButtonFlags::START,
            Button::Right => ButtonFlags::RIGHT,
            Button::Left => ButtonFlags::LEFT,
            Button::Up => ButtonFlags::UP,
            Button::Down => ButtonFlags::DOWN,
            Button::R => ButtonFlags::R,
            Button::L => ButtonFlags::L,
        }
    }
}

/// Snapshot of the hardware button register.
///
/// The register is ACTIVE-LOW: a clear bit means the button is held. The
/// polarity is confined to this type; everything else asks `is_pressed`.
#[derive(Debug, Clone)]
pub struct ButtonRegister {
    raw: ButtonFlags,
}

impl ButtonRegister {
    /// All bits set, i.e. nothing pressed.
    pub fn new() -> Self {
        ButtonRegister {
            raw: ButtonFlags::all(),
        }
    }

    /// Raw level query for `button`, re-evaluated every frame. No debouncing
    /// and no edge detection.
    pub fn is_pressed(&self, button: Button) -> bool {
        !self.raw.contains(button.flag())
    }

    /// Frontend/test hook for driving the register.
    pub fn set_pressed(&mut self, button: Button, pressed: bool) {
        self.raw.set(button.flag(), !pressed);
    }

    /// The register value as the hardware would read it.
    pub fn raw_bits(&self) -> u16 {
        self.raw.bits()
    }
}

impl Default for ButtonRegister {
    fn default() -> Self {
        ButtonRegister::new()
    }
}
