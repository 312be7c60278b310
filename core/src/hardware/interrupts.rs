use crate::hardware::interrupts::Interrupt::*;

/// Number of slots in the hardware interrupt vector table.
pub const INTERRUPT_SLOTS: usize = 13;

pub type InterruptHandler = fn();

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub enum Interrupt {
    VBlank = 0,
    HBlank = 1,
    VCounter = 2,
    Timer0 = 3,
    Timer1 = 4,
    Timer2 = 5,
    Timer3 = 6,
    Serial = 7,
    Dma0 = 8,
    Dma1 = 9,
    Dma2 = 10,
    Dma3 = 11,
    Keypad = 12,
}

impl Interrupt {
    pub fn iter() -> impl Iterator<Item = Interrupt> {
        [
            VBlank, HBlank, VCounter, Timer0, Timer1, Timer2, Timer3, Serial, Dma0, Dma1, Dma2,
            Dma3, Keypad,
        ]
        .iter()
        .copied()
    }
}

fn interrupt_ignore() {}

/// The interrupt vector table. Every slot is bound to a no-op handler; no
/// game logic is interrupt driven, the loop paces itself off the scanline
/// counter instead.
pub struct InterruptTable {
    handlers: [InterruptHandler; INTERRUPT_SLOTS],
}

impl InterruptTable {
    pub fn new() -> Self {
        InterruptTable {
            handlers: [interrupt_ignore; INTERRUPT_SLOTS],
        }
    }

    pub fn raise(&self, interrupt: Interrupt) {
        (self.handlers[interrupt as usize])()
    }
}

impl Default for InterruptTable {
    fn default() -> Self {
        InterruptTable::new()
    }
}

#[cfg(test)]
mod test {
    use super::Interrupt;
    use super::Interrupt::*;
    use super::{InterruptTable, INTERRUPT_SLOTS};

    #[test]
    fn test_interrupt_order() {
        let ordered_array = [
            VBlank, HBlank, VCounter, Timer0, Timer1, Timer2, Timer3, Serial, Dma0, Dma1, Dma2,
            Dma3, Keypad,
        ];
        assert_eq!(ordered_array.len(), INTERRUPT_SLOTS);
        for (i, interrupt) in Interrupt::iter().enumerate() {
            assert_eq!(ordered_array[i], interrupt);
            assert_eq!(interrupt as usize, i);
        }
    }

    #[test]
    fn every_slot_is_a_no_op() {
        let table = InterruptTable::new();
        for interrupt in Interrupt::iter() {
            table.raise(interrupt);
        }
    }
}
