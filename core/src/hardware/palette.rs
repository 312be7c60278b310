use std::fmt;

use log::*;
use tinyvec::ArrayVec;

/// Hardware limit on the number of colour table entries.
pub const PALETTE_CAPACITY: usize = 256;

pub type ColorIndex = u8;

/// A colour with 5-bit-scale channels (0..=31), as stored by the hardware.
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Widen the 5-bit channels to 8-bit for host-side presentation.
    pub fn to_rgb24(self) -> (u8, u8, u8) {
        ((self.0 & 0x1F) << 3, (self.1 & 0x1F) << 3, (self.2 & 0x1F) << 3)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(rgb_tuple: (u8, u8, u8)) -> Self {
        Rgb(rgb_tuple.0, rgb_tuple.1, rgb_tuple.2)
    }
}

/// The colour table filled up; the requested colour was not added.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct PaletteFull;

impl fmt::Display for PaletteFull {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "palette table is full ({} entries)", PALETTE_CAPACITY)
    }
}

impl std::error::Error for PaletteFull {}

/// Append-only colour table.
///
/// Entries are packed 15-bit BGR words. An index handed out by `allocate` is
/// stable for the lifetime of the table; there is no reclamation.
#[derive(Debug, Clone, Default)]
pub struct PaletteTable {
    entries: ArrayVec<[u16; PALETTE_CAPACITY]>,
}

impl PaletteTable {
    pub fn new() -> Self {
        PaletteTable {
            entries: ArrayVec::new(),
        }
    }

    /// Append a colour and return its index.
    pub fn allocate(&mut self, colour: Rgb) -> Result<ColorIndex, PaletteFull> {
        if self.entries.len() == PALETTE_CAPACITY {
            warn!("Palette allocation refused for {:?}", colour);
            return Err(PaletteFull);
        }

        self.entries.push(pack(colour));
        let index = (self.entries.len() - 1) as ColorIndex;
        debug!("Palette entry {} assigned to {:?}", index, colour);

        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The raw packed entry, if allocated.
    pub fn entry(&self, index: ColorIndex) -> Option<u16> {
        self.entries.get(index as usize).copied()
    }

    /// The colour behind `index`; unallocated indices read back as black,
    /// mirroring the zero-initialised hardware table.
    pub fn resolve(&self, index: ColorIndex) -> Rgb {
        self.entry(index).map(unpack).unwrap_or_default()
    }
}

fn pack(colour: Rgb) -> u16 {
    let Rgb(r, g, b) = colour;
    (((b & 0x1F) as u16) << 10) | (((g & 0x1F) as u16) << 5) | ((r & 0x1F) as u16)
}

fn unpack(entry: u16) -> Rgb {
    Rgb(
        (entry & 0x1F) as u8,
        ((entry >> 5) & 0x1F) as u8,
        ((entry >> 10) & 0x1F) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indices_are_sequential_and_stable() {
        let mut palette = PaletteTable::new();

        assert_eq!(palette.allocate(Rgb(0, 20, 2)), Ok(0));
        assert_eq!(palette.allocate(Rgb(20, 0, 0)), Ok(1));
        assert_eq!(palette.allocate(Rgb(20, 20, 20)), Ok(2));

        assert_eq!(palette.resolve(0), Rgb(0, 20, 2));
        assert_eq!(palette.resolve(1), Rgb(20, 0, 0));
        assert_eq!(palette.resolve(2), Rgb(20, 20, 20));
    }

    #[test]
    fn entries_pack_channels_at_five_bit_positions() {
        let mut palette = PaletteTable::new();
        palette.allocate(Rgb(1, 2, 3)).unwrap();

        assert_eq!(palette.entry(0), Some((3 << 10) | (2 << 5) | 1));
    }

    #[test]
    fn allocation_fails_once_the_table_is_full() {
        let mut palette = PaletteTable::new();
        for _ in 0..PALETTE_CAPACITY {
            palette.allocate(Rgb(31, 31, 31)).unwrap();
        }

        assert_eq!(palette.allocate(Rgb(0, 0, 0)), Err(PaletteFull));
        assert_eq!(palette.len(), PALETTE_CAPACITY);
    }

    #[test]
    fn unallocated_indices_resolve_to_black() {
        let palette = PaletteTable::new();
        assert_eq!(palette.resolve(42), Rgb(0, 0, 0));
    }
}
