use bitflags::bitflags;

bitflags! {
    /// LCDC (0xFF40).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct LcdControl: u8 {
        const LCD_ENABLE = 0x80;
        /// Window tile map at 0x9C00 instead of 0x9800.
        const WINDOW_MAP_HIGH = 0x40;
        const WINDOW_ENABLE = 0x20;
        /// Tile data at 0x8000 with unsigned indices; otherwise 0x9000 with
        /// signed indices.
        const TILE_DATA_UNSIGNED = 0x10;
        /// Background tile map at 0x9C00 instead of 0x9800.
        const BG_MAP_HIGH = 0x08;
        const OBJ_TALL = 0x04;
        const OBJ_ENABLE = 0x02;
        const BG_ENABLE = 0x01;
    }
}

bitflags! {
    /// The writable interrupt-select half of STAT (0xFF41, bits 3..6).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct StatSelect: u8 {
        const HBLANK = 0x08;
        const VBLANK = 0x10;
        const OAM_SEARCH = 0x20;
        const LYC = 0x40;
    }
}

bitflags! {
    /// OAM attribute byte.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpriteFlags: u8 {
        /// Hide the sprite behind non-zero background colours.
        const BEHIND_BG = 0x80;
        const Y_FLIP = 0x40;
        const X_FLIP = 0x20;
        /// Use OBP1 instead of OBP0.
        const PALETTE1 = 0x10;
    }
}

/// PPU mode as reported in STAT bits 0..1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamSearch = 2,
    PixelTransfer = 3,
}

impl Mode {
    /// Cycles spent in this mode before moving on. V-Blank counts one line
    /// at a time.
    pub const fn budget(self) -> u32 {
        match self {
            Mode::OamSearch => super::OAM_SEARCH_CYCLES,
            Mode::PixelTransfer => super::PIXEL_TRANSFER_CYCLES,
            Mode::HBlank => super::HBLANK_CYCLES,
            Mode::VBlank => super::LINE_CYCLES,
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}
