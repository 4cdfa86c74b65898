//! Picture processing unit.
//!
//! Owns VRAM, OAM and the LCD registers, runs the four-mode scanline state
//! machine and renders each line into a 160x144 buffer of 2-bit shades
//! when pixel transfer ends. Interrupt requests are raised on the
//! `Interrupts` latch handed in by the caller.

mod mmio;
mod regs;
mod render;
mod timing;

pub use regs::{LcdControl, Mode, SpriteFlags, StatSelect};

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const VRAM_SIZE: usize = 0x2000;
pub const OAM_SIZE: usize = 0xA0;

pub const OAM_SEARCH_CYCLES: u32 = 80;
pub const PIXEL_TRANSFER_CYCLES: u32 = 172;
pub const HBLANK_CYCLES: u32 = 204;
pub const LINE_CYCLES: u32 = OAM_SEARCH_CYCLES + PIXEL_TRANSFER_CYCLES + HBLANK_CYCLES;
/// First off-screen line; entering it starts V-Blank.
pub const VBLANK_START_LINE: u8 = 144;
pub const LINES_PER_FRAME: u8 = 154;
/// 154 lines of 456 cycles.
pub const FRAME_CYCLES: u32 = LINE_CYCLES * LINES_PER_FRAME as u32;

pub struct Ppu {
    vram: Box<[u8; VRAM_SIZE]>,
    oam: [u8; OAM_SIZE],

    lcdc: LcdControl,
    stat_select: StatSelect,
    scy: u8,
    scx: u8,
    ly: u8,
    lyc: u8,
    bgp: u8,
    obp0: u8,
    obp1: u8,
    wy: u8,
    wx: u8,

    mode: Mode,
    /// Cycles spent in the current mode.
    mode_clock: u32,
    /// LY == LYC as of the last check; the STAT request fires only when
    /// this goes from false to true.
    lyc_match: bool,

    framebuffer: Box<[u8; SCREEN_WIDTH * SCREEN_HEIGHT]>,
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppu {
    /// A PPU with the LCD switched off and all memory cleared.
    pub fn new() -> Self {
        Self {
            vram: Box::new([0; VRAM_SIZE]),
            oam: [0; OAM_SIZE],
            lcdc: LcdControl::empty(),
            stat_select: StatSelect::empty(),
            scy: 0,
            scx: 0,
            ly: 0,
            lyc: 0,
            bgp: 0,
            obp0: 0,
            obp1: 0,
            wy: 0,
            wx: 0,
            mode: Mode::HBlank,
            mode_clock: 0,
            lyc_match: false,
            framebuffer: Box::new([0; SCREEN_WIDTH * SCREEN_HEIGHT]),
        }
    }

    /// Row-major 160x144 buffer, one palette-mapped 2-bit shade per pixel
    /// (0 = lightest, 3 = darkest).
    pub fn framebuffer(&self) -> &[u8] {
        &self.framebuffer[..]
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn line(&self) -> u8 {
        self.ly
    }

    #[inline]
    pub fn mode_clock(&self) -> u32 {
        self.mode_clock
    }

    #[inline]
    pub fn lcdc(&self) -> LcdControl {
        self.lcdc
    }

    #[inline]
    pub fn lcd_enabled(&self) -> bool {
        self.lcdc.contains(LcdControl::LCD_ENABLE)
    }

    pub fn vram_read(&self, addr: u16) -> u8 {
        self.vram[usize::from(addr) & (VRAM_SIZE - 1)]
    }

    pub fn vram_write(&mut self, addr: u16, value: u8) {
        self.vram[usize::from(addr) & (VRAM_SIZE - 1)] = value;
    }

    pub fn oam_read(&self, addr: u16) -> u8 {
        self.oam
            .get(usize::from(addr.wrapping_sub(0xFE00)))
            .copied()
            .unwrap_or(0xFF)
    }

    pub fn oam_write(&mut self, addr: u16, value: u8) {
        if let Some(slot) = self.oam.get_mut(usize::from(addr.wrapping_sub(0xFE00))) {
            *slot = value;
        }
    }

    /// Replace all of OAM in one go (OAM DMA).
    pub fn oam_load(&mut self, data: &[u8; OAM_SIZE]) {
        self.oam = *data;
    }
}

#[cfg(test)]
mod tests;
