use super::{Ppu, StatSelect};
use crate::Interrupts;

pub const LCDC: u16 = 0xFF40;
pub const STAT: u16 = 0xFF41;
pub const SCY: u16 = 0xFF42;
pub const SCX: u16 = 0xFF43;
pub const LY: u16 = 0xFF44;
pub const LYC: u16 = 0xFF45;
pub const BGP: u16 = 0xFF47;
pub const OBP0: u16 = 0xFF48;
pub const OBP1: u16 = 0xFF49;
pub const WY: u16 = 0xFF4A;
pub const WX: u16 = 0xFF4B;

impl Ppu {
    /// Read one of the LCD registers in 0xFF40..=0xFF4B (DMA excluded).
    pub fn read_register(&self, addr: u16) -> u8 {
        match addr {
            LCDC => self.lcdc.bits(),
            STAT => {
                let coincidence = if self.lyc_match { 0x04 } else { 0x00 };
                0x80 | self.stat_select.bits() | coincidence | self.mode.bits()
            }
            SCY => self.scy,
            SCX => self.scx,
            LY => self.ly,
            LYC => self.lyc,
            BGP => self.bgp,
            OBP0 => self.obp0,
            OBP1 => self.obp1,
            WY => self.wy,
            WX => self.wx,
            _ => 0xFF,
        }
    }

    /// Write one of the LCD registers. LCDC, STAT, LY and LYC have side
    /// effects; the rest are stored verbatim.
    pub fn write_register(&mut self, addr: u16, value: u8, irq: &mut Interrupts) {
        match addr {
            LCDC => self.set_lcdc(value, irq),
            // Mode and coincidence bits are derived.
            STAT => self.stat_select = StatSelect::from_bits_truncate(value),
            SCY => self.scy = value,
            SCX => self.scx = value,
            LY => {
                self.ly = 0;
                self.mode_clock = 0;
                if self.lcd_enabled() {
                    self.mode = super::Mode::OamSearch;
                }
                self.update_lyc(irq);
            }
            LYC => {
                self.lyc = value;
                self.update_lyc(irq);
            }
            BGP => self.bgp = value,
            OBP0 => self.obp0 = value,
            OBP1 => self.obp1 = value,
            WY => self.wy = value,
            WX => self.wx = value,
            _ => {}
        }
    }
}
