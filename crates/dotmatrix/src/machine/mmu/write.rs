use super::{IoHook, Mmu, Region};
use crate::Interrupts;

impl Mmu {
    pub fn write(&mut self, addr: u16, value: u8) {
        let (region, offset) = Region::decode(addr);
        match region {
            Region::Rom | Region::ExternalRam => {
                if let Some(cart) = self.cartridge.as_mut() {
                    cart.write8(addr, value);
                }
            }
            Region::Vram => self.ppu.vram_write(offset, value),
            Region::Wram => self.wram[usize::from(offset)] = value,
            Region::Oam => self.ppu.oam_write(addr, value),
            Region::Unusable => {}
            Region::Io => self.write_io(addr, value),
            Region::Hram => self.hram[usize::from(offset)] = value,
            Region::InterruptEnable => self.ie_reg = value,
        }
    }

    fn write_io(&mut self, addr: u16, value: u8) {
        match IoHook::for_address(addr) {
            IoHook::Joypad => self.joypad.write_register(value),
            IoHook::Serial => self.serial.write_register(addr, value, &mut self.if_reg),
            IoHook::Timer => self.timer.write_register(addr, value),
            IoHook::InterruptFlag => self.if_reg = Interrupts::from_bits_truncate(value),
            IoHook::Sound => self.apu.write_register(addr, value),
            IoHook::Ppu => self.ppu.write_register(addr, value, &mut self.if_reg),
            IoHook::Dma => self.oam_dma(value),
            IoHook::Plain => self.io[usize::from(addr & 0x7F)] = value,
        }
    }
}
