use super::{IoHook, Mmu, Region};

impl Mmu {
    /// Side-effect-free read of any address.
    pub fn read(&self, addr: u16) -> u8 {
        let (region, offset) = Region::decode(addr);
        match region {
            Region::Rom | Region::ExternalRam => match &self.cartridge {
                Some(cart) => cart.read8(addr),
                None => 0xFF,
            },
            Region::Vram => self.ppu.vram_read(offset),
            Region::Wram => self.wram[usize::from(offset)],
            Region::Oam => self.ppu.oam_read(addr),
            Region::Unusable => 0xFF,
            Region::Io => self.read_io(addr),
            Region::Hram => self.hram[usize::from(offset)],
            Region::InterruptEnable => self.ie_reg,
        }
    }

    fn read_io(&self, addr: u16) -> u8 {
        match IoHook::for_address(addr) {
            IoHook::Joypad => self.joypad.read_register(),
            IoHook::Serial => self.serial.read_register(addr),
            IoHook::Timer => self.timer.read_register(addr),
            IoHook::InterruptFlag => 0xE0 | self.if_reg.bits(),
            IoHook::Sound => self.apu.read_register(addr),
            IoHook::Ppu => self.ppu.read_register(addr),
            IoHook::Dma => self.dma_source,
            IoHook::Plain => self.io[usize::from(addr & 0x7F)],
        }
    }
}
