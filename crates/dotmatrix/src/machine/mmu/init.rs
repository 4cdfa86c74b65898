use super::Mmu;
use crate::Interrupts;

impl Mmu {
    /// I/O state the DMG boot ROM leaves behind at PC=0x0100.
    pub fn apply_dmg_boot_state(&mut self) {
        self.joypad.init_dmg();
        self.serial.init_dmg();
        self.timer.init_dmg();
        self.apu.init_dmg();

        self.if_reg = Interrupts::VBLANK;
        self.ie_reg = 0x00;
        self.dma_source = 0xFF;

        // LCDC last so the LCD switches on with the palette in place.
        const LCD: [(u16, u8); 9] = [
            (0xFF42, 0x00), // SCY
            (0xFF43, 0x00), // SCX
            (0xFF45, 0x00), // LYC
            (0xFF47, 0xFC), // BGP
            (0xFF48, 0x00), // OBP0
            (0xFF49, 0x00), // OBP1
            (0xFF4A, 0x00), // WY
            (0xFF4B, 0x00), // WX
            (0xFF40, 0x91), // LCDC
        ];
        for (addr, value) in LCD {
            self.ppu.write_register(addr, value, &mut self.if_reg);
        }
    }
}
