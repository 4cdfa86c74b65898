use super::{Cartridge, Header, RAM_BANK_SIZE, ROM_BANK_SIZE};

/// MBC1 controller: 5-bit ROM bank register, a 2-bit secondary register
/// shared between the upper ROM bank bits and the RAM bank, and a mode
/// bit selecting which of the two uses the secondary register applies to.
pub struct Mbc1 {
    rom: Vec<u8>,
    ram: Vec<u8>,
    header: Header,
    rom_bank_count: usize,
    ram_bank_count: usize,
    rom_bank_low5: u8,
    bank_high2: u8,
    ram_enable: bool,
    /// Mode 1: the secondary register also banks 0x0000..=0x3FFF and RAM.
    advanced_banking: bool,
}

impl Mbc1 {
    pub fn new(rom: Vec<u8>, header: Header) -> Self {
        let rom_bank_count = header.rom_banks.max(2);
        let ram_bank_count = header.ram_size / RAM_BANK_SIZE;
        Self {
            ram: vec![0; header.ram_size],
            rom,
            header,
            rom_bank_count,
            ram_bank_count,
            rom_bank_low5: 1,
            bank_high2: 0,
            ram_enable: false,
            advanced_banking: false,
        }
    }

    fn rom_bank(&self, addr: u16) -> usize {
        let high = usize::from(self.bank_high2) << 5;
        let bank = if addr < 0x4000 {
            if self.advanced_banking {
                high
            } else {
                0
            }
        } else {
            high | usize::from(self.rom_bank_low5)
        };
        bank % self.rom_bank_count
    }

    fn ram_offset(&self, addr: u16) -> Option<usize> {
        if !self.ram_enable || self.ram_bank_count == 0 {
            return None;
        }
        let bank = if self.advanced_banking {
            usize::from(self.bank_high2) % self.ram_bank_count
        } else {
            0
        };
        Some(bank * RAM_BANK_SIZE + usize::from(addr - 0xA000))
    }
}

impl Cartridge for Mbc1 {
    fn read8(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => {
                let index = self.rom_bank(addr) * ROM_BANK_SIZE + usize::from(addr & 0x3FFF);
                match self.rom.get(index) {
                    Some(&b) => b,
                    None => {
                        log::warn!(
                            "GB cart: MBC1 ROM offset 0x{index:X} outside {}-byte image",
                            self.rom.len()
                        );
                        0xFF
                    }
                }
            }
            0xA000..=0xBFFF => match self.ram_offset(addr) {
                Some(offset) => self.ram.get(offset).copied().unwrap_or_else(|| {
                    log::warn!("GB cart: MBC1 RAM offset 0x{offset:X} out of range");
                    0xFF
                }),
                None => 0xFF,
            },
            _ => 0xFF,
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram_enable = (value & 0x0F) == 0x0A,
            0x2000..=0x3FFF => {
                self.rom_bank_low5 = value & 0x1F;
                if self.rom_bank_low5 == 0 {
                    self.rom_bank_low5 = 1;
                }
            }
            0x4000..=0x5FFF => self.bank_high2 = value & 0x03,
            0x6000..=0x7FFF => self.advanced_banking = value & 0x01 != 0,
            0xA000..=0xBFFF => {
                if let Some(offset) = self.ram_offset(addr) {
                    if let Some(slot) = self.ram.get_mut(offset) {
                        *slot = value;
                    }
                }
            }
            _ => {}
        }
    }

    fn header(&self) -> &Header {
        &self.header
    }
}
