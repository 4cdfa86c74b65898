use super::{Cartridge, Header, RAM_BANK_SIZE};

/// 32 KiB of fixed ROM and at most one bank of always-enabled RAM.
pub struct RomOnly {
    rom: Vec<u8>,
    ram: Vec<u8>,
    header: Header,
}

impl RomOnly {
    pub fn new(rom: Vec<u8>, header: Header) -> Self {
        let ram = vec![0; header.ram_size.min(RAM_BANK_SIZE)];
        Self { rom, ram, header }
    }
}

impl Cartridge for RomOnly {
    fn read8(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => match self.rom.get(usize::from(addr)) {
                Some(&b) => b,
                None => {
                    log::warn!("GB cart: ROM read 0x{addr:04X} past end of image");
                    0xFF
                }
            },
            0xA000..=0xBFFF => self
                .ram
                .get(usize::from(addr - 0xA000))
                .copied()
                .unwrap_or(0xFF),
            _ => 0xFF,
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        if let 0xA000..=0xBFFF = addr {
            if let Some(slot) = self.ram.get_mut(usize::from(addr - 0xA000)) {
                *slot = value;
            }
        }
    }

    fn header(&self) -> &Header {
        &self.header
    }
}
