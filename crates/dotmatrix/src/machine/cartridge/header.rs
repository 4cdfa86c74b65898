use anyhow::{bail, ensure};

use super::{RAM_BANK_SIZE, ROM_BANK_SIZE};

const TITLE: std::ops::Range<usize> = 0x134..0x144;
const TYPE: usize = 0x147;
const ROM_SIZE: usize = 0x148;
const RAM_SIZE: usize = 0x149;
const HEADER_END: usize = 0x150;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartridgeKind {
    RomOnly,
    Mbc1,
}

/// The fields of the cartridge header this emulator cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub kind: CartridgeKind,
    /// Raw type byte at 0x147.
    pub type_code: u8,
    pub rom_banks: usize,
    /// External RAM size in bytes.
    pub ram_size: usize,
}

impl Header {
    pub fn parse(rom: &[u8]) -> anyhow::Result<Self> {
        ensure!(
            rom.len() >= HEADER_END,
            "image is {} bytes, shorter than the 0x{:X}-byte header",
            rom.len(),
            HEADER_END
        );

        let title = rom[TITLE]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
            .collect();

        let type_code = rom[TYPE];
        let kind = match type_code {
            0x00 | 0x08 | 0x09 => CartridgeKind::RomOnly,
            0x01..=0x03 => CartridgeKind::Mbc1,
            other => bail!("unsupported cartridge type 0x{other:02X}"),
        };

        let rom_code = rom[ROM_SIZE];
        ensure!(rom_code <= 0x08, "invalid ROM size code 0x{rom_code:02X}");
        let rom_banks = 2usize << rom_code;

        let ram_size = match rom[RAM_SIZE] {
            0x00 => 0,
            // 2 KiB parts are rounded up to a full bank.
            0x01 | 0x02 => RAM_BANK_SIZE,
            0x03 => 4 * RAM_BANK_SIZE,
            0x04 => 16 * RAM_BANK_SIZE,
            0x05 => 8 * RAM_BANK_SIZE,
            other => bail!("invalid RAM size code 0x{other:02X}"),
        };

        Ok(Self {
            title,
            kind,
            type_code,
            rom_banks,
            ram_size,
        })
    }

    pub fn rom_size(&self) -> usize {
        self.rom_banks * ROM_BANK_SIZE
    }
}
