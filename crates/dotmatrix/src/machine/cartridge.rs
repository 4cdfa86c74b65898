//! Cartridge images and their bank controllers.
//!
//! The MMU forwards 0x0000..=0x7FFF and 0xA000..=0xBFFF to a
//! `Box<dyn Cartridge>` without interpreting the accesses.

mod header;
mod mbc1;
mod rom_only;

use anyhow::{bail, Context};

pub use header::{CartridgeKind, Header};
pub use mbc1::Mbc1;
pub use rom_only::RomOnly;

pub const ROM_BANK_SIZE: usize = 0x4000;
pub const RAM_BANK_SIZE: usize = 0x2000;

pub trait Cartridge {
    /// Read from ROM (0x0000..=0x7FFF) or external RAM (0xA000..=0xBFFF).
    fn read8(&self, addr: u16) -> u8;

    /// Write to ROM space (controller registers) or external RAM.
    fn write8(&mut self, addr: u16, value: u8);

    fn header(&self) -> &Header;
}

/// Parse the header and build the matching controller.
pub fn load(rom: Vec<u8>) -> anyhow::Result<Box<dyn Cartridge>> {
    let header = Header::parse(&rom).context("failed to parse cartridge header")?;
    if rom.len() < ROM_BANK_SIZE * 2 {
        bail!(
            "ROM image is {} bytes; at least two 16 KiB banks are required",
            rom.len()
        );
    }
    if rom.len() != header.rom_size() {
        log::warn!(
            "GB cart: header declares {} bytes of ROM but image has {}",
            header.rom_size(),
            rom.len()
        );
    }

    log::info!(
        "GB cart: loaded \"{}\" ({:?}, {} KiB ROM, {} KiB RAM)",
        header.title,
        header.kind,
        rom.len() / 1024,
        header.ram_size / 1024
    );

    let cartridge: Box<dyn Cartridge> = match header.kind {
        CartridgeKind::RomOnly => Box::new(RomOnly::new(rom, header)),
        CartridgeKind::Mbc1 => Box::new(Mbc1::new(rom, header)),
    };
    Ok(cartridge)
}
