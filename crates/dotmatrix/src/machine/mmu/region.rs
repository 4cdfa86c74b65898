/// Backing region of a CPU address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// 0x0000..=0x7FFF, forwarded to the cartridge.
    Rom,
    Vram,
    /// 0xA000..=0xBFFF, forwarded to the cartridge.
    ExternalRam,
    /// Work RAM, including its echo at 0xE000..=0xFDFF.
    Wram,
    Oam,
    /// 0xFEA0..=0xFEFF.
    Unusable,
    Io,
    Hram,
    InterruptEnable,
}

impl Region {
    /// Split `addr` into its region and the offset from the start of that
    /// region. Echo RAM decodes to `Wram` at the mirrored offset. Cartridge
    /// regions keep the full address since controllers decode it themselves.
    pub const fn decode(addr: u16) -> (Region, u16) {
        match addr {
            0x0000..=0x7FFF => (Region::Rom, addr),
            0x8000..=0x9FFF => (Region::Vram, addr - 0x8000),
            0xA000..=0xBFFF => (Region::ExternalRam, addr),
            0xC000..=0xDFFF => (Region::Wram, addr - 0xC000),
            0xE000..=0xFDFF => (Region::Wram, addr - 0xE000),
            0xFE00..=0xFE9F => (Region::Oam, addr - 0xFE00),
            0xFEA0..=0xFEFF => (Region::Unusable, addr - 0xFEA0),
            0xFF00..=0xFF7F => (Region::Io, addr - 0xFF00),
            0xFF80..=0xFFFE => (Region::Hram, addr - 0xFF80),
            0xFFFF => (Region::InterruptEnable, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(Region::decode(0x7FFF), (Region::Rom, 0x7FFF));
        assert_eq!(Region::decode(0x8000), (Region::Vram, 0));
        assert_eq!(Region::decode(0xBFFF), (Region::ExternalRam, 0xBFFF));
        assert_eq!(Region::decode(0xDFFF), (Region::Wram, 0x1FFF));
        assert_eq!(Region::decode(0xFE9F), (Region::Oam, 0x9F));
        assert_eq!(Region::decode(0xFEA0), (Region::Unusable, 0));
        assert_eq!(Region::decode(0xFF7F), (Region::Io, 0x7F));
        assert_eq!(Region::decode(0xFFFE), (Region::Hram, 0x7E));
        assert_eq!(Region::decode(0xFFFF), (Region::InterruptEnable, 0));
    }

    #[test]
    fn echo_maps_onto_wram() {
        assert_eq!(Region::decode(0xE123), Region::decode(0xC123));
        assert_eq!(Region::decode(0xFDFF), (Region::Wram, 0x1DFF));
    }
}
