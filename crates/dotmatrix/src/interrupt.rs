//! Interrupt request/enable bits shared by the CPU and the peripherals.

use bitflags::bitflags;

bitflags! {
    /// The five interrupt lines as laid out in IF (0xFF0F) and IE (0xFFFF).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Interrupts: u8 {
        const VBLANK = 0x01;
        const STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

impl Interrupts {
    pub const IF_ADDR: u16 = 0xFF0F;
    pub const IE_ADDR: u16 = 0xFFFF;

    #[inline]
    pub fn request(&mut self, interrupt: Interrupt) {
        self.insert(interrupt.flag());
    }

    /// Highest-priority line in this set, if any.
    #[inline]
    pub fn highest(self) -> Option<Interrupt> {
        Interrupt::ALL.into_iter().find(|i| self.contains(i.flag()))
    }
}

/// A single interrupt source, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interrupt {
    VBlank,
    Stat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::Stat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn flag(self) -> Interrupts {
        Interrupts::from_bits_truncate(1 << self.bit())
    }

    /// Service routine address: 0x40, 0x48, 0x50, 0x58, 0x60.
    #[inline]
    pub const fn vector(self) -> u16 {
        0x0040 + (self.bit() as u16) * 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_follow_priority_order() {
        let vectors: Vec<u16> = Interrupt::ALL.iter().map(|i| i.vector()).collect();
        assert_eq!(vectors, vec![0x40, 0x48, 0x50, 0x58, 0x60]);
    }

    #[test]
    fn highest_picks_lowest_bit() {
        let pending = Interrupts::TIMER | Interrupts::JOYPAD | Interrupts::STAT;
        assert_eq!(pending.highest(), Some(Interrupt::Stat));
        assert_eq!(Interrupts::empty().highest(), None);
    }

    #[test]
    fn truncation_drops_upper_bits() {
        assert_eq!(Interrupts::from_bits_truncate(0xE1), Interrupts::VBLANK);
    }
}
