//! Sound register file.
//!
//! No audio is produced. The registers hold what software writes so that
//! read-modify-write sequences behave, and NR52 power-off clears and locks
//! the channel registers like on hardware.

pub const NR10: u16 = 0xFF10;
pub const NR52: u16 = 0xFF26;
pub const WAVE_RAM: u16 = 0xFF30;
const LAST: u16 = 0xFF3F;

/// Bits that read back as 1 regardless of the stored value (write-only
/// and unused bits), for 0xFF10..=0xFF2F. Wave RAM reads back as written.
const READ_MASK: [u8; 0x20] = [
    0x80, 0x3F, 0x00, 0xFF, 0xBF, // NR10-NR14
    0xFF, 0x3F, 0x00, 0xFF, 0xBF, // unused, NR21-NR24
    0x7F, 0xFF, 0x9F, 0xFF, 0xBF, // NR30-NR34
    0xFF, 0xFF, 0x00, 0x00, 0xBF, // unused, NR41-NR44
    0x00, 0x00, 0x70, // NR50-NR52
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

pub struct Apu {
    regs: [u8; (LAST - NR10 + 1) as usize],
}

impl Default for Apu {
    fn default() -> Self {
        Self {
            regs: [0; (LAST - NR10 + 1) as usize],
        }
    }
}

impl Apu {
    /// Register contents left behind by the DMG boot ROM.
    pub fn init_dmg(&mut self) {
        const POST_BOOT: [(u16, u8); 21] = [
            (0xFF10, 0x80),
            (0xFF11, 0xBF),
            (0xFF12, 0xF3),
            (0xFF13, 0xFF),
            (0xFF14, 0xBF),
            (0xFF16, 0x3F),
            (0xFF17, 0x00),
            (0xFF18, 0xFF),
            (0xFF19, 0xBF),
            (0xFF1A, 0x7F),
            (0xFF1B, 0xFF),
            (0xFF1C, 0x9F),
            (0xFF1D, 0xFF),
            (0xFF1E, 0xBF),
            (0xFF20, 0xFF),
            (0xFF21, 0x00),
            (0xFF22, 0x00),
            (0xFF23, 0xBF),
            (0xFF24, 0x77),
            (0xFF25, 0xF3),
            (0xFF26, 0xF1),
        ];
        for (addr, value) in POST_BOOT {
            *self.reg_mut(addr) = value;
        }
    }

    #[inline]
    fn reg_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.regs[usize::from(addr - NR10)]
    }

    #[inline]
    pub fn powered(&self) -> bool {
        self.regs[usize::from(NR52 - NR10)] & 0x80 != 0
    }

    pub fn read_register(&self, addr: u16) -> u8 {
        match addr {
            WAVE_RAM..=LAST => self.regs[usize::from(addr - NR10)],
            NR10..=0xFF2F => {
                let index = usize::from(addr - NR10);
                self.regs[index] | READ_MASK[index]
            }
            _ => 0xFF,
        }
    }

    pub fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            NR52 => self.write_nr52(value),
            WAVE_RAM..=LAST => *self.reg_mut(addr) = value,
            NR10..=0xFF25 => {
                if self.powered() {
                    *self.reg_mut(addr) = value;
                }
            }
            _ => {}
        }
    }

    /// Only bit 7 is writable. Powering off clears NR10..=NR51 and the
    /// channel status bits.
    fn write_nr52(&mut self, value: u8) {
        let on = value & 0x80 != 0;
        if self.powered() && !on {
            self.regs[..usize::from(NR52 - NR10) + 1].fill(0);
        }
        let nr52 = self.reg_mut(NR52);
        *nr52 = if on { *nr52 | 0x80 } else { *nr52 & !0x80 };
    }
}
