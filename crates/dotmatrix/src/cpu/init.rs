use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// A CPU with every register and scheduling flag zeroed.
    ///
    /// Use [`Cpu::apply_dmg_boot_state`] (or `GameBoy::new`) to start at
    /// the cartridge entry point instead.
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            halt_bug: false,
            ime_enable_pending: false,
            ime_disable_pending: false,
        }
    }

    /// Zero all registers and internal scheduling flags.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Register state the DMG boot ROM leaves behind when it jumps to the
    /// cartridge at 0x0100 (Pan Docs "Power Up Sequence").
    pub fn apply_dmg_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0; // Z, N, H, C = 1,0,1,1
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // IME is clear when control reaches the cartridge.
        self.ime = false;
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
