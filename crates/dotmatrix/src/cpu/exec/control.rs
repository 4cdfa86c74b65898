use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// JR / JR cc. The displacement is always consumed; it is relative to
    /// the address following the operand.
    pub(super) fn jr<B: Bus>(&mut self, bus: &mut B, taken: bool) {
        let offset = self.fetch8(bus) as i8;
        if taken {
            self.regs.pc = self.regs.pc.wrapping_add_signed(i16::from(offset));
        }
    }

    pub(super) fn jp<B: Bus>(&mut self, bus: &mut B, taken: bool) {
        let addr = self.fetch16(bus);
        if taken {
            self.regs.pc = addr;
        }
    }

    pub(super) fn call<B: Bus>(&mut self, bus: &mut B, taken: bool) {
        let addr = self.fetch16(bus);
        if taken {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
        }
    }

    pub(super) fn ret<B: Bus>(&mut self, bus: &mut B, taken: bool) {
        if taken {
            self.regs.pc = self.pop_u16(bus);
        }
    }

    /// RETI enables IME immediately, without the EI delay.
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        self.ime_enable_pending = false;
        self.ime_disable_pending = false;
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vector: u8) {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(vector);
    }
}
