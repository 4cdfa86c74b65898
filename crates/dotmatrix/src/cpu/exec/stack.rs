use crate::cpu::opcode::R16Stack;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, reg: R16Stack) {
        let value = self.read_r16_stack(reg);
        self.push_u16(bus, value);
    }

    /// POP AF goes through `set_af`, so F's low nibble reads back as zero.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, reg: R16Stack) {
        let value = self.pop_u16(bus);
        self.write_r16_stack(reg, value);
    }
}
