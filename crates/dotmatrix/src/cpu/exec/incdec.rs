use crate::cpu::opcode::{R16, R8};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_inc_r8<B: Bus>(&mut self, bus: &mut B, reg: R8) {
        let value = self.read_r8(bus, reg);
        let result = self.alu_inc8(value);
        self.write_r8(bus, reg, result);
    }

    pub(super) fn exec_dec_r8<B: Bus>(&mut self, bus: &mut B, reg: R8) {
        let value = self.read_r8(bus, reg);
        let result = self.alu_dec8(value);
        self.write_r8(bus, reg, result);
    }

    /// 16-bit INC/DEC touch no flags.
    pub(super) fn exec_inc_r16(&mut self, reg: R16) {
        let value = self.read_r16(reg).wrapping_add(1);
        self.write_r16(reg, value);
    }

    pub(super) fn exec_dec_r16(&mut self, reg: R16) {
        let value = self.read_r16(reg).wrapping_sub(1);
        self.write_r16(reg, value);
    }
}
