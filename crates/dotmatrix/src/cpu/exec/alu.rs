use crate::cpu::opcode::{AluOp, R8};
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    pub(super) fn exec_alu_r8<B: Bus>(&mut self, bus: &mut B, op: AluOp, src: R8) {
        let value = self.read_r8(bus, src);
        self.alu(op, value);
    }

    pub(super) fn exec_alu_d8<B: Bus>(&mut self, bus: &mut B, op: AluOp) {
        let value = self.fetch8(bus);
        self.alu(op, value);
    }

    pub(super) fn exec_add_sp_e8<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
    }

    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
    }
}
