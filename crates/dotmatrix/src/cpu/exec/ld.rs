use crate::cpu::opcode::{R16Mem, R16, R8};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_ld_r8_r8<B: Bus>(&mut self, bus: &mut B, dst: R8, src: R8) {
        debug_assert!(!(dst.is_memory() && src.is_memory()), "0x76 decodes as HALT");
        let value = self.read_r8(bus, src);
        self.write_r8(bus, dst, value);
    }

    pub(super) fn exec_ld_r8_d8<B: Bus>(&mut self, bus: &mut B, dst: R8) {
        let value = self.fetch8(bus);
        self.write_r8(bus, dst, value);
    }

    pub(super) fn exec_ld_r16_d16<B: Bus>(&mut self, bus: &mut B, dst: R16) {
        let value = self.fetch16(bus);
        self.write_r16(dst, value);
    }

    pub(super) fn exec_ld_mem_a<B: Bus>(&mut self, bus: &mut B, dst: R16Mem) {
        let addr = self.r16_mem_addr(dst);
        bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_mem<B: Bus>(&mut self, bus: &mut B, src: R16Mem) {
        let addr = self.r16_mem_addr(src);
        self.regs.a = bus.read8(addr);
    }

    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write16(addr, self.regs.sp);
    }

    /// LDH (a8),A
    pub(super) fn exec_ldh_a8_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        bus.write8(addr, self.regs.a);
    }

    /// LDH A,(a8)
    pub(super) fn exec_ldh_a_a8<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        self.regs.a = bus.read8(addr);
    }

    pub(super) fn exec_ldh_c_a<B: Bus>(&mut self, bus: &mut B) {
        bus.write8(0xFF00 | u16::from(self.regs.c), self.regs.a);
    }

    pub(super) fn exec_ldh_a_c<B: Bus>(&mut self, bus: &mut B) {
        self.regs.a = bus.read8(0xFF00 | u16::from(self.regs.c));
    }

    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_a16<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        self.regs.a = bus.read8(addr);
    }

    pub(super) fn exec_ld_hl_sp_e8<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.fetch8(bus);
        let value = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(value);
    }
}
