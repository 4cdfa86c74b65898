mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::opcode::Op;
use super::table::Opcode;
use super::{Bus, Cpu};

impl Cpu {
    /// Execute one decoded unprefixed entry and return its cost.
    ///
    /// Every arm returns either the entry's fixed cost or, for conditional
    /// control flow, `entry.cost(taken)`.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, entry: Opcode) -> u32 {
        match entry.op {
            Op::Nop => entry.cycles,
            Op::Prefix => self.step_cb(bus),
            Op::Invalid(byte) => {
                log::debug!(
                    "GB CPU: invalid opcode 0x{:02X} at pc=0x{:04X}, treated as NOP",
                    byte,
                    self.regs.pc.wrapping_sub(1)
                );
                entry.cycles
            }

            Op::Stop => {
                self.exec_stop(bus);
                entry.cycles
            }
            Op::Halt => {
                self.exec_halt(bus);
                entry.cycles
            }
            Op::Di => {
                self.exec_di();
                entry.cycles
            }
            Op::Ei => {
                self.exec_ei();
                entry.cycles
            }

            Op::LdR8R8(dst, src) => {
                self.exec_ld_r8_r8(bus, dst, src);
                entry.cycles
            }
            Op::LdR8Imm(dst) => {
                self.exec_ld_r8_d8(bus, dst);
                entry.cycles
            }
            Op::LdR16Imm(dst) => {
                self.exec_ld_r16_d16(bus, dst);
                entry.cycles
            }
            Op::LdMemA(dst) => {
                self.exec_ld_mem_a(bus, dst);
                entry.cycles
            }
            Op::LdAMem(src) => {
                self.exec_ld_a_mem(bus, src);
                entry.cycles
            }
            Op::LdImm16Sp => {
                self.exec_ld_a16_sp(bus);
                entry.cycles
            }
            Op::LdhImmA => {
                self.exec_ldh_a8_a(bus);
                entry.cycles
            }
            Op::LdhAImm => {
                self.exec_ldh_a_a8(bus);
                entry.cycles
            }
            Op::LdhCA => {
                self.exec_ldh_c_a(bus);
                entry.cycles
            }
            Op::LdhAC => {
                self.exec_ldh_a_c(bus);
                entry.cycles
            }
            Op::LdImm16A => {
                self.exec_ld_a16_a(bus);
                entry.cycles
            }
            Op::LdAImm16 => {
                self.exec_ld_a_a16(bus);
                entry.cycles
            }
            Op::LdHlSpImm => {
                self.exec_ld_hl_sp_e8(bus);
                entry.cycles
            }
            Op::LdSpHl => {
                self.regs.sp = self.regs.hl();
                entry.cycles
            }

            Op::IncR8(reg) => {
                self.exec_inc_r8(bus, reg);
                entry.cycles
            }
            Op::DecR8(reg) => {
                self.exec_dec_r8(bus, reg);
                entry.cycles
            }
            Op::IncR16(reg) => {
                self.exec_inc_r16(reg);
                entry.cycles
            }
            Op::DecR16(reg) => {
                self.exec_dec_r16(reg);
                entry.cycles
            }
            Op::AddHl(reg) => {
                let value = self.read_r16(reg);
                self.alu_add16_hl(value);
                entry.cycles
            }
            Op::AddSpImm => {
                self.exec_add_sp_e8(bus);
                entry.cycles
            }
            Op::Alu(op, src) => {
                self.exec_alu_r8(bus, op, src);
                entry.cycles
            }
            Op::AluImm(op) => {
                self.exec_alu_d8(bus, op);
                entry.cycles
            }
            Op::Rotate(op) => {
                self.alu_rotate_a(op);
                entry.cycles
            }
            Op::Daa => {
                self.alu_daa();
                entry.cycles
            }
            Op::Cpl => {
                self.exec_cpl();
                entry.cycles
            }
            Op::Scf => {
                self.exec_scf();
                entry.cycles
            }
            Op::Ccf => {
                self.exec_ccf();
                entry.cycles
            }

            Op::Jr => {
                self.jr(bus, true);
                entry.cycles
            }
            Op::JrCond(cond) => {
                let taken = self.condition(cond);
                self.jr(bus, taken);
                entry.cost(taken)
            }
            Op::Jp => {
                self.jp(bus, true);
                entry.cycles
            }
            Op::JpCond(cond) => {
                let taken = self.condition(cond);
                self.jp(bus, taken);
                entry.cost(taken)
            }
            Op::JpHl => {
                self.regs.pc = self.regs.hl();
                entry.cycles
            }
            Op::Call => {
                self.call(bus, true);
                entry.cycles
            }
            Op::CallCond(cond) => {
                let taken = self.condition(cond);
                self.call(bus, taken);
                entry.cost(taken)
            }
            Op::Ret => {
                self.ret(bus, true);
                entry.cycles
            }
            Op::RetCond(cond) => {
                let taken = self.condition(cond);
                self.ret(bus, taken);
                entry.cost(taken)
            }
            Op::Reti => {
                self.exec_reti(bus);
                entry.cycles
            }
            Op::Rst(vector) => {
                self.exec_rst(bus, vector);
                entry.cycles
            }
            Op::Push(reg) => {
                self.exec_push(bus, reg);
                entry.cycles
            }
            Op::Pop(reg) => {
                self.exec_pop(bus, reg);
                entry.cycles
            }
        }
    }
}
