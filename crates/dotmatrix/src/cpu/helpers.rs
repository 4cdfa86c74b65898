use super::opcode::{Cond, R16Mem, R16Stack, R16, R8};
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Read an 8-bit operand; `(HL)` goes through the bus.
    #[inline]
    pub(super) fn read_r8<B: Bus>(&mut self, bus: &mut B, reg: R8) -> u8 {
        match reg {
            R8::B => self.regs.b,
            R8::C => self.regs.c,
            R8::D => self.regs.d,
            R8::E => self.regs.e,
            R8::H => self.regs.h,
            R8::L => self.regs.l,
            R8::HlInd => bus.read8(self.regs.hl()),
            R8::A => self.regs.a,
        }
    }

    #[inline]
    pub(super) fn write_r8<B: Bus>(&mut self, bus: &mut B, reg: R8, value: u8) {
        match reg {
            R8::B => self.regs.b = value,
            R8::C => self.regs.c = value,
            R8::D => self.regs.d = value,
            R8::E => self.regs.e = value,
            R8::H => self.regs.h = value,
            R8::L => self.regs.l = value,
            R8::HlInd => bus.write8(self.regs.hl(), value),
            R8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn read_r16(&self, reg: R16) -> u16 {
        match reg {
            R16::BC => self.regs.bc(),
            R16::DE => self.regs.de(),
            R16::HL => self.regs.hl(),
            R16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_r16(&mut self, reg: R16, value: u16) {
        match reg {
            R16::BC => self.regs.set_bc(value),
            R16::DE => self.regs.set_de(value),
            R16::HL => self.regs.set_hl(value),
            R16::SP => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn read_r16_stack(&self, reg: R16Stack) -> u16 {
        match reg {
            R16Stack::BC => self.regs.bc(),
            R16Stack::DE => self.regs.de(),
            R16Stack::HL => self.regs.hl(),
            R16Stack::AF => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn write_r16_stack(&mut self, reg: R16Stack, value: u16) {
        match reg {
            R16Stack::BC => self.regs.set_bc(value),
            R16Stack::DE => self.regs.set_de(value),
            R16Stack::HL => self.regs.set_hl(value),
            R16Stack::AF => self.regs.set_af(value),
        }
    }

    /// Resolve an indirect operand and apply the HL+/HL- side effect.
    #[inline]
    pub(super) fn r16_mem_addr(&mut self, reg: R16Mem) -> u16 {
        match reg {
            R16Mem::BC => self.regs.bc(),
            R16Mem::DE => self.regs.de(),
            R16Mem::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            R16Mem::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    #[inline]
    pub(super) fn condition(&self, cond: Cond) -> bool {
        match cond {
            Cond::NZ => !self.get_flag(Flag::Z),
            Cond::Z => self.get_flag(Flag::Z),
            Cond::NC => !self.get_flag(Flag::C),
            Cond::C => self.get_flag(Flag::C),
        }
    }

    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        if self.halt_bug {
            // HALT bug: the first fetch after the bug does not increment PC.
            self.halt_bug = false;
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        value
    }

    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        // Stack grows downward: memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp);
        let hi = bus.read8(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }
}
