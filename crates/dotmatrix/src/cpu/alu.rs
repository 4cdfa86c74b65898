use super::opcode::{AluOp, RotateA, ShiftOp};
use super::{Cpu, Flag};

impl Cpu {
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.get_flag(Flag::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, half > 0x0F);
        self.set_flag(Flag::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.sub_flags(value, use_carry);
        self.regs.a = result;
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, false);
    }

    fn sub_flags(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = i16::from(use_carry && self.get_flag(Flag::C));

        let half = i16::from(a & 0x0F) - i16::from(value & 0x0F) - carry_in;
        let full = i16::from(a) - i16::from(value) - carry_in;
        let result = full as u8;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, half < 0);
        self.set_flag(Flag::C, full < 0);
        result
    }

    fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, true);
    }

    fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Uses C, H, N and A to compute a correction value. Updates A, Z, H, C;
    /// leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.get_flag(Flag::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flag::H) {
            adjust |= 0x06;
        }

        if !self.get_flag(Flag::N) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flag::C, adjust >= 0x60);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::Z, a == 0);
        self.regs.a = a;
    }

    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        result
    }

    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// `ADD HL,rr`: Z is unaffected, N cleared, H from bit 11, C from bit 15.
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, u32::from(hl) + u32::from(value) > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// Signed 8-bit immediate added to a 16-bit base (ADD SP,e8 and
    /// LD HL,SP+e8). Z and N are cleared; H and C come from the low byte.
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.clear_flags();
        self.set_flag(Flag::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flag::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// RLCA/RRCA/RLA/RRA: same bit movement as the CB forms but Z is
    /// always cleared.
    pub(super) fn alu_rotate_a(&mut self, op: RotateA) {
        let shift = match op {
            RotateA::Rlca => ShiftOp::Rlc,
            RotateA::Rrca => ShiftOp::Rrc,
            RotateA::Rla => ShiftOp::Rl,
            RotateA::Rra => ShiftOp::Rr,
        };
        let a = self.regs.a;
        self.regs.a = self.alu_shift(shift, a);
        self.set_flag(Flag::Z, false);
    }

    /// CB rotate/shift/swap group. Sets Z from the result, clears N and H,
    /// and C from the bit shifted out (SWAP clears C).
    pub(super) fn alu_shift(&mut self, op: ShiftOp, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry) = match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            ShiftOp::Rr => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Swap => (value.rotate_left(4), false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        };

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry);
        result
    }
}
