//! Static dispatch tables.
//!
//! Both tables are built at compile time from the x/y/z/p/q bit fields of
//! the opcode byte (x = bits 7..6, y = bits 5..3, z = bits 2..0, p = y >> 1,
//! q = y & 1). Cycle costs are stored next to each entry so `Cpu::step`
//! never computes a timing value itself.

use super::opcode::{AluOp, CbOp, Cond, Op, R16Mem, R16Stack, RotateA, ShiftOp, R16, R8};

/// One unprefixed table entry.
///
/// `cycles` is the cost when a conditional branch is not taken (and the
/// only cost of every other instruction); `cycles_taken` is the cost when
/// the condition holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    pub op: Op,
    pub cycles: u32,
    pub cycles_taken: u32,
}

impl Opcode {
    const fn fixed(op: Op, cycles: u32) -> Self {
        Self {
            op,
            cycles,
            cycles_taken: cycles,
        }
    }

    const fn branch(op: Op, not_taken: u32, taken: u32) -> Self {
        Self {
            op,
            cycles: not_taken,
            cycles_taken: taken,
        }
    }

    #[inline]
    pub fn cost(&self, taken: bool) -> u32 {
        if taken {
            self.cycles_taken
        } else {
            self.cycles
        }
    }
}

/// One CB-prefixed table entry. `cycles` includes the prefix fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CbOpcode {
    pub op: CbOp,
    pub cycles: u32,
}

pub static UNPREFIXED: [Opcode; 256] = build_unprefixed();
pub static CB_PREFIXED: [CbOpcode; 256] = build_cb_prefixed();

const fn build_unprefixed() -> [Opcode; 256] {
    let mut table = [Opcode::fixed(Op::Nop, 4); 256];
    let mut i = 0;
    while i < 256 {
        table[i] = decode(i as u8);
        i += 1;
    }
    table
}

const fn build_cb_prefixed() -> [CbOpcode; 256] {
    let mut table = [CbOpcode {
        op: CbOp::Bit(0, R8::B),
        cycles: 8,
    }; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = decode_cb(i as u8);
        i += 1;
    }
    table
}

const fn decode(byte: u8) -> Opcode {
    let x = byte >> 6;
    let y = (byte >> 3) & 0x07;
    let z = byte & 0x07;

    match x {
        0 => decode_block0(y, z),
        1 => {
            if byte == 0x76 {
                return Opcode::fixed(Op::Halt, 4);
            }
            let cycles = if y == 6 || z == 6 { 8 } else { 4 };
            Opcode::fixed(Op::LdR8R8(R8::from_bits(y), R8::from_bits(z)), cycles)
        }
        2 => {
            let cycles = if z == 6 { 8 } else { 4 };
            Opcode::fixed(Op::Alu(AluOp::from_bits(y), R8::from_bits(z)), cycles)
        }
        _ => decode_block3(byte, y, z),
    }
}

const fn decode_block0(y: u8, z: u8) -> Opcode {
    let p = y >> 1;
    let q = y & 1;

    match z {
        0 => match y {
            0 => Opcode::fixed(Op::Nop, 4),
            1 => Opcode::fixed(Op::LdImm16Sp, 20),
            2 => Opcode::fixed(Op::Stop, 4),
            3 => Opcode::fixed(Op::Jr, 12),
            _ => Opcode::branch(Op::JrCond(Cond::from_bits(y - 4)), 8, 12),
        },
        1 => {
            if q == 0 {
                Opcode::fixed(Op::LdR16Imm(R16::from_bits(p)), 12)
            } else {
                Opcode::fixed(Op::AddHl(R16::from_bits(p)), 8)
            }
        }
        2 => {
            if q == 0 {
                Opcode::fixed(Op::LdMemA(R16Mem::from_bits(p)), 8)
            } else {
                Opcode::fixed(Op::LdAMem(R16Mem::from_bits(p)), 8)
            }
        }
        3 => {
            if q == 0 {
                Opcode::fixed(Op::IncR16(R16::from_bits(p)), 8)
            } else {
                Opcode::fixed(Op::DecR16(R16::from_bits(p)), 8)
            }
        }
        4 => Opcode::fixed(Op::IncR8(R8::from_bits(y)), if y == 6 { 12 } else { 4 }),
        5 => Opcode::fixed(Op::DecR8(R8::from_bits(y)), if y == 6 { 12 } else { 4 }),
        6 => Opcode::fixed(Op::LdR8Imm(R8::from_bits(y)), if y == 6 { 12 } else { 8 }),
        _ => match y {
            0 => Opcode::fixed(Op::Rotate(RotateA::Rlca), 4),
            1 => Opcode::fixed(Op::Rotate(RotateA::Rrca), 4),
            2 => Opcode::fixed(Op::Rotate(RotateA::Rla), 4),
            3 => Opcode::fixed(Op::Rotate(RotateA::Rra), 4),
            4 => Opcode::fixed(Op::Daa, 4),
            5 => Opcode::fixed(Op::Cpl, 4),
            6 => Opcode::fixed(Op::Scf, 4),
            _ => Opcode::fixed(Op::Ccf, 4),
        },
    }
}

const fn decode_block3(byte: u8, y: u8, z: u8) -> Opcode {
    let p = y >> 1;
    let q = y & 1;

    match z {
        0 => match y {
            0..=3 => Opcode::branch(Op::RetCond(Cond::from_bits(y)), 8, 20),
            4 => Opcode::fixed(Op::LdhImmA, 12),
            5 => Opcode::fixed(Op::AddSpImm, 16),
            6 => Opcode::fixed(Op::LdhAImm, 12),
            _ => Opcode::fixed(Op::LdHlSpImm, 12),
        },
        1 => {
            if q == 0 {
                return Opcode::fixed(Op::Pop(R16Stack::from_bits(p)), 12);
            }
            match p {
                0 => Opcode::fixed(Op::Ret, 16),
                1 => Opcode::fixed(Op::Reti, 16),
                2 => Opcode::fixed(Op::JpHl, 4),
                _ => Opcode::fixed(Op::LdSpHl, 8),
            }
        }
        2 => match y {
            0..=3 => Opcode::branch(Op::JpCond(Cond::from_bits(y)), 12, 16),
            4 => Opcode::fixed(Op::LdhCA, 8),
            5 => Opcode::fixed(Op::LdImm16A, 16),
            6 => Opcode::fixed(Op::LdhAC, 8),
            _ => Opcode::fixed(Op::LdAImm16, 16),
        },
        3 => match y {
            0 => Opcode::fixed(Op::Jp, 16),
            1 => Opcode::fixed(Op::Prefix, 4),
            6 => Opcode::fixed(Op::Di, 4),
            7 => Opcode::fixed(Op::Ei, 4),
            _ => Opcode::fixed(Op::Invalid(byte), 4),
        },
        4 => match y {
            0..=3 => Opcode::branch(Op::CallCond(Cond::from_bits(y)), 12, 24),
            _ => Opcode::fixed(Op::Invalid(byte), 4),
        },
        5 => {
            if q == 0 {
                Opcode::fixed(Op::Push(R16Stack::from_bits(p)), 16)
            } else if p == 0 {
                Opcode::fixed(Op::Call, 24)
            } else {
                Opcode::fixed(Op::Invalid(byte), 4)
            }
        }
        6 => Opcode::fixed(Op::AluImm(AluOp::from_bits(y)), 8),
        _ => Opcode::fixed(Op::Rst(y * 8), 16),
    }
}

const fn decode_cb(byte: u8) -> CbOpcode {
    let x = byte >> 6;
    let y = (byte >> 3) & 0x07;
    let z = byte & 0x07;
    let target = R8::from_bits(z);
    let memory = z == 6;

    match x {
        0 => CbOpcode {
            op: CbOp::Shift(ShiftOp::from_bits(y), target),
            cycles: if memory { 16 } else { 8 },
        },
        // BIT only reads (HL), so it skips the write-back cycle.
        1 => CbOpcode {
            op: CbOp::Bit(y, target),
            cycles: if memory { 12 } else { 8 },
        },
        2 => CbOpcode {
            op: CbOp::Res(y, target),
            cycles: if memory { 16 } else { 8 },
        },
        _ => CbOpcode {
            op: CbOp::Set(y, target),
            cycles: if memory { 16 } else { 8 },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_unused_slots_decode_as_invalid() {
        let invalid: Vec<u8> = (0..=255u8)
            .filter(|&b| matches!(UNPREFIXED[b as usize].op, Op::Invalid(_)))
            .collect();
        assert_eq!(
            invalid,
            vec![0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD]
        );
        for b in invalid {
            assert_eq!(UNPREFIXED[b as usize].cycles, 4);
        }
    }

    #[test]
    fn every_cost_is_a_documented_literal() {
        let allowed = [4, 8, 12, 16, 20, 24];
        for entry in UNPREFIXED.iter() {
            assert!(allowed.contains(&entry.cycles), "{entry:?}");
            assert!(allowed.contains(&entry.cycles_taken), "{entry:?}");
        }
        for entry in CB_PREFIXED.iter() {
            assert!(allowed.contains(&entry.cycles), "{entry:?}");
        }
    }

    #[test]
    fn conditional_entries_carry_both_costs() {
        assert_eq!(UNPREFIXED[0x20].op, Op::JrCond(Cond::NZ));
        assert_eq!((UNPREFIXED[0x20].cycles, UNPREFIXED[0x20].cycles_taken), (8, 12));
        assert_eq!(UNPREFIXED[0xC2].op, Op::JpCond(Cond::NZ));
        assert_eq!((UNPREFIXED[0xC2].cycles, UNPREFIXED[0xC2].cycles_taken), (12, 16));
        assert_eq!(UNPREFIXED[0xDC].op, Op::CallCond(Cond::C));
        assert_eq!((UNPREFIXED[0xDC].cycles, UNPREFIXED[0xDC].cycles_taken), (12, 24));
        assert_eq!(UNPREFIXED[0xC8].op, Op::RetCond(Cond::Z));
        assert_eq!((UNPREFIXED[0xC8].cycles, UNPREFIXED[0xC8].cycles_taken), (8, 20));
    }

    #[test]
    fn spot_check_decoding() {
        assert_eq!(UNPREFIXED[0x76].op, Op::Halt);
        assert_eq!(UNPREFIXED[0x7E].op, Op::LdR8R8(R8::A, R8::HlInd));
        assert_eq!(UNPREFIXED[0x7E].cycles, 8);
        assert_eq!(UNPREFIXED[0x36].op, Op::LdR8Imm(R8::HlInd));
        assert_eq!(UNPREFIXED[0x36].cycles, 12);
        assert_eq!(UNPREFIXED[0x3A].op, Op::LdAMem(R16Mem::HlDec));
        assert_eq!(UNPREFIXED[0xF1].op, Op::Pop(R16Stack::AF));
        assert_eq!(UNPREFIXED[0xFF].op, Op::Rst(0x38));
        assert_eq!(UNPREFIXED[0xFE].op, Op::AluImm(AluOp::Cp));
        assert_eq!(UNPREFIXED[0x08].cycles, 20);

        assert_eq!(CB_PREFIXED[0x37].op, CbOp::Shift(ShiftOp::Swap, R8::A));
        assert_eq!(CB_PREFIXED[0x46].op, CbOp::Bit(0, R8::HlInd));
        assert_eq!(CB_PREFIXED[0x46].cycles, 12);
        assert_eq!(CB_PREFIXED[0xFE].op, CbOp::Set(7, R8::HlInd));
        assert_eq!(CB_PREFIXED[0xFE].cycles, 16);
    }

    #[test]
    fn mnemonics() {
        assert_eq!(UNPREFIXED[0x80].op.to_string(), "ADD A,B");
        assert_eq!(UNPREFIXED[0x2A].op.to_string(), "LD A,(HL+)");
        assert_eq!(UNPREFIXED[0xE6].op.to_string(), "AND d8");
        assert_eq!(CB_PREFIXED[0x7C].op.to_string(), "BIT 7,H");
    }
}
