use std::fmt;

/// 8-bit operand in the standard 3-bit encoding: B C D E H L (HL) A.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory at HL.
    HlInd,
    A,
}

impl R8 {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => R8::B,
            1 => R8::C,
            2 => R8::D,
            3 => R8::E,
            4 => R8::H,
            5 => R8::L,
            6 => R8::HlInd,
            _ => R8::A,
        }
    }

    pub const fn is_memory(self) -> bool {
        matches!(self, R8::HlInd)
    }
}

/// 16-bit operand for LD rr,d16 / INC rr / DEC rr / ADD HL,rr.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16 {
    BC,
    DE,
    HL,
    SP,
}

impl R16 {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => R16::BC,
            1 => R16::DE,
            2 => R16::HL,
            _ => R16::SP,
        }
    }
}

/// 16-bit operand for PUSH/POP, where slot 3 is AF instead of SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16Stack {
    BC,
    DE,
    HL,
    AF,
}

impl R16Stack {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => R16Stack::BC,
            1 => R16Stack::DE,
            2 => R16Stack::HL,
            _ => R16Stack::AF,
        }
    }
}

/// Indirect address for LD (rr),A and LD A,(rr); HL+ and HL- adjust HL
/// after the access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16Mem {
    BC,
    DE,
    HlInc,
    HlDec,
}

impl R16Mem {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => R16Mem::BC,
            1 => R16Mem::DE,
            2 => R16Mem::HlInc,
            _ => R16Mem::HlDec,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    NZ,
    Z,
    NC,
    C,
}

impl Cond {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Cond::NZ,
            1 => Cond::Z,
            2 => Cond::NC,
            _ => Cond::C,
        }
    }
}

/// Accumulator ALU operation selected by bits 3..5 of the opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Unprefixed accumulator rotates. Unlike their CB forms these always
/// clear Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotateA {
    Rlca,
    Rrca,
    Rla,
    Rra,
}

/// CB-prefixed rotate/shift/swap group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => ShiftOp::Rlc,
            1 => ShiftOp::Rrc,
            2 => ShiftOp::Rl,
            3 => ShiftOp::Rr,
            4 => ShiftOp::Sla,
            5 => ShiftOp::Sra,
            6 => ShiftOp::Swap,
            _ => ShiftOp::Srl,
        }
    }
}

/// One decoded unprefixed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    /// 0xCB: the real instruction lives in the CB table.
    Prefix,
    /// One of the eleven unused opcode slots.
    Invalid(u8),

    LdR8R8(R8, R8),
    LdR8Imm(R8),
    LdR16Imm(R16),
    LdMemA(R16Mem),
    LdAMem(R16Mem),
    LdImm16Sp,
    LdhImmA,
    LdhAImm,
    LdhCA,
    LdhAC,
    LdImm16A,
    LdAImm16,
    LdHlSpImm,
    LdSpHl,

    IncR8(R8),
    DecR8(R8),
    IncR16(R16),
    DecR16(R16),
    AddHl(R16),
    AddSpImm,
    Alu(AluOp, R8),
    AluImm(AluOp),
    Rotate(RotateA),
    Daa,
    Cpl,
    Scf,
    Ccf,

    Jr,
    JrCond(Cond),
    Jp,
    JpCond(Cond),
    JpHl,
    Call,
    CallCond(Cond),
    Ret,
    RetCond(Cond),
    Reti,
    Rst(u8),
    Push(R16Stack),
    Pop(R16Stack),
}

/// One decoded CB-prefixed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbOp {
    Shift(ShiftOp, R8),
    Bit(u8, R8),
    Res(u8, R8),
    Set(u8, R8),
}

impl fmt::Display for R8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            R8::B => "B",
            R8::C => "C",
            R8::D => "D",
            R8::E => "E",
            R8::H => "H",
            R8::L => "L",
            R8::HlInd => "(HL)",
            R8::A => "A",
        };
        f.write_str(name)
    }
}

impl fmt::Display for R16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            R16::BC => "BC",
            R16::DE => "DE",
            R16::HL => "HL",
            R16::SP => "SP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for R16Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            R16Stack::BC => "BC",
            R16Stack::DE => "DE",
            R16Stack::HL => "HL",
            R16Stack::AF => "AF",
        };
        f.write_str(name)
    }
}

impl fmt::Display for R16Mem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            R16Mem::BC => "(BC)",
            R16Mem::DE => "(DE)",
            R16Mem::HlInc => "(HL+)",
            R16Mem::HlDec => "(HL-)",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cond::NZ => "NZ",
            Cond::Z => "Z",
            Cond::NC => "NC",
            Cond::C => "C",
        };
        f.write_str(name)
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // ADD/ADC/SBC name A explicitly; the rest take a single operand.
        let name = match self {
            AluOp::Add => "ADD A,",
            AluOp::Adc => "ADC A,",
            AluOp::Sub => "SUB ",
            AluOp::Sbc => "SBC A,",
            AluOp::And => "AND ",
            AluOp::Xor => "XOR ",
            AluOp::Or => "OR ",
            AluOp::Cp => "CP ",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ShiftOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftOp::Rlc => "RLC",
            ShiftOp::Rrc => "RRC",
            ShiftOp::Rl => "RL",
            ShiftOp::Rr => "RR",
            ShiftOp::Sla => "SLA",
            ShiftOp::Sra => "SRA",
            ShiftOp::Swap => "SWAP",
            ShiftOp::Srl => "SRL",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Op::Nop => write!(f, "NOP"),
            Op::Stop => write!(f, "STOP"),
            Op::Halt => write!(f, "HALT"),
            Op::Di => write!(f, "DI"),
            Op::Ei => write!(f, "EI"),
            Op::Prefix => write!(f, "PREFIX CB"),
            Op::Invalid(byte) => write!(f, "INVALID ${byte:02X}"),

            Op::LdR8R8(dst, src) => write!(f, "LD {dst},{src}"),
            Op::LdR8Imm(dst) => write!(f, "LD {dst},d8"),
            Op::LdR16Imm(dst) => write!(f, "LD {dst},d16"),
            Op::LdMemA(dst) => write!(f, "LD {dst},A"),
            Op::LdAMem(src) => write!(f, "LD A,{src}"),
            Op::LdImm16Sp => write!(f, "LD (a16),SP"),
            Op::LdhImmA => write!(f, "LDH (a8),A"),
            Op::LdhAImm => write!(f, "LDH A,(a8)"),
            Op::LdhCA => write!(f, "LD (C),A"),
            Op::LdhAC => write!(f, "LD A,(C)"),
            Op::LdImm16A => write!(f, "LD (a16),A"),
            Op::LdAImm16 => write!(f, "LD A,(a16)"),
            Op::LdHlSpImm => write!(f, "LD HL,SP+e8"),
            Op::LdSpHl => write!(f, "LD SP,HL"),

            Op::IncR8(r) => write!(f, "INC {r}"),
            Op::DecR8(r) => write!(f, "DEC {r}"),
            Op::IncR16(rr) => write!(f, "INC {rr}"),
            Op::DecR16(rr) => write!(f, "DEC {rr}"),
            Op::AddHl(rr) => write!(f, "ADD HL,{rr}"),
            Op::AddSpImm => write!(f, "ADD SP,e8"),
            Op::Alu(op, r) => write!(f, "{op}{r}"),
            Op::AluImm(op) => write!(f, "{op}d8"),
            Op::Rotate(RotateA::Rlca) => write!(f, "RLCA"),
            Op::Rotate(RotateA::Rrca) => write!(f, "RRCA"),
            Op::Rotate(RotateA::Rla) => write!(f, "RLA"),
            Op::Rotate(RotateA::Rra) => write!(f, "RRA"),
            Op::Daa => write!(f, "DAA"),
            Op::Cpl => write!(f, "CPL"),
            Op::Scf => write!(f, "SCF"),
            Op::Ccf => write!(f, "CCF"),

            Op::Jr => write!(f, "JR e8"),
            Op::JrCond(cc) => write!(f, "JR {cc},e8"),
            Op::Jp => write!(f, "JP a16"),
            Op::JpCond(cc) => write!(f, "JP {cc},a16"),
            Op::JpHl => write!(f, "JP HL"),
            Op::Call => write!(f, "CALL a16"),
            Op::CallCond(cc) => write!(f, "CALL {cc},a16"),
            Op::Ret => write!(f, "RET"),
            Op::RetCond(cc) => write!(f, "RET {cc}"),
            Op::Reti => write!(f, "RETI"),
            Op::Rst(vector) => write!(f, "RST ${vector:02X}"),
            Op::Push(rr) => write!(f, "PUSH {rr}"),
            Op::Pop(rr) => write!(f, "POP {rr}"),
        }
    }
}

impl fmt::Display for CbOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CbOp::Shift(op, r) => write!(f, "{op} {r}"),
            CbOp::Bit(bit, r) => write!(f, "BIT {bit},{r}"),
            CbOp::Res(bit, r) => write!(f, "RES {bit},{r}"),
            CbOp::Set(bit, r) => write!(f, "SET {bit},{r}"),
        }
    }
}
