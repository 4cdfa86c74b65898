mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod opcode;
mod regs;
mod step;
mod table;

pub use bus::Bus;
pub use opcode::{AluOp, CbOp, Cond, Op, R16Mem, R16Stack, RotateA, ShiftOp, R16, R8};
pub use regs::{Flag, Registers};
pub use table::{CbOpcode, Opcode, CB_PREFIXED, UNPREFIXED};

/// Sharp LR35902 core.
///
/// `step` executes one instruction (or one interrupt dispatch) against a
/// [`Bus`] and reports the T-cycles it took. The CPU never drives the rest of
/// the machine itself; the caller feeds the returned count to the PPU and
/// timer.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    /// STOP low-power state. Cleared once a joypad line reads low in P1.
    stopped: bool,
    /// Set by HALT when IME is clear and an interrupt is already pending:
    /// the next opcode fetch does not advance PC.
    halt_bug: bool,
    /// EI executed on the previous step; IME turns on at the start of the
    /// next one, after the interrupt check.
    ime_enable_pending: bool,
    /// DI executed on the previous step.
    ime_disable_pending: bool,
}
