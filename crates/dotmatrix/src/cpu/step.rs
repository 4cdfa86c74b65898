use super::table::UNPREFIXED;
use super::{Bus, Cpu};

/// P1 register; STOP ends once one of its low four lines reads 0. A held
/// button in a group P1 does not select never pulls a line low, so it
/// cannot wake the CPU.
const P1_ADDR: u16 = 0xFF00;

impl Cpu {
    /// Execute a single instruction (or interrupt dispatch) and return the
    /// number of T-cycles taken.
    ///
    /// Order within one step:
    /// 1. a DI from the previous step takes effect
    /// 2. STOP idles until a joypad line goes low
    /// 3. the interrupt controller runs if IME is set
    /// 4. an EI from the previous step takes effect
    /// 5. HALT idles until an enabled interrupt is requested
    /// 6. fetch, decode and execute
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.apply_pending_disable();

        if self.stopped {
            let p1 = bus.read8(P1_ADDR);
            if (p1 & 0x0F) == 0x0F {
                return 4;
            }
            self.stopped = false;
        }

        if let Some(cycles) = self.handle_interrupts(bus) {
            return cycles;
        }

        self.apply_pending_enable();

        if self.halted {
            if Self::pending_interrupts(bus).is_empty() {
                return 4;
            }
            // An enabled interrupt is pending but IME kept it from being
            // serviced: wake up and carry on with the next instruction.
            self.halted = false;
        }

        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        let entry = UNPREFIXED[usize::from(opcode)];
        log::trace!("{:04X}: {:02X}  {}", pc, opcode, entry.op);
        self.execute(bus, entry)
    }

    /// Decode the instruction at `addr` without executing it.
    ///
    /// Returns the mnemonic and the instruction length in bytes.
    pub fn disassemble<B: Bus>(bus: &mut B, addr: u16) -> (String, u16) {
        use super::opcode::Op;
        use super::table::CB_PREFIXED;

        let opcode = bus.read8(addr);
        let entry = UNPREFIXED[usize::from(opcode)];
        let len = match entry.op {
            Op::Prefix => {
                let cb = bus.read8(addr.wrapping_add(1));
                return (CB_PREFIXED[usize::from(cb)].op.to_string(), 2);
            }
            Op::LdR8Imm(_)
            | Op::LdhImmA
            | Op::LdhAImm
            | Op::AluImm(_)
            | Op::Jr
            | Op::JrCond(_)
            | Op::AddSpImm
            | Op::LdHlSpImm
            | Op::Stop => 2,
            Op::LdR16Imm(_)
            | Op::LdImm16Sp
            | Op::LdImm16A
            | Op::LdAImm16
            | Op::Jp
            | Op::JpCond(_)
            | Op::Call
            | Op::CallCond(_) => 3,
            _ => 1,
        };
        (entry.op.to_string(), len)
    }
}
