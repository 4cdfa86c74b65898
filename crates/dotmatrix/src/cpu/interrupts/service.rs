use crate::interrupt::Interrupts;

use super::super::{Bus, Cpu};

impl Cpu {
    /// Service the highest-priority pending interrupt if IME is set.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken, or `None` otherwise.
    /// Only one line is serviced per call; the rest stay latched in IF.
    pub(in crate::cpu) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        if !self.ime {
            return None;
        }

        let interrupt = Self::pending_interrupts(bus).highest()?;

        self.ime = false;
        self.ime_enable_pending = false;
        self.halted = false;

        let iflags = bus.read8(Interrupts::IF_ADDR);
        bus.write8(Interrupts::IF_ADDR, iflags & !interrupt.flag().bits());

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = interrupt.vector();

        log::debug!(
            "GB CPU interrupt: {:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X}",
            interrupt,
            self.regs.pc,
            pc,
            self.regs.sp,
        );

        Some(20)
    }
}
