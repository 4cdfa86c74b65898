use crate::cpu::{Bus, Cpu};
use crate::interrupt::Interrupts;

impl Cpu {
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) {
        // STOP is a 2-byte instruction; the padding byte is consumed and
        // ignored.
        let _padding = self.fetch8(bus);
        self.stopped = true;
        self.halted = false;
    }

    pub(super) fn exec_halt<B: Bus>(&mut self, bus: &mut B) {
        if !self.ime && !Self::pending_interrupts(bus).is_empty() {
            // HALT bug: the CPU does not halt, and the next opcode fetch
            // does not increment PC.
            self.halt_bug = true;
            return;
        }
        self.halted = true;
    }

    /// IME drops at the start of the next step.
    pub(super) fn exec_di(&mut self) {
        self.ime_disable_pending = true;
        self.ime_enable_pending = false;
    }

    /// IME becomes 1 after the *next* instruction completes.
    pub(super) fn exec_ei(&mut self) {
        self.ime_enable_pending = true;
        self.ime_disable_pending = false;
    }

    /// `IF & IE` restricted to the five real sources.
    pub(in crate::cpu) fn pending_interrupts<B: Bus>(bus: &mut B) -> Interrupts {
        let ie = bus.read8(Interrupts::IE_ADDR);
        let iflags = bus.read8(Interrupts::IF_ADDR);
        Interrupts::from_bits_truncate(ie & iflags)
    }
}
