use super::super::Cpu;

impl Cpu {
    /// Apply a DI scheduled on the previous step.
    #[inline]
    pub(in crate::cpu) fn apply_pending_disable(&mut self) {
        if self.ime_disable_pending {
            self.ime = false;
            self.ime_disable_pending = false;
        }
    }

    /// Apply an EI scheduled on the previous step.
    ///
    /// Called after the interrupt check, so the instruction right after EI
    /// always runs before any dispatch.
    #[inline]
    pub(in crate::cpu) fn apply_pending_enable(&mut self) {
        if self.ime_enable_pending {
            self.ime = true;
            self.ime_enable_pending = false;
        }
    }
}
