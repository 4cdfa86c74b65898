use super::opcode::CbOp;
use super::table::CB_PREFIXED;
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// The 0xCB byte has already been fetched; this reads the second byte
    /// and returns the full cost of the pair.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let byte = self.fetch8(bus);
        let entry = CB_PREFIXED[usize::from(byte)];
        log::trace!("CB {:02X}  {}", byte, entry.op);

        match entry.op {
            CbOp::Shift(op, reg) => {
                let value = self.read_r8(bus, reg);
                let result = self.alu_shift(op, value);
                self.write_r8(bus, reg, result);
            }
            CbOp::Bit(bit, reg) => {
                let value = self.read_r8(bus, reg);
                // C is preserved, H set, N cleared.
                self.set_flag(Flag::Z, value & (1 << bit) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
            }
            CbOp::Res(bit, reg) => {
                let value = self.read_r8(bus, reg);
                self.write_r8(bus, reg, value & !(1 << bit));
            }
            CbOp::Set(bit, reg) => {
                let value = self.read_r8(bus, reg);
                self.write_r8(bus, reg, value | (1 << bit));
            }
        }

        entry.cycles
    }
}
