use crate::Interrupts;

pub const SB: u16 = 0xFF01;
pub const SC: u16 = 0xFF02;

/// SB/SC with no link partner attached.
///
/// A transfer started with the internal clock (SC bits 7 and 0 set)
/// completes at once: the SB byte is appended to `output`, the start bit
/// clears and the serial interrupt is requested. Test ROMs report their
/// results this way.
#[derive(Default)]
pub struct Serial {
    sb: u8,
    sc: u8,
    output: Vec<u8>,
}

impl Serial {
    pub fn init_dmg(&mut self) {
        self.sb = 0x00;
        self.sc = 0x7E;
    }

    pub fn read_register(&self, addr: u16) -> u8 {
        match addr {
            SB => self.sb,
            SC => self.sc | 0x7E,
            _ => 0xFF,
        }
    }

    pub fn write_register(&mut self, addr: u16, value: u8, irq: &mut Interrupts) {
        match addr {
            SB => self.sb = value,
            SC => {
                self.sc = value;
                if self.sc & 0x81 == 0x81 {
                    self.output.push(self.sb);
                    self.sc &= !0x80;
                    irq.insert(Interrupts::SERIAL);
                }
            }
            _ => {}
        }
    }

    /// Every byte sent so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }
}
