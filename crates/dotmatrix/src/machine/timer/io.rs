use super::{Timer, DIV, TAC, TIMA, TMA};

impl Timer {
    pub fn read_register(&self, addr: u16) -> u8 {
        match addr {
            DIV => (self.counter >> 8) as u8,
            TIMA => self.tima,
            TMA => self.tma,
            TAC => self.tac | 0xF8,
            _ => 0xFF,
        }
    }

    pub fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            DIV => {
                // Resetting the counter can drop the selected bit.
                let before = self.timer_input();
                self.counter = 0;
                if before {
                    self.increment_tima();
                }
            }
            TIMA => {
                // A write during the reload window cancels the reload.
                self.tima = value;
                self.overflow = false;
            }
            TMA => self.tma = value,
            TAC => {
                let before = self.timer_input();
                self.tac = value & 0x07;
                if before && !self.timer_input() {
                    self.increment_tima();
                }
            }
            _ => {}
        }
    }
}
