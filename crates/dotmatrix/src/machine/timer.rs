//! Timer / divider unit.
//!
//! DIV is the upper byte of a free-running 16-bit counter that advances once
//! per T-cycle. TIMA increments on the falling edge of the counter bit
//! selected by TAC, so writes that reset the counter or change the source
//! can produce an extra tick just like on hardware.
mod io;

use crate::Interrupts;

pub const DIV: u16 = 0xFF04;
pub const TIMA: u16 = 0xFF05;
pub const TMA: u16 = 0xFF06;
pub const TAC: u16 = 0xFF07;

pub struct Timer {
    /// Hidden system counter; DIV exposes its upper bits.
    counter: u16,
    tima: u8,
    tma: u8,
    /// Lower three bits of TAC.
    tac: u8,
    /// TIMA overflowed on the previous cycle; the reload from TMA and the
    /// interrupt request happen on the next one.
    overflow: bool,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            counter: 0,
            tima: 0,
            tma: 0,
            tac: 0,
            overflow: false,
        }
    }

    /// DMG state at PC=0x0100: DIV reads back as 0xAB.
    pub fn init_dmg(&mut self) {
        *self = Self::new();
        self.counter = 0xAB00;
    }

    #[inline]
    fn enabled(&self) -> bool {
        self.tac & 0x04 != 0
    }

    /// The counter bit TAC[1:0] selects: 4096, 262144, 65536 or 16384 Hz.
    #[inline]
    fn counter_bit(&self) -> bool {
        let bit = match self.tac & 0x03 {
            0x00 => 9,
            0x01 => 3,
            0x02 => 5,
            _ => 7,
        };
        self.counter & (1 << bit) != 0
    }

    #[inline]
    fn timer_input(&self) -> bool {
        self.enabled() && self.counter_bit()
    }

    fn increment_tima(&mut self) {
        let (next, overflow) = self.tima.overflowing_add(1);
        self.tima = next;
        if overflow {
            self.overflow = true;
        }
    }

    /// Advance by `cycles` T-cycles.
    pub fn step(&mut self, cycles: u32, irq: &mut Interrupts) {
        for _ in 0..cycles {
            self.tick(irq);
        }
    }

    fn tick(&mut self, irq: &mut Interrupts) {
        if self.overflow {
            self.overflow = false;
            self.tima = self.tma;
            irq.insert(Interrupts::TIMER);
        }
        let before = self.timer_input();
        self.counter = self.counter.wrapping_add(1);
        if before && !self.timer_input() {
            self.increment_tima();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_counts_every_256_cycles() {
        let mut timer = Timer::new();
        let mut irq = Interrupts::empty();
        timer.step(255, &mut irq);
        assert_eq!(timer.read_register(DIV), 0);
        timer.step(1, &mut irq);
        assert_eq!(timer.read_register(DIV), 1);

        timer.write_register(DIV, 0x77);
        assert_eq!(timer.read_register(DIV), 0);
    }

    #[test]
    fn post_boot_div() {
        let mut timer = Timer::new();
        timer.init_dmg();
        assert_eq!(timer.read_register(DIV), 0xAB);
        assert_eq!(timer.read_register(TAC), 0xF8);
    }

    #[test]
    fn tima_rate_follows_tac() {
        let mut timer = Timer::new();
        let mut irq = Interrupts::empty();
        // 262144 Hz: one tick every 16 cycles.
        timer.write_register(TAC, 0x05);
        timer.step(16 * 10, &mut irq);
        assert_eq!(timer.read_register(TIMA), 10);

        // Disabled: no further ticks.
        timer.write_register(TAC, 0x01);
        let before = timer.read_register(TIMA);
        timer.step(1024, &mut irq);
        assert_eq!(timer.read_register(TIMA), before);
    }

    #[test]
    fn overflow_reloads_tma_and_requests_interrupt() {
        let mut timer = Timer::new();
        let mut irq = Interrupts::empty();
        timer.write_register(TMA, 0xF0);
        timer.write_register(TIMA, 0xFF);
        timer.write_register(TAC, 0x05);

        timer.step(16, &mut irq);
        assert_eq!(timer.read_register(TIMA), 0x00);
        assert!(!irq.contains(Interrupts::TIMER));

        timer.step(1, &mut irq);
        assert_eq!(timer.read_register(TIMA), 0xF0);
        assert!(irq.contains(Interrupts::TIMER));
    }

    #[test]
    fn div_reset_on_high_input_ticks_tima() {
        let mut timer = Timer::new();
        let mut irq = Interrupts::empty();
        timer.write_register(TAC, 0x05);
        timer.step(8, &mut irq);
        assert_eq!(timer.read_register(TIMA), 0);
        timer.write_register(DIV, 0);
        assert_eq!(timer.read_register(TIMA), 1);
    }
}
