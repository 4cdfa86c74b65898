use super::{LcdControl, Mode, Ppu, StatSelect, LINES_PER_FRAME, VBLANK_START_LINE};
use crate::Interrupts;

impl Ppu {
    /// Advance the scanline state machine by `cycles`.
    ///
    /// A single call may cross any number of mode boundaries; leftover cycles
    /// stay in the mode clock. Nothing advances while the LCD is off.
    pub fn step(&mut self, cycles: u32, irq: &mut Interrupts) {
        if !self.lcd_enabled() {
            return;
        }

        self.mode_clock += cycles;
        while self.mode_clock >= self.mode.budget() {
            self.mode_clock -= self.mode.budget();
            self.advance_mode(irq);
        }
    }

    fn advance_mode(&mut self, irq: &mut Interrupts) {
        match self.mode {
            Mode::OamSearch => self.enter_mode(Mode::PixelTransfer, irq),
            Mode::PixelTransfer => {
                self.render_scanline();
                self.enter_mode(Mode::HBlank, irq);
            }
            Mode::HBlank => {
                self.ly += 1;
                self.update_lyc(irq);
                if self.ly == VBLANK_START_LINE {
                    log::debug!("GB PPU: entering V-Blank");
                    irq.insert(Interrupts::VBLANK);
                    self.enter_mode(Mode::VBlank, irq);
                } else {
                    self.enter_mode(Mode::OamSearch, irq);
                }
            }
            Mode::VBlank => {
                self.ly += 1;
                if self.ly >= LINES_PER_FRAME {
                    self.ly = 0;
                    self.update_lyc(irq);
                    self.enter_mode(Mode::OamSearch, irq);
                } else {
                    self.update_lyc(irq);
                }
            }
        }
    }

    fn enter_mode(&mut self, mode: Mode, irq: &mut Interrupts) {
        self.mode = mode;
        let select = match mode {
            Mode::HBlank => StatSelect::HBLANK,
            Mode::VBlank => StatSelect::VBLANK,
            Mode::OamSearch => StatSelect::OAM_SEARCH,
            Mode::PixelTransfer => return,
        };
        if self.stat_select.contains(select) {
            irq.insert(Interrupts::STAT);
        }
    }

    /// Re-check LY == LYC. The STAT request is raised only on the rising
    /// edge, so a repeated check while still equal does nothing.
    pub(super) fn update_lyc(&mut self, irq: &mut Interrupts) {
        let matched = self.ly == self.lyc;
        if matched && !self.lyc_match && self.stat_select.contains(StatSelect::LYC) {
            irq.insert(Interrupts::STAT);
        }
        self.lyc_match = matched;
    }

    /// LCDC bit 7 cleared: blank the panel and park at line 0.
    pub(super) fn lcd_off(&mut self) {
        log::debug!("GB PPU: LCD off");
        self.mode = Mode::HBlank;
        self.ly = 0;
        self.mode_clock = 0;
        // Coincidence follows the parked LY, so a later LYC=0 write is
        // still a rising edge.
        self.lyc_match = self.ly == self.lyc;
        self.framebuffer.fill(0);
    }

    /// LCDC bit 7 set from a previously-off state.
    pub(super) fn lcd_on(&mut self, irq: &mut Interrupts) {
        log::debug!("GB PPU: LCD on");
        self.ly = 0;
        self.mode_clock = 0;
        self.mode = Mode::OamSearch;
        self.update_lyc(irq);
    }

    pub(super) fn set_lcdc(&mut self, value: u8, irq: &mut Interrupts) {
        let was_on = self.lcd_enabled();
        self.lcdc = LcdControl::from_bits_retain(value);
        match (was_on, self.lcd_enabled()) {
            (true, false) => self.lcd_off(),
            (false, true) => self.lcd_on(irq),
            _ => {}
        }
    }
}
