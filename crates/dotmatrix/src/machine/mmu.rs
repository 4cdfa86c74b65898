//! Memory fabric: the 64 KiB CPU address space.
//!
//! Addresses are decoded by the pure [`Region::decode`]; I/O registers are
//! routed through the [`IoHook`] table to the component that owns them. The
//! MMU holds the single IF latch and lends it to the PPU, timer, joypad and
//! serial port as `&mut Interrupts` while they run.

mod dma;
mod init;
mod io;
mod read;
mod region;
mod write;

pub use io::IoHook;
pub use region::Region;

use super::apu::Apu;
use super::cartridge::Cartridge;
use super::joypad::{Button, Joypad};
use super::serial::Serial;
use super::timer::Timer;
use crate::cpu::Bus;
use crate::{Interrupts, Ppu};

pub const WRAM_SIZE: usize = 0x2000;
pub const HRAM_SIZE: usize = 0x7F;
pub const IO_SIZE: usize = 0x80;

pub struct Mmu {
    cartridge: Option<Box<dyn Cartridge>>,
    wram: Box<[u8; WRAM_SIZE]>,
    hram: [u8; HRAM_SIZE],
    /// Backing store for I/O registers without an owning component.
    io: [u8; IO_SIZE],
    if_reg: Interrupts,
    /// All eight bits are stored; only the low five take part in dispatch.
    ie_reg: u8,
    /// Last value written to 0xFF46.
    dma_source: u8,

    ppu: Ppu,
    timer: Timer,
    joypad: Joypad,
    serial: Serial,
    apu: Apu,
}

impl Default for Mmu {
    fn default() -> Self {
        Self::new()
    }
}

impl Mmu {
    /// Power-on state: every RAM and register zeroed, no cartridge.
    pub fn new() -> Self {
        Self {
            cartridge: None,
            wram: Box::new([0; WRAM_SIZE]),
            hram: [0; HRAM_SIZE],
            io: [0; IO_SIZE],
            if_reg: Interrupts::empty(),
            ie_reg: 0,
            dma_source: 0,
            ppu: Ppu::new(),
            timer: Timer::new(),
            joypad: Joypad::default(),
            serial: Serial::default(),
            apu: Apu::default(),
        }
    }

    pub fn with_cartridge(cartridge: Box<dyn Cartridge>) -> Self {
        let mut mmu = Self::new();
        mmu.cartridge = Some(cartridge);
        mmu
    }

    pub fn insert_cartridge(&mut self, cartridge: Box<dyn Cartridge>) {
        self.cartridge = Some(cartridge);
    }

    pub fn cartridge(&self) -> Option<&dyn Cartridge> {
        self.cartridge.as_deref()
    }

    /// Advance the timer, then the PPU, by `cycles` T-cycles.
    pub fn step(&mut self, cycles: u32) {
        self.timer.step(cycles, &mut self.if_reg);
        self.ppu.step(cycles, &mut self.if_reg);
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    pub fn interrupt_flags(&self) -> Interrupts {
        self.if_reg
    }

    pub fn request_interrupt(&mut self, interrupts: Interrupts) {
        self.if_reg.insert(interrupts);
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.joypad.set_pressed(button, pressed, &mut self.if_reg);
    }

    /// Bytes written out over the serial port.
    pub fn serial_output(&self) -> &[u8] {
        self.serial.output()
    }
}

impl Bus for Mmu {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value);
    }
}
