pub mod cpu;
pub mod interrupt;
pub mod machine;
pub mod ppu;

pub use cpu::{Bus, Cpu};
pub use interrupt::{Interrupt, Interrupts};
pub use machine::{BootState, Button, GameBoy, GameBoyConfig, Mmu};
pub use ppu::Ppu;

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
