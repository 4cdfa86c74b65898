mod apu;
pub mod cartridge;
mod config;
mod gameboy;
pub mod joypad;
mod mmu;
mod serial;
mod timer;
pub mod video;

pub use cartridge::Cartridge;
pub use config::{BootState, GameBoyConfig};
pub use gameboy::GameBoy;
pub use joypad::Button;
pub use mmu::{IoHook, Mmu, Region};
