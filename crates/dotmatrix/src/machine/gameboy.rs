use crate::cpu::Cpu;

use super::cartridge::{self, Cartridge};
use super::joypad::Button;
use super::{video, BootState, GameBoyConfig, Mmu};

/// CPU plus memory fabric, driven one instruction at a time.
pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
    config: GameBoyConfig,
    /// Cycles the last frame ran past its budget.
    frame_overshoot: u32,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self::with_config(GameBoyConfig::default())
    }

    pub fn with_config(config: GameBoyConfig) -> Self {
        let mut cpu = Cpu::new();
        let mut mmu = Mmu::new();
        if config.boot_state == BootState::PostBoot {
            cpu.apply_dmg_boot_state();
            mmu.apply_dmg_boot_state();
        }
        Self {
            cpu,
            mmu,
            config,
            frame_overshoot: 0,
        }
    }

    /// Parse `rom` and build a post-boot machine around it.
    pub fn load(rom: Vec<u8>) -> anyhow::Result<Self> {
        Self::load_with_config(rom, GameBoyConfig::default())
    }

    pub fn load_with_config(rom: Vec<u8>, config: GameBoyConfig) -> anyhow::Result<Self> {
        let cartridge = cartridge::load(rom)?;
        let mut gb = Self::with_config(config);
        gb.insert_cartridge(cartridge);
        Ok(gb)
    }

    pub fn insert_cartridge(&mut self, cartridge: Box<dyn Cartridge>) {
        self.mmu.insert_cartridge(cartridge);
    }

    pub fn config(&self) -> &GameBoyConfig {
        &self.config
    }

    /// Run one instruction (or interrupt dispatch) and let the timer and PPU
    /// catch up. Returns the T-cycles taken.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.mmu);
        self.mmu.step(cycles);
        cycles
    }

    /// Run for one frame's worth of cycles. The instruction that crosses the
    /// boundary is charged to the next frame.
    pub fn step_frame(&mut self) {
        let budget = self.config.frame_cycles;
        let mut elapsed = self.frame_overshoot;
        while elapsed < budget {
            elapsed += self.step();
        }
        self.frame_overshoot = elapsed - budget;
    }

    pub fn press(&mut self, button: Button) {
        self.mmu.set_button(button, true);
    }

    pub fn release(&mut self, button: Button) {
        self.mmu.set_button(button, false);
    }

    /// 160x144 shades, 0 (lightest) to 3 (darkest).
    pub fn framebuffer(&self) -> &[u8] {
        self.mmu.ppu().framebuffer()
    }

    /// Current frame as RGB24.
    pub fn video_frame(&self, buffer: &mut [u8]) {
        video::framebuffer_to_rgb24(self.framebuffer(), buffer);
    }

    pub fn serial_output(&self) -> &[u8] {
        self.mmu.serial_output()
    }
}
