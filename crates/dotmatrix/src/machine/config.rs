use typed_builder::TypedBuilder;

use crate::ppu::FRAME_CYCLES;

/// Machine state right after construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootState {
    /// Registers and I/O as the DMG boot ROM leaves them, PC at 0x0100.
    #[default]
    PostBoot,
    /// Everything zeroed, LCD off, PC at 0x0000.
    Zeroed,
}

#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct GameBoyConfig {
    #[builder(default)]
    pub boot_state: BootState,
    /// T-cycles per call to `GameBoy::step_frame`.
    #[builder(default = FRAME_CYCLES)]
    pub frame_cycles: u32,
}

impl Default for GameBoyConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
