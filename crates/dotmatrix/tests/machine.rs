mod common;

use dotmatrix::machine::cartridge;
use dotmatrix::ppu::Mode;
use dotmatrix::{
    BootState, Bus, Button, Cpu, GameBoy, GameBoyConfig, Interrupts, SCREEN_HEIGHT, SCREEN_WIDTH,
};

use common::{boot, FILL_ROM, SERIAL_ROM, VBLANK_ROM};

#[test]
fn serial_rom_reports_passed() {
    let mut gb = boot(&SERIAL_ROM);
    gb.step_frame();
    assert_eq!(gb.serial_output(), b"Passed");
}

#[test]
fn header_title_is_parsed() {
    let gb = boot(&SERIAL_ROM);
    let cart = gb.mmu.cartridge().expect("cartridge inserted");
    assert_eq!(cart.header().title, "SERIAL");
}

#[test]
fn vblank_handler_runs_once_per_frame() {
    let mut gb = boot(&VBLANK_ROM);
    for _ in 0..3 {
        gb.step_frame();
    }
    assert_eq!(gb.mmu.read8(0xFF80), 3);
    assert!(gb.cpu.halted);
}

#[test]
fn background_fill_reaches_framebuffer_and_rgb() {
    let mut gb = boot(&FILL_ROM);
    gb.step_frame();
    gb.step_frame();
    assert_eq!(gb.framebuffer().len(), SCREEN_WIDTH * SCREEN_HEIGHT);
    assert!(gb.framebuffer().iter().all(|&p| p == 3));

    let mut rgb = vec![0xAAu8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
    gb.video_frame(&mut rgb);
    assert!(rgb.iter().all(|&b| b == 0x00));
}

#[test]
fn frames_stay_aligned_with_ppu() {
    let mut gb = boot(&FILL_ROM);
    for _ in 0..5 {
        gb.step_frame();
    }
    // The overshoot is carried into the next frame, so after whole frames
    // the PPU sits at the start of line 0, less than one instruction in.
    assert_eq!(gb.mmu.ppu().line(), 0);
    assert_eq!(gb.mmu.ppu().mode(), Mode::OamSearch);
    assert!(gb.mmu.ppu().mode_clock() < 24);
}

#[test]
fn post_boot_registers() {
    let gb = boot(&SERIAL_ROM);
    assert_eq!(gb.cpu.regs.pc, 0x0100);
    assert_eq!(gb.cpu.regs.sp, 0xFFFE);
    assert_eq!(gb.cpu.regs.af(), 0x01B0);
    assert!(gb.mmu.ppu().lcd_enabled());
    assert_eq!(gb.mmu.interrupt_flags(), Interrupts::VBLANK);
}

#[test]
fn zeroed_config_starts_at_reset_vector() {
    let config = GameBoyConfig::builder()
        .boot_state(BootState::Zeroed)
        .frame_cycles(1_000)
        .build();
    let mut gb = GameBoy::with_config(config);
    assert_eq!(gb.cpu.regs.pc, 0x0000);
    assert!(!gb.mmu.ppu().lcd_enabled());

    gb.step_frame();
    assert_eq!(gb.config().frame_cycles, 1_000);
    assert_eq!(gb.mmu.ppu().line(), 0);
}

#[test]
fn rom_loads_into_zeroed_machine() {
    let config = GameBoyConfig::builder()
        .boot_state(BootState::Zeroed)
        .build();
    let mut gb = match GameBoy::load_with_config(SERIAL_ROM.clone(), config) {
        Ok(gb) => gb,
        Err(err) => panic!("failed to load test ROM: {err:#}"),
    };
    assert_eq!(gb.config().boot_state, BootState::Zeroed);
    assert_eq!(gb.cpu.regs.pc, 0x0000);
    assert_eq!(gb.cpu.regs.sp, 0x0000);
    assert!(!gb.mmu.ppu().lcd_enabled());
    assert_eq!(gb.mmu.read8(0x0100), SERIAL_ROM[0x0100]);
}

#[test]
fn default_config_runs_full_frames() {
    let config = GameBoyConfig::default();
    assert_eq!(config.boot_state, BootState::PostBoot);
    assert_eq!(config.frame_cycles, 70_224);
}

#[test]
fn button_press_requests_joypad_interrupt() {
    let mut gb = boot(&SERIAL_ROM);
    gb.mmu.write8(0xFF0F, 0x00);
    gb.press(Button::Start);
    assert!(gb.mmu.interrupt_flags().contains(Interrupts::JOYPAD));

    gb.mmu.write8(0xFF00, 0x10);
    assert_eq!(gb.mmu.read8(0xFF00) & 0x0F, 0x07);
    gb.release(Button::Start);
    assert_eq!(gb.mmu.read8(0xFF00) & 0x0F, 0x0F);
}

#[test]
fn invalid_image_is_rejected() {
    assert!(GameBoy::load(vec![0; 0x40]).is_err());

    let mut rom = SERIAL_ROM.clone();
    rom[0x147] = 0xFC;
    assert!(cartridge::load(rom).is_err());
}

#[test]
fn disassembly_of_rom_entry() {
    let mut gb = boot(&SERIAL_ROM);
    let (text, len) = Cpu::disassemble(&mut gb.mmu, 0x0100);
    assert_eq!(text, "LD HL,d16");
    assert_eq!(len, 3);
}
