use super::mmio::{BGP, LCDC, LY, LYC, OBP0, OBP1, SCX, SCY, STAT, WX, WY};
use super::*;
use crate::Interrupts;

fn lcd_on() -> (Ppu, Interrupts) {
    let mut ppu = Ppu::new();
    let mut irq = Interrupts::empty();
    ppu.write_register(LCDC, 0x91, &mut irq);
    ppu.write_register(BGP, 0xE4, &mut irq);
    ppu.write_register(OBP0, 0xE4, &mut irq);
    (ppu, irq)
}

/// Fill tile `index` (unsigned addressing) with a single colour.
fn solid_tile(ppu: &mut Ppu, index: u16, color: u8) {
    let lo = if color & 1 != 0 { 0xFF } else { 0x00 };
    let hi = if color & 2 != 0 { 0xFF } else { 0x00 };
    for row in 0..8 {
        ppu.vram_write(0x8000 + index * 16 + row * 2, lo);
        ppu.vram_write(0x8000 + index * 16 + row * 2 + 1, hi);
    }
}

fn row(ppu: &Ppu, line: usize) -> &[u8] {
    &ppu.framebuffer()[line * 160..(line + 1) * 160]
}

fn run_to_line(ppu: &mut Ppu, irq: &mut Interrupts, line: u8) {
    ppu.step(LINE_CYCLES * u32::from(line), irq);
}

#[test]
fn one_line_returns_to_oam_search() {
    let (mut ppu, mut irq) = lcd_on();
    assert_eq!(ppu.mode(), Mode::OamSearch);
    assert_eq!(ppu.line(), 0);

    ppu.step(80, &mut irq);
    assert_eq!(ppu.mode(), Mode::PixelTransfer);
    ppu.step(172, &mut irq);
    assert_eq!(ppu.mode(), Mode::HBlank);
    ppu.step(204, &mut irq);

    assert_eq!(ppu.mode(), Mode::OamSearch);
    assert_eq!(ppu.line(), 1);
    assert_eq!(ppu.mode_clock(), 0);
}

#[test]
fn single_large_step_crosses_modes() {
    let (mut ppu, mut irq) = lcd_on();
    ppu.step(456 + 100, &mut irq);
    assert_eq!(ppu.line(), 1);
    assert_eq!(ppu.mode(), Mode::PixelTransfer);
    assert_eq!(ppu.mode_clock(), 20);
}

#[test]
fn vblank_at_line_144_requests_interrupt() {
    let (mut ppu, mut irq) = lcd_on();
    run_to_line(&mut ppu, &mut irq, 143);
    assert!(!irq.contains(Interrupts::VBLANK));

    ppu.step(LINE_CYCLES, &mut irq);
    assert_eq!(ppu.line(), 144);
    assert_eq!(ppu.mode(), Mode::VBlank);
    assert!(irq.contains(Interrupts::VBLANK));
}

#[test]
fn frame_wraps_to_line_zero() {
    let (mut ppu, mut irq) = lcd_on();
    ppu.step(FRAME_CYCLES - 1, &mut irq);
    assert_eq!(ppu.line(), 153);
    assert_eq!(ppu.mode(), Mode::VBlank);

    ppu.step(1, &mut irq);
    assert_eq!(ppu.line(), 0);
    assert_eq!(ppu.mode(), Mode::OamSearch);
    assert_eq!(ppu.mode_clock(), 0);
}

#[test]
fn lyc_interrupt_fires_on_transition_only() {
    let (mut ppu, mut irq) = lcd_on();
    ppu.write_register(STAT, 0x40, &mut irq);
    ppu.write_register(LYC, 2, &mut irq);
    assert!(irq.is_empty());

    run_to_line(&mut ppu, &mut irq, 2);
    assert!(irq.contains(Interrupts::STAT));
    assert_eq!(ppu.read_register(STAT) & 0x04, 0x04);

    irq.remove(Interrupts::STAT);
    ppu.write_register(LYC, 2, &mut irq);
    ppu.step(100, &mut irq);
    assert!(!irq.contains(Interrupts::STAT));

    run_to_line(&mut ppu, &mut irq, 1);
    assert_eq!(ppu.read_register(STAT) & 0x04, 0);
    assert!(!irq.contains(Interrupts::STAT));
}

#[test]
fn stat_mode_select_raises_interrupt() {
    let (mut ppu, mut irq) = lcd_on();
    ppu.write_register(STAT, 0x08, &mut irq);
    ppu.step(80 + 172, &mut irq);
    assert_eq!(ppu.mode(), Mode::HBlank);
    assert!(irq.contains(Interrupts::STAT));
}

#[test]
fn lcd_off_freezes_state() {
    let (mut ppu, mut irq) = lcd_on();
    ppu.step(500, &mut irq);
    ppu.write_register(LCDC, 0x11, &mut irq);
    assert_eq!(ppu.line(), 0);
    assert_eq!(ppu.mode(), Mode::HBlank);

    ppu.step(FRAME_CYCLES * 2, &mut irq);
    assert_eq!(ppu.line(), 0);
    assert_eq!(ppu.mode_clock(), 0);
    assert!(irq.is_empty());

    ppu.write_register(LCDC, 0x91, &mut irq);
    assert_eq!(ppu.mode(), Mode::OamSearch);
}

#[test]
fn lcd_off_clears_stale_coincidence() {
    let (mut ppu, mut irq) = lcd_on();
    ppu.write_register(STAT, 0x40, &mut irq);
    ppu.write_register(LYC, 5, &mut irq);
    run_to_line(&mut ppu, &mut irq, 5);
    assert!(irq.contains(Interrupts::STAT));
    irq.remove(Interrupts::STAT);

    ppu.write_register(LCDC, 0x11, &mut irq);
    assert_eq!(ppu.line(), 0);
    assert_eq!(ppu.read_register(STAT) & 0x04, 0);

    // LY is parked at 0, so matching it is a fresh coincidence.
    ppu.write_register(LYC, 0, &mut irq);
    assert!(irq.contains(Interrupts::STAT));
    assert_eq!(ppu.read_register(STAT) & 0x04, 0x04);
}

#[test]
fn stat_write_keeps_derived_bits() {
    let (mut ppu, mut irq) = lcd_on();
    ppu.step(80, &mut irq);
    ppu.write_register(STAT, 0xFF, &mut irq);
    assert_eq!(ppu.read_register(STAT), 0x80 | 0x78 | 0x04 | 0x03);

    ppu.write_register(STAT, 0x00, &mut irq);
    assert_eq!(ppu.read_register(STAT) & 0x07, 0x07);
}

#[test]
fn ly_write_resets_line() {
    let (mut ppu, mut irq) = lcd_on();
    run_to_line(&mut ppu, &mut irq, 40);
    ppu.step(10, &mut irq);
    ppu.write_register(LY, 0x99, &mut irq);
    assert_eq!(ppu.read_register(LY), 0);
    assert_eq!(ppu.mode_clock(), 0);
}

#[test]
fn background_uses_signed_addressing() {
    let (mut ppu, mut irq) = lcd_on();
    // LCDC bit 4 clear: tile 0 lives at 0x9000.
    ppu.write_register(LCDC, 0x81, &mut irq);
    for row in 0..8 {
        ppu.vram_write(0x9000 + row * 2, 0xFF);
        ppu.vram_write(0x9000 + row * 2 + 1, 0xFF);
    }
    ppu.step(80 + 172, &mut irq);
    assert!(row(&ppu, 0).iter().all(|&p| p == 3));
}

#[test]
fn background_palette_is_applied() {
    let (mut ppu, mut irq) = lcd_on();
    solid_tile(&mut ppu, 0, 1);
    ppu.write_register(BGP, 0b0000_1100, &mut irq);
    ppu.step(80 + 172, &mut irq);
    assert!(row(&ppu, 0).iter().all(|&p| p == 3));
}

#[test]
fn scx_shifts_background_left() {
    let (mut ppu, mut irq) = lcd_on();
    solid_tile(&mut ppu, 1, 3);
    ppu.vram_write(0x9801, 1);
    ppu.write_register(SCX, 4, &mut irq);
    ppu.step(80 + 172, &mut irq);
    let line = row(&ppu, 0);
    assert!(line[..4].iter().all(|&p| p == 0));
    assert!(line[4..12].iter().all(|&p| p == 3));
    assert!(line[12..].iter().all(|&p| p == 0));
}

#[test]
fn scy_selects_map_row() {
    let (mut ppu, mut irq) = lcd_on();
    solid_tile(&mut ppu, 1, 3);
    // Second map row, first column.
    ppu.vram_write(0x9820, 1);
    ppu.write_register(SCY, 4, &mut irq);
    ppu.step(80 + 172, &mut irq);
    assert!(row(&ppu, 0).iter().all(|&p| p == 0));

    // Already 252 cycles into line 0, so this lands just past line 4's transfer.
    run_to_line(&mut ppu, &mut irq, 4);
    assert_eq!(ppu.line(), 4);
    assert_eq!(ppu.mode(), Mode::HBlank);
    let line = row(&ppu, 4);
    assert!(line[..8].iter().all(|&p| p == 3));
    assert!(line[8..].iter().all(|&p| p == 0));
}

#[test]
fn bg_map_high_reads_9c00() {
    let (mut ppu, mut irq) = lcd_on();
    ppu.write_register(LCDC, 0x99, &mut irq);
    solid_tile(&mut ppu, 1, 3);
    ppu.vram_write(0x9C00, 1);
    ppu.vram_write(0x9801, 1);
    ppu.step(80 + 172, &mut irq);
    let line = row(&ppu, 0);
    assert!(line[..8].iter().all(|&p| p == 3));
    assert!(line[8..16].iter().all(|&p| p == 0));
}

fn window_setup(wx: u8) -> Ppu {
    let (mut ppu, mut irq) = lcd_on();
    // Window map at 0x9C00 points at tile 1, solid colour 3.
    ppu.write_register(LCDC, 0x91 | 0x20 | 0x40, &mut irq);
    solid_tile(&mut ppu, 1, 3);
    for i in 0..0x400 {
        ppu.vram_write(0x9C00 + i, 1);
    }
    ppu.write_register(WY, 0, &mut irq);
    ppu.write_register(WX, wx, &mut irq);
    ppu.step(80 + 172, &mut irq);
    ppu
}

#[test]
fn window_x_out_of_range_draws_nothing() {
    for wx in [0, 6, 167] {
        let ppu = window_setup(wx);
        assert!(row(&ppu, 0).iter().all(|&p| p == 0), "wx={wx}");
    }
}

#[test]
fn window_x_seven_starts_at_left_edge() {
    let ppu = window_setup(7);
    assert!(row(&ppu, 0).iter().all(|&p| p == 3));

    let ppu = window_setup(87);
    assert!(row(&ppu, 0)[..80].iter().all(|&p| p == 0));
    assert!(row(&ppu, 0)[80..].iter().all(|&p| p == 3));
}

fn put_sprite(ppu: &mut Ppu, index: u16, y: u8, x: u8, tile: u8, flags: u8) {
    let base = 0xFE00 + index * 4;
    ppu.oam_write(base, y);
    ppu.oam_write(base + 1, x);
    ppu.oam_write(base + 2, tile);
    ppu.oam_write(base + 3, flags);
}

fn sprites_on() -> (Ppu, Interrupts) {
    let (mut ppu, mut irq) = lcd_on();
    ppu.write_register(LCDC, 0x93, &mut irq);
    (ppu, irq)
}

#[test]
fn sprite_color_zero_is_transparent() {
    let (mut ppu, mut irq) = sprites_on();
    solid_tile(&mut ppu, 0, 0);
    solid_tile(&mut ppu, 2, 0);
    // Left half colour 2, right half transparent.
    for r in 0..8 {
        ppu.vram_write(0x8020 + r * 2 + 1, 0xF0);
    }
    put_sprite(&mut ppu, 0, 16, 8, 2, 0);
    ppu.step(80 + 172, &mut irq);
    let line = row(&ppu, 0);
    assert_eq!(&line[..4], &[2, 2, 2, 2]);
    assert_eq!(&line[4..8], &[0, 0, 0, 0]);
}

#[test]
fn lower_x_sprite_wins_overlap() {
    let (mut ppu, mut irq) = sprites_on();
    solid_tile(&mut ppu, 1, 1);
    solid_tile(&mut ppu, 2, 2);
    // Higher OAM index but lower X: it must end up on top.
    put_sprite(&mut ppu, 0, 16, 12, 1, 0);
    put_sprite(&mut ppu, 1, 16, 8, 2, 0);
    ppu.step(80 + 172, &mut irq);
    let line = row(&ppu, 0);
    assert_eq!(line[4], 2);
    assert_eq!(line[7], 2);
    assert_eq!(line[8], 1);
}

#[test]
fn equal_x_goes_to_lower_oam_index() {
    let (mut ppu, mut irq) = sprites_on();
    solid_tile(&mut ppu, 1, 1);
    solid_tile(&mut ppu, 2, 2);
    put_sprite(&mut ppu, 0, 16, 8, 1, 0);
    put_sprite(&mut ppu, 1, 16, 8, 2, 0);
    ppu.step(80 + 172, &mut irq);
    assert_eq!(row(&ppu, 0)[0], 1);
}

#[test]
fn behind_bg_sprite_hidden_by_nonzero_background() {
    let (mut ppu, mut irq) = sprites_on();
    solid_tile(&mut ppu, 0, 1);
    solid_tile(&mut ppu, 2, 3);
    put_sprite(&mut ppu, 0, 16, 8, 2, 0x80);
    ppu.step(80 + 172, &mut irq);
    assert!(row(&ppu, 0)[..8].iter().all(|&p| p == 1));
}

#[test]
fn only_ten_sprites_per_line() {
    let (mut ppu, mut irq) = sprites_on();
    solid_tile(&mut ppu, 1, 3);
    for i in 0..12u16 {
        put_sprite(&mut ppu, i, 16, 8 + (i as u8) * 8, 1, 0);
    }
    ppu.step(80 + 172, &mut irq);
    let line = row(&ppu, 0);
    assert!(line[..80].iter().all(|&p| p == 3));
    assert!(line[80..96].iter().all(|&p| p == 0));
}

#[test]
fn tall_sprites_ignore_tile_low_bit() {
    let (mut ppu, mut irq) = sprites_on();
    ppu.write_register(LCDC, 0x97, &mut irq);
    solid_tile(&mut ppu, 4, 1);
    solid_tile(&mut ppu, 5, 2);
    put_sprite(&mut ppu, 0, 16, 8, 5, 0);
    run_to_line(&mut ppu, &mut irq, 8);
    ppu.step(80 + 172, &mut irq);
    assert_eq!(row(&ppu, 0)[0], 1);
    assert_eq!(row(&ppu, 8)[0], 2);
}

#[test]
fn oam_load_replaces_table() {
    let mut ppu = Ppu::new();
    let mut data = [0u8; OAM_SIZE];
    data[0] = 0x42;
    data[OAM_SIZE - 1] = 0x99;
    ppu.oam_load(&data);
    assert_eq!(ppu.oam_read(0xFE00), 0x42);
    assert_eq!(ppu.oam_read(0xFE9F), 0x99);
}

/// Tile 2 with only its left column set to colour 3.
fn left_column_tile(ppu: &mut Ppu) {
    for r in 0..8 {
        ppu.vram_write(0x8020 + r * 2, 0x80);
        ppu.vram_write(0x8020 + r * 2 + 1, 0x80);
    }
}

#[test]
fn x_flip_mirrors_sprite_columns() {
    let (mut ppu, mut irq) = sprites_on();
    left_column_tile(&mut ppu);
    put_sprite(&mut ppu, 0, 16, 8, 2, 0);
    put_sprite(&mut ppu, 1, 16, 24, 2, 0x20);
    ppu.step(80 + 172, &mut irq);
    let line = row(&ppu, 0);
    assert_eq!(&line[..8], &[3, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(&line[16..24], &[0, 0, 0, 0, 0, 0, 0, 3]);
}

#[test]
fn y_flip_mirrors_sprite_rows() {
    let (mut ppu, mut irq) = sprites_on();
    // Only the tile's top row is opaque.
    ppu.vram_write(0x8020, 0xFF);
    ppu.vram_write(0x8021, 0xFF);
    put_sprite(&mut ppu, 0, 16, 8, 2, 0);
    put_sprite(&mut ppu, 1, 16, 16, 2, 0x40);
    run_to_line(&mut ppu, &mut irq, 7);
    ppu.step(80 + 172, &mut irq);

    assert!(row(&ppu, 0)[..8].iter().all(|&p| p == 3));
    assert!(row(&ppu, 0)[8..16].iter().all(|&p| p == 0));
    assert!(row(&ppu, 7)[..8].iter().all(|&p| p == 0));
    assert!(row(&ppu, 7)[8..16].iter().all(|&p| p == 3));
}

#[test]
fn y_flip_swaps_tall_sprite_halves() {
    let (mut ppu, mut irq) = sprites_on();
    ppu.write_register(LCDC, 0x97, &mut irq);
    solid_tile(&mut ppu, 4, 1);
    solid_tile(&mut ppu, 5, 2);
    put_sprite(&mut ppu, 0, 16, 8, 4, 0x40);
    run_to_line(&mut ppu, &mut irq, 8);
    ppu.step(80 + 172, &mut irq);
    assert_eq!(row(&ppu, 0)[0], 2);
    assert_eq!(row(&ppu, 8)[0], 1);
}

#[test]
fn palette_bit_selects_obp1() {
    let (mut ppu, mut irq) = sprites_on();
    solid_tile(&mut ppu, 1, 1);
    ppu.write_register(OBP1, 0b0000_1100, &mut irq);
    put_sprite(&mut ppu, 0, 16, 8, 1, 0x10);
    put_sprite(&mut ppu, 1, 16, 16, 1, 0);
    ppu.step(80 + 172, &mut irq);
    let line = row(&ppu, 0);
    assert!(line[..8].iter().all(|&p| p == 3));
    assert!(line[8..16].iter().all(|&p| p == 1));
}
