#![allow(dead_code)]

use once_cell::sync::Lazy;

use dotmatrix::GameBoy;

/// 32 KiB ROM-only image with `chunks` placed at their addresses and a
/// valid header.
pub fn build_rom(title: &str, chunks: &[(u16, &[u8])]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    for &(addr, bytes) in chunks {
        let start = usize::from(addr);
        rom[start..start + bytes.len()].copy_from_slice(bytes);
    }
    let title = title.as_bytes();
    rom[0x134..0x134 + title.len()].copy_from_slice(title);
    rom[0x147] = 0x00;
    rom[0x148] = 0x00;
    rom[0x149] = 0x00;
    rom
}

/// Prints the zero-terminated string at 0x0150 over the serial port, then
/// spins.
pub static SERIAL_ROM: Lazy<Vec<u8>> = Lazy::new(|| {
    build_rom(
        "SERIAL",
        &[
            (
                0x0100,
                &[
                    0x21, 0x50, 0x01, // LD HL,0x0150
                    0x2A, // LD A,(HL+)
                    0xA7, // AND A
                    0x28, 0x08, // JR Z,+8
                    0xE0, 0x01, // LDH (SB),A
                    0x3E, 0x81, // LD A,0x81
                    0xE0, 0x02, // LDH (SC),A
                    0x18, 0xF4, // JR -12
                    0x18, 0xFE, // JR -2
                ],
            ),
            (0x0150, b"Passed\0"),
        ],
    )
});

/// Enables only the V-Blank interrupt and halts forever; the handler counts
/// interrupts in HRAM at 0xFF80.
pub static VBLANK_ROM: Lazy<Vec<u8>> = Lazy::new(|| {
    build_rom(
        "VBLANK",
        &[
            (
                0x0040,
                &[
                    0x21, 0x80, 0xFF, // LD HL,0xFF80
                    0x34, // INC (HL)
                    0xD9, // RETI
                ],
            ),
            (
                0x0100,
                &[
                    0x3E, 0x01, // LD A,0x01
                    0xE0, 0xFF, // LDH (IE),A
                    0xAF, // XOR A
                    0xE0, 0x0F, // LDH (IF),A
                    0xFB, // EI
                    0x76, // HALT
                    0x18, 0xFD, // JR -3
                ],
            ),
        ],
    )
});

/// Fills tile 0 with colour 3 so the whole background turns dark.
pub static FILL_ROM: Lazy<Vec<u8>> = Lazy::new(|| {
    build_rom(
        "FILL",
        &[(
            0x0100,
            &[
                0x21, 0x00, 0x80, // LD HL,0x8000
                0x06, 0x10, // LD B,16
                0x3E, 0xFF, // LD A,0xFF
                0x22, // LD (HL+),A
                0x05, // DEC B
                0x20, 0xFC, // JR NZ,-4
                0x18, 0xFE, // JR -2
            ],
        )],
    )
});

pub fn boot(rom: &[u8]) -> GameBoy {
    match GameBoy::load(rom.to_vec()) {
        Ok(gb) => gb,
        Err(err) => panic!("failed to load test ROM: {err:#}"),
    }
}
