//! Presentation helpers for the PPU framebuffer.

/// RGB value for each DMG shade, lightest first.
pub const DMG_GRAYSCALE: [u8; 4] = [0xFF, 0xAA, 0x55, 0x00];

/// Expand 2-bit shades into RGB24. Converts as many pixels as both buffers
/// hold.
pub fn framebuffer_to_rgb24(shades: &[u8], out: &mut [u8]) {
    for (&shade, rgb) in shades.iter().zip(out.chunks_exact_mut(3)) {
        let level = DMG_GRAYSCALE[usize::from(shade & 0x03)];
        rgb.fill(level);
    }
}
