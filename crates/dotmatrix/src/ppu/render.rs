use super::{LcdControl, Ppu, SpriteFlags};
use crate::SCREEN_WIDTH;

const MAX_SPRITES_PER_LINE: usize = 10;
const OAM_ENTRIES: usize = 40;
/// WX values at or above this put the window off-screen.
const WINDOW_X_MAX: u8 = 166;

#[derive(Clone, Copy, Debug)]
struct Sprite {
    /// Screen coordinates (OAM values minus 16 and 8).
    y: i16,
    x: i16,
    tile: u8,
    flags: SpriteFlags,
    oam_index: usize,
}

/// Map a 2-bit colour index through a palette register.
#[inline]
fn shade(palette: u8, color: u8) -> u8 {
    (palette >> (color * 2)) & 0x03
}

impl Ppu {
    /// VRAM offset of a tile's first byte under the current addressing mode.
    fn tile_data_offset(&self, tile: u8) -> usize {
        if self.lcdc.contains(LcdControl::TILE_DATA_UNSIGNED) {
            usize::from(tile) * 16
        } else {
            // Signed index around 0x9000.
            (0x1000 + i32::from(tile as i8) * 16) as usize
        }
    }

    /// Colour index of pixel (`px`, `py`) within an 8x8 tile starting at
    /// VRAM offset `base`.
    fn tile_pixel(&self, base: usize, px: u8, py: u8) -> u8 {
        let row = base + usize::from(py) * 2;
        let lo = self.vram[row];
        let hi = self.vram[row + 1];
        let bit = 7 - px;
        (((hi >> bit) & 1) << 1) | ((lo >> bit) & 1)
    }

    /// Colour index from a 32x32 tile map at absolute background
    /// coordinates (`x`, `y`).
    fn map_pixel(&self, map_high: bool, x: u8, y: u8) -> u8 {
        let map_base = if map_high { 0x1C00 } else { 0x1800 };
        let index = map_base + usize::from(y / 8) * 32 + usize::from(x / 8);
        let base = self.tile_data_offset(self.vram[index]);
        self.tile_pixel(base, x % 8, y % 8)
    }

    fn window_visible(&self) -> bool {
        self.lcdc.contains(LcdControl::WINDOW_ENABLE)
            && self.ly >= self.wy
            && (7..=WINDOW_X_MAX).contains(&self.wx)
    }

    /// Draw line `ly` into the framebuffer.
    pub(super) fn render_scanline(&mut self) {
        let line = usize::from(self.ly);
        let mut bg_colors = [0u8; SCREEN_WIDTH];
        let mut pixels = [0u8; SCREEN_WIDTH];

        if self.lcdc.contains(LcdControl::BG_ENABLE) {
            let map_high = self.lcdc.contains(LcdControl::BG_MAP_HIGH);
            let y = self.ly.wrapping_add(self.scy);
            for (sx, (color, pixel)) in bg_colors.iter_mut().zip(pixels.iter_mut()).enumerate() {
                let x = (sx as u8).wrapping_add(self.scx);
                *color = self.map_pixel(map_high, x, y);
                *pixel = shade(self.bgp, *color);
            }
        }

        if self.window_visible() {
            let map_high = self.lcdc.contains(LcdControl::WINDOW_MAP_HIGH);
            let y = self.ly - self.wy;
            let start = usize::from(self.wx - 7);
            for sx in start..SCREEN_WIDTH {
                let x = (sx - start) as u8;
                let color = self.map_pixel(map_high, x, y);
                bg_colors[sx] = color;
                pixels[sx] = shade(self.bgp, color);
            }
        }

        if self.lcdc.contains(LcdControl::OBJ_ENABLE) {
            self.render_sprites(&bg_colors, &mut pixels);
        }

        let start = line * SCREEN_WIDTH;
        self.framebuffer[start..start + SCREEN_WIDTH].copy_from_slice(&pixels);
    }

    /// First ten OAM entries covering the current line, highest priority
    /// first: lower X wins, ties go to the lower OAM index.
    fn sprites_on_line(&self) -> Vec<Sprite> {
        let height: i16 = if self.lcdc.contains(LcdControl::OBJ_TALL) { 16 } else { 8 };
        let ly = i16::from(self.ly);

        let mut sprites: Vec<Sprite> = self
            .oam
            .chunks_exact(4)
            .take(OAM_ENTRIES)
            .enumerate()
            .map(|(oam_index, entry)| Sprite {
                y: i16::from(entry[0]) - 16,
                x: i16::from(entry[1]) - 8,
                tile: entry[2],
                flags: SpriteFlags::from_bits_truncate(entry[3]),
                oam_index,
            })
            .filter(|s| ly >= s.y && ly < s.y + height)
            .take(MAX_SPRITES_PER_LINE)
            .collect();

        sprites.sort_by_key(|s| (s.x, s.oam_index));
        sprites
    }

    fn render_sprites(&self, bg_colors: &[u8; SCREEN_WIDTH], pixels: &mut [u8; SCREEN_WIDTH]) {
        let tall = self.lcdc.contains(LcdControl::OBJ_TALL);
        let height: i16 = if tall { 16 } else { 8 };
        let ly = i16::from(self.ly);

        // Back to front, so the highest-priority sprite is painted last.
        for sprite in self.sprites_on_line().iter().rev() {
            let mut row = ly - sprite.y;
            if sprite.flags.contains(SpriteFlags::Y_FLIP) {
                row = height - 1 - row;
            }
            let tile = if tall { sprite.tile & 0xFE } else { sprite.tile };
            // 8x16 rows 8..15 land in the next tile, which is contiguous.
            let base = usize::from(tile) * 16;
            let palette = if sprite.flags.contains(SpriteFlags::PALETTE1) {
                self.obp1
            } else {
                self.obp0
            };

            for col in 0..8i16 {
                let sx = sprite.x + col;
                if !(0..SCREEN_WIDTH as i16).contains(&sx) {
                    continue;
                }
                let px = if sprite.flags.contains(SpriteFlags::X_FLIP) {
                    7 - col
                } else {
                    col
                };
                let color = self.tile_pixel(base, px as u8, row as u8);
                if color == 0 {
                    continue;
                }
                let sx = sx as usize;
                if sprite.flags.contains(SpriteFlags::BEHIND_BG) && bg_colors[sx] != 0 {
                    continue;
                }
                pixels[sx] = shade(palette, color);
            }
        }
    }
}
