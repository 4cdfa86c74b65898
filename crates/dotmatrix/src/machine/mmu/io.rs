/// Owner of an I/O register in 0xFF00..=0xFF7F.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IoHook {
    Joypad,
    Serial,
    Timer,
    InterruptFlag,
    Sound,
    Ppu,
    Dma,
    /// No side effects; stored verbatim.
    Plain,
}

const fn hook(offset: u8) -> IoHook {
    match offset {
        0x00 => IoHook::Joypad,
        0x01..=0x02 => IoHook::Serial,
        0x04..=0x07 => IoHook::Timer,
        0x0F => IoHook::InterruptFlag,
        0x10..=0x3F => IoHook::Sound,
        0x46 => IoHook::Dma,
        0x40..=0x4B => IoHook::Ppu,
        _ => IoHook::Plain,
    }
}

const fn build_table() -> [IoHook; 0x80] {
    let mut table = [IoHook::Plain; 0x80];
    let mut i = 0;
    while i < table.len() {
        table[i] = hook(i as u8);
        i += 1;
    }
    table
}

static IO_HOOKS: [IoHook; 0x80] = build_table();

impl IoHook {
    /// Hook for an address in 0xFF00..=0xFF7F.
    #[inline]
    pub fn for_address(addr: u16) -> IoHook {
        IO_HOOKS[usize::from(addr & 0x7F)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dma_is_carved_out_of_lcd_block() {
        assert_eq!(IoHook::for_address(0xFF45), IoHook::Ppu);
        assert_eq!(IoHook::for_address(0xFF46), IoHook::Dma);
        assert_eq!(IoHook::for_address(0xFF47), IoHook::Ppu);
        assert_eq!(IoHook::for_address(0xFF4C), IoHook::Plain);
        assert_eq!(IoHook::for_address(0xFF03), IoHook::Plain);
    }
}
