use super::Mmu;
use crate::ppu::OAM_SIZE;

impl Mmu {
    /// OAM DMA: copy 160 bytes from `value << 8` into OAM.
    ///
    /// The source is read through the normal decode path into a staging
    /// buffer first, so OAM changes in one step. Transfer timing and bus
    /// conflicts are not modelled.
    pub(super) fn oam_dma(&mut self, value: u8) {
        let base = u16::from(value) << 8;
        let mut staged = [0u8; OAM_SIZE];
        for (i, byte) in staged.iter_mut().enumerate() {
            *byte = self.read(base.wrapping_add(i as u16));
        }
        self.ppu.oam_load(&staged);
        self.dma_source = value;
    }
}
