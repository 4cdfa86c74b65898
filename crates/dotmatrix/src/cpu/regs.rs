use super::Cpu;

/// Registers for the Game Boy CPU (LR35902).
///
/// B/C, D/E and H/L pair up into 16-bit views, high byte first. A/F only
/// pair up for PUSH AF / POP AF.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f & 0xF0])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // Lower 4 bits of F are always zero.
        self.f = f & 0xF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.f & flag.mask() != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.f |= flag.mask();
        } else {
            self.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn clear_flag(&mut self, flag: Flag) {
        self.f &= !flag.mask();
    }
}

/// Flag bits in the F register.
///
/// - Z (0x80): result was zero
/// - N (0x40): last op was a subtraction
/// - H (0x20): carry out of bit 3 (bit 11 for 16-bit adds)
/// - C (0x10): carry out of bit 7 (bit 15), or borrow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Z = 0x80,
    N = 0x40,
    H = 0x20,
    C = 0x10,
}

impl Flag {
    #[inline]
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }
}
