use crate::Interrupts;

pub const P1: u16 = 0xFF00;

/// The eight DMG buttons. Each belongs to one of the two P1 select groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    /// Bit in the group's low nibble.
    const fn bit(self) -> u8 {
        match self {
            Button::Right | Button::A => 0x01,
            Button::Left | Button::B => 0x02,
            Button::Up | Button::Select => 0x04,
            Button::Down | Button::Start => 0x08,
        }
    }

    const fn is_dpad(self) -> bool {
        matches!(self, Button::Right | Button::Left | Button::Up | Button::Down)
    }
}

/// P1 (0xFF00). Pressed buttons are held as 1 bits here and read back
/// inverted, so an idle pad reads 0xF in the low nibble.
pub struct Joypad {
    /// Bits 4 (d-pad) and 5 (buttons); 0 selects the group.
    select: u8,
    dpad: u8,
    buttons: u8,
}

impl Default for Joypad {
    fn default() -> Self {
        Self {
            select: 0x30,
            dpad: 0,
            buttons: 0,
        }
    }
}

impl Joypad {
    /// The boot ROM leaves both groups selected (P1 reads 0xCF).
    pub fn init_dmg(&mut self) {
        self.select = 0x00;
    }

    pub fn read_register(&self) -> u8 {
        let mut low = 0x0F;
        if self.select & 0x10 == 0 {
            low &= !self.dpad;
        }
        if self.select & 0x20 == 0 {
            low &= !self.buttons;
        }
        0xC0 | self.select | (low & 0x0F)
    }

    /// Only the select bits are writable.
    pub fn write_register(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    /// Update a button; a new press requests the joypad interrupt.
    pub fn set_pressed(&mut self, button: Button, pressed: bool, irq: &mut Interrupts) {
        let group = if button.is_dpad() {
            &mut self.dpad
        } else {
            &mut self.buttons
        };
        let mask = button.bit();
        if pressed {
            if *group & mask == 0 {
                irq.insert(Interrupts::JOYPAD);
            }
            *group |= mask;
        } else {
            *group &= !mask;
        }
    }
}
