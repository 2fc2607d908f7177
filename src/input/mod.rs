//! Button inputs - logical button identities and the packed button mask.
//!
//! Bit layout of a [`ButtonMask`]:
//! ```text
//! Bit 0: Left     Bit 4: A    Bit 8:  Select   Bit 11: R
//! Bit 1: Down     Bit 5: B    Bit 9:  Start    Bit 12: ZR
//! Bit 2: Up       Bit 6: X    Bit 10: Mode     Bit 13: L
//! Bit 3: Right    Bit 7: Y                     Bit 14: ZL
//! ```
//! Bit 15 is always zero.

pub mod sampler;

pub use sampler::{InputLines, Sampler};

use crate::config;

/// Number of physical buttons.
pub const BUTTON_COUNT: usize = 15;

/// Every logical button, bound to one fixed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicalButton {
    Left,
    Down,
    Up,
    Right,
    A,
    B,
    X,
    Y,
    Select,
    Start,
    Mode,
    R,
    ZR,
    L,
    ZL,
}

impl LogicalButton {
    /// All buttons in mask bit order.
    pub const ALL: [LogicalButton; BUTTON_COUNT] = [
        LogicalButton::Left,
        LogicalButton::Down,
        LogicalButton::Up,
        LogicalButton::Right,
        LogicalButton::A,
        LogicalButton::B,
        LogicalButton::X,
        LogicalButton::Y,
        LogicalButton::Select,
        LogicalButton::Start,
        LogicalButton::Mode,
        LogicalButton::R,
        LogicalButton::ZR,
        LogicalButton::L,
        LogicalButton::ZL,
    ];

    /// Bit position of this button inside a [`ButtonMask`].
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Single-bit mask for this button.
    pub const fn mask(self) -> u16 {
        1 << self.bit()
    }

    /// GPIO number the button is wired to.
    pub const fn gpio(self) -> u8 {
        match self {
            LogicalButton::Left => config::GPIO_LEFT,
            LogicalButton::Down => config::GPIO_DOWN,
            LogicalButton::Up => config::GPIO_UP,
            LogicalButton::Right => config::GPIO_RIGHT,
            LogicalButton::A => config::GPIO_BUTTON_A,
            LogicalButton::B => config::GPIO_BUTTON_B,
            LogicalButton::X => config::GPIO_BUTTON_X,
            LogicalButton::Y => config::GPIO_BUTTON_Y,
            LogicalButton::Select => config::GPIO_BUTTON_SELECT,
            LogicalButton::Start => config::GPIO_BUTTON_START,
            LogicalButton::Mode => config::GPIO_BUTTON_MODE,
            LogicalButton::R => config::GPIO_BUTTON_R,
            LogicalButton::ZR => config::GPIO_BUTTON_ZR,
            LogicalButton::L => config::GPIO_BUTTON_L,
            LogicalButton::ZL => config::GPIO_BUTTON_ZL,
        }
    }
}

/// Instantaneous state of all buttons, one bit per [`LogicalButton`].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMask(u16);

impl ButtonMask {
    /// Only the low 15 bits carry buttons.
    pub const VALID_BITS: u16 = (1 << BUTTON_COUNT) - 1;

    /// Nothing pressed.
    pub const EMPTY: Self = Self(0);

    /// Build a mask from raw bits; bits above 14 are dropped.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::VALID_BITS)
    }

    /// Build a mask with exactly the given buttons pressed.
    pub fn from_buttons(buttons: &[LogicalButton]) -> Self {
        buttons
            .iter()
            .fold(Self::EMPTY, |mask, &button| mask.with(button))
    }

    /// Copy of this mask with `button` pressed.
    pub const fn with(self, button: LogicalButton) -> Self {
        Self(self.0 | button.mask())
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, button: LogicalButton) -> bool {
        self.0 & button.mask() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_bits_follow_declaration_order() {
        for (i, button) in LogicalButton::ALL.iter().enumerate() {
            assert_eq!(button.bit() as usize, i);
        }
        assert_eq!(LogicalButton::Left.mask(), 0x0001);
        assert_eq!(LogicalButton::ZL.mask(), 0x4000);
    }

    #[test]
    fn gpio_assignment_is_a_permutation_of_5_to_19() {
        let mut seen = [false; BUTTON_COUNT];
        for button in LogicalButton::ALL {
            let gpio = button.gpio();
            assert!((5..=19).contains(&gpio));
            let slot = &mut seen[(gpio - 5) as usize];
            assert!(!*slot, "GPIO {} bound twice", gpio);
            *slot = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn mask_drops_bit_15() {
        assert_eq!(ButtonMask::from_bits(0xFFFF).bits(), 0x7FFF);
        assert!(ButtonMask::from_bits(0x8000).is_empty());
    }

    #[test]
    fn mask_from_buttons() {
        let mask = ButtonMask::from_buttons(&[LogicalButton::Up, LogicalButton::A]);
        assert_eq!(mask.bits(), 0b0000_0000_0001_0100);
        assert!(mask.contains(LogicalButton::Up));
        assert!(mask.contains(LogicalButton::A));
        assert!(!mask.contains(LogicalButton::Down));
        assert!(!mask.is_empty());
    }
}
