//! 8-way hat switch (D-pad) values.

use crate::input::{ButtonMask, LogicalButton};

/// Hat switch direction as carried in byte 4 of the report.
///
/// `Centered` is outside the descriptor's logical range (1..=8), which the
/// host reads as the null state.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Hat {
    #[default]
    Centered = 0,
    Up = 1,
    UpRight = 2,
    Right = 3,
    DownRight = 4,
    Down = 5,
    DownLeft = 6,
    Left = 7,
    UpLeft = 8,
}

impl Hat {
    /// Wire value.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Direction for the four D-pad bits of `mask`.
    ///
    /// Each rule below overwrites the previous result when it matches, so
    /// later rules win. With three or four directions held the outcome is
    /// whatever the last matching rule says, e.g. Left+Up+Right is UpRight
    /// and Left+Right alone is Right.
    pub fn from_mask(mask: ButtonMask) -> Self {
        let left = mask.contains(LogicalButton::Left);
        let down = mask.contains(LogicalButton::Down);
        let up = mask.contains(LogicalButton::Up);
        let right = mask.contains(LogicalButton::Right);

        let rules = [
            (left, Hat::Left),
            (down, Hat::Down),
            (up, Hat::Up),
            (right, Hat::Right),
            (left && down, Hat::DownLeft),
            (right && down, Hat::DownRight),
            (left && up, Hat::UpLeft),
            (right && up, Hat::UpRight),
        ];

        rules
            .iter()
            .fold(Hat::Centered, |hat, &(hit, dir)| if hit { dir } else { hat })
    }
}
