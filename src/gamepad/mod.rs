//! Gamepad report types and button-mask → report translation.

pub mod hat;
pub mod report;


pub use hat::Hat;
pub use report::{
    GamepadReport, GAMEPAD_REPORT_DESCRIPTOR, GAMEPAD_REPORT_SIZE, REPORT_ID_GAMEPAD,
};

use crate::input::{ButtonMask, LogicalButton};
use report::*;

/// Output bit for each non-directional button.
const BUTTON_MAP: [(LogicalButton, u16); 11] = [
    (LogicalButton::A, GAMEPAD_BUTTON_A),
    (LogicalButton::B, GAMEPAD_BUTTON_B),
    (LogicalButton::X, GAMEPAD_BUTTON_X),
    (LogicalButton::Y, GAMEPAD_BUTTON_Y),
    (LogicalButton::Select, GAMEPAD_BUTTON_SELECT),
    (LogicalButton::Start, GAMEPAD_BUTTON_START),
    (LogicalButton::Mode, GAMEPAD_BUTTON_MODE),
    (LogicalButton::R, GAMEPAD_BUTTON_TR),
    (LogicalButton::ZR, GAMEPAD_BUTTON_TR2),
    (LogicalButton::L, GAMEPAD_BUTTON_TL),
    (LogicalButton::ZL, GAMEPAD_BUTTON_TL2),
];

/// Translate a button mask into a gamepad report.
///
/// Total: every 15-bit mask, including physically impossible D-pad
/// combinations, maps to exactly one report.
pub fn encode(mask: ButtonMask) -> GamepadReport {
    let buttons = BUTTON_MAP
        .iter()
        .filter(|(button, _)| mask.contains(*button))
        .fold(0u16, |bits, (_, bit)| bits | bit);

    GamepadReport {
        hat: Hat::from_mask(mask),
        buttons,
        ..GamepadReport::CENTERED
    }
}
